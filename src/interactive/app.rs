//! TUI application state and event loop

use crate::game::{GameSession, Input, Readiness, Snapshot, SourceError, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

/// How long to wait for a key before checking the loader again
const TICK: Duration = Duration::from_millis(100);

/// What a key press means for the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Play(Input),
    Ignore,
}

/// Application state
///
/// The latest snapshot is pushed in by a session observer, which also flags
/// that the screen needs redrawing.
pub struct App<S> {
    session: GameSession<S>,
    loader: Option<Receiver<Result<S, SourceError>>>,
    view: Rc<RefCell<Snapshot>>,
    redraw: Rc<Cell<bool>>,
    pub should_quit: bool,
}

impl<S: WordSource> App<S> {
    /// Start in the loading state, waiting on `loader` for the word source
    #[must_use]
    pub fn new(loader: Receiver<Result<S, SourceError>>) -> Self {
        let mut session = GameSession::loading();
        let view = Rc::new(RefCell::new(session.snapshot()));
        let redraw = Rc::new(Cell::new(true));

        let (latest, dirty) = (Rc::clone(&view), Rc::clone(&redraw));
        session.subscribe(move |snapshot: &Snapshot| {
            *latest.borrow_mut() = snapshot.clone();
            dirty.set(true);
        });

        Self {
            session,
            loader: Some(loader),
            view,
            redraw,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// The snapshot most recently published by the session
    #[must_use]
    pub fn view(&self) -> Snapshot {
        self.view.borrow().clone()
    }

    /// Hand the word source to the session once the loader has finished
    pub fn poll_loader(&mut self) {
        let Some(loader) = &self.loader else {
            return;
        };

        let result = match loader.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(SourceError::LoaderStopped),
        };

        info!("Word list loader finished");
        self.loader = None;
        self.session.finish_loading(result);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Drop the view borrow before apply, which notifies the observer
        let action = action_for(key, &self.view.borrow());
        match action {
            Action::Quit => self.should_quit = true,
            Action::Play(input) => self.session.apply(input),
            Action::Ignore => debug!("Unmapped key {:?}", key.code),
        }
    }

    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    /// Whether a redraw was requested since the last call
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }
}

/// Map a key press to an action
///
/// Quitting always works; gameplay keys only once the word source is ready.
#[must_use]
pub fn action_for(key: KeyEvent, snapshot: &Snapshot) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return Action::Quit,
        KeyCode::Char('c') if ctrl => return Action::Quit,
        _ => {}
    }

    if snapshot.readiness != Readiness::Ready {
        return Action::Ignore;
    }

    match key.code {
        KeyCode::Char('n') if ctrl => Action::Play(Input::Restart),
        KeyCode::Enter if snapshot.status.is_over() => {
            Action::Play(Input::Restart)
        }
        KeyCode::Enter => Action::Play(Input::Submit),
        KeyCode::Backspace => Action::Play(Input::Delete),
        KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => Action::Play(Input::Letter(c)),
        _ => Action::Ignore,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource>(mut app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource,
{
    loop {
        app.poll_loader();

        if app.take_redraw() {
            terminal.draw(|f| super::rendering::ui(f, &*app))?;
        }

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(..) => app.request_redraw(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
