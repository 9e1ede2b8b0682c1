//! Game session: the owned state machine behind every presentation layer

use super::round::{Input, Round, SessionStatus};
use super::snapshot::{Readiness, Snapshot};
use super::source::{SourceError, WordSource};
use super::stats::Statistics;
use crate::core::Word;
use log::{debug, info, warn};

/// Receives a fresh snapshot after every session call that may change state
pub trait SessionObserver {
    fn on_snapshot(&mut self, snapshot: &Snapshot);
}

impl<F: FnMut(&Snapshot)> SessionObserver for F {
    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        self(snapshot);
    }
}

/// Handle returned by [`GameSession::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Phase {
    Loading,
    Unavailable(SourceError),
    Ready(Round),
}

/// A playable session
///
/// Owns the current round, the injected word source and in-memory
/// statistics. Inputs are processed one at a time, each to completion; a
/// round is replaced wholesale per input so observers only ever see whole
/// states.
///
/// # Examples
/// ```
/// use wordle_game::game::{GameSession, SessionStatus};
/// use wordle_game::wordlists::Corpus;
///
/// let corpus = Corpus::from_words(&["crane"], &["slate"]).unwrap();
/// let mut session = GameSession::new(corpus);
///
/// for ch in "crane".chars() {
///     session.submit_letter(ch);
/// }
/// session.submit_guess();
///
/// assert_eq!(session.snapshot().status, SessionStatus::Won);
/// ```
pub struct GameSession<S> {
    source: Option<S>,
    phase: Phase,
    stats: Statistics,
    observers: Vec<(SubscriptionId, Box<dyn SessionObserver>)>,
    next_subscription: u64,
}

impl<S: WordSource> GameSession<S> {
    /// Create a session whose word source is already available
    ///
    /// If the first secret cannot be drawn the session is unavailable.
    #[must_use]
    pub fn new(source: S) -> Self {
        let mut session = Self::loading();
        session.finish_loading(Ok(source));
        session
    }

    /// Create a session that waits for its word source
    ///
    /// Gameplay input is ignored until [`finish_loading`](Self::finish_loading)
    /// is called; snapshots report [`Readiness::Loading`] meanwhile.
    #[must_use]
    pub fn loading() -> Self {
        Self {
            source: None,
            phase: Phase::Loading,
            stats: Statistics::default(),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Complete the one-shot load of the word source
    ///
    /// Only the first call has an effect.
    pub fn finish_loading(&mut self, result: Result<S, SourceError>) {
        if !matches!(self.phase, Phase::Loading) {
            warn!("Word source already loaded, ignoring second load");
            return;
        }

        match result {
            Ok(source) => {
                info!("Word source ready");
                self.source = Some(source);
                self.start_round();
            }
            Err(err) => {
                warn!("Word source unavailable: {err}");
                self.phase = Phase::Unavailable(err);
            }
        }

        self.notify();
    }

    /// Type a letter into the current row
    pub fn submit_letter(&mut self, ch: char) {
        self.apply(Input::Letter(ch));
    }

    /// Remove the last letter of the current row
    pub fn delete_letter(&mut self) {
        self.apply(Input::Delete);
    }

    /// Submit the current row as a guess
    pub fn submit_guess(&mut self) {
        self.apply(Input::Submit);
    }

    /// Start a new round with a freshly drawn secret, in any state
    pub fn restart(&mut self) {
        self.apply(Input::Restart);
    }

    /// Process one input and notify observers
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Restart => self.restart_round(),
            _ => self.play(input),
        }
        self.notify();
    }

    /// Current state for rendering
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        match &self.phase {
            Phase::Loading => Snapshot::empty(Readiness::Loading),
            Phase::Unavailable(err) => Snapshot::empty(Readiness::Unavailable(err.to_string())),
            Phase::Ready(round) => Snapshot {
                readiness: Readiness::Ready,
                board: *round.board(),
                feedback: *round.feedback(),
                cursor: round.cursor(),
                status: round.status(),
                notice: round.notice().cloned(),
                hints: *round.hints(),
            },
        }
    }

    /// The secret word, once the round is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        match &self.phase {
            Phase::Ready(round) if round.status().is_over() => Some(round.secret()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.stats
    }

    /// Register an observer, called after every input and after loading
    pub fn subscribe(&mut self, observer: impl SessionObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    fn play(&mut self, input: Input) {
        let (Phase::Ready(round), Some(source)) = (&mut self.phase, &self.source) else {
            debug!("Ignoring {input:?}: word source not ready");
            return;
        };

        let Some(next) = round.reduce(input, |word| source.is_valid(word)) else {
            return;
        };

        match next.status() {
            SessionStatus::Won => self.stats.record_win(next.cursor().row + 1),
            SessionStatus::Lost => self.stats.record_loss(),
            SessionStatus::InProgress | SessionStatus::NotStarted => {}
        }
        *round = next;
    }

    fn restart_round(&mut self) {
        if self.source.is_none() {
            debug!("Ignoring restart: word source not loaded");
            return;
        }
        self.start_round();
    }

    fn start_round(&mut self) {
        let Some(source) = self.source.as_mut() else {
            return;
        };

        self.phase = match source.draw_secret() {
            Ok(secret) => {
                info!("Starting new round");
                Phase::Ready(Round::new(secret))
            }
            Err(err) => {
                warn!("Could not draw a secret word: {err}");
                Phase::Unavailable(err)
            }
        };
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, observer) in &mut self.observers {
            observer.on_snapshot(&snapshot);
        }
    }
}
