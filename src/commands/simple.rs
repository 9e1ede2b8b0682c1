//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::core::{MAX_ROWS, WORD_LEN};
use crate::game::{GameSession, Readiness, SessionStatus, Snapshot, SourceError, WordSource};
use crate::output::formatters::{colored_keyboard, colored_row, share_grid};
use anyhow::{Result, bail};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::io::{BufRead, Write};
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// Block until the background loader delivers the word source
///
/// Shows a spinner on stderr while waiting, then hands the result to the
/// session.
///
/// # Errors
///
/// Returns an error if the spinner template is invalid.
pub fn wait_for_source<S: WordSource>(
    session: &mut GameSession<S>,
    loader: &Receiver<Result<S, SourceError>>,
) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message("Loading word list...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = loader.recv().unwrap_or(Err(SourceError::LoaderStopped));
    spinner.finish_and_clear();

    session.finish_loading(result);
    Ok(())
}

/// Run the simple interactive CLI mode
///
/// Each line is either a five-letter guess, `new` for a fresh round or `quit`.
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if the word source is unavailable or on an I/O error
/// reading input or writing output.
pub fn run_simple<S, R, W>(session: &mut GameSession<S>, input: R, mut output: W) -> Result<()>
where
    S: WordSource,
    R: BufRead,
    W: Write,
{
    if let Readiness::Unavailable(reason) = session.snapshot().readiness {
        bail!("Cannot start a game: {reason}");
    }

    writeln!(output, "\n{}", "W O R D L E".bright_green().bold())?;
    writeln!(
        output,
        "Guess the five-letter word in {MAX_ROWS} tries. Commands: 'new', 'quit'\n"
    )?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(output, "\nThanks for playing!")?;
                return Ok(());
            }
            "new" | "n" => {
                session.restart();
                writeln!(output, "\nNew game started!\n")?;
            }
            guess if session.snapshot().status.is_over() => {
                debug!("Ignoring '{guess}' after round end");
                writeln!(output, "Round over. Type 'new' to play again or 'quit' to exit.")?;
            }
            guess => {
                if guess.len() == WORD_LEN && guess.chars().all(|c| c.is_ascii_alphabetic()) {
                    play_guess(session, guess);
                    render(&session.snapshot(), &mut output)?;
                    if session.snapshot().status.is_over() {
                        print_summary(session, &mut output)?;
                    }
                } else {
                    writeln!(output, "Please enter a {WORD_LEN}-letter word.")?;
                }
            }
        }

        prompt(&mut output)?;
    }

    Ok(())
}

/// Replace whatever is in the current row with `guess` and submit it
fn play_guess<S: WordSource>(session: &mut GameSession<S>, guess: &str) {
    for _ in 0..WORD_LEN {
        session.delete_letter();
    }
    for ch in guess.chars() {
        session.submit_letter(ch);
    }
    session.submit_guess();
}

fn render(snapshot: &Snapshot, output: &mut impl Write) -> Result<()> {
    writeln!(output)?;
    for row in 0..snapshot.feedback.submitted() {
        let cells = std::array::from_fn(|col| snapshot.feedback.cell(row, col));
        writeln!(output, "  {}", colored_row(snapshot.board.row(row), cells))?;
    }
    writeln!(output)?;

    for line in colored_keyboard(&snapshot.hints).lines() {
        writeln!(output, "  {line}")?;
    }
    writeln!(output)?;

    if let Some(notice) = &snapshot.notice {
        let text = notice.to_string();
        let styled = match snapshot.status {
            SessionStatus::Won => text.bright_green().bold(),
            SessionStatus::Lost => text.bright_red().bold(),
            SessionStatus::InProgress | SessionStatus::NotStarted => text.yellow(),
        };
        writeln!(output, "{styled}\n")?;
    }

    Ok(())
}

fn print_summary<S: WordSource>(session: &GameSession<S>, output: &mut impl Write) -> Result<()> {
    let stats = session.statistics();

    writeln!(output, "{}\n", share_grid(&session.snapshot()))?;
    writeln!(
        output,
        "Played: {} | Win %: {:.0} | Streak: {} | Max streak: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )?;
    writeln!(output, "Type 'new' to play again or 'quit' to exit.\n")?;
    Ok(())
}

fn prompt(output: &mut impl Write) -> Result<()> {
    write!(output, "Guess: ")?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Corpus;
    use std::io::Cursor;
    use std::sync::mpsc;

    fn session() -> GameSession<Corpus> {
        GameSession::new(Corpus::from_words(&["crane"], &["slate", "place"]).unwrap())
    }

    fn play(session: &mut GameSession<Corpus>, lines: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_simple(session, Cursor::new(lines.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn winning_game_prints_summary() {
        let mut session = session();
        let out = play(&mut session, "slate\ncrane\nquit\n");

        assert!(out.contains("You win!"));
        assert!(out.contains("⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩"));
        assert!(out.contains("Played: 1 | Win %: 100"));
        assert!(out.ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn rejects_malformed_lines() {
        let mut session = session();
        let out = play(&mut session, "cran\nsl4te\n");

        assert_eq!(out.matches("Please enter a 5-letter word.").count(), 2);
        assert_eq!(session.snapshot().cursor.column, 0);
    }

    #[test]
    fn unknown_word_shows_notice_and_keeps_row() {
        let mut session = session();
        let out = play(&mut session, "zzzzz\n");

        assert!(out.contains("Not in word list: ZZZZZ"));
        assert_eq!(session.snapshot().cursor.row, 0);
    }

    #[test]
    fn new_restarts_round() {
        let mut session = session();
        let out = play(&mut session, "slate\nnew\n");

        assert!(out.contains("New game started!"));
        assert_eq!(session.snapshot().feedback.submitted(), 0);
    }

    #[test]
    fn guesses_after_round_end_are_refused() {
        let mut session = session();
        let out = play(&mut session, "crane\nslate\n");

        assert!(out.contains("Round over."));
        assert_eq!(session.snapshot().feedback.submitted(), 1);
    }

    #[test]
    fn unavailable_source_is_an_error() {
        let mut session = GameSession::<Corpus>::loading();
        session.finish_loading(Err(SourceError::EmptyCorpus));

        let result = run_simple(&mut session, Cursor::new(String::new()), Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn wait_for_source_handles_dead_loader() {
        let (tx, rx) = mpsc::channel::<Result<Corpus, SourceError>>();
        drop(tx);

        let mut session = GameSession::loading();
        wait_for_source(&mut session, &rx).unwrap();
        assert_eq!(
            session.snapshot().readiness,
            Readiness::Unavailable(SourceError::LoaderStopped.to_string())
        );
    }
}
