// Integration tests for the wordle_game library
// These drive GameSession and the simple CLI through the public API only

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;
use wordle_game::commands::run_simple;
use wordle_game::core::{Feedback, MAX_ROWS, Pattern, WORD_LEN, Word};
use wordle_game::game::{
    CellState, GameSession, Input, Notice, Readiness, SessionStatus, Snapshot, SourceError,
    WordSource,
};
use wordle_game::wordlists::Corpus;

use Feedback::{Absent as A, Correct as C, Present as P};

const WRONG_GUESSES: [&str; 6] = ["slate", "place", "ghost", "audio", "fizzy", "pound"];

fn crane_session() -> GameSession<Corpus> {
    GameSession::new(Corpus::from_words(&["crane"], &WRONG_GUESSES).unwrap())
}

fn guess<S: WordSource>(session: &mut GameSession<S>, word: &str) {
    for ch in word.chars() {
        session.submit_letter(ch);
    }
    session.submit_guess();
}

#[test]
fn crane_scenario_wins_on_third_row() {
    let mut session = crane_session();

    guess(&mut session, "slate");
    guess(&mut session, "place");
    guess(&mut session, "crane");

    let snapshot = session.snapshot();
    assert_eq!(snapshot.feedback.row(0), Some(Pattern::new([A, A, C, A, C])));
    assert_eq!(snapshot.feedback.row(1), Some(Pattern::new([A, A, C, P, C])));
    assert_eq!(snapshot.feedback.row(2), Some(Pattern::PERFECT));
    assert_eq!(snapshot.feedback.row(3), None);

    assert_eq!(snapshot.status, SessionStatus::Won);
    assert_eq!(snapshot.cursor.row, 2);
    assert_eq!(snapshot.notice, Some(Notice::Won { guesses: 3 }));
    assert_eq!(session.revealed_secret().map(Word::text), Some("CRANE"));

    // Nothing moves once the round is over
    guess(&mut session, "slate");
    assert_eq!(session.snapshot(), snapshot);
}

#[test]
fn duplicate_letters_use_two_pass_scoring() {
    let secret = Word::new("speed").unwrap();
    let guess = Word::new("erase").unwrap();
    assert_eq!(
        Pattern::calculate(&guess, &secret),
        Pattern::new([P, A, A, P, P])
    );

    let secret = Word::new("crane").unwrap();
    let guess = Word::new("eerie").unwrap();
    assert_eq!(
        Pattern::calculate(&guess, &secret),
        Pattern::new([A, A, P, A, C])
    );
}

#[test]
fn lost_exactly_on_last_row() {
    let mut session = crane_session();
    session.restart();

    for (row, word) in WRONG_GUESSES.iter().enumerate() {
        assert_eq!(session.snapshot().status, SessionStatus::InProgress);
        assert!(session.revealed_secret().is_none());
        guess(&mut session, word);
        assert_eq!(session.snapshot().feedback.submitted(), row + 1);
    }

    let snapshot = session.snapshot();
    assert_eq!(snapshot.feedback.submitted(), MAX_ROWS);
    assert_eq!(snapshot.status, SessionStatus::Lost);
    assert_eq!(
        snapshot.notice.map(|n| n.to_string()),
        Some("Game over! The word was CRANE".to_string())
    );
    assert_eq!(session.statistics().games_played, 1);
    assert_eq!(session.statistics().games_won, 0);
}

#[test]
fn invalid_word_keeps_board_and_cursor() {
    let mut session = crane_session();
    for ch in "qxzvj".chars() {
        session.submit_letter(ch);
    }
    let before = session.snapshot();

    session.submit_guess();
    let after = session.snapshot();

    assert_eq!(after.board, before.board);
    assert_eq!(after.cursor, before.cursor);
    assert_eq!(after.feedback.submitted(), 0);
    assert_eq!(after.status, SessionStatus::InProgress);
    assert_eq!(after.notice, Some(Notice::InvalidWord("QXZVJ".to_string())));
}

#[test]
fn editing_boundaries_are_no_ops() {
    let mut session = crane_session();

    session.delete_letter();
    assert_eq!(session.snapshot().cursor.column, 0);

    for ch in "cran".chars() {
        session.submit_letter(ch);
    }
    let partial = session.snapshot();
    session.submit_guess();
    assert_eq!(session.snapshot(), partial);

    session.submit_letter('e');
    let full = session.snapshot();
    assert_eq!(full.cursor.column, WORD_LEN);
    session.submit_letter('s');
    assert_eq!(session.snapshot(), full);
}

#[test]
fn snapshot_is_idempotent() {
    let mut session = crane_session();
    guess(&mut session, "slate");
    assert_eq!(session.snapshot(), session.snapshot());
}

#[test]
fn restart_clears_board_and_keeps_stats() {
    let mut session = crane_session();
    guess(&mut session, "crane");
    session.restart();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.status, SessionStatus::InProgress);
    assert_eq!(snapshot.feedback.submitted(), 0);
    assert_eq!(snapshot.cursor.row, 0);
    assert_eq!(snapshot.hints.get('C'), None);
    assert_eq!(session.statistics().games_won, 1);
    assert_eq!(session.statistics().guess_distribution[0], 1);
}

#[test]
fn letter_hints_follow_feedback() {
    let mut session = crane_session();
    guess(&mut session, "place");
    guess(&mut session, "slate");

    let hints = session.snapshot().hints;
    assert_eq!(hints.get('a'), Some(C));
    assert_eq!(hints.get('C'), Some(P));
    assert_eq!(hints.get('S'), Some(A));
    assert_eq!(hints.get('Q'), None);
}

#[test]
fn loading_then_unavailable() {
    let mut session: GameSession<Corpus> = GameSession::loading();
    session.submit_letter('a');
    assert_eq!(session.snapshot().readiness, Readiness::Loading);
    assert_eq!(session.snapshot().cursor.column, 0);
    assert_eq!(session.snapshot().status, SessionStatus::NotStarted);

    session.finish_loading(Err(SourceError::EmptyCorpus));
    let snapshot = session.snapshot();
    assert_eq!(snapshot.status, SessionStatus::NotStarted);
    assert_eq!(
        snapshot.readiness,
        Readiness::Unavailable("Word list contains no playable words".to_string())
    );
    assert!(!snapshot.accepts_input());
}

#[test]
fn observers_see_every_call_until_unsubscribed() {
    let mut session = crane_session();
    let seen: Rc<RefCell<Vec<Snapshot>>> = Rc::default();

    let sink = Rc::clone(&seen);
    let id = session.subscribe(move |snapshot: &Snapshot| sink.borrow_mut().push(snapshot.clone()));

    session.apply(Input::Letter('c'));
    session.apply(Input::Delete);
    session.apply(Input::Delete);
    assert_eq!(seen.borrow().len(), 3);
    assert_eq!(seen.borrow()[0].board.row(0).letter(0), Some('C'));
    assert_eq!(seen.borrow()[2], session.snapshot());

    assert!(session.unsubscribe(id));
    session.submit_letter('c');
    assert_eq!(seen.borrow().len(), 3);
    assert!(!session.unsubscribe(id));
}

/// Hands out secrets in order, then runs dry
struct Sequence(Vec<&'static str>);

impl WordSource for Sequence {
    fn draw_secret(&mut self) -> Result<Word, SourceError> {
        if self.0.is_empty() {
            return Err(SourceError::EmptyCorpus);
        }
        Word::new(self.0.remove(0)).map_err(|_| SourceError::EmptyCorpus)
    }

    fn is_valid(&self, _word: &str) -> bool {
        true
    }
}

#[test]
fn custom_source_draws_each_round() {
    let mut session = GameSession::new(Sequence(vec!["crane", "slate"]));
    guess(&mut session, "crane");
    assert_eq!(session.snapshot().status, SessionStatus::Won);

    session.restart();
    guess(&mut session, "slate");
    assert_eq!(session.snapshot().status, SessionStatus::Won);

    session.restart();
    assert!(matches!(
        session.snapshot().readiness,
        Readiness::Unavailable(_)
    ));
}

#[test]
fn simple_cli_plays_a_full_round() {
    colored::control::set_override(false);
    let mut session = crane_session();
    let mut out = Vec::new();

    run_simple(
        &mut session,
        Cursor::new("slate\nqxzvj\ncrane\nnew\nquit\n"),
        &mut out,
    )
    .unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Not in word list: QXZVJ"));
    assert!(out.contains("You win!"));
    assert!(out.contains("New game started!"));
    assert_eq!(session.statistics().games_won, 1);
    assert_eq!(session.snapshot().feedback.submitted(), 0);
    assert_eq!(session.snapshot().feedback.cell(0, 0), CellState::Unset);
}
