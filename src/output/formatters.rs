//! Formatting utilities for terminal output

use crate::core::WORD_LEN;
use crate::game::{CellState, GuessRow, LetterHints, Snapshot};
use colored::{ColoredString, Colorize};

/// QWERTY layout used for the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Emoji grid of every submitted row, one row per line
#[must_use]
pub fn share_grid(snapshot: &Snapshot) -> String {
    snapshot
        .feedback
        .rows_submitted()
        .map(|pattern| pattern.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one board row as coloured letter tiles
#[must_use]
pub fn colored_row(row: &GuessRow, cells: [CellState; WORD_LEN]) -> String {
    row.letters()
        .iter()
        .zip(cells)
        .map(|(letter, cell)| tile(letter.unwrap_or('_'), cell).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the keyboard, each letter coloured by its best known feedback
#[must_use]
pub fn colored_keyboard(hints: &LetterHints) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .chars()
                .map(|c| {
                    let cell = hints.get(c).map_or(CellState::Unset, CellState::from);
                    key(c, cell).to_string()
                })
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn tile(letter: char, cell: CellState) -> ColoredString {
    let text = format!(" {letter} ");
    match cell {
        CellState::Correct => text.black().on_green().bold(),
        CellState::Present => text.black().on_yellow().bold(),
        CellState::Absent => text.white().on_bright_black(),
        CellState::Unset => text.normal(),
    }
}

fn key(letter: char, cell: CellState) -> ColoredString {
    let text = letter.to_string();
    match cell {
        CellState::Correct => text.green().bold(),
        CellState::Present => text.yellow().bold(),
        CellState::Absent => text.bright_black(),
        CellState::Unset => text.normal(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;
    use crate::wordlists::Corpus;

    fn played(words: &[&str]) -> Snapshot {
        let corpus = Corpus::from_words(&["crane"], &["slate", "place"]).unwrap();
        let mut session = GameSession::new(corpus);
        for word in words {
            for ch in word.chars() {
                session.submit_letter(ch);
            }
            session.submit_guess();
        }
        session.snapshot()
    }

    #[test]
    fn share_grid_lists_submitted_rows() {
        let snapshot = played(&["slate", "place", "crane"]);
        assert_eq!(
            share_grid(&snapshot),
            "⬜⬜🟩⬜🟩\n⬜⬜🟩🟨🟩\n🟩🟩🟩🟩🟩"
        );
    }

    #[test]
    fn share_grid_empty_before_first_guess() {
        assert_eq!(share_grid(&played(&[])), "");
    }

    #[test]
    fn plain_row_and_keyboard_text() {
        colored::control::set_override(false);
        let snapshot = played(&["slate"]);

        let cells = std::array::from_fn(|col| snapshot.feedback.cell(0, col));
        assert_eq!(
            colored_row(snapshot.board.row(0), cells),
            " S   L   A   T   E "
        );

        let keyboard = colored_keyboard(&snapshot.hints);
        assert_eq!(keyboard.lines().count(), 3);
        assert!(keyboard.starts_with("Q W E R T Y U I O P"));
        assert!(keyboard.ends_with("  Z X C V B N M"));
    }
}
