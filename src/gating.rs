//! Which inputs the current state can accept.
//!
//! Everything here is recomputed from a [`Game`] on demand; nothing is stored.
//! The UI consults the gates before calling into the state machine, so the
//! state machine's own no-op paths are a backstop rather than the main line.

use crate::game::{Game, Status};
use crate::word::WORD_LENGTH;

fn active_len(game: &Game, row: usize) -> Option<usize> {
    (row == game.active_row())
        .then(|| game.rows().get(row).map(|r| r.len()))
        .flatten()
}

pub fn is_row_full(game: &Game, row: usize) -> bool {
    active_len(game, row) == Some(WORD_LENGTH)
}

pub fn is_row_empty(game: &Game, row: usize) -> bool {
    active_len(game, row) == Some(0)
}

pub fn can_type_more(game: &Game, row: usize) -> bool {
    active_len(game, row).is_some_and(|len| len < WORD_LENGTH)
}

/// Control states for the keyboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gates {
    pub submit: bool,
    pub delete: bool,
    pub letters: bool,
}

impl Gates {
    pub fn project(game: &Game) -> Self {
        if game.status() != Status::Playing {
            return Self::default();
        }
        let row = game.active_row();
        Self {
            submit: is_row_full(game, row),
            delete: !is_row_empty(game, row),
            letters: can_type_more(game, row),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_ROWS;
    use crate::word::SecretWord;

    fn game() -> Game {
        Game::new(SecretWord::new("taffy").unwrap())
    }

    fn type_word(game: &mut Game, word: &str) {
        for c in word.chars() {
            game.type_char(c).unwrap();
        }
    }

    #[test]
    fn test_fresh_game() {
        let game = game();
        assert!(is_row_empty(&game, 0));
        assert!(can_type_more(&game, 0));
        assert!(!is_row_full(&game, 0));
        assert_eq!(
            Gates::project(&game),
            Gates {
                submit: false,
                delete: false,
                letters: true,
            }
        );
    }

    #[test]
    fn test_partial_row() {
        let mut game = game();
        type_word(&mut game, "cra");
        assert_eq!(
            Gates::project(&game),
            Gates {
                submit: false,
                delete: true,
                letters: true,
            }
        );
    }

    #[test]
    fn test_full_row() {
        let mut game = game();
        type_word(&mut game, "crane");
        assert!(is_row_full(&game, 0));
        assert!(!can_type_more(&game, 0));
        assert_eq!(
            Gates::project(&game),
            Gates {
                submit: true,
                delete: true,
                letters: false,
            }
        );
    }

    #[test]
    fn test_only_the_active_row_counts() {
        let mut game = game();
        type_word(&mut game, "crane");
        game.submit_row().unwrap();

        // row 0 is full but frozen, row 2 is empty but not yet reached
        assert!(!is_row_full(&game, 0));
        assert!(!is_row_empty(&game, 2));
        assert!(!can_type_more(&game, 2));
        assert!(is_row_empty(&game, 1));
        assert!(!is_row_empty(&game, MAX_ROWS + 3));
    }

    #[test]
    fn test_everything_closed_when_over() {
        let mut game = game();
        type_word(&mut game, "taffy");
        game.submit_row().unwrap();
        assert_eq!(Gates::project(&game), Gates::default());
    }

    #[test]
    fn test_closed_after_loss() {
        let mut game = game();
        for _ in 0..MAX_ROWS {
            type_word(&mut game, "crane");
            game.submit_row().unwrap();
        }
        assert_eq!(Gates::project(&game), Gates::default());
        // active row index points past the grid
        assert!(!can_type_more(&game, MAX_ROWS));
    }
}
