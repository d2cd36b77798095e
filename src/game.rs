use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

use crate::word::{SecretWord, WORD_LENGTH};

/// Number of guesses the player gets
pub const MAX_ROWS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum_macros::Display)]
pub enum Outcome {
    Win,
    Loss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Playing,
    /// terminal, nothing moves after this
    Over(Outcome),
}

/// Why an operation was turned into a no-op. None of these are shown to the
/// player; the gates in [`crate::gating`] keep the UI from asking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum IllegalTransition {
    #[display("the game is over")]
    GameOver,
    #[display("row is full")]
    RowFull,
    #[display("row is empty")]
    RowEmpty,
    #[display("row has {len} of {} letters", WORD_LENGTH)]
    RowIncomplete { len: usize },
    #[display("'{letter}' is not a letter")]
    NotALetter { letter: char },
}

/// One guess slot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    letters: String,
}

impl Row {
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() == WORD_LENGTH
    }
}

impl AsRef<str> for Row {
    fn as_ref(&self) -> &str {
        &self.letters
    }
}

/// A single session: the secret, six rows, and where the player is.
///
/// Rows before `active_row` are frozen guesses, the row at `active_row` is
/// being typed, and everything after it is untouched. Once the game is over
/// `active_row` has moved past the last submitted row, so every guess made
/// sits strictly before it.
#[derive(Debug, Clone)]
pub struct Game {
    secret: SecretWord,
    rows: [Row; MAX_ROWS],
    active_row: usize,
    status: Status,
}

impl Game {
    #[instrument]
    pub fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            rows: Default::default(),
            active_row: 0,
            status: Status::Playing,
        }
    }

    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    pub fn rows(&self) -> &[Row; MAX_ROWS] {
        &self.rows
    }

    /// Zero-based index of the row taking input. Equals the number of
    /// submitted rows, and may be `MAX_ROWS` once the game is over.
    pub fn active_row(&self) -> usize {
        self.active_row
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Playing => None,
            Status::Over(outcome) => Some(outcome),
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Over(_))
    }

    /// The row currently being typed, if the game is still running
    pub fn current(&self) -> Option<&Row> {
        match self.status {
            Status::Playing => self.rows.get(self.active_row),
            Status::Over(_) => None,
        }
    }

    pub fn submitted(&self) -> &[Row] {
        &self.rows[..self.active_row.min(MAX_ROWS)]
    }

    pub fn is_submitted(&self, row: usize) -> bool {
        row < self.active_row
    }

    fn current_mut(&mut self) -> Result<&mut Row, IllegalTransition> {
        match self.status {
            Status::Playing => self
                .rows
                .get_mut(self.active_row)
                .ok_or(IllegalTransition::GameOver),
            Status::Over(_) => Err(IllegalTransition::GameOver),
        }
    }

    #[instrument(level = "debug", skip(self), fields(row = self.active_row))]
    pub fn type_char(&mut self, c: char) -> Result<(), IllegalTransition> {
        let row = self.current_mut()?;
        if !c.is_ascii_alphabetic() {
            return Err(IllegalTransition::NotALetter { letter: c });
        }
        if row.is_full() {
            return Err(IllegalTransition::RowFull);
        }
        row.letters.push(c.to_ascii_lowercase());
        Ok(())
    }

    #[instrument(level = "debug", skip(self), fields(row = self.active_row))]
    pub fn delete_char(&mut self) -> Result<(), IllegalTransition> {
        let row = self.current_mut()?;
        row.letters.pop().ok_or(IllegalTransition::RowEmpty)?;
        Ok(())
    }

    /// Freeze the active row and decide what happens next.
    ///
    /// A correct guess wins, a wrong guess on the last row loses, and
    /// anything else moves on to the next row. The active row advances in
    /// every case so the frozen guess is scored for display.
    #[instrument(level = "debug", skip(self), fields(row = self.active_row))]
    pub fn submit_row(&mut self) -> Result<Status, IllegalTransition> {
        let len = self.current_mut()?.len();
        if len != WORD_LENGTH {
            return Err(IllegalTransition::RowIncomplete { len });
        }

        let won = self.secret.matches(self.rows[self.active_row].as_str());
        let last_row = self.active_row + 1 == MAX_ROWS;
        self.active_row += 1;

        self.status = if won {
            Status::Over(Outcome::Win)
        } else if last_row {
            Status::Over(Outcome::Loss)
        } else {
            Status::Playing
        };

        match self.status {
            Status::Over(outcome) => info!(%outcome, guesses = self.active_row, "game over"),
            Status::Playing => debug!(next_row = self.active_row, "row submitted"),
        }

        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn game() -> Game {
        Game::new(SecretWord::new("taffy").unwrap())
    }

    fn type_word(game: &mut Game, word: &str) {
        for c in word.chars() {
            game.type_char(c).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = game();
        assert_eq!(game.active_row(), 0);
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.outcome(), None);
        assert!(game.rows().iter().all(Row::is_empty));
        assert!(game.submitted().is_empty());
    }

    #[test]
    fn test_type_char() {
        let mut game = game();
        game.type_char('c').unwrap();
        game.type_char('R').unwrap();
        assert_eq!(game.current().unwrap().as_str(), "cr");
    }

    #[test]
    fn test_type_past_word_length_is_rejected() {
        let mut game = game();
        type_word(&mut game, "crane");
        assert_matches!(game.type_char('s'), Err(IllegalTransition::RowFull));
        assert_eq!(game.current().unwrap().as_str(), "crane");
    }

    #[test]
    fn test_type_non_letter_is_rejected() {
        let mut game = game();
        assert_matches!(
            game.type_char('3'),
            Err(IllegalTransition::NotALetter { letter: '3' })
        );
        assert!(game.current().unwrap().is_empty());
    }

    #[test]
    fn test_delete_char() {
        let mut game = game();
        type_word(&mut game, "cr");
        game.delete_char().unwrap();
        assert_eq!(game.current().unwrap().as_str(), "c");
        game.delete_char().unwrap();
        assert_matches!(game.delete_char(), Err(IllegalTransition::RowEmpty));
        assert!(game.current().unwrap().is_empty());
    }

    #[test]
    fn test_submit_incomplete_row_is_rejected() {
        let mut game = game();
        type_word(&mut game, "cra");
        assert_matches!(
            game.submit_row(),
            Err(IllegalTransition::RowIncomplete { len: 3 })
        );
        assert_eq!(game.active_row(), 0);

        let mut empty = self::game();
        assert_matches!(
            empty.submit_row(),
            Err(IllegalTransition::RowIncomplete { len: 0 })
        );
    }

    #[test]
    fn test_submit_advances_row() {
        let mut game = game();
        type_word(&mut game, "crane");
        assert_eq!(game.submit_row(), Ok(Status::Playing));
        assert_eq!(game.active_row(), 1);
        assert!(game.is_submitted(0));
        assert!(!game.is_submitted(1));
        assert!(game.current().unwrap().is_empty());
        assert_eq!(game.submitted()[0].as_str(), "crane");
    }

    #[test]
    fn test_submitted_row_is_frozen() {
        let mut game = game();
        type_word(&mut game, "crane");
        game.submit_row().unwrap();
        assert_matches!(game.delete_char(), Err(IllegalTransition::RowEmpty));
        assert_eq!(game.rows()[0].as_str(), "crane");
    }

    #[test]
    fn test_win_on_first_row() {
        let mut game = game();
        type_word(&mut game, "taffy");
        assert_eq!(game.submit_row(), Ok(Status::Over(Outcome::Win)));
        assert_eq!(game.outcome(), Some(Outcome::Win));
        assert_eq!(game.active_row(), 1);
        assert!(game.current().is_none());
    }

    #[test]
    fn test_win_is_case_insensitive() {
        let mut game = game();
        type_word(&mut game, "TAFFY");
        assert_eq!(game.submit_row(), Ok(Status::Over(Outcome::Win)));
    }

    #[test]
    fn test_loss_after_six_rows() {
        let mut game = game();
        for attempt in 0..MAX_ROWS {
            type_word(&mut game, "crane");
            let status = game.submit_row().unwrap();
            if attempt + 1 < MAX_ROWS {
                assert_eq!(status, Status::Playing);
            } else {
                assert_eq!(status, Status::Over(Outcome::Loss));
            }
        }
        assert_eq!(game.active_row(), MAX_ROWS);
        assert_eq!(game.submitted().len(), MAX_ROWS);
    }

    #[test]
    fn test_win_on_last_row() {
        let mut game = game();
        for _ in 0..MAX_ROWS - 1 {
            type_word(&mut game, "crane");
            game.submit_row().unwrap();
        }
        type_word(&mut game, "taffy");
        assert_eq!(game.submit_row(), Ok(Status::Over(Outcome::Win)));
    }

    #[test]
    fn test_everything_is_rejected_when_over() {
        let mut game = game();
        type_word(&mut game, "taffy");
        game.submit_row().unwrap();

        assert_matches!(game.type_char('a'), Err(IllegalTransition::GameOver));
        assert_matches!(game.delete_char(), Err(IllegalTransition::GameOver));
        assert_matches!(game.submit_row(), Err(IllegalTransition::GameOver));
        assert_eq!(game.active_row(), 1);
        assert!(game.rows()[1].is_empty());
        assert_eq!(game.outcome(), Some(Outcome::Win));
    }

    #[test]
    fn test_rows_after_active_stay_empty() {
        let mut game = game();
        type_word(&mut game, "crane");
        game.submit_row().unwrap();
        type_word(&mut game, "sl");
        assert!(game.rows()[2..].iter().all(Row::is_empty));
    }

    #[test]
    fn test_illegal_transition_display() {
        assert_eq!(
            IllegalTransition::RowIncomplete { len: 3 }.to_string(),
            "row has 3 of 5 letters"
        );
        assert_eq!(IllegalTransition::GameOver.to_string(), "the game is over");
    }
}
