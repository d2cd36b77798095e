use derive_more::{Display, Error};
use std::fmt;

/// Number of letters in every secret word and every guess
pub const WORD_LENGTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordError {
    #[display("expected {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[display("'{letter}' is not a letter")]
    NotALetter { letter: char },
}

/// The answer for one session. Always `WORD_LENGTH` lowercase ASCII letters.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SecretWord {
    letters: [char; WORD_LENGTH],
}

impl SecretWord {
    pub fn new(word: &str) -> Result<Self, WordError> {
        let actual = word.chars().count();
        if actual != WORD_LENGTH {
            return Err(WordError::WrongLength {
                expected: WORD_LENGTH,
                actual,
            });
        }

        let mut letters = ['a'; WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(word.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::NotALetter { letter: c });
            }
            *slot = c.to_ascii_lowercase();
        }

        Ok(Self { letters })
    }

    pub fn letters(&self) -> &[char; WORD_LENGTH] {
        &self.letters
    }

    pub fn matches(&self, guess: &str) -> bool {
        guess.chars().eq(self.letters.iter().copied())
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

// Keep the answer out of log lines that format the game with {:?}
impl fmt::Debug for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretWord(*****)")
    }
}

impl std::str::FromStr for SecretWord {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
