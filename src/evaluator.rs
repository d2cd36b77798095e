use derive_more::{Display, Error};
use tracing::error;

use crate::word::{SecretWord, WORD_LENGTH};

/// Verdict for one letter of a submitted guess
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Classification {
    /// right letter, right position
    Exact,
    /// in the word, but somewhere else
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EvalError {
    #[display("expected {} letters each, got secret {secret} and guess {guess}", WORD_LENGTH)]
    InvalidLength { secret: usize, guess: usize },
}

/// Score `guess` against `secret`, one classification per position.
///
/// Both words must be `WORD_LENGTH` letters long. Letters are compared
/// without regard to ASCII case.
///
/// Exact matches are resolved first and consume their secret letter. The
/// remaining positions are then scanned left to right, and each one may only
/// claim a secret letter nobody has consumed yet, so a duplicated letter is
/// never marked more often than it occurs in the secret.
pub fn evaluate(secret: &str, guess: &str) -> Result<Vec<Classification>, EvalError> {
    let secret: Vec<char> = secret.chars().map(|c| c.to_ascii_lowercase()).collect();
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_lowercase()).collect();

    if secret.len() != WORD_LENGTH || guess.len() != WORD_LENGTH {
        return Err(EvalError::InvalidLength {
            secret: secret.len(),
            guess: guess.len(),
        });
    }

    let mut result = vec![Classification::Absent; guess.len()];
    let mut consumed = vec![false; secret.len()];

    for (idx, (g, s)) in guess.iter().zip(&secret).enumerate() {
        if g == s {
            result[idx] = Classification::Exact;
            consumed[idx] = true;
        }
    }

    for (idx, g) in guess.iter().enumerate() {
        if result[idx] == Classification::Exact {
            continue;
        }
        let unclaimed = secret
            .iter()
            .zip(consumed.iter_mut())
            .find(|(s, used)| !**used && *s == g);
        if let Some((_, used)) = unclaimed {
            *used = true;
            result[idx] = Classification::Present;
        }
    }

    Ok(result)
}

/// Display-path scoring. A length mismatch cannot come out of the state
/// machine, so if it ever does it is logged and the row renders all absent.
pub fn score(secret: &SecretWord, guess: &str) -> Vec<Classification> {
    let secret = secret.to_string();
    match evaluate(&secret, guess) {
        Ok(classes) => classes,
        Err(err) => {
            error!(%err, guess, "refusing to score guess");
            vec![Classification::Absent; secret.chars().count()]
        }
    }
}
