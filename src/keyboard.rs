use std::collections::BTreeMap;

use crate::evaluator::{score, Classification};
use crate::word::SecretWord;

/// Keys of the on-screen keyboard, top to bottom
pub const KEYBOARD_ROWS: [&[Key]; 3] = [
    &[
        Key::Letter('q'),
        Key::Letter('w'),
        Key::Letter('e'),
        Key::Letter('r'),
        Key::Letter('t'),
        Key::Letter('y'),
        Key::Letter('u'),
        Key::Letter('i'),
        Key::Letter('o'),
        Key::Letter('p'),
    ],
    &[
        Key::Letter('a'),
        Key::Letter('s'),
        Key::Letter('d'),
        Key::Letter('f'),
        Key::Letter('g'),
        Key::Letter('h'),
        Key::Letter('j'),
        Key::Letter('k'),
        Key::Letter('l'),
    ],
    &[
        Key::Enter,
        Key::Letter('z'),
        Key::Letter('x'),
        Key::Letter('c'),
        Key::Letter('v'),
        Key::Letter('b'),
        Key::Letter('n'),
        Key::Letter('m'),
        Key::Backspace,
    ],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    pub fn label(&self) -> String {
        match self {
            Key::Letter(c) => c.to_ascii_uppercase().to_string(),
            Key::Enter => "ENTER".to_string(),
            Key::Backspace => "⌫".to_string(),
        }
    }
}

/// What the keyboard knows about a letter. Ordered so that a later guess can
/// only move a letter upwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LetterHint {
    #[default]
    Unused,
    Absent,
    Present,
    Exact,
}

impl From<Classification> for LetterHint {
    fn from(class: Classification) -> Self {
        match class {
            Classification::Exact => LetterHint::Exact,
            Classification::Present => LetterHint::Present,
            Classification::Absent => LetterHint::Absent,
        }
    }
}

/// Per-letter hints for a-z
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardHints {
    hints: BTreeMap<char, LetterHint>,
}

impl Default for KeyboardHints {
    fn default() -> Self {
        Self {
            hints: ('a'..='z').map(|c| (c, LetterHint::Unused)).collect(),
        }
    }
}

impl KeyboardHints {
    pub fn hint(&self, letter: char) -> LetterHint {
        self.hints
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, LetterHint)> + '_ {
        self.hints.iter().map(|(c, h)| (*c, *h))
    }

    fn fold(&mut self, letter: char, class: Classification) {
        if let Some(current) = self.hints.get_mut(&letter) {
            *current = (*current).max(LetterHint::from(class));
        }
    }
}

/// Fold every submitted guess into per-letter hints. Only frozen rows belong
/// here; the row still being typed has not been scored.
pub fn aggregate<S: AsRef<str>>(secret: &SecretWord, submitted: &[S]) -> KeyboardHints {
    let mut hints = KeyboardHints::default();
    for guess in submitted {
        let guess = guess.as_ref();
        for (letter, class) in guess.chars().zip(score(secret, guess)) {
            hints.fold(letter, class);
        }
    }
    hints
}
