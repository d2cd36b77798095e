use derive_more::{Display, Error};
use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

use crate::word::SecretWord;

static LANG_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/lang");

pub const DEFAULT_WORD_LIST: &str = "wordle";

const SECS_PER_DAY: u64 = 86_400;

#[derive(Debug, Display, Error)]
pub enum WordBankError {
    #[display("word list '{name}' not found")]
    NotFound { name: String },
    #[display("word list '{name}' is not valid utf-8")]
    NotUtf8 { name: String },
    #[display("word list '{name}' could not be parsed: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
    #[display("word list '{name}' has no usable words")]
    Empty { name: String },
}

#[derive(Deserialize, Clone, Debug)]
struct WordList {
    name: String,
    #[allow(dead_code)]
    size: u32,
    words: Vec<String>,
}

/// Dictionary the secret words are drawn from
#[derive(Clone, Debug)]
pub struct WordBank {
    pub name: String,
    words: Vec<SecretWord>,
}

impl WordBank {
    /// Load one of the bundled lists by file stem
    pub fn load(name: &str) -> Result<Self, WordBankError> {
        let file_name = format!("{name}.json");
        let file = LANG_DIR
            .get_file(&file_name)
            .ok_or_else(|| WordBankError::NotFound {
                name: name.to_string(),
            })?;
        let contents = file.contents_utf8().ok_or_else(|| WordBankError::NotUtf8 {
            name: name.to_string(),
        })?;
        Self::from_json(contents)
    }

    pub fn from_json(json: &str) -> Result<Self, WordBankError> {
        let list: WordList =
            serde_json::from_str(json).map_err(|source| WordBankError::Parse {
                name: "<inline>".to_string(),
                source,
            })?;
        Self::from_words(list.name, list.words)
    }

    pub fn from_words<I, S>(name: impl Into<String>, words: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let words: Vec<SecretWord> = words
            .into_iter()
            .filter_map(|w| match SecretWord::new(w.as_ref()) {
                Ok(word) => Some(word),
                Err(err) => {
                    warn!(list = %name, word = w.as_ref(), %err, "skipping word");
                    None
                }
            })
            .collect();

        if words.is_empty() {
            return Err(WordBankError::Empty { name });
        }
        debug!(list = %name, size = words.len(), "word bank loaded");
        Ok(Self { name, words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &SecretWord) -> bool {
        self.words.contains(word)
    }

    pub fn random(&self) -> Option<SecretWord> {
        self.words.choose(&mut rand::thread_rng()).cloned()
    }

    /// Same word for everyone on a given day
    pub fn daily(&self, day: u64) -> Option<SecretWord> {
        if self.words.is_empty() {
            return None;
        }
        let idx = (day % self.words.len() as u64) as usize;
        self.words.get(idx).cloned()
    }
}

/// Days since the unix epoch
pub fn today() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() / SECS_PER_DAY)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    Daily,
    Random,
    Fixed(SecretWord),
}

/// Supplies the secret word for each new game
pub trait WordProvider {
    fn next_word(&mut self) -> Result<SecretWord, WordBankError>;
}

#[derive(Debug, Clone)]
pub struct BankProvider {
    bank: WordBank,
    source: WordSource,
}

impl BankProvider {
    pub fn new(bank: WordBank, source: WordSource) -> Self {
        Self { bank, source }
    }
}

impl WordProvider for BankProvider {
    fn next_word(&mut self) -> Result<SecretWord, WordBankError> {
        let word = match &self.source {
            WordSource::Fixed(word) => Some(word.clone()),
            WordSource::Daily => self.bank.daily(today()),
            WordSource::Random => self.bank.random(),
        };
        word.ok_or_else(|| WordBankError::Empty {
            name: self.bank.name.clone(),
        })
    }
}
