// Library surface for headless/integration tests and reuse.
// The binary in main.rs only wires the terminal and CLI around it.
pub mod app;
pub mod app_dirs;
pub mod config;
pub mod evaluator;
pub mod game;
pub mod gating;
pub mod input;
pub mod keyboard;
pub mod runtime;
pub mod snapshot;
pub mod ui;
pub mod word;
pub mod word_bank;

pub use evaluator::{evaluate, Classification};
pub use game::{Game, IllegalTransition, Outcome, Status};
pub use gating::Gates;
pub use keyboard::{aggregate, KeyboardHints, LetterHint};
pub use word::SecretWord;
