use tracing::{debug, info, instrument, trace};

use crate::config::{Config, SourceMode};
use crate::game::Game;
use crate::gating::Gates;
use crate::input::Action;
use crate::snapshot::Snapshot;
use crate::word::SecretWord;
use crate::word_bank::{
    BankProvider, WordBank, WordBankError, WordProvider, WordSource, DEFAULT_WORD_LIST,
};

/// Effective settings for this run: the saved config with command line
/// overrides applied
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeSettings {
    pub mode: SourceMode,
    pub word: Option<SecretWord>,
    pub show_keyboard: bool,
    pub log_filter: String,
}

impl From<&Config> for RuntimeSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            mode: cfg.source,
            word: None,
            show_keyboard: cfg.show_keyboard,
            log_filter: cfg.log_filter.clone(),
        }
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl RuntimeSettings {
    pub fn word_source(&self) -> WordSource {
        match (&self.word, self.mode) {
            (Some(word), _) => WordSource::Fixed(word.clone()),
            (None, SourceMode::Daily) => WordSource::Daily,
            (None, SourceMode::Random) => WordSource::Random,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    pub settings: RuntimeSettings,
    provider: Box<dyn WordProvider>,
    game: Game,
    games_played: usize,
}

impl App {
    pub fn new(
        settings: RuntimeSettings,
        mut provider: Box<dyn WordProvider>,
    ) -> Result<Self, WordBankError> {
        let game = Game::new(provider.next_word()?);
        Ok(Self {
            settings,
            provider,
            game,
            games_played: 1,
        })
    }

    /// App backed by the bundled word list
    pub fn with_bundled_words(settings: RuntimeSettings) -> Result<Self, WordBankError> {
        let bank = WordBank::load(DEFAULT_WORD_LIST)?;
        let provider = BankProvider::new(bank, settings.word_source());
        Self::new(settings, Box::new(provider))
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.game)
    }

    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Result<(), WordBankError> {
        self.game = Game::new(self.provider.next_word()?);
        self.games_played += 1;
        info!(games_played = self.games_played, "new game");
        Ok(())
    }

    /// Apply one player action. Actions the gates have closed never reach the
    /// game, and anything the game still refuses is dropped quietly.
    pub fn handle(&mut self, action: Action) -> Result<Flow, WordBankError> {
        // plain 'n' starts over once the game has ended
        let action = match action {
            Action::Type('n' | 'N') if self.game.is_over() => Action::NewGame,
            other => other,
        };

        if !action.permitted(&Gates::project(&self.game)) {
            trace!(?action, "gated");
            return Ok(Flow::Continue);
        }

        let result = match action {
            Action::Quit => return Ok(Flow::Quit),
            Action::NewGame => {
                self.new_game()?;
                return Ok(Flow::Continue);
            }
            Action::Type(c) => self.game.type_char(c),
            Action::Delete => self.game.delete_char(),
            Action::Submit => self.game.submit_row().map(|_| ()),
        };

        if let Err(err) = result {
            debug!(?action, %err, "ignored");
        }
        Ok(Flow::Continue)
    }
}
