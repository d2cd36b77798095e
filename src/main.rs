use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    fs::{self, OpenOptions},
    io::{self, stdin},
    sync::Mutex,
    time::Duration,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wordle::{
    app::{App, Flow, RuntimeSettings},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore, SourceMode},
    runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner},
    word::SecretWord,
};

const TICK_RATE_MS: u64 = 250;
const LOG_ENV: &str = "WORDLE_LOG";

/// five letters, six guesses
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Guess the hidden five-letter word in six tries. Each guess is scored letter by letter and the keyboard keeps track of what you have learned."
)]
pub struct Cli {
    /// play this word instead of one from the word list
    #[clap(short = 'w', long)]
    word: Option<SecretWord>,

    /// how to pick the secret word: the same word for everyone today, or a random one
    #[clap(short = 's', long, value_enum)]
    source: Option<SourceMode>,

    /// hide the on-screen keyboard
    #[clap(long)]
    hide_keyboard: bool,

    /// write the effective settings (minus --word) to the config file
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Layer command line overrides on top of the saved config
    fn to_runtime_settings(&self, cfg: &Config) -> RuntimeSettings {
        let mut rs = RuntimeSettings::from(cfg);
        if let Some(mode) = self.source {
            rs.mode = mode;
        }
        if self.hide_keyboard {
            rs.show_keyboard = false;
        }
        rs.word = self.word.clone();
        rs
    }
}

fn init_logging(rs: &RuntimeSettings) {
    let Some(path) = AppDirs::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&rs.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // the terminal belongs to the game, so logs only ever go to the file
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let (cfg, load_err) = match store.load() {
        Ok(cfg) => (cfg, None),
        Err(err) => (Config::default(), Some(err)),
    };
    let settings = cli.to_runtime_settings(&cfg);
    init_logging(&settings);
    if let Some(err) = load_err {
        warn!(%err, "ignoring saved config");
    }

    if cli.save_config {
        if let Err(err) = store.save(&Config::from(&settings)) {
            warn!(path = %store.path().display(), %err, "could not save config");
        }
    }

    let mut app = App::with_bundled_words(settings)?;
    info!(source = ?app.settings.word_source(), "starting");

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    loop {
        match runner.step() {
            GameEvent::Tick => {}
            GameEvent::Closed => {
                warn!("terminal input closed");
                break;
            }
            GameEvent::Resize => {
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
            GameEvent::Input(action) => {
                if app.handle(action)? == Flow::Quit {
                    break;
                }
                terminal.draw(|f| f.render_widget(&*app, f.area()))?;
            }
        }
    }

    Ok(())
}
