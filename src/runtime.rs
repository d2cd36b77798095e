use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

use crate::input::Action;

/// Everything the game loop reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Input(Action),
    Resize,
    Tick,
    /// the source is gone and nothing will ever arrive again
    Closed,
}

impl GameEvent {
    /// Translate a key press, dropping keys the game has no use for
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        // windows reports releases too; one keystroke is one press
        if key.kind == KeyEventKind::Release {
            return None;
        }
        Action::from_key(key).map(GameEvent::Input)
    }
}

/// Anything that can feed the loop with events
pub trait EventSource: Send + 'static {
    /// Wait at most `timeout` for the next event
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError>;
}

/// Reads the terminal on a background thread
pub struct CrosstermEventSource {
    rx: Receiver<GameEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let ev = match event::read() {
                Ok(CtEvent::Key(key)) => match GameEvent::from_key(key) {
                    Some(ev) => ev,
                    None => continue,
                },
                Ok(CtEvent::Resize(_, _)) => GameEvent::Resize,
                Ok(_) => continue,
                Err(_) => break,
            };
            if tx.send(ev).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Scripted source: whatever is pushed into the channel comes out in order.
/// Lets tests and headless play drive the same loop as the terminal.
pub struct ChannelEventSource {
    rx: Receiver<GameEvent>,
}

impl ChannelEventSource {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for ChannelEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

pub struct Runner<E: EventSource, T: Ticker> {
    events: E,
    ticker: T,
}

impl<E: EventSource, T: Ticker> Runner<E, T> {
    pub fn new(events: E, ticker: T) -> Self {
        Self { events, ticker }
    }

    /// Next event, or a Tick if nothing shows up within one interval.
    /// Once the source has hung up every step yields Closed.
    pub fn step(&self) -> GameEvent {
        match self.events.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => GameEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => GameEvent::Closed,
        }
    }
}
