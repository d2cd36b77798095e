use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "wordle";

/// Overrides every directory below, mostly useful for tests and sandboxes
pub const HOME_ENV: &str = "WORDLE_HOME";

/// Where the game keeps its files on disk
pub struct AppDirs;

impl AppDirs {
    /// Log output lives here, `~/.local/state/wordle` on unix-likes
    pub fn state_dir() -> Option<PathBuf> {
        state_dir_from(env(HOME_ENV), env("XDG_STATE_HOME"), env("HOME")).or_else(|| {
            ProjectDirs::from("", "", APP_NAME).map(|pd| pd.data_local_dir().to_path_buf())
        })
    }

    pub fn config_dir() -> Option<PathBuf> {
        match env(HOME_ENV) {
            Some(root) => Some(PathBuf::from(root)),
            None => ProjectDirs::from("", "", APP_NAME).map(|pd| pd.config_dir().to_path_buf()),
        }
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::state_dir().map(|dir| dir.join("wordle.log"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }
}

fn env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

fn state_dir_from(
    override_root: Option<String>,
    xdg_state: Option<String>,
    home: Option<String>,
) -> Option<PathBuf> {
    if let Some(root) = override_root {
        return Some(PathBuf::from(root));
    }
    if let Some(xdg) = xdg_state {
        return Some(PathBuf::from(xdg).join(APP_NAME));
    }
    home.map(|home| {
        PathBuf::from(home)
            .join(".local")
            .join("state")
            .join(APP_NAME)
    })
}
