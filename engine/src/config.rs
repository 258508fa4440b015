//! Configuration file loading.
//!
//! Everything is optional: with no file at all the app runs on its
//! built-in greeting. The file lives at `~/.pageturn/config.toml` and can
//! be pointed elsewhere with `PAGETURN_CONFIG`.

use std::{env, fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

// Default value function for serde (bool::default() is false, so only true needs a fn)
pub(crate) const fn default_true() -> bool {
    true
}

/// ```toml
/// [app]
/// ascii_only = false
/// sound = true
///
/// [trivia]
/// question = "Which film industry is famous for musical numbers?"
/// options = ["Hollywood", "Bollywood", "Nollywood", "Tollywood"]
/// answer = "Bollywood"
///
/// [book]
/// auto_flip_interval_ms = 3000
///
/// [[book.pages]]
/// title = "Cover"
/// body = "Happy Birthday!"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct PageturnConfig {
    pub app: Option<AppConfig>,
    pub trivia: Option<TriviaConfig>,
    pub book: Option<BookConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and controls.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable flip sweep and breathing motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Emit the audible page-flip cue.
    #[serde(default = "default_true")]
    pub sound: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct TriviaConfig {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    /// Label of the correct option. Must match one entry of `options`.
    pub answer: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookConfig {
    pub pages: Option<Vec<PageConfig>>,
    /// Interval used when auto-flip is toggled from the UI.
    pub auto_flip_interval_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct PageConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl PageturnConfig {
    /// Resolve the config file path. `PAGETURN_CONFIG` wins; otherwise
    /// `~/.pageturn/config.toml`.
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = env::var("PAGETURN_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".pageturn").join("config.toml"))
    }

    /// Load the config file. `Ok(None)` when no file exists.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        Self::load_from(path)
    }

    pub fn load_from(path: PathBuf) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;
        Ok(Some(config))
    }
}
