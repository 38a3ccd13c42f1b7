//! Configuration loading and parsing.
//!
//! Reads `candy.toml` (or an override path provided by the binary):
//!
//! ```toml
//! [status]
//! message_timeout_ms = 3000
//!
//! [motion]
//! page_rows = 10
//! ```
//!
//! Every field is optional. A missing file or one that fails to parse yields
//! the defaults; parse failures are logged under the `config` target. Unknown
//! fields are ignored so older binaries accept newer files.

use anyhow::Result;
use core_state::{DEFAULT_MESSAGE_TTL, DEFAULT_PAGE_ROWS, EditorState};
use serde::Deserialize;
use std::{fs, path::PathBuf, time::Duration};
use tracing::{info, warn};

pub const FILE_NAME: &str = "candy.toml";
const APP_DIR: &str = "candy";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StatusConfig {
    #[serde(default = "StatusConfig::default_message_timeout_ms")]
    pub message_timeout_ms: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            message_timeout_ms: Self::default_message_timeout_ms(),
        }
    }
}

impl StatusConfig {
    fn default_message_timeout_ms() -> u64 {
        u64::try_from(DEFAULT_MESSAGE_TTL.as_millis()).unwrap_or(u64::MAX)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MotionConfig {
    #[serde(default = "MotionConfig::default_page_rows")]
    pub page_rows: usize,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            page_rows: Self::default_page_rows(),
        }
    }
}

impl MotionConfig {
    const fn default_page_rows() -> usize {
        DEFAULT_PAGE_ROWS
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub source: Option<PathBuf>, // file the values came from, if any
    pub file: ConfigFile,
}

/// Local `candy.toml` first, then the platform config dir (XDG / AppData).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join(APP_DIR).join(FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_absent_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                source: Some(path),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    pub fn message_ttl(&self) -> Duration {
        Duration::from_millis(self.file.status.message_timeout_ms)
    }

    /// Ctrl-d / Ctrl-u distance; never below one row.
    pub fn page_rows(&self) -> usize {
        let raw = self.file.motion.page_rows;
        if raw == 0 {
            info!(target: "config", raw, clamped = 1, "page_rows_clamped");
        }
        raw.max(1)
    }

    /// Copy the effective values into the session.
    pub fn apply_to(&self, state: &mut EditorState) {
        state.message_ttl = self.message_ttl();
        state.page_rows = self.page_rows();
    }
}
