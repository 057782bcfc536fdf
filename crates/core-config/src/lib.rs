//! Configuration loading and parsing.
//!
//! Parses `rivet.toml` (or an override path provided by the binary). Only the
//! `[editor]` table is recognised today:
//!
//! ```toml
//! [editor]
//! tab_width = 4          # spaces inserted by Tab, clamped to 1..=16
//! tab_policy = "splice"  # or "append"
//! ```
//!
//! Unknown fields are ignored. A missing file or a file that fails to parse
//! yields the defaults; the parse failure is reported on the `config` target.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "rivet.toml";
pub const DEFAULT_TAB_WIDTH: usize = 4;
pub const MAX_TAB_WIDTH: usize = 16;

/// Where Tab inserts its spaces.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TabPolicy {
    /// Insert at the cursor column.
    #[default]
    Splice,
    /// Append at the end of the line.
    Append,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_width")]
    pub tab_width: usize,
    #[serde(default)]
    pub tab_policy: TabPolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_width: Self::default_tab_width(),
            tab_policy: TabPolicy::default(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_width() -> usize {
        DEFAULT_TAB_WIDTH
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
    pub source: Option<PathBuf>,
}

/// Editing options handed to the dispatcher, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    pub tab_width: usize,
    pub tab_policy: TabPolicy,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            tab_policy: TabPolicy::Splice,
        }
    }
}

impl EditorOptions {
    /// Spaces inserted for one Tab press.
    pub fn tab_text(&self) -> String {
        " ".repeat(self.tab_width)
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("rivet").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config {
                raw: Some(content),
                file,
                source: Some(path),
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// Validated editing options. Out-of-range tab widths are clamped.
    pub fn editor_options(&self) -> EditorOptions {
        let raw = self.file.editor.tab_width;
        let tab_width = raw.clamp(1, MAX_TAB_WIDTH);
        if tab_width != raw {
            info!(target: "config", raw, clamped = tab_width, max = MAX_TAB_WIDTH, "tab_width_clamped");
        }
        EditorOptions {
            tab_width,
            tab_policy: self.file.editor.tab_policy,
        }
    }
}
