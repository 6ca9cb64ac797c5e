use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tablexml_editor::SaveOptions;

pub const DEFAULT_CONFIG_NAME: &str = "tablexml.config.json";

/// tablexml configuration file format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Spaces per nesting level when saving
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Write through a temporary file and rename it over the target
    #[serde(default = "default_atomic_save")]
    pub atomic_save: bool,
}

fn default_indent_width() -> usize {
    4
}

fn default_atomic_save() -> bool {
    true
}

impl Config {
    /// Path of the config file inside `cwd`
    pub fn path_in(cwd: &str) -> PathBuf {
        Path::new(cwd).join(DEFAULT_CONFIG_NAME)
    }

    /// Read `tablexml.config.json` from `cwd`; defaults when there is none
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let path = Self::path_in(cwd);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("Cannot read {}", path.display()))
            }
        };
        serde_json::from_str(&content).with_context(|| format!("Invalid {}", path.display()))
    }

    pub fn save_options(&self) -> SaveOptions {
        SaveOptions {
            indent_width: self.indent_width,
            atomic: self.atomic_save,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            atomic_save: default_atomic_save(),
        }
    }
}
