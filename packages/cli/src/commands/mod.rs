pub mod edit;
pub mod format;
pub mod init;
pub mod show;
pub mod tables;

pub use edit::{add_row, delete_row, import, set_cell, AddRowArgs, DeleteRowArgs, ImportArgs, SetCellArgs};
pub use format::{format, FormatArgs};
pub use init::{init, InitArgs};
pub use show::{show, ShowArgs};
pub use tables::{tables, TablesArgs};

use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;
use tablexml_editor::Engine;

/// Build an engine from the working directory's config and load `file`
pub(crate) fn open(file: &Path, cwd: &str) -> Result<Engine> {
    let config = Config::load(cwd)?;
    let mut engine = Engine::with_options(config.save_options());
    engine
        .load(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    Ok(engine)
}
