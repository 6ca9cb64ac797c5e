use super::open;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct TablesArgs {
    /// Markup file to inspect
    pub file: PathBuf,
}

pub fn tables(args: TablesArgs, cwd: &str) -> Result<()> {
    let engine = open(&args.file, cwd)?;
    let names = engine.list_tables();

    if names.is_empty() {
        println!("{}", "⚠️  No tables found".yellow());
        return Ok(());
    }

    println!("Found {} tables in {}", names.len(), args.file.display());
    for name in names {
        let rows = engine.get_table(name)?.row_count();
        println!("  {} {} ({} rows)", "•".bright_blue(), name.bold(), rows);
    }

    Ok(())
}
