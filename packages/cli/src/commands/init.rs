use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Spaces per nesting level when saving
    #[arg(short, long, default_value_t = 4)]
    pub indent_width: usize,

    /// Write files in place instead of through a temporary file
    #[arg(long)]
    pub no_atomic: bool,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = Config::path_in(cwd);
    if !args.force && config_path.is_file() {
        println!(
            "  {} Kept existing {} (pass --force to replace it)",
            "•".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        return Ok(());
    }

    let config = Config {
        indent_width: args.indent_width,
        atomic_save: !args.no_atomic,
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)? + "\n")?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    Ok(())
}
