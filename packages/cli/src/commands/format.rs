use super::open;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Markup file to re-indent
    pub file: PathBuf,

    /// Print the result instead of rewriting the file
    #[arg(long)]
    pub stdout: bool,
}

pub fn format(args: FormatArgs, cwd: &str) -> Result<()> {
    let mut engine = open(&args.file, cwd)?;

    if args.stdout {
        print!("{}", engine.to_markup()?);
        return Ok(());
    }

    engine.save()?;
    println!("{} Formatted {}", "✓".green(), args.file.display());
    Ok(())
}
