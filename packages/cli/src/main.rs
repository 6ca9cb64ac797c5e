mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add_row, delete_row, format, import, init, set_cell, show, tables, AddRowArgs, DeleteRowArgs,
    FormatArgs, ImportArgs, InitArgs, SetCellArgs, ShowArgs, TablesArgs,
};
use tracing::Level;

/// tablexml - edit tables stored in XML documents
#[derive(Parser, Debug)]
#[command(name = "tablexml")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a tablexml.config.json in the current directory
    Init(InitArgs),

    /// List the tables in a file
    Tables(TablesArgs),

    /// Print one table
    Show(ShowArgs),

    /// Append a row to a table
    AddRow(AddRowArgs),

    /// Delete a row from a table
    DeleteRow(DeleteRowArgs),

    /// Change a single cell
    SetCell(SetCellArgs),

    /// Replace a table with a JSON grid
    Import(ImportArgs),

    /// Rewrite a file with normalized indentation
    Format(FormatArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => exit_with(anyhow::anyhow!("Cannot get current directory: {}", err)),
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Tables(args) => tables(args, &cwd),
        Command::Show(args) => show(args, &cwd),
        Command::AddRow(args) => add_row(args, &cwd),
        Command::DeleteRow(args) => delete_row(args, &cwd),
        Command::SetCell(args) => set_cell(args, &cwd),
        Command::Import(args) => import(args, &cwd),
        Command::Format(args) => format(args, &cwd),
    };

    if let Err(err) = result {
        exit_with(err);
    }
}

fn exit_with(err: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("{} {:#}", "Error:".red().bold(), err);
    eprintln!();
    std::process::exit(1);
}
