//! Commands that change a table and save the file back

use super::open;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tablexml_editor::{Engine, Grid};

#[derive(Debug, Args)]
pub struct AddRowArgs {
    /// Markup file to edit
    pub file: PathBuf,

    /// Table name
    pub table: String,

    /// Cell values in column order
    pub values: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DeleteRowArgs {
    /// Markup file to edit
    pub file: PathBuf,

    /// Table name
    pub table: String,

    /// Row index (0-based)
    pub index: usize,
}

#[derive(Debug, Args)]
pub struct SetCellArgs {
    /// Markup file to edit
    pub file: PathBuf,

    /// Table name
    pub table: String,

    /// Row index (0-based)
    pub row: usize,

    /// Column header, or 0-based column index
    pub column: String,

    /// New cell value
    pub value: String,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Markup file to edit
    pub file: PathBuf,

    /// Table name
    pub table: String,

    /// JSON grid ({ "headers": [...], "rows": [[...]] })
    pub grid: PathBuf,
}

pub fn add_row(args: AddRowArgs, cwd: &str) -> Result<()> {
    let mut engine = open(&args.file, cwd)?;
    engine.add_row(&args.table, &args.values)?;
    save(&mut engine, &format!("Added row to {}", args.table))
}

pub fn delete_row(args: DeleteRowArgs, cwd: &str) -> Result<()> {
    let mut engine = open(&args.file, cwd)?;
    engine.delete_row(&args.table, args.index)?;
    save(
        &mut engine,
        &format!("Deleted row {} from {}", args.index, args.table),
    )
}

pub fn set_cell(args: SetCellArgs, cwd: &str) -> Result<()> {
    let mut engine = open(&args.file, cwd)?;
    let mut grid = engine.get_table(&args.table)?;

    let column = resolve_column(&grid, &args.column)?;
    grid.set_cell(args.row, column, args.value.as_str())?;
    engine.replace_table(&args.table, &grid)?;

    save(
        &mut engine,
        &format!(
            "Set {}[{}].{}",
            args.table, args.row, grid.headers[column]
        ),
    )
}

pub fn import(args: ImportArgs, cwd: &str) -> Result<()> {
    let content = std::fs::read_to_string(&args.grid)
        .with_context(|| format!("Failed to read {}", args.grid.display()))?;
    let grid: Grid = serde_json::from_str(&content)
        .with_context(|| format!("Invalid grid JSON in {}", args.grid.display()))?;

    let mut engine = open(&args.file, cwd)?;
    engine.replace_table(&args.table, &grid)?;
    save(
        &mut engine,
        &format!(
            "Replaced {} with {} columns, {} rows",
            args.table,
            grid.column_count(),
            grid.row_count()
        ),
    )
}

/// Header name first, then a numeric index
fn resolve_column(grid: &Grid, column: &str) -> Result<usize> {
    if let Some(index) = grid.column_index(column) {
        return Ok(index);
    }
    match column.parse::<usize>() {
        Ok(index) if index < grid.column_count() => Ok(index),
        _ => Err(anyhow!(
            "Unknown column: {}. Columns: {}",
            column,
            grid.headers.join(", ")
        )),
    }
}

fn save(engine: &mut Engine, summary: &str) -> Result<()> {
    engine.save()?;

    let path = engine
        .current_path()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    println!("{} {} → {}", "✓".green(), summary, path);
    Ok(())
}
