use super::open;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tablexml_editor::Grid;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Markup file to read
    pub file: PathBuf,

    /// Table name
    pub table: String,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let engine = open(&args.file, cwd)?;
    let grid = engine.get_table(&args.table)?;

    match args.format.as_str() {
        "text" => print!("{}", render_text(&grid)),
        "json" => println!("{}", serde_json::to_string_pretty(&grid)?),
        other => return Err(anyhow!("Invalid format: {}. Use: text or json", other)),
    }

    Ok(())
}

/// Render a grid as left-aligned columns
pub(crate) fn render_text(grid: &Grid) -> String {
    let widths: Vec<usize> = (0..grid.column_count())
        .map(|column| {
            (0..grid.row_count())
                .filter_map(|row| grid.cell(row, column))
                .chain(std::iter::once(grid.headers[column].as_str()))
                .map(|value| value.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut output = String::new();
    let header_line = format_line(grid.headers.iter().map(String::as_str), &widths);
    output.push_str(&header_line.bold().to_string());
    output.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&format_line(rule.iter().map(String::as_str), &widths).dimmed().to_string());
    output.push('\n');

    for row in 0..grid.row_count() {
        let values = (0..grid.column_count()).map(|column| grid.cell(row, column).unwrap_or(""));
        output.push_str(&format_line(values, &widths));
        output.push('\n');
    }

    output
}

fn format_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, &width)| format!("{value:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
