//! Terminal output formatting
//!
//! Tables go to the given writer (stdout in production); errors go to stderr
//! with colors. Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::Write;

use colored::Colorize;
use prettytable::format::{FormatBuilder, TableFormat};
use prettytable::{Cell, Row, Table};

use crate::cli::CliResult;
use crate::infrastructure::InfraError;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// A resource that renders as one table row under fixed headers.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

/// Borderless, space separated, headers on top.
fn plain_format() -> TableFormat {
    FormatBuilder::new().column_separator(' ').padding(0, 2).build()
}

/// Render `rows` under `headers`, one line per row.
pub fn table<I>(out: &mut dyn Write, headers: &[&str], rows: I) -> CliResult<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut table = Table::new();
    table.set_format(plain_format());
    table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));
    for row in rows {
        table.add_row(Row::new(row.iter().map(|c| Cell::new(c)).collect()));
    }
    table
        .print(out)
        .map_err(|e| InfraError::io("write table", e))?;
    Ok(())
}

/// Render a list of resources using their own headers.
pub fn list<T: Tabular>(out: &mut dyn Write, items: &[T]) -> CliResult<()> {
    table(out, T::HEADERS, items.iter().map(Tabular::row))
}

/// Render a single resource.
pub fn single<T: Tabular>(out: &mut dyn Write, item: &T) -> CliResult<()> {
    table(out, T::HEADERS, std::iter::once(item.row()))
}

/// One-column `Status` table.
pub fn status_table(out: &mut dyn Write, status: &str) -> CliResult<()> {
    table(out, &["Status"], std::iter::once(vec![status.to_string()]))
}

/// `Status: <status>`
pub fn status_line(out: &mut dyn Write, status: &str) -> CliResult<()> {
    line(out, &format!("Status: {}", status))
}

/// Print plain output (no color)
pub fn line(out: &mut dyn Write, msg: &str) -> CliResult<()> {
    writeln!(out, "{}", msg).map_err(|e| InfraError::io("write output", e))?;
    Ok(())
}
