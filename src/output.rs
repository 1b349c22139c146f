//! Output formatting for command results
//!
//! List views are printed as aligned tables built from any row type that
//! implements [`Tabular`]; single records are printed as key/value listings
//! through [`Detail`]. Both can instead be emitted as pretty JSON.

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

/// How command results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and listings
    #[default]
    Table,
    /// Pretty-printed JSON for scripting
    Json,
}

/// A record that renders as one row of a table
pub trait Tabular {
    /// Column titles, in the same order as [`Tabular::row`]
    const HEADERS: &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

/// A record that renders as a key/value listing
///
/// Labels may repeat, which is how nested lists (resources, parameters,
/// artifacts) are shown.
pub trait Detail {
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Write `rows` as a left-aligned table with a header line
pub fn write_table<W: Write, T: Tabular>(writer: &mut W, rows: &[T]) -> io::Result<()> {
    if rows.is_empty() {
        writeln!(writer, "No resources found")?;
        return Ok(());
    }

    let cells: Vec<Vec<String>> = rows.iter().map(Tabular::row).collect();
    let mut widths: Vec<usize> = T::HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let headers: Vec<String> = T::HEADERS.iter().map(|h| h.to_string()).collect();
    write_row(writer, &headers, &widths)?;
    for row in &cells {
        write_row(writer, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, row: &[String], widths: &[usize]) -> io::Result<()> {
    let last = widths.len().saturating_sub(1);
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        if i == last {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{cell:<width$}   "));
        }
    }
    writeln!(writer, "{}", line.trim_end())
}

/// Write `record` as `Label - value` lines with aligned labels
pub fn write_detail<W: Write, T: Detail>(writer: &mut W, record: &T) -> io::Result<()> {
    let fields = record.fields();
    let width = fields
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in fields {
        writeln!(writer, "{label:<width$} - {value}")?;
    }
    Ok(())
}

/// Print a list view to stdout in the chosen format
pub fn print_list<T>(format: OutputFormat, rows: &[T]) -> anyhow::Result<()>
where
    T: Tabular + Serialize,
{
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Table => write_table(&mut out, rows)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print a single record to stdout in the chosen format
pub fn print_detail<T>(format: OutputFormat, record: &T) -> anyhow::Result<()>
where
    T: Detail + Serialize,
{
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Table => write_detail(&mut out, record)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, record)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
