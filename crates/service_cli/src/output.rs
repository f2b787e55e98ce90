//! Report rendering as box-drawn tables, JSON or CSV.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

use crate::config::ConfigError;
use crate::Result;

/// Decimal places for numbers in table output.
pub const TABLE_PRECISION: usize = 4;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma-separated values with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Free text
    Text(String),
    /// Number; rounded in tables, full precision in CSV
    Num(f64),
    /// Integer count
    Int(u64),
}

impl Cell {
    fn render(&self, precision: Option<usize>) -> String {
        match (self, precision) {
            (Cell::Text(s), _) => s.clone(),
            (Cell::Num(v), Some(p)) => format!("{:.*}", p, v),
            (Cell::Num(v), None) => v.to_string(),
            (Cell::Int(v), _) => v.to_string(),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Num(v)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<usize> for Cell {
    fn from(v: usize) -> Self {
        Cell::Int(v as u64)
    }
}

impl From<u64> for Cell {
    fn from(v: u64) -> Self {
        Cell::Int(v)
    }
}

/// Rows under a header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Column headers
    pub headers: Vec<String>,
    /// Rows, each as long as `headers`
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Empty table with the given headers.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Two-column metric/value table.
    pub fn metrics() -> Self {
        Self::new(["metric", "value"])
    }

    /// Appends a row.
    pub fn push<I>(&mut self, row: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        self.rows.push(row.into_iter().collect());
    }

    /// Appends a metric/value row.
    pub fn metric(&mut self, name: &str, value: impl Into<Cell>) {
        self.push([Cell::from(name), value.into()]);
    }

    /// Renders with box-drawing borders.
    pub fn render_box(&self, precision: usize) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.render(Some(precision))).collect())
            .collect();

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };
        let line = |values: &[String]| {
            let padded: Vec<String> = values
                .iter()
                .zip(&widths)
                .map(|(v, w)| format!(" {:<width$} ", v, width = w))
                .collect();
            format!("│{}│\n", padded.join("│"))
        };

        let mut out = rule("┌", "┬", "┐");
        out.push_str(&line(&self.headers));
        out.push_str(&rule("├", "┼", "┤"));
        for row in &cells {
            out.push_str(&line(row));
        }
        out.push_str(&rule("└", "┴", "┘"));
        out
    }

    /// Writes as CSV with a header row.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|c| c.render(None)))?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// A command result that can be rendered in every output format.
pub trait Report: Serialize {
    /// Table shown in `table` format.
    fn table(&self) -> Table;

    /// Table written in `csv` format; the display table by default.
    fn csv_table(&self) -> Table {
        self.table()
    }
}

/// Renders `report` to `out` in `format`.
pub fn emit<R: Report, W: Write>(report: &R, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Table => {
            out.write_all(report.table().render_box(TABLE_PRECISION).as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            report.csv_table().write_csv(&mut out)?;
        }
    }
    Ok(())
}
