//! Terminal presenters
//!
//! Cells are padded on their plain text before coloring, so escape codes
//! never throw off column alignment.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};

const GAP: &str = "  ";

/// Color applied to every cell of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Cyan,
    Yellow,
    Green,
    Plain,
}

impl Tint {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Tint::Cyan => text.cyan(),
            Tint::Yellow => text.yellow(),
            Tint::Green => text.green(),
            Tint::Plain => text.normal(),
        }
    }
}

#[derive(Debug, Clone)]
struct Column {
    header: String,
    tint: Tint,
}

/// Titled table with left-aligned columns
#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn column(mut self, header: impl Into<String>, tint: Tint) -> Self {
        self.columns.push(Column {
            header: header.into(),
            tint,
        });
        self
    }

    /// Append a row; missing cells render empty, extra cells are ignored
    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.columns.len())
            .map(Into::into)
            .collect();
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(column.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Write the title, the header, a rule, then one line per row
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        let widths = self.widths();
        let last = self.columns.len().saturating_sub(1);

        writeln!(out, "{}", self.title.bold())?;

        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| pad(&c.header, widths[i], i == last).bold().to_string())
            .collect();
        writeln!(out, "{}", header.join(GAP))?;

        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        writeln!(out, "{}", rule.join(GAP).dimmed())?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    self.columns[i]
                        .tint
                        .paint(&pad(cell, widths[i], i == last))
                        .to_string()
                })
                .collect();
            writeln!(out, "{}", cells.join(GAP))?;
        }
        Ok(())
    }
}

fn pad(text: &str, width: usize, last: bool) -> String {
    if last {
        text.to_string()
    } else {
        format!("{text:<width$}")
    }
}

/// Blank line, then a dimmed hint
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn footer(out: &mut dyn Write, text: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", text.dimmed())
}
