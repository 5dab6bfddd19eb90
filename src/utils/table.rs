//! Table rendering utilities for CLI outputs.

use super::colors::RESET;
use super::formatting::{pad_right, truncate};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

/// A cell; the ANSI color is applied after padding so it never skews widths.
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn plain<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored<T: Into<String>>(text: T, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (col, cell) in self.columns.iter().zip(row.iter()) {
                let text = pad_right(&truncate(&cell.text, col.width), col.width);
                match cell.color {
                    Some(color) => out.push_str(&format!("{color}{text}{RESET}")),
                    None => out.push_str(&text),
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
