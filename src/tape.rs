//! This module defines the sparse, unbounded tape and the renderer that turns the visited
//! region of a tape back into a compact string.

use crate::types::Span;
use std::collections::HashMap;

/// A bidirectional tape addressed by signed positions.
///
/// Only explicitly written cells are stored. Reading any other position yields
/// the blank symbol without inserting anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: HashMap<i64, String>,
    blank: String,
}

impl Tape {
    /// Creates a tape holding one character of `input` per cell at positions `0..n-1`.
    pub fn new(input: &str, blank: &str) -> Self {
        let cells = (0_i64..)
            .zip(input.chars())
            .map(|(i, c)| (i, c.to_string()))
            .collect();

        Self {
            cells,
            blank: blank.to_string(),
        }
    }

    /// Returns the symbol at `position`, or the blank symbol if it was never written.
    pub fn read(&self, position: i64) -> &str {
        self.cells.get(&position).map_or(self.blank.as_str(), String::as_str)
    }

    /// Writes `symbol` at `position`.
    pub fn write(&mut self, position: i64, symbol: &str) {
        match self.cells.get_mut(&position) {
            Some(cell) => {
                cell.clear();
                cell.push_str(symbol);
            }
            None => {
                self.cells.insert(position, symbol.to_string());
            }
        }
    }

    /// Returns the blank symbol used by this tape.
    pub fn blank(&self) -> &str {
        &self.blank
    }

    /// Returns the number of explicitly stored cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell has been stored.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Renders the cells within `span` using this tape's blank symbol.
    pub fn render(&self, span: Span) -> String {
        render(self, &self.blank, span)
    }
}

/// Renders the cells of `tape` within `span`, trimming leading and trailing blanks.
///
/// Blanks between non-blank cells are kept. Positions outside `span` are never
/// inspected, so `span` must cover every written position.
///
/// # Returns
///
/// The concatenated symbols of the trimmed range, or an empty string if every
/// cell within `span` is blank.
pub fn render(tape: &Tape, blank: &str, span: Span) -> String {
    let Span { min: mut lo, max: mut hi } = span;

    while lo <= hi && tape.read(lo) == blank {
        lo += 1;
    }
    while hi >= lo && tape.read(hi) == blank {
        hi -= 1;
    }

    if hi < lo {
        return String::new();
    }

    (lo..=hi).map(|position| tape.read(position)).collect()
}
