//! This module provides the `ProgramLoader` struct, responsible for reading specifications
//! and input tapes from files and writing the final tape back out.

use crate::parser::{parse, Program};
use crate::types::TuringMachineError;
use std::fs;
use std::path::Path;

/// `ProgramLoader` is a utility struct for the file side of a simulation run.
pub struct ProgramLoader;

impl ProgramLoader {
    /// Loads a single Turing Machine specification from the specified JSON file.
    ///
    /// # Returns
    ///
    /// * `Ok(Program)` if the file is successfully read and parsed into a `Program`.
    /// * `Err(TuringMachineError::FileError)` if the file cannot be read.
    /// * Any parsing error returned by [`parse`].
    pub fn load_program(path: &Path) -> Result<Program, TuringMachineError> {
        parse(&read_text(path)?)
    }

    /// Loads the input tape from a text file.
    ///
    /// Leading and trailing whitespace, including newlines, is removed. Whitespace
    /// inside the text is kept and becomes part of the input.
    pub fn load_input(path: &Path) -> Result<String, TuringMachineError> {
        Ok(read_text(path)?.trim_matches(is_outer_space).to_string())
    }

    /// Writes the rendered tape followed by a newline as UTF-8.
    pub fn write_output(path: &Path, tape: &str) -> Result<(), TuringMachineError> {
        fs::write(path, format!("{tape}\n")).map_err(|e| {
            TuringMachineError::FileError(format!("Failed to write file {}: {}", path.display(), e))
        })
    }
}

/// Decodes bytes as UTF-8, falling back to Latin-1 when they are not valid UTF-8.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        // Every Latin-1 byte maps to the code point of the same value.
        Err(e) => e.into_bytes().into_iter().map(char::from).collect(),
    }
}

/// Unicode whitespace plus the ASCII information separators (U+001C to U+001F).
fn is_outer_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn read_text(path: &Path) -> Result<String, TuringMachineError> {
    let bytes = fs::read(path).map_err(|e| {
        TuringMachineError::FileError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    Ok(decode_text(bytes))
}
