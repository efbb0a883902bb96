use super::columns::{Columns, CoordinateColumns, describe_columns};
use nalgebra::Point3;
use std::ops::Range;
use thiserror::Error;

/// Errors raised while reading a field out of a single record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Line is too short to contain column {}", .column + 1)]
    LineTooShort { column: usize },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
}

/// Byte offset of character column `column`, or the text length past the end.
fn byte_offset(text: &str, column: usize) -> usize {
    text.char_indices()
        .nth(column)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Returns the characters in columns `range` with the bounds clamped to the text, so a
/// short line yields a short (possibly empty) slice rather than an error.
///
/// Columns count characters, not bytes, everywhere in this crate.
pub(crate) fn clamped_slice(text: &str, range: Range<usize>) -> &str {
    let start = byte_offset(text, range.start);
    let end = byte_offset(text, range.end).max(start);
    &text[start..end]
}

/// One line of a PDB file, kept exactly as it was read.
///
/// The raw text includes the line terminator when the source line had one, which lets
/// tools that echo records do so byte for byte. Field accessors work on the body (the
/// text without its terminator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdbRecord {
    line_number: usize,
    raw: String,
}

impl PdbRecord {
    /// Creates a record from a 1-based line number and the raw line text.
    pub fn new(line_number: usize, raw: impl Into<String>) -> Self {
        Self {
            line_number,
            raw: raw.into(),
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The line exactly as read, terminator included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The line without its trailing `\n` or `\r\n`.
    pub fn body(&self) -> &str {
        let body = self.raw.strip_suffix('\n').unwrap_or(&self.raw);
        body.strip_suffix('\r').unwrap_or(body)
    }

    pub fn has_terminator(&self) -> bool {
        self.raw.ends_with('\n')
    }

    /// `true` when the first four columns read `ATOM`.
    pub fn is_atom(&self) -> bool {
        clamped_slice(self.body(), Columns::ATOM_TAG) == "ATOM"
    }

    /// `true` for `ATOM` and `HETATM` records.
    pub fn is_coordinate_record(&self) -> bool {
        matches!(
            clamped_slice(self.body(), Columns::RECORD_TAG).trim_end(),
            "ATOM" | "HETATM"
        )
    }

    /// The two-character atom name slice used for backbone selection, untrimmed.
    pub fn atom_name_slice(&self) -> &str {
        clamped_slice(self.body(), Columns::ATOM_NAME)
    }

    /// The residue identifier slice (name, chain, sequence number, insertion code).
    ///
    /// Short lines give a truncated identifier instead of an error.
    pub fn residue_key(&self) -> &str {
        clamped_slice(self.body(), Columns::RESIDUE_KEY)
    }

    pub fn chain_id(&self) -> Result<char, RecordError> {
        self.column(Columns::CHAIN_ID)
    }

    /// Reads the character at a single 0-indexed column.
    pub fn column(&self, column: usize) -> Result<char, RecordError> {
        self.body()
            .chars()
            .nth(column)
            .ok_or(RecordError::LineTooShort { column })
    }

    /// Parses the X, Y and Z fields found at `layout`.
    pub fn coordinates(&self, layout: &CoordinateColumns) -> Result<Point3<f64>, RecordError> {
        Ok(Point3::new(
            self.float_field(&layout.x)?,
            self.float_field(&layout.y)?,
            self.float_field(&layout.z)?,
        ))
    }

    fn float_field(&self, range: &Range<usize>) -> Result<f64, RecordError> {
        let body = self.body();
        if body.chars().count() <= range.start {
            return Err(RecordError::LineTooShort {
                column: range.start,
            });
        }
        let text = clamped_slice(body, range.clone()).trim();
        text.parse().map_err(|_| RecordError::InvalidFloat {
            columns: describe_columns(range),
            value: text.to_string(),
        })
    }
}
