use std::ops::Range;

/// Column ranges (0-indexed, end-exclusive) of the PDB fields the tools touch.
///
/// Offsets are the de facto wire format of every tool in this crate, so they are kept
/// exactly as the tools have always sliced them, including the places where that slicing
/// differs from the canonical PDB layout.
pub struct Columns;

impl Columns {
    /// Full six-character record name field (`ATOM  `, `HETATM`).
    pub const RECORD_TAG: Range<usize> = 0..6;
    /// Prefix compared against `ATOM` when selecting atom records.
    pub const ATOM_TAG: Range<usize> = 0..4;
    /// Two-character slice of the atom name field used for backbone selection.
    /// The canonical atom name field is `12..16`.
    pub const ATOM_NAME: Range<usize> = 13..15;
    /// Column copied into [`Columns::ELEMENT`] when rewriting ligand records.
    pub const ATOM_NAME_INITIAL: usize = 13;
    /// Residue identifier: residue name, chain, sequence number and insertion code.
    pub const RESIDUE_KEY: Range<usize> = 17..27;
    /// Residue name prefix of [`Columns::RESIDUE_KEY`].
    pub const RESIDUE_NAME_WIDTH: usize = 3;
    pub const CHAIN_ID: usize = 21;
    pub const ELEMENT: usize = 77;
    /// Columns overwritten with spaces when a ligand record is rewritten.
    pub const LIGAND_BLANK: Range<usize> = 67..87;
    /// Width a record is padded to before it is rewritten in corrected mode.
    pub const RECORD_WIDTH: usize = 80;
}

/// Where the X, Y and Z fields of a coordinate record are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinateColumns {
    pub x: Range<usize>,
    pub y: Range<usize>,
    pub z: Range<usize>,
}

/// Coordinate slices the tools have always read. X drops the two leading columns of the
/// canonical field and Y/Z each reach one column into the following field.
pub const LEGACY_COORDINATES: CoordinateColumns = CoordinateColumns {
    x: 32..38,
    y: 40..47,
    z: 48..55,
};

/// Canonical PDB orthogonal coordinate fields (`8.3f` each).
pub const CANONICAL_COORDINATES: CoordinateColumns = CoordinateColumns {
    x: 30..38,
    y: 38..46,
    z: 46..54,
};

/// Formats a column range the way PDB documentation does (1-based, inclusive).
pub fn describe_columns(range: &Range<usize>) -> String {
    format!("{}-{}", range.start + 1, range.end)
}
