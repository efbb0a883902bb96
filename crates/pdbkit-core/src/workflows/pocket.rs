use crate::core::models::columns::Columns;
use crate::core::models::record::{PdbRecord, RecordError};
use crate::core::models::structure::Structure;
use crate::workflows::config::{CompatMode, ToolConfig};
use crate::workflows::error::WorkflowError;
use std::collections::HashSet;
use std::io::{self, Write};
use std::ops::Range;
use tracing::{debug, info, instrument, trace};

const LIGAND_TAG: &str = "HETATM";
const LIGAND_CHAIN: char = 'X';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PocketReport {
    pub compat: CompatMode,
    /// Distinct residue identifiers of the pocket definition, in first-seen order.
    pub residue_keys: Vec<String>,
    /// Selected records of the full structure, verbatim.
    pub pocket_lines: Vec<String>,
    /// Rewritten ligand records, without the newline added when printing.
    pub ligand_lines: Vec<String>,
}

impl PocketReport {
    /// Writes the pocket records followed by the ligand records.
    ///
    /// Pocket records are echoed as read. Each ligand record is followed by a newline; in
    /// legacy mode a ligand line that kept its own terminator therefore leaves a blank
    /// line behind it.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for line in &self.pocket_lines {
            writer.write_all(line.as_bytes())?;
            if self.compat == CompatMode::Corrected && !line.ends_with('\n') {
                writeln!(writer)?;
            }
        }
        for line in &self.ligand_lines {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}

fn set_column(chars: &mut [char], column: usize, value: char) -> Result<(), RecordError> {
    let slot = chars
        .get_mut(column)
        .ok_or(RecordError::LineTooShort { column })?;
    *slot = value;
    Ok(())
}

fn get_column(chars: &[char], column: usize) -> Result<char, RecordError> {
    chars
        .get(column)
        .copied()
        .ok_or(RecordError::LineTooShort { column })
}

/// Replaces `range` with `replacement`, clamping the range to the line the way a list
/// slice assignment does. A range reaching past the end grows or shrinks the line.
fn splice_columns(chars: &mut Vec<char>, range: Range<usize>, replacement: &[char]) {
    let end = range.end.min(chars.len());
    let start = range.start.min(end);
    chars.splice(start..end, replacement.iter().copied());
}

/// Rewrites a ligand line exactly as the tool always has, terminator included.
///
/// A standard 80-column line loses its own newline inside the blanked range; lines whose
/// text reaches the end of that range keep it.
fn rewrite_ligand_legacy(record: &PdbRecord) -> Result<String, RecordError> {
    let mut chars: Vec<char> = record.body().chars().collect();
    if record.has_terminator() {
        chars.push('\n');
    }

    set_column(&mut chars, Columns::CHAIN_ID, LIGAND_CHAIN)?;
    let blanks = vec![' '; Columns::LIGAND_BLANK.len()];
    splice_columns(&mut chars, Columns::LIGAND_BLANK, &blanks);
    let initial = get_column(&chars, Columns::ATOM_NAME_INITIAL)?;
    set_column(&mut chars, Columns::ELEMENT, initial)?;
    let tag: Vec<char> = LIGAND_TAG.chars().collect();
    splice_columns(&mut chars, Columns::RECORD_TAG, &tag);

    Ok(chars.into_iter().collect())
}

/// Rewrites a ligand line in place on a fixed-width body, one output line per record.
fn rewrite_ligand_corrected(record: &PdbRecord) -> Result<String, RecordError> {
    let mut chars: Vec<char> = record.body().chars().collect();
    if chars.len() < Columns::RECORD_WIDTH {
        chars.resize(Columns::RECORD_WIDTH, ' ');
    }

    set_column(&mut chars, Columns::CHAIN_ID, LIGAND_CHAIN)?;
    let blank_end = Columns::LIGAND_BLANK.end.min(chars.len());
    for c in &mut chars[Columns::LIGAND_BLANK.start..blank_end] {
        *c = ' ';
    }
    let initial = get_column(&chars, Columns::ATOM_NAME_INITIAL)?;
    set_column(&mut chars, Columns::ELEMENT, initial)?;
    for (column, c) in Columns::RECORD_TAG.zip(LIGAND_TAG.chars()) {
        set_column(&mut chars, column, c)?;
    }

    Ok(chars.into_iter().collect())
}

/// Carves the residues named by `pocket` out of `full` and appends a rewritten `ligand`.
///
/// Residues are matched on the full residue identifier slice, so the chain and insertion
/// code take part in the match.
#[instrument(skip_all, name = "pocket_workflow")]
pub fn run(
    pocket: &Structure,
    full: &Structure,
    ligand: &Structure,
    config: &ToolConfig,
) -> Result<PocketReport, WorkflowError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut residue_keys = Vec::new();
    for record in pocket.atoms() {
        let key = record.residue_key();
        if seen.insert(key) {
            residue_keys.push(key.to_string());
        }
    }
    debug!("Pocket definition names {} residues.", residue_keys.len());

    let pocket_lines: Vec<String> = full
        .atoms()
        .filter(|record| seen.contains(record.residue_key()))
        .map(|record| record.raw().to_string())
        .collect();

    let mut ligand_lines = Vec::new();
    for record in ligand.records() {
        let rewritten = match config.compat {
            CompatMode::Legacy => rewrite_ligand_legacy(record),
            CompatMode::Corrected if record.is_coordinate_record() => {
                rewrite_ligand_corrected(record)
            }
            CompatMode::Corrected => {
                trace!(line = record.line_number(), "skipping non-coordinate ligand line");
                continue;
            }
        };
        let line =
            rewritten.map_err(|e| WorkflowError::record("ligand", record.line_number(), e))?;
        ligand_lines.push(line);
    }

    info!(
        "Pocket holds {} atoms from {} residues plus {} ligand lines.",
        pocket_lines.len(),
        residue_keys.len(),
        ligand_lines.len()
    );

    Ok(PocketReport {
        compat: config.compat,
        residue_keys,
        pocket_lines,
        ligand_lines,
    })
}
