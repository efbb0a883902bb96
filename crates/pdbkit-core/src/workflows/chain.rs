use crate::core::models::record::PdbRecord;
use crate::core::models::structure::Structure;
use crate::workflows::error::WorkflowError;
use std::io::{self, Write};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct ChainReport<'a> {
    pub chain_id: char,
    pub records: Vec<&'a PdbRecord>,
}

impl ChainReport<'_> {
    /// Echoes each selected record unmodified. A final line without a terminator gets one
    /// so the output always ends on a line boundary.
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for record in &self.records {
            writer.write_all(record.raw().as_bytes())?;
            if !record.has_terminator() {
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

/// Selects the `ATOM` records whose chain column equals `chain_id`, in file order.
#[instrument(skip(structure), name = "chain_workflow")]
pub fn run(structure: &Structure, chain_id: char) -> Result<ChainReport<'_>, WorkflowError> {
    let mut records = Vec::new();
    for record in structure.atoms() {
        let chain = record
            .chain_id()
            .map_err(|e| WorkflowError::record("input", record.line_number(), e))?;
        if chain == chain_id {
            records.push(record);
        }
    }
    info!("Selected {} ATOM records on chain '{}'.", records.len(), chain_id);
    Ok(ChainReport { chain_id, records })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::record::RecordError;
    use crate::test_utils::{atom_line, structure_of};

    fn render(report: &ChainReport<'_>) -> String {
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn mixed_chains() -> Vec<String> {
        vec![
            "REMARK chains A and B\n".to_string(),
            atom_line(1, "N", "ALA", 'A', 1, 0.0, 0.0, 0.0),
            atom_line(2, "CA", "GLY", 'B', 1, 1.0, 0.0, 0.0),
            atom_line(3, "CA", "ALA", 'A', 2, 2.0, 0.0, 0.0),
            atom_line(4, "CA", "SER", 'a', 3, 3.0, 0.0, 0.0),
            "TER\n".to_string(),
        ]
    }

    #[test]
    fn selects_matching_chain_in_file_order() {
        let lines = mixed_chains();
        let structure = structure_of(&lines);

        let report = run(&structure, 'A').unwrap();

        assert_eq!(render(&report), format!("{}{}", lines[1], lines[3]));
    }

    #[test]
    fn chain_match_is_case_sensitive() {
        let lines = mixed_chains();
        let structure = structure_of(&lines);

        let report = run(&structure, 'a').unwrap();

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].raw(), lines[4]);
    }

    #[test]
    fn hetatm_records_are_never_selected() {
        let mut het = atom_line(1, "C1", "LIG", 'A', 1, 0.0, 0.0, 0.0);
        het.replace_range(0..6, "HETATM");
        let structure = structure_of(&[het]);

        let report = run(&structure, 'A').unwrap();

        assert!(report.records.is_empty());
        assert_eq!(render(&report), "");
    }

    #[test]
    fn unterminated_last_line_is_closed() {
        let line = atom_line(1, "CA", "ALA", 'A', 1, 0.0, 0.0, 0.0);
        let unterminated = line.trim_end_matches('\n').to_string();
        let structure = structure_of(&[unterminated]);

        let report = run(&structure, 'A').unwrap();

        assert_eq!(render(&report), line);
    }

    #[test]
    fn atom_record_without_chain_column_is_an_error() {
        let structure = structure_of(&["ATOM      1  CA\n".to_string()]);
        let result = run(&structure, 'A');
        assert_eq!(
            result,
            Err(WorkflowError::Record {
                structure: "input",
                line: 1,
                source: RecordError::LineTooShort { column: 21 },
            })
        );
    }
}
