use crate::core::io::traits::StructureFile;
use crate::core::models::record::PdbRecord;
use crate::core::models::structure::Structure;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line} is not valid UTF-8 text")]
    Encoding { line: usize },
}

/// Plain-text PDB reader.
///
/// Every line is kept, not only coordinate records: tools decide for themselves what to
/// select, and some of them transform or echo lines of any kind.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut records = Vec::new();
        let mut buffer = String::new();

        loop {
            buffer.clear();
            let line_number = records.len() + 1;
            let bytes = reader.read_line(&mut buffer).map_err(|e| {
                if e.kind() == io::ErrorKind::InvalidData {
                    PdbError::Encoding { line: line_number }
                } else {
                    PdbError::Io(e)
                }
            })?;
            if bytes == 0 {
                break;
            }
            trace!(line = line_number, "read record");
            records.push(PdbRecord::new(line_number, buffer.as_str()));
        }

        debug!("Read {} lines.", records.len());
        Ok(Structure::new(records))
    }
}
