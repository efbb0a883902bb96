use crate::error::{CliError, Result};
use pdbkit::core::io::pdb::PdbFile;
use pdbkit::core::io::traits::StructureFile;
use pdbkit::core::models::structure::Structure;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Reads a whole PDB file, attaching the path to any failure.
pub fn load_structure(path: &Path) -> Result<Structure> {
    info!("Loading structure from {:?}", path);
    let structure = PdbFile::read_from_path(path).map_err(|e| CliError::FileParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    debug!("Read {} lines from {:?}", structure.len(), path);
    Ok(structure)
}

/// Opens the destination for tool output: the `--output` file when given, else stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("Writing output to {:?}", path);
            let file = File::create(path).map_err(|e| CliError::OutputFile {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_input_names_the_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.pdb");

        match load_structure(&path) {
            Err(CliError::FileParsing { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("Expected FileParsing error, got {:?}", other),
        }
    }

    #[test]
    fn output_file_receives_written_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");

        {
            let mut out = open_output(Some(&path)).unwrap();
            out.write_all(b"1.0,2.0,3.0\n").unwrap();
            out.flush().unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "1.0,2.0,3.0\n");
    }

    #[test]
    fn unwritable_output_path_is_reported() {
        let dir = tempdir().unwrap();
        let result = open_output(Some(dir.path()));
        assert!(matches!(result, Err(CliError::OutputFile { .. })));
    }
}
