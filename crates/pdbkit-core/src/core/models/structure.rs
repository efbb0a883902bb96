use super::record::PdbRecord;

/// An ordered list of records read from one PDB file.
///
/// Records keep their file order and line numbers; nothing is indexed or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structure {
    records: Vec<PdbRecord>,
}

impl Structure {
    pub fn new(records: Vec<PdbRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PdbRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over `ATOM` records in file order.
    pub fn atoms(&self) -> impl Iterator<Item = &PdbRecord> {
        self.records.iter().filter(|record| record.is_atom())
    }
}

impl FromIterator<PdbRecord> for Structure {
    fn from_iter<I: IntoIterator<Item = PdbRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
