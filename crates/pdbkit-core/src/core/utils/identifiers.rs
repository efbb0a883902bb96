use crate::core::models::columns::Columns;
use crate::core::models::record::PdbRecord;

/// Atom names selected as the per-residue reference point when none are configured.
pub const DEFAULT_BACKBONE_ATOMS: &[&str] = &["CA"];

/// The set of atom names that mark a backbone reference atom.
///
/// Names are compared against the trimmed two-character atom name slice, so only names
/// of at most two characters can ever match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackboneSelection {
    names: Vec<String>,
}

impl BackboneSelection {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Short label for messages, e.g. `CA` or `N/CA/C`.
    pub fn describe(&self) -> String {
        self.names.join("/")
    }

    /// Whether `name` fits in the atom name slice the selection compares against.
    pub fn is_selectable_name(name: &str) -> bool {
        let width = Columns::ATOM_NAME.end - Columns::ATOM_NAME.start;
        !name.trim().is_empty() && name.trim().len() <= width
    }

    /// `true` for `ATOM` records whose atom name slice is one of the selected names.
    pub fn matches(&self, record: &PdbRecord) -> bool {
        if !record.is_atom() {
            return false;
        }
        let name = record.atom_name_slice().trim();
        self.names.iter().any(|selected| selected == name)
    }
}

impl Default for BackboneSelection {
    fn default() -> Self {
        Self::new(DEFAULT_BACKBONE_ATOMS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::atom_line;

    fn record(name: &str) -> PdbRecord {
        PdbRecord::new(1, atom_line(1, name, "ALA", 'A', 1, 0.0, 0.0, 0.0))
    }

    #[test]
    fn default_selection_matches_alpha_carbon_only() {
        let selection = BackboneSelection::default();
        assert!(selection.matches(&record("CA")));
        assert!(!selection.matches(&record("CB")));
        assert!(!selection.matches(&record("N")));
    }

    #[test]
    fn selection_ignores_hetatm_records() {
        let selection = BackboneSelection::default();
        let het = PdbRecord::new(
            1,
            atom_line(1, "CA", "CA", 'A', 1, 0.0, 0.0, 0.0).replacen("ATOM  ", "HETATM", 1),
        );
        assert!(!selection.matches(&het));
    }

    #[test]
    fn custom_selection_matches_single_letter_names() {
        let selection = BackboneSelection::new(["N", "CA", "C"]);
        assert!(selection.matches(&record("N")));
        assert!(selection.matches(&record("C")));
        assert!(!selection.matches(&record("O")));
    }

    #[test]
    fn selectable_names_fit_the_atom_name_slice() {
        assert!(BackboneSelection::is_selectable_name("CA"));
        assert!(BackboneSelection::is_selectable_name("N"));
        assert!(!BackboneSelection::is_selectable_name("OXT"));
        assert!(!BackboneSelection::is_selectable_name(" "));
    }
}
