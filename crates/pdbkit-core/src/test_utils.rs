use crate::core::models::record::PdbRecord;
use crate::core::models::structure::Structure;

/// Formats an 80-column ATOM record in the canonical PDB layout.
#[allow(clippy::too_many_arguments)]
pub fn atom_line(
    serial: usize,
    name: &str,
    res_name: &str,
    chain: char,
    res_seq: isize,
    x: f64,
    y: f64,
    z: f64,
) -> String {
    let padded_name = if name.len() < 4 {
        format!(" {:<3}", name)
    } else {
        name.to_string()
    };
    format!(
        "ATOM  {:>5} {:<4} {:>3} {:1}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}  \n",
        serial,
        padded_name,
        res_name,
        chain,
        res_seq,
        x,
        y,
        z,
        1.0,
        0.0,
        &name[..1],
    )
}

/// Builds a structure from whole lines, numbering them from 1.
pub fn structure_of(lines: &[String]) -> Structure {
    Structure::new(
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| PdbRecord::new(i + 1, line.clone()))
            .collect(),
    )
}

/// A chain `A` backbone with one CA record per `(residue name, position)` entry.
pub fn ca_trace(residues: &[(&str, [f64; 3])]) -> Vec<String> {
    residues
        .iter()
        .enumerate()
        .map(|(i, (name, [x, y, z]))| atom_line(i + 1, "CA", name, 'A', i as isize + 1, *x, *y, *z))
        .collect()
}
