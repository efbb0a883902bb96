pub mod centre;
pub mod chain;
pub mod make_pocket;
pub mod residues;
pub mod rmsd;

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// An 80-column ATOM record in the canonical layout.
    pub fn atom(serial: usize, name: &str, res_name: &str, chain: char, res_seq: isize, xyz: [f64; 3]) -> String {
        format!(
            "ATOM  {:>5}  {:<3} {:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}{:>6.2}{:>6.2}          {:>2}  \n",
            serial,
            name,
            res_name,
            chain,
            res_seq,
            xyz[0],
            xyz[1],
            xyz[2],
            1.0,
            0.0,
            &name[..1],
        )
    }

    pub fn write_pdb(dir: &TempDir, name: &str, lines: &[String]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, lines.concat()).unwrap();
        path
    }

    pub fn output_of(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut out = Vec::new();
        f(&mut out);
        String::from_utf8(out).unwrap()
    }
}
