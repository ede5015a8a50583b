//! clathrin-test-data
//!
//! A module to provide test structures embedded in the crate for use in
//! testing. The structures are synthetic minimal peptides, small enough to
//! reason about by hand but with real backbone and side-chain geometry.
//!
//! The test files are represented as `TestFile` objects which package the raw
//! binary data and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use clathrin_test_data::TestFile;
/// let (pdb_file, _temp) = TestFile::peptide_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Five-residue peptide (ALA-ARG-GLY-SER-LEU) with full backbone and an
    /// arginine side chain reaching the eta nitrogen. 34 atoms.
    pub fn peptide_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/peptide5.pdb"),
            suffix: "pdb",
        }
    }

    /// CA-only trace of the same five residues, for testing backbone
    /// imputation on centroid-only structures.
    pub fn peptide_ca_trace() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/ca_trace.pdb"),
            suffix: "pdb",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let file = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;
        fs::write(file.path(), self.filebinary)?;
        let path = file
            .path()
            .to_str()
            .expect("tempfile path is valid utf-8")
            .to_string();
        Ok((path, file))
    }
}
