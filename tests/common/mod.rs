use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Trio: one child with unknown trait, one expressing founder, one
/// non-expressing founder.
pub const FAMILY0: &str = "\
name,mother,father,trait
Harry,Lily,James,
James,,,1
Lily,,,0
";

/// Five-member family: two founders (one with negative evidence) and three
/// siblings, one of which expresses the trait.
pub const FAMILY2: &str = "\
name,mother,father,trait
Arthur,,,0
Molly,,,
Fred,Molly,Arthur,1
Ginny,Molly,Arthur,
Ron,Molly,Arthur,
";

/// Write a pedigree fixture into `dir` and return its path.
pub fn write_pedigree(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("pedigree.csv");
    std::fs::write(&path, contents).expect("Failed to write pedigree fixture");
    path
}

/// Run the whole pipeline over `pedigree`, and return the written report.
pub fn run_pipeline(dir: &TempDir, pedigree: &Path, precision: usize, threads: usize) -> String {
    let report = dir.path().join("report.txt");
    let cli = parser::Cli {
        pedigree: pedigree.to_path_buf(),
        verbose : 0,
        quiet   : true,
        output  : Some(report.clone()),
        precision,
        threads,
    };
    pedprob_rs::run(cli).expect("Pipeline should succeed");
    std::fs::read_to_string(report).expect("Failed to read report")
}
