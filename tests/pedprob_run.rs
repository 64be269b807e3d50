mod common;
use common::{run_pipeline, write_pedigree, FAMILY0, FAMILY2};

#[cfg(test)]
use pretty_assertions::assert_eq;

#[test]
fn run_family0() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let pedigree = write_pedigree(&dir, FAMILY0);
    let report = run_pipeline(&dir, &pedigree, 4, 1);

    let expect = "\
Harry:
  Gene:
    2: 0.0092
    1: 0.4557
    0: 0.5351
  Trait:
    True: 0.2665
    False: 0.7335
James:
  Gene:
    2: 0.1976
    1: 0.5106
    0: 0.2918
  Trait:
    True: 1.0000
    False: 0.0000
Lily:
  Gene:
    2: 0.0036
    1: 0.0136
    0: 0.9827
  Trait:
    True: 0.0000
    False: 1.0000
";
    assert_eq!(report, expect);
}

#[test]
fn run_family2() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let pedigree = write_pedigree(&dir, FAMILY2);
    let report = run_pipeline(&dir, &pedigree, 4, 1);

    let expect = "\
Arthur:
  Gene:
    2: 0.0507
    1: 0.1016
    0: 0.8477
  Trait:
    True: 0.0000
    False: 1.0000
Fred:
  Gene:
    2: 0.0114
    1: 0.7508
    0: 0.2378
  Trait:
    True: 1.0000
    False: 0.0000
Ginny:
  Gene:
    2: 0.0070
    1: 0.3503
    0: 0.6427
  Trait:
    True: 0.2071
    False: 0.7929
Molly:
  Gene:
    2: 0.1399
    1: 0.2198
    0: 0.6403
  Trait:
    True: 0.2204
    False: 0.7796
Ron:
  Gene:
    2: 0.0070
    1: 0.3503
    0: 0.6427
  Trait:
    True: 0.2071
    False: 0.7929
";
    assert_eq!(report, expect);
}

#[test]
fn repeated_runs_are_reproducible() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let pedigree = write_pedigree(&dir, FAMILY0);

    let first = run_pipeline(&dir, &pedigree, 9, 1);
    let second = run_pipeline(&dir, &pedigree, 9, 1);
    assert_eq!(first, second);
}

#[test]
fn parallel_enumeration_matches_single_threaded() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let pedigree = write_pedigree(&dir, FAMILY2);

    let single = run_pipeline(&dir, &pedigree, 4, 1);
    let parallel = run_pipeline(&dir, &pedigree, 4, 0);
    assert_eq!(single, parallel);
}

#[test]
fn malformed_pedigree_is_fatal() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let pedigree = write_pedigree(&dir, "name,mother,father,trait\nHarry,Lily,,\nLily,,,0\n");

    let cli = parser::Cli {
        pedigree,
        verbose  : 0,
        quiet    : true,
        output   : Some(dir.path().join("report.txt")),
        precision: 4,
        threads  : 1,
    };
    assert!(pedprob_rs::run(cli).is_err());
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let cli = parser::Cli {
        pedigree : dir.path().join("nonexistent.csv"),
        verbose  : 0,
        quiet    : true,
        output   : None,
        precision: 4,
        threads  : 1,
    };
    assert!(pedprob_rs::run(cli).is_err());
}
