use tempfile::tempdir;

use crate::drivers::ladder_canonicalisation::LadderCanonicalisationParams;
use crate::io::{read_qladder_yaml, write_qladder_yaml};
use crate::ladder::{LadderOperator, LadderSequence, Unordered};

#[test]
fn test_io_params_yaml() {
    let dir = tempdir().unwrap();
    let params = LadderCanonicalisationParams::builder()
        .parallel(false)
        .write_terms(true)
        .build()
        .unwrap();
    write_qladder_yaml(dir.path().join("params"), &params).unwrap();
    let read: LadderCanonicalisationParams =
        read_qladder_yaml(dir.path().join("params.yml")).unwrap();
    assert_eq!(read, params);
}

#[test]
fn test_io_params_yaml_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("partial.yml");
    std::fs::write(&path, "expand_contractions: true\n").unwrap();
    let read: LadderCanonicalisationParams = read_qladder_yaml(&path).unwrap();
    assert!(read.expand_contractions);
    assert!(read.drop_vanishing_terms);
    assert!(read.parallel);
    assert!(!read.write_terms);
}

#[test]
fn test_io_sequences_yaml() {
    let dir = tempdir().unwrap();
    let sequences = vec![
        LadderSequence::new(
            vec![LadderOperator::lowering(1), LadderOperator::raising(0)],
            0.5,
        ),
        LadderSequence::new(vec![LadderOperator::raising(3)], -2.0),
    ];
    write_qladder_yaml(dir.path().join("terms"), &sequences).unwrap();
    let read: Vec<LadderSequence<f64, Unordered>> =
        read_qladder_yaml(dir.path().join("terms.yml")).unwrap();
    assert_eq!(read, sequences);
    assert_eq!(read[0].coefficient(), sequences[0].coefficient());
}

#[test]
fn test_io_missing_file() {
    let dir = tempdir().unwrap();
    assert!(
        read_qladder_yaml::<LadderCanonicalisationParams, _>(dir.path().join("absent.yml"))
            .is_err()
    );
}
