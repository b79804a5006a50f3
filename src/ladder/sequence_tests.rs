use std::collections::HashMap;

use num_complex::Complex;

use crate::ladder::{
    Exchange, IndexOrderedLadderSequence, LadderOperator, LadderSequence, LadderSequenceError,
    NormalOrderedLadderSequence, Unordered,
};

type C128 = Complex<f64>;

fn up(i: usize) -> LadderOperator {
    LadderOperator::raising(i)
}

fn down(i: usize) -> LadderOperator {
    LadderOperator::lowering(i)
}

#[test]
fn test_ladder_sequence_default() {
    let seq = LadderSequence::<f64, Unordered>::default();
    assert!(seq.is_empty());
    assert_eq!(*seq.coefficient(), 1.0);
    assert!(seq.is_in_normal_order());
    assert!(seq.is_in_index_order());

    let seq = IndexOrderedLadderSequence::<C128>::default();
    assert_eq!(seq.len(), 0);
    assert_eq!(*seq.coefficient(), C128::new(1.0, 0.0));
    assert_eq!(seq.tier_name(), "index-ordered");
}

#[test]
fn test_ladder_sequence_from_tagged() {
    let seq = LadderSequence::from_tagged(&[("u", 1), ("d", 0)], 0.5).unwrap();
    assert_eq!(seq.operators(), &[up(1), down(0)]);
    assert_eq!(*seq.coefficient(), 0.5);

    let err = LadderSequence::from_tagged(&[("u", 1), ("d", -4)], 0.5).unwrap_err();
    assert!(matches!(err, LadderSequenceError::InvalidArgument(_)));

    let err = LadderSequence::from_tagged(&[("x", 1)], 1.0).unwrap_err();
    assert!(matches!(err, LadderSequenceError::InvalidArgument(_)));
}

#[test]
fn test_ladder_sequence_exchange() {
    let mut seq = LadderSequence::new(vec![down(2), up(1), up(3)], 1.0);
    assert_eq!(seq.exchange(0).unwrap(), Exchange::Swapped);
    assert_eq!(seq.operators(), &[up(1), down(2), up(3)]);
    assert_eq!(*seq.coefficient(), -1.0);

    assert_eq!(seq.exchange(1).unwrap(), Exchange::Swapped);
    assert_eq!(seq.operators(), &[up(1), up(3), down(2)]);
    assert_eq!(*seq.coefficient(), 1.0);

    // Same index but different kinds still anticommute.
    let mut seq = LadderSequence::new(vec![down(4), up(4)], 2.0);
    assert_eq!(seq.exchange(0).unwrap(), Exchange::Swapped);
    assert_eq!(*seq.coefficient(), -2.0);
}

#[test]
fn test_ladder_sequence_exchange_annihilation() {
    let mut seq = LadderSequence::new(vec![up(0), up(4), up(4)], 3.0);
    assert_eq!(seq.exchange(1).unwrap(), Exchange::Annihilated);
    assert_eq!(seq.operators(), &[up(0), up(4), up(4)]);
    assert!(seq.is_vanishing());
}

#[test]
fn test_ladder_sequence_exchange_out_of_range() {
    let mut seq = LadderSequence::new(vec![up(0), down(1)], 1.0);
    assert!(matches!(
        seq.exchange(1),
        Err(LadderSequenceError::InvalidArgument(_))
    ));
    assert!(matches!(
        seq.exchange(usize::MAX),
        Err(LadderSequenceError::InvalidArgument(_))
    ));

    let mut empty = LadderSequence::<f64, Unordered>::default();
    assert!(empty.exchange(0).is_err());
    assert_eq!(*empty.coefficient(), 1.0);
}

#[test]
fn test_ladder_sequence_equality_ignores_coefficient() {
    let a = LadderSequence::new(vec![up(0), down(1)], 1.0);
    let b = LadderSequence::new(vec![up(0), down(1)], -7.5);
    let c = LadderSequence::new(vec![down(1), up(0)], 1.0);
    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut grouped = HashMap::<IndexOrderedLadderSequence, f64>::new();
    for seq in [a, b, c] {
        let canonical = seq.canonicalise();
        *grouped.entry(canonical.clone()).or_insert(0.0) += canonical.coefficient();
    }
    assert_eq!(grouped.len(), 1);
    let (key, total) = grouped.into_iter().next().unwrap();
    assert_eq!(key.operators(), &[up(0), down(1)]);
    assert_eq!(total, 1.0 - 7.5 - 1.0);
}

#[test]
fn test_ladder_sequence_order_predicates() {
    let seq = LadderSequence::new(vec![up(3), up(1), down(0), down(2)], 1.0);
    assert!(seq.is_in_normal_order());
    assert!(!seq.is_in_index_order());

    let seq = LadderSequence::new(vec![up(1), up(3), down(2), down(0)], 1.0);
    assert!(seq.is_in_normal_order());
    assert!(seq.is_in_index_order());

    let seq = LadderSequence::new(vec![up(1), down(2), up(3)], 1.0);
    assert!(!seq.is_in_normal_order());
    assert!(!seq.is_in_index_order());

    let seq = LadderSequence::new(vec![up(1), up(1)], 1.0);
    assert!(seq.is_in_normal_order());
    assert!(!seq.is_in_index_order());
}

#[test]
fn test_ladder_sequence_counts() {
    let seq = LadderSequence::new(vec![down(2), up(1), up(2), down(5)], 1.0);
    assert_eq!(seq.raising_count(), 2);
    assert_eq!(seq.lowering_count(), 2);
    assert_eq!(seq.particle_number_change(), 0);
    assert!(seq.conserves_particle_number());
    assert_eq!(
        seq.unique_indices().into_iter().collect::<Vec<_>>(),
        vec![2, 1, 5]
    );

    let seq = LadderSequence::new(vec![up(0), up(1), down(5)], 1.0);
    assert_eq!(seq.particle_number_change(), 1);
    assert!(!seq.conserves_particle_number());
}

#[test]
fn test_ladder_sequence_hermitian_conjugate() {
    let seq = LadderSequence::new(vec![up(0), up(1), down(2)], C128::new(1.0, 2.0));
    let conj = seq.hermitian_conjugate();
    assert_eq!(conj.operators(), &[up(2), down(1), down(0)]);
    assert_eq!(*conj.coefficient(), C128::new(1.0, -2.0));
    assert_eq!(conj.hermitian_conjugate().operators(), seq.operators());
}

#[test]
fn test_ladder_sequence_product() {
    let a = LadderSequence::new(vec![up(0)], 2.0);
    let b = LadderSequence::new(vec![down(1), up(3)], -1.5);
    let ab = &a * &b;
    assert_eq!(ab.operators(), &[up(0), down(1), up(3)]);
    assert_eq!(*ab.coefficient(), -3.0);

    let ba = b * a;
    assert_eq!(ba.operators(), &[down(1), up(3), up(0)]);
    assert_eq!(*ba.coefficient(), -3.0);

    let id = LadderSequence::<f64, Unordered>::default();
    let product = &id * LadderSequence::new(vec![up(4)], 0.25);
    assert_eq!(product.operators(), &[up(4)]);
    assert_eq!(*product.coefficient(), 0.25);
}

#[test]
fn test_ladder_sequence_tier_weakening() {
    let canonical = LadderSequence::new(vec![down(0), up(2), up(1)], 1.0).canonicalise();
    let normal = NormalOrderedLadderSequence::from(canonical.clone());
    assert_eq!(normal.operators(), canonical.operators());
    assert_eq!(normal.coefficient(), canonical.coefficient());
    assert_eq!(normal.tier_name(), "normal-ordered");

    let unordered = LadderSequence::<f64, Unordered>::from(normal);
    assert_eq!(unordered.operators(), canonical.operators());
    assert_eq!(unordered.tier_name(), "unordered");

    let (operators, coefficient) = canonical.into_unordered().into_parts();
    assert_eq!(operators, vec![up(1), up(2), down(0)]);
    assert_eq!(coefficient, -1.0);
}

#[test]
fn test_ladder_sequence_clone_is_independent() {
    let mut seq = LadderSequence::new(vec![down(0), up(1)], 1.0);
    let copy = seq.clone();
    seq.exchange(0).unwrap();
    seq.push(up(7));
    assert_eq!(copy.operators(), &[down(0), up(1)]);
    assert_eq!(*copy.coefficient(), 1.0);
    assert_eq!(seq.operators(), &[up(1), down(0), up(7)]);
}

#[test]
fn test_ladder_sequence_display() {
    let seq = LadderSequence::new(vec![up(0), up(3), down(1)], -0.5);
    assert_eq!(seq.to_string(), "-0.5 × [0u 3u 1d]");
    assert_eq!(LadderSequence::<f64, Unordered>::default().to_string(), "1 × []");
}

#[test]
fn test_ladder_sequence_serde() {
    let seq = LadderSequence::new(vec![down(2), up(1)], 0.75).canonicalise();
    let yaml = serde_yaml::to_string(&seq).unwrap();
    let read: LadderSequence<f64, Unordered> = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(read.operators(), seq.operators());
    assert_eq!(read.coefficient(), seq.coefficient());

    let yaml = "operators:\n  - kind: Raising\n    index: 2\n  - kind: Lowering\n    index: -1\ncoefficient: 1.0\n";
    assert!(serde_yaml::from_str::<LadderSequence<f64, Unordered>>(yaml).is_err());
}

#[test]
fn test_ladder_sequence_with_coefficient() {
    let seq = LadderSequence::<f64, Unordered>::from_operators(vec![down(1), up(0)]);
    assert_eq!(*seq.coefficient(), 1.0);

    let canonical = seq.canonicalise().with_coefficient(2.5);
    assert_eq!(canonical.operators(), &[up(0), down(1)]);
    assert_eq!(*canonical.coefficient(), 2.5);
    assert!(canonical.with_coefficient(0.0).is_vanishing());
}
