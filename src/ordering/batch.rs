//! Canonicalisation of many independent ladder sequences.

use num_complex::ComplexFloat;
use rayon::prelude::*;

use crate::ladder::{IndexOrderedLadderSequence, LadderSequence, Unordered};

/// Canonicalises every sequence of a batch in parallel, one sequence per task.
///
/// Each sequence is exclusively owned by the task processing it, so no synchronisation is
/// needed. The output preserves the input order.
pub fn canonicalise_batch<T>(
    sequences: Vec<LadderSequence<T, Unordered>>,
) -> Vec<IndexOrderedLadderSequence<T>>
where
    T: ComplexFloat + Send + Sync,
{
    sequences
        .into_par_iter()
        .map(IndexOrderedLadderSequence::<T>::from_sequence)
        .collect()
}

/// Canonicalises every sequence of a batch on the current thread.
pub fn canonicalise_batch_serial<T>(
    sequences: Vec<LadderSequence<T, Unordered>>,
) -> Vec<IndexOrderedLadderSequence<T>>
where
    T: ComplexFloat,
{
    sequences
        .into_iter()
        .map(IndexOrderedLadderSequence::<T>::from_sequence)
        .collect()
}
