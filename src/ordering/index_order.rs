//! Index ordering of normal-ordered sequences: raising indices ascending, lowering indices
//! descending.

use log;
use num_complex::ComplexFloat;

use crate::ladder::{
    IndexOrdered, IndexOrderedLadderSequence, LadderSequence, LadderSequenceError,
    NormalOrdered, NormalOrderedLadderSequence, Unordered,
};
use crate::ordering::{exchange_sort, SortOutcome};

/// Sorts the raising block ascending and then the lowering block descending. Neither sort
/// crosses the boundary between the two blocks, so normal order is preserved throughout.
///
/// Within a block all operators share the same kind, so a pair of adjacent equal indices is a
/// pair of identical operators and annihilates the term. The lowering block is left untouched
/// once the raising block has annihilated.
///
/// # Returns
///
/// The total number of exchanges, and whether the term has been annihilated.
pub(crate) fn sort_blocks<T: ComplexFloat>(
    seq: &mut LadderSequence<T, NormalOrdered>,
) -> SortOutcome {
    let n_raising = seq.raising_count();
    let len = seq.len();

    let raising_outcome = exchange_sort(seq, 0..n_raising, |left, right| {
        left.index() >= right.index()
    });
    let SortOutcome::Sorted(n_raising_exchanges) = raising_outcome else {
        log::debug!("Term annihilated by coincident raising operators.");
        return raising_outcome;
    };

    let lowering_outcome = exchange_sort(seq, n_raising..len, |left, right| {
        left.index() <= right.index()
    });
    match lowering_outcome {
        SortOutcome::Sorted(n_lowering_exchanges) => {
            let n_exchanges = n_raising_exchanges + n_lowering_exchanges;
            log::debug!("Index order reached after {n_exchanges} exchange(s).");
            SortOutcome::Sorted(n_exchanges)
        }
        SortOutcome::Annihilated(n_lowering_exchanges) => {
            log::debug!("Term annihilated by coincident lowering operators.");
            SortOutcome::Annihilated(n_raising_exchanges + n_lowering_exchanges)
        }
    }
}

impl<T: ComplexFloat> LadderSequence<T, IndexOrdered> {
    /// Brings a normal-ordered sequence into index order.
    ///
    /// # Arguments
    ///
    /// * `seq` - The normal-ordered sequence.
    ///
    /// # Returns
    ///
    /// The index-ordered sequence, whose coefficient carries the parity of every exchange, or is
    /// zero if the term vanishes. In the latter case the operators are left where annihilation
    /// was detected. Fails with [`LadderSequenceError::InvalidState`] if `seq` is not actually in
    /// normal order.
    pub fn from_normal_ordered(
        seq: NormalOrderedLadderSequence<T>,
    ) -> Result<Self, LadderSequenceError> {
        if !seq.is_in_normal_order() {
            let msg = format!(
                "cannot index-order `[{}]` because it is not in normal order",
                seq.operators()
                    .iter()
                    .map(|op| op.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            log::error!("{msg}");
            return Err(LadderSequenceError::InvalidState(msg));
        }
        let mut seq = seq;
        sort_blocks(&mut seq);
        Ok(seq.retag())
    }

    /// Canonicalises an arbitrary sequence by normal ordering followed by index ordering.
    pub fn from_sequence(seq: LadderSequence<T, Unordered>) -> Self {
        let mut seq = NormalOrderedLadderSequence::<T>::from_sequence(seq);
        sort_blocks(&mut seq);
        seq.retag()
    }
}

impl<T: ComplexFloat> LadderSequence<T, NormalOrdered> {
    /// Returns an index-ordered copy of this sequence.
    pub fn to_index_order(&self) -> Result<IndexOrderedLadderSequence<T>, LadderSequenceError> {
        IndexOrderedLadderSequence::<T>::from_normal_ordered(self.clone())
    }
}

impl<T: ComplexFloat> LadderSequence<T, Unordered> {
    /// Returns the canonical, index-ordered copy of this sequence.
    pub fn canonicalise(&self) -> IndexOrderedLadderSequence<T> {
        IndexOrderedLadderSequence::<T>::from_sequence(self.clone())
    }
}

impl<T: ComplexFloat> From<LadderSequence<T, Unordered>> for IndexOrderedLadderSequence<T> {
    fn from(seq: LadderSequence<T, Unordered>) -> Self {
        Self::from_sequence(seq)
    }
}

impl<T: ComplexFloat> TryFrom<LadderSequence<T, NormalOrdered>> for IndexOrderedLadderSequence<T> {
    type Error = LadderSequenceError;

    fn try_from(seq: LadderSequence<T, NormalOrdered>) -> Result<Self, Self::Error> {
        Self::from_normal_ordered(seq)
    }
}
