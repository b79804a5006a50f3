//! Normal ordering: every raising operator to the left of every lowering operator.

use log;
use num_complex::ComplexFloat;

use crate::ladder::{LadderSequence, NormalOrdered, NormalOrderedLadderSequence, Unordered};
use crate::ordering::{exchange_sort, SortOutcome};

impl<T: ComplexFloat> LadderSequence<T, NormalOrdered> {
    /// Brings a sequence into normal order.
    ///
    /// Each lowering operator immediately followed by a raising operator is exchanged, with the
    /// coefficient negated, until no such pair remains. Operators of the same kind are never
    /// exchanged, so their relative order is preserved and no annihilation can occur here. Every
    /// exchange removes exactly one lowering-before-raising inversion, so at most
    /// $`n(n-1)/2`$ exchanges are performed.
    ///
    /// # Arguments
    ///
    /// * `seq` - The sequence to be normal-ordered. A zero coefficient is carried through.
    ///
    /// # Returns
    ///
    /// The normal-ordered sequence.
    pub fn from_sequence(seq: LadderSequence<T, Unordered>) -> Self {
        let mut seq = seq;
        let len = seq.len();
        let outcome = exchange_sort(&mut seq, 0..len, |left, right| {
            left.is_lowering() && right.is_raising()
        });
        // Raising and lowering operators are never identical, so this sort cannot annihilate.
        let (SortOutcome::Sorted(n_exchanges) | SortOutcome::Annihilated(n_exchanges)) = outcome;
        log::debug!("Normal order reached after {n_exchanges} exchange(s).");
        seq.retag()
    }
}

impl<T: ComplexFloat> LadderSequence<T, Unordered> {
    /// Returns a normal-ordered copy of this sequence.
    pub fn to_normal_order(&self) -> NormalOrderedLadderSequence<T> {
        NormalOrderedLadderSequence::<T>::from_sequence(self.clone())
    }
}

impl<T: ComplexFloat> From<LadderSequence<T, Unordered>> for NormalOrderedLadderSequence<T> {
    fn from(seq: LadderSequence<T, Unordered>) -> Self {
        Self::from_sequence(seq)
    }
}
