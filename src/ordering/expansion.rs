//! Normal ordering with contractions, which splits a single product into a sum of
//! normal-ordered terms.

use indexmap::IndexMap;
use log;
use num_complex::ComplexFloat;

use crate::ladder::{
    LadderOperator, LadderSequence, NormalOrderedLadderSequence, Unordered,
};
use crate::ordering::index_order::sort_blocks;
use crate::ordering::SortOutcome;

impl<T: ComplexFloat> LadderSequence<T, Unordered> {
    /// Expands this product into a sum of normal-ordered terms using the full canonical
    /// anticommutation relations.
    ///
    /// Moving a raising operator $`a^{\dagger}_q`$ to the left of a lowering operator $`a_p`$ uses
    /// $`a_p a^{\dagger}_q = \delta_{pq} - a^{\dagger}_q a_p`$, so whenever $`p = q`$ an
    /// additional term with both operators removed is generated, carrying the sign accumulated so
    /// far. Every generated term is then brought into index order, so that products differing
    /// only by a permutation of operators are merged with the correct relative sign. Terms acting
    /// twice with the same kind on the same spin-orbital vanish and are discarded, as are merged
    /// terms whose coefficients cancel.
    ///
    /// # Returns
    ///
    /// The non-vanishing terms, each in index order and hence also in normal order, with like
    /// terms merged. Terms are sorted by their number of operators; terms of equal length keep
    /// the order in which they were generated.
    pub fn to_normal_order_expansion(&self) -> Vec<NormalOrderedLadderSequence<T>> {
        let mut collected: IndexMap<Vec<LadderOperator>, T> = IndexMap::new();
        let mut pending = vec![self.clone()];
        while let Some(mut term) = pending.pop() {
            // Insertion sort: move each raising operator left past the lowering operators
            // preceding it.
            for i in 1..term.len() {
                for j in (1..=i).rev() {
                    let (left, right) = (term.operators()[j - 1], term.operators()[j]);
                    if !(left.is_lowering() && right.is_raising()) {
                        break;
                    }
                    if left.index() == right.index() {
                        let mut contracted = term.operators().to_vec();
                        contracted.drain(j - 1..=j);
                        pending.push(LadderSequence::new(contracted, *term.coefficient()));
                    }
                    term.exchange_in_range(j - 1);
                }
            }

            let mut term: NormalOrderedLadderSequence<T> = term.retag();
            if let SortOutcome::Annihilated(_) = sort_blocks(&mut term) {
                continue;
            }
            let (operators, coefficient) = term.into_parts();
            let total = collected.entry(operators).or_insert_with(T::zero);
            *total = *total + coefficient;
        }

        let mut terms = collected
            .into_iter()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|(operators, coefficient)| {
                NormalOrderedLadderSequence::<T>::from_parts_unchecked(operators, coefficient)
            })
            .collect::<Vec<_>>();
        terms.sort_by_key(|term| term.len());
        log::debug!(
            "Contraction expansion of a {}-operator product gave {} term(s).",
            self.len(),
            terms.len()
        );
        terms
    }
}
