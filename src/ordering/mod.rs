//! Canonicalisation of ladder sequences into normal order and index order.
//!
//! Both stages are exchange sorts: adjacent operators are swapped one pair at a time so that the
//! anticommutation sign of every swap can be tracked on the coefficient. Exchanging two identical
//! operators is never a swap, because the product of a fermionic operator with itself vanishes;
//! when a sort needs to move such a pair, the term is annihilated instead and sorting stops.

use std::ops::Range;

use num_complex::ComplexFloat;

use crate::ladder::{Exchange, LadderOperator, LadderSequence, OrderingTier};

pub mod batch;
pub mod expansion;
pub mod index_order;
pub mod normal_order;

pub use batch::{canonicalise_batch, canonicalise_batch_serial};


/// The outcome of an exchange sort over a range of a ladder sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SortOutcome {
    /// The range has been sorted using the given number of exchanges.
    Sorted(usize),

    /// An exchange of identical operators was required after the given number of exchanges, so
    /// the term has been annihilated.
    Annihilated(usize),
}

/// Sorts a range of a ladder sequence by repeated passes of adjacent exchanges until a pass
/// makes no exchange.
///
/// # Arguments
///
/// * `seq` - The sequence to be sorted in place.
/// * `range` - The positions to be sorted. Exchanges never cross the ends of this range.
/// * `needs_exchange` - Returns `true` if the left operator of an adjacent pair must be moved to
/// the right of the right operator.
///
/// # Returns
///
/// The number of exchanges performed, and whether the sort terminated by annihilation.
pub(crate) fn exchange_sort<T, O, F>(
    seq: &mut LadderSequence<T, O>,
    range: Range<usize>,
    needs_exchange: F,
) -> SortOutcome
where
    T: ComplexFloat,
    O: OrderingTier,
    F: Fn(&LadderOperator, &LadderOperator) -> bool,
{
    let mut n_exchanges = 0;
    let last = range.end.min(seq.len()).saturating_sub(1);
    loop {
        let mut exchanged = false;
        for i in range.start..last {
            let (left, right) = (seq.operators()[i], seq.operators()[i + 1]);
            if needs_exchange(&left, &right) {
                match seq.exchange_in_range(i) {
                    Exchange::Swapped => {
                        n_exchanges += 1;
                        exchanged = true;
                    }
                    Exchange::Annihilated => return SortOutcome::Annihilated(n_exchanges),
                }
            }
        }
        if !exchanged {
            return SortOutcome::Sorted(n_exchanges);
        }
    }
}
