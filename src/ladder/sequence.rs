//! Sequences of ladder operators carrying a scalar coefficient, tagged by ordering tier.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Mul;

use indexmap::IndexSet;
use itertools::Itertools;
use num_complex::ComplexFloat;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ladder::{LadderOperator, LadderSequenceError};

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod sequence_tests;

// ==============
// Ordering tiers
// ==============

mod private {
    pub trait Sealed {}

    impl Sealed for super::Unordered {}
    impl Sealed for super::NormalOrdered {}
    impl Sealed for super::IndexOrdered {}
}

/// Trait for the zero-sized markers recording which ordering invariants a [`LadderSequence`] is
/// guaranteed to satisfy.
pub trait OrderingTier:
    private::Sealed + Clone + Copy + fmt::Debug + Default + Send + Sync + 'static
{
    /// A human-readable name of the tier.
    const NAME: &'static str;
}

/// Marker for sequences with no ordering guarantee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unordered;

/// Marker for sequences in which every raising operator precedes every lowering operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NormalOrdered;

/// Marker for normal-ordered sequences whose raising indices are strictly ascending and whose
/// lowering indices are strictly descending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexOrdered;

impl OrderingTier for Unordered {
    const NAME: &'static str = "unordered";
}

impl OrderingTier for NormalOrdered {
    const NAME: &'static str = "normal-ordered";
}

impl OrderingTier for IndexOrdered {
    const NAME: &'static str = "index-ordered";
}

// ================
// Exchange outcome
// ================

/// An enumerated type describing the outcome of exchanging two adjacent ladder operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exchange {
    /// The two operators have been swapped and the coefficient negated.
    Swapped,

    /// The two operators are identical, so the term vanishes. The coefficient has been set to
    /// zero and the operators have not been moved.
    Annihilated,
}

// ==================
// Struct definitions
// ==================

/// A structure representing an ordered product of fermionic ladder operators multiplied by a
/// scalar coefficient.
///
/// The type parameter `O` records which ordering invariants the operator list is guaranteed to
/// satisfy. Only [`Unordered`] sequences can be constructed freely; the other tiers are
/// obtained by running the ordering algorithms, or by weakening a stronger tier.
///
/// Equality and hashing consider the operator list only, never the coefficient, so that like
/// terms can be grouped and their coefficients summed.
#[derive(Clone, Debug)]
pub struct LadderSequence<T = f64, O: OrderingTier = Unordered> {
    /// The ladder operators in product order, left to right.
    operators: Vec<LadderOperator>,

    /// The accumulated scalar coefficient.
    coefficient: T,

    tier: PhantomData<O>,
}

/// A ladder sequence in normal order.
pub type NormalOrderedLadderSequence<T = f64> = LadderSequence<T, NormalOrdered>;

/// A ladder sequence in normal order and index order.
pub type IndexOrderedLadderSequence<T = f64> = LadderSequence<T, IndexOrdered>;

// =======================
// Tier-agnostic behaviour
// =======================

impl<T, O: OrderingTier> LadderSequence<T, O> {
    /// Assembles a sequence of any tier without checking the tier's invariants.
    pub(crate) fn from_parts_unchecked(operators: Vec<LadderOperator>, coefficient: T) -> Self {
        Self {
            operators,
            coefficient,
            tier: PhantomData,
        }
    }

    /// Relabels the ordering tier without touching the data.
    pub(crate) fn retag<P: OrderingTier>(self) -> LadderSequence<T, P> {
        LadderSequence {
            operators: self.operators,
            coefficient: self.coefficient,
            tier: PhantomData,
        }
    }

    /// The ladder operators in product order.
    pub fn operators(&self) -> &[LadderOperator] {
        &self.operators
    }

    /// The coefficient of this term.
    pub fn coefficient(&self) -> &T {
        &self.coefficient
    }

    /// Decomposes this sequence into its operator list and coefficient.
    pub fn into_parts(self) -> (Vec<LadderOperator>, T) {
        (self.operators, self.coefficient)
    }

    /// The name of the ordering tier of this sequence.
    pub fn tier_name(&self) -> &'static str {
        O::NAME
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// The number of raising operators in this sequence.
    pub fn raising_count(&self) -> usize {
        self.operators.iter().filter(|op| op.is_raising()).count()
    }

    /// The number of lowering operators in this sequence.
    pub fn lowering_count(&self) -> usize {
        self.operators.iter().filter(|op| op.is_lowering()).count()
    }

    /// Checks if every raising operator in this sequence precedes every lowering operator.
    pub fn is_in_normal_order(&self) -> bool {
        !self
            .operators
            .iter()
            .tuple_windows()
            .any(|(left, right)| left.is_lowering() && right.is_raising())
    }

    /// Checks if this sequence is in normal order, with strictly ascending raising indices and
    /// strictly descending lowering indices.
    pub fn is_in_index_order(&self) -> bool {
        self.is_in_normal_order()
            && self
                .operators
                .iter()
                .tuple_windows()
                .all(|(left, right)| match (left.is_raising(), right.is_raising()) {
                    (true, true) => left.index() < right.index(),
                    (false, false) => left.index() > right.index(),
                    _ => true,
                })
    }

    /// The distinct spin-orbital indices acted upon, in order of first appearance.
    pub fn unique_indices(&self) -> IndexSet<usize> {
        self.operators.iter().map(LadderOperator::index).collect()
    }

    /// The change in particle number effected by this term, *i.e.* the number of raising
    /// operators minus the number of lowering operators.
    pub fn particle_number_change(&self) -> isize {
        self.operators
            .iter()
            .map(|op| if op.is_raising() { 1 } else { -1 })
            .sum()
    }

    pub fn conserves_particle_number(&self) -> bool {
        self.particle_number_change() == 0
    }

    /// Copies this sequence into the unordered tier. No reordering takes place.
    pub fn into_unordered(self) -> LadderSequence<T, Unordered> {
        self.retag()
    }
}

impl<T: ComplexFloat, O: OrderingTier> LadderSequence<T, O> {
    /// Checks if this term vanishes, *i.e.* if its coefficient is exactly zero.
    pub fn is_vanishing(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Returns this sequence with its coefficient replaced. Ordering invariants concern the
    /// operator list only, so this is available on every tier.
    #[must_use]
    pub fn with_coefficient(self, coefficient: T) -> Self {
        Self {
            coefficient,
            ..self
        }
    }

    /// Exchanges the operators at positions `i` and `i + 1`.
    ///
    /// Distinct operators anticommute, so they are swapped and the coefficient is negated.
    /// Identical operators (same kind and same index) annihilate the term: the coefficient is
    /// set to zero and the operators stay where they are.
    ///
    /// # Arguments
    ///
    /// * `i` - The position of the left operator of the pair.
    ///
    /// # Returns
    ///
    /// The outcome of the exchange, or [`LadderSequenceError::InvalidArgument`] if `i + 1` is
    /// not a valid position.
    pub(crate) fn exchange_adjacent(&mut self, i: usize) -> Result<Exchange, LadderSequenceError> {
        let len = self.operators.len();
        if len < 2 || i > len - 2 {
            return Err(LadderSequenceError::InvalidArgument(format!(
                "cannot exchange positions {i} and {} in a sequence of length {len}",
                i.saturating_add(1)
            )));
        }
        Ok(self.exchange_in_range(i))
    }

    /// Exchanges the operators at positions `i` and `i + 1`, where `i + 1` is known to be in
    /// range.
    pub(crate) fn exchange_in_range(&mut self, i: usize) -> Exchange {
        if self.operators[i] == self.operators[i + 1] {
            self.coefficient = T::zero();
            Exchange::Annihilated
        } else {
            self.operators.swap(i, i + 1);
            self.coefficient = -self.coefficient;
            Exchange::Swapped
        }
    }
}

impl<T: ComplexFloat, O: OrderingTier> Default for LadderSequence<T, O> {
    /// An empty product with unit coefficient, which satisfies every ordering invariant.
    fn default() -> Self {
        Self::from_parts_unchecked(Vec::new(), T::one())
    }
}

impl<T, O: OrderingTier> PartialEq for LadderSequence<T, O> {
    fn eq(&self, other: &Self) -> bool {
        self.operators == other.operators
    }
}

impl<T, O: OrderingTier> Eq for LadderSequence<T, O> {}

impl<T, O: OrderingTier> Hash for LadderSequence<T, O> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.operators.hash(state);
    }
}

impl<T: fmt::Display, O: OrderingTier> fmt::Display for LadderSequence<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} × [{}]",
            self.coefficient,
            self.operators.iter().map(|op| op.to_string()).join(" ")
        )
    }
}

// =========================
// Unordered-tier behaviour
// =========================

impl<T: ComplexFloat> LadderSequence<T, Unordered> {
    /// Constructs an unordered sequence from operators in product order.
    pub fn new(operators: Vec<LadderOperator>, coefficient: T) -> Self {
        Self::from_parts_unchecked(operators, coefficient)
    }

    /// Constructs an unordered sequence with unit coefficient.
    pub fn from_operators(operators: Vec<LadderOperator>) -> Self {
        Self::new(operators, T::one())
    }

    /// Constructs an unordered sequence from unvalidated `(tag, index)` pairs.
    ///
    /// # Arguments
    ///
    /// * `tagged` - Kind tags and signed indices in product order.
    /// * `coefficient` - The initial coefficient.
    ///
    /// # Returns
    ///
    /// The sequence, or [`LadderSequenceError::InvalidArgument`] for the first malformed pair.
    pub fn from_tagged(tagged: &[(&str, i64)], coefficient: T) -> Result<Self, LadderSequenceError> {
        let operators = tagged
            .iter()
            .map(|&(tag, index)| LadderOperator::from_tagged(tag, index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(operators, coefficient))
    }

    /// Appends an operator to the right of the product.
    pub fn push(&mut self, operator: LadderOperator) {
        self.operators.push(operator);
    }

    /// Exchanges the adjacent operators at positions `i` and `i + 1`, negating the coefficient,
    /// or setting it to zero if the two operators are identical.
    pub fn exchange(&mut self, i: usize) -> Result<Exchange, LadderSequenceError> {
        self.exchange_adjacent(i)
    }

    /// Returns the Hermitian conjugate of this term: the product is reversed, every operator is
    /// conjugated, and the coefficient is complex-conjugated.
    #[must_use]
    pub fn hermitian_conjugate(&self) -> Self {
        Self::new(
            self.operators
                .iter()
                .rev()
                .map(LadderOperator::conjugate)
                .collect(),
            self.coefficient.conj(),
        )
    }
}

// -------------------
// Tier weakening
// -------------------

impl<T> From<LadderSequence<T, IndexOrdered>> for LadderSequence<T, NormalOrdered> {
    fn from(seq: LadderSequence<T, IndexOrdered>) -> Self {
        seq.retag()
    }
}

impl<T> From<LadderSequence<T, IndexOrdered>> for LadderSequence<T, Unordered> {
    fn from(seq: LadderSequence<T, IndexOrdered>) -> Self {
        seq.retag()
    }
}

impl<T> From<LadderSequence<T, NormalOrdered>> for LadderSequence<T, Unordered> {
    fn from(seq: LadderSequence<T, NormalOrdered>) -> Self {
        seq.retag()
    }
}

// ---
// Mul
// ---

impl<T: ComplexFloat> Mul<&'_ LadderSequence<T, Unordered>> for &LadderSequence<T, Unordered> {
    type Output = LadderSequence<T, Unordered>;

    fn mul(self, rhs: &LadderSequence<T, Unordered>) -> Self::Output {
        LadderSequence::new(
            self.operators
                .iter()
                .chain(rhs.operators.iter())
                .cloned()
                .collect(),
            self.coefficient * rhs.coefficient,
        )
    }
}

impl<T: ComplexFloat> Mul<&'_ LadderSequence<T, Unordered>> for LadderSequence<T, Unordered> {
    type Output = LadderSequence<T, Unordered>;

    fn mul(self, rhs: &LadderSequence<T, Unordered>) -> Self::Output {
        &self * rhs
    }
}

impl<T: ComplexFloat> Mul<LadderSequence<T, Unordered>> for LadderSequence<T, Unordered> {
    type Output = LadderSequence<T, Unordered>;

    fn mul(self, rhs: LadderSequence<T, Unordered>) -> Self::Output {
        &self * &rhs
    }
}

impl<T: ComplexFloat> Mul<LadderSequence<T, Unordered>> for &LadderSequence<T, Unordered> {
    type Output = LadderSequence<T, Unordered>;

    fn mul(self, rhs: LadderSequence<T, Unordered>) -> Self::Output {
        self * &rhs
    }
}

// =============
// Serialisation
// =============

#[derive(Serialize)]
struct LadderSequenceRef<'a, T> {
    operators: &'a [LadderOperator],
    coefficient: &'a T,
}

#[derive(Deserialize)]
struct LadderSequenceOwned<T> {
    operators: Vec<LadderOperator>,
    coefficient: T,
}

impl<T: Serialize, O: OrderingTier> Serialize for LadderSequence<T, O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        LadderSequenceRef {
            operators: &self.operators,
            coefficient: &self.coefficient,
        }
        .serialize(serializer)
    }
}

/// Deserialised sequences always land in the unordered tier; the stronger tiers must be
/// re-established by the ordering algorithms.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for LadderSequence<T, Unordered> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let owned = LadderSequenceOwned::<T>::deserialize(deserializer)?;
        Ok(Self::from_parts_unchecked(owned.operators, owned.coefficient))
    }
}
