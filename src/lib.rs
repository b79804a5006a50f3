//! # QLadder: Canonicalisation of Fermionic Ladder-Operator Sequences
//!
//! QLadder rewrites products of fermionic ladder operators, as they arise in second-quantised
//! quantum-chemical Hamiltonians, into canonical form with exact sign bookkeeping. Two
//! successively stricter canonical forms are supported:
//! - **normal order**, in which every raising (creation) operator precedes every lowering
//!   (annihilation) operator, and
//! - **index order**, which additionally requires the raising indices to be strictly ascending
//!   and the lowering indices to be strictly descending.
//!
//! Every exchange of two adjacent distinct operators negates the coefficient of the term. An
//! exchange of two identical operators annihilates the term, which is then represented by a
//! zero coefficient rather than by an error.
//!
//! ## Ordering tiers
//!
//! A [`ladder::LadderSequence`] carries a zero-sized marker recording the ordering invariants it
//! satisfies:
//! - [`ladder::Unordered`]: freely constructed, no guarantee,
//! - [`ladder::NormalOrdered`]: obtained by [`ladder::NormalOrderedLadderSequence::from_sequence`],
//! - [`ladder::IndexOrdered`]: obtained by
//!   [`ladder::IndexOrderedLadderSequence::from_normal_ordered`] or
//!   [`ladder::IndexOrderedLadderSequence::from_sequence`].
//!
//! Weakening a tier is a plain value copy; strengthening a tier always re-runs the relevant
//! ordering algorithm.
//!
//! ## Term splitting
//!
//! [`ladder::LadderSequence::to_normal_order`] always gives exactly one term. When the full
//! anticommutation relations are needed, including the contraction
//! $`a_p a^{\dagger}_p = 1 - a^{\dagger}_p a_p`$,
//! [`ladder::LadderSequence::to_normal_order_expansion`] splits a product into a sum of
//! normal-ordered terms.
//!
//! ## Examples and usage
//!
//! For most items (structs, enums, functions, and traits), their usages are illustrated in test
//! functions. Batches of sequences can be canonicalised with
//! [`ordering::canonicalise_batch`], or through the
//! [`drivers::ladder_canonicalisation::LadderCanonicalisationDriver`], whose parameters can be
//! read from a YAML configuration file with [`io::read_qladder_yaml`].
//!
//! ## Logging
//!
//! QLadder logs through the [`log`] facade and never installs a logger itself. Formatted driver
//! output is sent to the `qladder-output` target.
//!
//! ## License
//!
//! GNU Lesser General Public License v3.0.

pub mod drivers;
pub mod io;
pub mod ladder;
pub mod ordering;
