//! Driver for the canonicalisation of batches of ladder sequences.

use std::fmt;

use anyhow::{self, format_err};
use derive_builder::Builder;
use num_complex::ComplexFloat;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::drivers::QLadderDriver;
use crate::io::format::{
    log_terms, log_title, nice_bool, qladder_output, qladder_warn, write_subtitle, write_title,
    QLadderOutput,
};
use crate::ladder::{
    IndexOrderedLadderSequence, LadderSequence, LadderSequenceError, Unordered,
};
use crate::ordering::{canonicalise_batch, canonicalise_batch_serial};

#[cfg(test)]
#[path = "ladder_canonicalisation_tests.rs"]
mod ladder_canonicalisation_tests;

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

const fn default_true() -> bool {
    true
}

/// Structure containing control parameters for ladder-sequence canonicalisation.
#[derive(Clone, Builder, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderCanonicalisationParams {
    /// Boolean indicating if terms whose coefficients vanish after canonicalisation are to be
    /// removed from the result.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub drop_vanishing_terms: bool,

    /// Boolean indicating if the sequences are to be canonicalised in parallel, one sequence per
    /// task.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Boolean indicating if each sequence is to be expanded with contractions into several
    /// normal-ordered terms before index ordering. If `false`, every sequence gives exactly one
    /// canonical term.
    #[builder(default = "false")]
    #[serde(default)]
    pub expand_contractions: bool,

    /// Boolean indicating if every canonical term is to be written to the output.
    #[builder(default = "false")]
    #[serde(default)]
    pub write_terms: bool,
}

impl LadderCanonicalisationParams {
    /// Returns a builder to construct a [`LadderCanonicalisationParams`] structure.
    pub fn builder() -> LadderCanonicalisationParamsBuilder {
        LadderCanonicalisationParamsBuilder::default()
    }
}

impl Default for LadderCanonicalisationParams {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("Unable to construct a default `LadderCanonicalisationParams`.")
    }
}

impl fmt::Display for LadderCanonicalisationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Drop vanishing terms: {}",
            nice_bool(self.drop_vanishing_terms)
        )?;
        writeln!(f, "Parallel canonicalisation: {}", nice_bool(self.parallel))?;
        writeln!(
            f,
            "Expand contractions: {}",
            nice_bool(self.expand_contractions)
        )?;
        writeln!(f, "Write canonical terms: {}", nice_bool(self.write_terms))?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// Structure to contain ladder-sequence canonicalisation results.
#[derive(Clone, Builder)]
pub struct LadderCanonicalisationResult<'a, T>
where
    T: ComplexFloat,
{
    /// The control parameters used to obtain this set of results.
    parameters: &'a LadderCanonicalisationParams,

    /// The number of sequences supplied to the driver.
    n_inputs: usize,

    /// The number of canonical terms that vanished.
    n_vanishing: usize,

    /// The canonical terms, in input order.
    terms: Vec<IndexOrderedLadderSequence<T>>,
}

impl<'a, T> LadderCanonicalisationResult<'a, T>
where
    T: ComplexFloat,
{
    /// Returns a builder to construct a new [`LadderCanonicalisationResult`] structure.
    fn builder() -> LadderCanonicalisationResultBuilder<'a, T> {
        LadderCanonicalisationResultBuilder::default()
    }

    /// The canonical terms. Vanishing terms are absent if they have been requested to be dropped.
    pub fn terms(&self) -> &[IndexOrderedLadderSequence<T>] {
        &self.terms
    }

    /// The number of canonical terms that vanished, whether or not they have been dropped.
    pub fn n_vanishing(&self) -> usize {
        self.n_vanishing
    }

    /// The number of sequences supplied to the driver.
    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }
}

impl<'a, T> fmt::Display for LadderCanonicalisationResult<'a, T>
where
    T: ComplexFloat + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_subtitle(f, "Canonicalisation summary")?;
        writeln!(f)?;
        writeln!(f, "Input sequences: {}", self.n_inputs)?;
        writeln!(
            f,
            "Vanishing terms: {}{}",
            self.n_vanishing,
            if self.parameters.drop_vanishing_terms {
                " (dropped)"
            } else {
                ""
            }
        )?;
        writeln!(f, "Canonical terms: {}", self.terms.len())?;
        writeln!(f)?;
        Ok(())
    }
}

impl<'a, T> fmt::Debug for LadderCanonicalisationResult<'a, T>
where
    T: ComplexFloat + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")
    }
}

// ------
// Driver
// ------

/// Driver structure for canonicalising batches of ladder sequences.
#[derive(Clone, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct LadderCanonicalisationDriver<'a, T>
where
    T: ComplexFloat,
{
    /// The control parameters for canonicalisation.
    parameters: &'a LadderCanonicalisationParams,

    /// The sequences to be canonicalised.
    sequences: &'a [LadderSequence<T, Unordered>],

    /// The result of the canonicalisation.
    #[builder(setter(skip), default = "None")]
    result: Option<LadderCanonicalisationResult<'a, T>>,
}

impl<'a, T> LadderCanonicalisationDriverBuilder<'a, T>
where
    T: ComplexFloat,
{
    fn validate(&self) -> Result<(), String> {
        self.parameters
            .ok_or("No ladder canonicalisation parameters found.".to_string())?;
        self.sequences
            .ok_or("No ladder sequences to canonicalise found.".to_string())?;
        Ok(())
    }
}

impl<'a, T> LadderCanonicalisationDriver<'a, T>
where
    T: ComplexFloat + fmt::Display + Send + Sync,
{
    /// Returns a builder to construct a [`LadderCanonicalisationDriver`] structure.
    pub fn builder() -> LadderCanonicalisationDriverBuilder<'a, T> {
        LadderCanonicalisationDriverBuilder::default()
    }

    /// Canonicalises every sequence, expanding contractions first if requested.
    fn canonicalise(&self) -> Result<Vec<IndexOrderedLadderSequence<T>>, anyhow::Error> {
        let params = self.parameters;
        if !params.expand_contractions {
            let sequences = self.sequences.to_vec();
            return Ok(if params.parallel {
                canonicalise_batch(sequences)
            } else {
                canonicalise_batch_serial(sequences)
            });
        }

        let expand = |seq: &LadderSequence<T, Unordered>| {
            seq.to_normal_order_expansion()
                .iter()
                .map(|term| term.to_index_order())
                .collect::<Result<Vec<_>, LadderSequenceError>>()
        };
        let expanded = if params.parallel {
            self.sequences
                .par_iter()
                .map(expand)
                .collect::<Result<Vec<_>, _>>()?
        } else {
            self.sequences
                .iter()
                .map(expand)
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(expanded.into_iter().flatten().collect())
    }

    /// Canonicalises the sequences and stores the result.
    fn canonicalise_and_store(&mut self) -> Result<(), anyhow::Error> {
        let params = self.parameters;
        let mut terms = self.canonicalise()?;
        let n_vanishing = terms.iter().filter(|term| term.is_vanishing()).count();
        if n_vanishing > 0 && n_vanishing == terms.len() {
            qladder_warn!("All {n_vanishing} canonical term(s) vanish.");
        }
        if params.drop_vanishing_terms {
            terms.retain(|term| !term.is_vanishing());
        }
        if params.write_terms {
            log_terms(&terms);
        }

        let result = LadderCanonicalisationResult::builder()
            .parameters(params)
            .n_inputs(self.sequences.len())
            .n_vanishing(n_vanishing)
            .terms(terms)
            .build()?;
        self.result = Some(result);
        Ok(())
    }
}

// ~~~~~~~~~~~~~~~~~~~~~
// Trait implementations
// ~~~~~~~~~~~~~~~~~~~~~

impl<'a, T> fmt::Display for LadderCanonicalisationDriver<'a, T>
where
    T: ComplexFloat,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_title(f, "Ladder Sequence Canonicalisation")?;
        writeln!(f)?;
        writeln!(f, "{}", self.parameters)?;
        Ok(())
    }
}

impl<'a, T> fmt::Debug for LadderCanonicalisationDriver<'a, T>
where
    T: ComplexFloat,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")
    }
}

impl<'a, T> QLadderDriver for LadderCanonicalisationDriver<'a, T>
where
    T: ComplexFloat + fmt::Display + Send + Sync,
{
    type Params = LadderCanonicalisationParams;

    type Outcome = LadderCanonicalisationResult<'a, T>;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No ladder canonicalisation results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        log_title(&format!(
            "Canonicalising {} ladder sequence(s)",
            self.sequences.len()
        ));
        qladder_output!("");
        self.log_output_display();
        self.canonicalise_and_store()?;
        self.result()?.log_output_display();
        Ok(())
    }
}
