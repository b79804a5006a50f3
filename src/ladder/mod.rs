//! Fermionic ladder operators and sequences thereof.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod sequence;

pub use sequence::{
    Exchange, IndexOrdered, IndexOrderedLadderSequence, LadderSequence, NormalOrdered,
    NormalOrderedLadderSequence, OrderingTier, Unordered,
};


// ======
// Errors
// ======

/// An enumerated type for the errors arising from the construction and manipulation of ladder
/// operators and ladder sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LadderSequenceError {
    /// Variant for malformed inputs such as negative indices, unrecognised kind tags, or
    /// out-of-range exchange positions.
    InvalidArgument(String),

    /// Variant for violated internal contracts, such as index-ordering a sequence that is not
    /// in normal order.
    InvalidState(String),
}

impl fmt::Display for LadderSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "Invalid ladder argument: {msg}"),
            Self::InvalidState(msg) => write!(f, "Invalid ladder sequence state: {msg}"),
        }
    }
}

impl Error for LadderSequenceError {}

// ====================================
// Enum definitions and implementations
// ====================================

/// An enumerated type for the two kinds of fermionic ladder operators.
///
/// The derived ordering places [`Self::Raising`] before [`Self::Lowering`], which is exactly the
/// key used when bringing a sequence into normal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LadderOperatorKind {
    /// Variant for creation operators, $`a^{\dagger}_p`$.
    Raising,

    /// Variant for annihilation operators, $`a_p`$.
    Lowering,
}

impl LadderOperatorKind {
    /// Returns the opposite kind, *i.e.* the kind of the Hermitian conjugate.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        match self {
            Self::Raising => Self::Lowering,
            Self::Lowering => Self::Raising,
        }
    }
}

impl FromStr for LadderOperatorKind {
    type Err = LadderSequenceError;

    /// Parses a kind tag. Accepted tags are `u`, `+` and `raising` for raising operators, and
    /// `d`, `-` and `lowering` for lowering operators (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "u" | "+" | "raising" => Ok(Self::Raising),
            "d" | "-" | "lowering" => Ok(Self::Lowering),
            _ => Err(LadderSequenceError::InvalidArgument(format!(
                "unrecognised ladder operator kind tag `{s}`"
            ))),
        }
    }
}

impl fmt::Display for LadderOperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raising => write!(f, "u"),
            Self::Lowering => write!(f, "d"),
        }
    }
}

// ======================================
// Struct definitions and implementations
// ======================================

/// A structure representing a single fermionic ladder operator acting on a spin-orbital.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LadderOperator {
    /// The kind of the ladder operator.
    kind: LadderOperatorKind,

    /// The index of the spin-orbital on which the ladder operator acts.
    index: usize,
}

impl LadderOperator {
    /// Constructs a ladder operator.
    pub fn new(kind: LadderOperatorKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// Constructs a raising operator $`a^{\dagger}_p`$.
    pub fn raising(index: usize) -> Self {
        Self::new(LadderOperatorKind::Raising, index)
    }

    /// Constructs a lowering operator $`a_p`$.
    pub fn lowering(index: usize) -> Self {
        Self::new(LadderOperatorKind::Lowering, index)
    }

    /// Constructs a ladder operator from unvalidated input.
    ///
    /// # Arguments
    ///
    /// * `tag` - A kind tag understood by [`LadderOperatorKind::from_str`].
    /// * `index` - A signed spin-orbital index, which must be non-negative.
    ///
    /// # Returns
    ///
    /// The ladder operator, or [`LadderSequenceError::InvalidArgument`] if the tag is not
    /// recognised or the index is negative.
    pub fn from_tagged(tag: &str, index: i64) -> Result<Self, LadderSequenceError> {
        let kind = tag.parse::<LadderOperatorKind>()?;
        let index = usize::try_from(index).map_err(|_| {
            LadderSequenceError::InvalidArgument(format!(
                "ladder operator index `{index}` must be non-negative"
            ))
        })?;
        Ok(Self::new(kind, index))
    }

    /// The kind of this operator.
    pub fn kind(&self) -> LadderOperatorKind {
        self.kind
    }

    /// The spin-orbital index of this operator.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_raising(&self) -> bool {
        self.kind == LadderOperatorKind::Raising
    }

    pub fn is_lowering(&self) -> bool {
        self.kind == LadderOperatorKind::Lowering
    }

    /// Returns the Hermitian conjugate of this operator.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.kind.conjugate(), self.index)
    }
}

impl TryFrom<(&str, i64)> for LadderOperator {
    type Error = LadderSequenceError;

    fn try_from((tag, index): (&str, i64)) -> Result<Self, Self::Error> {
        Self::from_tagged(tag, index)
    }
}

impl From<(LadderOperatorKind, usize)> for LadderOperator {
    fn from((kind, index): (LadderOperatorKind, usize)) -> Self {
        Self::new(kind, index)
    }
}

impl fmt::Display for LadderOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.index, self.kind)
    }
}
