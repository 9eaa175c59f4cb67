//! Setup-time errors raised by the library itself.
//!
//! Failures produced *inside* a pipeline never show up here: a guarded stage
//! turns them into the failure variant of its container, and a debug stage
//! hands them back untouched. [`RailroadError`] only covers mistakes made while
//! building a pipeline.

use core::fmt::{self, Display};

use crate::types::alloc_type::String;
use crate::types::RailroadKind;

/// Configuration error returned while setting up a pipeline.
///
/// # Examples
///
/// ```
/// use chainsmoke::{RailroadError, RailroadKind};
///
/// let err = "NonValidRailroadType".parse::<RailroadKind>().unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "NonValidRailroadType is not a valid railroad type; try Either or Maybe."
/// );
/// assert!(matches!(err, RailroadError::InvalidKind { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RailroadError {
    /// The requested container kind is neither `Either` nor `Maybe`.
    InvalidKind { name: String },
    /// The requested kind is valid but differs from the lifter's container.
    KindMismatch {
        requested: RailroadKind,
        container: RailroadKind,
    },
    /// An argument order passed to [`reorder`](crate::functools::reorder) is not a permutation.
    InvalidOrder { index: usize, arity: usize },
}

impl RailroadError {
    /// Builds an [`RailroadError::InvalidKind`] for the given kind name.
    #[inline]
    pub fn invalid_kind(name: impl Into<String>) -> Self {
        Self::InvalidKind { name: name.into() }
    }
}

impl Display for RailroadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKind { name } => {
                write!(f, "{name} is not a valid railroad type; try Either or Maybe.")
            }
            Self::KindMismatch {
                requested,
                container,
            } => write!(
                f,
                "{requested} was requested but this lifter produces {container} stages"
            ),
            Self::InvalidOrder { index, arity } => write!(
                f,
                "argument order must be a permutation of 0..{arity}; index {index} is out of range or repeated"
            ),
        }
    }
}

impl core::error::Error for RailroadError {}
