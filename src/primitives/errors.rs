//! Error types for quadrature operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring or
//! running tanh-sinh integration: interval preconditions, builder parameter
//! constraints, and filter misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values.
//! * **Data vs. fault**: A NaN or infinite integrand value is *not* an
//!   error; it propagates arithmetically through the estimates. Only
//!   precondition violations are reported here.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery strategies.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for quadrature operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TanhSinhError {
    /// A filter was given a refinement sequence with no elements.
    ///
    /// Defensive: the engine always yields at least one estimate, so this
    /// only occurs when a filter is fed an already-consumed or foreign
    /// iterator.
    EmptySequence,

    /// Integration bounds must satisfy `a < b`.
    IntervalOrder {
        /// Lower bound as provided.
        a: f64,
        /// Upper bound as provided.
        b: f64,
    },

    /// An integration bound is NaN or infinite.
    NonFiniteBound {
        /// Name of the offending bound (`"a"` or `"b"`).
        bound: &'static str,
        /// The value provided.
        value: f64,
    },

    /// The quadratic-convergence detection band must be a finite, non-empty
    /// open interval.
    InvalidBand {
        /// Lower edge of the band provided.
        lo: f64,
        /// Upper edge of the band provided.
        hi: f64,
    },

    /// Requested refinement depth is zero or exceeds the table ceiling.
    InvalidMaxLevels {
        /// The level count provided.
        got: usize,
        /// Maximum supported by the precomputed tables.
        max: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for TanhSinhError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptySequence => write!(f, "Refinement sequence is empty"),
            Self::IntervalOrder { a, b } => {
                write!(f, "Invalid interval: a={a} must be less than b={b}")
            }
            Self::NonFiniteBound { bound, value } => {
                write!(f, "Invalid bound: {bound}={value} (must be finite)")
            }
            Self::InvalidBand { lo, hi } => {
                write!(
                    f,
                    "Invalid convergence band: ({lo}, {hi}) (must be finite with lo < hi)"
                )
            }
            Self::InvalidMaxLevels { got, max } => {
                write!(f, "Invalid max_levels: {got} (must be in 1..={max})")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for TanhSinhError {}
