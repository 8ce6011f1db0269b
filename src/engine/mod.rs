//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer provides the adaptive refinement engine:
//! - The `Estimate` output triple
//! - Validation of intervals and builder parameters
//! - The lazy `Refinements` iterator driving the level-by-level scheme
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Estimate output type.
pub mod output;

/// Lazy refinement iterator.
pub mod refine;

/// Input validation.
pub mod validator;
