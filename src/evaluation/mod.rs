//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer decides when a refinement sequence is good enough:
//! - Absolute and relative convergence filters
//! - The heuristic confidence interval
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Convergence filters.
pub mod filters;
