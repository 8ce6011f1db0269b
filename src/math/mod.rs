//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numerical building blocks of the engine:
//! - Refinement rules (trapezoid and Richardson-accelerated Simpson) and
//!   the convergence-order error heuristic
//! - Domain-transform combinators mapping half-infinite and infinite
//!   ranges onto finite intervals
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Refinement rules and the error heuristic.
pub mod rules;

/// Domain-transform combinators.
pub mod transform;
