//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures and static data underlying the
//! quadrature engine:
//! - Error types for all fallible operations
//! - The precomputed abscissa/weight tables
//!
//! These have no algorithm logic of their own.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for quadrature operations.
pub mod errors;

/// Precomputed tanh-sinh abscissa/weight tables.
pub mod tables;
