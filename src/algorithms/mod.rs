//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the pluggable sample-evaluation strategies that the
//! engine folds each level's table through:
//! - A sequential ordered fold
//! - A chunked rayon-parallel fold (feature `parallel`)
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sample-evaluation strategies.
pub mod strategy;
