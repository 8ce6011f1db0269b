//! Sample-evaluation strategies.
//!
//! ## Purpose
//!
//! This module defines how a level's abscissa/weight table is turned into
//! a weighted sum of integrand samples. Refinement is sequential level to
//! level, so this is the only place parallelism can live.
//!
//! ## Design notes
//!
//! * **Mirrored samples**: Each table entry contributes
//!   `w * (f(d + c*x) + f(d - c*x))`, sampling the integrand symmetrically
//!   around the interval midpoint `d` with half-width `c`.
//! * **Deterministic reduction**: The chunked strategy folds each chunk in
//!   table order and then folds the chunk sums in table order, so its
//!   result is independent of thread scheduling. It differs from the
//!   sequential fold only by floating-point reassociation at chunk
//!   boundaries.
//!
//! ## Invariants
//!
//! * Strategies are pure: same table, integrand, and interval give the
//!   same sum on every call.
//!
//! ## Non-goals
//!
//! * No thread-pool ownership or configuration; the chunked strategy uses
//!   rayon's implicit global pool.

use crate::primitives::tables::AbscissaWeight;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// ============================================================================
// Strategy Trait
// ============================================================================

/// How a level's sample table is folded into a weighted sum.
pub trait EvalStrategy {
    /// Fold `table` through the integrand over the interval with midpoint
    /// `d` and half-width `c`.
    fn weighted_sum<F>(&self, table: &[AbscissaWeight], f: &F, c: f64, d: f64) -> f64
    where
        F: Fn(f64) -> f64 + Sync + ?Sized;
}

#[inline]
fn mirrored<F>(entry: &AbscissaWeight, f: &F, c: f64, d: f64) -> f64
where
    F: Fn(f64) -> f64 + Sync + ?Sized,
{
    let offset = c * entry.abscissa;
    entry.weight * (f(d + offset) + f(d - offset))
}

// ============================================================================
// Sequential Strategy
// ============================================================================

/// Ordered single-threaded fold over the sample table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl EvalStrategy for Sequential {
    fn weighted_sum<F>(&self, table: &[AbscissaWeight], f: &F, c: f64, d: f64) -> f64
    where
        F: Fn(f64) -> f64 + Sync + ?Sized,
    {
        table
            .iter()
            .fold(0.0, |acc, entry| acc + mirrored(entry, f, c, d))
    }
}

// ============================================================================
// Chunked Strategy
// ============================================================================

/// Rayon-parallel fold over fixed-size chunks of the sample table.
///
/// Chunk sums are re-folded in table order, keeping the result
/// deterministic across runs and thread counts.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy)]
pub struct Chunked {
    /// Number of table entries per parallel work unit.
    pub chunk_size: usize,
}

#[cfg(feature = "parallel")]
impl Default for Chunked {
    fn default() -> Self {
        Self { chunk_size: 32 }
    }
}

#[cfg(feature = "parallel")]
impl EvalStrategy for Chunked {
    fn weighted_sum<F>(&self, table: &[AbscissaWeight], f: &F, c: f64, d: f64) -> f64
    where
        F: Fn(f64) -> f64 + Sync + ?Sized,
    {
        let chunk_size = self.chunk_size.max(1);
        if table.len() <= chunk_size {
            return Sequential.weighted_sum(table, f, c, d);
        }
        let chunk_sums: Vec<f64> = table
            .par_chunks(chunk_size)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0.0, |acc, entry| acc + mirrored(entry, f, c, d))
            })
            .collect();
        chunk_sums.into_iter().sum()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "parallel")]
    fn toy_table() -> Vec<AbscissaWeight> {
        (1..=40)
            .map(|i| AbscissaWeight {
                abscissa: i as f64 / 41.0,
                weight: 1.0 / i as f64,
            })
            .collect()
    }

    #[test]
    fn sequential_folds_in_order() {
        let table = [
            AbscissaWeight {
                abscissa: 0.5,
                weight: 2.0,
            },
            AbscissaWeight {
                abscissa: 0.25,
                weight: 1.0,
            },
        ];
        // f = identity: mirrored samples sum to 2d for every entry.
        let sum = Sequential.weighted_sum(&table, &|x: f64| x, 1.0, 3.0);
        assert_eq!(sum, 2.0 * 6.0 + 1.0 * 6.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn chunked_matches_sequential() {
        let table = toy_table();
        let f = |x: f64| (x * x).sin();
        let seq = Sequential.weighted_sum(&table, &f, 0.5, 1.0);
        let par = Chunked { chunk_size: 7 }.weighted_sum(&table, &f, 0.5, 1.0);
        assert!((seq - par).abs() <= 1e-12 * seq.abs().max(1.0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn chunked_small_table_is_exact() {
        let table = toy_table();
        let f = |x: f64| x.exp();
        let seq = Sequential.weighted_sum(&table, &f, 0.5, 1.0);
        let par = Chunked { chunk_size: 64 }.weighted_sum(&table, &f, 0.5, 1.0);
        assert_eq!(seq, par);
    }
}
