//! Range primitives and chunk partitioning for parallel dispatch.
//!
//! This module provides the half-open interval type assigned to each worker
//! and the partitioner that splits a total iteration range into contiguous,
//! ordered, disjoint chunks using ceiling-division sizing.

// External dependencies
use num_traits::PrimInt;

// ============================================================================
// Sub-Range
// ============================================================================

/// Half-open index interval `[low, high)` assigned to one worker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubRange<I> {
    /// Lower boundary (inclusive).
    pub low: I,

    /// Upper boundary (exclusive).
    pub high: I,
}

impl<I: PrimInt> SubRange<I> {
    /// Create a sub-range from its boundaries.
    #[inline]
    pub fn new(low: I, high: I) -> Self {
        Self { low, high }
    }

    /// Check if the sub-range contains no indices.
    ///
    /// Empty sub-ranges are valid worker assignments; the worker simply
    /// performs zero iterations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.low >= self.high
    }

    /// Number of indices in the sub-range.
    #[inline]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.high - self.low).to_usize().unwrap_or(usize::MAX)
        }
    }
}

// ============================================================================
// Partitioner
// ============================================================================

/// Splits a total iteration range into per-worker chunks.
///
/// Partitioning is deterministic and side-effect free: identical inputs
/// always yield identical boundaries, independent of task content or timing.
pub struct Partitioner;

impl Partitioner {
    /// Ceiling-division chunk size for `workers` chunks over `[low, high)`.
    #[inline]
    pub fn chunk_size<I: PrimInt>(low: I, high: I, workers: usize) -> I {
        debug_assert!(workers >= 1, "chunk_size: workers must be at least 1");
        debug_assert!(low < high, "chunk_size: range must be non-empty");

        let range = high - low;
        match I::from(workers) {
            // range/w + 1 on remainder avoids the overflow in (range + w - 1)/w.
            Some(w) => {
                let base = range / w;
                if range % w != I::zero() {
                    base + I::one()
                } else {
                    base
                }
            }
            // More workers than the index type can count; one index per chunk.
            None => I::one(),
        }
    }

    /// Split `[low, high)` into exactly `workers` sub-ranges.
    ///
    /// The sub-ranges are contiguous, pairwise disjoint, ordered by worker
    /// index ascending, and their union is exactly `[low, high)`. When the
    /// chunk size times `workers` exceeds the range, trailing sub-ranges
    /// are empty.
    pub fn partition<I: PrimInt>(low: I, high: I, workers: usize) -> Vec<SubRange<I>> {
        let chunk = Self::chunk_size(low, high, workers);

        let mut plan = Vec::with_capacity(workers);
        let mut start = low;
        for _ in 0..workers {
            // Guarded comparison keeps `start + chunk` from overflowing near I::max_value().
            let end = if high - start <= chunk {
                high
            } else {
                start + chunk
            };
            plan.push(SubRange::new(start, end));
            start = end;
        }

        plan
    }
}
