//! Input validation for parallel loop dispatch.
//!
//! ## Purpose
//!
//! This module validates dispatch parameters before any worker thread is
//! created: the worker count and the iteration range on each axis.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **No-Op Guarantee**: A validation failure means the dispatch performs
//!   no work and has no partial side effects.
//! * **Generics**: Range checks are generic over `PrimInt` index types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A range is valid if and only if `low < high`.
//!
//! ## Non-goals
//!
//! * This module does not partition ranges or create threads.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::ParallelForError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for dispatch parameters.
///
/// Provides static methods returning `Result<(), ParallelForError>` that
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the requested worker count.
    pub fn validate_thread_count(threads: usize) -> Result<(), ParallelForError> {
        if threads == 0 {
            return Err(ParallelForError::InvalidThreadCount(threads));
        }
        Ok(())
    }

    /// Validate a half-open range `[low, high)` on the named axis.
    pub fn validate_range<I: PrimInt>(
        axis: &'static str,
        low: I,
        high: I,
    ) -> Result<(), ParallelForError> {
        if low >= high {
            return Err(ParallelForError::EmptyRange {
                axis,
                low: low.to_i128().unwrap_or(i128::MAX),
                high: high.to_i128().unwrap_or(i128::MAX),
            });
        }
        Ok(())
    }

    /// Validate both axes of a nested 2D range pair.
    ///
    /// Each axis must independently satisfy `low < high`; the outer axis is
    /// checked first.
    pub fn validate_range_pair<I: PrimInt>(
        low1: I,
        high1: I,
        low2: I,
        high2: I,
    ) -> Result<(), ParallelForError> {
        Self::validate_range("outer", low1, high1)?;
        Self::validate_range("inner", low2, high2)
    }
}
