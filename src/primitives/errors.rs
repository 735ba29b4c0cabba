//! Error types for parallel loop dispatch.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during a
//! `parallel_for` dispatch, covering input validation, worker thread
//! creation, and worker join outcomes.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the offending
//!   worker index and the underlying OS error description).
//! * **Comparable**: OS and panic messages are stored as `String` so
//!   variants stay `Clone` and `PartialEq` for test assertions.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Zero worker count, empty or inverted ranges.
//! 2. **Thread creation**: OS spawn failures with partial-failure semantics.
//! 3. **Thread join**: Worker failures observed at the join barrier.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for parallel loop operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParallelForError {
    /// Dispatch requires at least one worker thread.
    InvalidThreadCount(usize),

    /// A range is empty or inverted (`low >= high`) on the named axis.
    EmptyRange {
        /// Axis the range belongs to ("range", "outer", or "inner").
        axis: &'static str,
        /// Lower boundary of the offending range.
        low: i128,
        /// Upper boundary of the offending range.
        high: i128,
    },

    /// The OS failed to create a worker thread. Workers started before this
    /// one have been joined; later workers were never created.
    ThreadSpawn {
        /// Index of the worker whose creation failed.
        worker: usize,
        /// Underlying OS error description.
        message: String,
    },

    /// Joining a worker thread observed a failure (the worker panicked).
    ThreadJoin {
        /// Index of the worker whose join failed.
        worker: usize,
        /// Panic payload message, when one was available.
        message: String,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ParallelForError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidThreadCount(count) => {
                write!(f, "Invalid thread count: {count} (must be at least 1)")
            }
            Self::EmptyRange { axis, low, high } => {
                write!(f, "Empty {axis} range: [{low}, {high}) contains no indices")
            }
            Self::ThreadSpawn { worker, message } => {
                write!(f, "Error creating worker thread {worker}: {message}")
            }
            Self::ThreadJoin { worker, message } => {
                write!(f, "Error joining worker thread {worker}: {message}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for ParallelForError {}
