//! Dispatch reports for parallel loop operations.
//!
//! ## Purpose
//!
//! This module defines the `DispatchReport` struct returned by a successful
//! dispatch, carrying the wall-clock timing measurement and the shape of the
//! fork-join cycle that produced it.
//!
//! ## Design notes
//!
//! * **Advisory**: Timing is best-effort and never affects control flow.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Non-goals
//!
//! * This module does not perform measurements; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::time::Duration;

// ============================================================================
// Dimensionality
// ============================================================================

/// Dimensionality of a dispatched loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// Single iteration range `[low, high)`.
    OneD,
    /// Nested range pair, outer chunked across workers.
    TwoD,
}

impl Dimension {
    /// Label used in diagnostics ("1D" or "2D").
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneD => "1D",
            Self::TwoD => "2D",
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Dispatch Report
// ============================================================================

/// Outcome of a completed fork-join dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchReport {
    /// Dimensionality of the dispatched loop.
    pub dimension: Dimension,

    /// Number of workers the range was partitioned across.
    pub workers: usize,

    /// Wall-clock duration from before validation to after the final join.
    pub elapsed: Duration,
}

impl DispatchReport {
    /// Elapsed wall-clock time in fractional seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

impl Display for DispatchReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Dispatch summary:")?;
        writeln!(f, "  Dimension: {}", self.dimension)?;
        writeln!(f, "  Workers:   {}", self.workers)?;
        write!(f, "  Elapsed:   {:.6} seconds", self.elapsed_secs())
    }
}
