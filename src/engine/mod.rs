//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer coordinates a single dispatch call: it validates inputs,
//! turns a partition plan into running worker threads, and reports the
//! outcome of the fork-join cycle.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Worker dispatch: spawn, run, join.
pub mod executor;

/// Dispatch reports and timing output.
pub mod report;

/// Validation utilities.
pub mod validator;
