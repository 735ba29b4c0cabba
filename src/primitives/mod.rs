//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the low-level building blocks for parallel loop
//! dispatch: error types and range partitioning. It has no knowledge of
//! threads or timing.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for parallel loop operations.
pub mod errors;

/// Half-open ranges and chunk partitioning.
pub mod range;
