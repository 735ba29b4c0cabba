//! # parafor — Fork-Join Parallel Loops for Rust
//!
//! A minimal fork-join parallel-loop primitive: partition a 1D integer
//! range (or a pair of nested 2D ranges) across a fixed number of workers,
//! run a task concurrently with one OS thread per chunk, join all workers,
//! and report elapsed wall-clock time.
//!
//! `parafor` targets tight numeric loops that want parallelism without
//! adopting a thread-pool framework: no job queue, no persistent pool, no
//! work stealing. Each call spawns its workers, blocks at the join barrier,
//! and tears everything down.
//!
//! ## Quick Start
//!
//! ```rust
//! use parafor::prelude::*;
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! let sum = AtomicU64::new(0);
//!
//! // Partition [0, 10) across 3 workers: [0, 4), [4, 8), [8, 10).
//! let report = parallel_for(0u64, 10, |i| {
//!     sum.fetch_add(i, Ordering::Relaxed);
//! }, 3)?;
//!
//! assert_eq!(sum.load(Ordering::Relaxed), 45);
//! println!("{report}");
//! # Result::<(), ParallelForError>::Ok(())
//! ```
//!
//! ### Reusable Dispatcher
//!
//! ```rust
//! use parafor::prelude::*;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! // Build the dispatcher once, reuse it across calls.
//! let runner = ParallelFor::new()
//!     .threads(2)
//!     .build()?;
//!
//! let cells = AtomicUsize::new(0);
//!
//! // 2D: the outer range is chunked, the inner range replicated.
//! let report = runner.run_2d(0i32, 5, 0, 3, |_i, _j| {
//!     cells.fetch_add(1, Ordering::Relaxed);
//! })?;
//!
//! assert_eq!(cells.load(Ordering::Relaxed), 15);
//! assert_eq!(report.workers, 2);
//! # Result::<(), ParallelForError>::Ok(())
//! ```
//!
//! ## Semantics
//!
//! * Ranges are half-open: `[low, high)` includes `low`, excludes `high`.
//! * Chunks are sized by ceiling division; trailing workers may receive
//!   empty chunks and perform zero iterations.
//! * Each index (1D) or index pair (2D) is assigned to exactly one worker.
//! * No ordering exists between workers; the join barrier guarantees all
//!   effects are visible once the call returns.
//! * The task closure is shared read-only across workers (`Fn` + `Sync`).
//!   Safety of concurrent side effects across disjoint indices is the
//!   caller's obligation.
//!
//! ## Result and Error Handling
//!
//! Every entry point returns `Result<DispatchReport, ParallelForError>`.
//!
//! - **`Ok(DispatchReport)`**: dimensionality, worker count, and elapsed
//!   wall-clock time of the completed dispatch.
//! - **`Err(ParallelForError)`**: invalid parameters (detected before any
//!   thread is created; the call is a complete no-op), a thread creation
//!   failure (already-started workers are joined first), or a worker
//!   failure observed at the join barrier.
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use parafor::prelude::*;
//!
//! let report = parallel_for(0i64, 100, |_i| {}, 4)?;
//! assert_eq!(report.dimension.label(), "1D");
//! # Result::<(), ParallelForError>::Ok(())
//! ```
//!
//! Diagnostics are additionally emitted through the [`log`] facade: an
//! elapsed-time report at `info` level on success, one `error`-level notice
//! per failure. Install any logger (e.g., `env_logger`) to observe them.

// Layer 1: Primitives - errors and range partitioning.
pub mod primitives;

// Layer 2: Engine - validation, worker dispatch, and reporting.
pub mod engine;

// High-level fluent API for parallel loops.
pub mod api;

// Standard parafor prelude.
pub mod prelude {
    pub use crate::api::{
        parallel_for, parallel_for_2d, Dimension, DispatchReport,
        ParallelForBuilder as ParallelFor, ParallelForError, ParallelForRunner, SubRange,
    };
}
