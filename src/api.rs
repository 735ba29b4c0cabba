//! High-level API for fork-join parallel loops.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring a reusable dispatcher, plus `parallel_for` / `parallel_for_2d`
//! free functions matching the classic call shapes.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (worker count
//!   defaults to the available parallelism of the host).
//! * **Structured Results**: Every entry point returns
//!   `Result<DispatchReport, ParallelForError>`; the diagnostic channel is
//!   preserved through the `log` facade.
//! * **Validated**: Worker count is validated when `.build()` is called;
//!   ranges are validated per dispatch, before any thread is created.
//!
//! ## Key concepts
//!
//! * **Timing**: Wall-clock time is measured from immediately before
//!   validation to immediately after the final join, and reported at
//!   `info` level labeled by dimensionality.
//! * **Error Reporting**: Each failure is logged once at `error` level and
//!   returned as a structured error.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ParallelForBuilder`] via `ParallelFor::new()`.
//! 2. Chain configuration methods (`.threads()`, `.stack_size()`).
//! 3. Call `.build()` to obtain a [`ParallelForRunner`], then `.run()` or
//!    `.run_2d()` as many times as needed.

// External dependencies
use num_traits::PrimInt;
use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

// Internal dependencies
use crate::engine::executor::{self, DispatchOptions, SpawnHookFn};
use crate::engine::validator::Validator;
use crate::primitives::range::Partitioner;

// Publicly re-exported types
pub use crate::engine::report::{Dimension, DispatchReport};
pub use crate::primitives::errors::ParallelForError;
pub use crate::primitives::range::SubRange;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a parallel loop dispatcher.
#[derive(Debug, Clone, Default)]
pub struct ParallelForBuilder {
    /// Number of worker threads per dispatch.
    pub threads: Option<usize>,

    /// Stack size for each worker thread, in bytes.
    pub stack_size: Option<usize>,

    /// Fault-injection hook for the creation-failure path.
    #[doc(hidden)]
    pub spawn_hook: Option<SpawnHookFn>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl ParallelForBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            threads: None,
            stack_size: None,
            spawn_hook: None,
            duplicate_param: None,
        }
    }

    /// Set the number of worker threads per dispatch.
    ///
    /// Defaults to the host's available parallelism when unset.
    pub fn threads(mut self, threads: usize) -> Self {
        if self.threads.is_some() {
            self.duplicate_param = Some("threads");
        }
        self.threads = Some(threads);
        self
    }

    /// Set the stack size for each worker thread, in bytes.
    ///
    /// Defaults to the platform thread stack size when unset.
    pub fn stack_size(mut self, bytes: usize) -> Self {
        if self.stack_size.is_some() {
            self.duplicate_param = Some("stack_size");
        }
        self.stack_size = Some(bytes);
        self
    }

    /// Install a spawn fault-injection hook.
    #[doc(hidden)]
    pub fn spawn_hook(mut self, hook: SpawnHookFn) -> Self {
        self.spawn_hook = Some(hook);
        self
    }

    /// Validate the configuration and build a reusable dispatcher.
    pub fn build(self) -> Result<ParallelForRunner, ParallelForError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(ParallelForError::DuplicateParameter { parameter });
        }

        let threads = match self.threads {
            Some(threads) => {
                Validator::validate_thread_count(threads)?;
                threads
            }
            None => thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        };

        Ok(ParallelForRunner {
            threads,
            options: DispatchOptions {
                stack_size: self.stack_size,
                spawn_hook: self.spawn_hook,
            },
        })
    }
}

// ============================================================================
// Runner
// ============================================================================

/// Reusable fork-join dispatcher built from [`ParallelForBuilder`].
///
/// Each `run`/`run_2d` call spawns a fresh set of worker threads, blocks at
/// the join barrier until all of them finish, and reports elapsed time.
/// Workers are not reused across calls.
#[derive(Debug, Clone)]
pub struct ParallelForRunner {
    threads: usize,
    options: DispatchOptions,
}

impl ParallelForRunner {
    /// Number of workers each dispatch is partitioned across.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Run `task` once per index in `[low, high)`, partitioned across the
    /// configured workers. Blocks until every worker has finished.
    pub fn run<I, F>(&self, low: I, high: I, task: F) -> Result<DispatchReport, ParallelForError>
    where
        I: PrimInt + Send,
        F: Fn(I) + Sync,
    {
        let started = Instant::now();
        let outcome = self.dispatch_1d(low, high, &task, started);
        self.finish(Dimension::OneD, outcome)
    }

    /// Run `task` once per index pair in `[low1, high1) x [low2, high2)`,
    /// with the outer range chunked across workers and the inner range
    /// replicated in full into every worker assignment.
    pub fn run_2d<I, F>(
        &self,
        low1: I,
        high1: I,
        low2: I,
        high2: I,
        task: F,
    ) -> Result<DispatchReport, ParallelForError>
    where
        I: PrimInt + Send,
        F: Fn(I, I) + Sync,
    {
        let started = Instant::now();
        let outcome = self.dispatch_2d(low1, high1, low2, high2, &task, started);
        self.finish(Dimension::TwoD, outcome)
    }

    // ========================================================================
    // Dispatch Pipeline
    // ========================================================================

    fn dispatch_1d<I, F>(
        &self,
        low: I,
        high: I,
        task: &F,
        started: Instant,
    ) -> Result<DispatchReport, ParallelForError>
    where
        I: PrimInt + Send,
        F: Fn(I) + Sync,
    {
        Validator::validate_range("range", low, high)?;

        let plan = Partitioner::partition(low, high, self.threads);
        executor::run_1d(&plan, task, &self.options)?;

        Ok(DispatchReport {
            dimension: Dimension::OneD,
            workers: self.threads,
            elapsed: started.elapsed(),
        })
    }

    fn dispatch_2d<I, F>(
        &self,
        low1: I,
        high1: I,
        low2: I,
        high2: I,
        task: &F,
        started: Instant,
    ) -> Result<DispatchReport, ParallelForError>
    where
        I: PrimInt + Send,
        F: Fn(I, I) + Sync,
    {
        Validator::validate_range_pair(low1, high1, low2, high2)?;

        // Parallelism is exploited only along the outer axis; the inner
        // range is replicated whole into every worker assignment.
        let outer_plan = Partitioner::partition(low1, high1, self.threads);
        let inner = SubRange::new(low2, high2);
        executor::run_2d(&outer_plan, inner, task, &self.options)?;

        Ok(DispatchReport {
            dimension: Dimension::TwoD,
            workers: self.threads,
            elapsed: started.elapsed(),
        })
    }

    /// Emit the per-dispatch diagnostic exactly once and pass the outcome on.
    fn finish(
        &self,
        dimension: Dimension,
        outcome: Result<DispatchReport, ParallelForError>,
    ) -> Result<DispatchReport, ParallelForError> {
        match outcome {
            Ok(report) => {
                log::info!(
                    "execution time ({}): {:.6} seconds",
                    dimension,
                    report.elapsed_secs()
                );
                Ok(report)
            }
            Err(error) => {
                log::error!("parallel_for ({dimension}) failed: {error}");
                Err(error)
            }
        }
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Run `task` once per index in `[low, high)` across `threads` workers.
///
/// One-shot counterpart of [`ParallelForRunner::run`].
pub fn parallel_for<I, F>(
    low: I,
    high: I,
    task: F,
    threads: usize,
) -> Result<DispatchReport, ParallelForError>
where
    I: PrimInt + Send,
    F: Fn(I) + Sync,
{
    match ParallelForBuilder::new().threads(threads).build() {
        Ok(runner) => runner.run(low, high, task),
        Err(error) => {
            log::error!("parallel_for (1D) failed: {error}");
            Err(error)
        }
    }
}

/// Run `task` once per index pair in `[low1, high1) x [low2, high2)` across
/// `threads` workers, outer index varying slowest.
///
/// One-shot counterpart of [`ParallelForRunner::run_2d`].
pub fn parallel_for_2d<I, F>(
    low1: I,
    high1: I,
    low2: I,
    high2: I,
    task: F,
    threads: usize,
) -> Result<DispatchReport, ParallelForError>
where
    I: PrimInt + Send,
    F: Fn(I, I) + Sync,
{
    match ParallelForBuilder::new().threads(threads).build() {
        Ok(runner) => runner.run_2d(low1, high1, low2, high2, task),
        Err(error) => {
            log::error!("parallel_for (2D) failed: {error}");
            Err(error)
        }
    }
}
