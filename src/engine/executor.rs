//! Worker dispatch engine for parallel loops.
//!
//! ## Purpose
//!
//! This module runs a partition plan: one OS thread per sub-range, each
//! invoking the shared task closure over its assigned indices, with a full
//! join barrier before control returns to the caller.
//!
//! ## Design notes
//!
//! * **Scoped Threads**: Workers are spawned with `std::thread::scope` so
//!   they can borrow the task closure; no handle outlives the call.
//! * **Sharing**: The task closure is shared by reference across workers;
//!   the `Sync` bound makes concurrent read access a compile-time guarantee.
//! * **Named Workers**: Threads are named `parafor-worker-N` for debugging.
//! * **Generics**: Generic over `PrimInt` index types.
//!
//! ## Key concepts
//!
//! * **Fork**: Threads are created sequentially, worker 0 first. If
//!   creating worker `t` fails, workers `0..t` are joined (they run to
//!   completion), no further workers are started, and the spawn error is
//!   returned naming worker `t`.
//! * **Join Barrier**: After the fork phase, every created worker is
//!   joined. A worker that panicked surfaces as a join error naming the
//!   worker; the remaining handles are still drained before returning.
//! * **Ordering**: None between workers. Within one worker, indices are
//!   visited in increasing order, outer index slowest in 2D.
//!
//! ## Invariants
//!
//! * Every created worker is waited on before the dispatch returns.
//! * Empty sub-ranges spawn a worker that performs zero task invocations.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (handled by `validator`).
//! * This module does not partition ranges (handled by `range`).
//! * This module does not time or log the dispatch (handled by the API).

// External dependencies
use num_traits::PrimInt;
use std::any::Any;
use std::io;
use std::thread::{self, Scope, ScopedJoinHandle};

// Internal dependencies
use crate::primitives::errors::ParallelForError;
use crate::primitives::range::SubRange;

// ============================================================================
// Dispatch Options
// ============================================================================

/// Hook invoked before each worker spawn; an `Err` is treated as a thread
/// creation failure for that worker.
pub type SpawnHookFn = fn(usize) -> io::Result<()>;

/// Per-dispatch worker configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct DispatchOptions {
    /// Stack size for each worker thread, in bytes (OS default when unset).
    pub stack_size: Option<usize>,

    /// Fault-injection hook for exercising the creation-failure path.
    #[doc(hidden)]
    pub spawn_hook: Option<SpawnHookFn>,
}

// ============================================================================
// Dispatch Entry Points
// ============================================================================

/// Run a 1D partition plan, invoking `task` once per assigned index.
///
/// Blocks until every created worker has terminated.
pub fn run_1d<I, F>(
    plan: &[SubRange<I>],
    task: &F,
    options: &DispatchOptions,
) -> Result<(), ParallelForError>
where
    I: PrimInt + Send,
    F: Fn(I) + Sync,
{
    thread::scope(|scope| {
        let mut workers = Vec::with_capacity(plan.len());

        for (t, chunk) in plan.iter().copied().enumerate() {
            let spawned = spawn_worker(scope, t, options, move || {
                let mut i = chunk.low;
                while i < chunk.high {
                    task(i);
                    i = i + I::one();
                }
            });
            match spawned {
                Ok(handle) => workers.push(handle),
                Err(source) => {
                    // Workers already started run to completion; none after t start.
                    drain(workers);
                    return Err(ParallelForError::ThreadSpawn {
                        worker: t,
                        message: source.to_string(),
                    });
                }
            }
        }

        join_all(workers)
    })
}

/// Run a 2D partition plan: each worker iterates its outer sub-range with
/// the full inner range replicated, invoking `task(i, j)` with the outer
/// index varying slowest.
pub fn run_2d<I, F>(
    outer_plan: &[SubRange<I>],
    inner: SubRange<I>,
    task: &F,
    options: &DispatchOptions,
) -> Result<(), ParallelForError>
where
    I: PrimInt + Send,
    F: Fn(I, I) + Sync,
{
    thread::scope(|scope| {
        let mut workers = Vec::with_capacity(outer_plan.len());

        for (t, chunk) in outer_plan.iter().copied().enumerate() {
            let spawned = spawn_worker(scope, t, options, move || {
                let mut i = chunk.low;
                while i < chunk.high {
                    let mut j = inner.low;
                    while j < inner.high {
                        task(i, j);
                        j = j + I::one();
                    }
                    i = i + I::one();
                }
            });
            match spawned {
                Ok(handle) => workers.push(handle),
                Err(source) => {
                    drain(workers);
                    return Err(ParallelForError::ThreadSpawn {
                        worker: t,
                        message: source.to_string(),
                    });
                }
            }
        }

        join_all(workers)
    })
}

// ============================================================================
// Worker Lifecycle Helpers
// ============================================================================

/// Spawn one named worker thread inside the dispatch scope.
fn spawn_worker<'scope, 'env, W>(
    scope: &'scope Scope<'scope, 'env>,
    worker: usize,
    options: &DispatchOptions,
    body: W,
) -> io::Result<ScopedJoinHandle<'scope, ()>>
where
    W: FnOnce() + Send + 'scope,
{
    if let Some(hook) = options.spawn_hook {
        hook(worker)?;
    }

    let mut builder = thread::Builder::new().name(format!("parafor-worker-{worker}"));
    if let Some(bytes) = options.stack_size {
        builder = builder.stack_size(bytes);
    }
    builder.spawn_scoped(scope, body)
}

/// Join every worker, reporting the first failure observed.
///
/// All handles are drained even after a failure; a panicked worker must not
/// leave later handles to poison the scope.
fn join_all(workers: Vec<ScopedJoinHandle<'_, ()>>) -> Result<(), ParallelForError> {
    let mut first_failure = None;

    for (t, handle) in workers.into_iter().enumerate() {
        if let Err(payload) = handle.join() {
            if first_failure.is_none() {
                first_failure = Some(ParallelForError::ThreadJoin {
                    worker: t,
                    message: panic_message(payload.as_ref()),
                });
            }
        }
    }

    match first_failure {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Join already-started workers on the creation-failure path.
fn drain(workers: Vec<ScopedJoinHandle<'_, ()>>) {
    for handle in workers {
        // A cleanup join failure is secondary to the spawn error being reported.
        let _ = handle.join();
    }
}

/// Extract a human-readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("worker panicked")
    }
}
