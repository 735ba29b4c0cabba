//! parafor Demos
//!
//! This demo exercises both entry points on the workloads the primitive is
//! built for:
//! - 1D: element-wise vector addition
//! - 2D: element-wise matrix addition
//!
//! Run with `RUST_LOG=info` to see the execution-time diagnostics emitted
//! through the `log` facade.

use parafor::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};

fn main() -> Result<(), ParallelForError> {
    env_logger::init();

    println!("{}", "=".repeat(80));
    println!("parafor Fork-Join Demos");
    println!("{}", "=".repeat(80));
    println!();

    demo_1_vector_addition()?;
    demo_2_matrix_addition()?;

    Ok(())
}

/// Demo 1: Vector Addition
/// Each worker writes a disjoint slice of the output vector.
fn demo_1_vector_addition() -> Result<(), ParallelForError> {
    println!("Demo 1: Vector Addition (1D)");
    println!("{}", "-".repeat(80));

    let n = 1_000_000usize;
    let a: Vec<i64> = (0..n as i64).collect();
    let b: Vec<i64> = (0..n as i64).rev().collect();
    let c: Vec<AtomicI64> = (0..n).map(|_| AtomicI64::new(0)).collect();

    let report = parallel_for(
        0usize,
        n,
        |i| {
            c[i].store(a[i] + b[i], Ordering::Relaxed);
        },
        4,
    )?;

    // Every element of a + reversed(a) equals n - 1.
    let expected = n as i64 - 1;
    assert!(c.iter().all(|v| v.load(Ordering::Relaxed) == expected));

    println!("Added {} elements across {} workers", n, report.workers);
    println!("{report}");
    println!();
    Ok(())
}

/// Demo 2: Matrix Addition
/// The outer (row) axis is chunked across workers; each worker handles
/// whole rows.
fn demo_2_matrix_addition() -> Result<(), ParallelForError> {
    println!("Demo 2: Matrix Addition (2D)");
    println!("{}", "-".repeat(80));

    let rows = 1024usize;
    let cols = 512usize;
    let a: Vec<i64> = (0..(rows * cols) as i64).collect();
    let b: Vec<i64> = (0..(rows * cols) as i64).map(|v| v * 2).collect();
    let c: Vec<AtomicI64> = (0..rows * cols).map(|_| AtomicI64::new(0)).collect();

    let report = parallel_for_2d(
        0usize,
        rows,
        0,
        cols,
        |i, j| {
            let cell = i * cols + j;
            c[cell].store(a[cell] + b[cell], Ordering::Relaxed);
        },
        4,
    )?;

    assert!(c
        .iter()
        .enumerate()
        .all(|(cell, v)| v.load(Ordering::Relaxed) == 3 * cell as i64));

    println!(
        "Added a {}x{} matrix across {} workers",
        rows, cols, report.workers
    );
    println!("{report}");
    println!();
    Ok(())
}
