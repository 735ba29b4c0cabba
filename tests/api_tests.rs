use parafor::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

#[test]
fn test_scenario_a_sum_across_three_workers() {
    let sum = AtomicI64::new(0);

    let report = parallel_for(
        0i64,
        10,
        |i| {
            sum.fetch_add(i, Ordering::Relaxed);
        },
        3,
    )
    .unwrap();

    assert_eq!(sum.load(Ordering::Relaxed), 45);
    assert_eq!(report.dimension, Dimension::OneD);
    assert_eq!(report.workers, 3);
    assert!(report.elapsed_secs() >= 0.0);
}

#[test]
fn test_each_index_invoked_exactly_once() {
    let n = 1000usize;
    let visited: Vec<AtomicBool> = (0..n).map(|_| AtomicBool::new(false)).collect();

    let report = parallel_for(
        0usize,
        n,
        |i| {
            let seen_before = visited[i].swap(true, Ordering::SeqCst);
            assert!(!seen_before, "index {i} visited twice");
        },
        8,
    )
    .unwrap();

    assert!(visited.iter().all(|f| f.load(Ordering::SeqCst)));
    assert_eq!(report.workers, 8);
}

#[test]
fn test_scenario_b_2d_cross_product() {
    // [0,5) x [0,3) across 2 workers: outer chunks [0,3) and [3,5),
    // inner range replicated in both. 15 pairs, each exactly once.
    let counts: Vec<AtomicUsize> = (0..15).map(|_| AtomicUsize::new(0)).collect();

    let report = parallel_for_2d(
        0usize,
        5,
        0,
        3,
        |i, j| {
            counts[i * 3 + j].fetch_add(1, Ordering::SeqCst);
        },
        2,
    )
    .unwrap();

    assert!(counts.iter().all(|c| c.load(Ordering::SeqCst) == 1));
    assert_eq!(report.dimension, Dimension::TwoD);
    assert_eq!(report.workers, 2);
}

#[test]
fn test_negative_bounds() {
    let sum = AtomicI64::new(0);

    parallel_for(
        -5i64,
        5,
        |i| {
            sum.fetch_add(i, Ordering::Relaxed);
        },
        4,
    )
    .unwrap();

    assert_eq!(sum.load(Ordering::Relaxed), -5);
}

#[test]
fn test_zero_threads_is_a_complete_no_op() {
    let counter = AtomicUsize::new(0);

    let result = parallel_for(
        0i32,
        10,
        |_i| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        0,
    );

    assert_eq!(result, Err(ParallelForError::InvalidThreadCount(0)));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_inverted_1d_range_is_a_complete_no_op() {
    let counter = AtomicUsize::new(0);

    let result = parallel_for(
        10i32,
        0,
        |_i| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        4,
    );

    assert_eq!(
        result,
        Err(ParallelForError::EmptyRange {
            axis: "range",
            low: 10,
            high: 0,
        })
    );
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn test_empty_2d_axes_are_rejected_independently() {
    let result = parallel_for_2d(5i32, 5, 0, 3, |_i, _j| {}, 2);
    assert!(matches!(
        result,
        Err(ParallelForError::EmptyRange { axis: "outer", .. })
    ));

    let result = parallel_for_2d(0i32, 5, 3, 3, |_i, _j| {}, 2);
    assert!(matches!(
        result,
        Err(ParallelForError::EmptyRange { axis: "inner", .. })
    ));
}

#[test]
fn test_builder_defaults_to_available_parallelism() {
    let runner = ParallelFor::new().build().unwrap();
    assert!(runner.threads() >= 1);
}

#[test]
fn test_builder_rejects_duplicate_parameter() {
    let result = ParallelFor::new().threads(2).threads(4).build();
    assert_eq!(
        result.err(),
        Some(ParallelForError::DuplicateParameter {
            parameter: "threads"
        })
    );
}

#[test]
fn test_builder_rejects_zero_threads() {
    let result = ParallelFor::new().threads(0).build();
    assert_eq!(result.err(), Some(ParallelForError::InvalidThreadCount(0)));
}

#[test]
fn test_runner_is_reusable_across_calls() {
    let runner = ParallelFor::new().threads(3).build().unwrap();
    let counter = AtomicUsize::new(0);

    runner
        .run(0usize, 10, |_i| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
    runner
        .run_2d(0usize, 4, 0, 4, |_i, _j| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    assert_eq!(counter.load(Ordering::SeqCst), 10 + 16);
}

#[test]
fn test_configured_stack_size_is_honored() {
    let counter = AtomicUsize::new(0);
    let runner = ParallelFor::new()
        .threads(2)
        .stack_size(1 << 20)
        .build()
        .unwrap();

    let report = runner
        .run(0i32, 100, |_i| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    assert_eq!(counter.load(Ordering::SeqCst), 100);
    assert_eq!(report.workers, 2);
}

#[test]
fn test_report_display_is_labeled_by_dimensionality() {
    let report = parallel_for(0i32, 4, |_i| {}, 2).unwrap();
    let rendered = report.to_string();
    assert!(rendered.contains("Dimension: 1D"));
    assert!(rendered.contains("Workers:   2"));
    assert!(rendered.contains("seconds"));

    let report = parallel_for_2d(0i32, 4, 0, 4, |_i, _j| {}, 2).unwrap();
    assert!(report.to_string().contains("Dimension: 2D"));
}

#[test]
fn test_dimension_labels() {
    assert_eq!(Dimension::OneD.label(), "1D");
    assert_eq!(Dimension::TwoD.label(), "2D");
    assert_eq!(Dimension::TwoD.to_string(), "2D");
}

#[test]
fn test_error_display_includes_context() {
    let error = ParallelForError::ThreadSpawn {
        worker: 2,
        message: "resource exhausted".into(),
    };
    let rendered = error.to_string();
    assert!(rendered.contains("worker thread 2"));
    assert!(rendered.contains("resource exhausted"));
}
