use parafor::engine::validator::Validator;
use parafor::primitives::errors::ParallelForError;

#[test]
fn test_zero_thread_count_rejected() {
    let result = Validator::validate_thread_count(0);
    assert_eq!(result, Err(ParallelForError::InvalidThreadCount(0)));
}

#[test]
fn test_positive_thread_counts_accepted() {
    assert!(Validator::validate_thread_count(1).is_ok());
    assert!(Validator::validate_thread_count(64).is_ok());
}

#[test]
fn test_valid_range_accepted() {
    assert!(Validator::validate_range("range", 0i32, 1).is_ok());
    assert!(Validator::validate_range("range", -10i64, 10).is_ok());
}

#[test]
fn test_empty_range_rejected() {
    let result = Validator::validate_range("range", 5i32, 5);
    assert_eq!(
        result,
        Err(ParallelForError::EmptyRange {
            axis: "range",
            low: 5,
            high: 5,
        })
    );
}

#[test]
fn test_inverted_range_rejected() {
    let result = Validator::validate_range("range", 10i32, 3);
    assert_eq!(
        result,
        Err(ParallelForError::EmptyRange {
            axis: "range",
            low: 10,
            high: 3,
        })
    );
}

#[test]
fn test_range_pair_accepts_valid_axes() {
    assert!(Validator::validate_range_pair(0i32, 5, 0, 3).is_ok());
}

#[test]
fn test_range_pair_reports_outer_axis_first() {
    // Both axes invalid: the outer axis is reported.
    let result = Validator::validate_range_pair(5i32, 5, 3, 3);
    assert_eq!(
        result,
        Err(ParallelForError::EmptyRange {
            axis: "outer",
            low: 5,
            high: 5,
        })
    );
}

#[test]
fn test_range_pair_reports_inner_axis() {
    let result = Validator::validate_range_pair(0i32, 5, 3, 3);
    assert_eq!(
        result,
        Err(ParallelForError::EmptyRange {
            axis: "inner",
            low: 3,
            high: 3,
        })
    );
}

#[test]
fn test_error_messages_name_the_condition() {
    let error = Validator::validate_thread_count(0).unwrap_err();
    assert!(error.to_string().contains("Invalid thread count"));

    let error = Validator::validate_range("inner", 3i32, 3).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("inner"));
    assert!(message.contains("[3, 3)"));
}
