//! Integration tests for take, drop, slice and sample.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;
use seqselect::{InvalidArgumentError, SelectionError, drop, sample, sample_with, slice, take};

fn rejected(operation: &'static str, parameter: &'static str, value: isize) -> SelectionError {
    SelectionError::InvalidArgument(InvalidArgumentError {
        operation,
        parameter,
        value,
    })
}

#[rstest]
fn test_take_from_infinite_iterator() {
    let squares = (1_u64..).map(|value| value * value);
    assert_eq!(take(squares, 4), Ok(vec![1, 4, 9, 16]));
}

#[rstest]
fn test_take_borrowed_keeps_input() {
    let values = vec!["a", "b", "c"];
    assert_eq!(take(&values, 2), Ok(vec![&"a", &"b"]));
    assert_eq!(values.len(), 3);
}

#[rstest]
fn test_drop_past_end_is_empty() {
    assert_eq!(drop(vec![1, 2, 3], 3), Ok(Vec::new()));
    assert_eq!(drop(vec![1, 2, 3], isize::MAX), Ok(Vec::new()));
}

#[rstest]
#[case(1, Some(2), vec![1, 2])]
#[case(3, None, vec![3, 4])]
#[case(10, None, vec![])]
fn test_slice_examples(
    #[case] offset: isize,
    #[case] length: Option<isize>,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(slice(0..5, offset, length), Ok(expected));
}

#[rstest]
fn test_slice_of_infinite_iterator_with_length() {
    assert_eq!(slice(0_u32.., 5, Some(3)), Ok(vec![5, 6, 7]));
}

#[rstest]
fn test_negative_arguments_are_rejected() {
    let values = vec![1, 2, 3];
    assert_eq!(take(&values, -1), Err(rejected("take", "n", -1)));
    assert_eq!(drop(&values, -1), Err(rejected("drop", "n", -1)));
    assert_eq!(slice(&values, -1, Some(1)), Err(rejected("slice", "offset", -1)));
    assert_eq!(slice(&values, 0, Some(-2)), Err(rejected("slice", "length", -2)));
    assert_eq!(sample(&values, -1), Err(rejected("sample", "sample_size", -1)));
}

#[rstest]
fn test_error_message_names_operation_and_parameter() {
    let error = slice(vec![1], 0, Some(-4)).unwrap_err();
    assert_eq!(error.to_string(), "slice: length must be non-negative, got -4");
}

#[rstest]
fn test_sample_larger_than_input_is_full_permutation() {
    let mut random = StdRng::seed_from_u64(2024);
    let mut picked = sample_with(vec!['x', 'y', 'z'], 10, &mut random).unwrap();
    picked.sort_unstable();
    assert_eq!(picked, vec!['x', 'y', 'z']);
}

#[rstest]
fn test_sample_elements_are_distinct_positions() {
    let input: Vec<u32> = (0..100).collect();
    let picked = sample(input, 30).unwrap();
    let distinct = seqselect::unique(&picked);
    assert_eq!(picked.len(), 30);
    assert_eq!(distinct.len(), 30);
    assert!(picked.iter().all(|value| *value < 100));
}

#[rstest]
fn test_sample_reaches_every_element() {
    let mut random = StdRng::seed_from_u64(11);
    let mut seen = [false; 5];
    for _ in 0..200 {
        let picked = sample_with(0..5_usize, 1, &mut random).unwrap();
        seen[picked[0]] = true;
    }
    assert!(seen.iter().all(|hit| *hit));
}
