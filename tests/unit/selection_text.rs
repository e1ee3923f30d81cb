//! Unit tests for the textual range-selection parser

use switchtube_dl::select::text::parse_selection;
use switchtube_dl::select::{select_videos, SelectError};
use switchtube_dl::Video;

fn videos(n: usize) -> Vec<Video> {
    (0..n)
        .map(|i| Video {
            id: format!("v{i}"),
            title: format!("Video {i}"),
            episode: String::new(),
        })
        .collect()
}

#[test]
fn parses_a_simple_range() {
    assert_eq!(parse_selection("1-3", 3).unwrap(), vec![0, 1, 2]);
}

#[test]
fn parses_single_numbers() {
    assert_eq!(parse_selection("2", 3).unwrap(), vec![1]);
    assert_eq!(parse_selection("1,3", 3).unwrap(), vec![0, 2]);
}

#[test]
fn commas_and_whitespace_both_separate_tokens() {
    assert_eq!(parse_selection("1, 3 5", 5).unwrap(), vec![0, 2, 4]);
    assert_eq!(parse_selection("1\t2", 2).unwrap(), vec![0, 1]);
}

#[test]
fn duplicates_are_silently_deduplicated() {
    assert_eq!(parse_selection("1,1,1-2,2", 2).unwrap(), vec![0, 1]);
    assert_eq!(parse_selection("1-3,2-3", 3).unwrap(), vec![0, 1, 2]);
}

#[test]
fn result_is_sorted_ascending() {
    assert_eq!(parse_selection("5,1,3", 5).unwrap(), vec![0, 2, 4]);
    assert_eq!(parse_selection("4-5,1-2", 5).unwrap(), vec![0, 1, 3, 4]);
}

#[test]
fn backwards_range_is_invalid() {
    assert!(matches!(
        parse_selection("2-1", 2),
        Err(SelectError::InvalidRange {
            start: 2,
            end: 1,
            max: 2
        })
    ));
}

#[test]
fn range_beyond_item_count_is_invalid() {
    assert!(matches!(
        parse_selection("1-4", 3),
        Err(SelectError::InvalidRange { end: 4, max: 3, .. })
    ));
}

#[test]
fn non_numeric_range_start_is_reported_as_start() {
    assert!(matches!(
        parse_selection("x-2", 2),
        Err(SelectError::InvalidStartNumber(part)) if part == "x"
    ));
}

#[test]
fn non_numeric_range_end_is_reported_as_end() {
    assert!(matches!(
        parse_selection("1-y", 2),
        Err(SelectError::InvalidEndNumber(part)) if part == "y"
    ));
}

#[test]
fn too_many_hyphens_is_a_format_error() {
    assert!(matches!(
        parse_selection("1-2-3", 5),
        Err(SelectError::InvalidRangeFormat(_))
    ));
}

#[test]
fn missing_range_endpoint_is_a_format_error() {
    assert!(matches!(
        parse_selection("-3", 5),
        Err(SelectError::InvalidRangeFormat(_))
    ));
    assert!(matches!(
        parse_selection("3-", 5),
        Err(SelectError::InvalidRangeFormat(_))
    ));
}

#[test]
fn non_numeric_single_token_is_invalid() {
    assert!(matches!(
        parse_selection("abc", 3),
        Err(SelectError::InvalidNumber(part)) if part == "abc"
    ));
}

#[test]
fn indices_are_one_based_on_input() {
    assert!(matches!(
        parse_selection("0", 1),
        Err(SelectError::NumberOutOfRange {
            number: 0,
            max: 1
        })
    ));
    assert!(matches!(
        parse_selection("2", 1),
        Err(SelectError::NumberOutOfRange {
            number: 2,
            max: 1
        })
    ));
}

#[test]
fn separator_only_input_yields_no_valid_selections() {
    assert!(matches!(
        parse_selection(",,,", 1),
        Err(SelectError::NoValidSelections)
    ));
    assert!(matches!(
        parse_selection(" , , ", 3),
        Err(SelectError::NoValidSelections)
    ));
}

#[test]
fn first_violated_rule_wins_with_no_partial_result() {
    // "1" alone would be valid; the bad token aborts the whole parse.
    assert!(parse_selection("1,x", 3).is_err());
    assert!(parse_selection("1 0", 3).is_err());
}

#[test]
fn parsing_is_idempotent() {
    let first = parse_selection("1-3,5", 6).unwrap();
    let second = parse_selection("1-3,5", 6).unwrap();
    assert_eq!(first, second);
}

#[test]
fn all_flag_bypasses_selection() {
    let videos = videos(4);
    assert_eq!(
        select_videos(&videos, true, false).unwrap(),
        vec![0, 1, 2, 3]
    );
}

#[test]
fn empty_list_selects_nothing_without_ui() {
    assert_eq!(select_videos(&[], false, false).unwrap(), Vec::<usize>::new());
}
