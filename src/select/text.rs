//! Text-based selection for non-interactive sessions
//!
//! When stdin is piped, the selector cannot redraw a menu, so the videos are
//! printed as a numbered table and the selection is read as free text.
//! The grammar accepts single 1-based numbers and inclusive `a-b` ranges,
//! separated by commas and/or whitespace.
//!
//! Parsing is strict: the first violated rule aborts with an error naming
//! that rule, with no partial result. Duplicates are the one forgiven case
//! and are silently dropped.

use std::collections::HashSet;

use super::{SelectError, SelectResult};
use crate::Video;

/// Parse a textual selection into sorted, deduplicated 0-based indices.
///
/// `item_count` is the number of selectable videos; entered numbers are
/// 1-based and must fall within `1..=item_count`.
///
/// # Examples
///
/// ```
/// use switchtube_dl::select::text::parse_selection;
///
/// assert_eq!(parse_selection("1-3", 3).unwrap(), vec![0, 1, 2]);
/// assert_eq!(parse_selection("3 1, 1-2", 3).unwrap(), vec![0, 1, 2]);
/// ```
pub fn parse_selection(input: &str, item_count: usize) -> SelectResult<Vec<usize>> {
    let mut indices = Vec::new();
    let mut seen = HashSet::new();

    let tokens = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    for token in tokens {
        if token.contains('-') {
            parse_range(token, item_count, &mut indices, &mut seen)?;
        } else {
            parse_single(token, item_count, &mut indices, &mut seen)?;
        }
    }

    if indices.is_empty() {
        return Err(SelectError::NoValidSelections);
    }

    indices.sort_unstable();

    Ok(indices)
}

/// Handle an `a-b` token.
fn parse_range(
    token: &str,
    item_count: usize,
    indices: &mut Vec<usize>,
    seen: &mut HashSet<usize>,
) -> SelectResult<()> {
    let parts: Vec<&str> = token.split('-').collect();
    let (start_text, end_text) = match parts.as_slice() {
        [start, end] if !start.is_empty() && !end.is_empty() => (*start, *end),
        _ => return Err(SelectError::InvalidRangeFormat(token.to_string())),
    };

    let start: usize = start_text
        .parse()
        .map_err(|_| SelectError::InvalidStartNumber(start_text.to_string()))?;
    let end: usize = end_text
        .parse()
        .map_err(|_| SelectError::InvalidEndNumber(end_text.to_string()))?;

    if start < 1 || end > item_count || start > end {
        return Err(SelectError::InvalidRange {
            start,
            end,
            max: item_count,
        });
    }

    for number in start..=end {
        let index = number - 1;
        if seen.insert(index) {
            indices.push(index);
        }
    }

    Ok(())
}

/// Handle a single-number token.
fn parse_single(
    token: &str,
    item_count: usize,
    indices: &mut Vec<usize>,
    seen: &mut HashSet<usize>,
) -> SelectResult<()> {
    let number: usize = token
        .parse()
        .map_err(|_| SelectError::InvalidNumber(token.to_string()))?;

    if number < 1 || number > item_count {
        return Err(SelectError::NumberOutOfRange {
            number,
            max: item_count,
        });
    }

    let index = number - 1;
    if seen.insert(index) {
        indices.push(index);
    }

    Ok(())
}

/// Print the numbered video table shown before the selection prompt.
pub fn print_video_table(videos: &[Video], use_episode: bool) {
    let number_width = videos.len().to_string().len().max("Number".len());
    let episode_width = videos
        .iter()
        .map(|v| v.episode.len())
        .max()
        .unwrap_or(0)
        .max("Episode".len());

    if use_episode {
        println!("{:>number_width$}  {:<episode_width$}  Title", "Number", "Episode");
        println!("{}  {}  {}", "-".repeat(number_width), "-".repeat(episode_width), "-----");
        for (i, video) in videos.iter().enumerate() {
            println!(
                "{:>number_width$}  {:<episode_width$}  {}",
                i + 1,
                video.episode,
                video.title
            );
        }
    } else {
        println!("{:>number_width$}  Title", "Number");
        println!("{}  {}", "-".repeat(number_width), "-----");
        for (i, video) in videos.iter().enumerate() {
            println!("{:>number_width$}  {}", i + 1, video.title);
        }
    }
}
