use std::ops::Range;

/// Parses `A..B` (end exclusive) or a single value `A`.
pub fn parse_range(input: &str) -> Result<Range<u32>, String> {
    let parse_bound = |value: &str| {
        value
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("Invalid bound '{value}'"))
    };

    match input.split_once("..") {
        Some((start, end)) => {
            let start = parse_bound(start)?;
            let end = parse_bound(end)?;
            if start >= end {
                return Err(format!("Empty range {start}..{end}"));
            }
            Ok(start..end)
        }
        None => {
            let value = parse_bound(input)?;
            Ok(value..value + 1)
        }
    }
}
