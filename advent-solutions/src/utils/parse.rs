//! Line-oriented parsing helpers

use std::fmt::Display;
use std::str::FromStr;

use advent_solver::ParseError;

/// Parse each non-empty line with `FromStr`, reporting the 1-based line number on failure
pub fn lines<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.trim()
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
        })
        .collect()
}

/// Parse a single line of comma-separated values
pub fn csv<T>(input: &str) -> Result<Vec<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    let values = input
        .trim()
        .split(',')
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|e| ParseError::InvalidFormat(format!("{v:?}: {e}")))
        })
        .collect::<Result<Vec<T>, _>>()?;
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_skips_blank_and_reports_line() {
        assert_eq!(lines::<i32>("1\n\n 2 \n3\n").unwrap(), vec![1, 2, 3]);
        let err = lines::<i32>("1\nx\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn test_csv() {
        assert_eq!(csv::<u8>("3,4,3,1,2\n").unwrap(), vec![3, 4, 3, 1, 2]);
        assert!(csv::<u8>("3,,4").is_err());
    }
}
