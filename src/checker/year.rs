use std::fmt;

use super::HeaderError;

/// Copyright years as written in a header: `2024` or `2019, 2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearToken {
    Single(i32),
    Range(i32, i32),
}

impl YearToken {
    /// Parse a token of exactly one four-digit year or two joined by `", "`.
    ///
    /// Dash-separated ranges are rejected.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.split_once(", ") {
            Some((first, second)) => Some(Self::Range(parse_year(first)?, parse_year(second)?)),
            None => parse_year(token).map(Self::Single),
        }
    }

    #[must_use]
    pub const fn first(self) -> i32 {
        match self {
            Self::Single(year) | Self::Range(year, _) => year,
        }
    }

    #[must_use]
    pub const fn contains(self, year: i32) -> bool {
        match self {
            Self::Single(y) => y == year,
            Self::Range(a, b) => a == year || b == year,
        }
    }
}

impl fmt::Display for YearToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(year) => write!(f, "{year}"),
            Self::Range(a, b) => write!(f, "{a}, {b}"),
        }
    }
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Check the header's copyright years against `current_year`.
///
/// Passes when `bypass` is set or when either year of the token is the
/// current year. A failure reports the token's first year as found.
///
/// # Errors
/// Returns `HeaderError::Year` when the token does not name the current year.
pub fn validate_year(
    token: YearToken,
    current_year: i32,
    bypass: bool,
) -> Result<(), HeaderError> {
    if bypass || token.contains(current_year) {
        return Ok(());
    }

    Err(HeaderError::Year {
        found: token.first(),
        expected: current_year,
    })
}

#[cfg(test)]
#[path = "year_tests.rs"]
mod tests;
