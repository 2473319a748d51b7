use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{FormatError, ValidationError};

/// Wins and losses of a single tournament run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchRecord {
    pub wins: u32,
    pub losses: u32,
}

impl MatchRecord {
    pub fn new(wins: u32, losses: u32) -> Self {
        Self { wins, losses }
    }

    /// Build a record from loosely typed numbers, e.g. JSON input.
    pub fn from_counts(wins: f64, losses: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            wins: validate_count("wins", wins)?,
            losses: validate_count("losses", losses)?,
        })
    }
}

fn validate_count(field: &'static str, value: f64) -> Result<u32, ValidationError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(ValidationError::NotInteger { field, value });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    if value > u32::MAX as f64 {
        return Err(ValidationError::TooLarge { field, value, max: u32::MAX });
    }
    Ok(value as u32)
}

/// Parse a `"<wins>-<losses>"` string. Whitespace around either count is ignored.
pub fn parse_result(input: &str) -> Result<MatchRecord, FormatError> {
    let tokens: Vec<&str> = input.split('-').collect();
    let [wins, losses] = tokens.as_slice() else {
        return Err(FormatError::Shape(input.to_string()));
    };

    Ok(MatchRecord {
        wins: parse_count(input, wins)?,
        losses: parse_count(input, losses)?,
    })
}

fn parse_count(input: &str, token: &str) -> Result<u32, FormatError> {
    token.trim().parse().map_err(|_| FormatError::Count {
        input: input.to_string(),
        token: token.trim().to_string(),
    })
}

pub fn format_result(wins: u32, losses: u32) -> String {
    format!("{wins}-{losses}")
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_result(self.wins, self.losses))
    }
}

impl FromStr for MatchRecord {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_result(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_result() {
        assert_eq!(parse_result("3-2").unwrap(), MatchRecord::new(3, 2));
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(parse_result(" 5 - 0 ").unwrap(), MatchRecord::new(5, 0));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(parse_result("abc"), Err(FormatError::Shape(_))));
        assert!(matches!(parse_result("3-2-1"), Err(FormatError::Shape(_))));
        assert!(matches!(parse_result("-3-2"), Err(FormatError::Shape(_))));
        assert!(matches!(parse_result("3-"), Err(FormatError::Count { .. })));
        assert!(matches!(parse_result("x-2"), Err(FormatError::Count { .. })));
        assert!(matches!(parse_result("3.5-1"), Err(FormatError::Count { .. })));
    }

    #[test]
    fn test_format_then_parse_returns_original_counts() {
        for (wins, losses) in [(0, 0), (3, 2), (5, 0), (0, 7), (12, 31), (u32::MAX, 1)] {
            let parsed: MatchRecord = format_result(wins, losses).parse().unwrap();
            assert_eq!(parsed, MatchRecord::new(wins, losses));
        }
    }

    #[test]
    fn test_display_matches_format_result() {
        assert_eq!(MatchRecord::new(4, 1).to_string(), "4-1");
    }

    #[test]
    fn test_from_counts_validation() {
        assert_eq!(MatchRecord::from_counts(3.0, 2.0).unwrap(), MatchRecord::new(3, 2));
        assert!(matches!(
            MatchRecord::from_counts(-1.0, 2.0),
            Err(ValidationError::Negative { field: "wins", .. })
        ));
        assert!(matches!(
            MatchRecord::from_counts(1.0, 2.5),
            Err(ValidationError::NotInteger { field: "losses", .. })
        ));
        assert!(MatchRecord::from_counts(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_from_counts_rejects_counts_beyond_u32() {
        let err = MatchRecord::from_counts(5e9, 0.0).unwrap_err();
        assert!(matches!(err, ValidationError::TooLarge { field: "wins", .. }));
        assert!(err.to_string().contains("at most 4294967295"));
        assert_eq!(
            MatchRecord::from_counts(u32::MAX as f64, 0.0).unwrap().wins,
            u32::MAX
        );
    }
}
