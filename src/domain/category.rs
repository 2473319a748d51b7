use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Economic category of a tournament type, resolved once from the type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentCategory {
    League,
    Preliminary,
    #[serde(rename = "challenge_32")]
    Challenge32,
    #[serde(rename = "challenge_64")]
    Challenge64,
    /// A challenge whose name carries no recognised size.
    Challenge,
    Other,
}

impl TournamentCategory {
    pub const ALL: [TournamentCategory; 6] = [
        TournamentCategory::League,
        TournamentCategory::Preliminary,
        TournamentCategory::Challenge32,
        TournamentCategory::Challenge64,
        TournamentCategory::Challenge,
        TournamentCategory::Other,
    ];

    /// Case-insensitive substring match, first rule wins.
    pub fn classify(type_name: &str) -> Self {
        let lower = type_name.to_lowercase();

        if lower.contains("league") {
            TournamentCategory::League
        } else if lower.contains("preliminary") {
            TournamentCategory::Preliminary
        } else if lower.contains("challenge") {
            if lower.contains("32") {
                TournamentCategory::Challenge32
            } else if lower.contains("64") {
                TournamentCategory::Challenge64
            } else {
                TournamentCategory::Challenge
            }
        } else {
            TournamentCategory::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentCategory::League => "league",
            TournamentCategory::Preliminary => "preliminary",
            TournamentCategory::Challenge32 => "challenge_32",
            TournamentCategory::Challenge64 => "challenge_64",
            TournamentCategory::Challenge => "challenge",
            TournamentCategory::Other => "other",
        }
    }
}

impl fmt::Display for TournamentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown tournament category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_types() {
        assert_eq!(TournamentCategory::classify("Constructed League"), TournamentCategory::League);
        assert_eq!(TournamentCategory::classify("Modern Preliminary"), TournamentCategory::Preliminary);
        assert_eq!(TournamentCategory::classify("Challenge 32"), TournamentCategory::Challenge32);
        assert_eq!(TournamentCategory::classify("Pioneer Challenge 64"), TournamentCategory::Challenge64);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(TournamentCategory::classify("PAUPER LEAGUE"), TournamentCategory::League);
        assert_eq!(TournamentCategory::classify("challenge 32"), TournamentCategory::Challenge32);
    }

    #[test]
    fn test_classify_first_rule_wins() {
        // "league" is checked before "challenge".
        assert_eq!(TournamentCategory::classify("League Challenge 64"), TournamentCategory::League);
    }

    #[test]
    fn test_classify_fallbacks() {
        assert_eq!(TournamentCategory::classify("Showcase Challenge"), TournamentCategory::Challenge);
        assert_eq!(TournamentCategory::classify("Unknown Event"), TournamentCategory::Other);
        assert_eq!(TournamentCategory::classify(""), TournamentCategory::Other);
    }

    #[test]
    fn test_serde_matches_stored_form() {
        for category in TournamentCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_string_form_parses_back() {
        for category in TournamentCategory::ALL {
            assert_eq!(category.as_str().parse::<TournamentCategory>(), Ok(category));
        }
        assert!("bogus".parse::<TournamentCategory>().is_err());
    }
}
