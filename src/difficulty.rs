use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Difficulty tier controlling which passage pool is sampled
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty tier '{0}' (expected Beginner, Intermediate or Advanced)")]
pub struct UnknownDifficulty(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn display_uses_tier_names() {
        assert_eq!(Difficulty::Beginner.to_string(), "Beginner");
        assert_eq!(Difficulty::Intermediate.to_string(), "Intermediate");
        assert_eq!(Difficulty::Advanced.to_string(), "Advanced");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("advanced".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert_eq!(
            " Intermediate ".parse::<Difficulty>(),
            Ok(Difficulty::Intermediate)
        );
    }

    #[test]
    fn parse_rejects_unknown_tier() {
        assert_matches!("expert".parse::<Difficulty>(), Err(UnknownDifficulty(name)) if name == "expert");
        assert_matches!("".parse::<Difficulty>(), Err(_));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tier in Difficulty::ALL {
            assert_eq!(tier.to_string().parse::<Difficulty>(), Ok(tier));
        }
    }
}
