use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TripboardError;

/// What kind of thing an activity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    Attraction,
    Restaurant,
    Hotel,
    Transport,
    Entertainment,
    Shopping,
    Culture,
    Nature,
    Adventure,
    Wellness,
    Custom,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 11] = [
        Self::Attraction,
        Self::Restaurant,
        Self::Hotel,
        Self::Transport,
        Self::Entertainment,
        Self::Shopping,
        Self::Culture,
        Self::Nature,
        Self::Adventure,
        Self::Wellness,
        Self::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attraction => "attraction",
            Self::Restaurant => "restaurant",
            Self::Hotel => "hotel",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Culture => "culture",
            Self::Nature => "nature",
            Self::Adventure => "adventure",
            Self::Wellness => "wellness",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCategory {
    type Err = TripboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| {
                TripboardError::InvalidInput(format!("unknown activity category: {}", value))
            })
    }
}
