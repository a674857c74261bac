use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TripboardError;

/// How the planner presents the current itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    List,
    Map,
    Calendar,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Map => "map",
            Self::Calendar => "calendar",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = TripboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "map" => Ok(Self::Map),
            "calendar" => Ok(Self::Calendar),
            _ => Err(TripboardError::InvalidInput(format!(
                "unknown view: {} (expected list, map or calendar)",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_list() {
        assert_eq!(ViewMode::default(), ViewMode::List);
    }

    #[test]
    fn parse_round_trips_display() {
        for view in [ViewMode::List, ViewMode::Map, ViewMode::Calendar] {
            assert_eq!(view.to_string().parse::<ViewMode>().unwrap(), view);
        }
        assert!("grid".parse::<ViewMode>().is_err());
    }
}
