use serde::{Deserialize, Serialize};

use super::Coordinates;

/// A place an itinerary visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// IANA time zone name (e.g. "Europe/Lisbon")
    pub time_zone: String,
}

impl Destination {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        country: impl Into<String>,
        coordinates: Coordinates,
        time_zone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            coordinates,
            description: None,
            image: None,
            time_zone: time_zone.into(),
        }
    }
}
