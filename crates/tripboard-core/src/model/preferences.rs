use serde::{Deserialize, Serialize};

use super::ActivityCategory;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelStyle {
    Luxury,
    MidRange,
    Budget,
    Backpacker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    Solo,
    Couple,
    Family,
    Friends,
    Business,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pace {
    Relaxed,
    Moderate,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accommodation {
    Hotel,
    Hostel,
    Airbnb,
    Resort,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportPreference {
    Walking,
    Public,
    Car,
    Bike,
    Mixed,
}

/// Traveller profile, supplied by the profile layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub budget: BudgetRange,
    #[serde(default)]
    pub interests: Vec<ActivityCategory>,
    pub travel_style: TravelStyle,
    pub group_type: GroupType,
    pub pace: Pace,
    pub accommodation: Accommodation,
    pub transport: TransportPreference,
    #[serde(default)]
    pub food_preferences: Vec<String>,
    #[serde(default)]
    pub accessibility: bool,
    pub language: String,
}
