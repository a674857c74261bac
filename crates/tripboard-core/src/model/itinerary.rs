use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Activity, Destination};

/// A trip plan: destinations plus an ordered schedule of activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    /// Schedule order; only changed by explicit reordering.
    #[serde(default)]
    pub activities: Vec<Activity>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_budget: Option<f64>,
    pub currency: String,
    pub travelers: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

impl Itinerary {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            destinations: Vec::new(),
            activities: Vec::new(),
            start_date,
            end_date,
            total_budget: None,
            currency: "USD".to_string(),
            travelers: 1,
            tags: Vec::new(),
            is_public: false,
            created_at,
            updated_at: created_at,
            cover_image: None,
        }
    }

    pub fn with_activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = activities;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<Destination>) -> Self {
        self.destinations = destinations;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Sum of priced activities; unpriced ones count as zero.
    ///
    /// Currencies are not converted.
    pub fn activity_cost(&self) -> f64 {
        self.activities.iter().filter_map(|a| a.price).sum()
    }

    pub fn activity(&self, id: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.id == id)
    }
}
