use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{ActivityCategory, Coordinates};

/// A single scheduled event within an itinerary.
///
/// `end_time >= start_time` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub category: ActivityCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_duration: Option<u32>,
    /// Authored by the user rather than sourced from a recommendation.
    #[serde(default)]
    pub is_custom: bool,
}

impl Activity {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: ActivityCategory,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            location: String::new(),
            coordinates: Coordinates::default(),
            start_time,
            end_time,
            price: None,
            currency: None,
            category,
            url: None,
            image: None,
            rating: None,
            reviews: None,
            estimated_duration: None,
            is_custom: false,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>, coordinates: Coordinates) -> Self {
        self.location = location.into();
        self.coordinates = coordinates;
        self
    }

    pub fn with_price(mut self, price: f64, currency: impl Into<String>) -> Self {
        self.price = Some(price);
        self.currency = Some(currency.into());
        self
    }

    pub fn custom(mut self) -> Self {
        self.is_custom = true;
        self
    }

    /// Scheduled length; negative when the times are inverted.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn decodes_front_end_payload() {
        let json = r#"{
            "id": "a1",
            "title": "Museum",
            "description": "Modern art",
            "location": "Lisbon",
            "coordinates": { "lat": 38.7, "lng": -9.1 },
            "startTime": "2025-05-01T10:00:00Z",
            "endTime": "2025-05-01T12:30:00Z",
            "price": 15.0,
            "currency": "EUR",
            "category": "culture",
            "estimatedDuration": 150,
            "isCustom": true
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.category, ActivityCategory::Culture);
        assert_eq!(activity.estimated_duration, Some(150));
        assert!(activity.is_custom);
        assert_eq!(activity.duration(), Duration::minutes(150));
        assert_eq!(activity.url, None);
    }

    #[test]
    fn omits_absent_optionals_when_encoding() {
        let start = Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0).unwrap();
        let activity = Activity::new("a1", "Walk", ActivityCategory::Nature, start, start);
        let value = serde_json::to_value(&activity).unwrap();
        assert!(value.get("price").is_none());
        assert_eq!(value["isCustom"], serde_json::json!(false));
        assert_eq!(value["startTime"], serde_json::json!("2025-05-01T10:00:00Z"));
    }
}
