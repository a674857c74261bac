//! Partial updates for itineraries and activities.
//!
//! A patch names only the fields it changes. Optional entity fields use
//! `Option<Option<T>>`: `None` leaves the field alone, `Some(None)` clears it.
//! In JSON, an absent key leaves the field alone and `null` clears it.
//!
//! Identity (`id`) and bookkeeping timestamps (`created_at`, `updated_at`)
//! are not patchable; the store owns `updated_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::{Activity, ActivityCategory, Coordinates, Destination, Itinerary};

/// Present-but-null decodes to `Some(None)` instead of `None`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

macro_rules! merge {
    ($target:expr, $patch:expr; $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = &$patch.$field {
                $target.$field = value.clone();
            }
        )*
    };
}

/// Fields to merge into an [`Itinerary`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<Destination>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_budget: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travelers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub cover_image: Option<Option<String>>,
}

impl ItineraryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `itinerary`. Does not touch `updated_at`.
    pub fn apply_to(&self, itinerary: &mut Itinerary) {
        merge!(itinerary, self;
            title, description, destinations, activities, start_date, end_date,
            total_budget, currency, travelers, tags, is_public, cover_image,
        );
    }
}

/// Fields to merge into an [`Activity`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActivityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Option<f64>>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub currency: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ActivityCategory>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub url: Option<Option<String>>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<Option<String>>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<Option<f64>>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub reviews: Option<Option<u32>>,
    #[serde(
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_duration: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
}

impl ActivityPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn times(mut self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge into `activity`. No invariants are checked.
    pub fn apply_to(&self, activity: &mut Activity) {
        merge!(activity, self;
            title, description, location, coordinates, start_time, end_time, price,
            currency, category, url, image, rating, reviews, estimated_duration, is_custom,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 14, hour, 0, 0).unwrap()
    }

    fn sample_activity() -> Activity {
        Activity::new("a1", "Museum", ActivityCategory::Culture, at(10), at(12))
            .with_price(12.0, "EUR")
    }

    #[test]
    fn absent_key_keeps_field_and_null_clears_it() {
        let keep: ActivityPatch = serde_json::from_str(r#"{ "title": "Gallery" }"#).unwrap();
        let clear: ActivityPatch = serde_json::from_str(r#"{ "price": null }"#).unwrap();

        let mut activity = sample_activity();
        keep.apply_to(&mut activity);
        assert_eq!(activity.title, "Gallery");
        assert_eq!(activity.price, Some(12.0));

        clear.apply_to(&mut activity);
        assert_eq!(activity.price, None);
        assert_eq!(activity.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn inverted_times_are_accepted() {
        let mut activity = sample_activity();
        ActivityPatch::new().times(at(15), at(9)).apply_to(&mut activity);
        assert!(activity.duration() < chrono::Duration::zero());
    }

    #[test]
    fn itinerary_patch_leaves_bookkeeping_alone() {
        let created = at(8);
        let mut itinerary = Itinerary::new("1", "Porto", at(0), at(23), created);
        let patch = ItineraryPatch::new()
            .title("Porto & Douro")
            .tags(vec!["wine".to_string()]);
        assert!(!patch.is_empty());

        patch.apply_to(&mut itinerary);
        assert_eq!(itinerary.title, "Porto & Douro");
        assert_eq!(itinerary.tags, vec!["wine".to_string()]);
        assert_eq!(itinerary.created_at, created);
        assert_eq!(itinerary.updated_at, created);
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        assert!(ItineraryPatch::new().is_empty());
        let json = serde_json::to_string(&ActivityPatch::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
