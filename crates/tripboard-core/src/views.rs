//! Calendar events and map markers derived from a snapshot.
//!
//! These are read-only projections for the calendar and map views. They are
//! recomputed on demand and never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Activity, ActivityCategory, Coordinates, Itinerary};
use crate::store::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEventKind {
    Activity,
    Travel,
    Meal,
    Accommodation,
}

impl From<ActivityCategory> for CalendarEventKind {
    fn from(category: ActivityCategory) -> Self {
        match category {
            ActivityCategory::Restaurant => Self::Meal,
            ActivityCategory::Hotel => Self::Accommodation,
            ActivityCategory::Transport => Self::Travel,
            _ => Self::Activity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEventProps {
    pub activity_id: String,
    pub itinerary_id: String,
    #[serde(rename = "type")]
    pub kind: CalendarEventKind,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One scheduled activity on the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
    pub extended_props: CalendarEventProps,
}

impl CalendarEvent {
    pub fn from_activity(activity: &Activity, itinerary_id: &str) -> Self {
        Self {
            id: activity.id.clone(),
            title: activity.title.clone(),
            start: activity.start_time,
            end: activity.end_time,
            all_day: false,
            extended_props: CalendarEventProps {
                activity_id: activity.id.clone(),
                itinerary_id: itinerary_id.to_string(),
                kind: activity.category.into(),
                location: activity.location.clone(),
                price: activity.price,
                url: activity.url.clone(),
            },
        }
    }
}

/// Events for every activity of `itinerary`, by start time.
///
/// The sort is stable, so activities starting together keep schedule order.
pub fn calendar_events(itinerary: &Itinerary) -> Vec<CalendarEvent> {
    let mut events: Vec<_> = itinerary
        .activities
        .iter()
        .map(|activity| CalendarEvent::from_activity(activity, &itinerary.id))
        .collect();
    events.sort_by_key(|event| event.start);
    events
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Destination,
    Activity,
    Accommodation,
    Transport,
}

impl From<ActivityCategory> for MarkerKind {
    fn from(category: ActivityCategory) -> Self {
        match category {
            ActivityCategory::Hotel => Self::Accommodation,
            ActivityCategory::Transport => Self::Transport,
            _ => Self::Activity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub id: String,
    pub position: Coordinates,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MarkerKind,
    pub is_selected: bool,
}

/// Markers for the map view: the store's destinations, then the current
/// itinerary's activities in schedule order.
pub fn map_markers(snapshot: &Snapshot) -> Vec<MapMarker> {
    let selected = snapshot.selected_destination().map(|d| d.id.as_str());

    let destinations = snapshot.destinations().iter().map(|destination| MapMarker {
        id: destination.id.clone(),
        position: destination.coordinates,
        title: destination.name.clone(),
        kind: MarkerKind::Destination,
        is_selected: selected == Some(destination.id.as_str()),
    });

    let activities = snapshot
        .current_itinerary()
        .into_iter()
        .flat_map(|itinerary| itinerary.activities.iter())
        .map(|activity| MapMarker {
            id: activity.id.clone(),
            position: activity.coordinates,
            title: activity.title.clone(),
            kind: activity.category.into(),
            is_selected: false,
        });

    destinations.chain(activities).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Destination;
    use crate::store::TravelStore;
    use chrono::{Duration, TimeZone};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 3, hour, 0, 0).unwrap()
    }

    fn activity(id: &str, category: ActivityCategory, hour: u32) -> Activity {
        Activity::new(id, id, category, at(hour), at(hour) + Duration::hours(1))
    }

    #[test]
    fn events_are_sorted_and_typed_by_category() {
        let itinerary = Itinerary::new("trip", "Rome", at(0), at(23), at(0)).with_activities(vec![
            activity("dinner", ActivityCategory::Restaurant, 20),
            activity("train", ActivityCategory::Transport, 8),
            activity("forum", ActivityCategory::Attraction, 10),
        ]);

        let events = calendar_events(&itinerary);
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["train", "forum", "dinner"]);
        assert_eq!(events[0].extended_props.kind, CalendarEventKind::Travel);
        assert_eq!(events[2].extended_props.kind, CalendarEventKind::Meal);
        assert_eq!(events[1].extended_props.itinerary_id, "trip");
        assert!(!events[1].all_day);
    }

    #[test]
    fn markers_cover_destinations_then_current_activities() {
        let rome = Destination::new("rome", "Rome", "Italy", Coordinates::new(41.9, 12.5), "Europe/Rome");
        let naples = Destination::new(
            "naples",
            "Naples",
            "Italy",
            Coordinates::new(40.8, 14.2),
            "Europe/Rome",
        );

        let mut store = TravelStore::new();
        store.set_destinations(vec![rome.clone(), naples]);
        store.set_selected_destination(Some(rome));
        store.set_current_itinerary(Some(
            Itinerary::new("trip", "Italy", at(0), at(23), at(0))
                .with_activities(vec![activity("hotel", ActivityCategory::Hotel, 22)]),
        ));

        let markers = map_markers(&store.snapshot());
        assert_eq!(markers.len(), 3);
        assert!(markers[0].is_selected);
        assert!(!markers[1].is_selected);
        assert_eq!(markers[2].kind, MarkerKind::Accommodation);
    }

    #[test]
    fn no_current_itinerary_means_only_destinations() {
        let store = TravelStore::new();
        assert!(map_markers(&store.snapshot()).is_empty());
    }
}
