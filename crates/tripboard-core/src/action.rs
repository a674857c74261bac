//! Serializable store operations.
//!
//! One variant per write operation of [`TravelStore`](crate::TravelStore), so
//! external collaborators (UI event handlers, recommendation fetchers,
//! replay scripts) can hand the store plain data. Encoded as JSON objects
//! tagged by `type`:
//!
//! ```json
//! { "type": "reorderActivities", "sourceIndex": 0, "destinationIndex": 2 }
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{
    Activity, AiRecommendation, Destination, Itinerary, UserPreferences, ViewMode,
};
use crate::patch::{ActivityPatch, ItineraryPatch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StoreAction {
    SetItineraries {
        itineraries: Vec<Itinerary>,
    },
    AddItinerary {
        itinerary: Itinerary,
    },
    UpdateItinerary {
        id: String,
        patch: ItineraryPatch,
    },
    DeleteItinerary {
        id: String,
    },
    SetCurrentItinerary {
        itinerary: Option<Itinerary>,
    },
    AddActivity {
        activity: Activity,
    },
    UpdateActivity {
        id: String,
        patch: ActivityPatch,
    },
    DeleteActivity {
        id: String,
    },
    ReorderActivities {
        source_index: usize,
        destination_index: usize,
    },
    SetSelectedActivities {
        activities: Vec<Activity>,
    },
    SetDestinations {
        destinations: Vec<Destination>,
    },
    AddDestination {
        destination: Destination,
    },
    SetSelectedDestination {
        destination: Option<Destination>,
    },
    SetRecommendations {
        recommendations: Vec<AiRecommendation>,
    },
    SetLoadingRecommendations {
        loading: bool,
    },
    SetUserPreferences {
        preferences: UserPreferences,
    },
    SetLoading {
        loading: bool,
    },
    SetError {
        error: Option<String>,
    },
    SetSidebarOpen {
        open: bool,
    },
    SetCurrentView {
        view: ViewMode,
    },
}

impl StoreAction {
    /// Operation name, as reported in [`Transition::action`](crate::Transition).
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetItineraries { .. } => "set_itineraries",
            Self::AddItinerary { .. } => "add_itinerary",
            Self::UpdateItinerary { .. } => "update_itinerary",
            Self::DeleteItinerary { .. } => "delete_itinerary",
            Self::SetCurrentItinerary { .. } => "set_current_itinerary",
            Self::AddActivity { .. } => "add_activity",
            Self::UpdateActivity { .. } => "update_activity",
            Self::DeleteActivity { .. } => "delete_activity",
            Self::ReorderActivities { .. } => "reorder_activities",
            Self::SetSelectedActivities { .. } => "set_selected_activities",
            Self::SetDestinations { .. } => "set_destinations",
            Self::AddDestination { .. } => "add_destination",
            Self::SetSelectedDestination { .. } => "set_selected_destination",
            Self::SetRecommendations { .. } => "set_recommendations",
            Self::SetLoadingRecommendations { .. } => "set_loading_recommendations",
            Self::SetUserPreferences { .. } => "set_user_preferences",
            Self::SetLoading { .. } => "set_loading",
            Self::SetError { .. } => "set_error",
            Self::SetSidebarOpen { .. } => "set_sidebar_open",
            Self::SetCurrentView { .. } => "set_current_view",
        }
    }

    /// Decode a JSON array of actions.
    pub fn parse_script(json: &str) -> crate::Result<Vec<StoreAction>> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TripboardError;
    use crate::store::TravelStore;
    use std::sync::{Arc, Mutex};

    #[test]
    fn decodes_tagged_camel_case() {
        let actions = StoreAction::parse_script(
            r#"[
                { "type": "reorderActivities", "sourceIndex": 0, "destinationIndex": 2 },
                { "type": "setCurrentView", "view": "map" },
                { "type": "updateActivity", "id": "a1", "patch": { "title": "New" } },
                { "type": "setError", "error": null }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            actions[0],
            StoreAction::ReorderActivities {
                source_index: 0,
                destination_index: 2
            }
        );
        assert_eq!(actions[1], StoreAction::SetCurrentView { view: ViewMode::Map });
        assert_eq!(
            actions[2],
            StoreAction::UpdateActivity {
                id: "a1".to_string(),
                patch: ActivityPatch::new().title("New"),
            }
        );
        assert_eq!(actions[3], StoreAction::SetError { error: None });
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = StoreAction::parse_script(r#"[{ "type": "launchRocket" }]"#).unwrap_err();
        assert!(matches!(err, TripboardError::Serialization(_)));
    }

    #[test]
    fn dispatch_reports_transitions_under_the_action_name() {
        let mut store = TravelStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |t| sink.lock().unwrap().push(t.action));

        let open = StoreAction::SetSidebarOpen { open: true };
        let name = open.name();
        assert!(store.dispatch(open));
        assert!(!store.dispatch(StoreAction::DeleteActivity {
            id: "a1".to_string()
        }));

        assert_eq!(*seen.lock().unwrap(), vec![name]);
        assert!(store.snapshot().sidebar_open());
    }
}
