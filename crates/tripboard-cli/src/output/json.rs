//! JSON output formatting for snapshots.

use tripboard_core::Snapshot;

use crate::app::ReplayOutcome;

/// Convert a snapshot to JSON, using the planner's camelCase field names.
pub fn snapshot_json(snapshot: &Snapshot) -> serde_json::Value {
    serde_json::json!({
        "revision": snapshot.revision(),
        "itineraries": snapshot.itineraries(),
        "currentItinerary": snapshot.current_itinerary(),
        "currentItineraryDetached": snapshot.is_current_detached(),
        "selectedActivities": snapshot.selected_activities(),
        "destinations": snapshot.destinations(),
        "selectedDestination": snapshot.selected_destination(),
        "recommendations": snapshot.recommendations(),
        "isLoadingRecommendations": snapshot.is_loading_recommendations(),
        "userPreferences": snapshot.user_preferences(),
        "isLoading": snapshot.is_loading(),
        "error": snapshot.error(),
        "sidebarOpen": snapshot.sidebar_open(),
        "currentView": snapshot.current_view(),
    })
}

/// Convert a whole replay (snapshot plus bookkeeping) to JSON.
pub fn replay_json(outcome: &ReplayOutcome, include_trace: bool) -> serde_json::Value {
    let skipped: Vec<_> = outcome
        .skipped
        .iter()
        .map(|(step, action)| serde_json::json!({ "step": step, "action": action }))
        .collect();

    let mut value = serde_json::json!({
        "steps": outcome.steps,
        "skipped": skipped,
        "state": snapshot_json(&outcome.snapshot),
    });

    if include_trace {
        let trace: Vec<_> = outcome
            .trace
            .iter()
            .map(|line| {
                serde_json::json!({
                    "action": line.action,
                    "revision": line.revision,
                    "itineraries": line.itineraries,
                    "currentItineraryId": line.current,
                    "activities": line.activities,
                })
            })
            .collect();
        value["trace"] = serde_json::Value::Array(trace);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripboard_core::model::ViewMode;
    use tripboard_core::TravelStore;

    #[test]
    fn snapshot_json_uses_planner_field_names() {
        let mut store = TravelStore::new();
        store.set_current_view(ViewMode::Map);
        store.set_error(Some("offline".to_string()));

        let value = snapshot_json(&store.snapshot());
        assert_eq!(value["currentView"], "map");
        assert_eq!(value["error"], "offline");
        assert_eq!(value["revision"], 2);
        assert!(value["currentItinerary"].is_null());
    }
}
