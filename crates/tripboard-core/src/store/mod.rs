//! The travel state store.
//!
//! [`TravelStore`] is the single source of truth for itineraries, the current
//! itinerary, destinations, recommendations, user preferences and coarse UI
//! state. Every write goes through one of its operations, which:
//!
//! - never fail (missing ids and impossible moves are no-ops),
//! - build a fresh [`Snapshot`] from the previous one instead of editing it,
//! - notify every subscriber synchronously, once, in transition order.
//!
//! No-ops publish nothing and notify nobody.
//!
//! Writers need `&mut TravelStore`, so operations can never interleave.

mod snapshot;
mod subscribers;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use crate::action::StoreAction;
use crate::clock::{Clock, SystemClock};
use crate::model::{
    Activity, AiRecommendation, Destination, Itinerary, UserPreferences, ViewMode,
};
use crate::patch::{ActivityPatch, ItineraryPatch};

use snapshot::CurrentItinerary;

pub use snapshot::Snapshot;
pub use subscribers::{SubscriptionId, Transition};

use subscribers::Subscribers;

/// Observable in-memory store for the planner.
pub struct TravelStore {
    state: Arc<Snapshot>,
    clock: Box<dyn Clock>,
    subscribers: Subscribers,
}

impl Default for TravelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TravelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TravelStore")
            .field("revision", &self.state.revision)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}

impl TravelStore {
    /// Create an empty store stamping times from the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create an empty store with a custom time source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            state: Arc::new(Snapshot::default()),
            clock: Box::new(clock),
            subscribers: Subscribers::default(),
        }
    }

    /// The current snapshot. Cheap to clone and never changes underneath you.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state)
    }

    /// Register a listener called after every transition.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Transition<'_>) + Send + 'static,
    {
        self.subscribers.add(listener)
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Build the next snapshot from the current one and publish it.
    ///
    /// `next` returns `None` to signal a no-op.
    fn commit<F>(&mut self, action: &'static str, next: F) -> bool
    where
        F: FnOnce(&Snapshot, DateTime<Utc>) -> Option<Snapshot>,
    {
        let now = self.clock.now();
        let Some(mut snapshot) = next(self.state.as_ref(), now) else {
            trace!(action, revision = self.state.revision, "no-op");
            return false;
        };
        snapshot.revision = self.state.revision + 1;

        let previous = std::mem::replace(&mut self.state, Arc::new(snapshot));
        debug!(action, revision = self.state.revision, "snapshot replaced");
        self.subscribers.notify(&Transition {
            action,
            previous: &previous,
            current: &self.state,
        });
        true
    }

    /// Apply a serialized operation. Returns true if it produced a transition.
    pub fn dispatch(&mut self, action: StoreAction) -> bool {
        let before = self.state.revision;
        match action {
            StoreAction::SetItineraries { itineraries } => self.set_itineraries(itineraries),
            StoreAction::AddItinerary { itinerary } => self.add_itinerary(itinerary),
            StoreAction::UpdateItinerary { id, patch } => self.update_itinerary(&id, patch),
            StoreAction::DeleteItinerary { id } => self.delete_itinerary(&id),
            StoreAction::SetCurrentItinerary { itinerary } => {
                self.set_current_itinerary(itinerary)
            }
            StoreAction::AddActivity { activity } => self.add_activity(activity),
            StoreAction::UpdateActivity { id, patch } => self.update_activity(&id, patch),
            StoreAction::DeleteActivity { id } => self.delete_activity(&id),
            StoreAction::ReorderActivities {
                source_index,
                destination_index,
            } => self.reorder_activities(source_index, destination_index),
            StoreAction::SetSelectedActivities { activities } => {
                self.set_selected_activities(activities)
            }
            StoreAction::SetDestinations { destinations } => self.set_destinations(destinations),
            StoreAction::AddDestination { destination } => self.add_destination(destination),
            StoreAction::SetSelectedDestination { destination } => {
                self.set_selected_destination(destination)
            }
            StoreAction::SetRecommendations { recommendations } => {
                self.set_recommendations(recommendations)
            }
            StoreAction::SetLoadingRecommendations { loading } => {
                self.set_loading_recommendations(loading)
            }
            StoreAction::SetUserPreferences { preferences } => {
                self.set_user_preferences(preferences)
            }
            StoreAction::SetLoading { loading } => self.set_loading(loading),
            StoreAction::SetError { error } => self.set_error(error),
            StoreAction::SetSidebarOpen { open } => self.set_sidebar_open(open),
            StoreAction::SetCurrentView { view } => self.set_current_view(view),
        }
        self.state.revision != before
    }

    // --- Itineraries ---

    /// Replace the whole collection.
    ///
    /// The current itinerary keeps its data. When the new list no longer
    /// holds that data under its id, it is detached and may be stale.
    pub fn set_itineraries(&mut self, itineraries: Vec<Itinerary>) {
        self.commit("set_itineraries", |prev, _| {
            let mut next = prev.clone();
            next.itineraries = itineraries;
            let current = prev.current_itinerary().cloned().map(|i| next.pointer_to(i));
            if let (Some(CurrentItinerary::Listed(id)), Some(CurrentItinerary::Detached(_))) =
                (&prev.current, &current)
            {
                warn!(
                    itinerary_id = %id,
                    "current itinerary no longer matches the list; keeping its own copy"
                );
            }
            next.current = current;
            Some(next)
        });
    }

    pub fn add_itinerary(&mut self, itinerary: Itinerary) {
        self.commit("add_itinerary", |prev, _| {
            let mut next = prev.clone();
            next.itineraries.push(itinerary);
            Some(next)
        });
    }

    /// Merge `patch` into every itinerary with this id, in the list and in
    /// the current view alike, stamping `updated_at`.
    ///
    /// An empty patch changes nothing and is a no-op.
    pub fn update_itinerary(&mut self, id: &str, patch: ItineraryPatch) {
        self.commit("update_itinerary", |prev, now| {
            let is_current = prev.current_itinerary_id() == Some(id);
            if patch.is_empty() || (!is_current && prev.itinerary(id).is_none()) {
                return None;
            }

            let mut next = prev.clone();
            for itinerary in next.itineraries.iter_mut().filter(|i| i.id == id) {
                patch.apply_to(itinerary);
                itinerary.updated_at = now;
            }
            if is_current {
                let mut current = prev.current_itinerary()?.clone();
                patch.apply_to(&mut current);
                current.updated_at = now;
                next.current = Some(next.pointer_to(current));
            }
            Some(next)
        });
    }

    /// Remove the itinerary with this id, clearing the current itinerary if
    /// it is the one being removed.
    pub fn delete_itinerary(&mut self, id: &str) {
        self.commit("delete_itinerary", |prev, _| {
            let is_current = prev.current_itinerary_id() == Some(id);
            if !is_current && prev.itinerary(id).is_none() {
                return None;
            }
            let mut next = prev.clone();
            next.itineraries.retain(|i| i.id != id);
            if is_current {
                next.current = None;
            }
            Some(next)
        });
    }

    /// Select an itinerary (or none). It does not have to be in the list,
    /// and the list is never changed by selecting.
    pub fn set_current_itinerary(&mut self, itinerary: Option<Itinerary>) {
        self.commit("set_current_itinerary", |prev, _| {
            Some(Snapshot {
                current: itinerary.map(|i| prev.pointer_to(i)),
                ..prev.clone()
            })
        });
    }

    // --- Activities of the current itinerary ---

    /// Append to the current itinerary's schedule.
    pub fn add_activity(&mut self, activity: Activity) {
        self.commit("add_activity", |prev, now| {
            prev.with_current_edited(now, |itinerary| itinerary.activities.push(activity))
        });
    }

    /// Merge `patch` into the matching activity of the current itinerary.
    ///
    /// An unknown activity id leaves the schedule unchanged but still stamps
    /// the itinerary's `updated_at`. An empty patch is a no-op.
    pub fn update_activity(&mut self, id: &str, patch: ActivityPatch) {
        self.commit("update_activity", |prev, now| {
            if patch.is_empty() {
                return None;
            }
            prev.with_current_edited(now, |itinerary| {
                for activity in itinerary.activities.iter_mut().filter(|a| a.id == id) {
                    patch.apply_to(activity);
                }
            })
        });
    }

    pub fn delete_activity(&mut self, id: &str) {
        self.commit("delete_activity", |prev, now| {
            prev.with_current_edited(now, |itinerary| {
                itinerary.activities.retain(|a| a.id != id)
            })
        });
    }

    /// Move the activity at `source_index` so it ends up at
    /// `destination_index` of the resulting schedule.
    ///
    /// A source past the end is a no-op; a destination past the end appends.
    pub fn reorder_activities(&mut self, source_index: usize, destination_index: usize) {
        self.commit("reorder_activities", |prev, now| {
            let len = prev.current_itinerary()?.activities.len();
            if source_index >= len {
                return None;
            }
            prev.with_current_edited(now, |itinerary| {
                let moved = itinerary.activities.remove(source_index);
                let destination = destination_index.min(itinerary.activities.len());
                itinerary.activities.insert(destination, moved);
            })
        });
    }

    // --- Plain replacements ---

    pub fn set_selected_activities(&mut self, activities: Vec<Activity>) {
        self.commit("set_selected_activities", |prev, _| {
            Some(Snapshot {
                selected_activities: activities,
                ..prev.clone()
            })
        });
    }

    pub fn set_destinations(&mut self, destinations: Vec<Destination>) {
        self.commit("set_destinations", |prev, _| {
            Some(Snapshot {
                destinations,
                ..prev.clone()
            })
        });
    }

    pub fn add_destination(&mut self, destination: Destination) {
        self.commit("add_destination", |prev, _| {
            let mut next = prev.clone();
            next.destinations.push(destination);
            Some(next)
        });
    }

    pub fn set_selected_destination(&mut self, destination: Option<Destination>) {
        self.commit("set_selected_destination", |prev, _| {
            Some(Snapshot {
                selected_destination: destination,
                ..prev.clone()
            })
        });
    }

    pub fn set_recommendations(&mut self, recommendations: Vec<AiRecommendation>) {
        self.commit("set_recommendations", |prev, _| {
            Some(Snapshot {
                recommendations,
                ..prev.clone()
            })
        });
    }

    pub fn set_loading_recommendations(&mut self, loading: bool) {
        self.commit("set_loading_recommendations", |prev, _| {
            Some(Snapshot {
                is_loading_recommendations: loading,
                ..prev.clone()
            })
        });
    }

    pub fn set_user_preferences(&mut self, preferences: UserPreferences) {
        self.commit("set_user_preferences", |prev, _| {
            Some(Snapshot {
                user_preferences: Some(preferences),
                ..prev.clone()
            })
        });
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.commit("set_loading", |prev, _| {
            Some(Snapshot {
                is_loading: loading,
                ..prev.clone()
            })
        });
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.commit("set_error", |prev, _| {
            Some(Snapshot {
                error,
                ..prev.clone()
            })
        });
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.commit("set_sidebar_open", |prev, _| {
            Some(Snapshot {
                sidebar_open: open,
                ..prev.clone()
            })
        });
    }

    pub fn set_current_view(&mut self, view: ViewMode) {
        self.commit("set_current_view", |prev, _| {
            Some(Snapshot {
                current_view: view,
                ..prev.clone()
            })
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::model::ActivityCategory;
    use chrono::{Duration, TimeZone};
    use std::sync::Mutex;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 10, 9, 0, 0).unwrap()
    }

    fn itinerary(id: &str) -> Itinerary {
        Itinerary::new(id, format!("Trip {}", id), t0(), t0() + Duration::days(3), t0())
    }

    fn activity(id: &str) -> Activity {
        Activity::new(
            id,
            id.to_uppercase(),
            ActivityCategory::Attraction,
            t0(),
            t0() + Duration::hours(1),
        )
    }

    fn store() -> (TravelStore, ManualClock) {
        let clock = ManualClock::new(t0());
        (TravelStore::with_clock(clock.clone()), clock)
    }

    fn activity_ids(snapshot: &Snapshot) -> Vec<String> {
        snapshot
            .current_itinerary()
            .map(|i| i.activities.iter().map(|a| a.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn snapshots_are_not_mutated_by_later_writes() {
        let (mut store, _) = store();
        let before = store.snapshot();
        store.set_loading(true);
        assert!(!before.is_loading());
        assert!(store.snapshot().is_loading());
        assert_eq!(store.snapshot().revision(), 1);
    }

    #[test]
    fn reorder_out_of_range_source_is_noop() {
        let (mut store, _) = store();
        store.set_current_itinerary(Some(
            itinerary("1").with_activities(vec![activity("a"), activity("b")]),
        ));
        let revision = store.snapshot().revision();

        store.reorder_activities(5, 0);
        assert_eq!(store.snapshot().revision(), revision);
        assert_eq!(activity_ids(&store.snapshot()), vec!["a", "b"]);
    }

    #[test]
    fn reorder_clamps_destination_to_end() {
        let (mut store, _) = store();
        store.set_current_itinerary(Some(itinerary("1").with_activities(vec![
            activity("a"),
            activity("b"),
            activity("c"),
        ])));

        store.reorder_activities(0, 99);
        assert_eq!(activity_ids(&store.snapshot()), vec!["b", "c", "a"]);
    }

    #[test]
    fn reorder_backwards_moves_to_front() {
        let (mut store, _) = store();
        store.set_current_itinerary(Some(itinerary("1").with_activities(vec![
            activity("a"),
            activity("b"),
            activity("c"),
            activity("d"),
        ])));

        store.reorder_activities(3, 1);
        assert_eq!(activity_ids(&store.snapshot()), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn update_activity_with_unknown_id_still_stamps_itinerary() {
        let (mut store, clock) = store();
        store.add_itinerary(itinerary("1").with_activities(vec![activity("a")]));
        store.set_current_itinerary(Some(itinerary("1").with_activities(vec![activity("a")])));
        clock.advance(Duration::minutes(5));

        store.update_activity("missing", ActivityPatch::new().title("x"));
        let snapshot = store.snapshot();
        let current = snapshot.current_itinerary().unwrap();
        assert_eq!(current.activities[0].title, "A");
        assert_eq!(current.updated_at, t0() + Duration::minutes(5));
        assert_eq!(snapshot.itineraries()[0].updated_at, current.updated_at);
    }

    #[test]
    fn update_unknown_itinerary_is_noop() {
        let (mut store, _) = store();
        store.add_itinerary(itinerary("1"));
        let before = store.snapshot();

        store.update_itinerary("2", ItineraryPatch::new().title("x"));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn update_non_current_itinerary_stamps_only_that_entry() {
        let (mut store, clock) = store();
        store.set_itineraries(vec![itinerary("1"), itinerary("2")]);
        store.set_current_itinerary(Some(itinerary("1")));
        clock.advance(Duration::hours(1));

        store.update_itinerary("2", ItineraryPatch::new().title("Second"));
        let snapshot = store.snapshot();
        assert_eq!(snapshot.itinerary("2").unwrap().title, "Second");
        assert_eq!(snapshot.itinerary("2").unwrap().updated_at, t0() + Duration::hours(1));
        assert_eq!(snapshot.current_itinerary().unwrap().updated_at, t0());
    }

    #[test]
    fn set_itineraries_detaches_missing_current() {
        let (mut store, _) = store();
        store.set_itineraries(vec![itinerary("1"), itinerary("2")]);
        store.set_current_itinerary(Some(itinerary("1")));

        store.set_itineraries(vec![itinerary("2")]);
        let snapshot = store.snapshot();
        assert!(snapshot.is_current_detached());
        assert_eq!(snapshot.current_itinerary_id(), Some("1"));
        assert_eq!(snapshot.itineraries().len(), 1);
    }

    #[test]
    fn set_itineraries_with_same_data_keeps_current_listed() {
        let (mut store, _) = store();
        store.set_itineraries(vec![itinerary("1")]);
        store.set_current_itinerary(Some(itinerary("1")));

        store.set_itineraries(vec![itinerary("2"), itinerary("1")]);
        let snapshot = store.snapshot();
        assert!(!snapshot.is_current_detached());
        assert_eq!(snapshot.current_itinerary(), snapshot.itinerary("1"));
    }

    #[test]
    fn update_itinerary_patches_detached_current_and_list_separately() {
        let (mut store, clock) = store();
        store.add_itinerary(itinerary("1"));
        let mut draft = itinerary("1");
        draft.tags = vec!["draft".to_string()];
        store.set_current_itinerary(Some(draft));
        clock.advance(Duration::minutes(1));

        store.update_itinerary("1", ItineraryPatch::new().title("Renamed"));
        let snapshot = store.snapshot();
        let current = snapshot.current_itinerary().unwrap();
        let listed = snapshot.itinerary("1").unwrap();
        assert_eq!(current.title, "Renamed");
        assert_eq!(listed.title, "Renamed");
        assert_eq!(current.tags, vec!["draft"]);
        assert!(listed.tags.is_empty());
        assert!(snapshot.is_current_detached());
    }

    #[test]
    fn empty_patches_are_noops() {
        let (mut store, _) = store();
        let trip = itinerary("1").with_activities(vec![activity("a")]);
        store.add_itinerary(trip.clone());
        store.set_current_itinerary(Some(trip));
        let before = store.snapshot();

        store.update_itinerary("1", ItineraryPatch::new());
        store.update_activity("a", ActivityPatch::new());
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn detached_current_reattaches_on_next_edit() {
        let (mut store, _) = store();
        store.set_current_itinerary(Some(itinerary("1")));
        assert!(store.snapshot().is_current_detached());

        store.add_itinerary(itinerary("1"));
        store.add_activity(activity("a"));

        let snapshot = store.snapshot();
        assert!(!snapshot.is_current_detached());
        assert_eq!(activity_ids(&snapshot), vec!["a"]);
        assert_eq!(snapshot.itineraries()[0].activities.len(), 1);
    }

    #[test]
    fn delete_unknown_itinerary_is_noop() {
        let (mut store, _) = store();
        store.add_itinerary(itinerary("1"));
        let revision = store.snapshot().revision();
        store.delete_itinerary("nope");
        assert_eq!(store.snapshot().revision(), revision);
    }

    #[test]
    fn delete_detached_current_clears_it() {
        let (mut store, _) = store();
        store.set_current_itinerary(Some(itinerary("7")));
        store.delete_itinerary("7");
        assert!(store.snapshot().current_itinerary().is_none());
    }

    #[test]
    fn noops_do_not_notify() {
        let (mut store, _) = store();
        let seen = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&seen);
        store.subscribe(move |_| *counter.lock().unwrap() += 1);

        store.add_activity(activity("a"));
        store.delete_activity("a");
        store.reorder_activities(0, 1);
        store.update_activity("a", ActivityPatch::new().title("x"));
        assert_eq!(*seen.lock().unwrap(), 0);

        store.set_sidebar_open(true);
        assert_eq!(*seen.lock().unwrap(), 1);
    }

    #[test]
    fn plain_setters_replace_fields() {
        let (mut store, _) = store();
        store.set_error(Some("network down".to_string()));
        store.set_current_view(ViewMode::Calendar);
        store.set_loading_recommendations(true);
        store.set_selected_activities(vec![activity("a")]);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.error(), Some("network down"));
        assert_eq!(snapshot.current_view(), ViewMode::Calendar);
        assert!(snapshot.is_loading_recommendations());
        assert_eq!(snapshot.selected_activities().len(), 1);

        store.set_error(None);
        assert!(store.snapshot().error().is_none());
    }
}
