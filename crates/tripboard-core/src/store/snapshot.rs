//! Immutable view of the whole store at one revision.

use chrono::{DateTime, Utc};

use crate::model::{
    Activity, AiRecommendation, Destination, Itinerary, UserPreferences, ViewMode,
};

/// Which itinerary is being edited.
///
/// A listed current itinerary is referenced by id, so it cannot drift from
/// its entry in `itineraries`. A detached one is held by value because the
/// list has no entry with the same data under its id.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CurrentItinerary {
    Listed(String),
    Detached(Itinerary),
}

/// Every field of the store at one point in time.
///
/// Snapshots are never mutated once published; each store operation builds a
/// new one and bumps `revision`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub(crate) revision: u64,
    pub(crate) itineraries: Vec<Itinerary>,
    pub(crate) current: Option<CurrentItinerary>,
    pub(crate) selected_activities: Vec<Activity>,
    pub(crate) destinations: Vec<Destination>,
    pub(crate) selected_destination: Option<Destination>,
    pub(crate) recommendations: Vec<AiRecommendation>,
    pub(crate) is_loading_recommendations: bool,
    pub(crate) user_preferences: Option<UserPreferences>,
    pub(crate) is_loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) sidebar_open: bool,
    pub(crate) current_view: ViewMode,
}

impl Snapshot {
    /// Number of transitions that produced this snapshot.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn itineraries(&self) -> &[Itinerary] {
        &self.itineraries
    }

    /// First itinerary in the list with this id.
    pub fn itinerary(&self, id: &str) -> Option<&Itinerary> {
        self.itineraries.iter().find(|i| i.id == id)
    }

    pub fn current_itinerary(&self) -> Option<&Itinerary> {
        match self.current.as_ref()? {
            CurrentItinerary::Listed(id) => self.itinerary(id),
            CurrentItinerary::Detached(itinerary) => Some(itinerary),
        }
    }

    pub fn current_itinerary_id(&self) -> Option<&str> {
        match self.current.as_ref()? {
            CurrentItinerary::Listed(id) => Some(id),
            CurrentItinerary::Detached(itinerary) => Some(&itinerary.id),
        }
    }

    /// True when the current itinerary is held apart from `itineraries`,
    /// either because its id is not listed or because the listed entry differs.
    pub fn is_current_detached(&self) -> bool {
        matches!(self.current, Some(CurrentItinerary::Detached(_)))
    }

    pub fn selected_activities(&self) -> &[Activity] {
        &self.selected_activities
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn selected_destination(&self) -> Option<&Destination> {
        self.selected_destination.as_ref()
    }

    pub fn recommendations(&self) -> &[AiRecommendation] {
        &self.recommendations
    }

    pub fn is_loading_recommendations(&self) -> bool {
        self.is_loading_recommendations
    }

    pub fn user_preferences(&self) -> Option<&UserPreferences> {
        self.user_preferences.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn current_view(&self) -> ViewMode {
        self.current_view
    }

    /// Pointer for `itinerary` as the current one, leaving the list alone.
    pub(crate) fn pointer_to(&self, itinerary: Itinerary) -> CurrentItinerary {
        if self.itinerary(&itinerary.id) == Some(&itinerary) {
            CurrentItinerary::Listed(itinerary.id)
        } else {
            CurrentItinerary::Detached(itinerary)
        }
    }

    /// Make `itinerary` the current one and write it into every list slot
    /// sharing its id. With no such slot it is held detached.
    pub(crate) fn publish_current(&mut self, itinerary: Itinerary) {
        let mut listed = false;
        for slot in self.itineraries.iter_mut().filter(|i| i.id == itinerary.id) {
            *slot = itinerary.clone();
            listed = true;
        }
        self.current = Some(if listed {
            CurrentItinerary::Listed(itinerary.id)
        } else {
            CurrentItinerary::Detached(itinerary)
        });
    }

    /// Copy-on-write edit of the current itinerary: clone it, apply `edit`,
    /// stamp `updated_at` and publish it to both views.
    ///
    /// Returns `None` when there is no current itinerary.
    pub(crate) fn with_current_edited<F>(&self, now: DateTime<Utc>, edit: F) -> Option<Snapshot>
    where
        F: FnOnce(&mut Itinerary),
    {
        let mut itinerary = self.current_itinerary()?.clone();
        edit(&mut itinerary);
        itinerary.updated_at = now;

        let mut next = self.clone();
        next.publish_current(itinerary);
        Some(next)
    }
}
