//! Domain model for itineraries and everything that hangs off them.
//!
//! Entities are plain values. The store never constructs them; callers build
//! them (from forms, recommendation payloads, seeds) and hand them over.
//! Field names serialize in camelCase so payloads from the web front end and
//! the recommendation backend decode unchanged.

mod activity;
mod category;
mod destination;
mod itinerary;
mod preferences;
mod recommendation;
mod view;

use serde::{Deserialize, Serialize};

pub use activity::Activity;
pub use category::ActivityCategory;
pub use destination::Destination;
pub use itinerary::Itinerary;
pub use preferences::{
    Accommodation, BudgetRange, GroupType, Pace, TransportPreference, TravelStyle,
    UserPreferences,
};
pub use recommendation::{AiRecommendation, RecommendationKind};
pub use view::ViewMode;

/// A point on the map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
