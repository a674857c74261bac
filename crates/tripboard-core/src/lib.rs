//! # Tripboard Core
//!
//! Core library for Tripboard - a travel itinerary planner.
//!
//! This crate provides the domain model and the observable state store that
//! the planner's views read from and write through, independent of any
//! presentation layer.
//!
//! ## Architecture
//!
//! - **model**: Destinations, activities, itineraries, recommendations, preferences
//! - **patch**: Partial updates for itineraries and activities
//! - **store**: The travel state store, its snapshots and subscriptions
//! - **action**: Serializable form of every store write operation
//! - **views**: Calendar events and map markers derived from a snapshot
//! - **clock**: Time source used to stamp `updated_at`

pub mod action;
pub mod clock;
pub mod error;
pub mod model;
pub mod patch;
pub mod store;
pub mod views;

pub use action::StoreAction;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Result, TripboardError};
pub use patch::{ActivityPatch, ItineraryPatch};
pub use store::{Snapshot, SubscriptionId, Transition, TravelStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
