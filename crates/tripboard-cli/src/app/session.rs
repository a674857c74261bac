//! Building a store and replaying a script through it.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Deserialize;
use tripboard_core::model::{Destination, Itinerary, UserPreferences};
use tripboard_core::{ManualClock, Snapshot, StoreAction, TravelStore, TripboardError};

use crate::cli::ReplayInput;
use crate::errors::CliError;
use crate::helpers::parse_datetime;

use super::AppContext;

/// Initial store contents, as handed over by a profile or persistence layer.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Seed {
    #[serde(default)]
    pub itineraries: Option<Vec<Itinerary>>,
    #[serde(default)]
    pub destinations: Option<Vec<Destination>>,
    #[serde(default)]
    pub user_preferences: Option<UserPreferences>,
    /// Must name one of `itineraries`
    #[serde(default)]
    pub current_itinerary_id: Option<String>,
}

impl Seed {
    pub fn apply(self, store: &mut TravelStore) -> anyhow::Result<()> {
        if let Some(destinations) = self.destinations {
            store.set_destinations(destinations);
        }
        if let Some(itineraries) = self.itineraries {
            store.set_itineraries(itineraries);
        }
        if let Some(preferences) = self.user_preferences {
            store.set_user_preferences(preferences);
        }
        if let Some(id) = self.current_itinerary_id {
            let current = store.snapshot().itinerary(&id).cloned().ok_or_else(|| {
                CliError::not_found(
                    format!("Seed names current itinerary \"{}\" but does not contain it", id),
                    "Add the itinerary to the seed's \"itineraries\" list",
                )
            })?;
            store.set_current_itinerary(Some(current));
        }
        Ok(())
    }
}

fn read_input(path: &Path, what: &str) -> anyhow::Result<String> {
    if !path.exists() {
        return Err(CliError::not_found(
            format!("No {} found at {}", what, path.display()),
            "Pass the path to an existing JSON file",
        )
        .into());
    }
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} {}: {}", what, path.display(), e))
}

pub fn load_script(path: &Path) -> anyhow::Result<Vec<StoreAction>> {
    let json = read_input(path, "script")?;
    StoreAction::parse_script(&json).map_err(|e| invalid_file(path, e))
}

pub fn load_seed(path: &Path) -> anyhow::Result<Seed> {
    let json = read_input(path, "seed")?;
    serde_json::from_str(&json).map_err(|e| invalid_file(path, e.into()))
}

fn invalid_file(path: &Path, err: TripboardError) -> anyhow::Error {
    CliError::invalid_input(format!("{}: {}", path.display(), err)).into()
}

/// One transition observed while replaying.
#[derive(Debug, Clone)]
pub struct TraceLine {
    pub action: &'static str,
    pub revision: u64,
    pub itineraries: usize,
    pub current: Option<String>,
    pub activities: usize,
}

pub struct ReplayOutcome {
    pub snapshot: Arc<Snapshot>,
    pub steps: usize,
    /// 1-based script positions that changed nothing, with their action names
    pub skipped: Vec<(usize, &'static str)>,
    pub trace: Vec<TraceLine>,
}

/// Build a store from config and seed, then dispatch every script action.
pub fn replay(ctx: &AppContext, input: &ReplayInput) -> anyhow::Result<ReplayOutcome> {
    let script = load_script(Path::new(&input.script))?;
    let seed = input
        .seed
        .as_deref()
        .map(|path| load_seed(Path::new(path)))
        .transpose()?;

    let mut store = match input.now.as_deref() {
        Some(value) => TravelStore::with_clock(ManualClock::new(parse_datetime(value)?)),
        None => TravelStore::new(),
    };

    let config = ctx.config()?;
    store.set_current_view(config.store.initial_view);
    store.set_sidebar_open(config.store.sidebar_open);
    if let Some(seed) = seed {
        seed.apply(&mut store)?;
    }

    let trace = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&trace);
    let subscription = store.subscribe(move |transition| {
        let snapshot = transition.current;
        let current = snapshot.current_itinerary();
        if let Ok(mut lines) = sink.lock() {
            lines.push(TraceLine {
                action: transition.action,
                revision: snapshot.revision(),
                itineraries: snapshot.itineraries().len(),
                current: current.map(|i| i.id.clone()),
                activities: current.map(|i| i.activities.len()).unwrap_or(0),
            });
        }
    });

    let steps = script.len();
    let mut skipped = Vec::new();
    for (index, action) in script.into_iter().enumerate() {
        let name = action.name();
        if !store.dispatch(action) {
            tracing::debug!(step = index + 1, action = name, "action changed nothing");
            skipped.push((index + 1, name));
        }
    }
    store.unsubscribe(subscription);

    let trace = trace
        .lock()
        .map(|mut lines| std::mem::take(&mut *lines))
        .map_err(|_| anyhow::anyhow!("trace buffer poisoned"))?;

    Ok(ReplayOutcome {
        snapshot: store.snapshot(),
        steps,
        skipped,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_rejects_unknown_keys() {
        let result: Result<Seed, _> = serde_json::from_str(r#"{ "itinerarys": [] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn seed_with_dangling_current_is_not_found() {
        let seed: Seed = serde_json::from_str(r#"{ "currentItineraryId": "ghost" }"#).unwrap();
        let mut store = TravelStore::new();
        let err = seed.apply(&mut store).unwrap_err();
        let cli = err.downcast_ref::<CliError>().expect("CliError");
        assert_eq!(cli.code, crate::constants::exit_codes::NOT_FOUND);
    }

    #[test]
    fn seed_selects_listed_itinerary() {
        let seed: Seed = serde_json::from_str(
            r#"{
                "itineraries": [{
                    "id": "1",
                    "title": "Oslo",
                    "startDate": "2025-08-01T00:00:00Z",
                    "endDate": "2025-08-04T00:00:00Z",
                    "currency": "NOK",
                    "travelers": 2,
                    "createdAt": "2025-07-01T00:00:00Z",
                    "updatedAt": "2025-07-01T00:00:00Z"
                }],
                "currentItineraryId": "1"
            }"#,
        )
        .unwrap();
        let mut store = TravelStore::new();
        seed.apply(&mut store).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.current_itinerary_id(), Some("1"));
        assert!(!snapshot.is_current_detached());
    }
}
