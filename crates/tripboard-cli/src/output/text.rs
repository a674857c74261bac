//! Text and table output formatting.

use tripboard_core::views::{CalendarEvent, MapMarker};
use tripboard_core::Snapshot;

use crate::app::TraceLine;
use crate::ui::{format_time, header, kv, table, UiContext};

fn money(amount: Option<f64>, currency: Option<&str>) -> String {
    match (amount, currency) {
        (Some(amount), Some(currency)) => format!("{:.2} {}", amount, currency),
        (Some(amount), None) => format!("{:.2}", amount),
        _ => "-".to_string(),
    }
}

/// Print a snapshot summary followed by the current itinerary's schedule.
pub fn print_snapshot(ui: &UiContext, snapshot: &Snapshot, quiet: bool) {
    if !quiet {
        println!("{}", header(ui, "replay", None));
        println!("{}", kv(ui, "Revision", &snapshot.revision().to_string()));
        println!("{}", kv(ui, "Current View", snapshot.current_view().as_str()));
        println!("{}", kv(ui, "Sidebar Open", &snapshot.sidebar_open().to_string()));
        println!("{}", kv(ui, "Destinations", &snapshot.destinations().len().to_string()));
        println!(
            "{}",
            kv(ui, "Recommendations", &snapshot.recommendations().len().to_string())
        );
        if let Some(error) = snapshot.error() {
            println!("{}", kv(ui, "Error", error));
        }
        println!();
    }

    let rows: Vec<Vec<String>> = snapshot
        .itineraries()
        .iter()
        .map(|itinerary| {
            let marker = if snapshot.current_itinerary_id() == Some(itinerary.id.as_str()) {
                "*"
            } else {
                ""
            };
            vec![
                marker.to_string(),
                itinerary.id.clone(),
                itinerary.title.clone(),
                itinerary.activities.len().to_string(),
                format_time(ui, &itinerary.updated_at),
            ]
        })
        .collect();
    if rows.is_empty() {
        if !quiet {
            println!("No itineraries.");
        }
    } else {
        println!(
            "{}",
            table(ui, &["", "Id", "Title", "Activities", "Updated"], &rows)
        );
    }

    let Some(current) = snapshot.current_itinerary() else {
        return;
    };
    if !quiet {
        println!();
        let label = if snapshot.is_current_detached() {
            format!("{} (not in itineraries)", current.title)
        } else {
            current.title.clone()
        };
        println!("{}", kv(ui, "Current", &label));
    }
    let rows: Vec<Vec<String>> = current
        .activities
        .iter()
        .enumerate()
        .map(|(position, activity)| {
            vec![
                position.to_string(),
                activity.id.clone(),
                activity.title.clone(),
                activity.category.to_string(),
                format_time(ui, &activity.start_time),
                money(activity.price, activity.currency.as_deref()),
            ]
        })
        .collect();
    if !rows.is_empty() {
        println!(
            "{}",
            table(ui, &["#", "Id", "Title", "Category", "Starts", "Price"], &rows)
        );
    }
}

/// Print the transitions observed during a replay.
pub fn print_trace(ui: &UiContext, trace: &[TraceLine], skipped: &[(usize, &'static str)]) {
    let rows: Vec<Vec<String>> = trace
        .iter()
        .map(|line| {
            vec![
                line.revision.to_string(),
                line.action.to_string(),
                line.itineraries.to_string(),
                line.current.clone().unwrap_or_else(|| "-".to_string()),
                line.activities.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        table(
            ui,
            &["Rev", "Action", "Itineraries", "Current", "Activities"],
            &rows
        )
    );
    for (step, action) in skipped {
        println!("{}", kv(ui, "Skipped", &format!("step {} ({})", step, action)));
    }
}

pub fn print_calendar(ui: &UiContext, events: &[CalendarEvent], quiet: bool) {
    if events.is_empty() {
        if !quiet {
            println!("No calendar events.");
        }
        return;
    }
    if !quiet {
        let itinerary_id = events[0].extended_props.itinerary_id.as_str();
        println!("{}", header(ui, "calendar", Some(itinerary_id)));
    }
    let rows: Vec<Vec<String>> = events
        .iter()
        .map(|event| {
            vec![
                format_time(ui, &event.start),
                format_time(ui, &event.end),
                event.title.clone(),
                format!("{:?}", event.extended_props.kind).to_lowercase(),
            ]
        })
        .collect();
    println!("{}", table(ui, &["Start", "End", "Title", "Type"], &rows));
}

pub fn print_markers(ui: &UiContext, markers: &[MapMarker], quiet: bool) {
    if markers.is_empty() {
        if !quiet {
            println!("No map markers.");
        }
        return;
    }
    if !quiet {
        println!("{}", header(ui, "markers", None));
    }
    let rows: Vec<Vec<String>> = markers
        .iter()
        .map(|marker| {
            vec![
                marker.id.clone(),
                marker.title.clone(),
                format!("{:?}", marker.kind).to_lowercase(),
                format!("{:.4},{:.4}", marker.position.lat, marker.position.lng),
                if marker.is_selected { "yes" } else { "" }.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        table(ui, &["Id", "Title", "Type", "Position", "Selected"], &rows)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_formats_optional_parts() {
        assert_eq!(money(Some(12.5), Some("EUR")), "12.50 EUR");
        assert_eq!(money(Some(3.0), None), "3.00");
        assert_eq!(money(None, Some("EUR")), "-");
    }
}
