use tripboard_core::views::{calendar_events, map_markers};

use crate::app::{replay, AppContext};
use crate::cli::{ReplayArgs, ViewArgs};
use crate::output::{print_calendar, print_markers, print_snapshot, print_trace, replay_json};
use crate::ui::OutputMode;

pub fn handle_replay(ctx: &AppContext, args: &ReplayArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args.json, args.format)?;
    let outcome = replay(ctx, &args.input)?;

    if ui.mode == OutputMode::Json {
        let value = replay_json(&outcome, args.trace);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if args.trace {
        print_trace(&ui, &outcome.trace, &outcome.skipped);
        println!();
    }
    print_snapshot(&ui, &outcome.snapshot, ctx.quiet());
    Ok(())
}

pub fn handle_calendar(ctx: &AppContext, args: &ViewArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args.json, args.format)?;
    let outcome = replay(ctx, &args.input)?;
    let events = outcome
        .snapshot
        .current_itinerary()
        .map(calendar_events)
        .unwrap_or_default();

    if ui.mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }
    print_calendar(&ui, &events, ctx.quiet());
    Ok(())
}

pub fn handle_markers(ctx: &AppContext, args: &ViewArgs) -> anyhow::Result<()> {
    let ui = ctx.ui(args.json, args.format)?;
    let outcome = replay(ctx, &args.input)?;
    let markers = map_markers(&outcome.snapshot);

    if ui.mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&markers)?);
        return Ok(());
    }
    print_markers(&ui, &markers, ctx.quiet());
    Ok(())
}
