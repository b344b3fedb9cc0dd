//! Availability calendar commands
//!
//! Thin wrappers over [`CalendarEngine`](ballkeeper_core::CalendarEngine).
//! Every command returns the snapshot taken right after the call, so the host
//! can render without a second round trip.

use ballkeeper_core::NavigationOutcome;
use ballkeeper_domain::{
    CalendarSnapshot, EventStyle, Granularity, ItemTarget, LegendEntry, Result,
};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Open the calendar on `target`. The fetch continues in the background.
pub async fn open_calendar(ctx: &AppContext, target: ItemTarget) -> Result<CalendarSnapshot> {
    execute_command("calendar::open_calendar", || async move {
        info!(item_id = target.id, "Opening calendar");
        let outcome = ctx.calendar.open(target);
        debug!(issued = outcome.is_issued(), "open_calendar outcome");
        Ok(ctx.calendar.snapshot())
    })
    .await
}

/// Open the calendar on `target` and wait for the fetch it issues to settle.
///
/// # Errors
/// Returns the transport error if the fetch failed after every retry. A fetch
/// superseded by a newer request is not an error; the snapshot is returned as
/// is.
pub async fn load_calendar(ctx: &AppContext, target: ItemTarget) -> Result<CalendarSnapshot> {
    execute_command("calendar::load_calendar", || async move {
        settle(ctx, ctx.calendar.open(target)).await
    })
    .await
}

/// Host navigation callback: new anchor date and/or zoom level.
pub async fn navigate_calendar(
    ctx: &AppContext,
    anchor: NaiveDate,
    granularity: Granularity,
) -> Result<CalendarSnapshot> {
    execute_command("calendar::navigate_calendar", || async move {
        let outcome = ctx.calendar.navigate(anchor, granularity);
        debug!(anchor = %anchor, %granularity, issued = outcome.is_issued(), "navigate_calendar");
        Ok(ctx.calendar.snapshot())
    })
    .await
}

/// Like [`navigate_calendar`], waiting for the resulting fetch.
pub async fn navigate_calendar_and_wait(
    ctx: &AppContext,
    anchor: NaiveDate,
    granularity: Granularity,
) -> Result<CalendarSnapshot> {
    execute_command("calendar::navigate_calendar_and_wait", || async move {
        settle(ctx, ctx.calendar.navigate(anchor, granularity)).await
    })
    .await
}

/// Re-issue the current request, typically after an error.
pub async fn refresh_calendar(ctx: &AppContext) -> Result<CalendarSnapshot> {
    execute_command("calendar::refresh_calendar", || async move {
        settle(ctx, ctx.calendar.refresh()).await
    })
    .await
}

pub async fn close_calendar(ctx: &AppContext) -> Result<CalendarSnapshot> {
    execute_command("calendar::close_calendar", || async move {
        ctx.calendar.close();
        Ok(ctx.calendar.snapshot())
    })
    .await
}

pub fn calendar_snapshot(ctx: &AppContext) -> CalendarSnapshot {
    ctx.calendar.snapshot()
}

/// Legend shown next to the calendar.
pub fn calendar_legend() -> [LegendEntry; 3] {
    EventStyle::legend()
}

async fn settle(ctx: &AppContext, outcome: NavigationOutcome) -> Result<CalendarSnapshot> {
    if let Some(ticket) = outcome.ticket() {
        match ticket.outcome().await {
            Ok(applied) => {
                debug!(
                    generation = applied.generation,
                    attempts = applied.attempts,
                    events = applied.event_count,
                    "Calendar fetch applied"
                );
            }
            Err(err) if err.is_superseded() => {
                debug!(error = %err, "Calendar fetch superseded");
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(ctx.calendar.snapshot())
}
