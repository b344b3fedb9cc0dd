//! Reservation → calendar event projection
//!
//! Pure and total: every record maps to exactly one event. Free time is the
//! absence of an event, so no status ever yields an "available" block.

use ballkeeper_domain::constants::{TITLE_PENDING, TITLE_RESERVED};
use ballkeeper_domain::{CalendarEvent, EventStyle, ReservationRecord, ReservationStatus};
use tracing::{debug, warn};

/// Semantic style for a status. Unknown statuses render as occupied.
pub fn style_for(status: &ReservationStatus) -> EventStyle {
    match status {
        ReservationStatus::Approved => EventStyle::Booked,
        ReservationStatus::Pending => EventStyle::Tentative,
        ReservationStatus::Other(_) => EventStyle::Occupied,
    }
}

pub fn title_for(status: &ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => TITLE_PENDING,
        _ => TITLE_RESERVED,
    }
}

/// Project one record.
pub fn project(record: &ReservationRecord) -> CalendarEvent {
    let style = style_for(&record.status);
    if let ReservationStatus::Other(raw) = &record.status {
        debug!(reservation_id = record.id, status = %raw, "Unrecognised reservation status rendered as occupied");
    }
    CalendarEvent {
        id: record.id,
        title: title_for(&record.status).to_string(),
        start: record.start,
        end: record.end,
        status: record.status.clone(),
        style,
        style_priority: style.priority(),
    }
}

/// Project a whole response, dropping inverted spans and ordering by start.
pub fn project_all(records: &[ReservationRecord]) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = records
        .iter()
        .filter(|record| {
            if record.end < record.start {
                warn!(
                    reservation_id = record.id,
                    start = %record.start,
                    end = %record.end,
                    "Dropping reservation whose end precedes its start"
                );
                return false;
            }
            true
        })
        .map(project)
        .collect();
    events.sort_by(|a, b| a.start.cmp(&b.start).then(a.id.cmp(&b.id)));
    events
}

#[cfg(test)]
mod tests {
    use ballkeeper_domain::StylePriority;
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    fn record(id: i64, start: NaiveDateTime, end: NaiveDateTime, status: &str) -> ReservationRecord {
        ReservationRecord { id, start, end, status: ReservationStatus::from(status) }
    }

    #[test]
    fn approved_is_booked_high() {
        let event = project(&record(1, at(20, 10), at(20, 12), "APPROVED"));
        assert_eq!(event.style, EventStyle::Booked);
        assert_eq!(event.style_priority, StylePriority::High);
        assert_eq!(event.title, TITLE_RESERVED);
        assert_eq!(event.start, at(20, 10));
        assert_eq!(event.end, at(20, 12));
    }

    #[test]
    fn pending_is_tentative_medium() {
        let event = project(&record(2, at(22, 9), at(22, 10), "PENDING"));
        assert_eq!(event.style, EventStyle::Tentative);
        assert_eq!(event.style_priority, StylePriority::Medium);
        assert_eq!(event.title, TITLE_PENDING);
    }

    #[test]
    fn unknown_statuses_are_occupied_never_free() {
        for raw in ["CANCELLED", "RETURNED", "", "approved-ish", "REJECTED"] {
            let event = project(&record(3, at(1, 0), at(1, 1), raw));
            assert_eq!(event.style, EventStyle::Occupied, "status {raw:?}");
            assert_eq!(event.style_priority, StylePriority::Low);
            assert!(event.style.blocks_availability());
            assert_eq!(event.status.as_str(), raw);
        }
    }

    #[test]
    fn projection_is_deterministic() {
        let input = record(4, at(3, 8), at(3, 9), "APPROVED");
        assert_eq!(project(&input), project(&input));
    }

    #[test]
    fn project_all_sorts_and_drops_inverted_spans() {
        let records = vec![
            record(9, at(22, 9), at(22, 10), "PENDING"),
            record(5, at(20, 10), at(20, 12), "APPROVED"),
            record(6, at(21, 12), at(21, 10), "APPROVED"),
            record(4, at(20, 10), at(20, 11), "PENDING"),
        ];
        let ids: Vec<i64> = project_all(&records).iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 5, 9]);
    }

    #[test]
    fn zero_length_reservation_is_kept() {
        let events = project_all(&[record(1, at(5, 5), at(5, 5), "APPROVED")]);
        assert_eq!(events.len(), 1);
    }
}
