use crate::models::Appointment;
use crate::period::PeriodRange;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Drops the reserved service type. Runs on load and after every
/// mutation, before anything else sees the list.
pub fn scope_filter(records: &[Appointment]) -> Vec<Appointment> {
    records
        .iter()
        .filter(|record| !record.is_reserved())
        .cloned()
        .collect()
}

/// Keeps records whose date parses to an instant within the range.
/// Records with unparsable dates are treated as out-of-range; they
/// still show up in the raw listing.
pub fn in_range<'a>(records: &'a [Appointment], range: &PeriodRange) -> Vec<&'a Appointment> {
    records
        .iter()
        .filter(|record| {
            parse_appointment_date(&record.appointment_date)
                .map(|instant| range.contains(instant))
                .unwrap_or(false)
        })
        .collect()
}

/// Accepts RFC 3339, a plain ISO date-time, or a bare date (midnight).
pub fn parse_appointment_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.naive_local());
    }
    if let Ok(instant) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(instant);
    }
    if let Ok(instant) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(instant);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
