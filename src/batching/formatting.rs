//! Clock-time labels for route rows.

use super::chronology::resolve_timestamp_in;
use crate::config::BatchingConfig;
use crate::constants::TIME_TBD;
use crate::models::PickupFields;
use chrono::{Local, TimeZone};
use std::fmt::Display;

/// Render a pickup's effective time as a 12-hour clock in `tz`, e.g. `9:05 AM`.
///
/// Date-times stored without an offset are taken as wall-clock time in `tz`.
/// Returns `"Time TBD"` when the pickup has no readable timestamp.
pub fn format_pickup_time_in<P, Tz>(pickup: &P, tz: &Tz) -> String
where
    P: PickupFields + ?Sized,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match resolve_timestamp_in(pickup, tz) {
        Some(instant) => instant.with_timezone(tz).format("%-I:%M %p").to_string(),
        None => TIME_TBD.to_string(),
    }
}

/// [`format_pickup_time_in`] using the host's local time zone.
pub fn format_pickup_time<P: PickupFields + ?Sized>(pickup: &P) -> String {
    format_pickup_time_in(pickup, &Local)
}

/// [`format_pickup_time_in`] using the configured display offset, or local time if unset.
pub fn format_pickup_time_with_config<P: PickupFields + ?Sized>(
    pickup: &P,
    config: &BatchingConfig,
) -> String {
    match config.display_offset() {
        Some(offset) => format_pickup_time_in(pickup, &offset),
        None => format_pickup_time(pickup),
    }
}
