//! Effective timestamps and chronological ordering.

use crate::models::{PickupFields, TimestampValue};
use chrono::{DateTime, Local, TimeZone, Utc};

/// The timestamp field that decides when a pickup happens.
///
/// Candidates in priority order: `pickup.scheduledDate`, top-level
/// `scheduledDate`, `createdAt`. The first candidate that is filled in wins.
fn winning_candidate<P: PickupFields + ?Sized>(pickup: &P) -> Option<&TimestampValue> {
    [
        pickup.scheduled_pickup_time(),
        pickup.scheduled_date(),
        pickup.created_at(),
    ]
    .into_iter()
    .flatten()
    .find(|value| value.is_present())
}

/// Resolve the instant a pickup is scheduled for, reading offset-less
/// date-times as wall-clock time in `zone`.
///
/// If the winning candidate cannot be read as a date the result is `None`,
/// exactly as if no candidate were present; later candidates are not consulted.
pub fn resolve_timestamp_in<P, Tz>(pickup: &P, zone: &Tz) -> Option<DateTime<Utc>>
where
    P: PickupFields + ?Sized,
    Tz: TimeZone,
{
    winning_candidate(pickup)?.normalize_in(zone)
}

/// [`resolve_timestamp_in`] using the host's local time zone.
pub fn resolve_timestamp<P: PickupFields + ?Sized>(pickup: &P) -> Option<DateTime<Utc>> {
    resolve_timestamp_in(pickup, &Local)
}

/// The filled-in timestamp field that cannot be read as a date, if any.
pub fn unreadable_timestamp<P: PickupFields + ?Sized>(pickup: &P) -> Option<&TimestampValue> {
    winning_candidate(pickup).filter(|value| value.normalize_in(&Utc).is_none())
}

/// Sort key for route ordering. Unscheduled pickups sit at the Unix epoch.
pub fn effective_timestamp<P: PickupFields + ?Sized>(pickup: &P) -> DateTime<Utc> {
    resolve_timestamp(pickup).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Stable ascending sort by effective timestamp.
pub fn sort_by_time<T: PickupFields>(pickups: Vec<T>) -> Vec<T> {
    let mut keyed: Vec<(DateTime<Utc>, T)> = pickups
        .into_iter()
        .map(|pickup| (effective_timestamp(&pickup), pickup))
        .collect();
    keyed.sort_by_key(|(instant, _)| *instant);
    keyed.into_iter().map(|(_, pickup)| pickup).collect()
}
