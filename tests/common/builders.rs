//! Pickup builders shared by the integration tests.

use chrono::{DateTime, TimeZone, Utc};
use pickup_batching::PickupRecord;

/// 2 June 2025 at `hour:minute` UTC.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, hour, minute, 0)
        .single()
        .expect("valid test time")
}

/// A pickup at a San Jose-style address in `zip`, scheduled via the nested pickup field.
pub fn scheduled_pickup(id: &str, zip: &str, hour: u32, minute: u32) -> PickupRecord {
    PickupRecord::new(id)
        .with_location_address(format!("100 Santa Clara St, San Jose, CA {zip}"))
        .with_scheduled_pickup_time(at(hour, minute))
}

pub fn route_ids<T: pickup_batching::PickupFields>(route: &[T]) -> Vec<String> {
    route.iter().map(|p| p.pickup_id().to_string()).collect()
}
