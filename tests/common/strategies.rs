use super::builders::at;
use pickup_batching::{PickupRecord, TimestampValue};
use proptest::prelude::*;
use proptest::strategy::Just;

/// Strategy for address strings: mostly a handful of shared ZIP codes, plus
/// addresses with no ZIP at all
pub fn address_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        4 => prop::sample::select(vec!["95113", "94103", "95050", "94607", "95008"])
            .prop_map(|zip| Some(format!("12 Oak Ave, CA {zip}"))),
        1 => Just(Some("No Street Name".to_string())),
        1 => Just(Some(String::new())),
        1 => Just(None),
    ]
}

/// Strategy for timestamp fields, including missing and unreadable values
pub fn timestamp_strategy() -> impl Strategy<Value = Option<TimestampValue>> {
    prop_oneof![
        4 => (6u32..20, 0u32..60).prop_map(|(h, m)| Some(TimestampValue::from(at(h, m)))),
        2 => (6u32..20, 0u32..60)
            .prop_map(|(h, m)| Some(TimestampValue::from_text(format!("2025-06-02T{h:02}:{m:02}:00Z")))),
        1 => Just(Some(TimestampValue::from_text("whenever"))),
        2 => Just(None),
    ]
}

/// Strategy for a single pickup record with an arbitrary mix of optional fields
pub fn pickup_strategy() -> impl Strategy<Value = PickupRecord> {
    (
        "[a-z0-9]{6}",
        address_strategy(),
        address_strategy(),
        timestamp_strategy(),
        timestamp_strategy(),
        timestamp_strategy(),
    )
        .prop_map(|(id, location, client, nested, top, created)| {
            let mut record = PickupRecord::new(id);
            if let Some(address) = location {
                record = record.with_location_address(address);
            }
            if let Some(address) = client {
                record = record.with_client_address(address);
            }
            if let Some(value) = nested {
                record = record.with_scheduled_pickup_time(value);
            }
            record.scheduled_date = top;
            record.created_at = created;
            record
        })
}

/// Strategy for a driver's pickup list
pub fn pickup_list_strategy() -> impl Strategy<Value = Vec<PickupRecord>> {
    prop::collection::vec(pickup_strategy(), 0..40)
}
