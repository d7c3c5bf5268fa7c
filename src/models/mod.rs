//! # Pickup Data Model
//!
//! Typed views of the record-store documents fed into the batching engine.

pub mod pickup_record;
pub mod timestamp;

pub use pickup_record::{
    decode_pickups, decode_pickups_value, ClientAddress, ClientInfo, PickupDetails, PickupFields,
    PickupLocation, PickupRecord, SubDocument,
};
pub use timestamp::{RawInstant, StoreTimestamp, TimestampValue};
