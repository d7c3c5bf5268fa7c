//! # Pickup Batching Engine
//!
//! Turns a driver's pickups for the day into a route: pickups are grouped into
//! batches by the ZIP code in their address, each batch gets a palette colour,
//! and the whole list is ordered by scheduled time with batch membership
//! attached to every row.
//!
//! Everything here is synchronous and infallible. Pickups with no address fall
//! into the `"unknown"` batch and pickups with no readable time sort first.
//!
//! ```rust
//! use pickup_batching::batching::{batch_pickups, get_batch_summary};
//! use pickup_batching::models::{PickupRecord, TimestampValue};
//!
//! let route = batch_pickups(vec![
//!     PickupRecord::new("a")
//!         .with_location_address("1 Market St, San Jose, CA 95113")
//!         .with_scheduled_date(TimestampValue::from_text("2025-06-02T09:00:00Z")),
//!     PickupRecord::new("b")
//!         .with_location_address("9 Mission St, San Francisco, CA 94103")
//!         .with_scheduled_date(TimestampValue::from_text("2025-06-02T08:00:00Z")),
//! ]);
//!
//! assert_eq!(route[0].record.id, "b");
//! assert_eq!(get_batch_summary(&route).total_batches, 2);
//! ```

pub mod assembly;
pub mod chronology;
pub mod colors;
pub mod formatting;
pub mod grouping;
pub mod summary;
pub mod zip_code;

pub use assembly::{batch_pickups, BatchedPickup};
pub use chronology::{
    effective_timestamp, resolve_timestamp, resolve_timestamp_in, sort_by_time, unreadable_timestamp,
};
pub use colors::assign_batch_colors;
pub use formatting::{format_pickup_time, format_pickup_time_in, format_pickup_time_with_config};
pub use grouping::group_by_zip_code;
pub use summary::{get_batch_summary, BatchBreakdown, BatchSummary};
pub use zip_code::{extract_zip_code, resolve_address, zip_code_for};
