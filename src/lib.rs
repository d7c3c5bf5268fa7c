#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Pickup Batching
//!
//! Route support for food-donation pickup drivers.
//!
//! ## Overview
//!
//! Staff assign donor pickups to drivers; each morning a driver's app loads the
//! day's assignments. This crate turns that list into a route the driver can
//! follow: pickups in the same ZIP code form a **batch** drawn in a shared
//! colour, and the list is ordered by scheduled time so batches interleave the
//! way the day actually runs.
//!
//! Fetching records, authentication and rendering all live in the host app.
//! The crate's contract is "hand me pickup records, get back an ordered,
//! annotated list and a summary".
//!
//! ## Module Organization
//!
//! - [`batching`] - ZIP-code grouping, colour assignment, route ordering, summaries
//! - [`models`] - Pickup records and the timestamp shapes the record store produces
//! - [`config`] - Layered configuration for display time zone and logging
//! - [`logging`] - Structured logging setup
//! - [`error`] - Error types for the crate's decoding and setup edges
//! - [`constants`] - Palette, batch keys and other fixed tables
//!
//! ## Quick Start
//!
//! ```rust
//! use pickup_batching::{batch_pickups, decode_pickups, get_batch_summary};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pickups = decode_pickups(r#"[
//!     {"id": "a", "location": {"address": "1 Market St, CA 95113"},
//!      "pickup": {"scheduledDate": {"seconds": 1748854800, "nanoseconds": 0}}},
//!     {"id": "b", "client": {"address": {"formatted": "9 Mission St, CA 94103"}},
//!      "scheduledDate": "2025-06-02T08:00:00Z"}
//! ]"#)?;
//!
//! let route = batch_pickups(pickups);
//! let summary = get_batch_summary(&route);
//! assert_eq!(summary.total_pickups, 2);
//! assert_eq!(summary.headline().as_deref(), Some("Today's Route: 2 Pickups in 2 Areas"));
//! # Ok(())
//! # }
//! ```

pub mod batching;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;

pub use batching::{
    assign_batch_colors, batch_pickups, extract_zip_code, format_pickup_time,
    format_pickup_time_in, get_batch_summary, sort_by_time, BatchBreakdown, BatchSummary,
    BatchedPickup,
};
pub use config::{BatchingConfig, LogFormat};
pub use constants::{BATCH_COLORS, TIME_TBD, UNKNOWN_ZIP_CODE};
pub use error::{BatchingError, Result};
pub use models::{decode_pickups, PickupFields, PickupRecord, TimestampValue};
