//! Batch assembly: grouping, colouring and route ordering in one pass.

use super::chronology::{sort_by_time, unreadable_timestamp};
use super::colors::assign_batch_colors;
use super::grouping::group_by_zip_code;
use crate::constants::BATCH_COLORS;
use crate::models::{PickupFields, PickupRecord, TimestampValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A pickup annotated with the batch it belongs to.
///
/// Serializes as the original record with `batchColor`, `batchZipCode`,
/// `batchSize` and `batchIndex` added alongside its own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchedPickup<T = PickupRecord> {
    #[serde(flatten)]
    pub record: T,
    pub batch_color: String,
    pub batch_zip_code: String,
    /// Members in this batch at batching time.
    pub batch_size: usize,
    /// 1-based position within the batch, in time order.
    pub batch_index: usize,
}

impl<T> BatchedPickup<T> {
    /// Short batch badge, e.g. `ZIP 95113 (2/3)`; single-pickup batches omit the count.
    pub fn indicator_label(&self) -> String {
        if self.batch_size > 1 {
            format!(
                "ZIP {} ({}/{})",
                self.batch_zip_code, self.batch_index, self.batch_size
            )
        } else {
            format!("ZIP {}", self.batch_zip_code)
        }
    }

    pub fn into_record(self) -> T {
        self.record
    }
}

impl<T: PickupFields> PickupFields for BatchedPickup<T> {
    fn pickup_id(&self) -> &str {
        self.record.pickup_id()
    }

    fn location_address(&self) -> Option<&str> {
        self.record.location_address()
    }

    fn client_address(&self) -> Option<&str> {
        self.record.client_address()
    }

    fn scheduled_pickup_time(&self) -> Option<&TimestampValue> {
        self.record.scheduled_pickup_time()
    }

    fn scheduled_date(&self) -> Option<&TimestampValue> {
        self.record.scheduled_date()
    }

    fn created_at(&self) -> Option<&TimestampValue> {
        self.record.created_at()
    }
}

/// Group a driver's pickups by ZIP code and lay them out in route order.
///
/// Every pickup comes back exactly once. Within a batch, `batch_index` follows
/// time order; across batches the list is interleaved chronologically, so
/// members of one batch need not be adjacent.
pub fn batch_pickups<T: PickupFields>(pickups: Vec<T>) -> Vec<BatchedPickup<T>> {
    if pickups.is_empty() {
        return Vec::new();
    }

    let total = pickups.len();
    for pickup in &pickups {
        if let Some(value) = unreadable_timestamp(pickup) {
            warn!(
                pickup_id = %pickup.pickup_id(),
                value = ?value,
                "Unreadable pickup timestamp; treating as unscheduled"
            );
        }
    }

    let groups = group_by_zip_code(pickups);
    let colors = assign_batch_colors(groups.keys());

    let mut batched = Vec::with_capacity(total);
    for (zip_code, members) in groups {
        let color = colors
            .get(&zip_code)
            .copied()
            .unwrap_or(BATCH_COLORS[0]);
        let members = sort_by_time(members);
        let batch_size = members.len();

        batched.extend(
            members
                .into_iter()
                .enumerate()
                .map(|(position, record)| BatchedPickup {
                    record,
                    batch_color: color.to_string(),
                    batch_zip_code: zip_code.clone(),
                    batch_size,
                    batch_index: position + 1,
                }),
        );
    }

    debug!(
        total_pickups = total,
        total_batches = colors.len(),
        "Batched pickups by ZIP code"
    );

    sort_by_time(batched)
}
