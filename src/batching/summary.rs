//! Route summary for the driver's list header.

use super::assembly::BatchedPickup;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchBreakdown {
    pub zip_code: String,
    pub color: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total_pickups: usize,
    pub total_batches: usize,
    /// One entry per ZIP code, ascending by ZIP code.
    pub batch_breakdown: Vec<BatchBreakdown>,
}

impl BatchSummary {
    /// Header line such as `Today's Route: 3 Pickups in 2 Areas`. `None` for an empty route.
    pub fn headline(&self) -> Option<String> {
        if self.total_pickups == 0 {
            return None;
        }
        Some(format!(
            "Today's Route: {} {} in {} {}",
            self.total_pickups,
            plural(self.total_pickups, "Pickup", "Pickups"),
            self.total_batches,
            plural(self.total_batches, "Area", "Areas"),
        ))
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// Summarize a batched route.
///
/// Counts come from scanning `batched`, not from `batch_size`, so a filtered
/// slice of a route summarizes what it actually contains. Each ZIP code's
/// colour is taken from its first pickup in the slice.
pub fn get_batch_summary<T>(batched: &[BatchedPickup<T>]) -> BatchSummary {
    let mut per_zip: BTreeMap<&str, (&str, usize)> = BTreeMap::new();
    for pickup in batched {
        per_zip
            .entry(pickup.batch_zip_code.as_str())
            .or_insert((pickup.batch_color.as_str(), 0))
            .1 += 1;
    }

    let batch_breakdown: Vec<BatchBreakdown> = per_zip
        .into_iter()
        .map(|(zip_code, (color, count))| BatchBreakdown {
            zip_code: zip_code.to_string(),
            color: color.to_string(),
            count,
        })
        .collect();

    BatchSummary {
        total_pickups: batched.len(),
        total_batches: batch_breakdown.len(),
        batch_breakdown,
    }
}
