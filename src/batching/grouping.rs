//! Stable partition of pickups into ZIP-code batches.

use super::zip_code::zip_code_for;
use crate::models::PickupFields;
use std::collections::BTreeMap;

/// Partition `pickups` by ZIP-code key.
///
/// Each group keeps its members in input order. Pickups without a usable
/// address all share the `"unknown"` group.
pub fn group_by_zip_code<T: PickupFields>(pickups: Vec<T>) -> BTreeMap<String, Vec<T>> {
    let mut groups: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for pickup in pickups {
        groups.entry(zip_code_for(&pickup)).or_default().push(pickup);
    }
    groups
}
