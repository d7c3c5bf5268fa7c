//! ZIP-code batch keys.

use crate::constants::{UNKNOWN_ZIP_CODE, ZIP_CODE_PATTERN};
use crate::models::PickupFields;
use regex::Regex;
use std::sync::LazyLock;

static ZIP_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ZIP_CODE_PATTERN).expect("ZIP code pattern is a valid regex"));

/// Extract the batch key from a free-form address.
///
/// Returns the first standalone run of five digits, or `"unknown"` when the
/// address is empty or has none. Purely syntactic: `00000` is a valid key.
pub fn extract_zip_code(address: &str) -> String {
    ZIP_CODE_RE
        .captures(address)
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || UNKNOWN_ZIP_CODE.to_string(),
            |zip| zip.as_str().to_string(),
        )
}

/// The address a pickup is batched by: the pickup location, else the client's
/// formatted address, else empty.
pub fn resolve_address<P: PickupFields + ?Sized>(pickup: &P) -> &str {
    pickup
        .location_address()
        .filter(|address| !address.is_empty())
        .or_else(|| pickup.client_address().filter(|address| !address.is_empty()))
        .unwrap_or("")
}

/// Batch key for a pickup.
pub fn zip_code_for<P: PickupFields + ?Sized>(pickup: &P) -> String {
    extract_zip_code(resolve_address(pickup))
}
