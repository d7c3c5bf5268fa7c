//! Batch colour assignment.

use crate::constants::BATCH_COLORS;
use std::collections::BTreeMap;

/// Assign a palette colour to every batch key.
///
/// Keys are de-duplicated and sorted, then take palette entries in order,
/// wrapping after the tenth. The result depends only on the set of keys.
pub fn assign_batch_colors<I, K>(keys: I) -> BTreeMap<String, &'static str>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut sorted: Vec<String> = keys.into_iter().map(|k| k.as_ref().to_string()).collect();
    sorted.sort();
    sorted.dedup();

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, key)| (key, BATCH_COLORS[index % BATCH_COLORS.len()]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_follow_sorted_key_order() {
        let colors = assign_batch_colors(["95113", "94103", "unknown"]);
        assert_eq!(colors["94103"], BATCH_COLORS[0]);
        assert_eq!(colors["95113"], BATCH_COLORS[1]);
        assert_eq!(colors["unknown"], BATCH_COLORS[2]);
    }

    #[test]
    fn test_assignment_ignores_input_order_and_duplicates() {
        let first = assign_batch_colors(["95113", "94103", "95113"]);
        let second = assign_batch_colors(vec!["94103".to_string(), "95113".to_string()]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_palette_wraps_after_ten_groups() {
        let keys: Vec<String> = (0..12).map(|i| format!("9{i:04}")).collect();
        let colors = assign_batch_colors(&keys);
        assert_eq!(colors.len(), 12);
        assert_eq!(colors["90010"], BATCH_COLORS[0]);
        assert_eq!(colors["90011"], BATCH_COLORS[1]);
        assert_eq!(colors["90009"], BATCH_COLORS[9]);
    }

    #[test]
    fn test_no_keys_no_colors() {
        assert!(assign_batch_colors(Vec::<String>::new()).is_empty());
    }
}
