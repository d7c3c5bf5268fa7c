//! # Batching Constants
//!
//! Fixed tables shared by the batching engine and its presentation helpers.
//! None of these are configurable: two devices looking at the same route must
//! agree on every colour and every batch key.

/// Display palette for ZIP-code batches, assigned by sorted key position.
pub const BATCH_COLORS: [&str; 10] = [
    "#FF6B6B", // red
    "#4ECDC4", // teal
    "#45B7D1", // blue
    "#FFA07A", // light salmon
    "#98D8C8", // mint
    "#F7DC6F", // yellow
    "#BB8FCE", // purple
    "#85C1E2", // sky blue
    "#F8B739", // orange
    "#52B788", // green
];

/// Batch key for pickups whose address carries no recognisable ZIP code.
pub const UNKNOWN_ZIP_CODE: &str = "unknown";

/// US five-digit ZIP code, bounded by ASCII word boundaries.
pub const ZIP_CODE_PATTERN: &str = r"(?-u:\b)([0-9]{5})(?-u:\b)";

/// Shown instead of a clock time when a pickup has no resolvable timestamp.
pub const TIME_TBD: &str = "Time TBD";

/// Environment variable prefix used by the configuration loader.
pub const ENV_PREFIX: &str = "PICKUP_BATCHING";

/// Default configuration file stem, looked up under `config/`.
pub const DEFAULT_CONFIG_FILE: &str = "config/pickup_batching";
