//! Forced single-unit threshold policy
//!
//! Decides whether an entire module collapses into exactly one unity file
//! regardless of the normal byte budget. Forcing a single file when the
//! module is small avoids generating fewer unity files than the platform's
//! minimum parallel PCH creation count, which costs more wall-clock time
//! than the split saves.

use crate::config::AggregationConfig;

/// Decide whether all inputs must collapse into exactly one unity file.
///
/// True when any of the following holds:
/// - the stress-test flag requests a single unit outright;
/// - the byte threshold is zero (degenerate configuration, see
///   [`crate::config`]);
/// - PCH is enabled and the whole module fits under
///   `single_unit_multiplier x bytes_per_unity_file`, i.e. it would land in
///   one or two unity files anyway.
pub fn force_single_unit(total_bytes: u64, config: &AggregationConfig) -> bool {
    if config.stress_test_single_unit {
        return true;
    }
    if config.bytes_per_unity_file == 0 {
        return true;
    }
    // Collapsing small modules only pays off when PCH files are enabled.
    config.pch_enabled
        && total_bytes < config.single_unit_multiplier.saturating_mul(config.bytes_per_unity_file)
}
