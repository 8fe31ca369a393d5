//! Aggregation orchestrator
//!
//! Runs the whole pipeline for one module: size estimation, the
//! forced-single-unit policy decision, partitioning, PCH header resolution,
//! and per-group emission. One call handles one module; the caller may run
//! several modules concurrently as long as each writes under its own output
//! directory and base name.

use crate::config::AggregationConfig;
use crate::emit::{emit_group, CombinedUnit};
use crate::error::Result;
use crate::partition::partition;
use crate::policy::force_single_unit;
use crate::toolchain::Toolchain;
use crate::unit::{total_bytes, SourceUnit};
use crate::writer::TextFileWriter;

/// Result of aggregating one module
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    /// Generated unity files, in group order.
    pub units: Vec<CombinedUnit>,
    /// The PCH header name resolved for this run, if PCH was enabled.
    ///
    /// Generated unity files include the PCH by this (toolchain-rendered)
    /// name rather than whatever an individual source file recorded, so
    /// callers that track a per-module PCH header should propagate this
    /// value into their compile environment.
    pub pch_header_name: Option<String>,
}

/// Aggregate one module's source files into generated unity files.
///
/// Empty input is a valid zero-output case: nothing is written and an empty
/// `Aggregation` is returned. Any size-lookup or write failure aborts the
/// run with no partial output.
pub fn aggregate(
    units: &[SourceUnit],
    config: &AggregationConfig,
    toolchain: &dyn Toolchain,
    writer: &mut dyn TextFileWriter,
) -> Result<Aggregation> {
    if units.is_empty() {
        return Ok(Aggregation::default());
    }

    let total = total_bytes(units);
    let force = force_single_unit(total, config);
    log::debug!(
        "Aggregating {} files ({} bytes) for module '{}', force_single_unit={}",
        units.len(),
        total,
        config.base_name,
        force
    );

    let groups = partition(
        units,
        config.bytes_per_unity_file,
        force,
        &config.isolation_marker,
    );

    // Resolved once per run; identical across all groups. Without an
    // explicit header path, fall back to the name the first source file
    // recorded.
    let pch_header_name = if config.pch_enabled {
        match config.pch_header_path.as_deref() {
            Some(path) => Some(toolchain.render_include_path(path)),
            None => units.first().and_then(|u| u.header_name.clone()),
        }
    } else {
        None
    };

    let total_groups = groups.len();
    let mut combined = Vec::with_capacity(total_groups);
    for (index, group) in groups.iter().enumerate() {
        let unit = emit_group(
            units,
            group,
            index + 1,
            total_groups,
            pch_header_name.as_deref(),
            config,
            toolchain,
            writer,
        )?;
        log::debug!(
            "Wrote '{}' ({} bytes: {})",
            unit.path.display(),
            unit.relative_cost,
            unit.description
        );
        combined.push(unit);
    }

    log::info!(
        "Module '{}': {} source files -> {} unity files",
        config.base_name,
        units.len(),
        combined.len()
    );

    Ok(Aggregation {
        units: combined,
        pch_header_name,
    })
}
