//! Unity file emitter
//!
//! Turns one completed group of source units into a generated `.cpp` file on
//! disk plus a [`CombinedUnit`] record for the caller's build graph.
//!
//! The generated text is a durable on-disk contract parsed by other tools:
//! line 1 is a fixed auto-generation notice; if PCH is active the PCH header
//! include comes next, ahead of every member include (Visual C++ expects the
//! first top-level `#include` to be the header that seeded PCH creation);
//! then one include per member in input order, and nothing else.

use crate::config::AggregationConfig;
use crate::error::Result;
use crate::partition::Group;
use crate::toolchain::Toolchain;
use crate::unit::SourceUnit;
use crate::writer::TextFileWriter;
use std::path::PathBuf;

/// Notice line heading every generated unity file.
pub const GENERATED_NOTICE: &str =
    "// This file is automatically generated at compile-time to include some subset of the user-created cpp files.";

/// Suffix appended to the primary path for the raw-path companion file.
pub const COMPANION_SUFFIX: &str = ".ex";

/// One generated unity file and its build-graph metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedUnit {
    /// Path of the generated file.
    pub path: PathBuf,
    /// Paths of the member source files, in input order.
    pub members: Vec<PathBuf>,
    /// Sum of member byte sizes.
    pub relative_cost: u64,
    /// Member file names joined by `" + "`.
    pub description: String,
    /// The PCH header name this unit declares, if PCH is active.
    pub pch_header_name: Option<String>,
    /// Path of the raw-path companion file, if one was written.
    pub companion_path: Option<PathBuf>,
}

/// Compute the output file name for group `index` of `total`.
///
/// A single unity file omits the sequence suffix; otherwise the 1-based
/// `.{k}_of_{N}` progress suffix is appended.
pub fn output_file_name(base_name: &str, index: usize, total: usize) -> String {
    if total > 1 {
        format!("Module.{}.{}_of_{}.cpp", base_name, index, total)
    } else {
        format!("Module.{}.cpp", base_name)
    }
}

/// Emit one group as a generated unity file.
///
/// `index` is 1-based; `pch_header` is the run-wide resolved PCH header name
/// (identical across all groups of one run). Writes the primary file, and
/// the raw-path companion when the toolchain requires one, before returning.
pub fn emit_group(
    units: &[SourceUnit],
    group: &Group,
    index: usize,
    total: usize,
    pch_header: Option<&str>,
    config: &AggregationConfig,
    toolchain: &dyn Toolchain,
    writer: &mut dyn TextFileWriter,
) -> Result<CombinedUnit> {
    let mut body = String::new();
    let mut companion_body = toolchain.requires_companion_file().then(String::new);

    body.push_str(GENERATED_NOTICE);
    body.push('\n');
    if let Some(companion) = companion_body.as_mut() {
        companion.push_str(GENERATED_NOTICE);
        companion.push('\n');
    }

    // The PCH include must be the first top-level include.
    if let Some(header) = pch_header {
        body.push_str(&format!("#include \"{}\"\n", header));
        if let Some(companion) = companion_body.as_mut() {
            companion.push_str(&format!("#include \"{}\"\n", header));
        }
    }

    let mut members = Vec::with_capacity(group.members.len());
    let mut description = String::new();
    for &member in &group.members {
        let unit = &units[member];
        body.push_str(&format!(
            "#include \"{}\"\n",
            toolchain.render_include_path(&unit.path)
        ));
        if let Some(companion) = companion_body.as_mut() {
            companion.push_str(&format!("#include \"{}\"\n", unit.path.display()));
        }
        if !description.is_empty() {
            description.push_str(" + ");
        }
        description.push_str(&unit.file_name());
        members.push(unit.path.clone());
    }

    let path = config
        .output_directory
        .join(output_file_name(&config.base_name, index, total));

    writer.write_text_file(&path, &body)?;

    let companion_path = match companion_body {
        Some(companion) => {
            let mut companion_name = path.clone().into_os_string();
            companion_name.push(COMPANION_SUFFIX);
            let companion_path = PathBuf::from(companion_name);
            writer.write_text_file(&companion_path, &companion)?;
            Some(companion_path)
        }
        None => None,
    };

    Ok(CombinedUnit {
        path,
        members,
        relative_cost: group.total_bytes,
        description,
        pch_header_name: pch_header.map(|h| h.to_string()),
        companion_path,
    })
}
