//! # Unitygen Library
//!
//! This library implements unity-build aggregation: given an ordered list of
//! compilable source files, it partitions them into a smaller number of
//! generated "unity" files, each of which `#include`s a subset of the
//! originals. Compiling the unity files instead of the originals cuts total
//! compiler invocations and redundant header parsing.
//!
//! ## Quick Example
//!
//! ```
//! use unitygen::aggregate::aggregate;
//! use unitygen::config::AggregationConfig;
//! use unitygen::toolchain::HostToolchain;
//! use unitygen::unit::SourceUnit;
//! use unitygen::writer::MemoryWriter;
//!
//! let units = vec![
//!     SourceUnit::with_size("/src/A.cpp", 500),
//!     SourceUnit::with_size("/src/B.cpp", 500),
//!     SourceUnit::with_size("/src/C.cpp", 500),
//! ];
//!
//! let mut config = AggregationConfig::new("Foo");
//! config.bytes_per_unity_file = 1000;
//! config.output_directory = "/out".into();
//!
//! let mut writer = MemoryWriter::new();
//! let result = aggregate(&units, &config, &HostToolchain::default(), &mut writer).unwrap();
//!
//! assert_eq!(result.units.len(), 2);
//! assert_eq!(result.units[0].description, "A.cpp + B.cpp");
//! ```
//!
//! ## Core Concepts
//!
//! - **Source units (`unit`)**: The original compilable files, with byte
//!   sizes read once up front. Files carrying the isolation marker in their
//!   path (mechanically generated wrappers) never share a unity file with
//!   other sources.
//! - **Threshold policy (`policy`)**: Decides when an entire module
//!   collapses into exactly one unity file — explicitly via the stress-test
//!   flag, or because the module is small and PCH is active.
//! - **Partitioner (`partition`)**: A greedy in-order scan packing units
//!   into groups until each crosses the byte threshold.
//! - **Emitter (`emit`)**: Renders each group as a generated `.cpp` of
//!   `#include` directives (PCH header first when active), names it
//!   `Module.<Base>[.k_of_N].cpp`, and records build-graph metadata.
//! - **Collaborator seams (`toolchain`, `writer`)**: Include-path rendering
//!   and file materialization go through traits so platforms and tests can
//!   substitute their own behavior.
//!
//! ## Execution Flow
//!
//! The main entry point is [`aggregate::aggregate`], which runs, per module:
//!
//! 1. Sum input sizes.
//! 2. Decide forced single-unit mode.
//! 3. Partition the inputs into groups.
//! 4. Resolve the PCH header name once.
//! 5. Emit each group as a generated file, in order.
//!
//! The whole run is synchronous and single-threaded; callers may aggregate
//! multiple modules in parallel as long as output paths do not collide.

pub mod aggregate;
pub mod config;
pub mod emit;
pub mod error;
pub mod partition;
pub mod policy;
pub mod toolchain;
pub mod unit;
pub mod writer;

#[cfg(test)]
mod partition_proptest;
