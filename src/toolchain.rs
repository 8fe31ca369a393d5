//! Toolchain collaborator seam
//!
//! The emitter does not know how a platform wants include paths spelled, or
//! whether the platform's dependency scanner needs a raw-path companion
//! file. Both questions go through the [`Toolchain`] trait so tests and
//! alternative platforms can substitute their own answers.

use std::path::Path;

/// Platform-specific knowledge the emitter consults
pub trait Toolchain {
    /// Render a path the way the platform compiler expects it inside an
    /// `#include` directive.
    fn render_include_path(&self, path: &Path) -> String;

    /// Whether a companion file with raw (unrendered) paths must be written
    /// next to each unity file for dependency extraction.
    fn requires_companion_file(&self) -> bool;
}

/// Default toolchain for the host platform
///
/// Renders include paths with forward slashes regardless of the host
/// separator, which every supported compiler accepts.
#[derive(Debug, Clone, Default)]
pub struct HostToolchain {
    /// Whether the build platform wants the raw-path companion file.
    pub companion_file: bool,
}

impl HostToolchain {
    /// Create a host toolchain with the given companion-file requirement.
    pub fn new(companion_file: bool) -> Self {
        Self { companion_file }
    }
}

impl Toolchain for HostToolchain {
    fn render_include_path(&self, path: &Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }

    fn requires_companion_file(&self) -> bool {
        self.companion_file
    }
}
