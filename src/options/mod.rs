//! Parse options for diffmeta.
//!
//! Options can be built in code or loaded from a YAML file. Unknown fields in
//! the YAML are ignored and missing fields fall back to their defaults.

mod operations;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// Largest accepted `strip_components`.
pub const MAX_STRIP_COMPONENTS: usize = 64;

/// Knobs that change how header names are interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Leading path components dropped from names on `diff --git`, `---` and
    /// `+++` lines (the `a/` and `b/` prefixes by default).
    pub strip_components: usize,

    /// Treat a Unix-epoch modification time on a `---`/`+++` line as marking
    /// the missing side of a creation or deletion.
    pub detect_epoch_timestamps: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strip_components: 1,
            detect_epoch_timestamps: true,
        }
    }
}
