//! The per-file descriptor produced by header parsing.

use serde::Serialize;
use std::fmt;

/// Path literal that stands for "no file" on one side of a patch.
pub const DEV_NULL: &str = "/dev/null";

/// Metadata for one file in a patch, assembled from its header.
///
/// Names are stored after prefix stripping. A name is `None` when the side does
/// not exist (the old side of a creation, the new side of a deletion).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct File {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,

    /// Permission and type bits, as written in octal in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_mode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_mode: Option<u32>,

    pub is_new: bool,
    pub is_delete: bool,
    pub is_rename: bool,
    pub is_copy: bool,

    /// Similarity or dissimilarity percentage, always within 0..=100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,

    /// Abbreviated object ids from the `index` line. Not validated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_oid_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_oid_prefix: Option<String>,
}

impl File {
    /// The stored name for `side`.
    pub fn name(&self, side: Side) -> Option<&str> {
        match side {
            Side::Old => self.old_name.as_deref(),
            Side::New => self.new_name.as_deref(),
        }
    }

    /// Whether `side` is known not to exist (the old side of a creation, the
    /// new side of a deletion).
    pub fn is_null(&self, side: Side) -> bool {
        match side {
            Side::Old => self.is_new,
            Side::New => self.is_delete,
        }
    }

    pub(crate) fn name_slot(&mut self, side: Side) -> &mut Option<String> {
        match side {
            Side::Old => &mut self.old_name,
            Side::New => &mut self.new_name,
        }
    }
}

/// One side of a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Old,
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Old => f.write_str("old"),
            Side::New => f.write_str("new"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_flags_map_to_sides() {
        let created = File {
            is_new: true,
            new_name: Some("a.txt".to_string()),
            ..File::default()
        };
        assert!(created.is_null(Side::Old));
        assert!(!created.is_null(Side::New));
        assert_eq!(created.name(Side::New), Some("a.txt"));
        assert_eq!(created.name(Side::Old), None);
    }

    #[test]
    fn serializes_without_unset_fields() {
        let file = File {
            old_name: Some("a.txt".to_string()),
            new_name: Some("a.txt".to_string()),
            score: Some(90),
            ..File::default()
        };
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["old_name"], "a.txt");
        assert_eq!(json["score"], 90);
        assert!(json.get("old_mode").is_none());
        assert_eq!(json["is_rename"], false);
    }
}
