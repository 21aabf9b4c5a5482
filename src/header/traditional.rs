//! Traditional unified diff headers: a `---` line and a `+++` line.
//!
//! There is no explicit rename, creation or deletion markup. Creations and
//! deletions are recognized by `/dev/null` or an epoch timestamp on the
//! missing side; anything else is a modification of one file.

use super::{NEW_FILE_PREFIX, OLD_FILE_PREFIX};
use crate::error::{HeaderError, ParseError, Result};
use crate::file::{File, DEV_NULL};
use crate::name::{parse_name, Terminator};
use crate::options::ParseOptions;
use crate::timestamp::has_epoch_timestamp;

/// Build a `File` from the old (`---`) and new (`+++`) header lines.
/// `header_line` is the line number of the `---` line.
pub(super) fn parse_traditional_header(
    old_line: &str,
    new_line: &str,
    header_line: usize,
    options: &ParseOptions,
) -> Result<File> {
    let strip = options.strip_components;
    let old_name = decode_name(old_line, OLD_FILE_PREFIX, strip)
        .map_err(|kind| ParseError::new(header_line, 0, kind))?;
    let new_name = decode_name(new_line, NEW_FILE_PREFIX, strip)
        .map_err(|kind| ParseError::new(header_line, 1, kind))?;

    let is_epoch = |line: &str| options.detect_epoch_timestamps && has_epoch_timestamp(line);

    let mut file = File::default();
    let kind = if old_name == DEV_NULL || is_epoch(old_line) {
        file.is_new = true;
        file.new_name = Some(new_name);
        "create"
    } else if new_name == DEV_NULL || is_epoch(new_line) {
        file.is_delete = true;
        file.old_name = Some(old_name);
        "delete"
    } else {
        // Prefer the old name when the new one only adds a suffix, as with
        // "file.orig" or "file~" left behind by editors and tools.
        let name = if new_name.starts_with(old_name.as_str()) {
            old_name
        } else {
            new_name
        };
        file.old_name = Some(name.clone());
        file.new_name = Some(name);
        "modify"
    };

    tracing::debug!(
        target: "diffmeta.header",
        op = "traditional_header",
        kind,
        old_name = ?file.old_name,
        new_name = ?file.new_name,
        "traditional file header parsed"
    );

    Ok(file)
}

/// Names are tab-terminated so a trailing timestamp is not part of the name.
fn decode_name(
    line: &str,
    prefix: &str,
    strip: usize,
) -> std::result::Result<String, HeaderError> {
    let rest = line.strip_prefix(prefix).unwrap_or(line);
    let (name, _) = parse_name(rest, Terminator::Byte(b'\t'), strip)?;
    Ok(name)
}
