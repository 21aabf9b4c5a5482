//! Parsers for the scalar fields of git header lines: modes, scores and
//! index lines.

use crate::error::HeaderError;

/// Separator between the two object ids on an `index` line.
const OID_SEPARATOR: &str = "..";

/// Parse an octal mode such as `100644`.
pub fn parse_mode(s: &str) -> Result<u32, HeaderError> {
    u32::from_str_radix(s, 8).map_err(|source| HeaderError::MalformedMode {
        text: s.to_string(),
        source,
    })
}

/// Parse a similarity or dissimilarity score such as `87%`.
///
/// Returns `Ok(None)` for numbers above 100, which are dropped rather than
/// treated as errors.
pub fn parse_score(s: &str) -> Result<Option<u8>, HeaderError> {
    let digits = s.strip_suffix('%').unwrap_or(s);
    // Parsed unsigned: a signed score is rejected as malformed rather than
    // stored, so a stored score is always within 0..=100.
    let score: u32 = digits.parse().map_err(|source| HeaderError::MalformedScore {
        text: s.to_string(),
        source,
    })?;
    Ok(u8::try_from(score).ok().filter(|score| *score <= 100))
}

/// The fields of an `index <old>..<new>[ <mode>]` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLine<'a> {
    pub old_oid_prefix: &'a str,
    pub new_oid_prefix: &'a str,
    pub mode: Option<u32>,
}

/// Parse the remainder of an `index ` line.
///
/// Object ids are returned as written; their length and alphabet depend on
/// the repository's hash algorithm and are not checked here.
pub fn parse_index(s: &str) -> Result<IndexLine<'_>, HeaderError> {
    let (oids, mode) = match s.split_once(' ') {
        Some((oids, mode)) => (oids, Some(mode)),
        None => (s, None),
    };
    let (old_oid_prefix, new_oid_prefix) = oids
        .split_once(OID_SEPARATOR)
        .ok_or_else(|| HeaderError::MalformedIndex(s.to_string()))?;

    Ok(IndexLine {
        old_oid_prefix,
        new_oid_prefix,
        mode: mode.map(parse_mode).transpose()?,
    })
}
