//! Filename token decoding.
//!
//! Patch headers write names either bare (terminated by whitespace, a tab or
//! the end of the line) or C-quoted when they contain unusual characters.
//! Decoded names have leading path components dropped and doubled slashes
//! collapsed, except for the literal `/dev/null`.

mod clean;
mod quoted;

#[cfg(test)]
mod tests;

use crate::error::NameError;
use crate::file::DEV_NULL;

pub use clean::clean_name;

/// Where an unquoted name stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// The first space or tab.
    Whitespace,
    /// The first occurrence of this byte.
    Byte(u8),
    /// Only the end of the line.
    LineEnd,
}

/// Decode one name from the start of `s`.
///
/// Returns the decoded name and the number of bytes of `s` it occupied, so
/// callers can continue parsing the rest of a compound line. Unquoted names
/// always stop at a newline.
pub fn parse_name(
    s: &str,
    term: Terminator,
    drop_prefix: usize,
) -> Result<(String, usize), NameError> {
    let (name, consumed) = if s.starts_with('"') {
        quoted::parse_quoted_name(s)?
    } else {
        let name = parse_unquoted_name(s, term)?;
        (name.to_string(), name.len())
    };

    if name == DEV_NULL {
        return Ok((name, consumed));
    }
    Ok((clean_name(&name, drop_prefix), consumed))
}

fn parse_unquoted_name(s: &str, term: Terminator) -> Result<&str, NameError> {
    let end = s
        .bytes()
        .position(|c| {
            c == b'\n'
                || match term {
                    Terminator::Byte(t) => c == t,
                    Terminator::Whitespace => c == b' ' || c == b'\t',
                    Terminator::LineEnd => false,
                }
        })
        .unwrap_or(s.len());

    if end == 0 {
        return Err(NameError::Missing);
    }
    Ok(&s[..end])
}
