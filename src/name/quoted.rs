//! C-style quoted names, as written by git for paths with special characters.

use crate::error::NameError;

/// Decode a name that starts with `"`. Returns the name and the number of
/// bytes up to and including the closing quote.
pub(super) fn parse_quoted_name(s: &str) -> Result<(String, usize), NameError> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut index = 1;

    loop {
        let c = match bytes.get(index) {
            None | Some(b'\n') => return Err(NameError::Unterminated),
            Some(&c) => c,
        };
        match c {
            b'"' => break,
            b'\\' => {
                let (value, len) = unescape(&bytes[index..])?;
                out.push(value);
                index += len;
            }
            other => {
                out.push(other);
                index += 1;
            }
        }
    }

    if out.is_empty() {
        return Err(NameError::Missing);
    }
    let name = String::from_utf8(out).map_err(|_| NameError::InvalidUtf8)?;
    Ok((name, index + 1))
}

/// Decode the escape sequence at the start of `seq` (which begins with the
/// backslash). Returns the byte value and the sequence length.
fn unescape(seq: &[u8]) -> Result<(u8, usize), NameError> {
    let simple = match seq.get(1) {
        Some(b'a') => Some(b'\x07'),
        Some(b'b') => Some(b'\x08'),
        Some(b'f') => Some(b'\x0c'),
        Some(b'n') => Some(b'\n'),
        Some(b'r') => Some(b'\r'),
        Some(b't') => Some(b'\t'),
        Some(b'v') => Some(b'\x0b'),
        Some(b'\\') => Some(b'\\'),
        Some(b'"') => Some(b'"'),
        Some(b'\'') => Some(b'\''),
        _ => None,
    };
    if let Some(value) = simple {
        return Ok((value, 2));
    }

    if seq.get(1) == Some(&b'x') {
        let value = seq
            .get(2..4)
            .filter(|d| d.iter().all(u8::is_ascii_hexdigit))
            .and_then(|d| std::str::from_utf8(d).ok())
            .and_then(|d| u8::from_str_radix(d, 16).ok());
        return value.map(|v| (v, 4)).ok_or_else(|| bad_escape(seq, 4));
    }

    match seq.get(1..4) {
        Some(&[a, b, c])
            if (b'0'..=b'3').contains(&a)
                && (b'0'..=b'7').contains(&b)
                && (b'0'..=b'7').contains(&c) =>
        {
            Ok((((a - b'0') << 6) | ((b - b'0') << 3) | (c - b'0'), 4))
        }
        _ => Err(bad_escape(seq, 2)),
    }
}

fn bad_escape(seq: &[u8], len: usize) -> NameError {
    let end = len.min(seq.len());
    NameError::BadEscape(String::from_utf8_lossy(&seq[..end]).into_owned())
}
