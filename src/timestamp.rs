//! Epoch timestamp detection for traditional headers.
//!
//! GNU diff marks the missing side of a creation or deletion by writing the
//! Unix epoch as its modification time, e.g.
//! `--- a/file.txt\t1970-01-01 00:00:00.000000000 +0000`.

use chrono::DateTime;
use regex::Regex;
use std::sync::LazyLock;

/// Layout of the timestamp after the tab, with the zone written as `±HHMM`.
const POSIX_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f %z";

static ZONE_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([+-]\d{2}):(\d{2})$").expect("Invalid zone regex"));

/// Returns true if the text after the last tab in `line` is a POSIX timestamp
/// for exactly the Unix epoch.
pub fn has_epoch_timestamp(line: &str) -> bool {
    let Some(start) = line.rfind('\t') else {
        return false;
    };
    let ts = line[start + 1..].trim_end_matches(['\n', '\r']);
    let ts = ZONE_COLON.replace(ts, "$1$2");

    match DateTime::parse_from_str(&ts, POSIX_TIMESTAMP_FORMAT) {
        Ok(time) => time.timestamp() == 0 && time.timestamp_subsec_nanos() == 0,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_epoch() {
        assert!(has_epoch_timestamp(
            "--- a/file.txt\t1970-01-01 00:00:00.000000000 +0000\n"
        ));
        assert!(has_epoch_timestamp("+++ b/file.txt\t1970-01-01 00:00:00 +0000"));
    }

    #[test]
    fn epoch_in_other_zones() {
        assert!(has_epoch_timestamp(
            "--- a/file.txt\t1969-12-31 19:00:00.000000000 -0500\n"
        ));
        assert!(has_epoch_timestamp("--- a/file.txt\t1970-01-01 02:00:00 +02:00\n"));
    }

    #[test]
    fn one_second_off_is_not_epoch() {
        assert!(!has_epoch_timestamp(
            "--- a/file.txt\t1970-01-01 00:00:01.000000000 +0000\n"
        ));
        assert!(!has_epoch_timestamp("--- a/file.txt\t1969-12-31 23:59:59 +0000\n"));
        assert!(!has_epoch_timestamp(
            "--- a/file.txt\t1970-01-01 00:00:00.5 +0000\n"
        ));
    }

    #[test]
    fn ordinary_timestamp() {
        assert!(!has_epoch_timestamp(
            "--- a/file.txt\t2013-09-23 18:41:09.000000000 -0400\n"
        ));
    }

    #[test]
    fn missing_or_malformed_timestamp() {
        assert!(!has_epoch_timestamp("--- a/file.txt\n"));
        assert!(!has_epoch_timestamp("--- a/file.txt\t\n"));
        assert!(!has_epoch_timestamp("--- a/file.txt\t1970-01-01 00:00:00\n"));
        assert!(!has_epoch_timestamp("--- a/file.txt\tyesterday\n"));
    }

    #[test]
    fn uses_text_after_last_tab() {
        assert!(has_epoch_timestamp(
            "--- a/odd\tname\t1970-01-01 00:00:00 +0000\n"
        ));
    }
}
