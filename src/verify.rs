//! Consistency checks for names restated by later header lines.

use crate::error::{HeaderError, NameConflict};
use crate::file::{Side, DEV_NULL};

/// Check a newly parsed name against what earlier lines established for
/// `side`: the stored name (if any) and whether the side is flagged null.
pub fn verify_name(
    parsed: &str,
    existing: Option<&str>,
    is_null: bool,
    side: Side,
) -> Result<(), HeaderError> {
    let conflict = |conflict| HeaderError::InconsistentName { side, conflict };

    if let Some(existing) = existing {
        if is_null {
            return Err(conflict(NameConflict::AlreadySet(existing.to_string())));
        }
        if existing != parsed {
            return Err(conflict(NameConflict::Mismatch));
        }
    }
    if is_null && parsed != DEV_NULL {
        return Err(conflict(NameConflict::ExpectedNull));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conflict_of(result: Result<(), HeaderError>) -> (Side, NameConflict) {
        match result {
            Err(HeaderError::InconsistentName { side, conflict }) => (side, conflict),
            other => panic!("expected InconsistentName, got {:?}", other),
        }
    }

    #[test]
    fn matching_names_pass() {
        assert!(verify_name("a.txt", Some("a.txt"), false, Side::Old).is_ok());
        assert!(verify_name("a.txt", None, false, Side::New).is_ok());
    }

    #[test]
    fn null_side_accepts_dev_null() {
        assert!(verify_name(DEV_NULL, None, true, Side::Old).is_ok());
    }

    #[test]
    fn mismatch_names_the_side() {
        let (side, conflict) = conflict_of(verify_name("b.txt", Some("a.txt"), false, Side::Old));
        assert_eq!(side, Side::Old);
        assert_eq!(conflict, NameConflict::Mismatch);
    }

    #[test]
    fn null_side_rejects_real_name() {
        let (side, conflict) = conflict_of(verify_name("a.txt", None, true, Side::New));
        assert_eq!(side, Side::New);
        assert_eq!(conflict, NameConflict::ExpectedNull);
    }

    #[test]
    fn null_side_with_stored_name() {
        let (_, conflict) = conflict_of(verify_name(DEV_NULL, Some("a.txt"), true, Side::New));
        assert_eq!(conflict, NameConflict::AlreadySet("a.txt".to_string()));
    }
}
