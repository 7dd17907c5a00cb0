/// Ordinal assigned to any label that is not in the table
pub const UNRECOGNIZED_ORDINAL: u8 = 0;

/// Recognized skill level labels and their rank
///
/// Lookups ignore ASCII case. The table is fixed for the lifetime of the
/// process and shared by every match computation.
const LEVEL_ORDINALS: &[(&str, u8)] = &[
    ("beginner", 1),
    ("junior", 1),
    ("intermediate", 2),
    ("mid", 2),
    ("advanced", 3),
    ("senior", 3),
];

/// Translate a free-text level label into a comparable ordinal
///
/// The map is total: unknown, empty or oddly spelled labels all resolve to
/// [`UNRECOGNIZED_ORDINAL`]. A user skill with such a label never meets a
/// recognized requirement.
#[inline]
pub fn level_ordinal(label: &str) -> u8 {
    LEVEL_ORDINALS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
        .map(|(_, ordinal)| *ordinal)
        .unwrap_or(UNRECOGNIZED_ORDINAL)
}

/// Whether a user level satisfies a required minimum level
#[inline]
pub fn meets_requirement(user_level: &str, required_level: &str) -> bool {
    level_ordinal(user_level) >= level_ordinal(required_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(level_ordinal("beginner"), 1);
        assert_eq!(level_ordinal("junior"), 1);
        assert_eq!(level_ordinal("intermediate"), 2);
        assert_eq!(level_ordinal("mid"), 2);
        assert_eq!(level_ordinal("advanced"), 3);
        assert_eq!(level_ordinal("senior"), 3);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(level_ordinal("Senior"), level_ordinal("senior"));
        assert_eq!(level_ordinal("ADVANCED"), 3);
        assert_eq!(level_ordinal("Mid"), 2);
    }

    #[test]
    fn test_unrecognized_labels() {
        assert_eq!(level_ordinal("expert"), UNRECOGNIZED_ORDINAL);
        assert_eq!(level_ordinal(""), UNRECOGNIZED_ORDINAL);
        // Surrounding whitespace is not stripped
        assert_eq!(level_ordinal(" senior"), UNRECOGNIZED_ORDINAL);
    }

    #[test]
    fn test_meets_requirement() {
        assert!(meets_requirement("advanced", "intermediate"));
        assert!(meets_requirement("mid", "intermediate"));
        assert!(!meets_requirement("junior", "senior"));
        assert!(!meets_requirement("expert", "beginner"));
        // Two unrecognized labels compare equal at zero
        assert!(meets_requirement("expert", "guru"));
    }
}
