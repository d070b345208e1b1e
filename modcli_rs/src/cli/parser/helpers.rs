//! Parser utilities: help flag detection and module name suggestions.

use strsim::levenshtein;

/// Tokens that request usage text when no declared flag claims them.
pub const HELP_FLAGS: &[&str] = &["-h", "--help"];

pub(super) fn is_help_flag(token: &str) -> bool {
    HELP_FLAGS.contains(&token)
}

/// Find the closest module name to a mistyped action.
pub(super) fn suggest_similar_module<'a>(
    input: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let input_lower = input.to_lowercase();
    let mut best_match: Option<(&str, usize)> = None;

    for name in names {
        let distance = levenshtein(&input_lower, &name.to_lowercase());
        // Max 2 edits, anything further is noise
        if distance > 2 {
            continue;
        }
        match best_match {
            Some((_, best)) if best <= distance => {}
            _ => best_match = Some((name, distance)),
        }
    }

    best_match.map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &[
        "install",
        "create",
        "signInstall",
        "list",
        "uninstall",
        "buildTrustCache",
    ];

    #[test]
    fn test_help_flags() {
        assert!(is_help_flag("-h"));
        assert!(is_help_flag("--help"));
        assert!(!is_help_flag("help"));
        assert!(!is_help_flag("-help"));
    }

    #[test]
    fn test_suggest_typo() {
        assert_eq!(suggest_similar_module("instal", NAMES.iter().copied()), Some("install"));
        assert_eq!(suggest_similar_module("lst", NAMES.iter().copied()), Some("list"));
    }

    #[test]
    fn test_suggest_case_insensitive() {
        assert_eq!(
            suggest_similar_module("buildtrustcache", NAMES.iter().copied()),
            Some("buildTrustCache")
        );
    }

    #[test]
    fn test_suggest_nothing_close() {
        assert_eq!(suggest_similar_module("frobnicate", NAMES.iter().copied()), None);
    }

    #[test]
    fn test_first_declared_wins_ties() {
        assert_eq!(suggest_similar_module("ab", ["aa", "bb"]), Some("aa"));
    }
}
