//! User-facing parse errors.

use thiserror::Error;

use super::super::command::ArgSpec;
use super::coerce::CoerceError;

/// Everything that can go wrong while turning tokens into an invocation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token could not be coerced to its argument's declared kind.
    #[error("Value passed to argument {argument} is not a {expected}! ({source})")]
    InvalidValue {
        argument: String,
        expected: &'static str,
        source: CoerceError,
    },

    /// A module argument matched no flag and no free positional slot.
    #[error("Unknown argument {token}!")]
    UnknownToken { token: String },

    /// A token before the module name matched no global flag and no module.
    #[error("Unknown argument/action '{token}'!{}", did_you_mean(.suggestion))]
    UnknownAction {
        token: String,
        suggestion: Option<String>,
    },

    #[error("Found empty argument!")]
    EmptyArgument,

    /// A value-taking flag was the last token.
    #[error("Missing value to parameter '{argument}'!")]
    MissingValue { argument: String },

    /// A required global argument was not given before the module name.
    #[error("Required argument {argument} not specified!")]
    MissingRequired { argument: String },

    /// The module's required arguments were not all supplied.
    #[error("Not enough arguments!")]
    NotEnoughArguments,

    #[error("Missing action!")]
    MissingAction,
}

impl ParseError {
    pub(super) fn invalid_value(spec: &ArgSpec, source: CoerceError) -> Self {
        ParseError::InvalidValue {
            argument: spec.display_name().to_string(),
            expected: spec.kind().type_hint(),
            source,
        }
    }

    /// Whether the usage listing should follow the message.
    ///
    /// Invalid values print the message alone.
    pub fn shows_usage(&self) -> bool {
        !matches!(self, ParseError::InvalidValue { .. })
    }
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|name| format!(" Did you mean: {}?", name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::command::ArgKind;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_value_message() {
        let spec = ArgSpec::positional("dmg", "Dmg", ArgKind::ExistingFilePath);
        let err = ParseError::invalid_value(&spec, CoerceError::Missing(PathBuf::from("x.dmg")));
        assert_eq!(
            err.to_string(),
            "Value passed to argument dmg is not a file path! ('x.dmg' does not exist)"
        );
        assert!(!err.shows_usage());
    }

    #[test]
    fn test_unknown_action_with_suggestion() {
        let err = ParseError::UnknownAction {
            token: "instal".into(),
            suggestion: Some("install".into()),
        };
        assert_eq!(
            err.to_string(),
            "Unknown argument/action 'instal'! Did you mean: install?"
        );
        assert!(err.shows_usage());
    }

    #[test]
    fn test_unknown_action_without_suggestion() {
        let err = ParseError::UnknownAction {
            token: "zzz".into(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Unknown argument/action 'zzz'!");
    }

    #[test]
    fn test_other_errors_show_usage() {
        assert!(ParseError::MissingAction.shows_usage());
        assert!(ParseError::NotEnoughArguments.shows_usage());
        assert!(ParseError::EmptyArgument.shows_usage());
        assert!(
            ParseError::MissingValue {
                argument: "--udid".into()
            }
            .shows_usage()
        );
    }
}
