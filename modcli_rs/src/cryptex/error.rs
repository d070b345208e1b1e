//! Errors raised while turning parsed arguments into device requests.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::DomainError;

#[derive(Debug, Error)]
pub enum CryptexError {
    /// An input file vanished or became unreadable after validation.
    #[error("Failed to read cryptex {what}!")]
    ReadFailed {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read folder '{}'!", .path.display())]
    FolderUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The catalog and the request builders disagree about an argument.
    #[error("Argument '{0}' was not parsed")]
    MissingArgument(&'static str),
}

/// Dispatcher error mapper for [`CryptexError`].
pub fn describe_error(err: &DomainError) -> Option<String> {
    let err = err.downcast_ref::<CryptexError>()?;
    tracing::debug!(error = ?err, "cryptex error");
    Some(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_read_failed_message() {
        let err = CryptexError::ReadFailed {
            what: "dmg",
            path: PathBuf::from("/nope.dmg"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Failed to read cryptex dmg!");
    }

    #[test]
    fn test_describe_error_maps_cryptex_errors() {
        let err: DomainError = CryptexError::MissingArgument("dmg").into();
        assert_eq!(
            describe_error(&err),
            Some("Argument 'dmg' was not parsed".to_string())
        );
    }

    #[test]
    fn test_describe_error_declines_others() {
        assert_eq!(describe_error(&anyhow!("something else")), None);
    }
}
