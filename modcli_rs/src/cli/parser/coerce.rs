//! Token coercion: raw token + declared kind -> typed value.
//!
//! Path kinds consult the filesystem; `OutputFolderPath` may create the
//! directory. Everything else is pure.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::super::command::{ArgKind, ArgValue};

/// Why a token could not be coerced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoerceError {
    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    #[error("'{}' does not exist", .0.display())]
    Missing(PathBuf),

    #[error("'{}' is a directory", .0.display())]
    IsDirectory(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotDirectory(PathBuf),

    #[error("Failed to create output folder '{}': {reason}", .path.display())]
    CreateFailed { path: PathBuf, reason: String },
}

/// Coerce `token` to `kind`.
///
/// `Flag` never consumes a token; asking for one yields `true`.
pub fn coerce(token: &str, kind: ArgKind) -> Result<ArgValue, CoerceError> {
    tracing::trace!(token, ?kind, "coercing");
    match kind {
        ArgKind::String => Ok(ArgValue::String(token.to_string())),
        ArgKind::Int => parse_int(token).map(ArgValue::Int),
        ArgKind::UInt => parse_uint(token).map(ArgValue::UInt),
        ArgKind::Flag => Ok(ArgValue::Flag(true)),
        ArgKind::ExistingFilePath => existing_file(token).map(ArgValue::ExistingFile),
        ArgKind::OutputFilePath => output_file(token).map(ArgValue::OutputFile),
        ArgKind::ExistingFolderPath => existing_folder(token).map(ArgValue::ExistingFolder),
        ArgKind::OutputFolderPath => output_folder(token).map(ArgValue::OutputFolder),
    }
}

/// Decimal first, then `0x` + hex digits.
fn parse_int(token: &str) -> Result<i64, CoerceError> {
    if let Ok(value) = token.parse::<i64>() {
        return Ok(value);
    }
    if let Some(digits) = token.strip_prefix("0x")
        && !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_hexdigit())
        && let Ok(value) = i64::from_str_radix(digits, 16)
    {
        return Ok(value);
    }
    Err(CoerceError::NotANumber(token.to_string()))
}

/// Decimal only. A single leading `+` is accepted, matching `Int`.
fn parse_uint(token: &str) -> Result<u64, CoerceError> {
    let digits = token.strip_prefix('+').unwrap_or(token);
    if !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && let Ok(value) = digits.parse::<u64>()
    {
        return Ok(value);
    }
    Err(CoerceError::NotANumber(token.to_string()))
}

fn existing_file(token: &str) -> Result<PathBuf, CoerceError> {
    let path = PathBuf::from(token);
    match fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => Err(CoerceError::IsDirectory(path)),
        Ok(_) => Ok(path),
        Err(_) => Err(CoerceError::Missing(path)),
    }
}

fn output_file(token: &str) -> Result<PathBuf, CoerceError> {
    let path = PathBuf::from(token);
    if is_dir(&path) {
        return Err(CoerceError::IsDirectory(path));
    }
    Ok(path)
}

fn existing_folder(token: &str) -> Result<PathBuf, CoerceError> {
    let path = PathBuf::from(token);
    match fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => Ok(path),
        Ok(_) => Err(CoerceError::NotDirectory(path)),
        Err(_) => Err(CoerceError::Missing(path)),
    }
}

/// Existing directory is accepted as is; an absent path is created with a
/// single (non-recursive) `create_dir`.
fn output_folder(token: &str) -> Result<PathBuf, CoerceError> {
    let path = PathBuf::from(token);
    match fs::metadata(&path) {
        Ok(meta) if meta.is_dir() => Ok(path),
        Ok(_) => Err(CoerceError::NotDirectory(path)),
        Err(_) => match fs::create_dir(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "created output folder");
                Ok(path)
            }
            Err(err) => Err(CoerceError::CreateFailed {
                path,
                reason: err.to_string(),
            }),
        },
    }
}

fn is_dir(path: &Path) -> bool {
    fs::metadata(path).map(|meta| meta.is_dir()).unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================
