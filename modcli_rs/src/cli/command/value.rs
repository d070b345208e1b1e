//! Typed argument values.

use std::fmt;
use std::path::{Path, PathBuf};

use super::spec::ArgKind;

/// A coerced argument value. One variant per [`ArgKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    String(String),
    Int(i64),
    UInt(u64),
    Flag(bool),
    ExistingFile(PathBuf),
    OutputFile(PathBuf),
    ExistingFolder(PathBuf),
    OutputFolder(PathBuf),
}

impl ArgValue {
    /// The kind this value satisfies.
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgValue::String(_) => ArgKind::String,
            ArgValue::Int(_) => ArgKind::Int,
            ArgValue::UInt(_) => ArgKind::UInt,
            ArgValue::Flag(_) => ArgKind::Flag,
            ArgValue::ExistingFile(_) => ArgKind::ExistingFilePath,
            ArgValue::OutputFile(_) => ArgKind::OutputFilePath,
            ArgValue::ExistingFolder(_) => ArgKind::ExistingFolderPath,
            ArgValue::OutputFolder(_) => ArgKind::OutputFolderPath,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<u64> {
        match self {
            ArgValue::UInt(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ArgValue::Flag(value) => Some(*value),
            _ => None,
        }
    }

    /// Any of the four path variants.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ArgValue::ExistingFile(path)
            | ArgValue::OutputFile(path)
            | ArgValue::ExistingFolder(path)
            | ArgValue::OutputFolder(path) => Some(path),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::String(value) => f.write_str(value),
            ArgValue::Int(value) => write!(f, "{}", value),
            ArgValue::UInt(value) => write!(f, "{}", value),
            ArgValue::Flag(value) => write!(f, "{}", value),
            ArgValue::ExistingFile(path)
            | ArgValue::OutputFile(path)
            | ArgValue::ExistingFolder(path)
            | ArgValue::OutputFolder(path) => write!(f, "{}", path.display()),
        }
    }
}
