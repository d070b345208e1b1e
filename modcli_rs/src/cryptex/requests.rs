//! Device request documents.
//!
//! Each module resolves its parsed arguments into a [`DeviceRequest`] and
//! prints it as JSON. Device communication and signing happen downstream.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use super::error::CryptexError;
use crate::cli::{DomainError, ParsedArgs};

/// An input file as seen when the request was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub path: PathBuf,
    pub size: u64,
}

impl FileInfo {
    fn stat(what: &'static str, path: &Path) -> Result<Self, CryptexError> {
        let meta = fs::metadata(path).map_err(|source| CryptexError::ReadFailed {
            what,
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            size: meta.len(),
        })
    }
}

/// Files a trust cache is built from, relative to `directory`, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustCacheSource {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
    /// Wrap the trust cache in an IM4P container.
    pub im4p: bool,
}

impl TrustCacheSource {
    pub fn scan(directory: &Path, im4p: bool) -> Result<Self, CryptexError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(directory).sort_by_file_name() {
            let entry = entry.map_err(|source| CryptexError::FolderUnreadable {
                path: directory.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(directory)
                .unwrap_or(entry.path())
                .to_path_buf();
            files.push(relative);
        }
        tracing::debug!(
            directory = %directory.display(),
            files = files.len(),
            "scanned trust cache source"
        );
        Ok(Self {
            directory: directory.to_path_buf(),
            files,
            im4p,
        })
    }
}

/// What the device tooling is asked to do.
///
/// `udid` is absent when the first connected device should be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DeviceRequest {
    Install {
        #[serde(skip_serializing_if = "Option::is_none")]
        udid: Option<String>,
        cptx: PathBuf,
    },
    Create {
        #[serde(skip_serializing_if = "Option::is_none")]
        udid: Option<String>,
        identifier: String,
        version: String,
        dmg: FileInfo,
        trust_cache: TrustCacheSource,
        cptx: PathBuf,
    },
    SignInstall {
        #[serde(skip_serializing_if = "Option::is_none")]
        udid: Option<String>,
        identifier: String,
        version: String,
        dmg: FileInfo,
        trust_cache: FileInfo,
        replace: bool,
    },
    List {
        #[serde(skip_serializing_if = "Option::is_none")]
        udid: Option<String>,
    },
    Uninstall {
        #[serde(skip_serializing_if = "Option::is_none")]
        udid: Option<String>,
        identifier: String,
    },
    BuildTrustCache {
        source: TrustCacheSource,
        output: PathBuf,
    },
}

impl DeviceRequest {
    pub fn install(
        args: &ParsedArgs<'_>,
        global: Option<&ParsedArgs<'_>>,
    ) -> Result<Self, CryptexError> {
        Ok(DeviceRequest::Install {
            udid: udid(global),
            cptx: required_path(args, "cptx path")?.to_path_buf(),
        })
    }

    /// The trust cache comes from `dstroot` and is always IM4P-wrapped.
    pub fn create(
        args: &ParsedArgs<'_>,
        global: Option<&ParsedArgs<'_>>,
    ) -> Result<Self, CryptexError> {
        Ok(DeviceRequest::Create {
            udid: udid(global),
            identifier: required_str(args, "--identifier")?.to_string(),
            version: required_str(args, "--version")?.to_string(),
            dmg: FileInfo::stat("dmg", required_path(args, "dmg")?)?,
            trust_cache: TrustCacheSource::scan(required_path(args, "dstroot")?, true)?,
            cptx: required_path(args, "cptx path")?.to_path_buf(),
        })
    }

    pub fn sign_install(
        args: &ParsedArgs<'_>,
        global: Option<&ParsedArgs<'_>>,
    ) -> Result<Self, CryptexError> {
        Ok(DeviceRequest::SignInstall {
            udid: udid(global),
            identifier: required_str(args, "--identifier")?.to_string(),
            version: required_str(args, "--version")?.to_string(),
            dmg: FileInfo::stat("dmg", required_path(args, "dmg")?)?,
            trust_cache: FileInfo::stat("trustcache", required_path(args, "trustcache")?)?,
            replace: args.flag("--replace"),
        })
    }

    pub fn list(
        _args: &ParsedArgs<'_>,
        global: Option<&ParsedArgs<'_>>,
    ) -> Result<Self, CryptexError> {
        Ok(DeviceRequest::List { udid: udid(global) })
    }

    pub fn uninstall(
        args: &ParsedArgs<'_>,
        global: Option<&ParsedArgs<'_>>,
    ) -> Result<Self, CryptexError> {
        Ok(DeviceRequest::Uninstall {
            udid: udid(global),
            identifier: required_str(args, "cryptex id")?.to_string(),
        })
    }

    pub fn build_trust_cache(
        args: &ParsedArgs<'_>,
        _global: Option<&ParsedArgs<'_>>,
    ) -> Result<Self, CryptexError> {
        Ok(DeviceRequest::BuildTrustCache {
            source: TrustCacheSource::scan(
                required_path(args, "directory")?,
                args.flag("--im4p"),
            )?,
            output: required_path(args, "trustcache")?.to_path_buf(),
        })
    }

    /// Write the request as pretty JSON followed by a newline.
    pub fn emit(&self, out: &mut impl Write) -> Result<(), DomainError> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

fn udid(global: Option<&ParsedArgs<'_>>) -> Option<String> {
    global
        .and_then(|global| global.string("--udid"))
        .map(str::to_string)
}

fn required_str<'a>(
    args: &'a ParsedArgs<'_>,
    key: &'static str,
) -> Result<&'a str, CryptexError> {
    args.string(key).ok_or(CryptexError::MissingArgument(key))
}

fn required_path<'a>(
    args: &'a ParsedArgs<'_>,
    key: &'static str,
) -> Result<&'a Path, CryptexError> {
    args.path(key).ok_or(CryptexError::MissingArgument(key))
}
