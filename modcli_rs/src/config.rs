//! Engine configuration.
//!
//! Everything else a program needs is its static catalog; this only covers
//! presentation and the built-in help flags. A binary may point an env var at
//! a JSON file to override them:
//!
//! ```json
//! { "tab_width": 2, "help_flags": false }
//! ```

use std::path::Path;

use serde::Deserialize;

/// Name used when argv[0] is missing or unusable.
pub const DEFAULT_PROGRAM_NAME: &str = "app";

/// Spaces per tab when printing usage text.
pub const DEFAULT_TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Program name shown in usage text. Always taken from argv[0], never
    /// from a config file.
    #[serde(skip)]
    pub program_name: String,
    pub tab_width: usize,
    /// Recognize `-h`/`--help` when no declared flag claims them.
    pub help_flags: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program_name: DEFAULT_PROGRAM_NAME.to_string(),
            tab_width: DEFAULT_TAB_WIDTH,
            help_flags: true,
        }
    }
}

impl EngineConfig {
    /// Settings from the JSON file named by `config_var` (defaults when the
    /// variable is unset), with the program name taken from argv[0].
    pub fn from_env(config_var: &str) -> Self {
        let config = match std::env::var_os(config_var) {
            Some(path) => Self::load_from_path(Path::new(&path)),
            None => Self::default(),
        };
        let program_name = std::env::args_os()
            .next()
            .and_then(|arg0| program_name_from(Path::new(&arg0)))
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());
        config.with_program_name(program_name)
    }

    /// Load settings from a JSON file.
    /// Returns the defaults if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no engine config file");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "failed to parse engine config"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to read engine config"
                );
                Self::default()
            }
        }
    }

    pub fn with_program_name(mut self, name: impl Into<String>) -> Self {
        self.program_name = name.into();
        self
    }
}

/// File name of `arg0` without the platform executable suffix.
pub fn program_name_from(arg0: &Path) -> Option<String> {
    let name = arg0.file_name()?.to_str()?;
    let name = name
        .strip_suffix(std::env::consts::EXE_SUFFIX)
        .filter(|stem| !stem.is_empty())
        .unwrap_or(name);
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
