//! Argument declarations: identity, declared kind and optional default.
//!
//! An [`ArgSpec`] never stores a parsed value. Values recorded during a parse
//! live in [`ParsedArgs`](super::ParsedArgs), keyed by declaration index.

use super::value::ArgValue;

/// The declared type of an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Any token, taken verbatim.
    String,
    /// Signed decimal, or `0x`-prefixed hexadecimal.
    Int,
    /// Non-negative decimal.
    UInt,
    /// Presence switch. Consumes no value token.
    Flag,
    /// Path that must exist and must not be a directory.
    ExistingFilePath,
    /// Path that may not exist yet but must not be a directory.
    OutputFilePath,
    /// Path that must exist and be a directory.
    ExistingFolderPath,
    /// Directory path, created (non-recursively) when absent.
    OutputFolderPath,
}

impl ArgKind {
    /// Placeholder shown in usage text, e.g. `file path` in `<file path>`.
    ///
    /// Flags have no placeholder.
    pub fn type_hint(self) -> &'static str {
        match self {
            ArgKind::String => "value",
            ArgKind::Int | ArgKind::UInt => "number",
            ArgKind::Flag => "",
            ArgKind::ExistingFilePath => "file path",
            ArgKind::OutputFilePath => "output file path",
            ArgKind::ExistingFolderPath => "folder path",
            ArgKind::OutputFolderPath => "output folder path",
        }
    }

    /// Whether a flag of this kind expects the following token as its value.
    pub fn takes_value(self) -> bool {
        !matches!(self, ArgKind::Flag)
    }
}

/// How an argument is addressed on the command line.
///
/// A positional name and flag forms are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgName {
    /// Bare positional argument, identified by its slot.
    Positional(String),
    /// `-x`, `--long`, or both.
    Flag {
        short: Option<String>,
        long: Option<String>,
    },
}

/// Declaration of a single command-line argument.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    name: ArgName,
    kind: ArgKind,
    description: String,
    default: Option<ArgValue>,
}

impl ArgSpec {
    fn with_name(
        name: ArgName,
        description: impl Into<String>,
        kind: ArgKind,
    ) -> Self {
        Self {
            name,
            kind,
            description: description.into(),
            default: None,
        }
    }

    /// A positional argument, e.g. `<dmg>`.
    pub fn positional(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ArgKind,
    ) -> Self {
        Self::with_name(ArgName::Positional(name.into()), description, kind)
    }

    /// An argument with only a short flag, e.g. `-r`.
    pub fn short(short: impl Into<String>, description: impl Into<String>, kind: ArgKind) -> Self {
        Self::with_name(
            ArgName::Flag {
                short: Some(short.into()),
                long: None,
            },
            description,
            kind,
        )
    }

    /// An argument with only a long flag, e.g. `--replace`.
    pub fn long(long: impl Into<String>, description: impl Into<String>, kind: ArgKind) -> Self {
        Self::with_name(
            ArgName::Flag {
                short: None,
                long: Some(long.into()),
            },
            description,
            kind,
        )
    }

    /// An argument reachable through both a short and a long flag.
    pub fn short_long(
        short: impl Into<String>,
        long: impl Into<String>,
        description: impl Into<String>,
        kind: ArgKind,
    ) -> Self {
        Self::with_name(
            ArgName::Flag {
                short: Some(short.into()),
                long: Some(long.into()),
            },
            description,
            kind,
        )
    }

    /// Attach a default, used when the argument is not supplied.
    ///
    /// The default's kind is checked against the declared kind when the
    /// catalog is built.
    pub fn with_default(mut self, value: ArgValue) -> Self {
        self.default = Some(value);
        self
    }

    pub fn name(&self) -> &ArgName {
        &self.name
    }

    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn default_value(&self) -> Option<&ArgValue> {
        self.default.as_ref()
    }

    pub fn positional_name(&self) -> Option<&str> {
        match &self.name {
            ArgName::Positional(name) => Some(name),
            ArgName::Flag { .. } => None,
        }
    }

    pub fn short_flag(&self) -> Option<&str> {
        match &self.name {
            ArgName::Flag { short, .. } => short.as_deref(),
            ArgName::Positional(_) => None,
        }
    }

    pub fn long_flag(&self) -> Option<&str> {
        match &self.name {
            ArgName::Flag { long, .. } => long.as_deref(),
            ArgName::Positional(_) => None,
        }
    }

    pub fn is_positional(&self) -> bool {
        matches!(self.name, ArgName::Positional(_))
    }

    /// True when `token` is this argument's short or long flag.
    pub fn matches_flag(&self, token: &str) -> bool {
        self.short_flag() == Some(token) || self.long_flag() == Some(token)
    }

    /// True when `key` names this argument in any of its forms.
    pub fn answers_to(&self, key: &str) -> bool {
        self.positional_name() == Some(key) || self.matches_flag(key)
    }

    /// Name used in diagnostics: long flag, then short flag, then positional name.
    pub fn display_name(&self) -> &str {
        match &self.name {
            ArgName::Positional(name) => name,
            ArgName::Flag { short, long } => long
                .as_deref()
                .or(short.as_deref())
                .unwrap_or_default(),
        }
    }

    /// Label used in parameter listings: `-i, --identifier <value>` or `<dmg>`.
    pub fn usage_label(&self) -> String {
        match &self.name {
            ArgName::Positional(name) => format!("<{}>", name),
            ArgName::Flag { short, long } => {
                let mut label = match (short, long) {
                    (Some(short), Some(long)) => format!("{}, {}", short, long),
                    (Some(flag), None) | (None, Some(flag)) => flag.clone(),
                    (None, None) => String::new(),
                };
                let hint = self.kind.type_hint();
                if !hint.is_empty() {
                    label.push_str(&format!(" <{}>", hint));
                }
                label
            }
        }
    }

    /// Placeholder used in a module's synthesized invocation line.
    ///
    /// Flag-form arguments render their short flag (long if there is no short
    /// one) followed by the type hint; positionals render `<name>`.
    pub fn invocation_placeholder(&self) -> String {
        match &self.name {
            ArgName::Positional(name) => format!("<{}>", name),
            ArgName::Flag { short, long } => {
                let flag = short.as_deref().or(long.as_deref()).unwrap_or_default();
                let hint = self.kind.type_hint();
                if hint.is_empty() {
                    flag.to_string()
                } else {
                    format!("{} <{}>", flag, hint)
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
