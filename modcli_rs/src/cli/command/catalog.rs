//! The validated command catalog.
//!
//! All structural mistakes in a catalog (positional globals, positional
//! optionals, duplicate names, mistyped defaults) are reported by
//! [`Catalog::new`], before any command line is looked at.

use std::collections::HashSet;

use thiserror::Error;

use super::descriptor::{ArgGroup, ArgGroups, GlobalDescriptor, ModuleDescriptor};
use super::spec::{ArgKind, ArgName};

/// Programmer error in a catalog declaration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("global argument '{name}' must have a short and/or long flag")]
    GlobalPositional { name: String },

    #[error("optional argument '{name}' of {scope} must have a short and/or long flag")]
    OptionalPositional { scope: String, name: String },

    #[error("{scope} declares an argument with an empty name or flag")]
    EmptyIdentity { scope: String },

    #[error("module name cannot be empty")]
    EmptyModuleName,

    #[error("module '{name}' is declared more than once")]
    DuplicateModule { name: String },

    #[error("'{flag}' is declared more than once in {scope}")]
    DuplicateFlag { scope: String, flag: String },

    #[error("default of '{name}' in {scope} is {found:?}, expected {expected:?}")]
    DefaultKindMismatch {
        scope: String,
        name: String,
        expected: ArgKind,
        found: ArgKind,
    },
}

/// Optional global arguments plus the ordered list of modules.
#[derive(Debug)]
pub struct Catalog {
    global: Option<GlobalDescriptor>,
    modules: Vec<ModuleDescriptor>,
}

impl Catalog {
    /// Validate and build a catalog.
    pub fn new(
        global: Option<GlobalDescriptor>,
        modules: Vec<ModuleDescriptor>,
    ) -> Result<Self, ConfigError> {
        if let Some(global) = &global {
            validate_scope("global arguments", global.args(), true)?;
        }

        let mut seen = HashSet::new();
        for module in &modules {
            if module.name().is_empty() {
                return Err(ConfigError::EmptyModuleName);
            }
            if !seen.insert(module.name()) {
                return Err(ConfigError::DuplicateModule {
                    name: module.name().to_string(),
                });
            }
            let scope = format!("module '{}'", module.name());
            validate_scope(&scope, module.args(), false)?;
        }

        tracing::debug!(
            modules = modules.len(),
            globals = global.is_some(),
            "catalog validated"
        );

        Ok(Self { global, modules })
    }

    pub fn global(&self) -> Option<&GlobalDescriptor> {
        self.global.as_ref()
    }

    pub fn modules(&self) -> &[ModuleDescriptor] {
        &self.modules
    }

    /// Module whose name is exactly `name`.
    pub fn module(&self, name: &str) -> Option<&ModuleDescriptor> {
        self.modules.iter().find(|module| module.name() == name)
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(ModuleDescriptor::name)
    }
}

fn validate_scope(scope: &str, args: &ArgGroups, is_global: bool) -> Result<(), ConfigError> {
    let mut flags = HashSet::new();

    for (group, _, spec) in args.iter() {
        match spec.name() {
            ArgName::Positional(name) => {
                if name.is_empty() {
                    return Err(ConfigError::EmptyIdentity {
                        scope: scope.to_string(),
                    });
                }
                if is_global {
                    return Err(ConfigError::GlobalPositional { name: name.clone() });
                }
                if group == ArgGroup::Optional {
                    return Err(ConfigError::OptionalPositional {
                        scope: scope.to_string(),
                        name: name.clone(),
                    });
                }
            }
            ArgName::Flag { short, long } => {
                let declared: Vec<&String> = short.iter().chain(long.iter()).collect();
                if declared.is_empty() || declared.iter().any(|flag| flag.is_empty()) {
                    return Err(ConfigError::EmptyIdentity {
                        scope: scope.to_string(),
                    });
                }
                for flag in declared {
                    if !flags.insert(flag.as_str()) {
                        return Err(ConfigError::DuplicateFlag {
                            scope: scope.to_string(),
                            flag: flag.clone(),
                        });
                    }
                }
            }
        }

        if let Some(default) = spec.default_value()
            && default.kind() != spec.kind()
        {
            return Err(ConfigError::DefaultKindMismatch {
                scope: scope.to_string(),
                name: spec.display_name().to_string(),
                expected: spec.kind(),
                found: default.kind(),
            });
        }
    }

    Ok(())
}
