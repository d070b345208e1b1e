//! Module and global descriptors.
//!
//! A module is a named subcommand with its own required/optional arguments
//! and a handler. The global descriptor carries the arguments accepted before
//! the module name and has no handler.

use std::fmt;

use super::parsed::ParsedArgs;
use super::spec::ArgSpec;

/// Error returned by a module handler. Opaque to the engine.
pub type DomainError = anyhow::Error;

/// Handler invoked with the parsed module arguments and, when the catalog
/// declares globals, the parsed global arguments.
pub type Handler =
    Box<dyn Fn(&ParsedArgs<'_>, Option<&ParsedArgs<'_>>) -> Result<(), DomainError>>;

/// Which declaration list an argument belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgGroup {
    Required,
    Optional,
}

/// Ordered required and optional declarations of one scope.
#[derive(Debug, Clone, Default)]
pub struct ArgGroups {
    required: Vec<ArgSpec>,
    optional: Vec<ArgSpec>,
}

impl ArgGroups {
    pub fn required(&self) -> &[ArgSpec] {
        &self.required
    }

    pub fn optional(&self) -> &[ArgSpec] {
        &self.optional
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }

    /// Declaration at `index` within `group`.
    ///
    /// Indices only ever come from this scope's own lookups.
    pub fn spec(&self, group: ArgGroup, index: usize) -> &ArgSpec {
        match group {
            ArgGroup::Required => &self.required[index],
            ArgGroup::Optional => &self.optional[index],
        }
    }

    /// Find the declaration claiming `token` as a flag. Required first.
    pub fn find_flag(&self, token: &str) -> Option<(ArgGroup, usize)> {
        if let Some(index) = self.required.iter().position(|spec| spec.matches_flag(token)) {
            return Some((ArgGroup::Required, index));
        }
        self.optional
            .iter()
            .position(|spec| spec.matches_flag(token))
            .map(|index| (ArgGroup::Optional, index))
    }

    /// All declarations with their group and index, required first.
    pub fn iter(&self) -> impl Iterator<Item = (ArgGroup, usize, &ArgSpec)> {
        let required = self
            .required
            .iter()
            .enumerate()
            .map(|(index, spec)| (ArgGroup::Required, index, spec));
        let optional = self
            .optional
            .iter()
            .enumerate()
            .map(|(index, spec)| (ArgGroup::Optional, index, spec));
        required.chain(optional)
    }

    fn push(&mut self, group: ArgGroup, spec: ArgSpec) {
        match group {
            ArgGroup::Required => self.required.push(spec),
            ArgGroup::Optional => self.optional.push(spec),
        }
    }
}

/// A named subcommand.
pub struct ModuleDescriptor {
    name: String,
    description: String,
    args: ArgGroups,
    handler: Handler,
}

impl ModuleDescriptor {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&ParsedArgs<'_>, Option<&ParsedArgs<'_>>) -> Result<(), DomainError> + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            args: ArgGroups::default(),
            handler: Box::new(handler),
        }
    }

    /// Append a required argument. Declaration order is matching order for
    /// positionals.
    pub fn with_required(mut self, spec: ArgSpec) -> Self {
        self.args.push(ArgGroup::Required, spec);
        self
    }

    pub fn with_optional(mut self, spec: ArgSpec) -> Self {
        self.args.push(ArgGroup::Optional, spec);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn args(&self) -> &ArgGroups {
        &self.args
    }

    pub(crate) fn invoke(
        &self,
        args: &ParsedArgs<'_>,
        global: Option<&ParsedArgs<'_>>,
    ) -> Result<(), DomainError> {
        (self.handler)(args, global)
    }
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Arguments recognized before the module name.
///
/// Required globals must have a short and/or long flag; [`Catalog::new`]
/// rejects positional ones.
///
/// [`Catalog::new`]: super::Catalog::new
#[derive(Debug, Clone, Default)]
pub struct GlobalDescriptor {
    args: ArgGroups,
}

impl GlobalDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_required(mut self, spec: ArgSpec) -> Self {
        self.args.push(ArgGroup::Required, spec);
        self
    }

    pub fn with_optional(mut self, spec: ArgSpec) -> Self {
        self.args.push(ArgGroup::Optional, spec);
        self
    }

    pub fn args(&self) -> &ArgGroups {
        &self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::command::ArgKind;

    fn sample_module() -> ModuleDescriptor {
        ModuleDescriptor::new("sign", "Sign something", |_, _| Ok(()))
            .with_required(ArgSpec::short_long("-i", "--identifier", "Id", ArgKind::String))
            .with_required(ArgSpec::positional("dmg", "Dmg", ArgKind::ExistingFilePath))
            .with_optional(ArgSpec::short_long("-r", "--replace", "Replace", ArgKind::Flag))
    }

    #[test]
    fn test_find_flag_prefers_required() {
        let module = sample_module();
        assert_eq!(module.args().find_flag("-i"), Some((ArgGroup::Required, 0)));
        assert_eq!(module.args().find_flag("--replace"), Some((ArgGroup::Optional, 0)));
        assert_eq!(module.args().find_flag("dmg"), None);
    }

    #[test]
    fn test_iter_order() {
        let module = sample_module();
        let order: Vec<_> = module
            .args()
            .iter()
            .map(|(group, index, spec)| (group, index, spec.display_name().to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                (ArgGroup::Required, 0, "--identifier".to_string()),
                (ArgGroup::Required, 1, "dmg".to_string()),
                (ArgGroup::Optional, 0, "--replace".to_string()),
            ]
        );
    }

    #[test]
    fn test_debug_skips_handler() {
        let rendered = format!("{:?}", sample_module());
        assert!(rendered.contains("sign"));
        assert!(rendered.contains(".."));
    }

    #[test]
    fn test_global_descriptor_builder() {
        let global = GlobalDescriptor::new()
            .with_optional(ArgSpec::short_long("-u", "--udid", "UDID", ArgKind::String));
        assert!(global.args().required().is_empty());
        assert_eq!(global.args().optional().len(), 1);
        assert!(!global.args().is_empty());
    }
}
