//! Parse results: per-parse argument values and the resulting command.
//!
//! Values are keyed by declaration index, never by description, and borrow
//! the catalog's declarations. A fresh [`ParsedArgs`] is built for every
//! parse, so parsing the same catalog twice can never leak a stale value.

use std::path::Path;

use super::descriptor::{ArgGroup, ArgGroups, ModuleDescriptor};
use super::spec::ArgSpec;
use super::value::ArgValue;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    index: usize,
    value: ArgValue,
}

/// Values matched during one parse pass, in match order.
#[derive(Debug, Clone)]
pub struct ParsedArgs<'c> {
    groups: &'c ArgGroups,
    required: Vec<Entry>,
    optional: Vec<Entry>,
}

impl<'c> ParsedArgs<'c> {
    pub(crate) fn new(groups: &'c ArgGroups) -> Self {
        Self {
            groups,
            required: Vec::new(),
            optional: Vec::new(),
        }
    }

    /// Record a value. A spec matched again moves to the end and keeps only
    /// the latest value.
    pub(crate) fn assign(&mut self, group: ArgGroup, index: usize, value: ArgValue) {
        let entries = self.entries_mut(group);
        entries.retain(|entry| entry.index != index);
        entries.push(Entry { index, value });
    }

    pub(crate) fn contains(&self, group: ArgGroup, index: usize) -> bool {
        self.entries(group).iter().any(|entry| entry.index == index)
    }

    /// Declaration at `index` within `group` of the scope being parsed.
    pub(crate) fn spec(&self, group: ArgGroup, index: usize) -> &'c ArgSpec {
        self.groups.spec(group, index)
    }

    /// Parsed value if present, otherwise the declared default.
    pub(crate) fn resolved(&self, group: ArgGroup, index: usize) -> Option<&ArgValue> {
        self.entries(group)
            .iter()
            .find(|entry| entry.index == index)
            .map(|entry| &entry.value)
            .or_else(|| self.groups.spec(group, index).default_value())
    }

    fn entries(&self, group: ArgGroup) -> &[Entry] {
        match group {
            ArgGroup::Required => &self.required,
            ArgGroup::Optional => &self.optional,
        }
    }

    fn entries_mut(&mut self, group: ArgGroup) -> &mut Vec<Entry> {
        match group {
            ArgGroup::Required => &mut self.required,
            ArgGroup::Optional => &mut self.optional,
        }
    }

    /// Declarations this set was parsed against.
    pub fn groups(&self) -> &'c ArgGroups {
        self.groups
    }

    /// Matched required arguments, in match order.
    pub fn required(&self) -> impl Iterator<Item = (&'c ArgSpec, &ArgValue)> + '_ {
        let groups = self.groups;
        self.required
            .iter()
            .map(move |entry| (&groups.required()[entry.index], &entry.value))
    }

    /// Matched optional arguments, in match order.
    pub fn optional(&self) -> impl Iterator<Item = (&'c ArgSpec, &ArgValue)> + '_ {
        let groups = self.groups;
        self.optional
            .iter()
            .map(move |entry| (&groups.optional()[entry.index], &entry.value))
    }

    pub fn required_len(&self) -> usize {
        self.required.len()
    }

    pub fn optional_len(&self) -> usize {
        self.optional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }

    /// Look up a value by positional name, short flag or long flag.
    ///
    /// Matched values win; otherwise the matching declaration's default is
    /// returned.
    pub fn value(&self, key: &str) -> Option<&ArgValue> {
        let matched = self
            .required()
            .chain(self.optional())
            .find(|(spec, _)| spec.answers_to(key))
            .map(|(_, value)| value);
        matched.or_else(|| {
            self.groups
                .iter()
                .find(|(_, _, spec)| spec.answers_to(key))
                .and_then(|(_, _, spec)| spec.default_value())
        })
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(ArgValue::as_str)
    }

    pub fn int(&self, key: &str) -> Option<i64> {
        self.value(key).and_then(ArgValue::as_int)
    }

    pub fn uint(&self, key: &str) -> Option<u64> {
        self.value(key).and_then(ArgValue::as_uint)
    }

    /// Flag state; absent flags without a default read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.value(key).and_then(ArgValue::as_flag).unwrap_or(false)
    }

    pub fn path(&self, key: &str) -> Option<&Path> {
        self.value(key).and_then(ArgValue::as_path)
    }
}

/// A module selected for dispatch with its fully validated arguments.
#[derive(Debug)]
pub struct Invocation<'c> {
    module: &'c ModuleDescriptor,
    args: ParsedArgs<'c>,
    global: Option<ParsedArgs<'c>>,
}

impl<'c> Invocation<'c> {
    pub(crate) fn new(
        module: &'c ModuleDescriptor,
        args: ParsedArgs<'c>,
        global: Option<ParsedArgs<'c>>,
    ) -> Self {
        Self {
            module,
            args,
            global,
        }
    }

    pub fn module(&self) -> &'c ModuleDescriptor {
        self.module
    }

    pub fn args(&self) -> &ParsedArgs<'c> {
        &self.args
    }

    /// Parsed globals; `None` when the catalog declares no global arguments.
    pub fn global(&self) -> Option<&ParsedArgs<'c>> {
        self.global.as_ref()
    }
}

/// Result of parsing a command line.
#[derive(Debug)]
pub enum ParsedCommand<'c> {
    /// `-h`/`--help` before any module name.
    Help,
    /// `-h`/`--help` after a module name.
    ModuleHelp(&'c ModuleDescriptor),
    /// A module and its arguments, ready to dispatch.
    Invoke(Invocation<'c>),
}

impl ParsedCommand<'_> {
    /// Command name for logs: the module name, or `help`.
    pub fn name(&self) -> &str {
        match self {
            ParsedCommand::Help => "help",
            ParsedCommand::ModuleHelp(module) => module.name(),
            ParsedCommand::Invoke(invocation) => invocation.module().name(),
        }
    }
}
