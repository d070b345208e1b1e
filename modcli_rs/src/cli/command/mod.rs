//! Declarative command catalog and parse result types.
//!
//! - `spec`: argument declarations ([`ArgSpec`], [`ArgKind`], [`ArgName`])
//! - `value`: typed values ([`ArgValue`])
//! - `descriptor`: modules, globals and handlers
//! - `catalog`: validated [`Catalog`] and [`ConfigError`]
//! - `parsed`: per-parse results ([`ParsedArgs`], [`ParsedCommand`])
//! - `help`: usage text generation (impl on `Catalog` / `ModuleDescriptor`)

mod catalog;
mod descriptor;
mod help;
mod parsed;
mod spec;
mod value;

pub use catalog::{Catalog, ConfigError};
pub use descriptor::{
    ArgGroup, ArgGroups, DomainError, GlobalDescriptor, Handler, ModuleDescriptor,
};
pub use help::expand_tabs;
pub use parsed::{Invocation, ParsedArgs, ParsedCommand};
pub use spec::{ArgKind, ArgName, ArgSpec};
pub use value::ArgValue;
