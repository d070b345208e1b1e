//! Command-line parser for catalog-driven subcommands.
//!
//! Parses `<program> [<global-args>] <module> [<module-args>]` against a
//! [`Catalog`](super::command::Catalog).
//!
//! # Module Structure
//!
//! - [`core`] - Entry point, [`parse_command`]
//! - [`global`] - Scan of the tokens before the module name
//! - [`module`] - Module argument matching (flags, then positionals)
//! - [`coerce`] - Token to typed value conversion
//! - [`error`] - [`ParseError`]
//! - [`helpers`] - Help flag detection, "did you mean" suggestions
//!
//! # Usage
//!
//! ```ignore
//! use modcli::cli::parser::parse_command;
//!
//! let args: Vec<String> = std::env::args().skip(1).collect();
//! match parse_command(&catalog, &args, &config)? {
//!     ParsedCommand::Invoke(invocation) => dispatcher.dispatch(&invocation),
//!     _ => { /* print usage */ }
//! }
//! ```

mod coerce;
mod core;
mod error;
mod global;
mod helpers;
mod module;

pub use coerce::{CoerceError, coerce};
pub use core::parse_command;
pub use error::ParseError;
pub use helpers::HELP_FLAGS;
