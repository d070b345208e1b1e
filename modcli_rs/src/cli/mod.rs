//! Declarative subcommand interface: `<program> [globals] <module> [args]`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        User Input (argv)                        │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//!                                  ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           Parser                                │
//! │  ┌─────────────────┐    ┌─────────────────────────────────┐     │
//! │  │  Global scan    │───▶│  Module argument matching       │     │
//! │  │  -u X <module>  │    │  flags first, then positionals  │     │
//! │  └─────────────────┘    └────────────────┬────────────────┘     │
//! │                                          ▼                      │
//! │                         ┌───────────────────────────────┐       │
//! │                         │ ParsedCommand                 │       │
//! │                         │ (Help / ModuleHelp / Invoke)  │       │
//! │                         └───────────────┬───────────────┘       │
//! └─────────────────────────────────────────┼───────────────────────┘
//!                                           │
//!                                           ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Dispatcher                             │
//! │  handler(args, globals) -> Result, error mappers -> message     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The [`Catalog`] is declared once and never mutated; each parse builds
//! its own [`ParsedArgs`].
//!
//! # Example
//!
//! ```
//! use modcli::cli::{ArgKind, ArgSpec, Catalog, ModuleDescriptor, ParsedCommand, parse_command};
//! use modcli::config::EngineConfig;
//!
//! let catalog = Catalog::new(
//!     None,
//!     vec![
//!         ModuleDescriptor::new("greet", "Say hello", |args, _| {
//!             println!("hello {}", args.string("-n").unwrap_or("world"));
//!             Ok(())
//!         })
//!         .with_optional(ArgSpec::short_long("-n", "--name", "Who to greet", ArgKind::String)),
//!     ],
//! )
//! .unwrap();
//!
//! let args = vec!["greet".to_string(), "-n".to_string(), "you".to_string()];
//! let parsed = parse_command(&catalog, &args, &EngineConfig::default()).unwrap();
//! assert!(matches!(parsed, ParsedCommand::Invoke(_)));
//! ```

pub mod command;
pub mod dispatch;
pub mod entrypoint;
pub mod parser;

pub use command::{
    ArgGroup, ArgGroups, ArgKind, ArgName, ArgSpec, ArgValue, Catalog, ConfigError, DomainError,
    GlobalDescriptor, Handler, Invocation, ModuleDescriptor, ParsedArgs, ParsedCommand,
};
pub use dispatch::{DispatchResult, Dispatcher, ErrorMapper};
pub use entrypoint::{EntryOptions, RunStatus};
pub use parser::{CoerceError, ParseError, parse_command};
