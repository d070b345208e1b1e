//! # modcli
//!
//! **Declarative subcommand parsing and dispatch.**
//!
//! A program declares a [`Catalog`](cli::Catalog) of modules (subcommands),
//! each with typed required and optional arguments, plus optional global
//! arguments accepted before the module name. The engine scans `argv`,
//! coerces tokens to typed values, renders aligned usage text from the same
//! declarations and invokes the selected module's handler.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::process::ExitCode;
//!
//! use modcli::cli::entrypoint::{EntryOptions, run};
//! use modcli::cli::{ArgKind, ArgSpec, Catalog, Dispatcher, ModuleDescriptor};
//! use modcli::config::EngineConfig;
//!
//! fn main() -> ExitCode {
//!     let catalog = Catalog::new(
//!         None,
//!         vec![
//!             ModuleDescriptor::new("convert", "Convert a file", |args, _| {
//!                 println!("{:?}", args.path("src"));
//!                 Ok(())
//!             })
//!             .with_required(ArgSpec::short("-n", "Name", ArgKind::String))
//!             .with_required(ArgSpec::positional("src", "Input", ArgKind::ExistingFilePath)),
//!         ],
//!     )
//!     .unwrap();
//!
//!     run(&EntryOptions {
//!         catalog: &catalog,
//!         dispatcher: &Dispatcher::new(),
//!         config: &EngineConfig::from_env("MYTOOL_CONFIG"),
//!     })
//!     .into()
//! }
//! ```
//!
//! ## CLI Usage
//!
//! The bundled `cryptexctl` binary declares the cryptex manager catalog:
//!
//! ```bash
//! cryptexctl --help
//! cryptexctl -u <udid> list
//! cryptexctl buildTrustCache --im4p ./root out.trustcache
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Catalog declarations, parser, dispatcher and entry point.
///
/// # Submodules
///
/// - [`cli::command`] - Argument specs, descriptors, catalog, usage text
/// - [`cli::parser`] - Token scanning and type coercion
/// - [`cli::dispatch`] - Handler invocation and error mapping
/// - [`cli::entrypoint`] - Process-level run loop and exit status
pub mod cli;

/// Engine configuration ([`EngineConfig`](config::EngineConfig)).
pub mod config;

/// Cryptex manager catalog used by the `cryptexctl` binary.
pub mod cryptex;

pub use cli::{Catalog, ParseError, ParsedCommand, parse_command};
pub use config::EngineConfig;
