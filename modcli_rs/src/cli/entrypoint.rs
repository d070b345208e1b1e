//! Shared CLI entry point.
//!
//! Parses the process arguments, prints usage or errors, dispatches the
//! selected module and decides the exit status. Binaries only build the
//! catalog and call [`run`].

use std::io::{self, Write};
use std::process::ExitCode;

use super::command::{Catalog, ParsedCommand, expand_tabs};
use super::dispatch::{DispatchResult, Dispatcher};
use super::parser::parse_command;
use crate::config::EngineConfig;

/// Everything a binary hands to [`run`].
pub struct EntryOptions<'a> {
    pub catalog: &'a Catalog,
    pub dispatcher: &'a Dispatcher,
    pub config: &'a EngineConfig,
}

/// Process outcome, convertible to [`ExitCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Run against the process arguments, printing to stdout/stderr.
pub fn run(opts: &EntryOptions<'_>) -> RunStatus {
    // args[0] is the executable; the program name comes from the config.
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(opts, &raw_args, &mut stdout.lock(), &mut stderr.lock())
}

/// Run against explicit arguments and writers.
///
/// Usage text goes to `out`, error messages to `err`. Write failures are
/// ignored; there is nowhere left to report them.
pub fn run_with(
    opts: &EntryOptions<'_>,
    args: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> RunStatus {
    let config = opts.config;
    let program = config.program_name.as_str();

    let parsed = match parse_command(opts.catalog, args, config) {
        Ok(parsed) => parsed,
        Err(parse_err) => {
            tracing::debug!(error = %parse_err, "parse failed");
            let _ = writeln!(err, "{}", parse_err);
            if parse_err.shows_usage() {
                print_text(out, &opts.catalog.format_usage(program), config);
            }
            return RunStatus::Failure;
        }
    };

    tracing::debug!(command = parsed.name(), "parsed");

    match parsed {
        ParsedCommand::Help => {
            print_text(out, &opts.catalog.format_usage(program), config);
            RunStatus::Success
        }
        ParsedCommand::ModuleHelp(module) => {
            let has_global = opts.catalog.global().is_some();
            print_text(out, &module.format_usage(program, has_global), config);
            RunStatus::Success
        }
        ParsedCommand::Invoke(invocation) => match opts.dispatcher.dispatch(&invocation) {
            DispatchResult::Completed => RunStatus::Success,
            DispatchResult::Failed { message } => {
                let _ = writeln!(err, "{}", message);
                RunStatus::Failure
            }
        },
    }
}

fn print_text(out: &mut impl Write, text: &str, config: &EngineConfig) {
    let _ = write!(out, "{}", expand_tabs(text, config.tab_width));
    let _ = out.flush();
}
