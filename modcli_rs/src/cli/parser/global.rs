//! Global argument scan: everything before the module name.

use super::super::command::{ArgGroup, ArgValue, Catalog, ModuleDescriptor, ParsedArgs};
use super::coerce::coerce;
use super::error::ParseError;
use super::helpers::{is_help_flag, suggest_similar_module};
use crate::config::EngineConfig;

/// Outcome of scanning the leading tokens.
#[derive(Debug)]
pub(super) enum GlobalScan<'c, 'a> {
    Help,
    Module {
        module: &'c ModuleDescriptor,
        /// Tokens after the module name.
        rest: &'a [String],
        /// `None` when the catalog declares no globals.
        global: Option<ParsedArgs<'c>>,
    },
}

/// Scan tokens until a module name is found.
pub(super) fn scan_globals<'c, 'a>(
    catalog: &'c Catalog,
    args: &'a [String],
    config: &EngineConfig,
) -> Result<GlobalScan<'c, 'a>, ParseError> {
    let mut parsed = catalog.global().map(|global| ParsedArgs::new(global.args()));
    let mut pending: Option<(ArgGroup, usize)> = None;

    for (position, token) in args.iter().enumerate() {
        if let Some((group, index)) = pending.take()
            && let Some(parsed) = parsed.as_mut()
        {
            let spec = parsed.spec(group, index);
            let value = coerce(token, spec.kind())
                .map_err(|source| ParseError::invalid_value(spec, source))?;
            tracing::debug!(argument = spec.display_name(), %value, "global value");
            parsed.assign(group, index, value);
            continue;
        }

        if token.is_empty() {
            return Err(ParseError::EmptyArgument);
        }

        if let Some(parsed) = parsed.as_mut()
            && let Some((group, index)) = parsed.groups().find_flag(token)
        {
            let spec = parsed.spec(group, index);
            if spec.kind().takes_value() {
                pending = Some((group, index));
            } else {
                tracing::debug!(argument = spec.display_name(), "global flag");
                parsed.assign(group, index, ArgValue::Flag(true));
            }
            continue;
        }

        if config.help_flags && is_help_flag(token) {
            tracing::debug!(token = token.as_str(), "global help requested");
            return Ok(GlobalScan::Help);
        }

        if let Some(module) = catalog.module(token) {
            if let Some(parsed) = &parsed {
                check_required(parsed)?;
            }
            tracing::debug!(module = module.name(), "module selected");
            return Ok(GlobalScan::Module {
                module,
                rest: &args[position + 1..],
                global: parsed,
            });
        }

        return Err(ParseError::UnknownAction {
            token: token.clone(),
            suggestion: suggest_similar_module(token, catalog.module_names())
                .map(str::to_string),
        });
    }

    if let (Some((group, index)), Some(parsed)) = (pending, &parsed) {
        return Err(ParseError::MissingValue {
            argument: parsed.spec(group, index).display_name().to_string(),
        });
    }
    Err(ParseError::MissingAction)
}

/// Every required global must have a value by the time the module name is
/// reached. Defaults count.
fn check_required(parsed: &ParsedArgs<'_>) -> Result<(), ParseError> {
    let missing = parsed
        .groups()
        .required()
        .iter()
        .enumerate()
        .find(|(index, _)| parsed.resolved(ArgGroup::Required, *index).is_none());

    match missing {
        Some((_, spec)) => Err(ParseError::MissingRequired {
            argument: spec.display_name().to_string(),
        }),
        None => Ok(()),
    }
}
