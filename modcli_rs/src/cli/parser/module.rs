//! Module argument parsing: everything after the module name.
//!
//! Flags are matched before positionals, so a token equal to a declared flag
//! is never taken as a positional value. Required positionals are filled in
//! declaration order. `-h`/`--help` sit between the two: with help flags on
//! they ask for module help even when a positional slot is still free.

use super::super::command::{ArgGroup, ArgValue, ModuleDescriptor, ParsedArgs};
use super::coerce::coerce;
use super::error::ParseError;
use super::helpers::is_help_flag;
use crate::config::EngineConfig;

#[derive(Debug)]
pub(super) enum ModuleScan<'c> {
    Help,
    Args(ParsedArgs<'c>),
}

pub(super) fn parse_module_args<'c>(
    module: &'c ModuleDescriptor,
    args: &[String],
    config: &EngineConfig,
) -> Result<ModuleScan<'c>, ParseError> {
    let groups = module.args();
    let mut parsed = ParsedArgs::new(groups);
    let mut pending: Option<(ArgGroup, usize)> = None;

    for token in args {
        if let Some((group, index)) = pending.take() {
            let spec = parsed.spec(group, index);
            let value = coerce(token, spec.kind())
                .map_err(|source| ParseError::invalid_value(spec, source))?;
            tracing::debug!(
                module = module.name(),
                argument = spec.display_name(),
                %value,
                "value"
            );
            parsed.assign(group, index, value);
            continue;
        }

        if let Some((group, index)) = groups.find_flag(token) {
            let spec = parsed.spec(group, index);
            if spec.kind().takes_value() {
                pending = Some((group, index));
            } else {
                tracing::debug!(
                    module = module.name(),
                    argument = spec.display_name(),
                    "flag"
                );
                parsed.assign(group, index, ArgValue::Flag(true));
            }
            continue;
        }

        if config.help_flags && is_help_flag(token) {
            tracing::debug!(module = module.name(), "module help requested");
            return Ok(ModuleScan::Help);
        }

        let free_slot = groups
            .required()
            .iter()
            .enumerate()
            .find(|(index, spec)| {
                spec.is_positional() && !parsed.contains(ArgGroup::Required, *index)
            });

        match free_slot {
            Some((index, spec)) => {
                let value = coerce(token, spec.kind())
                    .map_err(|source| ParseError::invalid_value(spec, source))?;
                tracing::debug!(
                    module = module.name(),
                    argument = spec.display_name(),
                    %value,
                    "positional"
                );
                parsed.assign(ArgGroup::Required, index, value);
            }
            None => {
                return Err(ParseError::UnknownToken {
                    token: token.clone(),
                });
            }
        }
    }

    if let Some((group, index)) = pending {
        return Err(ParseError::MissingValue {
            argument: parsed.spec(group, index).display_name().to_string(),
        });
    }

    if parsed.required_len() != groups.required().len() {
        tracing::debug!(
            module = module.name(),
            matched = parsed.required_len(),
            declared = groups.required().len(),
            "required arguments missing"
        );
        return Err(ParseError::NotEnoughArguments);
    }

    Ok(ModuleScan::Args(parsed))
}
