//! Main parser entry point.

use super::super::command::{Catalog, Invocation, ParsedCommand};
use super::error::ParseError;
use super::global::{GlobalScan, scan_globals};
use super::module::{ModuleScan, parse_module_args};
use crate::config::EngineConfig;

/// Parse the tokens following the program name against `catalog`.
///
/// Every call builds fresh per-parse state; the catalog is never mutated.
pub fn parse_command<'c>(
    catalog: &'c Catalog,
    args: &[String],
    config: &EngineConfig,
) -> Result<ParsedCommand<'c>, ParseError> {
    tracing::debug!(tokens = args.len(), "parsing command line");

    let (module, rest, global) = match scan_globals(catalog, args, config)? {
        GlobalScan::Help => return Ok(ParsedCommand::Help),
        GlobalScan::Module {
            module,
            rest,
            global,
        } => (module, rest, global),
    };

    match parse_module_args(module, rest, config)? {
        ModuleScan::Help => Ok(ParsedCommand::ModuleHelp(module)),
        ModuleScan::Args(parsed) => Ok(ParsedCommand::Invoke(Invocation::new(
            module, parsed, global,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::command::{ArgKind, ArgSpec, GlobalDescriptor, ModuleDescriptor};
    use tempfile::TempDir;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|token| token.to_string()).collect()
    }

    fn catalog() -> Catalog {
        Catalog::new(
            Some(GlobalDescriptor::new().with_optional(ArgSpec::short_long(
                "-u",
                "--udid",
                "UDID",
                ArgKind::String,
            ))),
            vec![
                ModuleDescriptor::new("list", "List", |_, _| Ok(())),
                ModuleDescriptor::new("install", "Install", |_, _| Ok(())).with_required(
                    ArgSpec::positional("cptx path", "cptx", ArgKind::ExistingFolderPath),
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_invoke_with_globals() {
        let catalog = catalog();
        let args = tokens(&["-u", "00008030", "list"]);
        let parsed = parse_command(&catalog, &args, &EngineConfig::default()).unwrap();
        assert_eq!(parsed.name(), "list");

        let ParsedCommand::Invoke(invocation) = parsed else {
            panic!("expected invocation");
        };
        assert!(invocation.args().is_empty());
        assert_eq!(
            invocation.global().and_then(|global| global.string("-u")),
            Some("00008030")
        );
    }

    #[test]
    fn test_invoke_with_positional() {
        let temp = TempDir::new().expect("temp dir");
        let catalog = catalog();
        let args = vec![
            "install".to_string(),
            temp.path().to_string_lossy().into_owned(),
        ];
        let ParsedCommand::Invoke(invocation) =
            parse_command(&catalog, &args, &EngineConfig::default()).unwrap()
        else {
            panic!("expected invocation");
        };
        assert_eq!(invocation.args().path("cptx path"), Some(temp.path()));
        assert!(invocation.global().is_some());
    }

    #[test]
    fn test_help_outcomes() {
        let catalog = catalog();
        let config = EngineConfig::default();

        let parsed = parse_command(&catalog, &tokens(&["-h"]), &config).unwrap();
        assert!(matches!(parsed, ParsedCommand::Help));

        let parsed = parse_command(&catalog, &tokens(&["install", "--help"]), &config).unwrap();
        assert!(matches!(parsed, ParsedCommand::ModuleHelp(module) if module.name() == "install"));
    }

    #[test]
    fn test_missing_positional() {
        let catalog = catalog();
        let err = parse_command(&catalog, &tokens(&["install"]), &EngineConfig::default())
            .unwrap_err();
        assert_eq!(err, ParseError::NotEnoughArguments);
        assert!(err.shows_usage());
    }

    #[test]
    fn test_parsing_twice_does_not_leak_state() {
        let catalog = catalog();
        let config = EngineConfig::default();

        let first = parse_command(&catalog, &tokens(&["-u", "A", "list"]), &config).unwrap();
        let second = parse_command(&catalog, &tokens(&["list"]), &config).unwrap();

        let (ParsedCommand::Invoke(first), ParsedCommand::Invoke(second)) = (first, second)
        else {
            panic!("expected invocations");
        };
        assert_eq!(first.global().and_then(|g| g.string("--udid")), Some("A"));
        assert_eq!(second.global().and_then(|g| g.string("--udid")), None);
    }
}
