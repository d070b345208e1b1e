//! The cryptex manager command catalog.

use std::io;

use super::requests::DeviceRequest;
use crate::cli::{
    ArgKind, ArgSpec, ArgValue, Catalog, ConfigError, DomainError, GlobalDescriptor,
    ModuleDescriptor, ParsedArgs,
};

const TSS_NOTE: &str = "Requires TSS to be reachable (gs.apple.com)";

/// Global `-u/--udid` plus the six device modules, in help order.
pub fn cryptex_catalog() -> Result<Catalog, ConfigError> {
    let global = GlobalDescriptor::new().with_optional(ArgSpec::short_long(
        "-u",
        "--udid",
        "UDID of the device to connect to",
        ArgKind::String,
    ));

    Catalog::new(
        Some(global),
        vec![
            install_module(),
            create_module(),
            sign_install_module(),
            list_module(),
            uninstall_module(),
            build_trust_cache_module(),
        ],
    )
}

type Builder =
    fn(&ParsedArgs<'_>, Option<&ParsedArgs<'_>>) -> Result<DeviceRequest, super::CryptexError>;

/// Handler that builds a request and prints it on stdout.
fn emitting(
    build: Builder,
) -> impl Fn(&ParsedArgs<'_>, Option<&ParsedArgs<'_>>) -> Result<(), DomainError> {
    move |args, global| {
        let request = build(args, global)?;
        tracing::info!(?request, "request ready");
        request.emit(&mut io::stdout().lock())
    }
}

fn identifier_arg() -> ArgSpec {
    ArgSpec::short_long(
        "-i",
        "--identifier",
        "The identifier of the cryptex",
        ArgKind::String,
    )
}

fn version_arg() -> ArgSpec {
    ArgSpec::short_long(
        "-v",
        "--version",
        "The version of the cryptex",
        ArgKind::String,
    )
}

fn dmg_arg() -> ArgSpec {
    ArgSpec::positional("dmg", "Path to cryptex dmg", ArgKind::ExistingFilePath)
}

fn install_module() -> ModuleDescriptor {
    ModuleDescriptor::new(
        "install",
        "Install a cryptex",
        emitting(DeviceRequest::install),
    )
    .with_required(ArgSpec::positional(
        "cptx path",
        "Path to the cptx folder of the cryptex to be installed",
        ArgKind::ExistingFolderPath,
    ))
}

fn create_module() -> ModuleDescriptor {
    ModuleDescriptor::new(
        "create",
        format!(
            "Create a cryptex cptx folder from a dmg and distribution root. {}",
            TSS_NOTE
        ),
        emitting(DeviceRequest::create),
    )
    .with_required(identifier_arg())
    .with_required(version_arg())
    .with_required(dmg_arg())
    .with_required(ArgSpec::positional(
        "dstroot",
        "Path to cryptex distribution root",
        ArgKind::ExistingFolderPath,
    ))
    .with_required(ArgSpec::positional(
        "cptx path",
        "Path to the output cptx directory",
        ArgKind::OutputFolderPath,
    ))
}

fn sign_install_module() -> ModuleDescriptor {
    ModuleDescriptor::new(
        "signInstall",
        format!("Sign and install a cryptex. {}", TSS_NOTE),
        emitting(DeviceRequest::sign_install),
    )
    .with_required(identifier_arg())
    .with_required(version_arg())
    .with_required(dmg_arg())
    .with_required(ArgSpec::positional(
        "trustcache",
        "Path to cryptex trustcache",
        ArgKind::ExistingFilePath,
    ))
    .with_optional(
        ArgSpec::short_long(
            "-r",
            "--replace",
            "Replace cryptex if it is already installed",
            ArgKind::Flag,
        )
        .with_default(ArgValue::Flag(false)),
    )
}

fn list_module() -> ModuleDescriptor {
    ModuleDescriptor::new(
        "list",
        "List installed cryptexes",
        emitting(DeviceRequest::list),
    )
}

fn uninstall_module() -> ModuleDescriptor {
    ModuleDescriptor::new(
        "uninstall",
        "Uninstall a cryptex",
        emitting(DeviceRequest::uninstall),
    )
    .with_required(ArgSpec::positional(
        "cryptex id",
        "Identifier of the cryptex to be uninstalled",
        ArgKind::String,
    ))
}

fn build_trust_cache_module() -> ModuleDescriptor {
    ModuleDescriptor::new(
        "buildTrustCache",
        "Create a trust cache from a directory",
        emitting(DeviceRequest::build_trust_cache),
    )
    .with_required(ArgSpec::positional(
        "directory",
        "Path to directory used for trust cache generation",
        ArgKind::ExistingFolderPath,
    ))
    .with_required(ArgSpec::positional(
        "trustcache",
        "Output",
        ArgKind::OutputFilePath,
    ))
    .with_optional(ArgSpec::short_long(
        "-i",
        "--im4p",
        "Wrap trust cache in an IM4P container (required for cryptexes)",
        ArgKind::Flag,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::command::expand_tabs;

    #[test]
    fn test_catalog_is_valid() {
        let catalog = cryptex_catalog().expect("catalog validates");
        assert_eq!(
            catalog.module_names().collect::<Vec<_>>(),
            vec![
                "install",
                "create",
                "signInstall",
                "list",
                "uninstall",
                "buildTrustCache"
            ]
        );
        assert!(catalog.global().is_some());
    }

    #[test]
    fn test_create_required_order() {
        let catalog = cryptex_catalog().unwrap();
        let create = catalog.module("create").unwrap();
        let names: Vec<&str> = create
            .args()
            .required()
            .iter()
            .map(ArgSpec::display_name)
            .collect();
        assert_eq!(
            names,
            vec!["--identifier", "--version", "dmg", "dstroot", "cptx path"]
        );
    }

    #[test]
    fn test_usage_mentions_every_module() {
        let catalog = cryptex_catalog().unwrap();
        let usage = expand_tabs(&catalog.format_usage("cryptexctl"), 4);
        assert!(usage.starts_with("Usage: cryptexctl <global parameters> <action> <parameters>\n"));
        assert!(usage.contains("        -u, --udid <value>    UDID of the device to connect to\n"));
        for name in catalog.module_names() {
            assert!(usage.contains(&format!("\n    {}\n", name)));
        }
        assert!(usage.contains(
            "cryptexctl <global parameters> create -i <value> -v <value> <dmg> <dstroot> <cptx path>"
        ));
        assert!(usage.contains(
            "cryptexctl <global parameters> signInstall <optional parameters> -i <value> -v <value> <dmg> <trustcache>"
        ));
    }
}
