//! Usage text generation.
//!
//! Text is produced with tab indentation; callers expand tabs with
//! [`expand_tabs`] right before printing.

use super::catalog::Catalog;
use super::descriptor::ModuleDescriptor;
use super::spec::ArgSpec;

impl Catalog {
    /// Full usage listing: globals, then every module block.
    pub fn format_usage(&self, program: &str) -> String {
        let mut usage = String::new();

        match self.global() {
            Some(global) => {
                usage.push_str(&format!(
                    "Usage: {} <global parameters> <action> <parameters>\n",
                    program
                ));
                usage.push_str("Where global parameters can be:\n");
                let args = global.args();
                if !args.required().is_empty() {
                    usage.push_str("\tRequired Parameters:\n");
                    push_parameters(&mut usage, "\t\t", args.required());
                }
                if !args.optional().is_empty() {
                    usage.push_str("\tOptional Parameters:\n");
                    push_parameters(&mut usage, "\t\t", args.optional());
                }
            }
            None => {
                usage.push_str(&format!("Usage: {} <action> <parameters>\n", program));
            }
        }

        usage.push_str("Where action can be one of:\n");

        let has_global = self.global().is_some();
        let blocks: Vec<String> = self
            .modules()
            .iter()
            .map(|module| module.format_usage(program, has_global))
            .collect();
        usage.push_str(&blocks.join("\n"));

        usage
    }
}

impl ModuleDescriptor {
    /// Synthesized invocation, e.g.
    /// `app <global parameters> create -i <value> <dmg>`.
    pub fn format_invocation(&self, program: &str, has_global: bool) -> String {
        let mut line = program.to_string();
        if has_global {
            line.push_str(" <global parameters>");
        }
        line.push(' ');
        line.push_str(self.name());
        if !self.args().optional().is_empty() {
            line.push_str(" <optional parameters>");
        }
        for spec in self.args().required() {
            line.push(' ');
            line.push_str(&spec.invocation_placeholder());
        }
        line
    }

    /// Usage block for this module alone.
    pub fn format_usage(&self, program: &str, has_global: bool) -> String {
        let mut block = String::new();
        block.push_str(&format!("\t{}\n", self.name()));
        block.push_str("\t\tUsage:\n");
        block.push_str(&format!(
            "\t\t\t{}\n",
            self.format_invocation(program, has_global)
        ));
        block.push_str("\t\tDescription:\n");
        block.push_str(&format!(
            "\t\t\t{}\n",
            self.description().replace('\n', "\n\t\t\t")
        ));

        if !self.args().required().is_empty() {
            block.push_str("\t\tRequired Parameters:\n");
            push_parameters(&mut block, "\t\t\t", self.args().required());
        }
        if !self.args().optional().is_empty() {
            block.push_str("\t\tOptional Parameters:\n");
            push_parameters(&mut block, "\t\t\t", self.args().optional());
        }

        block
    }
}

/// One line per spec, labels padded to the longest label in the group.
fn push_parameters(out: &mut String, indent: &str, specs: &[ArgSpec]) {
    let labels: Vec<String> = specs.iter().map(ArgSpec::usage_label).collect();
    let width = labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    for (spec, label) in specs.iter().zip(&labels) {
        out.push_str(&format!(
            "{}{:<width$}\t{}\n",
            indent,
            label,
            spec.description(),
            width = width
        ));
    }
}

/// Replace every tab with `width` spaces.
pub fn expand_tabs(text: &str, width: usize) -> String {
    text.replace('\t', &" ".repeat(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::command::{ArgKind, GlobalDescriptor};

    fn create_module() -> ModuleDescriptor {
        ModuleDescriptor::new("create", "Create a cptx folder\nRequires TSS", |_, _| Ok(()))
            .with_required(ArgSpec::short_long(
                "-i",
                "--identifier",
                "The identifier",
                ArgKind::String,
            ))
            .with_required(ArgSpec::positional("dmg", "Path to dmg", ArgKind::ExistingFilePath))
    }

    fn build_module() -> ModuleDescriptor {
        ModuleDescriptor::new("buildTrustCache", "Create a trust cache", |_, _| Ok(()))
            .with_required(ArgSpec::positional(
                "directory",
                "Input",
                ArgKind::ExistingFolderPath,
            ))
            .with_optional(ArgSpec::short_long("-i", "--im4p", "Wrap in IM4P", ArgKind::Flag))
    }

    #[test]
    fn test_invocation_line() {
        let module = create_module();
        assert_eq!(
            module.format_invocation("app", true),
            "app <global parameters> create -i <value> <dmg>"
        );
        assert_eq!(
            build_module().format_invocation("app", false),
            "app buildTrustCache <optional parameters> <directory>"
        );
    }

    #[test]
    fn test_module_block_layout() {
        let block = create_module().format_usage("app", false);
        let expected = "\tcreate\n\
                        \t\tUsage:\n\
                        \t\t\tapp create -i <value> <dmg>\n\
                        \t\tDescription:\n\
                        \t\t\tCreate a cptx folder\n\
                        \t\t\tRequires TSS\n\
                        \t\tRequired Parameters:\n\
                        \t\t\t-i, --identifier <value>\tThe identifier\n\
                        \t\t\t<dmg>                   \tPath to dmg\n";
        assert_eq!(block, expected);
    }

    #[test]
    fn test_optional_section_without_type_hint_for_flags() {
        let block = build_module().format_usage("app", false);
        assert!(block.contains("\t\tOptional Parameters:\n\t\t\t-i, --im4p\tWrap in IM4P\n"));
        assert!(!block.contains("<>"));
    }

    #[test]
    fn test_catalog_usage_with_globals() {
        let catalog = Catalog::new(
            Some(GlobalDescriptor::new().with_optional(ArgSpec::short_long(
                "-u",
                "--udid",
                "UDID of the device",
                ArgKind::String,
            ))),
            vec![create_module(), build_module()],
        )
        .unwrap();

        let usage = catalog.format_usage("cryptexctl");
        assert!(usage.starts_with(
            "Usage: cryptexctl <global parameters> <action> <parameters>\n\
             Where global parameters can be:\n\
             \tOptional Parameters:\n\
             \t\t-u, --udid <value>\tUDID of the device\n\
             Where action can be one of:\n\
             \tcreate\n"
        ));
        assert!(usage.contains("Requires TSS\n\t\tRequired Parameters:"));
        // Blocks are separated by one blank line.
        assert!(usage.contains("Path to dmg\n\n\tbuildTrustCache\n"));
        assert!(usage.ends_with("Wrap in IM4P\n"));
    }

    #[test]
    fn test_catalog_usage_without_globals() {
        let catalog = Catalog::new(None, vec![build_module()]).unwrap();
        let usage = catalog.format_usage("app");
        assert!(usage.starts_with("Usage: app <action> <parameters>\nWhere action can be one of:\n"));
        assert!(!usage.contains("<global parameters>"));
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("\ta\t\tb", 4), "    a        b");
        assert_eq!(expand_tabs("none", 4), "none");
    }
}
