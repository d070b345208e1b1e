//! Dispatcher: runs the selected module's handler and turns its domain
//! error, if any, into a user-facing message.

use std::fmt;

use super::command::{DomainError, Invocation};

/// Maps a domain error to a message, or declines with `None`.
pub type ErrorMapper = Box<dyn Fn(&DomainError) -> Option<String>>;

/// Result of running a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// Handler returned `Ok(())`.
    Completed,
    /// Handler failed; `message` is ready to print.
    Failed { message: String },
}

impl DispatchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Completed)
    }
}

/// Invokes handlers and reports their failures.
#[derive(Default)]
pub struct Dispatcher {
    mappers: Vec<ErrorMapper>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an error mapper. Mappers are tried in registration order.
    pub fn with_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&DomainError) -> Option<String> + 'static,
    {
        self.mappers.push(Box::new(mapper));
        self
    }

    /// Run the invocation's handler.
    pub fn dispatch(&self, invocation: &Invocation<'_>) -> DispatchResult {
        let module = invocation.module();
        tracing::info!(module = module.name(), "dispatching");

        match module.invoke(invocation.args(), invocation.global()) {
            Ok(()) => DispatchResult::Completed,
            Err(err) => {
                tracing::warn!(module = module.name(), error = %err, "handler failed");
                DispatchResult::Failed {
                    message: self.describe(&err),
                }
            }
        }
    }

    /// First mapper's message, or the generic report with the error chain.
    pub fn describe(&self, err: &DomainError) -> String {
        self.mappers
            .iter()
            .find_map(|mapper| mapper(err))
            .unwrap_or_else(|| format!("An unhandled error occurred:\n{:#}", err))
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("mappers", &self.mappers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::command::{ArgKind, ArgSpec, Catalog, ModuleDescriptor, ParsedCommand};
    use crate::cli::parser::parse_command;
    use crate::config::EngineConfig;
    use anyhow::{Context, anyhow};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct DeviceBusy;

    impl fmt::Display for DeviceBusy {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "device busy")
        }
    }

    impl std::error::Error for DeviceBusy {}

    fn run(catalog: &Catalog, dispatcher: &Dispatcher, raw: &[&str]) -> DispatchResult {
        let args: Vec<String> = raw.iter().map(|token| token.to_string()).collect();
        match parse_command(catalog, &args, &EngineConfig::default()).unwrap() {
            ParsedCommand::Invoke(invocation) => dispatcher.dispatch(&invocation),
            other => panic!("expected invocation, got {:?}", other),
        }
    }

    #[test]
    fn test_handler_receives_values() {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        let catalog = Catalog::new(
            None,
            vec![
                ModuleDescriptor::new("uninstall", "Uninstall", move |args, global| {
                    assert!(global.is_none());
                    *sink.borrow_mut() = args.string("cryptex id").map(str::to_string);
                    Ok(())
                })
                .with_required(ArgSpec::positional("cryptex id", "Id", ArgKind::String)),
            ],
        )
        .unwrap();

        let result = run(&catalog, &Dispatcher::new(), &["uninstall", "com.example.tool"]);
        assert!(result.is_success());
        assert_eq!(seen.borrow().as_deref(), Some("com.example.tool"));
    }

    #[test]
    fn test_unmapped_error_is_generic() {
        let catalog = Catalog::new(
            None,
            vec![ModuleDescriptor::new("list", "List", |_, _| {
                Err(anyhow!("socket closed")).context("listing cryptexes")
            })],
        )
        .unwrap();

        let result = run(&catalog, &Dispatcher::new(), &["list"]);
        assert_eq!(
            result,
            DispatchResult::Failed {
                message: "An unhandled error occurred:\nlisting cryptexes: socket closed".into()
            }
        );
    }

    #[test]
    fn test_first_matching_mapper_wins() {
        let catalog = Catalog::new(
            None,
            vec![ModuleDescriptor::new("list", "List", |_, _| {
                Err(DeviceBusy.into())
            })],
        )
        .unwrap();

        let dispatcher = Dispatcher::new()
            .with_mapper(|_| None)
            .with_mapper(|err| {
                err.downcast_ref::<DeviceBusy>()
                    .map(|_| "The device is busy, try again".to_string())
            })
            .with_mapper(|_| Some("never reached".to_string()));

        let result = run(&catalog, &dispatcher, &["list"]);
        assert_eq!(
            result,
            DispatchResult::Failed {
                message: "The device is busy, try again".into()
            }
        );
    }

    #[test]
    fn test_debug_counts_mappers() {
        let dispatcher = Dispatcher::new().with_mapper(|_| None);
        assert_eq!(format!("{:?}", dispatcher), "Dispatcher { mappers: 1 }");
    }
}
