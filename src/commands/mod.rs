//! Command implementations for trellis.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command validates its preconditions before any
//! filesystem mutation and delegates to the generators in `crate::generate`.

mod code_location;
mod component;
mod component_type;
mod deployment;

use crate::cli::{Command, GenerateAction, GenerateCommand};
use crate::error::Result;
use crate::registry::ComponentRegistry;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, registry: &ComponentRegistry) -> Result<()> {
    match command {
        Command::Generate(generate) => dispatch_generate(generate, registry),
    }
}

/// Dispatch `generate` subcommands.
fn dispatch_generate(command: GenerateCommand, registry: &ComponentRegistry) -> Result<()> {
    match command.action {
        GenerateAction::Deployment(args) => deployment::cmd_deployment(args),
        GenerateAction::CodeLocation(args) => code_location::cmd_code_location(args),
        GenerateAction::ComponentType(args) => component_type::cmd_component_type(args, registry),
        GenerateAction::Component(args) => component::cmd_component(args, registry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use crate::test_support::DirGuard;
    use clap::Parser;
    use serial_test::serial;
    use tempfile::TempDir;

    fn parse(argv: &[&str]) -> Command {
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    #[serial]
    fn dispatch_routes_generate_deployment() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());
        let registry = ComponentRegistry::with_builtins();

        let command = parse(&["trellis", "generate", "deployment", "my-deployment"]);
        dispatch(command, &registry).unwrap();

        assert!(temp_dir.path().join("my-deployment").is_dir());
    }

    #[test]
    #[serial]
    fn dispatch_surfaces_precondition_failures() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path());
        let registry = ComponentRegistry::with_builtins();

        // Not inside a deployment project.
        let command = parse(&["trellis", "generate", "code-location", "analytics"]);
        let result = dispatch(command, &registry);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().exit_code(), crate::exit_codes::USER_ERROR);
    }
}
