//! CLI argument parsing for trellis.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Trellis: scaffolding CLI for trellis orchestration projects.
///
/// Projects are plain directory trees instantiated from shipped templates:
/// - A deployment root holds code locations under `code_locations/`
/// - A code location holds component types and component instances
/// - A component instance is a directory plus a `component.yaml` descriptor
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for trellis.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate projects and project entities.
    ///
    /// All generators refuse to overwrite an existing destination and
    /// abort before touching the filesystem.
    Generate(GenerateCommand),
}

/// The `generate` command group.
#[derive(Parser, Debug)]
pub struct GenerateCommand {
    #[command(subcommand)]
    pub action: GenerateAction,
}

/// Entity kinds that can be generated.
#[derive(Subcommand, Debug)]
pub enum GenerateAction {
    /// Generate a deployment project skeleton at the given path.
    Deployment(DeploymentArgs),

    /// Generate a code location inside the enclosing deployment project.
    CodeLocation(CodeLocationArgs),

    /// Generate a component type inside the enclosing code location project.
    ComponentType(ComponentTypeArgs),

    /// Generate a component instance of a registered component type.
    ///
    /// Parameters come from `--json-params` (validated against the type's
    /// declared schema) or from type-specific arguments after `--`.
    Component(ComponentArgs),
}

/// Arguments for `generate deployment`.
#[derive(Parser, Debug)]
pub struct DeploymentArgs {
    /// Destination path for the deployment skeleton. Must not exist.
    pub path: String,
}

/// Arguments for `generate code-location`.
#[derive(Parser, Debug)]
pub struct CodeLocationArgs {
    /// Name of the new code location.
    pub name: String,
}

/// Arguments for `generate component-type`.
#[derive(Parser, Debug)]
pub struct ComponentTypeArgs {
    /// Name of the new component type (kebab or snake case).
    pub name: String,
}

/// Arguments for `generate component`.
#[derive(Parser, Debug)]
pub struct ComponentArgs {
    /// Registry key of the component type to instantiate.
    pub component_type: String,

    /// Name of the new component instance.
    pub component_name: String,

    /// Generation parameters as a JSON object, validated against the
    /// component type's declared schema. Takes precedence over extra args.
    #[arg(long)]
    pub json_params: Option<String>,

    /// Type-specific arguments forwarded to the component type's own
    /// parameter parser.
    #[arg(last = true, value_name = "EXTRA_ARGS")]
    pub extra_args: Vec<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
