//! Component registry and built-in component types.
//!
//! The registry is an explicitly constructed, immutable lookup table from a
//! unique string key to a component type capability object. It is built once
//! in `main` and passed by reference into context resolution; there is no
//! module-level singleton.
//!
//! A component type's hooks are all optional. A type with no schema and no
//! hooks is a valid variant (the `blank` built-in), not an error.

use crate::error::{Result, TrellisError};
use clap::Parser;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fs;

/// Capability object for a registered component type.
///
/// Every operation has a defaulted implementation so component types only
/// override the hooks they actually support.
pub trait ComponentType: std::fmt::Debug {
    /// JSON schema for instantiation parameters, if the type takes any.
    fn params_schema(&self) -> Option<Value> {
        None
    }

    /// Derive parameters from type-specific command-line arguments.
    fn params_from_cli(&self, _extra_args: &[String]) -> Result<Option<Value>> {
        Ok(None)
    }

    /// Materialize type-specific files in the current working directory and
    /// return the parameter mapping to persist in the descriptor.
    ///
    /// The caller scopes the working directory to the new instance directory
    /// for the duration of this call.
    fn generate_files(&self, params: Option<&Value>) -> Result<Option<Value>> {
        Ok(params.cloned())
    }
}

/// Immutable key -> component type lookup table.
pub struct ComponentRegistry {
    types: BTreeMap<String, Box<dyn ComponentType>>,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Create a registry populated with the built-in component types.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("blank", Box::new(BlankComponent));
        registry.register("pipeline", Box::new(PipelineComponent));
        registry
    }

    /// Register a component type under a unique key.
    pub fn register(&mut self, key: impl Into<String>, component_type: Box<dyn ComponentType>) {
        self.types.insert(key.into(), component_type);
    }

    /// Whether a component type is registered under `key`.
    pub fn has(&self, key: &str) -> bool {
        self.types.contains_key(key)
    }

    /// Look up a component type by key.
    pub fn get(&self, key: &str) -> Option<&dyn ComponentType> {
        self.types.get(key).map(|boxed| boxed.as_ref())
    }

    /// Registered keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(|key| key.as_str())
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("keys", &self.types.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// Built-in component types
// ============================================================================

/// A component type with no parameters and no file hooks.
///
/// Instances get the template tree and a descriptor with empty params.
#[derive(Debug)]
struct BlankComponent;

impl ComponentType for BlankComponent {}

/// A pipeline component with an entry point and an optional schedule.
#[derive(Debug)]
struct PipelineComponent;

/// Stub file written into new pipeline instances.
const PIPELINE_STUB_FILE: &str = "pipeline.yaml";

/// Type-specific CLI for `generate component pipeline <name> -- <args>`.
#[derive(Parser, Debug)]
#[command(name = "pipeline", no_binary_name = true)]
struct PipelineParamsArgs {
    /// Path to the pipeline entry point.
    entry: String,

    /// Cron schedule for the pipeline.
    #[arg(long)]
    schedule: Option<String>,
}

impl PipelineComponent {
    fn params_value(entry: &str, schedule: Option<&str>) -> Value {
        let mut params = serde_json::Map::new();
        params.insert("entry".to_string(), Value::String(entry.to_string()));
        if let Some(schedule) = schedule {
            params.insert("schedule".to_string(), Value::String(schedule.to_string()));
        }
        Value::Object(params)
    }
}

impl ComponentType for PipelineComponent {
    fn params_schema(&self) -> Option<Value> {
        Some(json!({
            "type": "object",
            "properties": {
                "entry": { "type": "string" },
                "schedule": { "type": "string" }
            },
            "required": ["entry"],
            "additionalProperties": false
        }))
    }

    fn params_from_cli(&self, extra_args: &[String]) -> Result<Option<Value>> {
        let args = PipelineParamsArgs::try_parse_from(extra_args).map_err(|e| {
            TrellisError::InvalidParams(format!(
                "invalid arguments for component type `pipeline`: {}",
                e
            ))
        })?;
        Ok(Some(Self::params_value(&args.entry, args.schedule.as_deref())))
    }

    fn generate_files(&self, params: Option<&Value>) -> Result<Option<Value>> {
        if let Some(params) = params {
            let stub = serde_yaml::to_string(params).map_err(|e| {
                TrellisError::Io(format!("failed to serialize pipeline stub: {}", e))
            })?;
            fs::write(PIPELINE_STUB_FILE, stub).map_err(|e| {
                TrellisError::Io(format!("failed to write {}: {}", PIPELINE_STUB_FILE, e))
            })?;
        }
        Ok(params.cloned())
    }
}
