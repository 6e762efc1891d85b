//! Component descriptor serialization.
//!
//! The descriptor is the sole artifact trellis persists beyond the template
//! copy: a `component.yaml` with the component type's registry key and the
//! resolved parameter mapping. Key order is fixed (`type` before `params`,
//! never alphabetized) and a blank line separates the top-level key blocks
//! for readability. Emission is deterministic: the same in-memory descriptor
//! always produces byte-identical output.

use crate::error::{Result, TrellisError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_yaml::Mapping;
use std::fs;
use std::path::Path;

/// File name of the persisted component descriptor.
pub const COMPONENT_DESCRIPTOR_FILE: &str = "component.yaml";

/// On-disk descriptor for a component instance.
///
/// Field order here is the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Registry key of the component type.
    #[serde(rename = "type")]
    pub component_type: String,

    /// Resolved generation parameters; empty when the type produced none.
    pub params: Mapping,
}

impl ComponentDescriptor {
    /// Build a descriptor from a registry key and optional JSON params.
    ///
    /// `None` params become an empty mapping. Non-mapping params are a
    /// component type defect.
    pub fn from_params(component_type: &str, params: Option<&Value>) -> Result<Self> {
        let params = match params {
            None => Mapping::new(),
            Some(value) => {
                let yaml = serde_yaml::to_value(value).map_err(|e| {
                    TrellisError::Io(format!("failed to convert params to YAML: {}", e))
                })?;
                match yaml {
                    serde_yaml::Value::Mapping(mapping) => mapping,
                    serde_yaml::Value::Null => Mapping::new(),
                    other => {
                        return Err(TrellisError::InvalidParams(format!(
                            "component type `{}` produced non-mapping params: {:?}",
                            component_type, other
                        )));
                    }
                }
            }
        };

        Ok(Self {
            component_type: component_type.to_string(),
            params,
        })
    }
}

/// Render a descriptor to its canonical YAML form.
pub fn render_descriptor(descriptor: &ComponentDescriptor) -> Result<String> {
    let doc = serde_yaml::to_string(descriptor).map_err(|e| {
        TrellisError::Io(format!("failed to serialize component descriptor: {}", e))
    })?;
    Ok(space_top_level_keys(&doc))
}

/// Serialize `descriptor` to `path` in canonical form.
pub fn emit_descriptor(path: &Path, descriptor: &ComponentDescriptor) -> Result<()> {
    let rendered = render_descriptor(descriptor)?;
    fs::write(path, rendered).map_err(|e| {
        TrellisError::Io(format!("failed to write '{}': {}", path.display(), e))
    })
}

/// Insert one blank line before each top-level key after the first.
///
/// serde_yaml exposes no dumper hook, so the spacing rule is a pass over the
/// serialized document. Top-level keys are the only lines starting at column
/// zero in a block-style mapping document.
fn space_top_level_keys(doc: &str) -> String {
    let mut output = String::with_capacity(doc.len() + 8);
    let mut seen_top_level_key = false;

    for line in doc.lines() {
        let is_top_level_key =
            !line.is_empty() && !line.starts_with(' ') && !line.starts_with('-');
        if is_top_level_key && seen_top_level_key {
            output.push('\n');
        }
        seen_top_level_key = seen_top_level_key || is_top_level_key;
        output.push_str(line);
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn type_key_comes_before_params() {
        let descriptor =
            ComponentDescriptor::from_params("pipeline", Some(&json!({"entry": "jobs/x.rs"})))
                .unwrap();
        let rendered = render_descriptor(&descriptor).unwrap();

        let type_pos = rendered.find("type:").unwrap();
        let params_pos = rendered.find("params:").unwrap();
        assert!(type_pos < params_pos, "type must precede params:\n{}", rendered);
    }

    #[test]
    fn blank_line_separates_top_level_keys() {
        let descriptor =
            ComponentDescriptor::from_params("pipeline", Some(&json!({"entry": "jobs/x.rs"})))
                .unwrap();
        let rendered = render_descriptor(&descriptor).unwrap();

        assert_eq!(rendered, "type: pipeline\n\nparams:\n  entry: jobs/x.rs\n");
    }

    #[test]
    fn absent_params_become_empty_mapping() {
        let descriptor = ComponentDescriptor::from_params("blank", None).unwrap();
        let rendered = render_descriptor(&descriptor).unwrap();

        assert_eq!(rendered, "type: blank\n\nparams: {}\n");
    }

    #[test]
    fn non_mapping_params_are_rejected() {
        let result = ComponentDescriptor::from_params("blank", Some(&json!([1, 2])));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), TrellisError::InvalidParams(_)));
    }

    #[test]
    fn emission_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(COMPONENT_DESCRIPTOR_FILE);
        let descriptor = ComponentDescriptor::from_params(
            "pipeline",
            Some(&json!({"entry": "jobs/x.rs", "schedule": "@daily"})),
        )
        .unwrap();

        emit_descriptor(&path, &descriptor).unwrap();
        let first = fs::read(&path).unwrap();
        emit_descriptor(&path, &descriptor).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn emitted_descriptor_round_trips_through_serde() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(COMPONENT_DESCRIPTOR_FILE);
        let descriptor =
            ComponentDescriptor::from_params("pipeline", Some(&json!({"entry": "jobs/x.rs"})))
                .unwrap();

        emit_descriptor(&path, &descriptor).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: ComponentDescriptor = serde_yaml::from_str(&raw).unwrap();
        assert_eq!(parsed, descriptor);
    }

    #[test]
    fn nested_params_stay_block_style() {
        let descriptor = ComponentDescriptor::from_params(
            "pipeline",
            Some(&json!({"entry": "jobs/x.rs", "resources": {"cpu": 2, "tags": ["a", "b"]}})),
        )
        .unwrap();
        let rendered = render_descriptor(&descriptor).unwrap();

        // Exactly one blank line in the document, between the two top blocks.
        assert_eq!(rendered.matches("\n\n").count(), 1);
        assert!(rendered.contains("  resources:"));
    }
}
