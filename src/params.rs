//! Generation parameter resolution for component instances.
//!
//! Parameters come from one of two sources: a `--json-params` JSON object,
//! validated against the component type's declared schema, or type-specific
//! extra arguments handed to the type's own CLI hook. JSON takes precedence
//! when both are supplied. A type with no declared schema takes no
//! parameters at all.

use crate::error::{Result, TrellisError};
use crate::registry::ComponentType;
use jsonschema::JSONSchema;
use serde_json::Value;

/// Resolve the generation parameters for one `generate component` invocation.
pub fn resolve_generate_params(
    component_type: &dyn ComponentType,
    json_params: Option<&str>,
    extra_args: &[String],
) -> Result<Option<Value>> {
    let Some(schema) = component_type.params_schema() else {
        return Ok(None);
    };

    match json_params {
        Some(raw) => {
            let value: Value = serde_json::from_str(raw).map_err(|e| {
                TrellisError::InvalidParams(format!("malformed --json-params: {}", e))
            })?;
            validate_params(&schema, &value)?;
            Ok(Some(value))
        }
        None => component_type.params_from_cli(extra_args),
    }
}

/// Validate a parameter value against a component type's declared schema.
pub fn validate_params(schema: &Value, instance: &Value) -> Result<()> {
    let compiled = JSONSchema::compile(schema).map_err(|e| {
        TrellisError::InvalidParams(format!(
            "component type declares an invalid parameter schema: {}",
            e
        ))
    })?;

    if let Err(errors) = compiled.validate(instance) {
        let details: Vec<String> = errors.map(|e| e.to_string()).collect();
        return Err(TrellisError::InvalidParams(format!(
            "params failed schema validation: {}",
            details.join("; ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct NoSchemaType;
    impl ComponentType for NoSchemaType {}

    #[derive(Debug)]
    struct EchoCliType;
    impl ComponentType for EchoCliType {
        fn params_schema(&self) -> Option<Value> {
            Some(json!({"type": "object"}))
        }

        fn params_from_cli(&self, extra_args: &[String]) -> Result<Option<Value>> {
            Ok(Some(json!({"args": extra_args})))
        }
    }

    fn entry_schema() -> Value {
        json!({
            "type": "object",
            "properties": { "entry": { "type": "string" } },
            "required": ["entry"],
            "additionalProperties": false
        })
    }

    #[derive(Debug)]
    struct EntryType;
    impl ComponentType for EntryType {
        fn params_schema(&self) -> Option<Value> {
            Some(entry_schema())
        }
    }

    #[test]
    fn type_without_schema_takes_no_params() {
        let params =
            resolve_generate_params(&NoSchemaType, Some(r#"{"entry": "x"}"#), &[]).unwrap();
        assert_eq!(params, None);
    }

    #[test]
    fn valid_json_params_are_parsed_and_returned() {
        let params =
            resolve_generate_params(&EntryType, Some(r#"{"entry": "jobs/daily.rs"}"#), &[])
                .unwrap();
        assert_eq!(params, Some(json!({"entry": "jobs/daily.rs"})));
    }

    #[test]
    fn malformed_json_params_are_rejected() {
        let result = resolve_generate_params(&EntryType, Some("{not json"), &[]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, TrellisError::InvalidParams(_)));
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn schema_violations_are_rejected() {
        let result = resolve_generate_params(&EntryType, Some(r#"{"entry": 42}"#), &[]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("schema validation"));
    }

    #[test]
    fn missing_required_key_is_rejected() {
        let result = resolve_generate_params(&EntryType, Some("{}"), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn json_params_take_precedence_over_extra_args() {
        let extra = vec!["--flag".to_string()];
        let params =
            resolve_generate_params(&EchoCliType, Some(r#"{"from": "json"}"#), &extra).unwrap();
        assert_eq!(params, Some(json!({"from": "json"})));
    }

    #[test]
    fn extra_args_go_to_the_cli_hook_without_json_params() {
        let extra = vec!["a".to_string(), "b".to_string()];
        let params = resolve_generate_params(&EchoCliType, None, &extra).unwrap();
        assert_eq!(params, Some(json!({"args": ["a", "b"]})));
    }

    #[test]
    fn schema_without_cli_hook_and_without_json_yields_none() {
        let params = resolve_generate_params(&EntryType, None, &[]).unwrap();
        assert_eq!(params, None);
    }

    #[test]
    fn validate_params_accepts_matching_instance() {
        let schema = entry_schema();
        assert!(validate_params(&schema, &json!({"entry": "x"})).is_ok());
    }

    #[test]
    fn validate_params_reports_all_violations() {
        let schema = entry_schema();
        let result = validate_params(&schema, &json!({"entry": 1, "bogus": true}));
        assert!(result.is_err());
    }
}
