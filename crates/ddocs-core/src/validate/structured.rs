//! Structured-document validation
//!
//! Decodes YAML into a generic value tree with serde_yaml, then checks the
//! root type and required top-level keys against the schema registry.
//! Every missing key is reported; checking never stops early.

use super::ValidationResult;
use crate::error::ValidationIssue;
use crate::schema::{schemas, SchemaRegistry};
use serde_yaml::Value;

/// Decode structured content into a generic value
///
/// Empty input decodes to `Value::Null`. Merge keys (`<<`) are resolved.
/// Duplicate keys in one mapping are rejected.
///
/// # Errors
/// `ValidationIssue::DecodeError` carrying the parser message.
pub fn decode_structured(content: &str) -> Result<Value, ValidationIssue> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }
    let mut data: Value = serde_yaml::from_str(content).map_err(ValidationIssue::decode)?;
    data.apply_merge().map_err(ValidationIssue::decode)?;
    Ok(data)
}

/// Validate structured content against the built-in schema for `schema_name`
#[must_use]
pub fn validate_structured(content: &str, schema_name: &str) -> ValidationResult {
    validate_structured_with(schemas(), content, schema_name)
}

/// Validate structured content against a caller-supplied registry
#[must_use]
pub fn validate_structured_with(
    registry: &SchemaRegistry,
    content: &str,
    schema_name: &str,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    let data = match decode_structured(content) {
        Ok(data) => data,
        Err(issue) => {
            result.push_error(issue);
            return result;
        }
    };

    let Some(schema) = registry.get(schema_name) else {
        result.push_warning(ValidationIssue::UnknownSchema {
            name: schema_name.to_string(),
        });
        return result;
    };

    let mapping = data.as_mapping();
    if schema.expects_object() && mapping.is_none() {
        result.push_error(ValidationIssue::NotAnObject);
        return result;
    }

    for field in &schema.required {
        let present = mapping.is_some_and(|m| m.contains_key(field.as_str()));
        if !present {
            result.push_error(ValidationIssue::missing_field(field));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use pretty_assertions::assert_eq;

    #[test]
    fn complete_requirements_are_valid() {
        let content = r#"{"features": [{"id":"F1","name":"n","description":"d"}]}"#;
        let result = validate_structured(content, "requirements.yaml");
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn empty_mapping_misses_features() {
        let result = validate_structured("{}", "requirements.yaml");
        assert!(!result.is_valid());
        assert_eq!(result.error_messages(), vec!["Missing required field: features"]);
    }

    #[test]
    fn unparsable_content_is_one_decode_error() {
        let result = validate_structured("features: [unclosed\n  - : :", "requirements.yaml");
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].kind(), "DecodeError");
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn decode_error_wins_over_unknown_schema() {
        let result = validate_structured("a: [", "unknown.yaml");
        assert_eq!(result.errors().len(), 1);
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn unknown_schema_is_advisory() {
        let result = validate_structured("anything: 1", "entities.yaml");
        assert!(result.is_valid());
        assert_eq!(result.warning_messages(), vec!["No schema defined for entities.yaml"]);
    }

    #[test]
    fn non_mapping_root_fails_once() {
        for content in ["- a\n- b\n", "just a string", ""] {
            let result = validate_structured(content, "roles.yaml");
            assert_eq!(result.error_messages(), vec!["Document must be an object"], "{content:?}");
        }
    }

    #[test]
    fn every_missing_field_is_reported() {
        let mut registry = SchemaRegistry::new();
        registry.register("multi.yaml", Schema::object().with_required(["a", "b", "c"]));

        let result = validate_structured_with(&registry, "b: 1", "multi.yaml");
        assert_eq!(
            result.error_messages(),
            vec!["Missing required field: a", "Missing required field: c"]
        );

        let none = validate_structured_with(&registry, "{}", "multi.yaml");
        assert_eq!(none.errors().len(), 3);
        assert!(none
            .errors()
            .iter()
            .all(|e| e.kind() == "MissingRequiredField"));
    }

    #[test]
    fn non_object_schema_skips_root_check() {
        let mut registry = SchemaRegistry::new();
        registry.register("list.yaml", Schema::array(Schema::string()));
        assert!(validate_structured_with(&registry, "- a\n", "list.yaml").is_valid());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let content = "version: \"1.0\"\nroles: []\nextra: true\n";
        assert!(validate_structured(content, "roles.yaml").is_valid());
    }

    #[test]
    fn merged_keys_count_as_present() {
        let content = "base: &b\n  features: []\n<<: *b\n";
        let result = validate_structured(content, "requirements.yaml");
        assert!(result.is_valid(), "{:?}", result.error_messages());
    }

    #[test]
    fn duplicate_keys_are_a_decode_error() {
        let result = validate_structured("features: []\nfeatures: []\n", "requirements.yaml");
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].kind(), "DecodeError");
        assert!(result.error_messages()[0].contains("duplicate"));
    }

    #[test]
    fn null_valued_required_field_counts_as_present() {
        assert!(validate_structured("constraints:\n", "constraints.yaml").is_valid());
    }
}
