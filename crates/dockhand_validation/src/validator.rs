//! Schema-driven configuration validation.
//!
//! Validation is a pure function over a schema (ordered [`ConfigField`] list)
//! and a flat key/value configuration: no I/O, no shared state, deterministic
//! output in field-declaration order. A failed check is data, not an error;
//! each field reports at most one failure per call.

use std::collections::HashMap;

use dockhand_apps::{ConfigField, FieldType};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single failed check, tied to the field key that failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Outcome of validating a configuration against a schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub valid: bool,
    /// Failures in field-declaration order
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validates candidate configuration values against a template's schema.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate every field in schema order.
    pub fn validate_configuration(
        fields: &[ConfigField],
        config: &HashMap<String, Value>,
    ) -> ValidationResult {
        let errors = fields
            .iter()
            .filter_map(|field| Self::validate_field(field, config.get(field.key.as_str())))
            .collect();

        ValidationResult::from_errors(errors)
    }

    /// Validate one field against its declared rules.
    ///
    /// An absent, `null`, or empty-string value fails only when the field is
    /// required; otherwise the field passes without further checks.
    pub fn validate_field(field: &ConfigField, value: Option<&Value>) -> Option<ValidationError> {
        let value = match value {
            Some(value) if !is_empty(value) => value,
            _ => {
                if field.is_required() {
                    return Some(failure(field, format!("{} is required", field.label)));
                }
                return None;
            }
        };

        match field.field_type {
            FieldType::String | FieldType::Password => validate_string(field, value),
            FieldType::Number => validate_number(field, value),
            FieldType::Boolean => validate_boolean(field, value),
            FieldType::Select => validate_select(field, value),
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

fn failure(field: &ConfigField, message: String) -> ValidationError {
    ValidationError {
        field: field.key.clone(),
        message,
    }
}

// Check order: min length, max length, pattern; the first failure wins.
// The custom pattern message applies to min-length and pattern failures only.
fn validate_string(field: &ConfigField, value: &Value) -> Option<ValidationError> {
    let text = match value.as_str() {
        Some(text) => text,
        None => return Some(failure(field, format!("{} must be a string", field.label))),
    };

    let rules = field.validation.as_ref()?;

    if let Some(min) = rules.min_length {
        if text.chars().count() < min {
            let message = rules
                .pattern_message
                .clone()
                .unwrap_or_else(|| format!("{} must be at least {} characters", field.label, min));
            return Some(failure(field, message));
        }
    }

    if let Some(max) = rules.max_length {
        if text.chars().count() > max {
            return Some(failure(
                field,
                format!("{} must be at most {} characters", field.label, max),
            ));
        }
    }

    if let Some(pattern) = rules.pattern.as_deref() {
        // The whole value must match, not just a substring. An unparsable
        // pattern is a definition-authoring bug and skips the check.
        if let Ok(re) = Regex::new(&format!("^(?:{})$", pattern)) {
            if !re.is_match(text) {
                let message = rules
                    .pattern_message
                    .clone()
                    .unwrap_or_else(|| format!("{} has an invalid format", field.label));
                return Some(failure(field, message));
            }
        }
    }

    None
}

fn validate_number(field: &ConfigField, value: &Value) -> Option<ValidationError> {
    let number = match numeric_value(value) {
        Some(number) => number,
        None => {
            return Some(failure(
                field,
                format!("{} must be a valid number", field.label),
            ))
        }
    };

    let rules = field.validation.as_ref()?;

    if let Some(min) = rules.min {
        if number < min {
            return Some(failure(
                field,
                format!("{} must be at least {}", field.label, min),
            ));
        }
    }

    if let Some(max) = rules.max {
        if number > max {
            return Some(failure(
                field,
                format!("{} must be at most {}", field.label, max),
            ));
        }
    }

    None
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn validate_boolean(field: &ConfigField, value: &Value) -> Option<ValidationError> {
    match value {
        Value::Bool(_) => None,
        Value::String(text) if text == "true" || text == "false" => None,
        _ => Some(failure(field, format!("{} must be a boolean", field.label))),
    }
}

fn validate_select(field: &ConfigField, value: &Value) -> Option<ValidationError> {
    if field.options.is_empty() {
        return None;
    }

    let candidate = stringify(value);
    if field.options.iter().any(|option| option.value == candidate) {
        return None;
    }

    let allowed: Vec<&str> = field
        .options
        .iter()
        .map(|option| option.value.as_str())
        .collect();

    Some(failure(
        field,
        format!("{} must be one of: {}", field.label, allowed.join(", ")),
    ))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockhand_apps::{SelectOption, ValidationRules};
    use serde_json::json;

    fn field(key: &str, label: &str, field_type: FieldType) -> ConfigField {
        ConfigField {
            key: key.to_string(),
            label: label.to_string(),
            description: None,
            field_type,
            default: None,
            options: Vec::new(),
            env_var: "APP_VALUE".to_string(),
            validation: None,
        }
    }

    fn with_rules(mut field: ConfigField, rules: ValidationRules) -> ConfigField {
        field.validation = Some(rules);
        field
    }

    fn required() -> ValidationRules {
        ValidationRules {
            required: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_required_field_rejects_missing_values() {
        for field_type in [
            FieldType::String,
            FieldType::Password,
            FieldType::Number,
            FieldType::Boolean,
            FieldType::Select,
        ] {
            let field = with_rules(field("password", "Password", field_type), required());

            for value in [None, Some(&Value::Null), Some(&json!(""))] {
                let error = ConfigValidator::validate_field(&field, value).unwrap();
                assert_eq!(error.field, "password");
                assert_eq!(error.message, "Password is required");
            }
        }
    }

    #[test]
    fn test_optional_field_accepts_missing_values() {
        for field_type in [
            FieldType::String,
            FieldType::Password,
            FieldType::Number,
            FieldType::Boolean,
            FieldType::Select,
        ] {
            let field = field("value", "Value", field_type);

            for value in [None, Some(&Value::Null), Some(&json!(""))] {
                assert!(ConfigValidator::validate_field(&field, value).is_none());
            }
        }
    }

    #[test]
    fn test_string_rejects_non_string_values() {
        let field = field("value", "Value", FieldType::String);
        let error = ConfigValidator::validate_field(&field, Some(&json!(42))).unwrap();
        assert_eq!(error.message, "Value must be a string");
    }

    #[test]
    fn test_string_min_length() {
        let rules = ValidationRules {
            min_length: Some(8),
            ..Default::default()
        };
        let field = with_rules(field("password", "Password", FieldType::Password), rules);

        let error = ConfigValidator::validate_field(&field, Some(&json!("abc"))).unwrap();
        assert_eq!(error.message, "Password must be at least 8 characters");
        assert!(ConfigValidator::validate_field(&field, Some(&json!("longenough"))).is_none());
    }

    #[test]
    fn test_string_max_length_wins_over_matching_pattern() {
        let rules = ValidationRules {
            max_length: Some(4),
            pattern: Some("[a-z]+".to_string()),
            ..Default::default()
        };
        let field = with_rules(field("value", "Value", FieldType::String), rules);

        let error = ConfigValidator::validate_field(&field, Some(&json!("abcdef"))).unwrap();
        assert_eq!(error.message, "Value must be at most 4 characters");
    }

    #[test]
    fn test_string_pattern_must_match_whole_value() {
        let rules = ValidationRules {
            pattern: Some("[a-z]+".to_string()),
            ..Default::default()
        };
        let field = with_rules(field("value", "Value", FieldType::String), rules);

        assert!(ConfigValidator::validate_field(&field, Some(&json!("abc"))).is_none());
        let error = ConfigValidator::validate_field(&field, Some(&json!("abc123"))).unwrap();
        assert_eq!(error.message, "Value has an invalid format");
    }

    #[test]
    fn test_custom_message_used_for_min_length_and_pattern() {
        let rules = ValidationRules {
            min_length: Some(8),
            pattern: Some("[a-z]+".to_string()),
            pattern_message: Some("lowercase letters only".to_string()),
            ..Default::default()
        };
        let field = with_rules(field("value", "Value", FieldType::String), rules);

        let error = ConfigValidator::validate_field(&field, Some(&json!("abc"))).unwrap();
        assert_eq!(error.message, "lowercase letters only");

        let error = ConfigValidator::validate_field(&field, Some(&json!("abcdefgh1"))).unwrap();
        assert_eq!(error.message, "lowercase letters only");
    }

    #[test]
    fn test_number_rejects_non_numeric_input() {
        let field = field("value", "Value", FieldType::Number);

        let error = ConfigValidator::validate_field(&field, Some(&json!("twelve"))).unwrap();
        assert_eq!(error.message, "Value must be a valid number");
        let error = ConfigValidator::validate_field(&field, Some(&json!(true))).unwrap();
        assert_eq!(error.message, "Value must be a valid number");
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        let rules = ValidationRules {
            min: Some(1.0),
            max: Some(65535.0),
            ..Default::default()
        };
        let field = with_rules(field("port", "Port", FieldType::Number), rules);

        assert!(ConfigValidator::validate_field(&field, Some(&json!("8080"))).is_none());
        assert!(ConfigValidator::validate_field(&field, Some(&json!(8080))).is_none());
    }

    #[test]
    fn test_number_bounds_are_inclusive() {
        let rules = ValidationRules {
            min: Some(1.0),
            max: Some(10.0),
            ..Default::default()
        };
        let field = with_rules(field("value", "Value", FieldType::Number), rules);

        assert!(ConfigValidator::validate_field(&field, Some(&json!(1))).is_none());
        assert!(ConfigValidator::validate_field(&field, Some(&json!(10))).is_none());

        let error = ConfigValidator::validate_field(&field, Some(&json!(0))).unwrap();
        assert_eq!(error.message, "Value must be at least 1");
        let error = ConfigValidator::validate_field(&field, Some(&json!(11))).unwrap();
        assert_eq!(error.message, "Value must be at most 10");
    }

    #[test]
    fn test_boolean_accepts_bools_and_exact_strings() {
        let field = field("value", "Value", FieldType::Boolean);

        assert!(ConfigValidator::validate_field(&field, Some(&json!(true))).is_none());
        assert!(ConfigValidator::validate_field(&field, Some(&json!(false))).is_none());
        assert!(ConfigValidator::validate_field(&field, Some(&json!("true"))).is_none());
        assert!(ConfigValidator::validate_field(&field, Some(&json!("false"))).is_none());

        let error = ConfigValidator::validate_field(&field, Some(&json!("yes"))).unwrap();
        assert_eq!(error.message, "Value must be a boolean");
    }

    #[test]
    fn test_select_without_options_passes() {
        let field = field("value", "Value", FieldType::Select);
        assert!(ConfigValidator::validate_field(&field, Some(&json!("anything"))).is_none());
    }

    #[test]
    fn test_select_lists_allowed_values_in_declared_order() {
        let mut field = field("locale", "Locale", FieldType::Select);
        field.options = vec![
            SelectOption {
                label: "English".to_string(),
                value: "en_US".to_string(),
            },
            SelectOption {
                label: "German".to_string(),
                value: "de_DE".to_string(),
            },
        ];

        assert!(ConfigValidator::validate_field(&field, Some(&json!("en_US"))).is_none());

        let error = ConfigValidator::validate_field(&field, Some(&json!("fr_FR"))).unwrap();
        assert_eq!(error.message, "Locale must be one of: en_US, de_DE");
    }

    #[test]
    fn test_configuration_errors_preserve_schema_order() {
        let first = with_rules(field("first", "First", FieldType::String), required());
        let second = with_rules(field("second", "Second", FieldType::Number), required());
        let third = field("third", "Third", FieldType::Boolean);

        let config = HashMap::from([("third".to_string(), json!(true))]);
        let result =
            ConfigValidator::validate_configuration(&[first, second, third], &config);

        assert!(!result.valid);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].field, "first");
        assert_eq!(result.errors[1].field, "second");
    }

    #[test]
    fn test_password_schema_end_to_end() {
        let rules = ValidationRules {
            required: true,
            min_length: Some(8),
            ..Default::default()
        };
        let schema = vec![with_rules(field("password", "Password", FieldType::Password), rules)];

        let config = HashMap::from([("password".to_string(), json!("abc"))]);
        let result = ConfigValidator::validate_configuration(&schema, &config);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![ValidationError {
                field: "password".to_string(),
                message: "Password must be at least 8 characters".to_string(),
            }]
        );

        let config = HashMap::from([("password".to_string(), json!("longenough"))]);
        let result = ConfigValidator::validate_configuration(&schema, &config);
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }
}
