//! Whole-record validation.
//!
//! `validate_record` composes the format and capability checks into one pass
//! over a parsed document. Every check runs regardless of earlier failures so
//! a single report lists all defects in a file.

use crate::capability::{CapabilityName, is_non_empty_string, validate_capability};
use crate::formats::{is_valid_date, is_valid_url};
use crate::model::PricingModel;
use serde_json::{Map, Value};

/// Top-level keys a record may carry.
pub const TOP_LEVEL_KEYS: &[&str] = &[
    "name",
    "vendor",
    "website",
    "description",
    "capabilities",
    "pricing",
    "last_updated",
    "docs_url",
];

const PRICING_KEYS: &[&str] = &["model", "details"];

/// Validate a parsed record, returning one message per defect.
///
/// An empty vector means the record is valid. Messages follow a fixed order:
/// simple fields, capabilities, pricing, `last_updated`, `docs_url`, then the
/// unexpected top-level key scan.
pub fn validate_record(value: &Value) -> Vec<String> {
    let mut errors = Vec::new();
    let Some(record) = value.as_object() else {
        errors.push("record must be an object".to_string());
        return errors;
    };

    for field in ["name", "vendor"] {
        require_non_empty_string(record, field, &mut errors);
    }

    if !string_field(record, "website").is_some_and(is_valid_url) {
        errors.push("website must be a valid HTTP/HTTPS URL".to_string());
    }

    require_non_empty_string(record, "description", &mut errors);

    match record.get("capabilities").and_then(Value::as_object) {
        Some(capabilities) => validate_capabilities(capabilities, &mut errors),
        None => errors.push("capabilities must be an object".to_string()),
    }

    match record.get("pricing").and_then(Value::as_object) {
        Some(pricing) => validate_pricing(pricing, &mut errors),
        None => errors.push("pricing must be an object".to_string()),
    }

    if !string_field(record, "last_updated").is_some_and(is_valid_date) {
        errors.push("last_updated must be a valid date in YYYY-MM-DD format".to_string());
    }

    if record.contains_key("docs_url") && !string_field(record, "docs_url").is_some_and(is_valid_url)
    {
        errors.push("docs_url must be a valid HTTP/HTTPS URL".to_string());
    }

    for key in record.keys() {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            errors.push(format!("Unexpected top-level property: {key}"));
        }
    }

    errors
}

fn validate_capabilities(capabilities: &Map<String, Value>, errors: &mut Vec<String>) {
    for name in CapabilityName::ALL {
        match capabilities.get(name.as_str()) {
            Some(value) => errors.extend(validate_capability(value, name)),
            None => errors.push(format!("Missing required capability: {name}")),
        }
    }

    for key in capabilities.keys() {
        if CapabilityName::parse(key).is_none() {
            errors.push(format!("Unexpected capability: {key}"));
        }
    }
}

fn validate_pricing(pricing: &Map<String, Value>, errors: &mut Vec<String>) {
    let model = pricing
        .get("model")
        .and_then(Value::as_str)
        .and_then(PricingModel::parse);
    if model.is_none() {
        errors.push(format!(
            "pricing.model must be one of: {}",
            PricingModel::allowed_list()
        ));
    }

    if !is_non_empty_string(pricing.get("details")) {
        errors.push("pricing.details must be a non-empty string".to_string());
    }

    for key in pricing.keys() {
        if !PRICING_KEYS.contains(&key.as_str()) {
            errors.push(format!("pricing has unexpected property: {key}"));
        }
    }
}

fn require_non_empty_string(record: &Map<String, Value>, field: &str, errors: &mut Vec<String>) {
    if !is_non_empty_string(record.get(field)) {
        errors.push(format!("{field} must be a non-empty string"));
    }
}

fn string_field<'a>(record: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_record() -> Value {
        let capability = json!({"supported": true, "details": "Available"});
        json!({
            "name": "Sample Coder",
            "vendor": "Sample Labs",
            "website": "https://sample.example",
            "description": "A sample agentic coder",
            "capabilities": {
                "slash_commands": {"supported": true, "details": "Built-in commands", "customizable": true},
                "multi_file_editing": capability,
                "codebase_understanding": capability,
                "git_integration": capability,
                "terminal_access": capability,
                "web_search": capability,
                "mcp_servers": {"supported": true, "details": "Stdio servers", "docs_url": "https://sample.example/mcp"},
                "parallel_agents": capability,
                "hooks": capability
            },
            "pricing": {"model": "subscription", "details": "Monthly plan"},
            "last_updated": "2025-01-15",
            "docs_url": "https://sample.example/docs"
        })
    }

    fn count_matching(errors: &[String], needle: &str) -> usize {
        errors.iter().filter(|err| err.contains(needle)).count()
    }

    #[test]
    fn valid_record_has_no_errors() {
        assert_eq!(validate_record(&valid_record()), Vec::<String>::new());
    }

    #[test]
    fn docs_url_is_optional() {
        let mut record = valid_record();
        record.as_object_mut().unwrap().remove("docs_url");
        assert!(validate_record(&record).is_empty());
    }

    #[test]
    fn each_missing_capability_is_reported_once() {
        let mut record = valid_record();
        let caps = record["capabilities"].as_object_mut().unwrap();
        caps.remove("hooks");
        caps.remove("web_search");
        record["name"] = json!("");

        let errors = validate_record(&record);
        assert_eq!(count_matching(&errors, "Missing required capability: hooks"), 1);
        assert_eq!(
            count_matching(&errors, "Missing required capability: web_search"),
            1
        );
        assert_eq!(count_matching(&errors, "Missing required capability"), 2);
        assert!(errors.contains(&"name must be a non-empty string".to_string()));
    }

    #[test]
    fn unexpected_capabilities_are_reported() {
        let mut record = valid_record();
        record["capabilities"]["telepathy"] = json!({"supported": true, "details": "Reads minds"});
        assert_eq!(
            validate_record(&record),
            vec!["Unexpected capability: telepathy"]
        );
    }

    #[test]
    fn capability_errors_are_prefixed_with_the_capability_name() {
        let mut record = valid_record();
        record["capabilities"]["git_integration"] = json!({"supported": 1, "details": "Commits"});
        assert_eq!(
            validate_record(&record),
            vec!["git_integration.supported must be a boolean"]
        );
    }

    #[test]
    fn each_extra_top_level_key_is_reported_once() {
        let mut record = valid_record();
        record["homepage"] = json!("https://sample.example");
        record["rating"] = json!(5);
        record["last_updated"] = json!("2025-02-30");

        let errors = validate_record(&record);
        assert_eq!(
            errors,
            vec![
                "last_updated must be a valid date in YYYY-MM-DD format",
                "Unexpected top-level property: homepage",
                "Unexpected top-level property: rating",
            ]
        );
    }

    #[test]
    fn pricing_checks_model_details_and_extra_keys() {
        let mut record = valid_record();
        record["pricing"] = json!({"model": "Free", "details": "", "currency": "USD"});
        assert_eq!(
            validate_record(&record),
            vec![
                "pricing.model must be one of: subscription, usage-based, free, hybrid",
                "pricing.details must be a non-empty string",
                "pricing has unexpected property: currency",
            ]
        );
    }

    #[test]
    fn missing_pricing_yields_a_single_message() {
        let mut record = valid_record();
        record.as_object_mut().unwrap().remove("pricing");
        assert_eq!(validate_record(&record), vec!["pricing must be an object"]);
    }

    #[test]
    fn array_capabilities_are_not_an_object() {
        let mut record = valid_record();
        record["capabilities"] = json!([]);
        assert_eq!(
            validate_record(&record),
            vec!["capabilities must be an object"]
        );
    }

    #[test]
    fn defects_accumulate_in_fixed_order() {
        let record = json!({
            "name": "Broken",
            "vendor": 7,
            "website": "ftp://broken.example",
            "description": "Has many problems",
            "capabilities": "none",
            "pricing": null,
            "last_updated": "yesterday",
            "docs_url": "docs",
            "extra": true
        });
        assert_eq!(
            validate_record(&record),
            vec![
                "vendor must be a non-empty string",
                "website must be a valid HTTP/HTTPS URL",
                "capabilities must be an object",
                "pricing must be an object",
                "last_updated must be a valid date in YYYY-MM-DD format",
                "docs_url must be a valid HTTP/HTTPS URL",
                "Unexpected top-level property: extra",
            ]
        );
    }

    #[test]
    fn non_object_documents_are_rejected_outright() {
        assert_eq!(
            validate_record(&json!([1, 2, 3])),
            vec!["record must be an object"]
        );
        assert_eq!(validate_record(&json!(null)), vec!["record must be an object"]);
    }
}
