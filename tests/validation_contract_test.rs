//! End-to-end contract tests for the validation engine: the rule-string
//! grammar, message rendering, error ordering and aggregation, the wire
//! shapes, and a table-driven sweep over the whole builtin catalog.

use std::collections::BTreeMap;

use formcheck::{
    parse_rule, render_message, FieldInput, InputKind, Registry, RuleReference,
    ValidationRequest, Validator,
};

#[test]
fn rule_string_grammar() {
    assert_eq!(parse_rule("required"), RuleReference::new("required"));
    assert_eq!(
        parse_rule("minLength[8]"),
        RuleReference::new("minLength").with_parameter("8")
    );
    assert_eq!(
        parse_rule("matches[confirm_password]"),
        RuleReference::new("matches").with_parameter("confirm_password")
    );
}

#[test]
fn required_empty_value_is_exactly_one_error() {
    let validator = Validator::new();
    let errors = validator.validate(&ValidationRequest::new("").with_rules("required"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].rule, "required");
}

#[test]
fn valid_email_passes_and_invalid_email_renders_label() {
    let validator = Validator::new();

    let ok = ValidationRequest::new("person@example.com").with_rules("email");
    assert!(validator.validate(&ok).is_empty());

    let bad = ValidationRequest::new("not-an-email")
        .with_rules("email")
        .with_label("Email");
    let errors = validator.validate(&bad);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].error.contains("Email"));
}

#[test]
fn message_templating_contract() {
    assert_eq!(
        render_message("The %l requires %p characters", "field", Some("10")),
        "The field requires 10 characters"
    );
    assert_eq!(
        render_message("The %l is required", "field", None),
        "The field is required"
    );
}

#[test]
fn batch_count_is_sum_and_order_is_request_then_rule() {
    let validator = Validator::new();
    let requests = vec![
        ValidationRequest::new("")
            .with_rules("required,email")
            .with_identifier("a"),
        ValidationRequest::new("person@example.com")
            .with_rules("required,email")
            .with_identifier("b"),
        ValidationRequest::new("zz")
            .with_rules("numeric,minLength[3]")
            .with_identifier("c"),
    ];

    let expected: Vec<_> = requests
        .iter()
        .flat_map(|request| validator.validate(request))
        .collect();
    let errors = validator.validate_all(&requests);

    assert_eq!(errors, expected);
    let order: Vec<(&str, &str)> = errors
        .iter()
        .map(|e| (e.identifier.as_deref().unwrap(), e.rule.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("a", "required"),
            ("a", "email"),
            ("c", "numeric"),
            ("c", "minLength"),
        ]
    );
}

#[test]
fn wire_shapes_round_trip() {
    let json = r#"{
        "value": "ab",
        "rules": [
            { "name": "required" },
            { "name": "minLength", "parameter": "5" }
        ],
        "label": "Username",
        "identifier": "signup.username"
    }"#;

    let request: ValidationRequest = serde_json::from_str(json).expect("request deserializes");
    assert_eq!(request.kind, InputKind::Text);

    let validator = Validator::new();
    let errors = validator.validate(&request);
    assert_eq!(errors.len(), 1);

    let projected = serde_json::to_value(&errors[0]).expect("error serializes");
    assert_eq!(projected["value"], "ab");
    assert_eq!(projected["rule"], "minLength");
    assert_eq!(projected["parameter"], "5");
    assert_eq!(projected["identifier"], "signup.username");
    assert_eq!(
        projected["error"],
        "<em>Username</em> must be at least <em>5</em> characters in length."
    );

    // Absent optionals are omitted from the projection entirely.
    let bare = Validator::new().validate(&ValidationRequest::new("").with_rules("required"));
    let projected = serde_json::to_value(&bare[0]).expect("error serializes");
    assert!(projected.get("parameter").is_none());
    assert!(projected.get("identifier").is_none());
}

/// One row per catalog rule: a value the hook must accept and one it must
/// reject, plus the parameter and input context where the rule needs them.
struct CatalogCase {
    rule: &'static str,
    valid: &'static str,
    invalid: &'static str,
    parameter: Option<&'static str>,
}

const CATALOG_CASES: &[CatalogCase] = &[
    CatalogCase { rule: "required", valid: "x", invalid: "", parameter: None },
    CatalogCase { rule: "matches", valid: "hunter2", invalid: "other", parameter: Some("password") },
    CatalogCase { rule: "url", valid: "http://www.example.com", invalid: "not a url", parameter: None },
    CatalogCase { rule: "email", valid: "email@example.com", invalid: "not-an-email", parameter: None },
    CatalogCase { rule: "emails", valid: "a@example.com, b@example.com", invalid: "a@example.com, nope", parameter: None },
    CatalogCase { rule: "minLength", valid: "abcd", invalid: "ab", parameter: Some("3") },
    CatalogCase { rule: "maxLength", valid: "ab", invalid: "abcd", parameter: Some("3") },
    CatalogCase { rule: "exactLength", valid: "abc", invalid: "ab", parameter: Some("3") },
    CatalogCase { rule: "greaterThan", valid: "6", invalid: "4", parameter: Some("5") },
    CatalogCase { rule: "lessThan", valid: "4", invalid: "6", parameter: Some("5") },
    CatalogCase { rule: "equals", valid: "abc", invalid: "xyz", parameter: Some("abc") },
    CatalogCase { rule: "alpha", valid: "abc", invalid: "ab1", parameter: None },
    CatalogCase { rule: "alphaNumeric", valid: "ab1", invalid: "ab-1", parameter: None },
    CatalogCase { rule: "alphaDash", valid: "ab-1_", invalid: "ab!", parameter: None },
    CatalogCase { rule: "numeric", valid: "123", invalid: "-123", parameter: None },
    CatalogCase { rule: "integer", valid: "-123", invalid: "1.5", parameter: None },
    CatalogCase { rule: "decimal", valid: "-1.5", invalid: "abc", parameter: None },
    CatalogCase { rule: "ip", valid: "192.168.0.1", invalid: "256.1.1.1", parameter: None },
    CatalogCase { rule: "base64", valid: "aGVsbG8=", invalid: "!!!!", parameter: None },
    CatalogCase { rule: "phone", valid: "(123) 456-7890", invalid: "12345", parameter: None },
    CatalogCase { rule: "cvc", valid: "123", invalid: "12", parameter: None },
    CatalogCase { rule: "creditCard", valid: "4242-4242-4242-4242", invalid: "4242-4242-4242-4241", parameter: None },
    CatalogCase { rule: "fileType", valid: "photo.png", invalid: "photo.bmp", parameter: Some("gif,png,jpg") },
    CatalogCase { rule: "hasSpecialChar", valid: "ab!", invalid: "abc", parameter: None },
    CatalogCase { rule: "hasNumber", valid: "ab1", invalid: "abc", parameter: None },
    CatalogCase { rule: "hasUpper", valid: "aBc", invalid: "abc", parameter: None },
    CatalogCase { rule: "hasLower", valid: "Abc", invalid: "ABC", parameter: None },
];

#[test]
fn every_catalog_rule_accepts_and_rejects() {
    let registry = Registry::builtin();
    let mut peers = BTreeMap::new();
    peers.insert("password".to_string(), "hunter2".to_string());

    assert_eq!(
        CATALOG_CASES.len(),
        registry.len(),
        "catalog sweep must cover every registered rule"
    );

    for case in CATALOG_CASES {
        let rule = registry
            .get(case.rule)
            .unwrap_or_else(|| panic!("rule {} missing from registry", case.rule));

        let valid = FieldInput {
            value: case.valid,
            kind: InputKind::Text,
            checked: false,
            peers: &peers,
        };
        let invalid = FieldInput {
            value: case.invalid,
            ..valid
        };

        assert!(
            (rule.hook)(&valid, case.parameter),
            "{} should accept {:?}",
            case.rule,
            case.valid
        );
        assert!(
            !(rule.hook)(&invalid, case.parameter),
            "{} should reject {:?}",
            case.rule,
            case.invalid
        );
    }
}

#[test]
fn parameterized_rules_fail_closed_end_to_end() {
    let validator = Validator::new();
    // Malformed parameters never raise; they surface as ordinary errors.
    for rule_list in ["minLength[ten]", "exactLength[-2]", "greaterThan[big]", "fileType"] {
        let errors = validator.validate(&ValidationRequest::new("value").with_rules(rule_list));
        assert_eq!(errors.len(), 1, "`{}` should fail closed", rule_list);
    }
}
