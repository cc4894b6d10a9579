//! Ordered, non-short-circuiting execution of rule references against values.
//!
//! A [`Validator`] resolves each reference in a request against its registry,
//! invokes the hook, and turns every `false` into a rendered
//! [`ValidationError`]. Error order always matches rule order within a
//! request, and request order across a batch. Nothing here suspends, blocks,
//! or touches shared state: the registry is read-only and requests and
//! errors are transient values owned by the caller.

use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::message::render_message;
use crate::parser::{parse_rule_list, RuleReference};
use crate::registry::{FieldInput, InputKind, Registry, RuleDefinition};

/// Label used when a request carries neither a label nor an identifier.
const FALLBACK_LABEL: &str = "This field";

/// One value plus the ordered rules to run against it.
///
/// `kind`, `checked`, and `peers` carry the context a form adapter resolves
/// before handing the value over: the control kind, its toggle state, and
/// sibling field values for cross-field rules. All three default to the plain
/// text case, so `ValidationRequest::new("...").with_rules("required,email")`
/// is the whole story for ordinary fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationRequest {
    /// The value under validation.
    pub value: String,
    /// Ordered rule references; execution preserves this order.
    #[serde(default)]
    pub rules: Vec<RuleReference>,
    /// What kind of control produced the value.
    #[serde(default)]
    pub kind: InputKind,
    /// Checked state for toggle-style controls.
    #[serde(default)]
    pub checked: bool,
    /// Sibling field values by name, consulted by the `matches` rule.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub peers: BTreeMap<String, String>,
    /// Human-readable name substituted for `%l` in messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Override template used instead of each failing rule's own message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Opaque correlation id copied onto every error this request produces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl ValidationRequest {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::default()
        }
    }

    /// Append the rules declared by a comma-joined rule-string.
    pub fn with_rules(mut self, rule_list: &str) -> Self {
        self.rules.extend(parse_rule_list(rule_list));
        self
    }

    /// Append a single, already-parsed rule reference.
    pub fn with_rule(mut self, reference: RuleReference) -> Self {
        self.rules.push(reference);
        self
    }

    pub fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Record a sibling field's value for cross-field rules.
    pub fn with_peer(mut self, name: &str, value: &str) -> Self {
        self.peers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_identifier(mut self, identifier: &str) -> Self {
        self.identifier = Some(identifier.to_string());
        self
    }

    fn field_input(&self) -> FieldInput<'_> {
        FieldInput {
            value: &self.value,
            kind: self.kind,
            checked: self.checked,
            peers: &self.peers,
        }
    }

    /// The label substituted for `%l`: the explicit label, else the
    /// identifier, else `"This field"`.
    fn effective_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.identifier.as_deref())
            .unwrap_or(FALLBACK_LABEL)
    }
}

/// One violated rule: the offending value, the rule and parameter involved,
/// and the rendered message. Ownership passes to the caller on return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub value: String,
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// The rendered, human-readable message.
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// Runs rule references against values using an explicit, immutable registry.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    registry: Registry,
}

impl Validator {
    /// A validator over the builtin rule catalog.
    pub fn new() -> Self {
        Self {
            registry: Registry::builtin(),
        }
    }

    /// A validator over a caller-assembled catalog.
    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Validate one request, returning every violated rule in rule order.
    ///
    /// Rules whose names are not in the registry are skipped without
    /// producing an error; a typo in a rule-string never blocks the
    /// remaining rules. Use [`Validator::try_validate`] to surface those
    /// as configuration errors instead. Execution never short-circuits: one
    /// request can accumulate an error per failing rule.
    pub fn validate(&self, request: &ValidationRequest) -> Vec<ValidationError> {
        let input = request.field_input();
        let mut errors = Vec::new();

        for reference in &request.rules {
            let Some(rule) = self.registry.get(&reference.name) else {
                log::debug!("skipping unknown validation rule `{}`", reference.name);
                continue;
            };
            if let Some(error) = self.check(rule, &input, reference, request) {
                errors.push(error);
            }
        }

        errors
    }

    /// Strict-mode counterpart of [`Validator::validate`].
    ///
    /// Misconfiguration is reported on a separate channel instead of being
    /// dropped: an unknown rule name yields [`ConfigError::UnknownRule`], and
    /// a parameterized rule referenced without a usable parameter yields
    /// [`ConfigError::MissingParameter`]. Validation failures still come back
    /// as the `Ok` list.
    pub fn try_validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<Vec<ValidationError>, ConfigError> {
        let input = request.field_input();
        let mut errors = Vec::new();

        for reference in &request.rules {
            let rule = self
                .registry
                .get(&reference.name)
                .ok_or_else(|| ConfigError::UnknownRule {
                    name: reference.name.clone(),
                })?;

            let usable_parameter = reference
                .parameter
                .as_deref()
                .is_some_and(|p| !p.is_empty());
            if rule.parameter_required && !usable_parameter {
                return Err(ConfigError::MissingParameter {
                    rule: rule.name.clone(),
                });
            }

            if let Some(error) = self.check(rule, &input, reference, request) {
                errors.push(error);
            }
        }

        Ok(errors)
    }

    /// Validate a batch of requests, concatenating results in request order.
    ///
    /// The total error count equals the sum of per-request counts; nothing
    /// is deduplicated or reordered.
    pub fn validate_all(&self, requests: &[ValidationRequest]) -> Vec<ValidationError> {
        requests
            .iter()
            .flat_map(|request| self.validate(request))
            .collect()
    }

    /// Strict-mode batch validation; stops at the first configuration error.
    pub fn try_validate_all(
        &self,
        requests: &[ValidationRequest],
    ) -> Result<Vec<ValidationError>, ConfigError> {
        let mut errors = Vec::new();
        for request in requests {
            errors.extend(self.try_validate(request)?);
        }
        Ok(errors)
    }

    /// Run one resolved rule; `Some` is a violation with its rendered message.
    fn check(
        &self,
        rule: &RuleDefinition,
        input: &FieldInput<'_>,
        reference: &RuleReference,
        request: &ValidationRequest,
    ) -> Option<ValidationError> {
        let parameter = reference.parameter.as_deref();
        if (rule.hook)(input, parameter) {
            return None;
        }

        let template = request.message.as_deref().unwrap_or(&rule.message);
        let error = render_message(template, request.effective_label(), parameter);

        Some(ValidationError {
            value: request.value.clone(),
            rule: rule.name.clone(),
            parameter: reference.parameter.clone(),
            error,
            identifier: request.identifier.clone(),
        })
    }
}
