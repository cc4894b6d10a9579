//! Rule catalog and the types hooks are written against.
//!
//! The registry is a constructed-once, read-only value that callers pass into
//! a [`Validator`](crate::validator::Validator) explicitly. It is not an
//! ambient global, so parallel test runs never share mutable state.

use std::collections::BTreeMap;

use serde_derive::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The kind of form control a value came from, resolved by the caller or
/// adapter before a request is built.
///
/// The `required` hook branches on this instead of inspecting the input at
/// runtime: toggle-style controls (`Checkbox`, `Radio`) are satisfied by their
/// checked state, everything else by a non-empty value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Checkbox,
    Radio,
    Select,
}

/// The value view handed to every hook.
///
/// Alongside the raw text this carries the two pieces of context the engine
/// needs but cannot derive from the value itself: the control kind (for
/// `required` on toggles) and the values of sibling fields keyed by name (for
/// `matches`). Both are resolved by the caller up front; hooks never reach
/// outside this struct.
#[derive(Debug, Clone, Copy)]
pub struct FieldInput<'a> {
    /// The textual value under validation.
    pub value: &'a str,
    /// What kind of control produced the value.
    pub kind: InputKind,
    /// Checked state for toggle-style controls; `false` for everything else.
    pub checked: bool,
    /// Sibling field values by field name, for cross-field rules.
    pub peers: &'a BTreeMap<String, String>,
}

impl<'a> FieldInput<'a> {
    /// A plain text value with no toggle state and no peers.
    pub fn text(value: &'a str) -> Self {
        static NO_PEERS: BTreeMap<String, String> = BTreeMap::new();
        Self {
            value,
            kind: InputKind::Text,
            checked: false,
            peers: &NO_PEERS,
        }
    }
}

/// The predicate backing a rule.
///
/// Hooks are pure and total: they never panic, and a malformed or missing
/// parameter makes them return `false` (fail closed) rather than raise.
pub type Hook = fn(&FieldInput<'_>, Option<&str>) -> bool;

/// A named, reusable validation rule: its violation message template,
/// human-readable description, and the hook that checks values against it.
///
/// Message templates may embed markup around the `%l`/`%p` placeholders; the
/// templater preserves it verbatim.
#[derive(Debug, Clone)]
pub struct RuleDefinition {
    /// Unique registry key, matched case-sensitively.
    pub name: String,
    /// Violation message template (`%l` = label, `%p` = parameter).
    pub message: String,
    /// What the rule checks, in plain language.
    pub description: String,
    /// An example of a valid value, where one is illustrative.
    pub example: Option<String>,
    /// Whether the rule is meaningless without a bracket parameter.
    pub parameter_required: bool,
    /// The checking predicate.
    pub hook: Hook,
}

impl RuleDefinition {
    pub fn new(
        name: &str,
        message: &str,
        description: &str,
        parameter_required: bool,
        hook: Hook,
    ) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            description: description.to_string(),
            example: None,
            parameter_required,
            hook,
        }
    }

    pub fn with_example(mut self, example: &str) -> Self {
        self.example = Some(example.to_string());
        self
    }
}

/// The catalog of validation rules.
///
/// Lookup is by exact, case-sensitive name. The builtin catalog is closed;
/// custom rules can be added through [`Registry::register`], which enforces
/// name uniqueness. Once handed to a validator the registry is never mutated.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: Vec<RuleDefinition>,
}

impl Registry {
    /// The full builtin catalog.
    pub fn builtin() -> Self {
        Self {
            rules: crate::rules::builtin_rules(),
        }
    }

    /// An empty registry, for callers assembling a custom catalog.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Find a rule by exact name.
    pub fn get(&self, name: &str) -> Option<&RuleDefinition> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Add a rule to the catalog, rejecting duplicate names.
    pub fn register(&mut self, rule: RuleDefinition) -> Result<(), ConfigError> {
        if self.get(&rule.name).is_some() {
            return Err(ConfigError::DuplicateRule { name: rule.name });
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Rule names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }

    /// All rule definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleDefinition> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
