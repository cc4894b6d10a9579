//! The rule-string mini-grammar: `name` or `name[parameter]`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_derive::{Deserialize, Serialize};

/// Non-greedy name, greedy parameter, both non-empty. A stray `[` with no
/// closing `]` (or vice versa) fails the match and the whole text is taken
/// as a plain rule name.
static RULE_WITH_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\[(.+)\]$").unwrap());

/// A parsed reference to a rule: the name and, when the rule-string carried
/// bracket syntax, its parameter.
///
/// References are not checked against any registry at parse time; resolution
/// happens when a validator executes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
}

impl RuleReference {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parameter: None,
        }
    }

    pub fn with_parameter(mut self, parameter: &str) -> Self {
        self.parameter = Some(parameter.to_string());
        self
    }
}

/// Parse a single rule-string, e.g. `minLength[8]` or `required`.
///
/// An empty string parses to a reference with an empty name; callers
/// splitting comma-lists are responsible for filtering empties (or use
/// [`parse_rule_list`], which does).
pub fn parse_rule(text: &str) -> RuleReference {
    match RULE_WITH_PARAM.captures(text) {
        Some(captures) => RuleReference {
            name: captures[1].to_string(),
            parameter: Some(captures[2].to_string()),
        },
        None => RuleReference::new(text),
    }
}

/// Split a comma-joined rule list, trim each item, drop empties, and parse
/// the rest. This is the shape rule declarations take in marker attributes,
/// e.g. `"required,email,minLength[10]"`.
pub fn parse_rule_list(text: &str) -> Vec<RuleReference> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(parse_rule)
        .collect()
}
