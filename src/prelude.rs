//! Prelude for the validation engine.
//!
//! Re-exports the types and functions most callers need, so adapter code can
//! pull the whole surface in with one `use`.

pub use crate::error::ConfigError;
pub use crate::message::render_message;
pub use crate::parser::{parse_rule, parse_rule_list, RuleReference};
pub use crate::registry::{FieldInput, Hook, InputKind, Registry, RuleDefinition};
pub use crate::validator::{ValidationError, ValidationRequest, Validator};
