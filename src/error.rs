//! Configuration-error channel for the validation engine.
//!
//! Validation failures are never errors in the Rust sense: they come back as
//! `ValidationError` values in the result list. `ConfigError` covers the other
//! taxonomy entirely, mistakes in how the validator was configured (a typo in
//! a rule-string, a parameterized rule referenced without its parameter, a
//! duplicate catalog entry). The permissive `validate` path never surfaces
//! these; the strict `try_validate` path does.

use thiserror::Error;

/// Errors describing misconfiguration of rules or the registry, as opposed to
/// data that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A rule reference named a rule that is not in the registry.
    #[error("unknown validation rule `{name}`")]
    UnknownRule { name: String },

    /// A rule that requires a parameter was referenced without one.
    #[error("validation rule `{rule}` requires a parameter")]
    MissingParameter { rule: String },

    /// An attempt was made to register a rule under a name already taken.
    #[error("validation rule `{name}` is already registered")]
    DuplicateRule { name: String },
}
