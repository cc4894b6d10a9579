//! # formcheck
//!
//! A small, synchronous, rule-based validation engine for form-style values.
//!
//! The pieces compose bottom-up:
//!
//! - [`registry`] holds the catalog of named rules, each backed by a pure
//!   hook predicate over a value and an optional parameter.
//! - [`parser`] turns compact rule-strings (`required`, `minLength[8]`) into
//!   structured [`RuleReference`]s.
//! - [`message`] renders violation messages from `%l`/`%p` templates.
//! - [`validator`] runs ordered rule references against one value or a batch
//!   of requests, producing ordered [`ValidationError`] lists.
//!
//! Everything is a pure function of its inputs: no I/O, no globals, no
//! suspension points. The registry is built once and passed into the
//! validator explicitly, so tests can run in parallel without shared-state
//! hazards. Presentation concerns (discovering marked-up controls, painting
//! error markup) belong to an adapter layered on top; this crate only
//! exposes the plain request and error shapes such an adapter consumes.
//!
//! ```
//! use formcheck::{ValidationRequest, Validator};
//!
//! let validator = Validator::new();
//! let request = ValidationRequest::new("person@example")
//!     .with_rules("required,email")
//!     .with_label("Email");
//!
//! let errors = validator.validate(&request);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].rule, "email");
//! ```

pub mod error;
pub mod message;
pub mod parser;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod validator;

pub use error::ConfigError;
pub use message::render_message;
pub use parser::{parse_rule, parse_rule_list, RuleReference};
pub use registry::{FieldInput, Hook, InputKind, Registry, RuleDefinition};
pub use rules::luhn_checksum;
pub use validator::{ValidationError, ValidationRequest, Validator};
