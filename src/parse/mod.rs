//! Parsing pipeline for groupconf
//!
//! Three stages, each a small pure unit:
//!
//! 1. [`line::classify`] — decides whether a line is blank/comment, a group
//!    header, a setting, or unrecognized.
//! 2. [`value::coerce`] — turns a raw setting value into a typed [`Value`]
//!    (bool, int, float, one-level list, string fallback). Total: never
//!    fails.
//! 3. [`builder::ConfigBuilder`] — folds classified lines and override
//!    directives into the final [`crate::config::Config`], enforcing the
//!    grammar invariants.
//!
//! # Example
//!
//! ```
//! use groupconf::parse::value::{coerce, Value};
//!
//! assert_eq!(coerce("8080"), Value::Int(8080));
//! assert_eq!(coerce("a, b"), Value::List(vec![
//!     Value::Str("a".to_string()),
//!     Value::Str("b".to_string()),
//! ]));
//! ```

pub mod builder;
pub mod line;
pub mod value;

pub use builder::ConfigBuilder;
pub use line::{classify, Line};
pub use value::{coerce, Value};
