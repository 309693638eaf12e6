use std::fmt;

use serde::ser::{Serialize, Serializer};

/// A typed setting value
///
/// Coercion is total: every raw string maps to exactly one variant, with
/// `Str` as the universal fallback. Lists are one level deep and hold only
/// the primitive variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<Value>),
    Str(String),
}

impl Value {
    /// Returns the boolean payload, or `None` for any other variant
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
        }
    }
}

/// Strip matching surrounding quotes, if any
///
/// Opening and closing quote must be the same character (`"` or `'`).
fn strip_quotes(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if first == last && (first == '"' || first == '\'') {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

/// Coerce one scalar token: quoted string, boolean, integer, float, else
/// plain string
///
/// Booleans come before numbers, so the token set deliberately excludes
/// `1`/`0` (those must stay integers).
fn coerce_scalar(s: &str) -> Value {
    if let Some(inner) = strip_quotes(s) {
        return Value::Str(inner.trim().to_string());
    }
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" => return Value::Bool(true),
        "false" | "no" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return Value::Float(f);
    }
    Value::Str(s.to_string())
}

/// Coerce a raw setting value into a [`Value`]
///
/// Never fails. A quoted value is taken as a single string before the list
/// rule applies, so quoted commas do not produce lists. A comma anywhere
/// else splits the value into a one-level list of coerced scalars.
pub fn coerce(raw: &str) -> Value {
    let trimmed = raw.trim();

    if strip_quotes(trimmed).is_some() {
        return coerce_scalar(trimmed);
    }

    if trimmed.contains(',') {
        let items = trimmed
            .split(',')
            .map(|part| coerce_scalar(part.trim()))
            .collect();
        return Value::List(items);
    }

    coerce_scalar(trimmed)
}
