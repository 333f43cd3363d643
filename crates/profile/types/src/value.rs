use crate::FieldKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;

/// A typed capability field value at its native width and signedness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Bool(bool),
    U32(u32),
    U64(u64),
    I32(i32),
    F32(f32),
    Enum(String),
    StringSet(BTreeSet<String>),
}

impl FieldValue {
    pub fn string_set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldValue::StringSet(items.into_iter().map(Into::into).collect())
    }

    /// Convert a JSON value into the declared field kind.
    ///
    /// Returns `None` when the JSON shape does not match the kind or a
    /// number does not fit the field's width.
    pub fn from_json(kind: FieldKind, value: &Value) -> Option<Self> {
        match kind {
            FieldKind::Bool => value.as_bool().map(FieldValue::Bool),
            FieldKind::U32(_) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .map(FieldValue::U32),
            FieldKind::U64(_) => value.as_u64().map(FieldValue::U64),
            FieldKind::I32(_) => value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .map(FieldValue::I32),
            FieldKind::F32(_) => {
                let n = value.as_f64()?;
                let narrowed = n as f32;
                narrowed.is_finite().then_some(FieldValue::F32(narrowed))
            }
            FieldKind::Enum => value.as_str().map(|s| FieldValue::Enum(s.to_string())),
            FieldKind::StringSet => {
                let items = value.as_array()?;
                let mut set = BTreeSet::new();
                for item in items {
                    set.insert(item.as_str()?.to_string());
                }
                Some(FieldValue::StringSet(set))
            }
        }
    }

    /// Whether this value has the shape the kind declares.
    pub fn matches_kind(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Bool(_), FieldKind::Bool)
                | (FieldValue::U32(_), FieldKind::U32(_))
                | (FieldValue::U64(_), FieldKind::U64(_))
                | (FieldValue::I32(_), FieldKind::I32(_))
                | (FieldValue::F32(_), FieldKind::F32(_))
                | (FieldValue::Enum(_), FieldKind::Enum)
                | (FieldValue::StringSet(_), FieldKind::StringSet)
        )
    }

    /// The document form of this value; `from_json` reads it back.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Bool(b) => Value::Bool(*b),
            FieldValue::U32(n) => Value::from(*n),
            FieldValue::U64(n) => Value::from(*n),
            FieldValue::I32(n) => Value::from(*n),
            FieldValue::F32(n) => serde_json::Number::from_f64(f64::from(*n))
                .map_or(Value::Null, Value::Number),
            FieldValue::Enum(s) => Value::String(s.clone()),
            FieldValue::StringSet(set) => {
                Value::Array(set.iter().cloned().map(Value::String).collect())
            }
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::U32(n) => write!(f, "{}", n),
            FieldValue::U64(n) => write!(f, "{}", n),
            FieldValue::I32(n) => write!(f, "{}", n),
            FieldValue::F32(n) => write!(f, "{}", n),
            FieldValue::Enum(s) => f.write_str(s),
            FieldValue::StringSet(set) => {
                let items: Vec<&str> = set.iter().map(String::as_str).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}
