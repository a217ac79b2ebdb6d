use std::collections::BTreeMap;

use serde::Deserialize;

/// A custom environment value: any of the element types a document can read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<EnvValue>),
    Map(BTreeMap<String, EnvValue>),
}

impl EnvValue {
    /// Integer view of the value. Floats are truncated.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// An empty structured value.
    pub fn empty_map() -> Self {
        Self::Map(BTreeMap::new())
    }
}

impl From<bool> for EnvValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for EnvValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for EnvValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for EnvValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for EnvValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T: Into<EnvValue>> From<Vec<T>> for EnvValue {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, EnvValue>> for EnvValue {
    fn from(v: BTreeMap<String, EnvValue>) -> Self {
        Self::Map(v)
    }
}
