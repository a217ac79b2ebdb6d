//! Custom environment values handed to the document under test.
//!
//! The store is a flat map from name to `EnvValue`. Names that would shadow a
//! top-level name or a property the engine synthesizes itself are silently
//! dropped, so a document always sees the built-ins it expects.

mod reserved;
mod value;

use std::collections::{BTreeMap, HashMap};

use log::warn;
use serde::Deserialize;

pub use reserved::is_reserved;
pub use value::EnvValue;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, EnvValue>")]
pub struct EnvironmentConfig {
    values: HashMap<String, EnvValue>,
}

impl EnvironmentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom value. Reserved names are ignored; an accepted name
    /// replaces any earlier value.
    pub fn set_environment_value(&mut self, name: &str, value: impl Into<EnvValue>) -> &mut Self {
        if is_reserved(name) {
            warn!("environment: ignoring value for reserved name '{name}'");
            return self;
        }
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&EnvValue> {
        self.values.get(name)
    }

    pub fn environment_values(&self) -> &HashMap<String, EnvValue> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Accepted names in sorted order, for stable reporting.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl From<BTreeMap<String, EnvValue>> for EnvironmentConfig {
    fn from(raw: BTreeMap<String, EnvValue>) -> Self {
        let mut config = Self::new();
        for (name, value) in raw {
            config.set_environment_value(&name, value);
        }
        config
    }
}
