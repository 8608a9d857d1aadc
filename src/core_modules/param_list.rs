// THEORY:
// A host persists plugin settings as a flat map of string keys to string values.
// `ParamList` is that carrier. Keys are matched case-insensitively because hosts
// and saved configurations disagree on capitalisation ("Window" vs "window").
// Values stay strings until a caller asks for a typed view of one of them.

use crate::core_modules::filter_error::{FilterError, FilterResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Case-insensitive string-keyed configuration map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ParamList {
    entries: BTreeMap<String, String>,
}

impl ParamList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, replacing any entry that differs only in case.
    pub fn put(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.to_lowercase(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Reads `key` as an integer.
    ///
    /// Integral decimals such as `"5.0"` are accepted, since spinner controls store doubles.
    pub fn get_int_value(&self, key: &str) -> FilterResult<i64> {
        let raw = self.get(key).ok_or_else(|| FilterError::Config {
            key: key.to_string(),
            message: "missing entry".to_string(),
        })?;
        let trimmed = raw.trim();

        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(value);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
            _ => Err(FilterError::Config {
                key: key.to_string(),
                message: format!("'{}' is not an integer", raw),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn to_json(&self) -> FilterResult<String> {
        serde_json::to_string(self).map_err(|e| FilterError::Config {
            key: String::new(),
            message: e.to_string(),
        })
    }

    pub fn from_json(text: &str) -> FilterResult<Self> {
        serde_json::from_str(text).map_err(|e| FilterError::Config {
            key: String::new(),
            message: e.to_string(),
        })
    }
}

impl From<BTreeMap<String, String>> for ParamList {
    fn from(map: BTreeMap<String, String>) -> Self {
        let mut list = ParamList::new();
        for (key, value) in map {
            list.put(&key, value);
        }
        list
    }
}

impl From<ParamList> for BTreeMap<String, String> {
    fn from(list: ParamList) -> Self {
        list.entries
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for ParamList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut list = ParamList::new();
        for (key, value) in iter {
            list.put(key.as_ref(), value);
        }
        list
    }
}
