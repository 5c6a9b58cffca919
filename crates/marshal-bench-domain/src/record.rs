//! Synthetic record under test
//!
//! A flat business-like entity: scalars, a list of strings and two maps.
//! Field names on the wire match the historical JSON layout
//! (`namea`, `map_string`, ...), so payload sizes stay comparable across runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One synthetic record.
///
/// Records are created in bulk by the generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Numeric identifier
    pub id: i64,
    /// Creation timestamp
    pub date: DateTime<Utc>,
    /// First name string
    #[serde(rename = "namea")]
    pub name_a: String,
    /// Second name string
    #[serde(rename = "nameb")]
    pub name_b: String,
    /// Third name string
    #[serde(rename = "namec")]
    pub name_c: String,
    /// First counter
    pub count1: i64,
    /// Second counter
    pub count2: i64,
    /// Third counter
    pub count3: i64,
    /// First amount
    pub amt1: f64,
    /// Second amount
    pub amt2: f64,
    /// Boolean flag
    pub flag: bool,
    /// Variable-length list of strings
    pub str_array: Vec<String>,
    /// String to string mapping
    #[serde(rename = "map_string")]
    pub map_str: HashMap<String, String>,
    /// Integer to integer mapping
    #[serde(rename = "map_int", with = "int_key_map")]
    pub map_int: HashMap<i64, i64>,
}

impl Record {
    /// Largest collection length across `str_array`, `map_str` and `map_int`
    #[must_use]
    pub fn max_collection_len(&self) -> usize {
        self.str_array
            .len()
            .max(self.map_str.len())
            .max(self.map_int.len())
    }
}

/// Integer-keyed maps as JSON objects with decimal string keys.
///
/// Every JSON encoder agrees on string keys; native integer-key support
/// differs between them.
mod int_key_map {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::HashMap;

    pub fn serialize<S>(map: &HashMap<i64, i64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(map.iter().map(|(key, value)| (key.to_string(), value)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<i64, i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, i64>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, value)| {
                key.parse::<i64>()
                    .map(|key| (key, value))
                    .map_err(|e| D::Error::custom(format!("invalid map_int key {key:?}: {e}")))
            })
            .collect()
    }
}
