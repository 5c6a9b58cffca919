//! Avro binary datums via apache-avro
//!
//! Records are mapped to an Avro `Value` by hand and written as a single
//! schemaless datum (no container file header). Timestamps travel as RFC 3339
//! strings and `map_int` keys as decimal strings, since Avro maps only allow
//! string keys.

use super::Encoding;
use crate::error::{Error, Result};
use apache_avro::Schema;
use apache_avro::types::Value;
use chrono::{DateTime, SecondsFormat, Utc};
use marshal_bench_domain::Record;
use std::collections::HashMap;

/// Writer schema for [`Record`] datums
pub const RECORD_SCHEMA: &str = r#"
{
    "type": "record",
    "name": "data",
    "fields": [
        { "name": "id",         "type": "long" },
        { "name": "date",       "type": "string" },
        { "name": "namea",      "type": "string" },
        { "name": "nameb",      "type": "string" },
        { "name": "namec",      "type": "string" },
        { "name": "count1",     "type": "long" },
        { "name": "count2",     "type": "long" },
        { "name": "count3",     "type": "long" },
        { "name": "amt1",       "type": "double" },
        { "name": "amt2",       "type": "double" },
        { "name": "flag",       "type": "boolean" },
        { "name": "str_array",  "type": { "type": "array", "items": "string" } },
        { "name": "map_string", "type": { "type": "map", "values": "string" } },
        { "name": "map_int",    "type": { "type": "map", "values": "long" } }
    ]
}
"#;

/// apache-avro `to_avro_datum` / `from_avro_datum` against [`RECORD_SCHEMA`]
#[derive(Debug, Clone)]
pub struct AvroBinary {
    schema: Schema,
}

impl AvroBinary {
    /// Report label
    pub const NAME: &'static str = "avro binary";

    /// Parse [`RECORD_SCHEMA`] and build the encoding
    pub fn new() -> Result<Self> {
        Self::with_schema(RECORD_SCHEMA)
    }

    fn with_schema(schema: &str) -> Result<Self> {
        let schema = Schema::parse_str(schema).map_err(|e| Error::schema(e.to_string()))?;
        Ok(Self { schema })
    }
}

impl Encoding for AvroBinary {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        apache_avro::to_avro_datum(&self.schema, to_value(record))
            .map_err(|e| Error::marshal(Self::NAME, e))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record> {
        let mut reader = bytes;
        let value = apache_avro::from_avro_datum(&self.schema, &mut reader, None)
            .map_err(|e| Error::unmarshal(Self::NAME, e))?;
        from_value(value).map_err(|e| Error::unmarshal(Self::NAME, e))
    }
}

fn to_value(record: &Record) -> Value {
    Value::Record(vec![
        ("id".to_string(), Value::Long(record.id)),
        (
            "date".to_string(),
            Value::String(record.date.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        ),
        ("namea".to_string(), Value::String(record.name_a.clone())),
        ("nameb".to_string(), Value::String(record.name_b.clone())),
        ("namec".to_string(), Value::String(record.name_c.clone())),
        ("count1".to_string(), Value::Long(record.count1)),
        ("count2".to_string(), Value::Long(record.count2)),
        ("count3".to_string(), Value::Long(record.count3)),
        ("amt1".to_string(), Value::Double(record.amt1)),
        ("amt2".to_string(), Value::Double(record.amt2)),
        ("flag".to_string(), Value::Boolean(record.flag)),
        (
            "str_array".to_string(),
            Value::Array(
                record
                    .str_array
                    .iter()
                    .map(|s| Value::String(s.clone()))
                    .collect(),
            ),
        ),
        (
            "map_string".to_string(),
            Value::Map(
                record
                    .map_str
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ),
        ),
        (
            "map_int".to_string(),
            Value::Map(
                record
                    .map_int
                    .iter()
                    .map(|(k, v)| (k.to_string(), Value::Long(*v)))
                    .collect(),
            ),
        ),
    ])
}

fn from_value(value: Value) -> std::result::Result<Record, String> {
    let fields = match value {
        Value::Record(fields) => fields,
        other => return Err(format!("expected record datum, found {other:?}")),
    };
    let mut fields = Fields(fields.into_iter());

    Ok(Record {
        id: fields.long("id")?,
        date: fields.timestamp("date")?,
        name_a: fields.string("namea")?,
        name_b: fields.string("nameb")?,
        name_c: fields.string("namec")?,
        count1: fields.long("count1")?,
        count2: fields.long("count2")?,
        count3: fields.long("count3")?,
        amt1: fields.double("amt1")?,
        amt2: fields.double("amt2")?,
        flag: fields.boolean("flag")?,
        str_array: fields.string_array("str_array")?,
        map_str: fields.string_map("map_string")?,
        map_int: fields.long_map("map_int")?,
    })
}

/// Record fields consumed in writer-schema order
struct Fields(std::vec::IntoIter<(String, Value)>);

impl Fields {
    fn next(&mut self, name: &str) -> std::result::Result<Value, String> {
        match self.0.next() {
            Some((field, value)) if field == name => Ok(value),
            Some((field, _)) => Err(format!("expected field {name}, found {field}")),
            None => Err(format!("missing field {name}")),
        }
    }

    fn long(&mut self, name: &str) -> std::result::Result<i64, String> {
        match self.next(name)? {
            Value::Long(v) => Ok(v),
            other => Err(mismatch(name, "long", &other)),
        }
    }

    fn double(&mut self, name: &str) -> std::result::Result<f64, String> {
        match self.next(name)? {
            Value::Double(v) => Ok(v),
            other => Err(mismatch(name, "double", &other)),
        }
    }

    fn boolean(&mut self, name: &str) -> std::result::Result<bool, String> {
        match self.next(name)? {
            Value::Boolean(v) => Ok(v),
            other => Err(mismatch(name, "boolean", &other)),
        }
    }

    fn string(&mut self, name: &str) -> std::result::Result<String, String> {
        match self.next(name)? {
            Value::String(v) => Ok(v),
            other => Err(mismatch(name, "string", &other)),
        }
    }

    fn timestamp(&mut self, name: &str) -> std::result::Result<DateTime<Utc>, String> {
        let raw = self.string(name)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|e| format!("field {name}: invalid timestamp {raw:?}: {e}"))
    }

    fn string_array(&mut self, name: &str) -> std::result::Result<Vec<String>, String> {
        match self.next(name)? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(mismatch(name, "string item", &other)),
                })
                .collect(),
            other => Err(mismatch(name, "array", &other)),
        }
    }

    fn string_map(&mut self, name: &str) -> std::result::Result<HashMap<String, String>, String> {
        match self.next(name)? {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(key, value)| match value {
                    Value::String(s) => Ok((key, s)),
                    other => Err(mismatch(name, "string value", &other)),
                })
                .collect(),
            other => Err(mismatch(name, "map", &other)),
        }
    }

    fn long_map(&mut self, name: &str) -> std::result::Result<HashMap<i64, i64>, String> {
        match self.next(name)? {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(key, value)| {
                    let parsed = key
                        .parse::<i64>()
                        .map_err(|e| format!("field {name}: invalid key {key:?}: {e}"))?;
                    match value {
                        Value::Long(v) => Ok((parsed, v)),
                        other => Err(mismatch(name, "long value", &other)),
                    }
                })
                .collect(),
            other => Err(mismatch(name, "map", &other)),
        }
    }
}

fn mismatch(name: &str, expected: &str, found: &Value) -> String {
    format!("field {name}: expected {expected}, found {found:?}")
}
