//! Encodings under test
//!
//! Each backend is consumed only through the two operations of [`Encoding`]:
//! turn a record into bytes, and turn those bytes back into a record. The
//! runner never looks below that boundary.

pub mod avro;
pub mod json;
pub mod simd;
pub mod sonic;

pub use avro::AvroBinary;
pub use json::SerdeJson;
pub use simd::SimdJson;
pub use sonic::SonicJson;

use crate::error::Result;
use marshal_bench_domain::Record;

/// A serialization backend benchmarked by the runner
pub trait Encoding {
    /// Label used in logs and reports
    fn name(&self) -> &str;

    /// Marshal a record into a freshly allocated buffer
    fn encode(&self, record: &Record) -> Result<Vec<u8>>;

    /// Unmarshal a record from bytes produced by [`Encoding::encode`]
    fn decode(&self, bytes: &[u8]) -> Result<Record>;
}

impl<E: Encoding + ?Sized> Encoding for Box<E> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        (**self).encode(record)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record> {
        (**self).decode(bytes)
    }
}

/// The standard suite, in reporting order.
///
/// Fails only if the Avro schema constant does not parse.
pub fn default_encodings() -> Result<Vec<Box<dyn Encoding>>> {
    Ok(vec![
        Box::new(SerdeJson),
        Box::new(SonicJson),
        Box::new(SimdJson::new()),
        Box::new(AvroBinary::new()?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suite_order() {
        let names: Vec<String> = default_encodings()
            .unwrap()
            .iter()
            .map(|encoding| encoding.name().to_string())
            .collect();
        assert_eq!(names, ["serde_json", "sonic-rs", "simd-json", "avro binary"]);
    }
}
