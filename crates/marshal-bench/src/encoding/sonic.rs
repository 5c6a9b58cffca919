//! SIMD-accelerated JSON via sonic-rs

use super::Encoding;
use crate::error::{Error, Result};
use marshal_bench_domain::Record;

/// sonic-rs `to_vec` / `from_slice`
#[derive(Debug, Clone, Copy, Default)]
pub struct SonicJson;

impl SonicJson {
    /// Report label
    pub const NAME: &'static str = "sonic-rs";
}

impl Encoding for SonicJson {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        sonic_rs::to_vec(record).map_err(|e| Error::marshal(Self::NAME, e))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record> {
        sonic_rs::from_slice(bytes).map_err(|e| Error::unmarshal(Self::NAME, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_truncated_input() {
        assert!(SonicJson.decode(b"[1, 2").is_err());
    }
}
