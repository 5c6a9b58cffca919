//! Standard JSON via serde_json

use super::Encoding;
use crate::error::{Error, Result};
use marshal_bench_domain::Record;

/// serde_json `to_vec` / `from_slice`
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJson;

impl SerdeJson {
    /// Report label
    pub const NAME: &'static str = "serde_json";
}

impl Encoding for SerdeJson {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        serde_json::to_vec(record).map_err(|e| Error::marshal(Self::NAME, e))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record> {
        serde_json::from_slice(bytes).map_err(|e| Error::unmarshal(Self::NAME, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Phase;

    #[test]
    fn test_malformed_input_is_unmarshal_failure() {
        let err = SerdeJson.decode(b"{\"id\":").unwrap_err();
        assert!(matches!(
            err,
            Error::EncodingFailure {
                phase: Phase::Unmarshal,
                ..
            }
        ));
    }
}
