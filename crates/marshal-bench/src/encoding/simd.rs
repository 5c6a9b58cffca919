//! SIMD-accelerated JSON via simd-json
//!
//! simd-json parses in place and needs a mutable buffer, so decode copies the
//! input into a reusable scratch vector first. The copy is part of the
//! measured unmarshal time.

use super::Encoding;
use crate::error::{Error, Result};
use marshal_bench_domain::Record;
use std::cell::RefCell;

/// simd-json serde `to_vec` / `from_slice`
#[derive(Debug, Default)]
pub struct SimdJson {
    scratch: RefCell<Vec<u8>>,
}

impl SimdJson {
    /// Report label
    pub const NAME: &'static str = "simd-json";

    /// Create the encoding with an empty scratch buffer
    pub fn new() -> Self {
        Self::default()
    }
}

impl Encoding for SimdJson {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        simd_json::serde::to_vec(record).map_err(|e| Error::marshal(Self::NAME, e))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Record> {
        let mut scratch = self.scratch.borrow_mut();
        scratch.clear();
        scratch.extend_from_slice(bytes);
        simd_json::serde::from_slice(scratch.as_mut_slice())
            .map_err(|e| Error::unmarshal(Self::NAME, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_left_untouched() {
        let encoding = SimdJson::new();
        let input = br#"{"id": 1}"#.to_vec();
        let before = input.clone();
        assert!(encoding.decode(&input).is_err());
        assert_eq!(input, before);
    }
}
