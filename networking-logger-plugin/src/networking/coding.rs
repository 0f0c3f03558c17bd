/// Body encoding and decoding used by the networking client
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodingError {
    #[error("failed to encode body: {0}")]
    Encode(String),
    #[error("failed to decode body: {0}")]
    Decode(String),
}

/// Serializes request bodies into bytes.
pub trait Encoder {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodingError>;
}

/// Deserializes response bytes into typed values.
pub trait Decoder {
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodingError>;
}

/// `serde_json` backed encoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonEncoder {
    pretty: bool,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit indented JSON instead of the compact form.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Encoder for JsonEncoder {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodingError> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        encoded.map_err(|e| CodingError::Encode(e.to_string()))
    }
}

/// `serde_json` backed decoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for JsonDecoder {
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodingError> {
        serde_json::from_slice(data).map_err(|e| CodingError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Login {
        user: String,
        remember: bool,
    }

    #[test]
    fn test_json_encoder_compact() {
        let login = Login {
            user: "ana".to_string(),
            remember: true,
        };
        let bytes = JsonEncoder::new().encode(&login);
        assert_eq!(
            bytes.ok(),
            Some(br#"{"user":"ana","remember":true}"#.to_vec())
        );
    }

    #[test]
    fn test_json_encoder_pretty() {
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        let bytes = JsonEncoder::pretty().encode(&map);
        assert_eq!(bytes.ok(), Some(b"{\n  \"a\": 1\n}".to_vec()));
    }

    #[test]
    fn test_json_encoder_reports_failure() {
        // JSON object keys must be strings
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], "value");
        let result = JsonEncoder::new().encode(&map);
        assert!(matches!(result, Err(CodingError::Encode(_))));
    }

    #[test]
    fn test_json_decoder() {
        let decoded: Result<Login, _> =
            JsonDecoder::new().decode(br#"{"user":"bo","remember":false}"#);
        assert_eq!(
            decoded.ok(),
            Some(Login {
                user: "bo".to_string(),
                remember: false,
            })
        );

        let broken: Result<Login, _> = JsonDecoder::new().decode(b"not json");
        assert!(matches!(broken, Err(CodingError::Decode(_))));
    }

    #[test]
    fn test_coding_error_display() {
        let err = CodingError::Encode("boom".to_string());
        assert_eq!(err.to_string(), "failed to encode body: boom");
    }
}
