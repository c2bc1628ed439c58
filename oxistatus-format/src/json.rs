//! JSON status list documents.
//!
//! ```json
//! {"bits": 8, "lst": "eJzbuRgAAhcBXQ"}
//! ```
//!
//! The `lst` member carries the compressed buffer in base64url. A claims
//! object holding the list under `status_list` is accepted as well.

use crate::error::{FormatError, Result};
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use oxistatus_core::StatusList;
use serde::Deserialize;
use serde_json::Value;

/// Claims member that wraps the status list in a status list token payload.
pub const STATUS_LIST_CLAIM: &str = "status_list";

/// base64url decoder that accepts input with or without `=` padding.
const LST_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Deserialize)]
struct JsonStatusList {
    bits: u64,
    lst: String,
    #[serde(default)]
    aggregation_uri: Option<String>,
}

impl JsonStatusList {
    fn into_status_list(self) -> Result<StatusList> {
        let lst = decode_lst(&self.lst)?;
        Ok(StatusList {
            bits: self.bits,
            lst,
            aggregation_uri: self.aggregation_uri,
        })
    }
}

/// Decode the base64url `lst` member into compressed bytes.
pub fn decode_lst(lst: &str) -> Result<Vec<u8>> {
    Ok(LST_ENGINE.decode(lst.trim())?)
}

/// Parse a JSON status list from text.
pub fn from_json_str(input: &str) -> Result<StatusList> {
    from_json_value(serde_json::from_str(input)?)
}

/// Parse a JSON status list from UTF-8 bytes.
pub fn from_json_slice(input: &[u8]) -> Result<StatusList> {
    from_json_value(serde_json::from_slice(input)?)
}

/// Parse a JSON status list from an already decoded value.
pub fn from_json_value(value: Value) -> Result<StatusList> {
    let Value::Object(mut object) = value else {
        return Err(FormatError::invalid_field(
            STATUS_LIST_CLAIM,
            "expected a JSON object",
        ));
    };

    let body = match object.remove(STATUS_LIST_CLAIM) {
        Some(inner) => inner,
        None => Value::Object(object),
    };

    let list: JsonStatusList = serde_json::from_value(body)?;
    let list = list.into_status_list()?;
    tracing::debug!(
        bits = list.bits,
        compressed_len = list.lst.len(),
        "parsed JSON status list"
    );
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BYTES_B64: &str = "eJzbuRgAAhcBXQ";
    const TWO_BYTES: [u8; 10] = [0x78, 0x9C, 0xDB, 0xB9, 0x18, 0x00, 0x02, 0x17, 0x01, 0x5D];

    #[test]
    fn test_decode_lst() {
        assert_eq!(decode_lst(TWO_BYTES_B64).unwrap(), TWO_BYTES);
    }

    #[test]
    fn test_decode_lst_padded() {
        assert_eq!(decode_lst("eJzbuRgAAhcBXQ==").unwrap(), TWO_BYTES);
    }

    #[test]
    fn test_decode_lst_rejects_standard_alphabet() {
        assert!(matches!(decode_lst("ab+/"), Err(FormatError::Base64(_))));
    }

    #[test]
    fn test_bare_object() {
        let list = from_json_str(r#"{"bits": 8, "lst": "eJzbuRgAAhcBXQ"}"#).unwrap();
        assert_eq!(list.bits, 8);
        assert_eq!(list.lst, TWO_BYTES);
        assert_eq!(list.aggregation_uri, None);
    }

    #[test]
    fn test_wrapped_object() {
        let input = r#"{
            "sub": "https://example.com/statuslists/1",
            "iat": 1686920170,
            "status_list": {
                "bits": 2,
                "lst": "eJzbuRgAAhcBXQ",
                "aggregation_uri": "https://example.com/statuslists"
            }
        }"#;
        let list = from_json_slice(input.as_bytes()).unwrap();
        assert_eq!(list.bits, 2);
        assert_eq!(
            list.aggregation_uri.as_deref(),
            Some("https://example.com/statuslists")
        );
    }

    #[test]
    fn test_unsupported_width_survives_parsing() {
        let list = from_json_str(r#"{"bits": 3, "lst": "eJzbuRgAAhcBXQ"}"#).unwrap();
        assert_eq!(list.bits, 3);
        assert!(list.bit_width().is_err());
    }

    #[test]
    fn test_missing_member() {
        let err = from_json_str(r#"{"bits": 1}"#).unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));
        assert!(err.to_string().contains("lst"));
    }

    #[test]
    fn test_wrong_member_type() {
        assert!(from_json_str(r#"{"bits": "one", "lst": ""}"#).is_err());
        assert!(from_json_str(r#"{"bits": -1, "lst": ""}"#).is_err());
    }

    #[test]
    fn test_not_an_object() {
        let err = from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, FormatError::InvalidField { .. }));
    }

    #[test]
    fn test_bad_base64() {
        let err = from_json_str(r#"{"bits": 1, "lst": "not base64!"}"#).unwrap_err();
        assert!(matches!(err, FormatError::Base64(_)));
    }
}
