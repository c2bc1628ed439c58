//! CBOR status list documents.
//!
//! The list is a map with text keys `bits` and `lst`, where `lst` is a byte
//! string holding the compressed buffer:
//!
//! ```text
//! A2                      map(2)
//!    64 62697473          "bits"
//!    01                   1
//!    63 6C7374            "lst"
//!    58 BD 78DA...        bytes(189)
//! ```
//!
//! A CWT claims map holding the list under claim key 65533 (or the text key
//! `status_list`) is accepted as well.

use crate::error::{FormatError, Result};
use crate::json::STATUS_LIST_CLAIM;
use ciborium::Value;
use oxistatus_core::StatusList;

/// CWT claim key registered for the status list.
pub const STATUS_LIST_CWT_CLAIM: u64 = 65533;

/// Parse a CBOR status list from bytes.
pub fn from_cbor_slice(input: &[u8]) -> Result<StatusList> {
    let value: Value = ciborium::de::from_reader(input)?;
    from_cbor_value(value)
}

/// Parse a CBOR status list from an already decoded value.
pub fn from_cbor_value(value: Value) -> Result<StatusList> {
    let entries = into_map(value)?;

    if let Some(inner) = entries.iter().find_map(|(k, v)| is_wrapper_key(k).then_some(v)) {
        return from_cbor_value(inner.clone());
    }

    let mut bits = None;
    let mut lst = None;
    let mut aggregation_uri = None;

    for (key, value) in entries {
        let Value::Text(key) = key else {
            continue;
        };
        match key.as_str() {
            "bits" => bits = Some(expect_uint("bits", value)?),
            "lst" => match value {
                Value::Bytes(bytes) => lst = Some(bytes),
                _ => return Err(FormatError::invalid_field("lst", "expected a byte string")),
            },
            "aggregation_uri" => match value {
                Value::Text(uri) => aggregation_uri = Some(uri),
                _ => {
                    return Err(FormatError::invalid_field(
                        "aggregation_uri",
                        "expected a text string",
                    ));
                }
            },
            _ => {}
        }
    }

    let list = StatusList {
        bits: bits.ok_or_else(|| FormatError::missing_field("bits"))?,
        lst: lst.ok_or_else(|| FormatError::missing_field("lst"))?,
        aggregation_uri,
    };
    tracing::debug!(
        bits = list.bits,
        compressed_len = list.lst.len(),
        "parsed CBOR status list"
    );
    Ok(list)
}

fn into_map(value: Value) -> Result<Vec<(Value, Value)>> {
    match value {
        Value::Map(entries) => Ok(entries),
        _ => Err(FormatError::invalid_field(
            STATUS_LIST_CLAIM,
            "expected a CBOR map",
        )),
    }
}

fn is_wrapper_key(key: &Value) -> bool {
    match key {
        Value::Integer(i) => u64::try_from(*i) == Ok(STATUS_LIST_CWT_CLAIM),
        Value::Text(t) => t == STATUS_LIST_CLAIM,
        _ => false,
    }
}

fn expect_uint(field: &'static str, value: Value) -> Result<u64> {
    match value {
        Value::Integer(i) => u64::try_from(i)
            .map_err(|_| FormatError::invalid_field(field, "expected an unsigned integer")),
        _ => Err(FormatError::invalid_field(field, "expected an integer")),
    }
}
