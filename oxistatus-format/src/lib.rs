//! # OxiStatus Format
//!
//! Parsing of serialized status list documents into [`StatusList`] values.
//!
//! Two encodings are supported:
//!
//! - **JSON**: `{"bits": 1, "lst": "<base64url>"}`, bare or wrapped in a
//!   claims object under `status_list`
//! - **CBOR**: a map with `bits` and a byte string `lst`, bare or wrapped in
//!   a CWT claims map under claim 65533
//!
//! Parsing never inspects the compressed payload and never validates the
//! declared width; both are the reader's job.
//!
//! ## Example
//!
//! ```rust
//! use oxistatus_format::{DocumentFormat, from_slice};
//!
//! let doc = br#"{"bits": 8, "lst": "eJzbuRgAAhcBXQ"}"#;
//! assert_eq!(DocumentFormat::from_magic(doc), DocumentFormat::Json);
//!
//! let list = from_slice(doc).unwrap();
//! assert_eq!(list.bits, 8);
//! assert_eq!(list.lst.len(), 10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod cbor;
pub mod detect;
pub mod error;
pub mod json;

pub use cbor::{STATUS_LIST_CWT_CLAIM, from_cbor_slice, from_cbor_value};
pub use detect::DocumentFormat;
pub use error::{FormatError, Result};
pub use json::{decode_lst, from_json_slice, from_json_str, from_json_value};

use oxistatus_core::StatusList;
use std::io::Read;

/// Parse a document in the given format.
///
/// [`DocumentFormat::Unknown`] falls back to detection from the leading bytes.
pub fn parse(input: &[u8], format: DocumentFormat) -> Result<StatusList> {
    match format {
        DocumentFormat::Json => from_json_slice(input),
        DocumentFormat::Cbor => from_cbor_slice(input),
        DocumentFormat::Unknown => from_slice(input),
    }
}

/// Parse a document, detecting its format from the leading bytes.
pub fn from_slice(input: &[u8]) -> Result<StatusList> {
    match DocumentFormat::from_magic(input) {
        DocumentFormat::Unknown => Err(FormatError::UnknownFormat),
        format => {
            tracing::debug!(%format, len = input.len(), "detected status list document");
            parse(input, format)
        }
    }
}

/// Read and parse a whole document from a reader.
pub fn from_reader<R: Read>(reader: &mut R) -> Result<StatusList> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    from_slice(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CBOR_DOC: [u8; 22] = [
        0xA2, 0x64, b'b', b'i', b't', b's', 0x08, 0x63, b'l', b's', b't', 0x4A, 0x78, 0x9C, 0xDB,
        0xB9, 0x18, 0x00, 0x02, 0x17, 0x01, 0x5D,
    ];

    #[test]
    fn test_from_slice_json() {
        let list = from_slice(b"  {\"bits\": 2, \"lst\": \"eJzbuRgAAhcBXQ\"}").unwrap();
        assert_eq!(list.bits, 2);
    }

    #[test]
    fn test_from_slice_cbor() {
        let list = from_slice(&CBOR_DOC).unwrap();
        assert_eq!(list.bits, 8);
        assert_eq!(list.lst, CBOR_DOC[12..22]);
    }

    #[test]
    fn test_from_slice_unknown() {
        assert!(matches!(
            from_slice(b"bits=1"),
            Err(FormatError::UnknownFormat)
        ));
        assert!(matches!(from_slice(b""), Err(FormatError::UnknownFormat)));
    }

    #[test]
    fn test_parse_forced_format() {
        let err = parse(&CBOR_DOC, DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, FormatError::Json(_)));
        assert!(parse(&CBOR_DOC, DocumentFormat::Unknown).is_ok());
    }

    #[test]
    fn test_from_reader() {
        let mut cursor = Cursor::new(CBOR_DOC.to_vec());
        let list = from_reader(&mut cursor).unwrap();
        assert_eq!(list.bits, 8);
    }
}
