//! Whole-array JSON encoding of the photo list.
//!
//! The persisted value is a single JSON array of records, newest first.
//! There is no version field and no partial update.

use newsdesk_types::PhotoRecord;

use crate::error::Result;

/// Encode the full record sequence as a JSON array.
pub fn encode_records(records: &[PhotoRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

/// Decode a JSON array of records.
///
/// Fails if the value is not an array of record objects; records with a
/// missing `city` or `preciseLocation` decode with that field absent.
pub fn decode_records(value: &str) -> Result<Vec<PhotoRecord>> {
    Ok(serde_json::from_str(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_records(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_encode_layout() {
        let records = vec![
            PhotoRecord::new("b").with_location(
                Some("Metropolis".to_string()),
                Some("Metropolis, NY".to_string()),
            ),
            PhotoRecord::new("a"),
        ];
        let json = encode_records(&records).unwrap();
        assert_eq!(
            json,
            r#"[{"uri":"b","city":"Metropolis","preciseLocation":"Metropolis, NY"},{"uri":"a","city":null,"preciseLocation":null}]"#
        );
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode_records("{\"uri\":\"a\"}").is_err());
        assert!(decode_records("not json").is_err());
        assert!(decode_records("null").is_err());
        assert!(decode_records("[{\"city\":\"x\"}]").is_err());
    }

    fn record() -> impl Strategy<Value = PhotoRecord> {
        (
            "[a-z0-9:/._-]{1,24}",
            proptest::option::of("[A-Za-z ]{0,12}"),
            proptest::option::of("[A-Za-z ,]{0,24}"),
        )
            .prop_map(|(uri, city, precise_location)| PhotoRecord {
                uri,
                city,
                precise_location,
            })
    }

    proptest! {
        #[test]
        fn prop_round_trip(records in proptest::collection::vec(record(), 0..16)) {
            let encoded = encode_records(&records).unwrap();
            prop_assert_eq!(decode_records(&encoded).unwrap(), records);
        }
    }
}
