//! The storage representation of a UUID.

use crate::codec;
use crate::{UuidError, UuidResult};
use bson::spec::BinarySubtype;
use bson::{Binary, Bson};
use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// A UUID in its storage form: raw bytes tagged with the BSON UUID subtype.
///
/// Values produced by the generators, by [`BinaryUuid::from_bytes`] or by encoding a well-formed
/// string always hold exactly 16 bytes. The lenient [`encode`](crate::encode) may produce a
/// shorter or longer buffer from malformed text; such values still decode, group by group, up to
/// the bytes they hold.
///
/// # Display format
/// `Display` and [`BinaryUuid::to_text`] render the canonical hyphenated lowercase form. The text
/// is derived on demand; only the bytes are stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BinaryUuid(Vec<u8>);

impl BinaryUuid {
    /// Wraps an exact 16-byte buffer.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes.to_vec())
    }

    pub(crate) fn from_vec(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Takes ownership of a BSON binary, whatever its subtype, and re-tags it as a UUID.
    pub fn from_binary(binary: Binary) -> Self {
        Self(binary.bytes)
    }

    /// Parses a well-formed UUID string.
    ///
    /// This is equivalent to [`encode_strict`](crate::encode_strict).
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is neither the 36-character hyphenated form
    /// nor the 32-character simple form.
    pub fn parse_str(input: &str) -> UuidResult<Self> {
        codec::encode_strict(input)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Always [`BinarySubtype::Uuid`].
    pub fn subtype(&self) -> BinarySubtype {
        BinarySubtype::Uuid
    }

    /// Returns a BSON binary carrying a copy of the bytes.
    pub fn to_binary(&self) -> Binary {
        Binary {
            subtype: BinarySubtype::Uuid,
            bytes: self.0.clone(),
        }
    }

    pub fn into_binary(self) -> Binary {
        Binary {
            subtype: BinarySubtype::Uuid,
            bytes: self.0,
        }
    }

    /// Renders the canonical hyphenated form.
    pub fn to_text(&self) -> String {
        codec::decode(&self.0)
    }

    /// Converts to a [`uuid::Uuid`].
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] unless exactly 16 bytes are held.
    pub fn to_uuid(&self) -> UuidResult<Uuid> {
        Uuid::from_slice(&self.0).map_err(|_| {
            UuidError::InvalidInput(format!(
                "UUID must be 16 bytes long, got {} bytes",
                self.0.len()
            ))
        })
    }

    /// Returns the version number encoded in the UUID, if it holds 16 bytes.
    pub fn version(&self) -> Option<usize> {
        self.to_uuid().ok().map(|uuid| uuid.get_version_num())
    }

    /// Returns the embedded creation time of a time-based UUID (v1, v6 or v7).
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let ts = self.to_uuid().ok()?.get_timestamp()?;
        let (secs, nanos) = ts.to_unix();
        DateTime::from_timestamp(i64::try_from(secs).ok()?, nanos)
    }
}

impl fmt::Display for BinaryUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for BinaryUuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BinaryUuid::parse_str(s)
    }
}

impl AsRef<[u8]> for BinaryUuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Uuid> for BinaryUuid {
    fn from(uuid: Uuid) -> Self {
        Self::from_bytes(*uuid.as_bytes())
    }
}

impl From<BinaryUuid> for Binary {
    fn from(value: BinaryUuid) -> Self {
        value.into_binary()
    }
}

impl From<BinaryUuid> for Bson {
    fn from(value: BinaryUuid) -> Self {
        Bson::Binary(value.into_binary())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BinaryUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.to_binary(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BinaryUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Binary as serde::Deserialize>::deserialize(deserializer).map(BinaryUuid::from_binary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "123e4567-e89b-12d3-a456-426614174000";
    const BYTES: [u8; 16] = [
        0x12, 0x3e, 0x45, 0x67, 0xe8, 0x9b, 0x12, 0xd3, 0xa4, 0x56, 0x42, 0x66, 0x14, 0x17, 0x40,
        0x00,
    ];

    #[test]
    fn test_display_renders_hyphenated_text() {
        let binary = BinaryUuid::from_bytes(BYTES);

        assert_eq!(binary.to_string(), TEXT);
        assert_eq!(format!("{}", binary), binary.to_text());
    }

    #[test]
    fn test_subtype_is_uuid() {
        let binary = BinaryUuid::from_bytes(BYTES);

        assert_eq!(binary.subtype(), BinarySubtype::Uuid);
        assert_eq!(binary.to_binary().subtype, BinarySubtype::Uuid);
    }

    #[test]
    fn test_from_binary_retags_generic_subtype() {
        let generic = Binary {
            subtype: BinarySubtype::Generic,
            bytes: BYTES.to_vec(),
        };
        let binary = BinaryUuid::from_binary(generic);

        assert_eq!(binary.into_binary().subtype, BinarySubtype::Uuid);
    }

    #[test]
    fn test_into_bson_is_binary_variant() {
        let bson: Bson = BinaryUuid::from_bytes(BYTES).into();

        match bson {
            Bson::Binary(binary) => {
                assert_eq!(binary.subtype, BinarySubtype::Uuid);
                assert_eq!(binary.bytes, BYTES.to_vec());
            }
            other => panic!("Expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_uuid_conversion_round_trip() {
        let uuid = Uuid::parse_str(TEXT).unwrap();
        let binary = BinaryUuid::from(uuid);

        assert_eq!(binary.as_bytes(), &BYTES);
        assert_eq!(binary.to_uuid().unwrap(), uuid);
    }

    #[test]
    fn test_to_uuid_rejects_short_buffer() {
        let short = BinaryUuid::from_vec(vec![0x12, 0x3e]);

        match short.to_uuid() {
            Err(UuidError::InvalidInput(msg)) => assert!(msg.contains("got 2 bytes")),
            other => panic!("Expected InvalidInput error, got {:?}", other),
        }
        assert_eq!(short.version(), None);
    }

    #[test]
    fn test_from_str_valid() {
        let result: Result<BinaryUuid, _> = TEXT.parse();

        assert_eq!(result.unwrap().as_bytes(), &BYTES);
    }

    #[test]
    fn test_from_str_invalid() {
        let result: Result<BinaryUuid, _> = "not-a-uuid".parse();

        assert!(result.is_err());
    }

    #[test]
    fn test_version_reads_version_nibble() {
        let binary = BinaryUuid::from_bytes(BYTES);

        assert_eq!(binary.version(), Some(1));
    }

    #[test]
    fn test_timestamp_absent_for_random_uuid() {
        let binary = BinaryUuid::from(Uuid::new_v4());

        assert_eq!(binary.timestamp(), None);
    }

    #[test]
    fn test_clone_and_equality() {
        let uuid1 = BinaryUuid::from_bytes(BYTES);
        let uuid2 = uuid1.clone();

        assert_eq!(uuid1, uuid2);
        assert_eq!(uuid1.len(), 16);
        assert!(!uuid1.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_through_bson_document() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Record {
            id: BinaryUuid,
        }

        let record = Record {
            id: BinaryUuid::from_bytes(BYTES),
        };
        let doc = bson::to_document(&record).unwrap();

        match doc.get("id") {
            Some(Bson::Binary(binary)) => assert_eq!(binary.subtype, BinarySubtype::Uuid),
            other => panic!("Expected binary field, got {:?}", other),
        }

        let back: Record = bson::from_document(doc).unwrap();
        assert_eq!(back, record);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json_carries_uuid_subtype() {
        let json = serde_json::to_string(&BinaryUuid::from_bytes(BYTES)).unwrap();

        assert!(json.contains("\"04\""));
    }
}
