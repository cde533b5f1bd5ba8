//! # Public Keys
//!
//! Hive public keys are compressed secp256k1 points (33 bytes). Humans see
//! them as `STM` + base58(key ++ checksum), where the checksum is the first
//! four bytes of RIPEMD-160 over the key. On the wire only the raw 33 bytes
//! are written; the prefix and checksum are display concerns.
//!
//! Decoding strips the checksum without checking it. Callers that care call
//! [`PublicKey::verify_checksum`] on the original text. Nothing here checks
//! that the bytes are a valid curve point.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::hash::ripemd160;
use crate::codec::{BinaryWriter, Encode};
use crate::config::{
    ADDRESS_PREFIX_LENGTH, DEFAULT_ADDRESS_PREFIX, PUBLIC_KEY_CHECKSUM_LENGTH, PUBLIC_KEY_LENGTH,
};
use crate::error::{Error, Result};

/// A decoded public key plus the network prefix it was written with.
///
/// Equality and ordering only look at the key bytes. Authorities keep their
/// keys sorted by these bytes on the wire.
#[derive(Clone)]
pub struct PublicKey {
    key: [u8; PUBLIC_KEY_LENGTH],
    prefix: String,
}

impl PublicKey {
    /// Wraps raw key bytes under the default `STM` prefix.
    pub fn from_bytes(key: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self {
            key,
            prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
        }
    }

    /// Wraps raw key bytes under a custom prefix.
    pub fn with_prefix(key: [u8; PUBLIC_KEY_LENGTH], prefix: impl Into<String>) -> Self {
        Self {
            key,
            prefix: prefix.into(),
        }
    }

    /// Decodes `PREFIX + base58(key ++ checksum)`.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] when the text is shorter than the prefix, the payload
    /// is not base58, or the key is not 33 bytes long.
    ///
    /// ```
    /// use hive_protocol::crypto::PublicKey;
    ///
    /// let key = PublicKey::decode("STM6LLegbAgLAy28EHrffBVuANFWcFgmqRMW13wBmTExqFE9SCkg4").unwrap();
    /// assert_eq!(key.prefix(), "STM");
    /// assert_eq!(key.as_bytes()[0], 0x02);
    /// ```
    pub fn decode(text: &str) -> Result<Self> {
        let (key, prefix) = split_payload(text)?;
        let key = <[u8; PUBLIC_KEY_LENGTH]>::try_from(&key[..key.len() - PUBLIC_KEY_CHECKSUM_LENGTH])
            .map_err(|_| {
                Error::Decode(format!(
                    "expected {} key bytes, got {}",
                    PUBLIC_KEY_LENGTH,
                    key.len() - PUBLIC_KEY_CHECKSUM_LENGTH
                ))
            })?;
        Ok(Self {
            key,
            prefix: prefix.to_string(),
        })
    }

    /// Checks the trailing checksum of an encoded key against RIPEMD-160 of
    /// its key bytes.
    pub fn verify_checksum(text: &str) -> Result<bool> {
        let (payload, _) = split_payload(text)?;
        let (key, checksum) = payload.split_at(payload.len() - PUBLIC_KEY_CHECKSUM_LENGTH);
        Ok(ripemd160(key)[..PUBLIC_KEY_CHECKSUM_LENGTH] == *checksum)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.key
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Splits off the prefix and base58-decodes the rest. The payload is
/// guaranteed to be longer than the checksum.
fn split_payload(text: &str) -> Result<(Vec<u8>, &str)> {
    let prefix = text
        .get(..ADDRESS_PREFIX_LENGTH)
        .ok_or_else(|| Error::Decode(format!("{:?} is too short", text)))?;
    let payload = bs58::decode(&text[ADDRESS_PREFIX_LENGTH..])
        .into_vec()
        .map_err(|e| Error::Decode(e.to_string()))?;
    if payload.len() <= PUBLIC_KEY_CHECKSUM_LENGTH {
        return Err(Error::Decode(format!(
            "payload of {} bytes has no room for a key",
            payload.len()
        )));
    }
    Ok((payload, prefix))
}

impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::decode(text)
    }
}

impl TryFrom<&str> for PublicKey {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::decode(text)
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PublicKey {}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut payload = self.key.to_vec();
        payload.extend_from_slice(&ripemd160(&self.key)[..PUBLIC_KEY_CHECKSUM_LENGTH]);
        write!(f, "{}{}", self.prefix, bs58::encode(payload).into_string())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self)
    }
}

impl Encode for PublicKey {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        writer.write_bytes(&self.key, None)?;
        Ok(())
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::decode(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_to_bytes;

    const KEY: &str = "STM6LLegbAgLAy28EHrffBVuANFWcFgmqRMW13wBmTExqFE9SCkg4";
    const KEY_HEX: &str = "02be643d4c424ac7cf2f3cf51dd048773cbdcee30b111adb30d89c27668c501705";

    #[test]
    fn decode_strips_prefix_and_checksum() {
        let key = PublicKey::decode(KEY).unwrap();
        assert_eq!(key.prefix(), "STM");
        assert_eq!(hex::encode(key.as_bytes()), KEY_HEX);
    }

    #[test]
    fn display_round_trips() {
        let key: PublicKey = KEY.parse().unwrap();
        assert_eq!(key.to_string(), KEY);
    }

    #[test]
    fn custom_prefix_is_preserved() {
        let key = PublicKey::decode(&format!("TST{}", &KEY[3..])).unwrap();
        assert_eq!(key.prefix(), "TST");
        assert_eq!(key, PublicKey::decode(KEY).unwrap());
    }

    #[test]
    fn checksum_verification() {
        assert!(PublicKey::verify_checksum(KEY).unwrap());
        // Same length, last character changed: decodes, but the checksum breaks.
        let tampered = format!("{}5", &KEY[..KEY.len() - 1]);
        assert!(!PublicKey::verify_checksum(&tampered).unwrap());
        assert!(PublicKey::decode(&tampered).is_ok());
    }

    #[test]
    fn malformed_keys_are_decode_errors() {
        assert!(matches!(PublicKey::decode("ST"), Err(Error::Decode(_))));
        assert!(matches!(PublicKey::decode("STM0OIl"), Err(Error::Decode(_))));
        assert!(matches!(PublicKey::decode("STM2"), Err(Error::Decode(_))));
        // Valid base58 but far too short for a key.
        assert!(matches!(PublicKey::decode("STMabcdefgh"), Err(Error::Decode(_))));
    }

    #[test]
    fn wire_form_is_raw_key() {
        let key = PublicKey::decode(KEY).unwrap();
        assert_eq!(hex::encode(encode_to_bytes(&key).unwrap()), KEY_HEX);
    }

    #[test]
    fn json_is_text() {
        let key: PublicKey = serde_json::from_str(&format!("\"{}\"", KEY)).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), format!("\"{}\"", KEY));
    }
}
