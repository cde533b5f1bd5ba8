//! JSON helpers shared by the protocol types.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::de::Error as _;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

/// Deserializes an integer written either as a JSON number or as a decimal
/// string. 64-bit values exceed what many JSON producers can represent as
/// numbers, so the chain's API emits them quoted.
pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<u64> + TryFrom<i64>,
    <T as FromStr>::Err: Display,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Unsigned(n) => {
            T::try_from(n).map_err(|_| D::Error::custom(format!("{} is out of range", n)))
        }
        NumberOrString::Signed(n) => {
            T::try_from(n).map_err(|_| D::Error::custom(format!("{} is out of range", n)))
        }
        NumberOrString::Text(text) => text.trim().parse().map_err(D::Error::custom),
    }
}

/// Serde adapter for maps the chain writes as `[[key, value], ...]`.
///
/// Use with `#[serde(with = "crate::codec::json::pairs")]`. Duplicate keys are
/// rejected, since the node would reject them too.
pub mod pairs {
    use super::*;

    pub fn serialize<S, K, V>(map: &BTreeMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        K: Serialize,
        V: Serialize,
    {
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for entry in map {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D, K, V>(deserializer: D) -> Result<BTreeMap<K, V>, D::Error>
    where
        D: Deserializer<'de>,
        K: Deserialize<'de> + Ord + Display,
        V: Deserialize<'de>,
    {
        let entries = Vec::<(K, V)>::deserialize(deserializer)?;
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            if map.contains_key(&key) {
                return Err(D::Error::custom(format!("duplicate key {}", key)));
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde::{Deserialize, Serialize};

    use super::number_or_string;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "number_or_string")]
        signed: i64,
        #[serde(deserialize_with = "number_or_string")]
        unsigned: u64,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let h: Holder = serde_json::from_str(r#"{"signed": -5, "unsigned": "18446744073709551615"}"#)
            .unwrap();
        assert_eq!(h.signed, -5);
        assert_eq!(h.unsigned, u64::MAX);

        let h: Holder = serde_json::from_str(r#"{"signed": "42", "unsigned": 7}"#).unwrap();
        assert_eq!(h.signed, 42);
        assert_eq!(h.unsigned, 7);
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(serde_json::from_str::<Holder>(r#"{"signed": 0, "unsigned": -1}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"signed": "x", "unsigned": 1}"#).is_err());
    }

    #[derive(Serialize, Deserialize)]
    struct Weights {
        #[serde(with = "super::pairs")]
        auths: BTreeMap<String, u16>,
    }

    #[test]
    fn pairs_sort_on_input_and_reject_duplicates() {
        let w: Weights = serde_json::from_str(r#"{"auths": [["bob", 1], ["alice", 2]]}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&w).unwrap(),
            r#"{"auths":[["alice",2],["bob",1]]}"#
        );
        assert!(serde_json::from_str::<Weights>(r#"{"auths": [["a", 1], ["a", 2]]}"#).is_err());
    }
}
