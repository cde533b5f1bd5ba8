//! Tagged unions ("static variants").
//!
//! On the wire a static variant is the varint index of the active alternative
//! followed by that alternative's body. In JSON the chain's API emits either
//! `{"type": "<name>", "value": {...}}` or the older `[<name-or-index>, {...}]`
//! pair form; both are accepted and the object form is emitted.
//!
//! Concrete unions are declared with [`static_variant!`], which fixes the
//! index/name table once and derives the enum, its encoder and its serde
//! implementations from it.

use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::encode::Encode;
use super::writer::BinaryWriter;
use crate::error::Result;

/// The empty alternative. Encodes to zero bytes; serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Void;

impl Encode for Void {
    fn encode(&self, _writer: &mut BinaryWriter) -> Result<()> {
        Ok(())
    }
}

impl Serialize for Void {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}

impl<'de> Deserialize<'de> for Void {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Void)
    }
}

/// How a JSON document names the active alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Name(String),
    Id(u64),
}

impl Tag {
    /// Looks the tag up in an `(index, name)` table.
    pub fn resolve(&self, variants: &[(u32, &str)]) -> std::result::Result<u32, String> {
        let found = match self {
            Tag::Name(name) => variants.iter().find(|(_, n)| n == name),
            Tag::Id(id) => variants.iter().find(|(i, _)| u64::from(*i) == *id),
        };
        found.map(|(id, _)| *id).ok_or_else(|| format!("unknown variant {}", self))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Name(name) => write!(f, "\"{}\"", name),
            Tag::Id(id) => write!(f, "#{}", id),
        }
    }
}

/// Splits a tagged JSON value into its tag and body.
///
/// A missing `value` member is treated as an empty object so bodiless
/// alternatives can be written as `{"type": "void_t"}`.
pub fn split_tagged(raw: Value) -> std::result::Result<(Tag, Value), String> {
    let (tag, body) = match raw {
        Value::Object(mut map) => {
            let tag = map
                .remove("type")
                .ok_or_else(|| "tagged value is missing \"type\"".to_string())?;
            let body = map
                .remove("value")
                .unwrap_or_else(|| Value::Object(Default::default()));
            (tag, body)
        }
        Value::Array(items) if items.len() == 2 => {
            let mut items = items.into_iter();
            match (items.next(), items.next()) {
                (Some(tag), Some(body)) => (tag, body),
                _ => return Err("tagged pair must have two elements".to_string()),
            }
        }
        other => {
            return Err(format!(
                "expected {{\"type\", \"value\"}} object or [tag, value] pair, got {}",
                other
            ))
        }
    };
    let tag = match tag {
        Value::String(name) => Tag::Name(name),
        Value::Number(n) => Tag::Id(
            n.as_u64()
                .ok_or_else(|| format!("variant index must be unsigned, got {}", n))?,
        ),
        other => return Err(format!("variant tag must be a string or index, got {}", other)),
    };
    Ok((tag, body))
}

/// Declares a static variant.
///
/// ```ignore
/// static_variant! {
///     pub enum UpdateProposalExtension {
///         0 => Void(Void) = "void_t",
///         1 => EndDate(UpdateProposalEndDate) = "update_proposal_end_date",
///     }
/// }
/// ```
#[macro_export]
macro_rules! static_variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $id:literal => $variant:ident($body:ty) = $tag:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($body), )*
        }

        impl $name {
            /// Index and wire name of every alternative.
            pub const VARIANTS: &'static [(u32, &'static str)] = &[ $( ($id, $tag), )* ];

            /// Index of the active alternative.
            pub fn variant_id(&self) -> u32 {
                match self {
                    $( Self::$variant(_) => $id, )*
                }
            }

            /// Wire name of the active alternative.
            pub fn variant_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $tag, )*
                }
            }
        }

        $(
            impl ::core::convert::From<$body> for $name {
                fn from(body: $body) -> Self {
                    Self::$variant(body)
                }
            }
        )*

        impl $crate::codec::Encode for $name {
            fn encode(&self, writer: &mut $crate::codec::BinaryWriter) -> $crate::error::Result<()> {
                writer.write_varint32(self.variant_id(), None)?;
                match self {
                    $( Self::$variant(body) => $crate::codec::Encode::encode(body, writer), )*
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::core::result::Result<S::Ok, S::Error> {
                use ::serde::ser::SerializeStruct;
                let mut state = serializer.serialize_struct(stringify!($name), 2)?;
                state.serialize_field("type", self.variant_name())?;
                match self {
                    $( Self::$variant(body) => state.serialize_field("value", body)?, )*
                }
                state.end()
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::core::result::Result<Self, D::Error> {
                use ::serde::de::Error as _;
                let raw = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                let (tag, body) = $crate::codec::variant::split_tagged(raw).map_err(D::Error::custom)?;
                let id = tag.resolve(Self::VARIANTS).map_err(D::Error::custom)?;
                match id {
                    $(
                        $id => ::serde_json::from_value::<$body>(body)
                            .map(Self::$variant)
                            .map_err(D::Error::custom),
                    )*
                    other => Err(D::Error::custom(format!(
                        "variant #{} is not part of {}",
                        other,
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::codec::encode_to_bytes;

    #[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
    struct Level {
        level: u8,
    }

    crate::encode_fields!(Level { level });

    crate::static_variant! {
        enum Sample {
            0 => Empty(Void) = "void_t",
            1 => Level(Level) = "level_ext",
        }
    }

    #[test]
    fn encodes_index_then_body() {
        assert_eq!(encode_to_bytes(&Sample::Empty(Void)).unwrap(), vec![0]);
        assert_eq!(
            encode_to_bytes(&Sample::Level(Level { level: 7 })).unwrap(),
            vec![1, 7]
        );
    }

    #[test]
    fn accepts_object_and_pair_forms() {
        let object: Sample =
            serde_json::from_value(json!({"type": "level_ext", "value": {"level": 3}})).unwrap();
        let by_name: Sample = serde_json::from_value(json!(["level_ext", {"level": 3}])).unwrap();
        let by_index: Sample = serde_json::from_value(json!([1, {"level": 3}])).unwrap();
        assert_eq!(object, Sample::Level(Level { level: 3 }));
        assert_eq!(object, by_name);
        assert_eq!(object, by_index);
    }

    #[test]
    fn bodiless_alternative_may_omit_value() {
        let empty: Sample = serde_json::from_value(json!({"type": "void_t"})).unwrap();
        assert_eq!(empty, Sample::Empty(Void));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!(serde_json::from_value::<Sample>(json!({"type": "nope", "value": {}})).is_err());
        assert!(serde_json::from_value::<Sample>(json!([9, {}])).is_err());
        assert!(serde_json::from_value::<Sample>(json!("void_t")).is_err());
    }

    #[test]
    fn serializes_object_form() {
        let value = serde_json::to_value(Sample::Level(Level { level: 2 })).unwrap();
        assert_eq!(value, json!({"type": "level_ext", "value": {"level": 2}}));
        assert_eq!(
            serde_json::to_value(Sample::Empty(Void)).unwrap(),
            json!({"type": "void_t", "value": {}})
        );
    }

    #[test]
    fn variant_table_lookup() {
        assert_eq!(Sample::VARIANTS, &[(0, "void_t"), (1, "level_ext")]);
        assert_eq!(Tag::Name("level_ext".into()).resolve(Sample::VARIANTS), Ok(1));
        assert!(Tag::Id(4).resolve(Sample::VARIANTS).is_err());
    }
}
