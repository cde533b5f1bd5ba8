//! # Fixed-Point Assets
//!
//! An asset is an amount plus one of the five symbols the protocol defines.
//! The amount is held as an integer already scaled by the symbol's precision
//! (`1.000 HIVE` is `1000`), which is also what goes on the wire:
//!
//! ```text
//! i64 scaled amount | u32 ((SMT_MAX_NAI + n) << NAI_SHIFT) | precision
//! ```
//!
//! Symbols form a closed enum, so precision and NAI lookups cannot fail once
//! a symbol exists. Unknown symbol text is rejected at parse time.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::json::number_or_string;
use crate::codec::{BinaryWriter, Encode};
use crate::config::{HIVE_PRECISION, NAI_SHIFT, SMT_MAX_NAI, VESTS_PRECISION};
use crate::error::{Error, Result};

/// The native asset symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetSymbol {
    Hive,
    Hbd,
    Vests,
    /// Testnet twin of `HIVE`.
    Tests,
    /// Testnet twin of `HBD`.
    Tbd,
}

impl AssetSymbol {
    pub const ALL: [AssetSymbol; 5] = [
        AssetSymbol::Hive,
        AssetSymbol::Hbd,
        AssetSymbol::Vests,
        AssetSymbol::Tests,
        AssetSymbol::Tbd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetSymbol::Hive => "HIVE",
            AssetSymbol::Hbd => "HBD",
            AssetSymbol::Vests => "VESTS",
            AssetSymbol::Tests => "TESTS",
            AssetSymbol::Tbd => "TBD",
        }
    }

    /// Number of fractional digits.
    pub fn precision(self) -> u8 {
        match self {
            AssetSymbol::Vests => VESTS_PRECISION,
            _ => HIVE_PRECISION,
        }
    }

    /// Index of the asset above the user-token NAI space.
    fn nai_index(self) -> u32 {
        match self {
            AssetSymbol::Hbd | AssetSymbol::Tbd => 1,
            AssetSymbol::Hive | AssetSymbol::Tests => 2,
            AssetSymbol::Vests => 3,
        }
    }

    /// The `u32` written after the amount.
    ///
    /// ```
    /// use hive_protocol::types::AssetSymbol;
    ///
    /// assert_eq!(AssetSymbol::Hbd.nai(), 3_200_000_003);
    /// assert_eq!(AssetSymbol::Hive.nai(), 3_200_000_035);
    /// assert_eq!(AssetSymbol::Vests.nai(), 3_200_000_070);
    /// ```
    pub fn nai(self) -> u32 {
        ((SMT_MAX_NAI + self.nai_index()) << NAI_SHIFT) | u32::from(self.precision())
    }

    /// The NAI in its JSON form (`@@` + eight digits + check digit).
    pub fn nai_string(self) -> &'static str {
        match self {
            AssetSymbol::Hbd | AssetSymbol::Tbd => "@@000000013",
            AssetSymbol::Hive | AssetSymbol::Tests => "@@000000021",
            AssetSymbol::Vests => "@@000000037",
        }
    }

    /// Resolves a JSON NAI to a mainnet symbol.
    pub fn from_nai(nai: &str) -> Result<Self> {
        match nai {
            "@@000000013" => Ok(AssetSymbol::Hbd),
            "@@000000021" => Ok(AssetSymbol::Hive),
            "@@000000037" => Ok(AssetSymbol::Vests),
            other => Err(Error::UnknownSymbol(other.to_string())),
        }
    }
}

impl FromStr for AssetSymbol {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.as_str() == text)
            .ok_or_else(|| Error::UnknownSymbol(text.to_string()))
    }
}

impl fmt::Display for AssetSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An amount of a native asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asset {
    /// Amount scaled by `10^precision`.
    amount: i64,
    symbol: AssetSymbol,
}

/// Anything [`Asset::coerce`] accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetValue {
    Asset(Asset),
    /// A bare amount; takes the requested symbol or `HIVE`.
    Amount(f64),
    /// `"amount SYMBOL"` text.
    Text(String),
}

impl From<Asset> for AssetValue {
    fn from(asset: Asset) -> Self {
        AssetValue::Asset(asset)
    }
}

impl From<f64> for AssetValue {
    fn from(amount: f64) -> Self {
        AssetValue::Amount(amount)
    }
}

impl From<&str> for AssetValue {
    fn from(text: &str) -> Self {
        AssetValue::Text(text.to_string())
    }
}

impl From<String> for AssetValue {
    fn from(text: String) -> Self {
        AssetValue::Text(text)
    }
}

impl Asset {
    /// Builds an asset from an already-scaled integer amount.
    pub const fn from_scaled(amount: i64, symbol: AssetSymbol) -> Self {
        Self { amount, symbol }
    }

    /// Builds an asset from a decimal amount, rounding to the symbol's precision.
    pub fn from_amount(amount: f64, symbol: AssetSymbol) -> Result<Self> {
        if !amount.is_finite() {
            return Err(Error::Validation(format!("invalid asset amount: {}", amount)));
        }
        let scaled = (amount * 10f64.powi(i32::from(symbol.precision()))).round();
        // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
        if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            return Err(Error::Range(format!(
                "asset amount {} does not fit the wire format",
                amount
            )));
        }
        Ok(Self {
            amount: scaled as i64,
            symbol,
        })
    }

    /// Parses `"amount SYMBOL"`.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownSymbol`] if the symbol is not a native one.
    /// - [`Error::SymbolMismatch`] if `expected` is given and differs.
    /// - [`Error::Validation`] if the amount is not a finite number.
    ///
    /// ```
    /// use hive_protocol::types::{Asset, AssetSymbol};
    ///
    /// let asset = Asset::parse("1.500 HBD", Some(AssetSymbol::Hbd)).unwrap();
    /// assert_eq!(asset.scaled_amount(), 1500);
    /// assert!(Asset::parse("1.000 XYZ", None).is_err());
    /// ```
    pub fn parse(text: &str, expected: Option<AssetSymbol>) -> Result<Self> {
        let (amount_text, symbol_text) = text.split_once(' ').unwrap_or((text, ""));
        let symbol: AssetSymbol = symbol_text.parse()?;
        if let Some(expected) = expected {
            if expected != symbol {
                return Err(Error::SymbolMismatch {
                    expected: expected.to_string(),
                    got: symbol.to_string(),
                });
            }
        }
        let amount: f64 = amount_text
            .parse()
            .map_err(|_| Error::Validation(format!("invalid asset amount: {}", amount_text)))?;
        Self::from_amount(amount, symbol)
    }

    /// Normalizes the accepted asset inputs. When `symbol` is given, the
    /// result must carry it.
    pub fn coerce(value: impl Into<AssetValue>, symbol: Option<AssetSymbol>) -> Result<Self> {
        match value.into() {
            AssetValue::Asset(asset) => match symbol {
                Some(expected) if expected != asset.symbol => Err(Error::SymbolMismatch {
                    expected: expected.to_string(),
                    got: asset.symbol.to_string(),
                }),
                _ => Ok(asset),
            },
            AssetValue::Amount(amount) => {
                Self::from_amount(amount, symbol.unwrap_or(AssetSymbol::Hive))
            }
            AssetValue::Text(text) => Self::parse(&text, symbol),
        }
    }

    pub fn symbol(&self) -> AssetSymbol {
        self.symbol
    }

    pub fn precision(&self) -> u8 {
        self.symbol.precision()
    }

    /// The integer that goes on the wire.
    pub fn scaled_amount(&self) -> i64 {
        self.amount
    }

    /// The amount as a decimal. Lossy for very large values.
    pub fn amount(&self) -> f64 {
        self.amount as f64 / 10f64.powi(i32::from(self.precision()))
    }

    fn from_nai_object(amount: i64, precision: u8, nai: &str) -> Result<Self> {
        let symbol = AssetSymbol::from_nai(nai)?;
        if precision != symbol.precision() {
            return Err(Error::Validation(format!(
                "precision {} does not match {} ({})",
                precision,
                nai,
                symbol.precision()
            )));
        }
        Ok(Self::from_scaled(amount, symbol))
    }
}

impl FromStr for Asset {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text, None)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = u32::from(self.precision());
        let scale = 10u64.pow(precision);
        let magnitude = self.amount.unsigned_abs();
        let sign = if self.amount < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:0width$} {}",
            sign,
            magnitude / scale,
            magnitude % scale,
            self.symbol,
            width = precision as usize
        )
    }
}

impl Encode for Asset {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        writer.write_i64(self.amount, None)?;
        writer.write_u32(self.symbol.nai(), None)?;
        Ok(())
    }
}

impl Serialize for Asset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
struct NaiAsset {
    #[serde(deserialize_with = "number_or_string")]
    amount: i64,
    precision: u8,
    nai: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AssetRepr {
    Text(String),
    Amount(f64),
    Nai(NaiAsset),
}

impl<'de> Deserialize<'de> for Asset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let parsed = match AssetRepr::deserialize(deserializer)? {
            AssetRepr::Text(text) => Asset::parse(&text, None),
            AssetRepr::Amount(amount) => Asset::from_amount(amount, AssetSymbol::Hive),
            AssetRepr::Nai(nai) => Asset::from_nai_object(nai.amount, nai.precision, &nai.nai),
        };
        parsed.map_err(D::Error::custom)
    }
}
