//! Second-precision timestamps.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{BinaryWriter, Encode};
use crate::error::{Error, Result};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Seconds since the Unix epoch, UTC. Written as a `u32` on the wire, which
/// bounds it to 1970-01-01T00:00:00 through 2106-02-07T06:28:15.
///
/// JSON uses `YYYY-MM-DDTHH:MM:SS` with no zone (always UTC); a trailing `Z`
/// and plain integers are accepted on input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePointSec(pub u32);

impl TimePointSec {
    pub fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    pub fn secs(self) -> u32 {
        self.0
    }

    /// Converts a UTC date-time, failing with [`Error::Range`] outside the
    /// `u32` epoch range.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Result<Self> {
        let secs = datetime.timestamp();
        u32::try_from(secs)
            .map(Self)
            .map_err(|_| Error::Range(format!("timestamp {} is outside the u32 range", secs)))
    }

    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.0), 0)
    }

    /// Returns this time shifted forward by `secs`, saturating at the maximum.
    pub fn saturating_add(self, secs: u32) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl FromStr for TimePointSec {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.strip_suffix('Z').unwrap_or(text);
        let naive = NaiveDateTime::parse_from_str(trimmed, FORMAT)
            .map_err(|e| Error::Validation(format!("invalid timestamp {:?}: {}", text, e)))?;
        Self::from_datetime(naive.and_utc())
    }
}

impl fmt::Display for TimePointSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => write!(f, "{}", datetime.format(FORMAT)),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Encode for TimePointSec {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        writer.write_u32(self.0, None)?;
        Ok(())
    }
}

impl Serialize for TimePointSec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimeRepr {
    Text(String),
    Secs(i64),
}

impl<'de> Deserialize<'de> for TimePointSec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match TimeRepr::deserialize(deserializer)? {
            TimeRepr::Text(text) => text.parse().map_err(D::Error::custom),
            TimeRepr::Secs(secs) => u32::try_from(secs).map(Self).map_err(|_| {
                D::Error::custom(Error::Range(format!(
                    "timestamp {} is outside the u32 range",
                    secs
                )))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chain_format_as_utc() {
        let t: TimePointSec = "2025-11-20T07:59:08".parse().unwrap();
        assert_eq!(t.secs(), 1_763_625_548);
        assert_eq!(t.to_string(), "2025-11-20T07:59:08");
    }

    #[test]
    fn trailing_z_is_accepted() {
        let with_z: TimePointSec = "2021-07-09T20:47:48Z".parse().unwrap();
        let without: TimePointSec = "2021-07-09T20:47:48".parse().unwrap();
        assert_eq!(with_z, without);
    }

    #[test]
    fn epoch_bounds() {
        assert_eq!("1970-01-01T00:00:00".parse::<TimePointSec>().unwrap().secs(), 0);
        assert_eq!(
            "2106-02-07T06:28:15".parse::<TimePointSec>().unwrap().secs(),
            u32::MAX
        );
        assert!(matches!(
            "1969-12-31T23:59:59".parse::<TimePointSec>(),
            Err(Error::Range(_))
        ));
        assert!(matches!(
            "2106-02-07T06:28:16".parse::<TimePointSec>(),
            Err(Error::Range(_))
        ));
    }

    #[test]
    fn garbage_is_validation_error() {
        assert!(matches!(
            "yesterday".parse::<TimePointSec>(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn json_accepts_text_and_integers() {
        let t: TimePointSec = serde_json::from_str("\"2029-12-31T23:59:59\"").unwrap();
        assert_eq!(t.secs(), 1_893_455_999);
        let n: TimePointSec = serde_json::from_str("1893455999").unwrap();
        assert_eq!(t, n);
        assert!(serde_json::from_str::<TimePointSec>("-1").is_err());
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"2029-12-31T23:59:59\"");
    }
}
