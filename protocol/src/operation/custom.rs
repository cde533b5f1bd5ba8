//! Application-defined payloads. The chain stores them without interpreting
//! them; second-layer protocols (follows, communities, tokens) live here.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::codec::HexBytes;
use crate::encode_fields;
use crate::types::Authority;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomOperation {
    pub required_auths: BTreeSet<String>,
    pub id: u16,
    pub data: HexBytes,
}

encode_fields!(CustomOperation {
    required_auths,
    id,
    data,
});

/// The common case: a JSON string under an application id, authorized by
/// active (`required_auths`) or posting (`required_posting_auths`) keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomJsonOperation {
    #[serde(default)]
    pub required_auths: BTreeSet<String>,
    #[serde(default)]
    pub required_posting_auths: BTreeSet<String>,
    pub id: String,
    pub json: String,
}

encode_fields!(CustomJsonOperation {
    required_auths,
    required_posting_auths,
    id,
    json,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomBinaryOperation {
    #[serde(default)]
    pub required_owner_auths: BTreeSet<String>,
    #[serde(default)]
    pub required_active_auths: BTreeSet<String>,
    #[serde(default)]
    pub required_posting_auths: BTreeSet<String>,
    #[serde(default)]
    pub required_auths: Vec<Authority>,
    pub id: String,
    pub data: HexBytes,
}

encode_fields!(CustomBinaryOperation {
    required_owner_auths,
    required_active_auths,
    required_posting_auths,
    required_auths,
    id,
    data,
});
