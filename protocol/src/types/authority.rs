//! Shared structs that appear inside several operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::asset::Asset;
use crate::crypto::PublicKey;
use crate::encode_fields;

/// A weighted multi-signature threshold over accounts and keys.
///
/// Both maps are sorted by key on the wire; the node stores them as sorted
/// flat maps and the digest depends on that order. JSON writes them as
/// `[[name, weight], ...]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    pub weight_threshold: u32,
    #[serde(with = "crate::codec::json::pairs")]
    pub account_auths: BTreeMap<String, u16>,
    #[serde(with = "crate::codec::json::pairs")]
    pub key_auths: BTreeMap<PublicKey, u16>,
}

encode_fields!(Authority {
    weight_threshold,
    account_auths,
    key_auths,
});

impl Authority {
    /// A threshold-1 authority satisfied by a single key.
    pub fn single_key(key: PublicKey) -> Self {
        Self {
            weight_threshold: 1,
            account_auths: BTreeMap::new(),
            key_auths: BTreeMap::from([(key, 1)]),
        }
    }
}

/// An exchange rate between two assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub base: Asset,
    pub quote: Asset,
}

encode_fields!(Price { base, quote });

/// Chain parameters a witness votes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainProperties {
    pub account_creation_fee: Asset,
    pub maximum_block_size: u32,
    #[serde(alias = "sbd_interest_rate")]
    pub hbd_interest_rate: u16,
}

encode_fields!(ChainProperties {
    account_creation_fee,
    maximum_block_size,
    hbd_interest_rate,
});

/// One entry of a comment's beneficiary list. `weight` is in basis points.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BeneficiaryRoute {
    pub account: String,
    pub weight: u16,
}

encode_fields!(BeneficiaryRoute { account, weight });
