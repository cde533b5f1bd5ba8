//! Witness registration, voting and misbehaviour reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::block::SignedBlockHeader;
use crate::codec::HexBytes;
use crate::crypto::PublicKey;
use crate::encode_fields;
use crate::types::{Asset, ChainProperties, Extensions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessUpdateOperation {
    pub owner: String,
    pub url: String,
    pub block_signing_key: PublicKey,
    pub props: ChainProperties,
    pub fee: Asset,
}

encode_fields!(WitnessUpdateOperation {
    owner,
    url,
    block_signing_key,
    props,
    fee,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountWitnessVoteOperation {
    pub account: String,
    pub witness: String,
    pub approve: bool,
}

encode_fields!(AccountWitnessVoteOperation {
    account,
    witness,
    approve,
});

/// Delegates witness voting to `proxy`. An empty proxy clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountWitnessProxyOperation {
    pub account: String,
    pub proxy: String,
}

encode_fields!(AccountWitnessProxyOperation { account, proxy });

/// Evidence that a witness signed two different blocks at the same height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportOverProductionOperation {
    pub reporter: String,
    pub first_block: SignedBlockHeader,
    pub second_block: SignedBlockHeader,
}

encode_fields!(ReportOverProductionOperation {
    reporter,
    first_block,
    second_block,
});

/// Sets witness properties as a map of name to already-serialized value.
/// The values are opaque here; the node decodes them per key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WitnessSetPropertiesOperation {
    pub owner: String,
    #[serde(with = "crate::codec::json::pairs")]
    pub props: BTreeMap<String, HexBytes>,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(WitnessSetPropertiesOperation {
    owner,
    props,
    extensions,
});
