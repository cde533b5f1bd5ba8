//! Proof-of-work account mining. Disabled on the live chain since the early
//! hardforks, but still part of the operation set and present in history.

use serde::{Deserialize, Serialize};

use crate::block::{BlockId, Signature};
use crate::codec::json::number_or_string;
use crate::codec::FixedBytes;
use crate::crypto::PublicKey;
use crate::types::ChainProperties;
use crate::{encode_fields, static_variant};

/// A 256-bit digest.
pub type Digest = FixedBytes<32>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pow {
    pub worker: PublicKey,
    pub input: Digest,
    pub signature: Signature,
    pub work: Digest,
}

encode_fields!(Pow {
    worker,
    input,
    signature,
    work,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowOperation {
    pub worker_account: String,
    pub block_id: BlockId,
    #[serde(deserialize_with = "number_or_string")]
    pub nonce: u64,
    pub work: Pow,
    pub props: ChainProperties,
}

encode_fields!(PowOperation {
    worker_account,
    block_id,
    nonce,
    work,
    props,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pow2Input {
    pub worker_account: String,
    pub prev_block: BlockId,
    #[serde(deserialize_with = "number_or_string")]
    pub nonce: u64,
}

encode_fields!(Pow2Input {
    worker_account,
    prev_block,
    nonce,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pow2 {
    pub input: Pow2Input,
    pub pow_summary: u32,
}

encode_fields!(Pow2 { input, pow_summary });

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquihashProof {
    pub n: u32,
    pub k: u32,
    pub seed: Digest,
    pub inputs: Vec<u32>,
}

encode_fields!(EquihashProof { n, k, seed, inputs });

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquihashPow {
    pub input: Pow2Input,
    pub proof: EquihashProof,
    pub prev_block: BlockId,
    pub pow_summary: u32,
}

encode_fields!(EquihashPow {
    input,
    proof,
    prev_block,
    pow_summary,
});

static_variant! {
    pub enum Pow2Work {
        0 => Pow2(Pow2) = "pow2",
        1 => Equihash(EquihashPow) = "equihash_pow",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pow2Operation {
    pub work: Pow2Work,
    pub new_owner_key: Option<PublicKey>,
    pub props: ChainProperties,
}

encode_fields!(Pow2Operation {
    work,
    new_owner_key,
    props,
});
