//! Three-party escrow: sender, receiver and an agent who arbitrates.

use serde::{Deserialize, Serialize};

use crate::encode_fields;
use crate::types::{Asset, TimePointSec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscrowTransferOperation {
    pub from: String,
    pub to: String,
    #[serde(alias = "sbd_amount")]
    pub hbd_amount: Asset,
    #[serde(alias = "steem_amount")]
    pub hive_amount: Asset,
    pub escrow_id: u32,
    pub agent: String,
    pub fee: Asset,
    pub json_meta: String,
    pub ratification_deadline: TimePointSec,
    pub escrow_expiration: TimePointSec,
}

encode_fields!(EscrowTransferOperation {
    from,
    to,
    hbd_amount,
    hive_amount,
    escrow_id,
    agent,
    fee,
    json_meta,
    ratification_deadline,
    escrow_expiration,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowDisputeOperation {
    pub from: String,
    pub to: String,
    pub agent: String,
    pub who: String,
    pub escrow_id: u32,
}

encode_fields!(EscrowDisputeOperation {
    from,
    to,
    agent,
    who,
    escrow_id,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscrowReleaseOperation {
    pub from: String,
    pub to: String,
    pub agent: String,
    pub who: String,
    pub receiver: String,
    pub escrow_id: u32,
    #[serde(alias = "sbd_amount")]
    pub hbd_amount: Asset,
    #[serde(alias = "steem_amount")]
    pub hive_amount: Asset,
}

encode_fields!(EscrowReleaseOperation {
    from,
    to,
    agent,
    who,
    receiver,
    escrow_id,
    hbd_amount,
    hive_amount,
});

/// Agent or receiver ratifies (or rejects) a pending escrow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowApproveOperation {
    pub from: String,
    pub to: String,
    pub agent: String,
    pub who: String,
    pub escrow_id: u32,
    pub approve: bool,
}

encode_fields!(EscrowApproveOperation {
    from,
    to,
    agent,
    who,
    escrow_id,
    approve,
});
