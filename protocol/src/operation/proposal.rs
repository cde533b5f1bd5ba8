//! Decentralized fund proposals.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::codec::json::number_or_string;
use crate::codec::Void;
use crate::types::{Asset, Extensions, TimePointSec};
use crate::{encode_fields, static_variant};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProposalOperation {
    pub creator: String,
    pub receiver: String,
    pub start_date: TimePointSec,
    pub end_date: TimePointSec,
    pub daily_pay: Asset,
    pub subject: String,
    pub permlink: String,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(CreateProposalOperation {
    creator,
    receiver,
    start_date,
    end_date,
    daily_pay,
    subject,
    permlink,
    extensions,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProposalVotesOperation {
    pub voter: String,
    pub proposal_ids: BTreeSet<i64>,
    pub approve: bool,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(UpdateProposalVotesOperation {
    voter,
    proposal_ids,
    approve,
    extensions,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveProposalOperation {
    pub proposal_owner: String,
    pub proposal_ids: BTreeSet<i64>,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(RemoveProposalOperation {
    proposal_owner,
    proposal_ids,
    extensions,
});

/// Moves a proposal's end date earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProposalEndDate {
    pub end_date: TimePointSec,
}

encode_fields!(UpdateProposalEndDate { end_date });

static_variant! {
    pub enum UpdateProposalExtension {
        0 => Void(Void) = "void_t",
        1 => EndDate(UpdateProposalEndDate) = "update_proposal_end_date",
    }
}

/// Edits an existing proposal. `daily_pay` may only go down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProposalOperation {
    #[serde(deserialize_with = "number_or_string")]
    pub proposal_id: i64,
    pub creator: String,
    pub daily_pay: Asset,
    pub subject: String,
    pub permlink: String,
    #[serde(default)]
    pub extensions: Vec<UpdateProposalExtension>,
}

encode_fields!(UpdateProposalOperation {
    proposal_id,
    creator,
    daily_pay,
    subject,
    permlink,
    extensions,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_to_bytes;
    use serde_json::json;

    #[test]
    fn proposal_ids_are_sorted_i64() {
        let op: UpdateProposalVotesOperation = serde_json::from_value(json!({
            "voter": "v",
            "proposal_ids": [5, 2],
            "approve": true,
        }))
        .unwrap();
        let bytes = encode_to_bytes(&op).unwrap();
        assert_eq!(&bytes[..3], &[1, b'v', 2]);
        assert_eq!(&bytes[3..11], &2i64.to_le_bytes());
        assert_eq!(&bytes[11..19], &5i64.to_le_bytes());
        assert_eq!(&bytes[19..], &[1, 0]);
    }

    #[test]
    fn end_date_extension() {
        let op: UpdateProposalOperation = serde_json::from_value(json!({
            "proposal_id": "0",
            "creator": "gtg",
            "daily_pay": {"nai": "@@000000013", "amount": "240000000000", "precision": 3},
            "subject": "Return Proposal",
            "permlink": "dhf",
            "extensions": [{"type": "update_proposal_end_date", "value": {"end_date": "2029-12-31T23:59:59"}}]
        }))
        .unwrap();
        assert_eq!(op.proposal_id, 0);
        let hex = hex::encode(encode_to_bytes(&op).unwrap());
        // count 1, variant 1, then 2029-12-31T23:59:59 as u32.
        assert!(hex.ends_with(&format!("0101{}", hex::encode(1_893_455_999u32.to_le_bytes()))));
    }
}
