//! Posting, voting and comment payout options.

use serde::{Deserialize, Serialize};

use crate::types::{Asset, BeneficiaryRoute};
use crate::{encode_fields, static_variant};

/// Upvote (positive weight) or downvote (negative weight) a post.
/// `weight` is in basis points, `-10000..=10000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOperation {
    pub voter: String,
    pub author: String,
    pub permlink: String,
    pub weight: i16,
}

encode_fields!(VoteOperation {
    voter,
    author,
    permlink,
    weight,
});

/// Creates or edits a post. A post with an empty `parent_author` is a root
/// post and `parent_permlink` names its community or category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentOperation {
    pub parent_author: String,
    pub parent_permlink: String,
    pub author: String,
    pub permlink: String,
    pub title: String,
    pub body: String,
    pub json_metadata: String,
}

encode_fields!(CommentOperation {
    parent_author,
    parent_permlink,
    author,
    permlink,
    title,
    body,
    json_metadata,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCommentOperation {
    pub author: String,
    pub permlink: String,
}

encode_fields!(DeleteCommentOperation { author, permlink });

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentPayoutBeneficiaries {
    pub beneficiaries: Vec<BeneficiaryRoute>,
}

encode_fields!(CommentPayoutBeneficiaries { beneficiaries });

static_variant! {
    pub enum CommentOptionsExtension {
        0 => Beneficiaries(CommentPayoutBeneficiaries) = "comment_payout_beneficiaries",
    }
}

/// Payout settings for a post. Must be broadcast before the post has votes
/// for most fields to be changeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentOptionsOperation {
    pub author: String,
    pub permlink: String,
    pub max_accepted_payout: Asset,
    #[serde(alias = "percent_steem_dollars")]
    pub percent_hbd: u16,
    pub allow_votes: bool,
    pub allow_curation_rewards: bool,
    #[serde(default)]
    pub extensions: Vec<CommentOptionsExtension>,
}

encode_fields!(CommentOptionsOperation {
    author,
    permlink,
    max_accepted_payout,
    percent_hbd,
    allow_votes,
    allow_curation_rewards,
    extensions,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_to_bytes;
    use serde_json::json;

    #[test]
    fn vote_layout() {
        let vote = VoteOperation {
            voter: "a".into(),
            author: "b".into(),
            permlink: "c".into(),
            weight: -1,
        };
        assert_eq!(
            encode_to_bytes(&vote).unwrap(),
            vec![1, b'a', 1, b'b', 1, b'c', 0xff, 0xff]
        );
    }

    #[test]
    fn beneficiaries_extension() {
        let options: CommentOptionsOperation = serde_json::from_value(json!({
            "author": "x",
            "permlink": "y",
            "max_accepted_payout": "1000.000 HBD",
            "percent_hbd": 10000,
            "allow_votes": true,
            "allow_curation_rewards": false,
            "extensions": [[0, {"beneficiaries": [{"account": "z", "weight": 100}]}]]
        }))
        .unwrap();
        let bytes = encode_to_bytes(&options).unwrap();
        // x, y, asset(12), u16, bool, bool
        let tail = &bytes[2 + 2 + 12 + 2 + 2..];
        assert_eq!(tail, &[1, 0, 1, 1, b'z', 100, 0]);
    }

    #[test]
    fn legacy_field_alias() {
        let options: CommentOptionsOperation = serde_json::from_value(json!({
            "author": "x",
            "permlink": "y",
            "max_accepted_payout": "0.000 HBD",
            "percent_steem_dollars": 5000,
            "allow_votes": true,
            "allow_curation_rewards": true,
        }))
        .unwrap();
        assert_eq!(options.percent_hbd, 5000);
        assert!(options.extensions.is_empty());
    }
}
