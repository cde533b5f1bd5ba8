//! Account creation, key management and recovery.

use serde::{Deserialize, Serialize};

use crate::crypto::PublicKey;
use crate::encode_fields;
use crate::types::{Asset, Authority, Extensions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCreateOperation {
    pub fee: Asset,
    pub creator: String,
    pub new_account_name: String,
    pub owner: Authority,
    pub active: Authority,
    pub posting: Authority,
    pub memo_key: PublicKey,
    pub json_metadata: String,
}

encode_fields!(AccountCreateOperation {
    fee,
    creator,
    new_account_name,
    owner,
    active,
    posting,
    memo_key,
    json_metadata,
});

/// Replaces any of an account's authorities. Absent authorities are unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdateOperation {
    pub account: String,
    pub owner: Option<Authority>,
    pub active: Option<Authority>,
    pub posting: Option<Authority>,
    pub memo_key: PublicKey,
    pub json_metadata: String,
}

encode_fields!(AccountUpdateOperation {
    account,
    owner,
    active,
    posting,
    memo_key,
    json_metadata,
});

/// Pays for (or spends resource credits on) an account creation token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimAccountOperation {
    pub creator: String,
    pub fee: Asset,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(ClaimAccountOperation {
    creator,
    fee,
    extensions,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateClaimedAccountOperation {
    pub creator: String,
    pub new_account_name: String,
    pub owner: Authority,
    pub active: Authority,
    pub posting: Authority,
    pub memo_key: PublicKey,
    pub json_metadata: String,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(CreateClaimedAccountOperation {
    creator,
    new_account_name,
    owner,
    active,
    posting,
    memo_key,
    json_metadata,
    extensions,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestAccountRecoveryOperation {
    pub recovery_account: String,
    pub account_to_recover: String,
    pub new_owner_authority: Authority,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(RequestAccountRecoveryOperation {
    recovery_account,
    account_to_recover,
    new_owner_authority,
    extensions,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoverAccountOperation {
    pub account_to_recover: String,
    pub new_owner_authority: Authority,
    pub recent_owner_authority: Authority,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(RecoverAccountOperation {
    account_to_recover,
    new_owner_authority,
    recent_owner_authority,
    extensions,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecoveryAccountOperation {
    pub account_to_recover: String,
    pub new_recovery_account: String,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(ChangeRecoveryAccountOperation {
    account_to_recover,
    new_recovery_account,
    extensions,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclineVotingRightsOperation {
    pub account: String,
    pub decline: bool,
}

encode_fields!(DeclineVotingRightsOperation { account, decline });

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetAccountOperation {
    pub reset_account: String,
    pub account_to_reset: String,
    pub new_owner_authority: Authority,
}

encode_fields!(ResetAccountOperation {
    reset_account,
    account_to_reset,
    new_owner_authority,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetResetAccountOperation {
    pub account: String,
    pub current_reset_account: String,
    pub reset_account: String,
}

encode_fields!(SetResetAccountOperation {
    account,
    current_reset_account,
    reset_account,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCreateWithDelegationOperation {
    pub fee: Asset,
    pub delegation: Asset,
    pub creator: String,
    pub new_account_name: String,
    pub owner: Authority,
    pub active: Authority,
    pub posting: Authority,
    pub memo_key: PublicKey,
    pub json_metadata: String,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(AccountCreateWithDelegationOperation {
    fee,
    delegation,
    creator,
    new_account_name,
    owner,
    active,
    posting,
    memo_key,
    json_metadata,
    extensions,
});

/// Newer form of [`AccountUpdateOperation`]: the memo key becomes optional
/// and posting metadata gets its own field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountUpdate2Operation {
    pub account: String,
    pub owner: Option<Authority>,
    pub active: Option<Authority>,
    pub posting: Option<Authority>,
    pub memo_key: Option<PublicKey>,
    pub json_metadata: String,
    pub posting_json_metadata: String,
    #[serde(default)]
    pub extensions: Extensions,
}

encode_fields!(AccountUpdate2Operation {
    account,
    owner,
    active,
    posting,
    memo_key,
    json_metadata,
    posting_json_metadata,
    extensions,
});
