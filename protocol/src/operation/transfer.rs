//! Moving value between accounts: liquid transfers, staking, savings,
//! delegation, reward claims and recurring payments.

use serde::{Deserialize, Serialize};

use crate::codec::Void;
use crate::types::Asset;
use crate::{encode_fields, static_variant};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferOperation {
    pub from: String,
    pub to: String,
    pub amount: Asset,
    pub memo: String,
}

encode_fields!(TransferOperation {
    from,
    to,
    amount,
    memo,
});

/// Stakes HIVE as VESTS, optionally for another account (`to` may be empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferToVestingOperation {
    pub from: String,
    pub to: String,
    pub amount: Asset,
}

encode_fields!(TransferToVestingOperation { from, to, amount });

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawVestingOperation {
    pub account: String,
    pub vesting_shares: Asset,
}

encode_fields!(WithdrawVestingOperation {
    account,
    vesting_shares,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetWithdrawVestingRouteOperation {
    pub from_account: String,
    pub to_account: String,
    pub percent: u16,
    pub auto_vest: bool,
}

encode_fields!(SetWithdrawVestingRouteOperation {
    from_account,
    to_account,
    percent,
    auto_vest,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferToSavingsOperation {
    pub from: String,
    pub to: String,
    pub amount: Asset,
    pub memo: String,
}

encode_fields!(TransferToSavingsOperation {
    from,
    to,
    amount,
    memo,
});

/// Starts a savings withdrawal; funds arrive after the savings delay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferFromSavingsOperation {
    pub from: String,
    pub request_id: u32,
    pub to: String,
    pub amount: Asset,
    pub memo: String,
}

encode_fields!(TransferFromSavingsOperation {
    from,
    request_id,
    to,
    amount,
    memo,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelTransferFromSavingsOperation {
    pub from: String,
    pub request_id: u32,
}

encode_fields!(CancelTransferFromSavingsOperation { from, request_id });

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRewardBalanceOperation {
    pub account: String,
    #[serde(alias = "reward_steem")]
    pub reward_hive: Asset,
    #[serde(alias = "reward_sbd")]
    pub reward_hbd: Asset,
    pub reward_vests: Asset,
}

encode_fields!(ClaimRewardBalanceOperation {
    account,
    reward_hive,
    reward_hbd,
    reward_vests,
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelegateVestingSharesOperation {
    pub delegator: String,
    pub delegatee: String,
    pub vesting_shares: Asset,
}

encode_fields!(DelegateVestingSharesOperation {
    delegator,
    delegatee,
    vesting_shares,
});

/// Distinguishes several recurring transfers between the same two accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrentTransferPairId {
    pub pair_id: u8,
}

encode_fields!(RecurrentTransferPairId { pair_id });

static_variant! {
    pub enum RecurrentTransferExtension {
        0 => Void(Void) = "void_t",
        1 => PairId(RecurrentTransferPairId) = "recurrent_transfer_pair_id",
    }
}

/// Schedules `executions` transfers of `amount`, one every `recurrence` hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrentTransferOperation {
    pub from: String,
    pub to: String,
    pub amount: Asset,
    pub memo: String,
    pub recurrence: u16,
    pub executions: u16,
    #[serde(default)]
    pub extensions: Vec<RecurrentTransferExtension>,
}

encode_fields!(RecurrentTransferOperation {
    from,
    to,
    amount,
    memo,
    recurrence,
    executions,
    extensions,
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_to_bytes;
    use crate::types::AssetSymbol;

    #[test]
    fn transfer_layout() {
        let op = TransferOperation {
            from: "alice".into(),
            to: "bob".into(),
            amount: Asset::from_scaled(1000, AssetSymbol::Hive),
            memo: "hi".into(),
        };
        assert_eq!(
            hex::encode(encode_to_bytes(&op).unwrap()),
            "05616c69636503626f62e8030000000000002320bcbe026869"
        );
    }

    #[test]
    fn recurrent_transfer_pair_id() {
        let op = RecurrentTransferOperation {
            from: "techcoderx".into(),
            to: "techcoderx.vsc".into(),
            amount: Asset::from_scaled(2, AssetSymbol::Hive),
            memo: String::new(),
            recurrence: 48,
            executions: 5,
            extensions: vec![RecurrentTransferPairId { pair_id: 1 }.into()],
        };
        let bytes = hex::encode(encode_to_bytes(&op).unwrap());
        assert!(bytes.ends_with("0030000500010101"), "{bytes}");
    }
}
