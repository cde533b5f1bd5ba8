//! The operation registry.
//!
//! Every operation kind has a stable numeric id that is written as a varint
//! in front of its fields. The table below is the single source of truth for
//! ids, wire names and schemas. It is append-only: new kinds go at the end
//! with the next id; existing rows never move.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use super::account::*;
use super::content::*;
use super::custom::*;
use super::escrow::*;
use super::market::*;
use super::pow::*;
use super::proposal::*;
use super::transfer::*;
use super::witness::*;
use crate::codec::variant::{split_tagged, Tag};
use crate::codec::{BinaryWriter, Encode};
use crate::error::{Error, Result};

const TYPE_SUFFIX: &str = "_operation";

/// An operation whose kind is not in the registry. It survives JSON
/// round-trips untouched but cannot be encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownOperation {
    pub kind: String,
    pub value: Value,
}

macro_rules! define_operations {
    ($( $id:literal => $variant:ident($body:ty) = $name:literal ),* $(,)?) => {
        /// Every registered operation kind.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum OperationKind {
            $( $variant, )*
        }

        impl OperationKind {
            /// All kinds in id order.
            pub const ALL: &'static [OperationKind] = &[ $( OperationKind::$variant, )* ];

            /// The protocol id.
            pub fn id(self) -> u32 {
                match self {
                    $( OperationKind::$variant => $id, )*
                }
            }

            /// Short name, e.g. `transfer`.
            pub fn name(self) -> &'static str {
                match self {
                    $( OperationKind::$variant => $name, )*
                }
            }

            /// JSON type name, e.g. `transfer_operation`.
            pub fn type_name(self) -> &'static str {
                match self {
                    $( OperationKind::$variant => concat!($name, "_operation"), )*
                }
            }

            pub fn from_id(id: u32) -> Option<Self> {
                match id {
                    $( $id => Some(OperationKind::$variant), )*
                    _ => None,
                }
            }
        }

        /// A signed-transaction operation.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Operation {
            $( $variant($body), )*
            /// Deserialized from an unregistered kind. Fails to encode.
            Unknown(UnknownOperation),
        }

        impl Operation {
            /// The registered kind, or `None` for [`Operation::Unknown`].
            pub fn kind(&self) -> Option<OperationKind> {
                match self {
                    $( Operation::$variant(_) => Some(OperationKind::$variant), )*
                    Operation::Unknown(_) => None,
                }
            }

            fn encode_body(&self, writer: &mut BinaryWriter) -> Result<()> {
                match self {
                    $( Operation::$variant(op) => op.encode(writer), )*
                    Operation::Unknown(op) => Err(Error::UnknownOperationKind(op.kind.clone())),
                }
            }

            fn body_to_value(&self) -> serde_json::Result<Value> {
                match self {
                    $( Operation::$variant(op) => serde_json::to_value(op), )*
                    Operation::Unknown(op) => Ok(op.value.clone()),
                }
            }

            fn from_parts(kind: OperationKind, value: Value) -> serde_json::Result<Self> {
                match kind {
                    $( OperationKind::$variant => serde_json::from_value(value).map(Operation::$variant), )*
                }
            }
        }

        $(
            impl From<$body> for Operation {
                fn from(op: $body) -> Self {
                    Operation::$variant(op)
                }
            }
        )*
    };
}

define_operations! {
    0 => Vote(VoteOperation) = "vote",
    1 => Comment(CommentOperation) = "comment",
    2 => Transfer(TransferOperation) = "transfer",
    3 => TransferToVesting(TransferToVestingOperation) = "transfer_to_vesting",
    4 => WithdrawVesting(WithdrawVestingOperation) = "withdraw_vesting",
    5 => LimitOrderCreate(LimitOrderCreateOperation) = "limit_order_create",
    6 => LimitOrderCancel(LimitOrderCancelOperation) = "limit_order_cancel",
    7 => FeedPublish(FeedPublishOperation) = "feed_publish",
    8 => Convert(ConvertOperation) = "convert",
    9 => AccountCreate(AccountCreateOperation) = "account_create",
    10 => AccountUpdate(AccountUpdateOperation) = "account_update",
    11 => WitnessUpdate(WitnessUpdateOperation) = "witness_update",
    12 => AccountWitnessVote(AccountWitnessVoteOperation) = "account_witness_vote",
    13 => AccountWitnessProxy(AccountWitnessProxyOperation) = "account_witness_proxy",
    14 => Pow(PowOperation) = "pow",
    15 => Custom(CustomOperation) = "custom",
    16 => ReportOverProduction(ReportOverProductionOperation) = "report_over_production",
    17 => DeleteComment(DeleteCommentOperation) = "delete_comment",
    18 => CustomJson(CustomJsonOperation) = "custom_json",
    19 => CommentOptions(CommentOptionsOperation) = "comment_options",
    20 => SetWithdrawVestingRoute(SetWithdrawVestingRouteOperation) = "set_withdraw_vesting_route",
    21 => LimitOrderCreate2(LimitOrderCreate2Operation) = "limit_order_create2",
    22 => ClaimAccount(ClaimAccountOperation) = "claim_account",
    23 => CreateClaimedAccount(CreateClaimedAccountOperation) = "create_claimed_account",
    24 => RequestAccountRecovery(RequestAccountRecoveryOperation) = "request_account_recovery",
    25 => RecoverAccount(RecoverAccountOperation) = "recover_account",
    26 => ChangeRecoveryAccount(ChangeRecoveryAccountOperation) = "change_recovery_account",
    27 => EscrowTransfer(EscrowTransferOperation) = "escrow_transfer",
    28 => EscrowDispute(EscrowDisputeOperation) = "escrow_dispute",
    29 => EscrowRelease(EscrowReleaseOperation) = "escrow_release",
    30 => Pow2(Pow2Operation) = "pow2",
    31 => EscrowApprove(EscrowApproveOperation) = "escrow_approve",
    32 => TransferToSavings(TransferToSavingsOperation) = "transfer_to_savings",
    33 => TransferFromSavings(TransferFromSavingsOperation) = "transfer_from_savings",
    34 => CancelTransferFromSavings(CancelTransferFromSavingsOperation) = "cancel_transfer_from_savings",
    35 => CustomBinary(CustomBinaryOperation) = "custom_binary",
    36 => DeclineVotingRights(DeclineVotingRightsOperation) = "decline_voting_rights",
    37 => ResetAccount(ResetAccountOperation) = "reset_account",
    38 => SetResetAccount(SetResetAccountOperation) = "set_reset_account",
    39 => ClaimRewardBalance(ClaimRewardBalanceOperation) = "claim_reward_balance",
    40 => DelegateVestingShares(DelegateVestingSharesOperation) = "delegate_vesting_shares",
    41 => AccountCreateWithDelegation(AccountCreateWithDelegationOperation) = "account_create_with_delegation",
    42 => WitnessSetProperties(WitnessSetPropertiesOperation) = "witness_set_properties",
    43 => AccountUpdate2(AccountUpdate2Operation) = "account_update2",
    44 => CreateProposal(CreateProposalOperation) = "create_proposal",
    45 => UpdateProposalVotes(UpdateProposalVotesOperation) = "update_proposal_votes",
    46 => RemoveProposal(RemoveProposalOperation) = "remove_proposal",
    47 => UpdateProposal(UpdateProposalOperation) = "update_proposal",
    48 => CollateralizedConvert(CollateralizedConvertOperation) = "collateralized_convert",
    49 => RecurrentTransfer(RecurrentTransferOperation) = "recurrent_transfer",
}

impl OperationKind {
    /// Resolves `transfer_operation` or the legacy short `transfer`.
    pub fn from_name(name: &str) -> Result<Self> {
        let short = name.strip_suffix(TYPE_SUFFIX).unwrap_or(name);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == short)
            .ok_or_else(|| Error::UnknownOperationKind(name.to_string()))
    }
}

impl FromStr for OperationKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::from_name(name)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl Operation {
    /// The JSON type name, or the raw kind of an unknown operation.
    pub fn type_name(&self) -> &str {
        match self {
            Operation::Unknown(op) => &op.kind,
            known => known.kind().map_or("", OperationKind::type_name),
        }
    }
}

impl Encode for Operation {
    fn encode(&self, writer: &mut BinaryWriter) -> Result<()> {
        let kind = self
            .kind()
            .ok_or_else(|| Error::UnknownOperationKind(self.type_name().to_string()))?;
        trace!(kind = kind.type_name(), id = kind.id(), "encoding operation");
        writer.write_varint32(kind.id(), None)?;
        self.encode_body(writer)
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::Error as _;
        let value = self.body_to_value().map_err(S::Error::custom)?;
        let mut state = serializer.serialize_struct("Operation", 2)?;
        state.serialize_field("type", self.type_name())?;
        state.serialize_field("value", &value)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let (tag, value) = split_tagged(raw).map_err(D::Error::custom)?;
        let kind = match &tag {
            Tag::Name(name) => OperationKind::from_name(name).ok(),
            Tag::Id(id) => u32::try_from(*id).ok().and_then(OperationKind::from_id),
        };
        match kind {
            Some(kind) => Operation::from_parts(kind, value)
                .map_err(|e| D::Error::custom(format!("{}: {}", kind, e))),
            None => Ok(Operation::Unknown(UnknownOperation {
                kind: match tag {
                    Tag::Name(name) => name,
                    Tag::Id(id) => id.to_string(),
                },
                value,
            })),
        }
    }
}
