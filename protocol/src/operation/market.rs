//! Internal market orders, price feeds and conversions.

use serde::{Deserialize, Serialize};

use crate::encode_fields;
use crate::types::{Asset, Price, TimePointSec};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrderCreateOperation {
    pub owner: String,
    pub orderid: u32,
    pub amount_to_sell: Asset,
    pub min_to_receive: Asset,
    pub fill_or_kill: bool,
    pub expiration: TimePointSec,
}

encode_fields!(LimitOrderCreateOperation {
    owner,
    orderid,
    amount_to_sell,
    min_to_receive,
    fill_or_kill,
    expiration,
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitOrderCancelOperation {
    pub owner: String,
    pub orderid: u32,
}

encode_fields!(LimitOrderCancelOperation { owner, orderid });

/// A witness's HBD/HIVE price report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPublishOperation {
    pub publisher: String,
    pub exchange_rate: Price,
}

encode_fields!(FeedPublishOperation {
    publisher,
    exchange_rate,
});

/// HBD to HIVE conversion at the median feed price, settled after a delay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertOperation {
    pub owner: String,
    pub requestid: u32,
    pub amount: Asset,
}

encode_fields!(ConvertOperation {
    owner,
    requestid,
    amount,
});

/// Like [`LimitOrderCreateOperation`], priced by an exchange rate instead of
/// a minimum receive amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitOrderCreate2Operation {
    pub owner: String,
    pub orderid: u32,
    pub amount_to_sell: Asset,
    pub exchange_rate: Price,
    pub fill_or_kill: bool,
    pub expiration: TimePointSec,
}

encode_fields!(LimitOrderCreate2Operation {
    owner,
    orderid,
    amount_to_sell,
    exchange_rate,
    fill_or_kill,
    expiration,
});

/// HIVE to HBD conversion backed by collateral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollateralizedConvertOperation {
    pub owner: String,
    pub requestid: u32,
    pub amount: Asset,
}

encode_fields!(CollateralizedConvertOperation {
    owner,
    requestid,
    amount,
});
