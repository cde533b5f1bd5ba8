//! # Protocol Value Types
//!
//! The leaf values operations are built from: assets, timestamps, authorities
//! and extension placeholders. Each one knows its own wire form.

pub mod asset;
pub mod authority;
pub mod extension;
pub mod time;

pub use asset::{Asset, AssetSymbol, AssetValue};
pub use authority::{Authority, BeneficiaryRoute, ChainProperties, Price};
pub use extension::{Extensions, FutureExtension};
pub use time::TimePointSec;
