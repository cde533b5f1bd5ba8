//! # Operations
//!
//! The actions a transaction carries. Schemas are grouped by area; each
//! struct's [`encode_fields!`](crate::encode_fields) declaration is its wire
//! layout. The [`registry`] ties them together into the [`Operation`] enum.

pub mod account;
pub mod content;
pub mod custom;
pub mod escrow;
pub mod market;
pub mod pow;
pub mod proposal;
pub mod registry;
pub mod transfer;
pub mod witness;

pub use account::*;
pub use content::*;
pub use custom::*;
pub use escrow::*;
pub use market::*;
pub use pow::*;
pub use proposal::*;
pub use registry::{Operation, OperationKind, UnknownOperation};
pub use transfer::*;
pub use witness::*;
