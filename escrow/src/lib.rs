//! Base-asset custody for the conversion engine.

pub mod escrow;

pub use escrow::BaseAssetEscrow;
