//! The conversion engine: deposit base tokens to mint synthetic units and
//! burn synthetic units to redeem base tokens, at governance-set rational
//! coefficients.

pub mod convert;
pub mod engine;
pub mod error;
pub mod snapshot;

pub use engine::SyntheticAsset;
pub use error::EngineError;
pub use snapshot::DomainSnapshot;
