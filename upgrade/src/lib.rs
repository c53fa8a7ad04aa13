//! Versioned initializers for upgradeable deployments.
//!
//! An upgradeable deployment's storage outlives its logic. Each logic
//! version ships exactly one initializer, and the marker enforces that
//! initializers run in order and exactly once — re-running one would
//! clobber live storage, skipping one would leave it half-migrated.

mod deployment;
mod error;
mod marker;

pub use deployment::L2Deployment;
pub use error::UpgradeError;
pub use marker::VersionMarker;
