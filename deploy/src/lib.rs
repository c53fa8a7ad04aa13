//! Deployment bookkeeping: which contract lives at which address on which
//! chain, persisted as JSON so deploy tooling can tell a redeploy from a
//! first deploy.

mod error;
mod registry;

pub use error::DeployError;
pub use registry::{DeploymentRecord, DeploymentRegistry};
