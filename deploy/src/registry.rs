use crate::error::DeployError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use synbtc_types::{Address, ChainId};

/// One deployed contract: where it lives and the transaction that put it
/// there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub address: Address,
    pub tx_hash: String,
}

/// Deployment records keyed by chain and contract name.
///
/// The registry is the deploy tooling's memory between runs: `lookup`
/// decides redeploy-vs-first-deploy, and `record` keeps the previous entry
/// visible so an accidental redeploy over a live contract gets noticed.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeploymentRegistry {
    records: BTreeMap<ChainId, BTreeMap<String, DeploymentRecord>>,
}

impl DeploymentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, chain: ChainId, name: &str) -> Option<&DeploymentRecord> {
        self.records.get(&chain)?.get(name)
    }

    /// Record a deployment, returning the record it replaced, if any.
    pub fn record(
        &mut self,
        chain: ChainId,
        name: impl Into<String>,
        record: DeploymentRecord,
    ) -> Option<DeploymentRecord> {
        let name = name.into();
        let previous = self
            .records
            .entry(chain)
            .or_default()
            .insert(name.clone(), record);
        if let Some(ref old) = previous {
            tracing::warn!(
                %chain,
                %name,
                previous = %old.address,
                "overwriting existing deployment record"
            );
        }
        previous
    }

    pub fn load(path: &Path) -> Result<Self, DeployError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DeployError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| DeployError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), DeployError> {
        let contents =
            serde_json::to_string_pretty(self).map_err(|source| DeployError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        std::fs::write(path, contents).map_err(|source| DeployError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
