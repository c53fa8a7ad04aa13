//! Whole-domain persistence: the engine and its token bank as one blob.

use crate::engine::SyntheticAsset;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use synbtc_ledger::TokenBank;

/// A serializable capture of one domain: the synthetic engine (governance,
/// rate table, escrow binding) plus every token ledger in the bank.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DomainSnapshot {
    engine: SyntheticAsset,
    bank: TokenBank,
}

impl DomainSnapshot {
    pub fn capture(engine: &SyntheticAsset, bank: &TokenBank) -> Self {
        Self {
            engine: engine.clone(),
            bank: bank.clone(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        bincode::deserialize(bytes).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    pub fn restore(self) -> (SyntheticAsset, TokenBank) {
        (self.engine, self.bank)
    }
}
