//! Execution-domain (chain) identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an independent execution domain, e.g. an L1 or an L2.
///
/// Each domain runs its own token bank, synthetic ledger, and rate table;
/// chain ids key the bridge mappings between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChainId(u64);

impl ChainId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chain-{}", self.0)
    }
}
