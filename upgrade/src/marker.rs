use crate::error::UpgradeError;
use serde::{Deserialize, Serialize};

/// Tracks the highest initializer version applied to a deployment.
///
/// Versions start at 1. `apply(n)` succeeds only when `n` is the direct
/// successor of the highest applied version, so initializers run in order
/// and exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionMarker {
    highest_applied: u32,
}

impl VersionMarker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highest_applied(&self) -> u32 {
        self.highest_applied
    }

    pub fn apply(&mut self, version: u32) -> Result<(), UpgradeError> {
        if version <= self.highest_applied {
            return Err(UpgradeError::AlreadyInitialized {
                version,
                highest_applied: self.highest_applied,
            });
        }
        if version > self.highest_applied + 1 {
            return Err(UpgradeError::PriorVersionMissing { version });
        }
        self.highest_applied = version;
        Ok(())
    }
}
