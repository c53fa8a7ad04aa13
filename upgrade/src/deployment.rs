use crate::error::UpgradeError;
use crate::marker::VersionMarker;
use serde::{Deserialize, Serialize};
use synbtc_types::Address;

/// Upgradeable L2 deployment shim.
///
/// Storage persists across logic versions; each version's initializer
/// fills in only the storage it introduced. V1 set governance and the
/// token address, V2 was a storage migration with no new fields, V3 added
/// the bridge adapter address.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct L2Deployment {
    marker: VersionMarker,
    governance: Option<Address>,
    token: Option<Address>,
    bridge: Option<Address>,
}

impl L2Deployment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(&self) -> u32 {
        self.marker.highest_applied()
    }

    pub fn governance(&self) -> Option<Address> {
        self.governance
    }

    pub fn token(&self) -> Option<Address> {
        self.token
    }

    pub fn bridge(&self) -> Option<Address> {
        self.bridge
    }

    pub fn initialize_v1(&mut self, governance: Address, token: Address) -> Result<(), UpgradeError> {
        self.marker.apply(1)?;
        self.governance = Some(governance);
        self.token = Some(token);
        Ok(())
    }

    /// Historical migration step; touches no fields that still exist.
    pub fn initialize_v2(&mut self) -> Result<(), UpgradeError> {
        self.marker.apply(2)
    }

    pub fn initialize_v3(&mut self, bridge: Address) -> Result<(), UpgradeError> {
        self.marker.apply(3)?;
        self.bridge = Some(bridge);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_address(n: u8) -> Address {
        Address::new([n; 20])
    }

    #[test]
    fn test_full_initialization_sequence() {
        let mut deployment = L2Deployment::new();
        deployment
            .initialize_v1(test_address(1), test_address(2))
            .unwrap();
        deployment.initialize_v2().unwrap();
        deployment.initialize_v3(test_address(3)).unwrap();

        assert_eq!(deployment.version(), 3);
        assert_eq!(deployment.governance(), Some(test_address(1)));
        assert_eq!(deployment.token(), Some(test_address(2)));
        assert_eq!(deployment.bridge(), Some(test_address(3)));
    }

    #[test]
    fn test_v3_before_v2_fails_and_sets_nothing() {
        let mut deployment = L2Deployment::new();
        deployment
            .initialize_v1(test_address(1), test_address(2))
            .unwrap();
        assert_eq!(
            deployment.initialize_v3(test_address(3)),
            Err(UpgradeError::PriorVersionMissing { version: 3 })
        );
        assert_eq!(deployment.bridge(), None);
    }

    #[test]
    fn test_v1_replay_does_not_rotate_governance() {
        let mut deployment = L2Deployment::new();
        deployment
            .initialize_v1(test_address(1), test_address(2))
            .unwrap();
        assert_eq!(
            deployment.initialize_v1(test_address(9), test_address(9)),
            Err(UpgradeError::AlreadyInitialized {
                version: 1,
                highest_applied: 1
            })
        );
        assert_eq!(deployment.governance(), Some(test_address(1)));
    }
}
