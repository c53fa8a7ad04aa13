use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpgradeError {
    #[error("version {version} is already initialized (highest applied: {highest_applied})")]
    AlreadyInitialized { version: u32, highest_applied: u32 },

    #[error("version {version} cannot be applied before its predecessor")]
    PriorVersionMissing { version: u32 },
}
