use synbtc_ledger::LedgerError;
use synbtc_types::{Address, ChainId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("governance-only operation attempted by {0}")]
    GovernanceOnly(Address),

    #[error("duplicate message nonce {nonce} from {source_chain}")]
    DuplicateMessage { source_chain: ChainId, nonce: u64 },

    #[error("message addressed to {destination}, not this chain")]
    MisroutedMessage { destination: ChainId },

    #[error("no deployment pending for {0}")]
    DeploymentNotPending(Address),

    #[error("token {0} is already bridged")]
    AlreadyBridged(Address),

    #[error("bridged supply overflow for {0}")]
    SupplyOverflow(Address),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
