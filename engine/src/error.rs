use synbtc_ledger::LedgerError;
use synbtc_rates::RateError;
use synbtc_types::Address;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("governance-only operation attempted by {0}")]
    GovernanceOnly(Address),

    #[error("arithmetic overflow in conversion")]
    ArithmeticOverflow,

    #[error(transparent)]
    Rate(#[from] RateError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("snapshot codec error: {0}")]
    Snapshot(String),
}
