use synbtc_types::Address;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient balance: need {need}, have {have}")]
    InsufficientBalance { need: u64, have: u64 },

    #[error("insufficient allowance: need {need}, have {have}")]
    InsufficientAllowance { need: u64, have: u64 },

    #[error("{0} is not an authorized minter")]
    NotMinter(Address),

    #[error("total supply overflow")]
    SupplyOverflow,

    #[error("unknown token {0}")]
    UnknownToken(Address),

    #[error("token {0} is already registered")]
    AlreadyRegistered(Address),
}
