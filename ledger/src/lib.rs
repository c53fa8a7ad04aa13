//! Fungible-balance ledgers and the per-domain token bank.
//!
//! `TokenLedger` is the single fungible-asset implementation used for base
//! tokens, the synthetic ledger, and auto-deployed bridged tokens; what
//! distinguishes them is who sits in the minter set. `TokenBank` is the
//! explicit keyed store of every ledger on one execution domain.

pub mod bank;
pub mod error;
pub mod ledger;

pub use bank::TokenBank;
pub use error::LedgerError;
pub use ledger::TokenLedger;
