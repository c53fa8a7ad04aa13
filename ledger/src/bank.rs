//! The per-domain token bank — an explicit keyed store of every ledger.
//!
//! Operations across the workspace take the bank as an argument instead of
//! reaching for ambient state; the caller decides which domain's bank a
//! transaction runs against.

use crate::error::LedgerError;
use crate::ledger::TokenLedger;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use synbtc_types::Address;

/// All token ledgers on one execution domain, keyed by contract address.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TokenBank {
    tokens: HashMap<Address, TokenLedger>,
}

impl TokenBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a ledger at `address`. Registering an occupied address fails;
    /// a domain never silently replaces a live token contract.
    pub fn register(&mut self, address: Address, ledger: TokenLedger) -> Result<(), LedgerError> {
        if self.tokens.contains_key(&address) {
            return Err(LedgerError::AlreadyRegistered(address));
        }
        self.tokens.insert(address, ledger);
        Ok(())
    }

    pub fn contains(&self, address: Address) -> bool {
        self.tokens.contains_key(&address)
    }

    pub fn get(&self, address: Address) -> Result<&TokenLedger, LedgerError> {
        self.tokens
            .get(&address)
            .ok_or(LedgerError::UnknownToken(address))
    }

    pub fn get_mut(&mut self, address: Address) -> Result<&mut TokenLedger, LedgerError> {
        self.tokens
            .get_mut(&address)
            .ok_or(LedgerError::UnknownToken(address))
    }
}
