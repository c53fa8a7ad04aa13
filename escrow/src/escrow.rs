//! Escrow as the custodian's own balance on each base-token ledger.
//!
//! There is no separate counter: what the custodian address holds on a base
//! token's ledger *is* the escrowed collateral. Lock pulls via the token's
//! allowance mechanism, release pushes via plain transfer, and any ledger
//! failure (insufficient allowance, insufficient balance, unknown token)
//! propagates verbatim — the escrow never wraps or retries.

use serde::{Deserialize, Serialize};
use synbtc_ledger::{LedgerError, TokenBank};
use synbtc_types::Address;

/// Custody of deposited base assets, identified by the custodian address.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BaseAssetEscrow {
    custodian: Address,
}

impl BaseAssetEscrow {
    pub fn new(custodian: Address) -> Self {
        Self { custodian }
    }

    pub fn custodian(&self) -> Address {
        self.custodian
    }

    /// Pull `amount` of `asset` from `from` into custody.
    ///
    /// Requires `from` to have approved at least `amount` to the custodian.
    /// Either the full amount moves or nothing does: the ledger validates
    /// allowance and balance before mutating anything.
    pub fn lock(
        &self,
        bank: &mut TokenBank,
        asset: Address,
        from: Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        bank.get_mut(asset)?
            .transfer_from(self.custodian, from, self.custodian, amount)
    }

    /// Push `amount` of `asset` from custody to `to`.
    pub fn release(
        &self,
        bank: &mut TokenBank,
        asset: Address,
        to: Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        bank.get_mut(asset)?.transfer(self.custodian, to, amount)
    }

    /// The quantity of `asset` currently in custody.
    pub fn held(&self, bank: &TokenBank, asset: Address) -> Result<u64, LedgerError> {
        Ok(bank.get(asset)?.balance_of(self.custodian))
    }
}
