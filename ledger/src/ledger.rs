//! A fungible-balance ledger with allowances and a gated minter set.

use crate::error::LedgerError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use synbtc_types::Address;

/// A fungible token ledger: balances, allowances, total supply.
///
/// Invariant: `total_supply` equals the sum of all balances at all times.
/// `mint`/`burn` move both together; `transfer` preserves both. Minting and
/// burning are restricted to the minter set fixed at construction (plus any
/// addresses a minter later authorizes) — this is the safety-critical
/// access-control boundary for the synthetic ledger.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenLedger {
    name: String,
    symbol: String,
    balances: HashMap<Address, u64>,
    allowances: HashMap<Address, HashMap<Address, u64>>,
    total_supply: u64,
    minters: HashSet<Address>,
}

impl TokenLedger {
    /// Create a ledger whose only authorized minter is `minter`.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, minter: Address) -> Self {
        let mut minters = HashSet::new();
        minters.insert(minter);
        Self {
            name: name.into(),
            symbol: symbol.into(),
            balances: HashMap::new(),
            allowances: HashMap::new(),
            total_supply: 0,
            minters,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn balance_of(&self, account: Address) -> u64 {
        self.balances.get(&account).copied().unwrap_or(0)
    }

    pub fn total_supply(&self) -> u64 {
        self.total_supply
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> u64 {
        self.allowances
            .get(&owner)
            .and_then(|m| m.get(&spender))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_minter(&self, account: Address) -> bool {
        self.minters.contains(&account)
    }

    /// Iterate all (account, balance) pairs. Zero-balance accounts that were
    /// ever credited remain present; that is a valid terminal state.
    pub fn balances(&self) -> impl Iterator<Item = (&Address, &u64)> {
        self.balances.iter()
    }

    /// Authorize an additional minter. Only an existing minter may extend
    /// the set.
    pub fn add_minter(&mut self, caller: Address, minter: Address) -> Result<(), LedgerError> {
        if !self.minters.contains(&caller) {
            return Err(LedgerError::NotMinter(caller));
        }
        self.minters.insert(minter);
        Ok(())
    }

    /// Set `spender`'s allowance over the caller's balance.
    pub fn approve(&mut self, caller: Address, spender: Address, amount: u64) {
        self.allowances
            .entry(caller)
            .or_default()
            .insert(spender, amount);
    }

    /// Move `amount` from the caller to `to`.
    pub fn transfer(&mut self, caller: Address, to: Address, amount: u64) -> Result<(), LedgerError> {
        self.debit(caller, amount)?;
        self.credit(to, amount);
        Ok(())
    }

    /// Move `amount` from `from` to `to`, spending the caller's allowance.
    ///
    /// The allowance is checked before the balance, so an over-ask against a
    /// rich account still surfaces as `InsufficientAllowance`.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        self.spend_allowance(from, caller, amount)?;
        self.debit(from, amount)?;
        self.credit(to, amount);
        Ok(())
    }

    /// Create `amount` new units for `to`. Minter-only.
    pub fn mint(&mut self, caller: Address, to: Address, amount: u64) -> Result<(), LedgerError> {
        if !self.minters.contains(&caller) {
            return Err(LedgerError::NotMinter(caller));
        }
        self.total_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::SupplyOverflow)?;
        self.credit(to, amount);
        Ok(())
    }

    /// Destroy `amount` units held by `from`. Minter-only.
    pub fn burn(&mut self, caller: Address, from: Address, amount: u64) -> Result<(), LedgerError> {
        if !self.minters.contains(&caller) {
            return Err(LedgerError::NotMinter(caller));
        }
        self.debit(from, amount)?;
        self.total_supply -= amount;
        Ok(())
    }

    /// Destroy `amount` units held by `from`, spending the caller's
    /// allowance. Minter-only; used by a bridge adapter returning bridged
    /// units to the origin domain.
    pub fn burn_from(
        &mut self,
        caller: Address,
        from: Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        if !self.minters.contains(&caller) {
            return Err(LedgerError::NotMinter(caller));
        }
        self.spend_allowance(from, caller, amount)?;
        self.debit(from, amount)?;
        self.total_supply -= amount;
        Ok(())
    }

    fn spend_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let have = self.allowance(owner, spender);
        if have < amount {
            return Err(LedgerError::InsufficientAllowance { need: amount, have });
        }
        // Unwrap-free: the entry exists because have >= amount > 0 implies a
        // stored allowance, and have == amount == 0 writes harmlessly.
        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, have - amount);
        Ok(())
    }

    fn debit(&mut self, from: Address, amount: u64) -> Result<(), LedgerError> {
        let have = self.balance_of(from);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { need: amount, have });
        }
        self.balances.insert(from, have - amount);
        Ok(())
    }

    fn credit(&mut self, to: Address, amount: u64) {
        // Balance cannot exceed total_supply, which is overflow-checked.
        *self.balances.entry(to).or_insert(0) += amount;
    }
}
