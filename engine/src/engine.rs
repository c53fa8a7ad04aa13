//! The synthetic asset: a rate table, a fungible ledger, and escrow custody
//! bound together behind governance-gated registry mutations.

use crate::convert;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use synbtc_escrow::BaseAssetEscrow;
use synbtc_ledger::{TokenBank, TokenLedger};
use synbtc_rates::{Coefficient, RateTable};
use synbtc_types::Address;

/// One domain's synthetic asset core.
///
/// The engine's own address triples as the synthetic ledger's address in
/// the token bank, the escrow custodian, and the ledger's mint authority.
/// Every operation takes the domain's `TokenBank` explicitly; the engine
/// holds no ambient reference to shared state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyntheticAsset {
    address: Address,
    governance: Address,
    rates: RateTable,
    escrow: BaseAssetEscrow,
}

impl SyntheticAsset {
    /// Deploy the synthetic ledger into `bank` at `address` and return the
    /// engine controlling it.
    pub fn deploy(
        bank: &mut TokenBank,
        address: Address,
        governance: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<Self, EngineError> {
        bank.register(address, TokenLedger::new(name, symbol, address))?;
        Ok(Self {
            address,
            governance,
            rates: RateTable::new(),
            escrow: BaseAssetEscrow::new(address),
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn governance(&self) -> Address {
        self.governance
    }

    /// Synthetic balance of `account`.
    pub fn balance_of(&self, bank: &TokenBank, account: Address) -> Result<u64, EngineError> {
        Ok(bank.get(self.address)?.balance_of(account))
    }

    /// Total synthetic supply on this domain.
    pub fn total_supply(&self, bank: &TokenBank) -> Result<u64, EngineError> {
        Ok(bank.get(self.address)?.total_supply())
    }

    // ── Governance interface ────────────────────────────────────────────

    /// Register a base token or change its coefficient.
    pub fn allow_or_change_base_token(
        &mut self,
        caller: Address,
        asset: Address,
        numerator: u64,
        denominator: u64,
    ) -> Result<(), EngineError> {
        self.require_governance(caller)?;
        let coefficient = Coefficient::new(numerator, denominator)?;
        self.rates.allow_or_change(asset, coefficient);
        Ok(())
    }

    /// Deny a base token; its coefficient stays recorded but inert.
    pub fn deny_base_token(&mut self, caller: Address, asset: Address) -> Result<(), EngineError> {
        self.require_governance(caller)?;
        self.rates.deny(asset);
        Ok(())
    }

    /// Authorize `to` to mint and burn on the synthetic ledger.
    ///
    /// This is how an L2 deployment grants its bridge adapter authority
    /// over the domain's synthetic ledger.
    pub fn grant_minter(
        &self,
        bank: &mut TokenBank,
        caller: Address,
        to: Address,
    ) -> Result<(), EngineError> {
        self.require_governance(caller)?;
        bank.get_mut(self.address)?.add_minter(self.address, to)?;
        Ok(())
    }

    // ── User interface ──────────────────────────────────────────────────

    /// Coefficient for an allowed base token, as `(numerator, denominator)`.
    pub fn get_base_token(&self, asset: Address) -> Result<(u64, u64), EngineError> {
        let coefficient = self.rates.get(asset)?;
        Ok((coefficient.numerator(), coefficient.denominator()))
    }

    /// Deposit `amount` of `asset` and mint the converted synthetic amount
    /// to the caller.
    pub fn deposit_and_mint(
        &self,
        bank: &mut TokenBank,
        caller: Address,
        asset: Address,
        amount: u64,
    ) -> Result<u64, EngineError> {
        self.deposit_and_mint_to(bank, caller, asset, caller, amount)
    }

    /// Deposit `amount` of `asset` from the caller and mint to `recipient`.
    ///
    /// Returns the minted synthetic amount. The caller must have approved
    /// at least `amount` of the base token to this engine's address; an
    /// insufficient allowance surfaces as the ledger's own error.
    pub fn deposit_and_mint_to(
        &self,
        bank: &mut TokenBank,
        caller: Address,
        asset: Address,
        recipient: Address,
        amount: u64,
    ) -> Result<u64, EngineError> {
        let coefficient = self.rates.get(asset)?;
        let minted = convert::to_synthetic(amount, coefficient)?;

        // Validate the mint up front so a supply-overflow failure cannot
        // strand collateral in escrow after the pull.
        if bank
            .get(self.address)?
            .total_supply()
            .checked_add(minted)
            .is_none()
        {
            return Err(EngineError::Ledger(synbtc_ledger::LedgerError::SupplyOverflow));
        }

        self.escrow.lock(bank, asset, caller, amount)?;
        bank.get_mut(self.address)?
            .mint(self.address, recipient, minted)?;
        Ok(minted)
    }

    /// Burn `amount` synthetic units from the caller and redeem the
    /// converted base amount to the caller.
    pub fn burn_and_withdrawal(
        &self,
        bank: &mut TokenBank,
        caller: Address,
        asset: Address,
        amount: u64,
    ) -> Result<u64, EngineError> {
        self.burn_and_withdrawal_to(bank, caller, asset, caller, amount)
    }

    /// Burn `amount` synthetic units from the caller and redeem the
    /// converted base amount to `recipient`.
    ///
    /// Returns the released base amount. An insufficient synthetic balance
    /// surfaces as the ledger's own error.
    pub fn burn_and_withdrawal_to(
        &self,
        bank: &mut TokenBank,
        caller: Address,
        asset: Address,
        recipient: Address,
        amount: u64,
    ) -> Result<u64, EngineError> {
        let coefficient = self.rates.get(asset)?;
        let returned = convert::to_base(amount, coefficient)?;

        // Custody always covers floor-rounded obligations; re-check before
        // debiting so a misconfigured domain fails without a partial burn.
        let held = self.escrow.held(bank, asset)?;
        if held < returned {
            return Err(EngineError::Ledger(
                synbtc_ledger::LedgerError::InsufficientBalance {
                    need: returned,
                    have: held,
                },
            ));
        }

        bank.get_mut(self.address)?
            .burn(self.address, caller, amount)?;
        self.escrow.release(bank, asset, recipient, returned)?;
        Ok(returned)
    }

    fn require_governance(&self, caller: Address) -> Result<(), EngineError> {
        if caller != self.governance {
            return Err(EngineError::GovernanceOnly(caller));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synbtc_ledger::LedgerError;
    use synbtc_rates::RateError;

    fn test_address(n: u8) -> Address {
        Address::new([n; 20])
    }

    struct Fixture {
        bank: TokenBank,
        engine: SyntheticAsset,
        governance: Address,
        user: Address,
        wbtc: Address,
        tbtc: Address,
    }

    /// Mirrors the integration fixture: WBTC at 98/100 with a 300,000,000
    /// user balance, tBTC at 1/1 with 100,000,000.
    fn fixture() -> Fixture {
        let mut bank = TokenBank::new();
        let governance = test_address(1);
        let user = test_address(2);
        let deployer = test_address(9);
        let wbtc = test_address(10);
        let tbtc = test_address(11);

        let mut wbtc_ledger = TokenLedger::new("Wrapped Bitcoin", "WBTC", deployer);
        wbtc_ledger.mint(deployer, user, 300_000_000).unwrap();
        bank.register(wbtc, wbtc_ledger).unwrap();

        let mut tbtc_ledger = TokenLedger::new("tBTC", "TBTC", deployer);
        tbtc_ledger.mint(deployer, user, 100_000_000).unwrap();
        bank.register(tbtc, tbtc_ledger).unwrap();

        let engine = SyntheticAsset::deploy(
            &mut bank,
            test_address(100),
            governance,
            "Synthetic Bitcoin",
            "synBTC",
        )
        .unwrap();

        Fixture {
            bank,
            engine,
            governance,
            user,
            wbtc,
            tbtc,
        }
    }

    fn allow(f: &mut Fixture, asset: Address, num: u64, den: u64) {
        f.engine
            .allow_or_change_base_token(f.governance, asset, num, den)
            .unwrap();
    }

    fn approve(f: &mut Fixture, asset: Address, amount: u64) {
        let spender = f.engine.address();
        f.bank.get_mut(asset).unwrap().approve(f.user, spender, amount);
    }

    #[test]
    fn test_every_operation_rejects_unknown_base_token() {
        let mut f = fixture();
        let user = f.user;
        let wbtc = f.wbtc;

        let expected = EngineError::Rate(RateError::UnknownBaseToken(wbtc));
        assert_eq!(f.engine.get_base_token(wbtc).unwrap_err(), expected);
        assert_eq!(
            f.engine.deposit_and_mint(&mut f.bank, user, wbtc, 1).unwrap_err(),
            EngineError::Rate(RateError::UnknownBaseToken(wbtc))
        );
        assert_eq!(
            f.engine
                .deposit_and_mint_to(&mut f.bank, user, wbtc, user, 1)
                .unwrap_err(),
            EngineError::Rate(RateError::UnknownBaseToken(wbtc))
        );
        assert_eq!(
            f.engine.burn_and_withdrawal(&mut f.bank, user, wbtc, 1).unwrap_err(),
            EngineError::Rate(RateError::UnknownBaseToken(wbtc))
        );
        assert_eq!(
            f.engine
                .burn_and_withdrawal_to(&mut f.bank, user, wbtc, user, 1)
                .unwrap_err(),
            EngineError::Rate(RateError::UnknownBaseToken(wbtc))
        );
    }

    #[test]
    fn test_allow_then_deny_base_token() {
        let mut f = fixture();
        let wbtc = f.wbtc;
        allow(&mut f, wbtc, 98, 100);

        assert_eq!(f.engine.get_base_token(wbtc).unwrap(), (98, 100));

        f.engine.deny_base_token(f.governance, wbtc).unwrap();
        assert_eq!(
            f.engine.get_base_token(wbtc).unwrap_err(),
            EngineError::Rate(RateError::UnknownBaseToken(wbtc))
        );
    }

    #[test]
    fn test_registry_mutations_are_governance_only() {
        let mut f = fixture();
        let wbtc = f.wbtc;
        let user = f.user;

        assert_eq!(
            f.engine
                .allow_or_change_base_token(user, wbtc, 98, 100)
                .unwrap_err(),
            EngineError::GovernanceOnly(user)
        );
        assert_eq!(
            f.engine.deny_base_token(user, wbtc).unwrap_err(),
            EngineError::GovernanceOnly(user)
        );
        assert_eq!(
            f.engine.grant_minter(&mut f.bank, user, user).unwrap_err(),
            EngineError::GovernanceOnly(user)
        );
    }

    #[test]
    fn test_invalid_coefficient_rejected_at_write_time() {
        let mut f = fixture();
        let wbtc = f.wbtc;
        assert_eq!(
            f.engine
                .allow_or_change_base_token(f.governance, wbtc, 98, 0)
                .unwrap_err(),
            EngineError::Rate(RateError::InvalidCoefficient)
        );
    }

    #[test]
    fn test_insufficient_allowance_propagates_verbatim() {
        let mut f = fixture();
        let wbtc = f.wbtc;
        let user = f.user;
        allow(&mut f, wbtc, 98, 100);
        approve(&mut f, wbtc, 300_000_000);

        let result = f
            .engine
            .deposit_and_mint(&mut f.bank, user, wbtc, 300_000_001);
        assert_eq!(
            result.unwrap_err(),
            EngineError::Ledger(LedgerError::InsufficientAllowance {
                need: 300_000_001,
                have: 300_000_000
            })
        );
        assert_eq!(f.engine.balance_of(&f.bank, user).unwrap(), 0);
    }

    #[test]
    fn test_burn_without_balance_propagates_verbatim() {
        let mut f = fixture();
        let wbtc = f.wbtc;
        let user = f.user;
        allow(&mut f, wbtc, 98, 100);

        let result = f.engine.burn_and_withdrawal(&mut f.bank, user, wbtc, 1);
        assert_eq!(
            result.unwrap_err(),
            EngineError::Ledger(LedgerError::InsufficientBalance { need: 1, have: 0 })
        );
        assert_eq!(f.engine.balance_of(&f.bank, user).unwrap(), 0);
    }

    #[test]
    fn test_wbtc_fixture_deposit_and_full_redemption() {
        let mut f = fixture();
        let wbtc = f.wbtc;
        let user = f.user;
        allow(&mut f, wbtc, 98, 100);
        approve(&mut f, wbtc, 300_000_000);

        let minted = f
            .engine
            .deposit_and_mint(&mut f.bank, user, wbtc, 300_000_000)
            .unwrap();
        assert_eq!(minted, 294_000_000);
        assert_eq!(f.engine.balance_of(&f.bank, user).unwrap(), 294_000_000);
        assert_eq!(f.bank.get(wbtc).unwrap().balance_of(user), 0);

        let returned = f
            .engine
            .burn_and_withdrawal(&mut f.bank, user, wbtc, 294_000_000)
            .unwrap();
        assert_eq!(returned, 300_000_000);
        assert_eq!(f.engine.balance_of(&f.bank, user).unwrap(), 0);
        assert_eq!(f.bank.get(wbtc).unwrap().balance_of(user), 300_000_000);
        assert_eq!(f.engine.total_supply(&f.bank).unwrap(), 0);
    }

    #[test]
    fn test_one_to_one_peg_is_lossless() {
        let mut f = fixture();
        let tbtc = f.tbtc;
        let user = f.user;
        allow(&mut f, tbtc, 1, 1);
        approve(&mut f, tbtc, 100_000_000);

        let minted = f
            .engine
            .deposit_and_mint(&mut f.bank, user, tbtc, 100_000_000)
            .unwrap();
        assert_eq!(minted, 100_000_000);

        let returned = f
            .engine
            .burn_and_withdrawal(&mut f.bank, user, tbtc, 100_000_000)
            .unwrap();
        assert_eq!(returned, 100_000_000);
        assert_eq!(f.bank.get(tbtc).unwrap().balance_of(user), 100_000_000);
    }

    #[test]
    fn test_explicit_recipient_forms() {
        let mut f = fixture();
        let wbtc = f.wbtc;
        let user = f.user;
        let owner = test_address(3);
        allow(&mut f, wbtc, 98, 100);
        approve(&mut f, wbtc, 300_000_000);

        // User deposits, owner receives the synthetic units.
        f.engine
            .deposit_and_mint_to(&mut f.bank, user, wbtc, owner, 300_000_000)
            .unwrap();
        assert_eq!(f.engine.balance_of(&f.bank, owner).unwrap(), 294_000_000);
        assert_eq!(f.engine.balance_of(&f.bank, user).unwrap(), 0);

        // Owner burns, user receives the collateral back.
        f.engine
            .burn_and_withdrawal_to(&mut f.bank, owner, wbtc, user, 294_000_000)
            .unwrap();
        assert_eq!(f.engine.balance_of(&f.bank, owner).unwrap(), 0);
        assert_eq!(f.bank.get(wbtc).unwrap().balance_of(user), 300_000_000);
    }

    #[test]
    fn test_conversion_overflow_fails_before_escrow_moves() {
        let mut f = fixture();
        let wbtc = f.wbtc;
        let user = f.user;
        allow(&mut f, wbtc, u64::MAX, 1);
        approve(&mut f, wbtc, 300_000_000);

        let result = f.engine.deposit_and_mint(&mut f.bank, user, wbtc, 2);
        assert_eq!(result.unwrap_err(), EngineError::ArithmeticOverflow);
        assert_eq!(f.bank.get(wbtc).unwrap().balance_of(user), 300_000_000);
        assert_eq!(f.engine.total_supply(&f.bank).unwrap(), 0);
    }

    #[test]
    fn test_denied_token_rejected_even_with_escrowed_collateral() {
        let mut f = fixture();
        let wbtc = f.wbtc;
        let user = f.user;
        allow(&mut f, wbtc, 98, 100);
        approve(&mut f, wbtc, 300_000_000);
        f.engine
            .deposit_and_mint(&mut f.bank, user, wbtc, 300_000_000)
            .unwrap();

        f.engine.deny_base_token(f.governance, wbtc).unwrap();
        let result = f
            .engine
            .burn_and_withdrawal(&mut f.bank, user, wbtc, 294_000_000);
        assert_eq!(
            result.unwrap_err(),
            EngineError::Rate(RateError::UnknownBaseToken(wbtc))
        );
        // Synthetic balance untouched by the failed redemption.
        assert_eq!(f.engine.balance_of(&f.bank, user).unwrap(), 294_000_000);
    }
}
