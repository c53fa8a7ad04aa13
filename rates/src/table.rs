//! The rate table — pure data and validation, no authorization.
//!
//! Governance gating lives in the conversion engine; this table only
//! enforces coefficient well-formedness and the allow/deny status check.

use crate::error::RateError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use synbtc_types::Address;

/// A rational conversion rate between a base token and the synthetic unit.
///
/// Depositing `amount` base units mints `floor(amount * numerator / denominator)`
/// synthetic units. The denominator is validated non-zero at construction so
/// arithmetic code never has to re-check it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coefficient {
    numerator: u64,
    denominator: u64,
}

impl Coefficient {
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, RateError> {
        if denominator == 0 {
            return Err(RateError::InvalidCoefficient);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }
}

/// Registration status of a base token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseTokenStatus {
    Unset,
    Allowed,
    Denied,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct RateEntry {
    status: BaseTokenStatus,
    coefficient: Coefficient,
}

/// Per-asset status and coefficient, keyed by the base token's address.
///
/// A denied token keeps its coefficient but `get` treats it the same as a
/// token that was never registered.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RateTable {
    entries: HashMap<Address, RateEntry>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base token or change its coefficient; sets status Allowed.
    pub fn allow_or_change(&mut self, asset: Address, coefficient: Coefficient) {
        self.entries.insert(
            asset,
            RateEntry {
                status: BaseTokenStatus::Allowed,
                coefficient,
            },
        );
    }

    /// Deny a base token. The coefficient is left in place but inert.
    pub fn deny(&mut self, asset: Address) {
        match self.entries.get_mut(&asset) {
            Some(entry) => entry.status = BaseTokenStatus::Denied,
            None => {
                // Denying an unknown token records the denial so a later
                // allow is an explicit governance decision.
                self.entries.insert(
                    asset,
                    RateEntry {
                        status: BaseTokenStatus::Denied,
                        coefficient: Coefficient {
                            numerator: 0,
                            denominator: 1,
                        },
                    },
                );
            }
        }
    }

    /// Look up the coefficient for an Allowed token.
    ///
    /// Fails with `UnknownBaseToken` for Unset and Denied tokens alike.
    pub fn get(&self, asset: Address) -> Result<Coefficient, RateError> {
        match self.entries.get(&asset) {
            Some(entry) if entry.status == BaseTokenStatus::Allowed => Ok(entry.coefficient),
            _ => Err(RateError::UnknownBaseToken(asset)),
        }
    }

    /// Current status of a token (Unset if never registered).
    pub fn status(&self, asset: Address) -> BaseTokenStatus {
        self.entries
            .get(&asset)
            .map(|e| e.status)
            .unwrap_or(BaseTokenStatus::Unset)
    }
}
