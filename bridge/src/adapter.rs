//! Per-domain bridge adapter state machine.

use crate::channel::MessageChannel;
use crate::error::BridgeError;
use crate::message::BridgeMessage;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use synbtc_ledger::{TokenBank, TokenLedger};
use synbtc_types::{Address, ChainId};

/// Lifecycle of a bridged representation on the destination domain.
///
/// Absence from the status map means Unbridged. A token mints while
/// PendingConfirmation (funds must not be stranded waiting on the relayer),
/// but the mapping is only final once Bridged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeStatus {
    PendingConfirmation,
    Bridged,
}

/// One domain's half of a lock-and-mint bridge pairing.
///
/// Native tokens sent over the bridge are escrowed under the adapter's own
/// address; bridged tokens sent back are burned here and released from
/// escrow on their native domain. Mappings, once set, are never remapped —
/// a silent remap would strand or duplicate bridged liquidity.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BridgeAdapter {
    address: Address,
    governance: Address,
    chain_id: ChainId,
    remote_chain: ChainId,
    next_nonce: u64,
    delivered: HashSet<(ChainId, u64)>,
    native_to_bridged: HashMap<(ChainId, Address), Address>,
    bridged_to_native: HashMap<Address, (ChainId, Address)>,
    status: HashMap<Address, BridgeStatus>,
}

impl BridgeAdapter {
    pub fn new(
        address: Address,
        governance: Address,
        chain_id: ChainId,
        remote_chain: ChainId,
    ) -> Self {
        Self {
            address,
            governance,
            chain_id,
            remote_chain,
            next_nonce: 0,
            delivered: HashSet::new(),
            native_to_bridged: HashMap::new(),
            bridged_to_native: HashMap::new(),
            status: HashMap::new(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// The bridged counterpart of a remote native token, if one is known.
    pub fn native_to_bridged_token(&self, chain: ChainId, token: Address) -> Option<Address> {
        self.native_to_bridged.get(&(chain, token)).copied()
    }

    /// Bridge lifecycle status of a bridged token on this domain.
    pub fn bridge_status(&self, token: Address) -> Option<BridgeStatus> {
        self.status.get(&token).copied()
    }

    /// Send `amount` of `token` to `recipient` on the paired domain.
    ///
    /// A token native to this domain is escrowed under the adapter; a
    /// bridged token is burned and routed back to its native domain. Both
    /// paths require the caller to have approved `amount` to the adapter.
    /// Returns the outbound message nonce.
    pub fn bridge_token(
        &mut self,
        bank: &mut TokenBank,
        channel: &mut dyn MessageChannel,
        caller: Address,
        token: Address,
        amount: u64,
        recipient: Address,
    ) -> Result<u64, BridgeError> {
        let (token_chain, native_token) = match self.bridged_to_native.get(&token) {
            Some(&(chain, native)) => {
                bank.get_mut(token)?.burn_from(self.address, caller, amount)?;
                (chain, native)
            }
            None => {
                bank.get_mut(token)?
                    .transfer_from(self.address, caller, self.address, amount)?;
                (self.chain_id, token)
            }
        };

        let ledger = bank.get(token)?;
        let nonce = self.next_nonce;
        self.next_nonce += 1;

        let message = BridgeMessage {
            source_chain: self.chain_id,
            destination_chain: self.remote_chain,
            token_chain,
            token: native_token,
            token_name: ledger.name().to_string(),
            token_symbol: ledger.symbol().to_string(),
            amount,
            recipient,
            nonce,
        };
        tracing::info!(
            token = %token,
            amount,
            recipient = %recipient,
            nonce,
            "bridging token to remote domain"
        );
        channel.send(message);
        Ok(nonce)
    }

    /// Process one inbound message from the transport.
    ///
    /// Returns the address of the token credited on this domain. A
    /// duplicate (source chain, nonce) pair fails loudly; the nonce is only
    /// recorded once processing has fully succeeded, so a failed delivery
    /// can be retried by the transport's recovery machinery.
    pub fn receive(
        &mut self,
        bank: &mut TokenBank,
        message: &BridgeMessage,
    ) -> Result<Address, BridgeError> {
        if message.destination_chain != self.chain_id {
            return Err(BridgeError::MisroutedMessage {
                destination: message.destination_chain,
            });
        }
        let delivery_key = (message.source_chain, message.nonce);
        if self.delivered.contains(&delivery_key) {
            return Err(BridgeError::DuplicateMessage {
                source_chain: message.source_chain,
                nonce: message.nonce,
            });
        }

        let credited = if message.token_chain == self.chain_id {
            // The token is coming home: release it from escrow.
            bank.get_mut(message.token)?
                .transfer(self.address, message.recipient, message.amount)?;
            tracing::info!(
                token = %message.token,
                amount = message.amount,
                recipient = %message.recipient,
                "released escrowed token"
            );
            message.token
        } else {
            let key = (message.token_chain, message.token);
            let bridged = match self.native_to_bridged.get(&key) {
                Some(&bridged) => bridged,
                None => self.auto_deploy(bank, message)?,
            };
            let ledger = bank.get_mut(bridged)?;
            if ledger.total_supply().checked_add(message.amount).is_none() {
                return Err(BridgeError::SupplyOverflow(bridged));
            }
            ledger.mint(self.address, message.recipient, message.amount)?;
            tracing::info!(
                bridged = %bridged,
                amount = message.amount,
                recipient = %message.recipient,
                "minted bridged token"
            );
            bridged
        };

        self.delivered.insert(delivery_key);
        Ok(credited)
    }

    /// Finalize the mapping for bridged tokens whose destination contracts
    /// now exist. All listed tokens are validated before any transitions,
    /// so the call is all-or-nothing.
    pub fn confirm_deployment(&mut self, tokens: &[Address]) -> Result<(), BridgeError> {
        for &token in tokens {
            match self.status.get(&token) {
                Some(BridgeStatus::PendingConfirmation) => {}
                Some(BridgeStatus::Bridged) => return Err(BridgeError::AlreadyBridged(token)),
                None => return Err(BridgeError::DeploymentNotPending(token)),
            }
        }
        for &token in tokens {
            self.status.insert(token, BridgeStatus::Bridged);
            tracing::info!(token = %token, "bridged token deployment confirmed");
        }
        Ok(())
    }

    /// Register an already-deployed ledger as the canonical counterpart of
    /// a remote native token, skipping auto-deployment.
    ///
    /// This is how an independently rated synthetic ledger on this domain
    /// becomes bridge-linked. The adapter must separately be granted mint
    /// authority on `target`. Neither side of an existing mapping can be
    /// remapped.
    pub fn set_custom_contract(
        &mut self,
        caller: Address,
        source_chain: ChainId,
        native_token: Address,
        target: Address,
    ) -> Result<(), BridgeError> {
        if caller != self.governance {
            return Err(BridgeError::GovernanceOnly(caller));
        }
        if let Some(&existing) = self.native_to_bridged.get(&(source_chain, native_token)) {
            return Err(BridgeError::AlreadyBridged(existing));
        }
        if self.bridged_to_native.contains_key(&target) {
            return Err(BridgeError::AlreadyBridged(target));
        }
        self.native_to_bridged
            .insert((source_chain, native_token), target);
        self.bridged_to_native
            .insert(target, (source_chain, native_token));
        self.status.insert(target, BridgeStatus::PendingConfirmation);
        tracing::info!(
            native = %native_token,
            target = %target,
            chain = %source_chain,
            "registered custom bridged contract"
        );
        Ok(())
    }

    /// Deploy a fresh bridged ledger for a first-seen remote token.
    fn auto_deploy(
        &mut self,
        bank: &mut TokenBank,
        message: &BridgeMessage,
    ) -> Result<Address, BridgeError> {
        let mut material = Vec::with_capacity(28);
        material.extend_from_slice(&message.token_chain.raw().to_be_bytes());
        material.extend_from_slice(message.token.as_bytes());
        let bridged = Address::derive(b"synbtc-bridged-token", &material);

        bank.register(
            bridged,
            TokenLedger::new(
                format!("Bridged {}", message.token_name),
                message.token_symbol.clone(),
                self.address,
            ),
        )?;
        self.native_to_bridged
            .insert((message.token_chain, message.token), bridged);
        self.bridged_to_native
            .insert(bridged, (message.token_chain, message.token));
        self.status
            .insert(bridged, BridgeStatus::PendingConfirmation);
        tracing::info!(
            native = %message.token,
            bridged = %bridged,
            "auto-deployed bridged token ledger"
        );
        Ok(bridged)
    }
}
