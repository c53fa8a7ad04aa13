//! The bridge adapter: escrow-on-send, mint-on-receive, deployment
//! confirmation, and custom counterpart registration.
//!
//! The adapter owns the per-domain half of a lock-and-mint pairing. It
//! depends on an abstract outbound `MessageChannel`; queuing, proofs, and
//! finality belong to the transport, which also guarantees at-most-once
//! inbound delivery. The adapter still refuses loudly if handed a
//! duplicate.

pub mod adapter;
pub mod channel;
pub mod error;
pub mod message;

pub use adapter::{BridgeAdapter, BridgeStatus};
pub use channel::MessageChannel;
pub use error::BridgeError;
pub use message::BridgeMessage;
