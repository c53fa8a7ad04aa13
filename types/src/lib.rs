//! Fundamental types for the synbtc accounting core.
//!
//! This crate defines the primitives shared across every other crate in the
//! workspace: addresses and execution-domain (chain) identifiers.

pub mod address;
pub mod chain;

pub use address::{Address, AddressError};
pub use chain::ChainId;
