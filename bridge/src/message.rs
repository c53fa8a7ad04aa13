//! Cross-domain bridge messages.

use serde::{Deserialize, Serialize};
use synbtc_types::{Address, ChainId};

/// One lock-and-mint instruction sent across the transport.
///
/// `token` is always the token's address on its *native* chain, and
/// `token_chain` names that chain; the receiver uses the pair to decide
/// between releasing escrow (the token is coming home) and minting a
/// bridged representation. Name and symbol ride along so a first-time
/// receiver can deploy the bridged ledger without a metadata round trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeMessage {
    pub source_chain: ChainId,
    pub destination_chain: ChainId,
    pub token_chain: ChainId,
    pub token: Address,
    pub token_name: String,
    pub token_symbol: String,
    pub amount: u64,
    pub recipient: Address,
    pub nonce: u64,
}
