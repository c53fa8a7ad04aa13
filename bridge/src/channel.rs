//! Abstract outbound message transport.

use crate::message::BridgeMessage;

/// The adapter's view of the cross-domain transport.
///
/// Implementations queue the message for relay; delivery is asynchronous,
/// at-most-once, and FIFO per channel. Acceptance into the queue cannot
/// fail — everything that can go wrong afterwards is the transport's
/// problem and is surfaced on the destination domain, not here.
pub trait MessageChannel {
    fn send(&mut self, message: BridgeMessage);
}
