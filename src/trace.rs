//! The event hooks the host engine dispatches into.

use crate::{face::FaceId, packet::Packet};

/// Network-layer trace hooks.
///
/// The host's forwarding path calls these synchronously whenever the
/// matching protocol event occurs on a face. The hooks are pure
/// side-effecting counter updates: they never block, never fail, and
/// may be re-entered from the dispatch point.
///
/// Hooks that carry a protocol object accumulate its wire size through
/// [`Packet::bytes_size`]. The two pending-interest outcome hooks have
/// no payload size semantics and account a size of zero.
pub trait L3Trace {
    /// an interest was sent out through `face`
    fn out_interests(&self, interest: &dyn Packet, face: FaceId);
    /// an interest was received on `face`
    fn in_interests(&self, interest: &dyn Packet, face: FaceId);
    /// an interest received on `face` was dropped
    fn drop_interests(&self, interest: &dyn Packet, face: FaceId);

    /// a nack was sent out through `face`
    fn out_nacks(&self, nack: &dyn Packet, face: FaceId);
    /// a nack was received on `face`
    fn in_nacks(&self, nack: &dyn Packet, face: FaceId);
    /// a nack received on `face` was dropped
    fn drop_nacks(&self, nack: &dyn Packet, face: FaceId);

    /// a data packet was sent out through `face`
    fn out_data(&self, data: &dyn Packet, face: FaceId);
    /// a data packet was received on `face`
    fn in_data(&self, data: &dyn Packet, face: FaceId);
    /// a data packet received on `face` was dropped
    fn drop_data(&self, data: &dyn Packet, face: FaceId);

    /// a pending interest on `face` was satisfied by data
    fn satisfied_interests(&self, face: FaceId);
    /// a pending interest on `face` timed out
    fn timed_out_interests(&self, face: FaceId);
}
