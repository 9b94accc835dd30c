/// Trait for protocol objects observed by the tracer.
///
/// The tracer never looks inside an interest, nack or data packet. The
/// only thing it needs is the wire size, so that the byte counters can
/// be accumulated alongside the packet counters. Implement this for the
/// host's packet types, or pass one of the byte-container impls below.
pub trait Packet {
    /// the size of the packet on the wire, in bytes
    fn bytes_size(&self) -> u64;
}

impl Packet for () {
    fn bytes_size(&self) -> u64 {
        0
    }
}
impl Packet for [u8] {
    fn bytes_size(&self) -> u64 {
        self.len() as u64
    }
}
impl<const S: usize> Packet for [u8; S] {
    fn bytes_size(&self) -> u64 {
        S as u64
    }
}
impl Packet for Box<[u8]> {
    fn bytes_size(&self) -> u64 {
        self.len() as u64
    }
}
impl Packet for Vec<u8> {
    // the wire size, not the allocation
    fn bytes_size(&self) -> u64 {
        self.len() as u64
    }
}
