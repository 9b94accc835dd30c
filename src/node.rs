use anyhow::anyhow;
use std::{fmt, str};

/// The identifier of a simulated node in the host engine.
///
/// The host engine owns the nodes; this crate only keeps the identifier
/// as a non-owning key. Mint one with [`NodeId::new`] from whatever the
/// host uses internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub const ZERO: Self = NodeId::new(0);
    pub const ONE: Self = NodeId::new(1);

    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// get the raw value of the identifier
    #[inline]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl str::FromStr for NodeId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|error| anyhow!("{error}"))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print() {
        assert_eq!(format!("{}", NodeId(42)), "42")
    }

    #[test]
    fn parse() {
        assert_eq!("42".parse::<NodeId>().unwrap(), NodeId(42));
    }

    #[test]
    fn parse_invalid() {
        assert!("forty-two".parse::<NodeId>().is_err());
    }
}
