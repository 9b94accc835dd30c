use anyhow::anyhow;
use std::{fmt, str};

/// The identifier of a face: a network attachment point on a node
/// through which packets flow.
///
/// Faces are owned and numbered by the host engine. The tracer accepts
/// any [`FaceId`] transparently and starts a fresh counter pair the
/// first time it sees one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FaceId(u64);

impl FaceId {
    pub const ZERO: Self = FaceId::new(0);
    pub const ONE: Self = FaceId::new(1);

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

impl str::FromStr for FaceId {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self).map_err(|error| anyhow!("{error}"))
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print() {
        assert_eq!(format!("{}", FaceId(7)), "7")
    }

    #[test]
    fn parse() {
        assert_eq!("7".parse::<FaceId>().unwrap(), FaceId(7));
    }

    #[test]
    fn ordering_is_numeric() {
        assert!(FaceId::ZERO < FaceId::ONE);
        assert!(FaceId::new(2) < FaceId::new(10));
    }
}
