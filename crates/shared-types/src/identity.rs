//! # Caller Identity
//!
//! Identities are 20-byte address-like values. The ledger trusts them as
//! already authenticated by the surrounding transport; nothing in this crate
//! verifies them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte authenticated caller identity.
///
/// The all-zero identity is reserved as a sentinel and is never a legitimate
/// caller; the weak authenticity check on products relies on that.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Identity(pub [u8; 20]);

impl Identity {
    /// The reserved all-zero identity.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Create an identity from raw bytes.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Create an identity whose low 8 bytes hold `value` big-endian.
    ///
    /// Convenience for tests and tools; real identities come from the
    /// transport layer.
    #[must_use]
    pub fn from_low_u64(value: u64) -> Self {
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    /// Raw bytes of this identity.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// True if this is the reserved zero identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({self})")
    }
}

impl From<[u8; 20]> for Identity {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}
