//! Fingerprints for assembled pages

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 fingerprint. Two runs over identical inputs must produce the
/// same fingerprint, so comparing one value checks a whole assembly.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    pub fn from_text(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self)
    }
}

/// Short form: the first 8 bytes in hex
impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0[..8] {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_keys_same_fingerprint() {
        assert_eq!(
            ContentHash::from_text("hero-split|cta-banner"),
            ContentHash::from_text("hero-split|cta-banner")
        );
        assert_ne!(
            ContentHash::from_text("hero-split|cta-banner"),
            ContentHash::from_text("cta-banner|hero-split")
        );
    }

    #[test]
    fn test_hex_forms() {
        let h = ContentHash::from_text("");
        assert_eq!(h.to_hex().len(), 64);
        assert!(h.to_hex().starts_with("e3b0c442"));
        assert_eq!(h.to_string(), &h.to_hex()[..16]);
    }
}
