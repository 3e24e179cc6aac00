//! Chain (network) identity as reported by the wallet-connection client.

use serde::{Deserialize, Serialize};

// ============================================================================
// Chain
// ============================================================================

/// A blockchain network identified by numeric id and display name.
///
/// Chains are supplied by the wallet-connection client and never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chain {
    /// Numeric chain id (e.g. `1` for Ethereum mainnet).
    pub id: u64,
    /// Human-readable network name.
    pub name: String,
}

impl Chain {
    /// Creates a new chain.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Returns `true` if `chain_id` is one of the supported chains.
///
/// An absent chain list supports nothing, so every chain is unknown.
#[must_use]
pub fn is_known_chain(chains: Option<&[Chain]>, chain_id: u64) -> bool {
    chains.is_some_and(|chains| chains.iter().any(|c| c.id == chain_id))
}

/// Finds a chain by id.
#[must_use]
pub fn find_chain(chains: &[Chain], chain_id: u64) -> Option<&Chain> {
    chains.iter().find(|c| c.id == chain_id)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chains() -> Vec<Chain> {
        vec![Chain::new(1, "Ethereum"), Chain::new(137, "Polygon")]
    }

    #[test]
    fn test_is_known_chain() {
        let chains = chains();
        assert!(is_known_chain(Some(&chains), 1));
        assert!(is_known_chain(Some(&chains), 137));
        assert!(!is_known_chain(Some(&chains), 10));
        assert!(!is_known_chain(None, 1));
        assert!(!is_known_chain(Some(&[]), 1));
    }

    #[test]
    fn test_find_chain() {
        let chains = chains();
        assert_eq!(find_chain(&chains, 137).map(|c| c.name.as_str()), Some("Polygon"));
        assert!(find_chain(&chains, 5).is_none());
    }

    #[test]
    fn test_chain_display() {
        assert_eq!(Chain::new(10, "Optimism").to_string(), "Optimism (10)");
    }

    #[test]
    fn test_chain_json_shape() {
        let chain: Chain = serde_json::from_str(r#"{"id":42161,"name":"Arbitrum"}"#).unwrap();
        assert_eq!(chain, Chain::new(42161, "Arbitrum"));
    }
}
