//! Connected account balance.

use serde::{Deserialize, Serialize};

/// Number of decimals kept when displaying a balance.
const DISPLAY_DECIMALS: usize = 3;

/// Native balance of the connected account on the selected chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Decimal amount as formatted by the client (e.g. `"1.234567"`).
    pub amount: String,
    /// Currency symbol (e.g. `"ETH"`).
    pub symbol: String,
}

impl Balance {
    /// Creates a balance.
    #[must_use]
    pub fn new(amount: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            symbol: symbol.into(),
        }
    }

    /// Amount cut to at most three decimals, without rounding.
    #[must_use]
    pub fn display_amount(&self) -> String {
        match self.amount.split_once('.') {
            Some((int, dec)) => {
                let dec: String = dec.chars().take(DISPLAY_DECIMALS).collect();
                if dec.is_empty() {
                    int.to_string()
                } else {
                    format!("{int}.{dec}")
                }
            }
            None => self.amount.clone(),
        }
    }
}

impl std::fmt::Display for Balance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.display_amount(), self.symbol)
    }
}
