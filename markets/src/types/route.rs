use serde::{Deserialize, Serialize};

use crate::pubkey::{base58, Pubkey};
use crate::types::QuoteCurrency;

/// Ordered markets to traverse when trading one token for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MarketRoute {
    /// One side of the trade is the quote currency itself.
    Direct {
        quote: QuoteCurrency,
        #[serde(with = "base58")]
        market: Pubkey,
    },
    /// Sell into the quote currency on `from_market`, buy on `to_market`.
    #[serde(rename_all = "camelCase")]
    Bridged {
        quote: QuoteCurrency,
        #[serde(with = "base58")]
        from_market: Pubkey,
        #[serde(with = "base58")]
        to_market: Pubkey,
    },
}

impl MarketRoute {
    pub fn quote(&self) -> QuoteCurrency {
        match self {
            MarketRoute::Direct { quote, .. } | MarketRoute::Bridged { quote, .. } => *quote,
        }
    }

    /// Market addresses in traversal order.
    pub fn markets(&self) -> Vec<Pubkey> {
        match self {
            MarketRoute::Direct { market, .. } => vec![*market],
            MarketRoute::Bridged {
                from_market,
                to_market,
                ..
            } => vec![*from_market, *to_market],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            MarketRoute::Direct { .. } => 1,
            MarketRoute::Bridged { .. } => 2,
        }
    }

    pub fn is_direct(&self) -> bool {
        matches!(self, MarketRoute::Direct { .. })
    }
}
