//! Immutable token catalog and its shared handle.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use solana_sdk::pubkey;
use tracing::{debug, warn};

use crate::config::{QuoteMints, NATIVE_SOL_MINT};
use crate::pubkey::Pubkey;
use crate::router::SwapMarkets;
use crate::types::{Cluster, QuotedMarkets, TokenInfo, TokenMetadata};

/// Registry tag for sollet wrapped tokens.
pub const SOLLET_TAG: &str = "wrapped-sollet";
/// Registry tag for wormhole wrapped tokens.
pub const WORMHOLE_TAG: &str = "wormhole";

/// Tokens of one cluster, indexed by mint.
#[derive(Debug, Clone)]
pub struct TokenCatalog {
    cluster: Cluster,
    tokens: Vec<TokenMetadata>,
    index: HashMap<Pubkey, usize>,
}

impl TokenCatalog {
    /// Build a catalog. The first record for a mint wins.
    pub fn new(cluster: Cluster, tokens: impl IntoIterator<Item = TokenMetadata>) -> Self {
        let mut catalog = Self {
            cluster,
            tokens: Vec::new(),
            index: HashMap::new(),
        };
        for token in tokens {
            catalog.push(token);
        }
        catalog
    }

    /// Build a catalog from registry records, skipping entries for other
    /// clusters and entries whose mint cannot be parsed.
    pub fn from_token_infos<'a>(
        cluster: Cluster,
        infos: impl IntoIterator<Item = &'a TokenInfo>,
    ) -> Self {
        let chain_id = cluster.chain_id();
        let tokens = infos
            .into_iter()
            .filter(|info| info.chain_id == chain_id)
            .filter_map(|info| match TokenMetadata::try_from(info) {
                Ok(meta) => Some(meta),
                Err(e) => {
                    warn!(symbol = %info.symbol, error = %e, "skipping token record");
                    None
                }
            });
        let catalog = Self::new(cluster, tokens);
        debug!(cluster = %cluster, tokens = catalog.len(), "catalog built");
        catalog
    }

    /// Append the native SOL pseudo-token unless a record for it exists.
    pub fn with_native_sol(mut self) -> Self {
        self.push(native_sol());
        self
    }

    fn push(&mut self, token: TokenMetadata) {
        if self.index.contains_key(&token.address) {
            warn!(address = %token.address, symbol = %token.symbol, "duplicate mint dropped");
            return;
        }
        self.index.insert(token.address, self.tokens.len());
        self.tokens.push(token);
    }

    pub fn cluster(&self) -> Cluster {
        self.cluster
    }

    pub fn get(&self, address: &Pubkey) -> Option<&TokenMetadata> {
        self.index.get(address).map(|&i| &self.tokens[i])
    }

    pub fn contains(&self, address: &Pubkey) -> bool {
        self.index.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &TokenMetadata> {
        self.tokens.iter()
    }

    /// Tokens with at least one quoted market, sorted by symbol.
    pub fn swappable_tokens(&self) -> Vec<&TokenMetadata> {
        sorted_by_symbol(self.iter().filter(|t| t.quoted_markets.is_quoted()))
    }

    /// Sollet wrapped tokens, sorted by symbol.
    pub fn sollet_tokens(&self) -> Vec<&TokenMetadata> {
        sorted_by_symbol(self.iter().filter(|t| t.has_tag(SOLLET_TAG)))
    }

    /// Wormhole wrapped tokens, sorted by symbol.
    pub fn wormhole_tokens(&self) -> Vec<&TokenMetadata> {
        sorted_by_symbol(self.iter().filter(|t| t.has_tag(WORMHOLE_TAG)))
    }
}

fn sorted_by_symbol<'a>(tokens: impl Iterator<Item = &'a TokenMetadata>) -> Vec<&'a TokenMetadata> {
    let mut v: Vec<_> = tokens.collect();
    v.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    v
}

const SOL_USDC_MARKET: Pubkey = pubkey!("9wFFyRfZBsuAha4YcuxcXLKwMxJR43S7fPfQLusDBzvT");
const SOL_USDT_MARKET: Pubkey = pubkey!("HWHvQhFmJB3NUcu1aihKmrKegfVxBEHzwVX6yZCKEsi1");

/// Native SOL, distinguished from the wrapped SOL mint.
pub fn native_sol() -> TokenMetadata {
    TokenMetadata {
        address: NATIVE_SOL_MINT,
        symbol: "SOL".into(),
        name: "Native SOL".into(),
        decimals: 9,
        tags: Vec::new(),
        quoted_markets: QuotedMarkets {
            usdc: Some(SOL_USDC_MARKET),
            usdt: Some(SOL_USDT_MARKET),
        },
    }
}

/// Shared, replaceable reference to the current catalog.
///
/// Readers take an `Arc` snapshot and never observe a partially built
/// catalog; `replace` swaps the pointer without blocking them.
#[derive(Debug)]
pub struct CatalogHandle {
    current: ArcSwap<TokenCatalog>,
}

impl CatalogHandle {
    pub fn new(catalog: TokenCatalog) -> Self {
        Self {
            current: ArcSwap::from_pointee(catalog),
        }
    }

    pub fn snapshot(&self) -> Arc<TokenCatalog> {
        self.current.load_full()
    }

    /// Install `catalog`, returning the previous snapshot.
    pub fn replace(&self, catalog: TokenCatalog) -> Arc<TokenCatalog> {
        debug!(tokens = catalog.len(), "catalog replaced");
        self.current.swap(Arc::new(catalog))
    }

    /// Router bound to the current snapshot.
    pub fn router(&self, quotes: QuoteMints) -> SwapMarkets {
        SwapMarkets::new(self.snapshot(), quotes)
    }
}
