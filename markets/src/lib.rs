pub mod catalog;
pub mod config;
pub mod error;
pub mod ledger;
pub mod pubkey;
pub mod registry;
pub mod router;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Router + catalog
pub use catalog::{CatalogHandle, TokenCatalog};
pub use router::SwapMarkets;

// Config + errors
pub use config::{mainnet_config, MarketsConfig, QuoteMints};
pub use error::{MarketsError, Result};

// Keys
pub use pubkey::{parse_pubkey, Pubkey};

// Registry source
pub use registry::{load_token_list, parse_token_list, TokenRegistryClient};

// Ledger
pub use ledger::{OpenOrdersLookup, RpcOpenOrdersLookup};

// Domain types
pub use types::{
    Cluster, MarketRoute, OpenOrdersAccount, QuoteCurrency, QuotedMarkets, TokenExtensions,
    TokenInfo, TokenList, TokenMetadata,
};
