use solana_sdk::pubkey;

use crate::pubkey::Pubkey;
use crate::types::{Cluster, QuoteCurrency};

/// USDC mint on mainnet-beta.
pub const USDC_MINT: Pubkey = pubkey!("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
/// USDT mint on mainnet-beta.
pub const USDT_MINT: Pubkey = pubkey!("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB");
/// Serum DEX v3 program.
pub const DEX_PROGRAM_ID: Pubkey = pubkey!("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");
/// Pseudo-mint for native (unwrapped) SOL; distinct from the wrapped SOL mint.
pub const NATIVE_SOL_MINT: Pubkey = pubkey!("11111111111111111111111111111111");

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_TOKEN_LIST_URL: &str =
    "https://cdn.jsdelivr.net/gh/solana-labs/token-list@main/src/tokens/solana.tokenlist.json";

/// Mint addresses of the two quote currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteMints {
    pub usdc: Pubkey,
    pub usdt: Pubkey,
}

impl QuoteMints {
    pub fn mint(&self, quote: QuoteCurrency) -> Pubkey {
        match quote {
            QuoteCurrency::Usdc => self.usdc,
            QuoteCurrency::Usdt => self.usdt,
        }
    }

    /// Which quote currency, if any, `mint` is.
    pub fn quote_of(&self, mint: &Pubkey) -> Option<QuoteCurrency> {
        QuoteCurrency::PRECEDENCE
            .into_iter()
            .find(|q| self.mint(*q) == *mint)
    }
}

impl Default for QuoteMints {
    fn default() -> Self {
        Self {
            usdc: USDC_MINT,
            usdt: USDT_MINT,
        }
    }
}

/// Configuration for the routing library's external collaborators.
#[derive(Debug, Clone)]
pub struct MarketsConfig {
    /// Solana RPC URL used for open-orders lookups.
    pub rpc_url: String,
    /// Token list location (HTTP URL).
    pub token_list_url: String,
    /// Cluster the catalog is scoped to.
    pub cluster: Cluster,
    /// Quote currency mints.
    pub quote_mints: QuoteMints,
    /// Order-book program owning the markets and open-orders accounts.
    pub dex_program_id: Pubkey,
}

impl Default for MarketsConfig {
    fn default() -> Self {
        mainnet_config()
    }
}

/// Return the mainnet-beta configuration.
pub fn mainnet_config() -> MarketsConfig {
    MarketsConfig {
        rpc_url: DEFAULT_RPC_URL.into(),
        token_list_url: DEFAULT_TOKEN_LIST_URL.into(),
        cluster: Cluster::MainnetBeta,
        quote_mints: QuoteMints::default(),
        dex_program_id: DEX_PROGRAM_ID,
    }
}
