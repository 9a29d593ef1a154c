use thiserror::Error;

use crate::pubkey::Pubkey;
use crate::types::QuoteCurrency;

#[derive(Error, Debug)]
pub enum MarketsError {
    #[error("market not found: {quote} market for {base}")]
    MarketNotFound { quote: QuoteCurrency, base: Pubkey },

    #[error("open orders account already exists on market {market} for {owner}")]
    OpenOrdersAlreadyExists { market: Pubkey, owner: Pubkey },

    #[error("invalid pubkey: {0}")]
    InvalidPubkey(String),

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Solana client error: {0}")]
    Solana(String),

    #[error("validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, MarketsError>;
