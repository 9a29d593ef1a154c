use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Markets(#[from] markets::MarketsError),

    #[error("unknown token: {0}")]
    UnknownToken(String),

    #[error("ambiguous symbol {symbol}: matches {count} tokens, pass the mint address")]
    AmbiguousSymbol { symbol: String, count: usize },

    #[error("{0} is not a quote currency (expected usdc, usdt or a quote mint)")]
    NotAQuote(String),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("interrupted")]
    Cancelled,
}
