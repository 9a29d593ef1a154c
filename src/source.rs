//! Catalog loading and command-line token resolution.

use markets::{
    load_token_list, Cluster, Pubkey, QuoteCurrency, SwapMarkets, TokenCatalog, TokenList,
    TokenRegistryClient,
};
use tracing::info;

use crate::error::CliError;

/// Load a token list from a file path or an http(s) URL.
pub async fn fetch_token_list(source: &str) -> Result<TokenList, CliError> {
    let list = if is_url(source) {
        TokenRegistryClient::new(source)?.fetch().await?
    } else {
        load_token_list(source).await?
    };
    Ok(list)
}

fn is_url(source: &str) -> bool {
    url::Url::parse(source)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Scope `list` to `cluster` and index it. Native SOL is only listed on
/// mainnet-beta, where its quoted markets live.
pub fn build_catalog(list: &TokenList, cluster: Cluster, native_sol: bool) -> TokenCatalog {
    let catalog = TokenCatalog::from_token_infos(cluster, &list.tokens);
    let catalog = if native_sol && cluster == Cluster::MainnetBeta {
        catalog.with_native_sol()
    } else {
        catalog
    };
    info!(cluster = %cluster, tokens = catalog.len(), "catalog ready");
    catalog
}

/// Resolve a mint address or a (case-insensitive) symbol.
pub fn resolve_token(markets: &SwapMarkets, arg: &str) -> Result<Pubkey, CliError> {
    if let Ok(key) = arg.parse::<Pubkey>() {
        return Ok(key);
    }
    let quotes = markets.quote_mints();
    if let Ok(quote) = arg.parse::<QuoteCurrency>() {
        return Ok(quotes.mint(quote));
    }

    let matches: Vec<_> = markets
        .catalog()
        .iter()
        .filter(|t| t.symbol.eq_ignore_ascii_case(arg))
        .collect();
    match matches.as_slice() {
        [] => Err(CliError::UnknownToken(arg.to_string())),
        [one] => Ok(one.address),
        many => {
            // Prefer the quoted listing when a symbol is reused by wrappers.
            let quoted: Vec<_> = many.iter().filter(|t| t.quoted_markets.is_quoted()).collect();
            match quoted.as_slice() {
                [one] => Ok(one.address),
                _ => Err(CliError::AmbiguousSymbol {
                    symbol: arg.to_string(),
                    count: many.len(),
                }),
            }
        }
    }
}

/// Resolve `usdc`/`usdt` or a quote mint address.
pub fn resolve_quote(markets: &SwapMarkets, arg: &str) -> Result<QuoteCurrency, CliError> {
    if let Ok(quote) = arg.parse::<QuoteCurrency>() {
        return Ok(quote);
    }
    let key: Pubkey = arg
        .parse()
        .map_err(|_| CliError::NotAQuote(arg.to_string()))?;
    markets
        .quote_currency(&key)
        .ok_or_else(|| CliError::NotAQuote(arg.to_string()))
}
