//! Swap market routing.
//!
//! Every tradeable token is quoted against USDC and/or USDT on an order-book
//! market. A trade between two tokens is therefore either direct (one side is
//! the quote currency) or two hops through a quote currency both tokens share.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::TokenCatalog;
use crate::config::{MarketsConfig, QuoteMints, DEX_PROGRAM_ID};
use crate::error::{MarketsError, Result};
use crate::ledger::OpenOrdersLookup;
use crate::pubkey::Pubkey;
use crate::types::{MarketRoute, QuoteCurrency, TokenMetadata};

/// Read-only market lookups over one catalog snapshot.
#[derive(Debug, Clone)]
pub struct SwapMarkets {
    catalog: Arc<TokenCatalog>,
    quotes: QuoteMints,
    dex_program_id: Pubkey,
}

impl SwapMarkets {
    pub fn new(catalog: Arc<TokenCatalog>, quotes: QuoteMints) -> Self {
        Self {
            catalog,
            quotes,
            dex_program_id: DEX_PROGRAM_ID,
        }
    }

    pub fn from_config(catalog: Arc<TokenCatalog>, config: &MarketsConfig) -> Self {
        Self::new(catalog, config.quote_mints).with_dex_program_id(config.dex_program_id)
    }

    /// Override the order-book program used for open-orders lookups.
    pub fn with_dex_program_id(mut self, program_id: Pubkey) -> Self {
        self.dex_program_id = program_id;
        self
    }

    pub fn dex_program_id(&self) -> Pubkey {
        self.dex_program_id
    }

    pub fn catalog(&self) -> &TokenCatalog {
        &self.catalog
    }

    pub fn quote_mints(&self) -> QuoteMints {
        self.quotes
    }

    /// The quote currency `mint` stands for, if any.
    pub fn quote_currency(&self, mint: &Pubkey) -> Option<QuoteCurrency> {
        self.quotes.quote_of(mint)
    }

    /// Tokens quoted against USDC or USDT, in catalog order.
    pub fn tradeable_tokens(&self) -> Vec<&TokenMetadata> {
        self.catalog
            .iter()
            .filter(|t| t.quoted_markets.is_quoted())
            .collect()
    }

    /// Every mint `token` can be swapped with: the quote currencies it is
    /// listed against and the other tokens listed against them.
    pub fn paired_tokens(&self, token: &Pubkey) -> Vec<Pubkey> {
        let Some(info) = self.catalog.get(token) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut pairs = Vec::new();
        for quote in QuoteCurrency::PRECEDENCE {
            if info.quoted_markets.get(quote).is_none() {
                continue;
            }
            let quote_mint = self.quotes.mint(quote);
            if seen.insert(quote_mint) {
                pairs.push(quote_mint);
            }
            for other in self.catalog.iter() {
                if other.address != info.address
                    && other.quoted_markets.get(quote).is_some()
                    && seen.insert(other.address)
                {
                    pairs.push(other.address);
                }
            }
        }
        pairs
    }

    /// Market of `base` quoted in `quote`.
    pub fn market_address(&self, quote: QuoteCurrency, base: &Pubkey) -> Option<Pubkey> {
        self.catalog.get(base)?.quoted_markets.get(quote)
    }

    /// Markets to trade `from` into `to`, preferring USDC over USDT.
    pub fn route(&self, from: &Pubkey, to: &Pubkey) -> Option<MarketRoute> {
        if let Some(quote) = self.quote_currency(from) {
            return self.direct(quote, to);
        }
        if let Some(quote) = self.quote_currency(to) {
            return self.direct(quote, from);
        }

        let route = QuoteCurrency::PRECEDENCE.into_iter().find_map(|quote| {
            let from_market = self.market_address(quote, from)?;
            let to_market = self.market_address(quote, to)?;
            Some(MarketRoute::Bridged {
                quote,
                from_market,
                to_market,
            })
        });
        debug!(%from, %to, ?route, "route resolved");
        route
    }

    fn direct(&self, quote: QuoteCurrency, base: &Pubkey) -> Option<MarketRoute> {
        let market = self.market_address(quote, base)?;
        Some(MarketRoute::Direct { quote, market })
    }

    /// Both tokens have a USDC market. This does not imply [`route`] picks
    /// USDC, e.g. when either side is itself a quote mint.
    ///
    /// [`route`]: Self::route
    pub fn usdc_path_exists(&self, from: &Pubkey, to: &Pubkey) -> bool {
        self.market_address(QuoteCurrency::Usdc, from).is_some()
            && self.market_address(QuoteCurrency::Usdc, to).is_some()
    }

    /// Resolve the `quote` market for `base`, failing if `owner` already has
    /// an open-orders account on it.
    ///
    /// # Errors
    ///
    /// Returns [`MarketsError::MarketNotFound`] if no such market is listed,
    /// [`MarketsError::OpenOrdersAlreadyExists`] if the ledger reports an
    /// account, or whatever error the ledger lookup itself returns.
    pub async fn market_entry_if_needed<L>(
        &self,
        quote: QuoteCurrency,
        base: &Pubkey,
        owner: &Pubkey,
        lookup: &L,
    ) -> Result<Pubkey>
    where
        L: OpenOrdersLookup + ?Sized,
    {
        let market = self
            .market_address(quote, base)
            .ok_or(MarketsError::MarketNotFound { quote, base: *base })?;

        let accounts = lookup
            .find_for_market_and_owner(&market, owner, &self.dex_program_id)
            .await?;
        if let Some(existing) = accounts.first() {
            debug!(%market, %owner, account = %existing.address, "open orders account exists");
            return Err(MarketsError::OpenOrdersAlreadyExists {
                market,
                owner: *owner,
            });
        }
        Ok(market)
    }
}
