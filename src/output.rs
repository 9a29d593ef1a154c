use std::io::Write;

use markets::{MarketRoute, Pubkey, QuoteCurrency, TokenMetadata};
use serde::Serialize;
use serde_json::json;

use crate::error::CliError;

/// Write tokens, one per line: mint \t symbol \t decimals \t usdc market \t usdt market.
pub fn write_tokens<W: Write>(
    writer: &mut W,
    tokens: &[&TokenMetadata],
    json_mode: bool,
) -> Result<(), CliError> {
    if json_mode {
        return write_json(writer, &tokens);
    }
    for t in tokens {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            t.address,
            t.symbol,
            t.decimals,
            opt(t.quoted_markets.usdc),
            opt(t.quoted_markets.usdt),
        )?;
    }
    Ok(())
}

/// Write paired mints, one per line, with the symbol when known.
pub fn write_pairs<W: Write>(
    writer: &mut W,
    pairs: &[(Pubkey, Option<&str>)],
    json_mode: bool,
) -> Result<(), CliError> {
    if json_mode {
        let items: Vec<_> = pairs
            .iter()
            .map(|(mint, symbol)| json!({ "mint": mint.to_string(), "symbol": symbol }))
            .collect();
        return write_json(writer, &items);
    }
    for (mint, symbol) in pairs {
        writeln!(writer, "{}\t{}", mint, symbol.unwrap_or("-"))?;
    }
    Ok(())
}

/// Write a single market lookup; nothing (or `null`) when absent.
pub fn write_market<W: Write>(
    writer: &mut W,
    quote: QuoteCurrency,
    base: &Pubkey,
    market: Option<Pubkey>,
    json_mode: bool,
) -> Result<(), CliError> {
    if json_mode {
        return write_json(
            writer,
            &json!({
                "quote": quote,
                "base": base.to_string(),
                "market": market.map(|m| m.to_string()),
            }),
        );
    }
    if let Some(market) = market {
        writeln!(writer, "{market}")?;
    }
    Ok(())
}

/// Write a route as quote \t hop1 [\t hop2]; nothing (or `null`) when absent.
pub fn write_route<W: Write>(
    writer: &mut W,
    route: Option<&MarketRoute>,
    json_mode: bool,
) -> Result<(), CliError> {
    if json_mode {
        return write_json(writer, &route);
    }
    if let Some(route) = route {
        let hops: Vec<String> = route.markets().iter().map(Pubkey::to_string).collect();
        writeln!(writer, "{}\t{}", route.quote(), hops.join("\t"))?;
    }
    Ok(())
}

pub fn write_bool<W: Write>(writer: &mut W, value: bool, json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        return write_json(writer, &value);
    }
    writeln!(writer, "{value}")?;
    Ok(())
}

fn write_json<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

fn opt(key: Option<Pubkey>) -> String {
    key.map(|k| k.to_string()).unwrap_or_else(|| "-".into())
}
