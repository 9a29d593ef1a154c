mod cli;
mod error;
mod output;
mod source;

use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Command, TokenView};
use markets::{Cluster, MarketsConfig, Pubkey, RpcOpenOrdersLookup, SwapMarkets};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::error::CliError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv(); // load .env if present

    let cli = Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cancel = setup_signal_handler();

    if let Err(e) = run(cli, cancel).await {
        tracing::error!(error = %e, "swap-router failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, cancel: CancellationToken) -> Result<(), CliError> {
    let cluster: Cluster = cli.cluster.parse()?;
    let config = MarketsConfig {
        rpc_url: cli.rpc_url.clone(),
        cluster,
        ..Default::default()
    };

    let token_list = cli.token_list.as_deref().unwrap_or(&config.token_list_url);
    let list = source::fetch_token_list(token_list).await?;
    let catalog = source::build_catalog(&list, cluster, !cli.no_native_sol);
    let markets = SwapMarkets::from_config(Arc::new(catalog), &config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let json = cli.json;

    match cli.command {
        Command::Tokens { view } => {
            let catalog = markets.catalog();
            let tokens = match view {
                TokenView::Tradeable => markets.tradeable_tokens(),
                TokenView::Swappable => catalog.swappable_tokens(),
                TokenView::Sollet => catalog.sollet_tokens(),
                TokenView::Wormhole => catalog.wormhole_tokens(),
            };
            output::write_tokens(&mut out, &tokens, json)?;
        }

        Command::Pairs { token } => {
            let mint = source::resolve_token(&markets, &token)?;
            let pairs: Vec<(Pubkey, Option<&str>)> = markets
                .paired_tokens(&mint)
                .into_iter()
                .map(|p| (p, markets.catalog().get(&p).map(|t| t.symbol.as_str())))
                .collect();
            if pairs.is_empty() {
                info!(%mint, "no quoted markets for token");
            }
            output::write_pairs(&mut out, &pairs, json)?;
        }

        Command::Market(args) => {
            let quote = source::resolve_quote(&markets, &args.quote)?;
            let base = source::resolve_token(&markets, &args.base)?;
            let market = markets.market_address(quote, &base);
            if market.is_none() {
                info!(%quote, %base, "no market");
            }
            output::write_market(&mut out, quote, &base, market, json)?;
        }

        Command::Route(args) => {
            let from = source::resolve_token(&markets, &args.from)?;
            let to = source::resolve_token(&markets, &args.to)?;
            let route = markets.route(&from, &to);
            if route.is_none() {
                info!(%from, %to, "no route");
            }
            output::write_route(&mut out, route.as_ref(), json)?;
        }

        Command::UsdcPath(args) => {
            let from = source::resolve_token(&markets, &args.from)?;
            let to = source::resolve_token(&markets, &args.to)?;
            output::write_bool(&mut out, markets.usdc_path_exists(&from, &to), json)?;
        }

        Command::CheckMarket { market, owner } => {
            let quote = source::resolve_quote(&markets, &market.quote)?;
            let base = source::resolve_token(&markets, &market.base)?;
            let owner = markets::parse_pubkey(&owner)?;
            let lookup = RpcOpenOrdersLookup::new(&config.rpc_url);

            let resolved = tokio::select! {
                r = markets.market_entry_if_needed(quote, &base, &owner, &lookup) => r?,
                _ = cancel.cancelled() => return Err(CliError::Cancelled),
            };
            output::write_market(&mut out, quote, &base, Some(resolved), json)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Cancel on SIGINT or SIGTERM so an in-flight RPC lookup is dropped promptly.
fn setup_signal_handler() -> CancellationToken {
    let cancel = CancellationToken::new();

    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("received SIGINT, shutting down");
        cancel_clone.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        // Register eagerly; the task only waits.
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                let cancel_clone = cancel.clone();
                tokio::spawn(async move {
                    sig.recv().await;
                    info!("received SIGTERM, shutting down");
                    cancel_clone.cancel();
                });
            }
            Err(e) => warn!(error = %e, "failed to register SIGTERM handler"),
        }
    }

    cancel
}

#[cfg(all(test, unix))]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_sigterm_cancels_token() {
        let cancel = setup_signal_handler();
        assert!(!cancel.is_cancelled());

        let status = std::process::Command::new("kill")
            .args(["-TERM", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), cancel.cancelled())
            .await
            .expect("SIGTERM did not cancel");
    }
}
