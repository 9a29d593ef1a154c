use clap::{Parser, Subcommand, ValueEnum};
use markets::config::DEFAULT_RPC_URL;

/// swap-router — query Serum swap routes over an SPL token list.
#[derive(Parser, Debug)]
#[command(name = "swap-router", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Token list file path or http(s) URL (defaults to the SPL registry)
    #[arg(long, env = "TOKEN_LIST", global = true)]
    pub token_list: Option<String>,

    /// Cluster to scope the token list to
    #[arg(long, default_value = "mainnet-beta", global = true)]
    pub cluster: String,

    /// Solana RPC URL for open-orders lookups
    #[arg(long, env = "SOLANA_RPC_URL", default_value = DEFAULT_RPC_URL, global = true)]
    pub rpc_url: String,

    /// Do not add the native SOL pseudo-token to the catalog (mainnet-beta only)
    #[arg(long, global = true)]
    pub no_native_sol: bool,

    /// Output as JSON instead of TSV
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tokens (tradeable ones by default)
    Tokens {
        #[arg(long, value_enum, default_value_t = TokenView::Tradeable)]
        view: TokenView,
    },

    /// List every token a token can be swapped with
    Pairs {
        /// Mint address or symbol
        token: String,
    },

    /// Show the market of BASE quoted in QUOTE
    Market(MarketArgs),

    /// Show the markets connecting FROM to TO
    Route(PairArgs),

    /// Check whether both tokens have USDC markets
    UsdcPath(PairArgs),

    /// Resolve a market for a new open-orders account, failing if OWNER has one
    CheckMarket {
        #[command(flatten)]
        market: MarketArgs,

        /// Owner wallet address
        #[arg(long)]
        owner: String,
    },
}

#[derive(Parser, Debug)]
pub struct MarketArgs {
    /// Quote currency: usdc, usdt, or its mint address
    pub quote: String,
    /// Base token mint address or symbol
    pub base: String,
}

#[derive(Parser, Debug)]
pub struct PairArgs {
    /// Source token mint address or symbol
    pub from: String,
    /// Destination token mint address or symbol
    pub to: String,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenView {
    /// Quoted tokens in catalog order
    Tradeable,
    /// Quoted tokens sorted by symbol
    Swappable,
    /// Sollet wrapped tokens
    Sollet,
    /// Wormhole wrapped tokens
    Wormhole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_route() {
        let cli = Cli::try_parse_from(["swap-router", "--json", "route", "SRM", "RAY"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Route(args) => {
                assert_eq!(args.from, "SRM");
                assert_eq!(args.to, "RAY");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_market() {
        let cli = Cli::try_parse_from([
            "swap-router",
            "check-market",
            "usdc",
            "SRM",
            "--owner",
            "11111111111111111111111111111111",
            "--rpc-url",
            "http://localhost:8899",
        ])
        .unwrap();
        assert_eq!(cli.rpc_url, "http://localhost:8899");
        match cli.command {
            Command::CheckMarket { market, owner } => {
                assert_eq!(market.quote, "usdc");
                assert_eq!(market.base, "SRM");
                assert_eq!(owner, "11111111111111111111111111111111");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_tokens_view_default_and_value() {
        let cli = Cli::try_parse_from(["swap-router", "tokens"]).unwrap();
        assert!(matches!(cli.command, Command::Tokens { view: TokenView::Tradeable }));
        let cli = Cli::try_parse_from(["swap-router", "tokens", "--view", "wormhole"]).unwrap();
        assert!(matches!(cli.command, Command::Tokens { view: TokenView::Wormhole }));
    }

    #[test]
    fn test_check_market_requires_owner() {
        assert!(Cli::try_parse_from(["swap-router", "check-market", "usdc", "SRM"]).is_err());
    }
}
