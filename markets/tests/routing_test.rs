//! End-to-end routing over a registry-shaped token list: parse, scope to a
//! cluster, build the catalog and query the router.

use std::sync::Arc;

use markets::config::{NATIVE_SOL_MINT, USDC_MINT, USDT_MINT};
use markets::{
    parse_token_list, CatalogHandle, Cluster, MarketRoute, QuoteCurrency, QuoteMints,
    SwapMarkets, TokenCatalog,
};

const SRM: &str = "SRMuApVNdxXokk5GT7XD5cUUgXMBCoAz2LHeuAoKWRt";
const SRM_USDC: &str = "ByRys5tuUWDgL73G8JBAEfkdFf8JWBzPBDHsBVQ5vbQA";
const RAY: &str = "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R";
const RAY_USDC: &str = "2xiv8A5xrJ7RnGdxXB42uFEkYHJjszEhaJyKKt4WaLep";
const RAY_USDT: &str = "teE55QrL4a4QSfydR9dnHF97jgCfptpuigbb53Lo95g";
const FIDA: &str = "EchesyfXePKdLtoiZSL8pBe8Myagyy8ZRqsACNCFGnvp";
const FIDA_USDT: &str = "4CNEVm9oJMsv6ZWN6A7HqTNnYhJiTBkvXoubpWdxNHgf";

const LIST: &str = r#"{
    "name": "Solana Token List",
    "tokens": [
        { "chainId": 101, "address": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
          "symbol": "USDC", "name": "USD Coin", "decimals": 6, "tags": ["stablecoin"] },
        { "chainId": 101, "address": "SRMuApVNdxXokk5GT7XD5cUUgXMBCoAz2LHeuAoKWRt",
          "symbol": "SRM", "name": "Serum", "decimals": 6,
          "extensions": { "serumV3Usdc": "ByRys5tuUWDgL73G8JBAEfkdFf8JWBzPBDHsBVQ5vbQA" } },
        { "chainId": 101, "address": "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R",
          "symbol": "RAY", "name": "Raydium", "decimals": 6,
          "extensions": { "serumV3Usdc": "2xiv8A5xrJ7RnGdxXB42uFEkYHJjszEhaJyKKt4WaLep",
                          "serumV3Usdt": "teE55QrL4a4QSfydR9dnHF97jgCfptpuigbb53Lo95g" } },
        { "chainId": 101, "address": "EchesyfXePKdLtoiZSL8pBe8Myagyy8ZRqsACNCFGnvp",
          "symbol": "FIDA", "name": "Bonfida", "decimals": 6, "tags": ["wormhole"],
          "extensions": { "serumV3Usdt": "4CNEVm9oJMsv6ZWN6A7HqTNnYhJiTBkvXoubpWdxNHgf" } },
        { "chainId": 103, "address": "4k3Dyjzvzp8eMZWUXbBCjEvwSkkk59S5iCNLY3QrkX6R",
          "symbol": "RAY", "name": "Raydium (devnet)", "decimals": 6 }
    ]
}"#;

fn pk(s: &str) -> markets::Pubkey {
    s.parse().unwrap()
}

fn router() -> SwapMarkets {
    let list = parse_token_list(LIST).unwrap();
    let catalog = TokenCatalog::from_token_infos(Cluster::MainnetBeta, &list.tokens);
    SwapMarkets::new(Arc::new(catalog), QuoteMints::default())
}

#[test]
fn test_catalog_scoped_to_mainnet() {
    let m = router();
    assert_eq!(m.catalog().len(), 4);
    assert_eq!(m.catalog().get(&pk(RAY)).unwrap().name, "Raydium");
}

#[test]
fn test_tradeable_tokens() {
    let m = router();
    let symbols: Vec<_> = m.tradeable_tokens().iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["SRM", "RAY", "FIDA"]);
}

#[test]
fn test_route_two_hops_through_usdc() {
    let m = router();
    let route = m.route(&pk(SRM), &pk(RAY)).unwrap();
    assert_eq!(
        route,
        MarketRoute::Bridged {
            quote: QuoteCurrency::Usdc,
            from_market: pk(SRM_USDC),
            to_market: pk(RAY_USDC),
        }
    );
}

#[test]
fn test_route_two_hops_through_usdt() {
    let m = router();
    let route = m.route(&pk(FIDA), &pk(RAY)).unwrap();
    assert_eq!(route.quote(), QuoteCurrency::Usdt);
    assert_eq!(route.markets(), vec![pk(FIDA_USDT), pk(RAY_USDT)]);
}

#[test]
fn test_route_without_shared_quote() {
    let m = router();
    assert!(m.route(&pk(SRM), &pk(FIDA)).is_none());
    assert!(!m.usdc_path_exists(&pk(SRM), &pk(FIDA)));
}

#[test]
fn test_direct_routes() {
    let m = router();
    assert_eq!(m.route(&USDT_MINT, &pk(FIDA)).unwrap().markets(), vec![pk(FIDA_USDT)]);
    assert_eq!(m.route(&pk(SRM), &USDC_MINT).unwrap().markets(), vec![pk(SRM_USDC)]);
    assert!(m.route(&USDT_MINT, &pk(SRM)).is_none());
}

#[test]
fn test_paired_tokens() {
    let m = router();
    assert_eq!(m.paired_tokens(&pk(SRM)), vec![USDC_MINT, pk(RAY)]);
    assert_eq!(
        m.paired_tokens(&pk(RAY)),
        vec![USDC_MINT, pk(SRM), USDT_MINT, pk(FIDA)]
    );
    assert!(m.paired_tokens(&USDC_MINT).is_empty());
}

#[test]
fn test_native_sol_routes_through_usdc() {
    let list = parse_token_list(LIST).unwrap();
    let catalog =
        TokenCatalog::from_token_infos(Cluster::MainnetBeta, &list.tokens).with_native_sol();
    let m = SwapMarkets::new(Arc::new(catalog), QuoteMints::default());
    let route = m.route(&NATIVE_SOL_MINT, &pk(SRM)).unwrap();
    assert_eq!(route.quote(), QuoteCurrency::Usdc);
    assert_eq!(route.len(), 2);
}

#[test]
fn test_handle_swap_is_visible_to_new_routers_only() {
    let list = parse_token_list(LIST).unwrap();
    let handle = CatalogHandle::new(TokenCatalog::from_token_infos(
        Cluster::MainnetBeta,
        &list.tokens,
    ));
    let before = handle.router(QuoteMints::default());

    let without_srm: Vec<_> = list
        .tokens
        .iter()
        .filter(|t| t.symbol != "SRM")
        .cloned()
        .collect();
    handle.replace(TokenCatalog::from_token_infos(Cluster::MainnetBeta, &without_srm));
    let after = handle.router(QuoteMints::default());

    assert!(before.route(&pk(SRM), &pk(RAY)).is_some());
    assert!(after.route(&pk(SRM), &pk(RAY)).is_none());
}

#[test]
fn test_concurrent_queries_share_snapshot() {
    let m = Arc::new(router());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let m = Arc::clone(&m);
            std::thread::spawn(move || m.route(&pk(SRM), &pk(RAY)).map(|r| r.markets()))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Some(vec![pk(SRM_USDC), pk(RAY_USDC)]));
    }
}
