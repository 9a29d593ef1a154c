//! Open-orders ledger lookups.
//!
//! The router only needs to know whether an owner already has an open-orders
//! account on a market. [`RpcOpenOrdersLookup`] answers that with a filtered
//! `getProgramAccounts` call against the order-book program.

use std::sync::Arc;

use async_trait::async_trait;
use solana_account_decoder_client_types::{UiAccountEncoding, UiDataSliceConfig};
use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_client::rpc_request::RpcError;
use solana_sdk::account::Account;
use tracing::{debug, warn};

use crate::error::{MarketsError, Result};
use crate::pubkey::{Pubkey, PUBKEY_BYTES};
use crate::types::OpenOrdersAccount;

/// Size of a v2 open-orders account.
pub const OPEN_ORDERS_ACCOUNT_SIZE: u64 = 3228;
/// Offset of the market key (after the 5-byte padding and 8-byte flags).
pub const OPEN_ORDERS_MARKET_OFFSET: usize = 13;
/// Offset of the owner key.
pub const OPEN_ORDERS_OWNER_OFFSET: usize = OPEN_ORDERS_MARKET_OFFSET + PUBKEY_BYTES;

#[async_trait]
pub trait OpenOrdersLookup: Send + Sync {
    /// Open-orders accounts of `owner` on `market`, owned by `program_id`.
    async fn find_for_market_and_owner(
        &self,
        market: &Pubkey,
        owner: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<OpenOrdersAccount>>;
}

/// Solana RPC backed lookup.
#[derive(Clone)]
pub struct RpcOpenOrdersLookup {
    client: Arc<RpcClient>,
}

impl RpcOpenOrdersLookup {
    pub fn new(rpc_url: &str) -> Self {
        Self::with_client(Arc::new(RpcClient::new(rpc_url.to_string())))
    }

    /// Use a preconfigured client (commitment, timeout).
    pub fn with_client(client: Arc<RpcClient>) -> Self {
        Self { client }
    }

    pub fn rpc_url(&self) -> String {
        self.client.url()
    }
}

/// Filters selecting v2 open-orders accounts of `owner` on `market`, with the
/// returned data cut down to the two keys.
fn program_accounts_config(market: &Pubkey, owner: &Pubkey) -> RpcProgramAccountsConfig {
    RpcProgramAccountsConfig {
        filters: Some(vec![
            RpcFilterType::DataSize(OPEN_ORDERS_ACCOUNT_SIZE),
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                OPEN_ORDERS_MARKET_OFFSET,
                market.as_ref(),
            )),
            RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                OPEN_ORDERS_OWNER_OFFSET,
                owner.as_ref(),
            )),
        ]),
        account_config: RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            data_slice: Some(UiDataSliceConfig {
                offset: OPEN_ORDERS_MARKET_OFFSET,
                length: 2 * PUBKEY_BYTES,
            }),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[async_trait]
impl OpenOrdersLookup for RpcOpenOrdersLookup {
    async fn find_for_market_and_owner(
        &self,
        market: &Pubkey,
        owner: &Pubkey,
        program_id: &Pubkey,
    ) -> Result<Vec<OpenOrdersAccount>> {
        let keyed = self
            .client
            .get_program_accounts_with_config(program_id, program_accounts_config(market, owner))
            .await
            .map_err(rpc_error)?;
        debug!(%market, %owner, found = keyed.len(), "open orders lookup");

        let mut accounts = Vec::with_capacity(keyed.len());
        for (address, account) in keyed {
            let account = decode_slice(address, &account)?;
            if account.market != *market || account.owner != *owner {
                warn!(address = %account.address, "open orders account does not match filters");
                continue;
            }
            accounts.push(account);
        }
        Ok(accounts)
    }
}

/// Decode the (market, owner) data slice of a returned account.
fn decode_slice(address: Pubkey, account: &Account) -> Result<OpenOrdersAccount> {
    let bytes = account.data.as_slice();
    if bytes.len() < 2 * PUBKEY_BYTES {
        return Err(MarketsError::Validation(format!(
            "{address}: data slice is {} bytes",
            bytes.len()
        )));
    }
    let key = |range: std::ops::Range<usize>| {
        Pubkey::try_from(&bytes[range])
            .map_err(|e| MarketsError::Validation(format!("{address}: {e}")))
    };
    Ok(OpenOrdersAccount {
        address,
        market: key(0..PUBKEY_BYTES)?,
        owner: key(PUBKEY_BYTES..2 * PUBKEY_BYTES)?,
    })
}

fn rpc_error(err: ClientError) -> MarketsError {
    match err.kind() {
        ClientErrorKind::RpcError(RpcError::RpcResponseError { code, message, .. }) => {
            MarketsError::Rpc {
                code: *code,
                message: message.clone(),
            }
        }
        ClientErrorKind::Reqwest(e) if e.status().is_some() => MarketsError::Http {
            status: e.status().map(|s| s.as_u16()).unwrap_or_default(),
            message: e.to_string(),
        },
        _ => MarketsError::Solana(err.to_string()),
    }
}
