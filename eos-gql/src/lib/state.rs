// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Application State
//!
//! [`AppState`] is the container shared by every request handler. It holds
//! the configuration and the [`ChainRpc`] adapter used to reach the node,
//! and offers the gateway operations on top of them: chain status, single
//! block and block range lookup, ABI lookup.
//!
//! The adapter is stored as `Arc<dyn ChainRpc>`, so tests can inject a mock
//! node instead of [`crate::node::HttpChainRpc`].
//!
//! Operations log their failure at the boundary and return the typed
//! [`Error`]; the GraphQL layer turns it into a field error.

use std::sync::Arc;

use eos_data::abi::Abi;
use eos_data::{Block, ChainInfo};
use tracing::{debug, error, warn};

use crate::config::GatewayConfig;
use crate::error::Error;
use crate::node::ChainRpc;

/// Shared state of the gateway.
#[derive(Clone, Debug)]
pub struct AppState {
    config: Arc<GatewayConfig>,
    rpc: Arc<dyn ChainRpc>,
}

impl AppState {
    pub fn new<R: ChainRpc>(config: GatewayConfig, rpc: R) -> Self {
        Self {
            config: Arc::new(config),
            rpc: Arc::new(rpc),
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Current status of the node.
    pub async fn get_chain_info(&self) -> Result<ChainInfo, Error> {
        self.rpc.get_info().await.map_err(Error::from).map_err(logged)
    }

    /// Block `block_num`, enriched with its action count.
    pub async fn get_block(&self, block_num: i64) -> Result<Block, Error> {
        let block_num = checked_block_num(block_num).map_err(logged)?;
        self.fetch_block(block_num).await.map_err(logged)
    }

    /// The `limit` blocks ending at `block_num`, highest first.
    ///
    /// Blocks are fetched one at a time and the first failure aborts the
    /// whole range.
    pub async fn get_blocks(
        &self,
        block_num: i64,
        limit: i64,
    ) -> Result<Vec<Block>, Error> {
        self.fetch_range(block_num, limit).await.map_err(logged)
    }

    /// ABI of the contract deployed on `account`.
    ///
    /// Malformed account names are rejected without calling the node.
    pub async fn get_abi(&self, account: &str) -> Result<Abi, Error> {
        check_account_name(account).map_err(logged)?;

        match self.rpc.get_abi(account).await {
            Ok(Some(abi)) => Ok(abi),
            Ok(None) => Err(logged(Error::NotFound(format!(
                "no contract deployed on account {account}"
            )))),
            Err(e) => Err(logged(e.into())),
        }
    }

    async fn fetch_range(
        &self,
        block_num: i64,
        limit: i64,
    ) -> Result<Vec<Block>, Error> {
        if limit < 0 {
            return Err(Error::InvalidInput(format!(
                "limit must not be negative, got {limit}"
            )));
        }
        let max_blocks = self.config.query.max_blocks;
        if limit as u64 > max_blocks {
            return Err(Error::InvalidInput(format!(
                "limit {limit} exceeds the maximum of {max_blocks} blocks"
            )));
        }
        if block_num < 0 {
            return Err(Error::InvalidInput(format!(
                "block number must not be negative, got {block_num}"
            )));
        }
        if limit == 0 {
            return Ok(vec![]);
        }

        let lowest = block_num - limit + 1;
        if lowest < 1 {
            return Err(Error::NotFound(format!(
                "range of {limit} blocks from {block_num} reaches block {lowest}"
            )));
        }

        let highest = checked_block_num(block_num)?;
        let lowest = checked_block_num(lowest)?;
        debug!(from = highest, to = lowest, "Fetching block range");

        let mut blocks = Vec::with_capacity(limit as usize);
        for num in (lowest..=highest).rev() {
            blocks.push(self.fetch_block(num).await?);
        }
        Ok(blocks)
    }

    async fn fetch_block(&self, block_num: u32) -> Result<Block, Error> {
        if block_num == 0 {
            return Err(Error::NotFound("block 0 does not exist".into()));
        }
        let raw = self.rpc.get_block(block_num).await?;
        Ok(Block::try_from(raw)?)
    }
}

fn checked_block_num(block_num: i64) -> Result<u32, Error> {
    if block_num < 0 {
        return Err(Error::InvalidInput(format!(
            "block number must not be negative, got {block_num}"
        )));
    }
    u32::try_from(block_num).map_err(|_| {
        Error::NotFound(format!("block {block_num} is out of range"))
    })
}

/// Account names hold up to 12 characters from `a-z`, `1-5` and `.`,
/// plus an optional 13th character from `.`, `1-5` and `a-j`.
fn check_account_name(account: &str) -> Result<(), Error> {
    if account.is_empty() {
        return Err(Error::InvalidInput("account name cannot be empty".into()));
    }
    if account.len() > 13 {
        return Err(Error::InvalidInput(format!(
            "account name {account:?} is longer than 13 characters"
        )));
    }

    let valid = account.bytes().enumerate().all(|(i, c)| match c {
        b'.' | b'1'..=b'5' => true,
        b'a'..=b'j' => true,
        b'k'..=b'z' => i < 12,
        _ => false,
    });
    if !valid {
        return Err(Error::InvalidInput(format!(
            "invalid account name {account:?}"
        )));
    }
    Ok(())
}

fn logged(err: Error) -> Error {
    match &err {
        Error::NotFound(_) | Error::InvalidInput(_) => {
            warn!(error = %err, "Request rejected")
        }
        _ => error!(error = %err, "Request failed"),
    }
    err
}
