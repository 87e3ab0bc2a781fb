// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # Chain API Node Adapter
//!
//! [`ChainRpc`] is the seam between the gateway and the remote node. The
//! query layer only sees `Arc<dyn ChainRpc>`, so the production client
//! ([`HttpChainRpc`]) can be swapped for a mock in tests or pointed at any
//! node through configuration.

mod client;
mod error;

pub use client::HttpChainRpc;
pub use error::{NodeError, RemoteErrorDetail, RemoteErrorInfo};

use async_trait::async_trait;
use eos_data::abi::Abi;
use eos_data::{ChainInfo, RawBlock};
use std::fmt::Debug;

/// Calls of the node's `/v1/chain` API used by the gateway.
///
/// Implementations must be thread-safe (`Send + Sync + 'static`).
#[async_trait]
pub trait ChainRpc: Send + Sync + Debug + 'static {
    /// `get_info`: the current chain status.
    async fn get_info(&self) -> Result<ChainInfo, NodeError>;

    /// `get_block`: the block with the given number, as returned by the
    /// node.
    async fn get_block(&self, block_num: u32) -> Result<RawBlock, NodeError>;

    /// `get_abi`: the ABI of `account`, `None` when the account has no
    /// contract deployed.
    async fn get_abi(&self, account: &str) -> Result<Option<Abi>, NodeError>;
}
