// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::{Deserialize, Serialize};

/// Snapshot of the remote node state as returned by `get_info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[cfg_attr(
    feature = "graphql",
    graphql(name = "Chain", rename_fields = "snake_case")
)]
pub struct ChainInfo {
    pub server_version: String,
    pub chain_id: String,
    pub head_block_num: u32,
    pub last_irreversible_block_num: u32,
    pub last_irreversible_block_id: String,
    pub head_block_id: String,
    pub head_block_time: String,
    pub head_block_producer: String,
    pub virtual_block_cpu_limit: u64,
    pub virtual_block_net_limit: u64,
    pub block_cpu_limit: u64,
    pub block_net_limit: u64,

    // Reported by newer node versions only
    #[serde(default)]
    pub server_version_string: Option<String>,
    #[serde(default)]
    pub fork_db_head_block_num: Option<u32>,
    #[serde(default)]
    pub fork_db_head_block_id: Option<String>,
    #[serde(default)]
    pub server_full_version_string: Option<String>,
    #[serde(default)]
    pub earliest_available_block_num: Option<u32>,
    #[serde(default)]
    pub last_irreversible_block_time: Option<String>,
}
