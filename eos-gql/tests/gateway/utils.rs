// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Utility functions and mocks for the gateway integration tests.

use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use eos_data::abi::Abi;
use eos_data::{ChainInfo, RawBlock};
use eos_gql::config::GatewayConfig;
use eos_gql::node::{ChainRpc, NodeError, RemoteErrorDetail, RemoteErrorInfo};
use eos_gql::state::AppState;
use http::StatusCode;
use serde_json::{json, Value};

// --- Helper Functions ---

/// A raw `get_block` document whose transactions carry the given number of
/// actions each.
pub(crate) fn raw_block_json(block_num: u32, actions: &[usize]) -> Value {
    let transactions: Vec<Value> = actions
        .iter()
        .enumerate()
        .map(|(i, count)| {
            transaction_json(&format!("{block_num:08x}{i:02}"), *count)
        })
        .collect();

    json!({
        "id": format!("{block_num:08x}a1b2c3"),
        "block_num": block_num,
        "timestamp": "2018-06-09T11:56:30.000",
        "producer": "eosio",
        "confirmed": 0,
        "previous": format!("{:08x}a1b2c3", block_num.saturating_sub(1)),
        "transaction_mroot": "0000000000000000000000000000000000000000000000000000000000000000",
        "action_mroot": "1bc8d7d0f2e7a2bd3c8b0f4e8c5f6a7b8c9d0e1f2a3b4c5d6e7f8a9b0c1d2e3f",
        "schedule_version": 0,
        "producer_signature": "SIG_K1_KhKRMeFHa59AzBaqNvTMTZdFRmPyBFQWuK5Cm4s4A1zcGZa1Jy",
        "ref_block_prefix": 2_117_432_915u32,
        "transactions": transactions,
    })
}

pub(crate) fn transaction_json(id: &str, actions: usize) -> Value {
    let actions: Vec<Value> = (0..actions)
        .map(|i| {
            json!({
                "account": "eosio.token",
                "name": "transfer",
                "authorization": [{ "actor": "alice", "permission": "active" }],
                "data": {
                    "from": "alice",
                    "to": "bob",
                    "quantity": format!("{}.0000 EOS", i + 1),
                    "memo": "",
                },
                "hex_data": "0000000000855c340000000000000e3d",
            })
        })
        .collect();

    json!({
        "status": "executed",
        "cpu_usage_us": 412,
        "net_usage_words": 16,
        "trx": {
            "id": id,
            "signatures": ["SIG_K1_K4Zr6VzKVbVd4VD8XfxpxU9qGQf"],
            "compression": "none",
            "packed_context_free_data": "",
            "context_free_data": [],
            "packed_trx": "e6a0f45a",
            "transaction": {
                "expiration": "2018-06-09T11:57:00",
                "ref_block_num": 3,
                "ref_block_prefix": 4_111_385_452u32,
                "max_net_usage_words": 0,
                "max_cpu_usage_ms": 0,
                "delay_sec": 0,
                "context_free_actions": [],
                "actions": actions,
                "transaction_extensions": [],
            },
        },
    })
}

pub(crate) fn raw_block(block_num: u32, actions: &[usize]) -> RawBlock {
    serde_json::from_value(raw_block_json(block_num, actions))
        .expect("mock block decodes")
}

/// Block 100: two transactions with 1 and 2 actions plus a deferred one.
pub(crate) fn block_100() -> RawBlock {
    let mut doc = raw_block_json(100, &[1, 2]);
    doc["transactions"]
        .as_array_mut()
        .expect("transactions array")
        .push(json!({
            "status": "executed",
            "cpu_usage_us": 100,
            "net_usage_words": 0,
            "trx": "b1f0d30e8e74ab9a4c30fb6a1e0cf55e8f6c5ec8d1b2a3f4e5d6c7b8a9f0e1d2",
        }));
    serde_json::from_value(doc).expect("block 100 decodes")
}

pub(crate) fn chain_info() -> ChainInfo {
    serde_json::from_value(json!({
        "server_version": "0f6695cb",
        "chain_id": "aca376f206b8fc25a6ed44dbdc66547c36c6c33e3a119ffbeaef943642f0e906",
        "head_block_num": 16_412_345,
        "last_irreversible_block_num": 16_412_018,
        "last_irreversible_block_id": "00fa6d7296",
        "head_block_id": "00fa6eb9f1",
        "head_block_time": "2018-10-31T12:01:30.500",
        "head_block_producer": "eoscanadacom",
        "virtual_block_cpu_limit": 200_000_000u64,
        "virtual_block_net_limit": 1_048_576_000u64,
        "block_cpu_limit": 199_900u64,
        "block_net_limit": 1_048_576u64,
        "server_version_string": "v1.4.1",
    }))
    .expect("mock chain info decodes")
}

pub(crate) fn token_abi() -> Abi {
    serde_json::from_value(json!({
        "version": "eosio::abi/1.0",
        "types": [{ "new_type_name": "account_name", "type": "name" }],
        "structs": [{
            "name": "transfer",
            "base": "",
            "fields": [
                { "name": "from", "type": "account_name" },
                { "name": "to", "type": "account_name" },
                { "name": "quantity", "type": "asset" },
                { "name": "memo", "type": "string" },
            ],
        }],
        "actions": [{
            "name": "transfer",
            "type": "transfer",
            "ricardian_contract": "",
        }],
        "tables": [],
        "ricardian_clauses": [],
        "error_messages": [],
        "abi_extensions": [],
    }))
    .expect("mock abi decodes")
}

/// Binds an ephemeral port and returns the address, releasing the port.
pub(crate) fn get_ephemeral_port() -> SocketAddr {
    let listener =
        TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local address")
}

pub(crate) fn create_test_app_state(rpc: MockChainRpc) -> AppState {
    AppState::new(GatewayConfig::default(), rpc)
}

/// Error the node reports for a block number past its head.
pub(crate) fn unknown_block(block_num: u32) -> RemoteErrorInfo {
    RemoteErrorInfo {
        code: 3100002,
        name: "unknown_block_exception".into(),
        what: "Unknown block".into(),
        details: vec![RemoteErrorDetail {
            message: format!("Could not find block: {block_num}"),
        }],
    }
}

/// Error the node reports for an account that does not exist.
pub(crate) fn unknown_account(account: &str) -> RemoteErrorInfo {
    RemoteErrorInfo {
        code: 0,
        name: "exception".into(),
        what: "unspecified".into(),
        details: vec![RemoteErrorDetail {
            message: format!("unknown key (eosio::chain::name): {account}"),
        }],
    }
}

/// Error the node reports for an account name it cannot parse.
pub(crate) fn invalid_name(account: &str) -> RemoteErrorInfo {
    RemoteErrorInfo {
        code: 3010001,
        name: "name_type_exception".into(),
        what: "Invalid name".into(),
        details: vec![RemoteErrorDetail {
            message: format!("Name not properly normalized (name: {account})"),
        }],
    }
}

// --- Mock node ---

/// Failure the mock node reports for every call.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// The node answers `503 Service Unavailable`.
    Unavailable,
    /// The node answers with a chain API error.
    Remote(RemoteErrorInfo),
}

/// A mock implementation of `ChainRpc`.
///
/// Blocks and ABIs live in HashMaps; every requested block number and
/// account is recorded in call order.
#[derive(Debug, Clone, Default)]
pub struct MockChainRpc {
    pub info: Option<ChainInfo>,
    pub blocks: HashMap<u32, RawBlock>,
    /// `None` for an account without a deployed contract.
    pub abis: HashMap<String, Option<Abi>>,
    /// Block numbers requested so far, shared with clones.
    pub block_calls: Arc<Mutex<Vec<u32>>>,
    /// Accounts whose ABI was requested so far, shared with clones.
    pub abi_calls: Arc<Mutex<Vec<String>>>,
    /// Optional error to return from all methods.
    pub force_error: Option<MockFailure>,
}

impl MockChainRpc {
    /// Blocks `from..=to`, each with a single one-action transaction.
    pub fn with_blocks(from: u32, to: u32) -> Self {
        let mut rpc = Self {
            info: Some(chain_info()),
            ..Default::default()
        };
        for num in from..=to {
            rpc.blocks.insert(num, raw_block(num, &[1]));
        }
        rpc
    }

    pub fn with_block(mut self, block: RawBlock) -> Self {
        self.blocks.insert(block.block_num, block);
        self
    }

    pub fn with_abi(mut self, account: &str, abi: Option<Abi>) -> Self {
        self.abis.insert(account.to_string(), abi);
        self
    }

    pub fn failing(failure: MockFailure) -> Self {
        Self {
            force_error: Some(failure),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<u32> {
        self.block_calls.lock().expect("calls lock").clone()
    }

    pub fn abi_calls(&self) -> Vec<String> {
        self.abi_calls.lock().expect("calls lock").clone()
    }

    fn check_error(&self) -> Result<(), NodeError> {
        match &self.force_error {
            None => Ok(()),
            Some(MockFailure::Unavailable) => Err(NodeError::Status {
                status: StatusCode::SERVICE_UNAVAILABLE,
                body: "upstream connect error".into(),
            }),
            Some(MockFailure::Remote(info)) => {
                Err(NodeError::Remote(info.clone()))
            }
        }
    }
}

#[async_trait]
impl ChainRpc for MockChainRpc {
    async fn get_info(&self) -> Result<ChainInfo, NodeError> {
        self.check_error()?;
        Ok(self.info.clone().unwrap_or_else(chain_info))
    }

    async fn get_block(&self, block_num: u32) -> Result<RawBlock, NodeError> {
        self.block_calls
            .lock()
            .expect("calls lock")
            .push(block_num);
        self.check_error()?;
        self.blocks.get(&block_num).cloned().ok_or_else(|| {
            NodeError::Remote(unknown_block(block_num))
        })
    }

    async fn get_abi(&self, account: &str) -> Result<Option<Abi>, NodeError> {
        self.abi_calls
            .lock()
            .expect("calls lock")
            .push(account.to_string());
        self.check_error()?;
        self.abis
            .get(account)
            .cloned()
            .ok_or_else(|| NodeError::Remote(unknown_account(account)))
    }
}
