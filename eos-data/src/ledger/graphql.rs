// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::*;
use async_graphql::{Json, Object};

#[Object(rename_fields = "snake_case")]
impl Block {
    pub async fn id(&self) -> &str {
        &self.id
    }

    pub async fn block_num(&self) -> u32 {
        self.block_num
    }

    pub async fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub async fn producer(&self) -> &str {
        &self.producer
    }

    pub async fn confirmed(&self) -> u16 {
        self.confirmed
    }

    pub async fn previous(&self) -> &str {
        &self.previous
    }

    pub async fn transaction_mroot(&self) -> &str {
        &self.transaction_mroot
    }

    pub async fn action_mroot(&self) -> &str {
        &self.action_mroot
    }

    pub async fn schedule_version(&self) -> u32 {
        self.schedule_version
    }

    pub async fn producer_signature(&self) -> &str {
        &self.producer_signature
    }

    pub async fn ref_block_prefix(&self) -> u32 {
        self.ref_block_prefix
    }

    #[graphql(name = "actions_count")]
    pub async fn gql_actions_count(&self) -> u64 {
        self.actions_count()
    }

    pub async fn transactions_count(&self) -> u64 {
        self.transactions.len() as u64
    }

    pub async fn transactions(&self) -> &Vec<Transaction> {
        &self.transactions
    }
}

#[Object(rename_fields = "snake_case")]
impl Transaction {
    pub async fn status(&self) -> &str {
        &self.status
    }

    pub async fn cpu_usage_us(&self) -> u32 {
        self.cpu_usage_us
    }

    pub async fn net_usage_words(&self) -> u32 {
        self.net_usage_words
    }

    pub async fn trx(&self) -> &Trx {
        &self.trx
    }
}

#[Object(rename_fields = "snake_case")]
impl Trx {
    pub async fn id(&self) -> &str {
        &self.id
    }

    pub async fn signatures(&self) -> &Vec<String> {
        &self.signatures
    }

    pub async fn compression(&self) -> Option<&str> {
        self.compression.as_deref()
    }

    pub async fn packed_context_free_data(&self) -> Option<&str> {
        self.packed_context_free_data.as_deref()
    }

    pub async fn context_free_data(&self) -> &Vec<String> {
        &self.context_free_data
    }

    pub async fn packed_trx(&self) -> Option<&str> {
        self.packed_trx.as_deref()
    }

    /// `null` when the node only referenced the transaction by id.
    pub async fn transaction(&self) -> Option<&TransactionReceipt> {
        self.transaction.as_ref()
    }
}

#[Object(rename_fields = "snake_case")]
impl TransactionReceipt {
    pub async fn expiration(&self) -> &str {
        &self.expiration
    }

    pub async fn ref_block_num(&self) -> u16 {
        self.ref_block_num
    }

    pub async fn ref_block_prefix(&self) -> u32 {
        self.ref_block_prefix
    }

    pub async fn max_net_usage_words(&self) -> u32 {
        self.max_net_usage_words
    }

    pub async fn max_cpu_usage_ms(&self) -> u32 {
        self.max_cpu_usage_ms
    }

    pub async fn delay_sec(&self) -> u32 {
        self.delay_sec
    }

    pub async fn context_free_actions(&self) -> &Vec<Action> {
        &self.context_free_actions
    }

    pub async fn actions(&self) -> &Vec<Action> {
        &self.actions
    }
}

#[Object(rename_fields = "snake_case")]
impl Action {
    pub async fn account(&self) -> &str {
        &self.account
    }

    pub async fn name(&self) -> &str {
        &self.name
    }

    pub async fn authorization(&self) -> &Vec<PermissionLevel> {
        &self.authorization
    }

    pub async fn data(&self) -> Json<serde_json::Value> {
        Json(self.data.clone())
    }

    pub async fn hex_data(&self) -> Option<&str> {
        self.hex_data.as_deref()
    }

    #[graphql(name = "transfer")]
    pub async fn gql_transfer(&self) -> Option<TransferData> {
        self.transfer()
    }
}
