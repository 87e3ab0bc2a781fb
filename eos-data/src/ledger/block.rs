// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Transaction;

/// Errors raised while turning a raw `get_block` document into a [`Block`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnrichError {
    /// The document carries no `transactions` list at all. This is kept
    /// apart from an empty list, which is a valid block with no actions.
    #[error("block {0} has no transactions list")]
    MissingTransactions(u32),
}

/// A block exactly as the node returns it from `get_block`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    pub id: String,
    pub block_num: u32,
    pub timestamp: String,
    pub producer: String,
    #[serde(default)]
    pub confirmed: u16,
    pub previous: String,
    pub transaction_mroot: String,
    pub action_mroot: String,
    #[serde(default)]
    pub schedule_version: u32,
    #[serde(default)]
    pub producer_signature: String,
    #[serde(default)]
    pub ref_block_prefix: u32,
    pub transactions: Option<Vec<Transaction>>,
}

/// A block enriched with the number of actions it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub block_num: u32,
    pub timestamp: String,
    pub producer: String,
    pub confirmed: u16,
    pub previous: String,
    pub transaction_mroot: String,
    pub action_mroot: String,
    pub schedule_version: u32,
    pub producer_signature: String,
    pub ref_block_prefix: u32,
    pub transactions: Vec<Transaction>,
    actions_count: u64,
}

impl Block {
    /// Total number of actions across the receipts of all transactions.
    pub fn actions_count(&self) -> u64 {
        self.actions_count
    }
}

impl TryFrom<RawBlock> for Block {
    type Error = EnrichError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let transactions = raw
            .transactions
            .ok_or(EnrichError::MissingTransactions(raw.block_num))?;
        let actions_count = count_actions(&transactions);

        Ok(Self {
            id: raw.id,
            block_num: raw.block_num,
            timestamp: raw.timestamp,
            producer: raw.producer,
            confirmed: raw.confirmed,
            previous: raw.previous,
            transaction_mroot: raw.transaction_mroot,
            action_mroot: raw.action_mroot,
            schedule_version: raw.schedule_version,
            producer_signature: raw.producer_signature,
            ref_block_prefix: raw.ref_block_prefix,
            transactions,
            actions_count,
        })
    }
}

/// Counts the actions of every transaction that carries a receipt.
///
/// A transaction whose `trx` has no `transaction` (a deferred transaction
/// referenced by id only) contributes zero.
pub fn count_actions(transactions: &[Transaction]) -> u64 {
    transactions
        .iter()
        .filter_map(|t| t.trx.transaction.as_ref())
        .map(|receipt| receipt.actions.len() as u64)
        .sum()
}
