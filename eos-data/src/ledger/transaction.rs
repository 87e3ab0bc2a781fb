// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::{Deserialize, Serialize};

use super::Action;

/// A transaction as listed in a block, with its execution metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub status: String,
    #[serde(default)]
    pub cpu_usage_us: u32,
    #[serde(default)]
    pub net_usage_words: u32,
    pub trx: Trx,
}

/// The payload of a block transaction.
///
/// The node encodes deferred transactions as a bare id string instead of
/// an object; those decode into a `Trx` with only `id` set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TrxRepr")]
pub struct Trx {
    pub id: String,
    pub signatures: Vec<String>,
    pub compression: Option<String>,
    pub packed_context_free_data: Option<String>,
    pub context_free_data: Vec<String>,
    pub packed_trx: Option<String>,
    pub transaction: Option<TransactionReceipt>,
}

/// The unpacked transaction body carried by a [`Trx`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub expiration: String,
    pub ref_block_num: u16,
    pub ref_block_prefix: u32,
    #[serde(default)]
    pub max_net_usage_words: u32,
    #[serde(default)]
    pub max_cpu_usage_ms: u32,
    #[serde(default)]
    pub delay_sec: u32,
    #[serde(default)]
    pub context_free_actions: Vec<Action>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub transaction_extensions: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TrxRepr {
    Id(String),
    Packed(PackedTrx),
}

#[derive(Deserialize)]
struct PackedTrx {
    id: String,
    #[serde(default)]
    signatures: Vec<String>,
    #[serde(default)]
    compression: Option<String>,
    #[serde(default)]
    packed_context_free_data: Option<String>,
    #[serde(default)]
    context_free_data: Vec<String>,
    #[serde(default)]
    packed_trx: Option<String>,
    #[serde(default)]
    transaction: Option<TransactionReceipt>,
}

impl From<TrxRepr> for Trx {
    fn from(repr: TrxRepr) -> Self {
        match repr {
            TrxRepr::Id(id) => Self {
                id,
                ..Default::default()
            },
            TrxRepr::Packed(p) => Self {
                id: p.id,
                signatures: p.signatures,
                compression: p.compression,
                packed_context_free_data: p.packed_context_free_data,
                context_free_data: p.context_free_data,
                packed_trx: p.packed_trx,
                transaction: p.transaction,
            },
        }
    }
}
