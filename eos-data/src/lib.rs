// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Typed projections of the EOSIO chain API (`/v1/chain/*`) responses.
//!
//! The types mirror the node's wire format field by field, so they
//! deserialize directly from the JSON the node returns. The only local
//! computation is the `actions_count` derived while turning a [`RawBlock`]
//! into a [`Block`].

pub mod abi;
pub mod chain;
pub mod ledger;

pub use abi::Abi;
pub use chain::ChainInfo;
pub use ledger::{
    Action, Block, EnrichError, PermissionLevel, RawBlock, Transaction,
    TransactionReceipt, TransferData, Trx,
};
