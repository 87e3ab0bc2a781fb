// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod action;
mod block;
mod transaction;

#[cfg(feature = "graphql")]
mod graphql;

pub use action::{Action, PermissionLevel, TransferData};
pub use block::{count_actions, Block, EnrichError, RawBlock};
pub use transaction::{Transaction, TransactionReceipt, Trx};
