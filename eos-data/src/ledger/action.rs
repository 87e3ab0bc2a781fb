// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::{Deserialize, Serialize};

/// A single contract invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub account: String,
    pub name: String,
    #[serde(default)]
    pub authorization: Vec<PermissionLevel>,
    /// Decoded arguments when the node knows the contract ABI, the raw hex
    /// string otherwise.
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub hex_data: Option<String>,
}

impl Action {
    /// Typed view of `data` for token transfers and other actions shaped
    /// like one (`from` and `to` accounts).
    pub fn transfer(&self) -> Option<TransferData> {
        TransferData::deserialize(&self.data).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[cfg_attr(feature = "graphql", graphql(rename_fields = "snake_case"))]
pub struct PermissionLevel {
    pub actor: String,
    pub permission: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(async_graphql::SimpleObject))]
#[cfg_attr(feature = "graphql", graphql(rename_fields = "snake_case"))]
pub struct TransferData {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
}
