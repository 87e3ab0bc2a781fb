// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod block;
mod chain;

use block::*;
use chain::*;

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ErrorExtensions, FieldResult,
    Object, Schema,
};
use eos_data::abi::Abi;
use eos_data::{Block, ChainInfo};

use std::sync::Arc;

use crate::state::AppState;

pub type StateContext = Arc<AppState>;
pub type OptResult<T> = FieldResult<Option<T>>;
pub type ChainSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Builds the chain schema, sharing `app_state` with every resolver.
pub fn schema(app_state: StateContext) -> ChainSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(app_state)
        .finish()
}

pub struct Query;

#[Object(rename_args = "snake_case")]
impl Query {
    /// Status of the upstream node.
    async fn get_chain_metadata(
        &self,
        ctx: &Context<'_>,
    ) -> OptResult<ChainInfo> {
        chain_metadata(ctx).await
    }

    #[graphql(deprecation = "Use `getChainMetadata`")]
    async fn get_chain(&self, ctx: &Context<'_>) -> OptResult<ChainInfo> {
        chain_metadata(ctx).await
    }

    async fn get_block(
        &self,
        ctx: &Context<'_>,
        block_num: i64,
    ) -> OptResult<Block> {
        block_by_num(ctx, block_num).await
    }

    /// `limit` blocks from `block_num` downwards, highest first.
    async fn get_blocks(
        &self,
        ctx: &Context<'_>,
        block_num: i64,
        limit: i64,
    ) -> OptResult<Vec<Block>> {
        blocks_range(ctx, block_num, limit).await
    }

    async fn get_abi(
        &self,
        ctx: &Context<'_>,
        account: String,
    ) -> OptResult<Abi> {
        abi_by_account(ctx, &account).await
    }
}
