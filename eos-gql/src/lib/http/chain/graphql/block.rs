// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::*;

pub async fn block_by_num(
    ctx: &Context<'_>,
    block_num: i64,
) -> OptResult<Block> {
    let state = ctx.data::<StateContext>()?;
    let block = state.get_block(block_num).await.map_err(|e| e.extend())?;
    Ok(Some(block))
}

pub async fn blocks_range(
    ctx: &Context<'_>,
    block_num: i64,
    limit: i64,
) -> OptResult<Vec<Block>> {
    let state = ctx.data::<StateContext>()?;
    let blocks = state
        .get_blocks(block_num, limit)
        .await
        .map_err(|e| e.extend())?;
    Ok(Some(blocks))
}
