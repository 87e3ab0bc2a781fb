// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use super::*;

pub async fn chain_metadata(ctx: &Context<'_>) -> OptResult<ChainInfo> {
    let state = ctx.data::<StateContext>()?;
    let info = state.get_chain_info().await.map_err(|e| e.extend())?;
    Ok(Some(info))
}

pub async fn abi_by_account(
    ctx: &Context<'_>,
    account: &str,
) -> OptResult<Abi> {
    let state = ctx.data::<StateContext>()?;
    let abi = state.get_abi(account).await.map_err(|e| e.extend())?;
    Ok(Some(abi))
}
