// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

pub mod error;
pub mod graphql;

use async_graphql::http::GraphiQLSource;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use tracing::debug;

use error::{ChainError, ChainResult};
use graphql::ChainSchema;

const GRAPHQL_ENDPOINT: &str = "/graphql";

/// Executes a GraphQL request.
///
/// A response carrying data is always `200 OK`, even alongside field
/// errors. A response without data takes its status from the first error.
pub(crate) async fn graphql_handler(
    State(schema): State<ChainSchema>,
    Json(request): Json<async_graphql::Request>,
) -> ChainResult<Json<async_graphql::Response>> {
    debug!(
        operation = request.operation_name.as_deref().unwrap_or_default(),
        "Executing GraphQL request"
    );

    let response = schema.execute(request).await;
    if response.errors.is_empty()
        || response.data != async_graphql::Value::Null
    {
        return Ok(Json(response));
    }

    Err(ChainError::from(response.errors))
}

pub(crate) async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_ENDPOINT).finish())
}
