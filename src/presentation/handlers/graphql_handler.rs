// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::{
    application::{dto::graphql::GraphQlRequest, use_cases::graphql_use_case::GraphQlService},
    presentation::errors::AppError,
};

/// 执行 GraphQL 持久化查询
///
/// 不支持的操作返回 400 与 `errors` 数组
pub async fn graphql(
    Extension(service): Extension<Arc<GraphQlService>>,
    Json(request): Json<GraphQlRequest>,
) -> Result<Response, AppError> {
    let response = service.execute(&request).await?;
    let status = if response.is_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    Ok((status, Json(response)).into_response())
}
