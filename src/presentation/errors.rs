// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::utils::errors::BridgeError;

/// 应用错误类型
///
/// 以 WordPress REST 的错误格式 `{code, message, data: {status}}` 输出；
/// 只有未找到错误会原样暴露，其余错误统一为 500
#[derive(Debug)]
pub struct AppError(BridgeError);

impl AppError {
    pub fn inner(&self) -> &BridgeError {
        &self.0
    }
}

/// WordPress 风格的错误响应
pub fn wp_error(status: StatusCode, code: &str, message: &str) -> Response {
    let body = Json(json!({
        "code": code,
        "message": message,
        "data": { "status": status.as_u16() },
    }));
    (status, body).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        match &self.0 {
            BridgeError::NotFound { code, message } => wp_error(status, code.as_str(), message),
            other => {
                error!("Request failed: {}", other);
                wp_error(status, "internal_error", "Internal server error")
            }
        }
    }
}

impl<E> From<E> for AppError
where
    E: Into<BridgeError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
