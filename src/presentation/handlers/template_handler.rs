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

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::{
    application::use_cases::page_use_case::{PageService, TemplateKind},
    presentation::errors::AppError,
};

/// 页眉模板的构建器输出，响应体为 JSON 字符串
pub async fn get_header(
    Extension(pages): Extension<Arc<PageService>>,
) -> Result<Json<String>, AppError> {
    Ok(Json(pages.template(TemplateKind::Header).await?))
}

/// 页脚模板的构建器输出，响应体为 JSON 字符串
pub async fn get_footer(
    Extension(pages): Extension<Arc<PageService>>,
) -> Result<Json<String>, AppError> {
    Ok(Json(pages.template(TemplateKind::Footer).await?))
}
