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

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tracing::info;

use crate::{
    application::{dto::page_response::PageResponseDto, use_cases::page_use_case::PageService},
    presentation::errors::AppError,
};

/// 获取页面片段
///
/// `GET /elementor/v1/page/{slug}`
pub async fn get_page(
    Extension(pages): Extension<Arc<PageService>>,
    Path(slug): Path<String>,
) -> Result<Json<PageResponseDto>, AppError> {
    info!("Page fragments requested for slug {}", slug);
    let page = pages.page_by_slug(&slug).await?;
    Ok(Json(page.into()))
}
