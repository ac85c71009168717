// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::dto::graphql::{GraphQlPage, GraphQlRequest, GraphQlResponse};
use crate::application::use_cases::page_use_case::PageService;
use crate::utils::errors::BridgeError;
use crate::utils::slug::{is_route_slug, sanitize_title};

/// 把 URI 转换为页面路径
///
/// 查询串与片段被忽略，每一段都必须是合法的路由 slug 并经过清洗，
/// `/About/Team/` 得到 `about/team`
pub fn uri_to_path(uri: &str) -> Option<String> {
    let path = uri.split(['?', '#']).next().unwrap_or_default();
    let mut segments = Vec::new();
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        if !is_route_slug(segment) {
            return None;
        }
        let sanitized = sanitize_title(segment);
        if sanitized.is_empty() {
            return None;
        }
        segments.push(sanitized);
    }
    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// GraphQL 持久化查询用例
pub struct GraphQlService {
    pages: Arc<PageService>,
}

impl GraphQlService {
    pub fn new(pages: Arc<PageService>) -> Self {
        Self { pages }
    }

    /// 执行请求
    ///
    /// 页面不存在或未发布时 `page` 为 `null`，捕获失败时 `elementorContent` 为 `null`；
    /// 只有内容源故障会作为错误返回
    pub async fn execute(&self, request: &GraphQlRequest) -> Result<GraphQlResponse, BridgeError> {
        if !request.is_get_page_by_uri() {
            debug!("Rejecting unsupported GraphQL operation {:?}", request.operation_name);
            return Ok(GraphQlResponse::error(
                "Only the GetPageByUri persisted query is supported",
            ));
        }

        let Some(path) = request.variables.uri.as_deref().and_then(uri_to_path) else {
            return Ok(GraphQlResponse::page(None));
        };

        let post = match self.pages.find_page_by_path(&path).await? {
            Some(post) if post.is_public() => post,
            _ => return Ok(GraphQlResponse::page(None)),
        };

        let id = post.id;
        let title = post.title.clone();
        let elementor_content = match self.pages.render_found(post).await {
            Ok(page) => Some(page.fragments),
            Err(e) => {
                warn!("elementorContent for page {} resolved to null: {}", id, e);
                None
            }
        };

        Ok(GraphQlResponse::page(Some(GraphQlPage {
            id: id.to_string(),
            database_id: id,
            title,
            elementor_content,
        })))
    }
}
