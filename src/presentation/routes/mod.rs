// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{graphql_use_case::GraphQlService, page_use_case::PageService};
use crate::presentation::errors::wp_error;
use crate::presentation::handlers::{graphql_handler, page_handler, template_handler};

/// REST 路由的命名空间前缀
pub const REST_PREFIX: &str = "/wp-json";

/// 创建应用路由
///
/// 桥接接口同时挂载在 `/wp-json` 前缀下与根路径下
pub fn routes() -> Router {
    let bridge_routes = Router::new()
        .route("/elementor/v1/page/{slug}", get(page_handler::get_page))
        .route("/elementor/v1/header", get(template_handler::get_header))
        .route("/elementor/v1/footer", get(template_handler::get_footer));

    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/graphql", post(graphql_handler::graphql))
        .nest(REST_PREFIX, bridge_routes.clone())
        .merge(bridge_routes)
        .fallback(no_route)
}

/// 组装带共享服务与请求追踪的完整应用
pub fn app(pages: Arc<PageService>, graphql: Arc<GraphQlService>) -> Router {
    routes()
        .layer(Extension(pages))
        .layer(Extension(graphql))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

async fn no_route() -> Response {
    wp_error(
        StatusCode::NOT_FOUND,
        "rest_no_route",
        "No route was found matching the URL and request method.",
    )
}
