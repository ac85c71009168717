// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::Value;

use super::helpers::test_server;

#[tokio::test]
async fn header_returns_raw_builder_html() {
    let server = test_server(&[]);
    let response = server.get("/wp-json/elementor/v1/header").await;
    response.assert_status_ok();

    let html: String = response.json();
    assert!(html.contains("<nav>Menu</nav>"));
    assert!(!html.contains("<head"));
    assert!(!html.contains("elementorFrontendConfig"));
}

#[tokio::test]
async fn footer_without_builder_is_no_elementor() {
    let server = test_server(&[]);
    let response = server.get("/elementor/v1/footer").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "no_elementor");
}

#[tokio::test]
async fn missing_templates_use_their_own_codes() {
    let server = test_server(&[
        ("templates.header_slug", "main-header"),
        ("templates.footer_slug", "main-footer"),
    ]);

    let header: Value = server.get("/elementor/v1/header").await.json();
    assert_eq!(header["code"], "no_header");
    assert_eq!(header["data"]["status"], 404);

    let footer: Value = server.get("/elementor/v1/footer").await.json();
    assert_eq!(footer["code"], "no_footer");
}
