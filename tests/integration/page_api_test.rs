// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::Value;

use super::helpers::test_server;

#[tokio::test]
async fn page_endpoint_returns_fragments_and_full_document() {
    let server = test_server(&[]);
    let response = server.get("/wp-json/elementor/v1/page/about").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let head = body["head"].as_str().unwrap();
    let page_body = body["body"].as_str().unwrap();

    assert!(head.contains("<title>About us</title>"));
    assert!(!head.contains("<head"));
    assert!(page_body.contains("data-elementor-id=\"42\""));
    assert!(!page_body.contains("<body"));
    assert_eq!(body["footer"], "</html>");
    assert_eq!(body["bodyClass"], "elementor-kit-7");
    assert_eq!(body["seo"]["title"], "About us");
    assert_eq!(body["seo"]["description"], "Who we are");
    assert_eq!(body["seo"]["og_image"], "https://cms.test/wp-content/uploads/about.jpg");
    assert_eq!(body["seo"]["permalink"], "https://cms.test/about/");
    assert!(body["full"].as_str().unwrap().starts_with("<!DOCTYPE html>"));
}

#[tokio::test]
async fn page_endpoint_is_mounted_without_prefix() {
    let server = test_server(&[]);
    let prefixed: Value = server.get("/wp-json/elementor/v1/page/about").await.json();
    let bare: Value = server.get("/elementor/v1/page/about").await.json();
    assert_eq!(prefixed["body"], bare["body"]);
}

#[tokio::test]
async fn missing_page_is_wp_style_404() {
    let server = test_server(&[]);
    let response = server.get("/wp-json/elementor/v1/page/nothing-here").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "no_page");
    assert_eq!(body["message"], "Page not found");
    assert_eq!(body["data"]["status"], 404);
}

#[tokio::test]
async fn draft_page_is_not_published() {
    let server = test_server(&[]);
    let response = server.get("/wp-json/elementor/v1/page/coming-soon").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["code"], "no_page");
    assert_eq!(body["message"], "Page not found or not published");
}

#[tokio::test]
async fn slug_outside_route_pattern_is_no_page() {
    let server = test_server(&[]);
    let response = server.get("/wp-json/elementor/v1/page/about_us").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "no_page");
}

#[tokio::test]
async fn builder_disabled_is_no_page() {
    let server = test_server(&[("builder.enabled", "false")]);
    let response = server.get("/wp-json/elementor/v1/page/about").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "no_page");
}

#[tokio::test]
async fn links_point_to_frontend_when_configured() {
    let server = test_server(&[("site.frontend_uri", "https://www.test")]);
    let body: Value = server.get("/wp-json/elementor/v1/page/about").await.json();

    let page_body = body["body"].as_str().unwrap();
    assert!(page_body.contains("href=\"https://www.test/contact/\""));
    assert_eq!(body["seo"]["permalink"], "https://www.test/about/");
}

#[tokio::test]
async fn links_keep_origin_when_wp_domain_is_forced() {
    let server = test_server(&[
        ("site.frontend_uri", "https://www.test"),
        ("site.use_wp_domain_for_urls", "true"),
    ]);
    let body: Value = server.get("/wp-json/elementor/v1/page/about").await.json();

    assert!(body["body"].as_str().unwrap().contains("href=\"https://cms.test/contact/\""));
    assert_eq!(body["seo"]["permalink"], "https://cms.test/about/");
}

#[tokio::test]
async fn consecutive_requests_do_not_leak_content() {
    let server = test_server(&[]);
    let about: Value = server.get("/elementor/v1/page/about").await.json();
    let contact: Value = server.get("/elementor/v1/page/contact").await.json();

    assert!(about["body"].as_str().unwrap().contains("elementor-42"));
    let contact_body = contact["body"].as_str().unwrap();
    assert!(contact_body.contains("<p>Write to us.</p>"));
    assert!(!contact_body.contains("elementor-42"));
    assert_eq!(contact["seo"]["title"], "Contact");
}

#[tokio::test]
async fn cached_responses_match_fresh_renders() {
    let server = test_server(&[("cache.enabled", "true")]);
    let first: Value = server.get("/elementor/v1/page/about").await.json();
    let second: Value = server.get("/elementor/v1/page/about").await.json();
    assert_eq!(first, second);
}
