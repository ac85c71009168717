// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::helpers::test_server;

const GET_PAGE_QUERY: &str = "query GetPageByUri($uri: ID!) { page(id: $uri, idType: URI) { id title elementorContent { head body footer bodyClass seo { title description og_image permalink } } } }";

#[tokio::test]
async fn get_page_by_uri_returns_elementor_content() {
    let server = test_server(&[]);
    let response = server
        .post("/graphql")
        .json(&json!({
            "query": GET_PAGE_QUERY,
            "variables": {"uri": "/about/"}
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let page = &body["data"]["page"];
    assert_eq!(page["title"], "About us");
    assert_eq!(page["databaseId"], 42);

    let content = &page["elementorContent"];
    assert_eq!(content["bodyClass"], "elementor-kit-7");
    assert_eq!(content["seo"]["description"], "Who we are");
    assert!(content["body"].as_str().unwrap().contains("elementor-42"));
    assert!(content.get("full").is_none());
}

#[tokio::test]
async fn unknown_page_is_null() {
    let server = test_server(&[]);
    let body: Value = server
        .post("/graphql")
        .json(&json!({
            "operationName": "GetPageByUri",
            "variables": {"uri": "/missing/"}
        }))
        .await
        .json();

    assert_eq!(body, json!({"data": {"page": null}}));
}

#[tokio::test]
async fn failed_capture_nulls_elementor_content() {
    let server = test_server(&[("builder.enabled", "false")]);
    let body: Value = server
        .post("/graphql")
        .json(&json!({
            "operationName": "GetPageByUri",
            "variables": {"uri": "about"}
        }))
        .await
        .json();

    assert_eq!(body["data"]["page"]["title"], "About us");
    assert!(body["data"]["page"]["elementorContent"].is_null());
}

#[tokio::test]
async fn unsupported_operation_is_rejected() {
    let server = test_server(&[]);
    let response = server
        .post("/graphql")
        .json(&json!({"operationName": "GetPosts", "query": "query GetPosts { posts { id } }"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert!(body["errors"][0]["message"].is_string());
    assert!(body.get("data").is_none());
}
