// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use axum_test::TestServer;
use elementor_bridge::infrastructure::repositories::wp_rest_content_repo::WpRestContentRepository;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{build_app, settings_with};

async fn server_against(cms: &MockServer, frontend: Option<&str>) -> TestServer {
    let mut overrides = vec![("site.home_url", cms.uri())];
    if let Some(frontend) = frontend {
        overrides.push(("site.frontend_uri", frontend.to_string()));
    }
    let overrides: Vec<(&str, &str)> = overrides.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let settings = settings_with(&overrides);

    let repository = WpRestContentRepository::new(&cms.uri(), Duration::from_secs(5), Some(3))
        .unwrap();
    TestServer::new(build_app(&settings, Arc::new(repository))).unwrap()
}

#[tokio::test]
async fn page_is_rendered_from_wordpress_rest() {
    let cms = MockServer::start().await;
    let origin = cms.uri();
    Mock::given(method("GET"))
        .and(path("/wp-json/wp/v2/pages"))
        .and(query_param("slug", "pricing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 77,
            "slug": "pricing",
            "type": "page",
            "status": "publish",
            "link": format!("{origin}/pricing/"),
            "title": {"rendered": "Pricing"},
            "content": {"rendered": format!(
                "<div data-elementor-type=\"wp-page\" data-elementor-id=\"77\" class=\"elementor elementor-77\"><a href=\"{origin}/signup/\">Sign up</a></div>"
            )},
            "meta": {"_elementor_edit_mode": "builder"},
            "yoast_head_json": {"description": "Plans and prices"}
        }])))
        .mount(&cms)
        .await;

    let server = server_against(&cms, Some("https://www.test")).await;
    let response = server.get("/wp-json/elementor/v1/page/pricing").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let page_body = body["body"].as_str().unwrap();
    assert_eq!(page_body.matches("data-elementor-id=\"77\"").count(), 1);
    assert!(page_body.contains("href=\"https://www.test/signup/\""));
    assert_eq!(body["bodyClass"], "elementor-kit-3");
    assert_eq!(body["seo"]["description"], "Plans and prices");
    assert_eq!(body["seo"]["permalink"], "https://www.test/pricing/");
}

#[tokio::test]
async fn unreachable_content_source_is_internal_error() {
    let cms = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&cms)
        .await;

    let server = server_against(&cms, None).await;
    let response = server.get("/wp-json/elementor/v1/page/pricing").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["data"]["status"], 500);
}
