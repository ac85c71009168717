// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Router;
use axum_test::TestServer;
use elementor_bridge::application::use_cases::graphql_use_case::GraphQlService;
use elementor_bridge::application::use_cases::page_use_case::PageService;
use elementor_bridge::config::settings::Settings;
use elementor_bridge::domain::repositories::content_repository::ContentRepository;
use elementor_bridge::domain::services::render_capture::RenderCaptureService;
use elementor_bridge::infrastructure::cache::page_cache::PageCache;
use elementor_bridge::infrastructure::rendering::builder_pipeline::BuilderPipeline;
use elementor_bridge::infrastructure::repositories::memory_content_repo::MemoryContentRepository;
use elementor_bridge::presentation::routes;
use elementor_bridge::utils::url_utils::UrlMapper;
use std::sync::Arc;

pub const SITE_FIXTURES: &str = r#"
active_kit_id: 7
posts:
  - id: 42
    slug: about
    status: publish
    title: About us
    link: https://cms.test/about/
    built_with_builder: true
    builder_data: '<div class="intro"><a href="https://cms.test/contact/">Contact</a><script>window.aboutLoaded = true;</script></div>'
    featured_image_url: https://cms.test/wp-content/uploads/about.jpg
    meta:
      _yoast_wpseo_metadesc: Who we are
  - id: 43
    slug: contact
    status: publish
    title: Contact
    link: https://cms.test/contact/
    content: Write to us.
  - id: 44
    slug: coming-soon
    status: draft
    title: Coming soon
  - id: 50
    slug: header
    post_type: elementor-hf
    status: publish
    built_with_builder: true
    builder_data: <nav>Menu</nav>
  - id: 51
    slug: footer
    post_type: hfe_template
    status: publish
    content: classic footer
"#;

/// 以默认配置为基础，叠加覆盖项
pub fn settings_with(overrides: &[(&str, &str)]) -> Settings {
    let mut builder = Settings::builder()
        .unwrap()
        .set_override("site.home_url", "https://cms.test")
        .unwrap();
    for (key, value) in overrides {
        builder = builder.set_override(*key, *value).unwrap();
    }
    builder.build().unwrap().try_deserialize().unwrap()
}

/// 按配置组装完整应用
pub fn build_app(settings: &Settings, repository: Arc<dyn ContentRepository>) -> Router {
    let pipeline = Arc::new(BuilderPipeline::new(&settings.site, &settings.builder));
    let capture = Arc::new(RenderCaptureService::new(repository, pipeline));
    let pages = Arc::new(PageService::new(
        capture,
        UrlMapper::from_settings(&settings.site),
        settings.templates.clone(),
        PageCache::from_settings(&settings.cache),
    ));
    let graphql = Arc::new(GraphQlService::new(pages.clone()));
    routes::app(pages, graphql)
}

pub fn fixture_repository() -> Arc<dyn ContentRepository> {
    Arc::new(MemoryContentRepository::from_yaml(SITE_FIXTURES).unwrap())
}

pub fn test_server(overrides: &[(&str, &str)]) -> TestServer {
    let settings = settings_with(overrides);
    TestServer::new(build_app(&settings, fixture_repository())).unwrap()
}
