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

use std::sync::Arc;
use std::time::Duration;

use elementor_bridge::application::use_cases::graphql_use_case::GraphQlService;
use elementor_bridge::application::use_cases::page_use_case::PageService;
use elementor_bridge::config::settings::{ContentSource, Settings};
use elementor_bridge::domain::repositories::content_repository::ContentRepository;
use elementor_bridge::domain::services::render_capture::RenderCaptureService;
use elementor_bridge::infrastructure::cache::page_cache::PageCache;
use elementor_bridge::infrastructure::metrics::init_metrics;
use elementor_bridge::infrastructure::rendering::builder_pipeline::BuilderPipeline;
use elementor_bridge::infrastructure::repositories::memory_content_repo::MemoryContentRepository;
use elementor_bridge::infrastructure::repositories::wp_rest_content_repo::WpRestContentRepository;
use elementor_bridge::presentation::routes;
use elementor_bridge::utils::telemetry;
use elementor_bridge::utils::url_utils::UrlMapper;
use tokio::net::TcpListener;
use tracing::info;

/// 根据配置选择内容源
fn content_repository(settings: &Settings) -> anyhow::Result<Arc<dyn ContentRepository>> {
    let repository: Arc<dyn ContentRepository> = match settings.content.source {
        ContentSource::Fixtures => Arc::new(
            MemoryContentRepository::load(&settings.content.fixtures_path)?
                .with_active_kit_id(settings.site.active_kit_id),
        ),
        ContentSource::WpRest => Arc::new(WpRestContentRepository::new(
            &settings.site.home_url,
            Duration::from_secs(settings.content.request_timeout_secs),
            settings.site.active_kit_id,
        )?),
    };
    Ok(repository)
}

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting elementor-bridge...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize Prometheus metrics
    init_metrics(&settings.metrics)?;

    // 4. Content source and rendering pipeline
    let repository = content_repository(&settings)?;
    info!("Content source: {:?}", settings.content.source);
    let pipeline = Arc::new(BuilderPipeline::new(&settings.site, &settings.builder));
    let capture = Arc::new(RenderCaptureService::new(repository, pipeline));

    // 5. Use cases
    let mapper = UrlMapper::from_settings(&settings.site);
    if mapper.domain_replacement_enabled() {
        info!(
            "Rewriting links from {} to {:?}",
            mapper.origin_base(),
            mapper.frontend_base()
        );
    }
    let pages = Arc::new(PageService::new(
        capture,
        mapper,
        settings.templates.clone(),
        PageCache::from_settings(&settings.cache),
    ));
    let graphql = Arc::new(GraphQlService::new(pages.clone()));

    // 6. Serve
    let app = routes::app(pages, graphql);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
