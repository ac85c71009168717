// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 捕获服务测试
///
/// 使用最小化的渲染管线替身，验证资源入队顺序、文档组装与上下文恢复
#[cfg(test)]
mod tests {
    use elementor_bridge::domain::models::content::{ContentId, Post};
    use elementor_bridge::domain::rendering::assets::{Asset, AssetQueue, AssetRegistry};
    use elementor_bridge::domain::rendering::context::{PostScope, RenderContext};
    use elementor_bridge::domain::rendering::pipeline::RenderPipeline;
    use elementor_bridge::domain::services::fragment_extractor::FragmentExtractor;
    use elementor_bridge::domain::services::render_capture::RenderCaptureService;
    use elementor_bridge::infrastructure::repositories::memory_content_repo::MemoryContentRepository;
    use elementor_bridge::utils::errors::NotFoundCode;
    use elementor_bridge::utils::url_utils::UrlMapper;
    use serde_json::{json, Value};
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::sync::Arc;

    struct StubPipeline {
        context: RenderContext,
        assets: AssetRegistry,
        pro: bool,
        panic_in_footer: bool,
    }

    impl StubPipeline {
        fn new(pro: bool) -> Self {
            let mut assets = AssetRegistry::new();
            assets.register(Asset::script("jquery", Some("/jquery.js".into()), &[], false));
            assets.register(Asset::script("frontend", Some("/frontend.js".into()), &["jquery"], true));
            assets.register(Asset::style("frontend", Some("/frontend.css".into()), &[]));
            assets.register(Asset::script("imagesloaded", Some("/imagesloaded.js".into()), &[], true));
            assets.register(Asset::script("swiper", Some("/swiper.js".into()), &[], true));
            assets.register(Asset::script("jquery-waypoints", Some("/waypoints.js".into()), &[], true));
            if pro {
                assets.register(Asset::script(
                    "elementor-pro-frontend",
                    Some("/pro.js".into()),
                    &["frontend"],
                    true,
                ));
            }
            Self {
                context: RenderContext::new(),
                assets,
                pro,
                panic_in_footer: false,
            }
        }
    }

    impl RenderPipeline for StubPipeline {
        fn context(&self) -> &RenderContext {
            &self.context
        }

        fn assets(&self) -> &AssetRegistry {
            &self.assets
        }

        fn builder_available(&self) -> bool {
            true
        }

        fn builder_pro(&self) -> bool {
            self.pro
        }

        fn language_attributes(&self) -> String {
            "lang=\"de-DE\"".to_string()
        }

        fn enqueue_builder_assets(&self, queue: &mut AssetQueue<'_>) {
            queue.enqueue_style("frontend");
            queue.enqueue_script("frontend");
        }

        fn head(&self, scope: &PostScope<'_>, queue: &mut AssetQueue<'_>) -> String {
            format!("<title>{}</title>{}", scope.post().title, queue.print_head())
        }

        fn body_classes(&self, scope: &PostScope<'_>, kit_id: Option<u64>) -> Vec<String> {
            vec![
                format!("page-id-{}", scope.post().id),
                format!("kit-{}", kit_id.unwrap_or_default()),
                "a\"b".to_string(),
            ]
        }

        fn is_built_with_builder(&self, post: &Post) -> bool {
            post.built_with_builder
        }

        fn builder_content(&self, post: &Post) -> String {
            format!("<main>{}</main>", post.builder_data.clone().unwrap_or_default())
        }

        fn filter_content(&self, post: &Post) -> String {
            format!("<p>{}</p>", post.content)
        }

        fn frontend_settings(&self, scope: &PostScope<'_>) -> Option<Value> {
            Some(json!({"post": {"id": scope.post().id}, "urls": {"assets": "/assets/"}}))
        }

        fn footer(&self, _scope: &PostScope<'_>, queue: &mut AssetQueue<'_>) -> String {
            if self.panic_in_footer {
                panic!("footer hook failed");
            }
            queue.print_footer()
        }
    }

    fn repository() -> Arc<MemoryContentRepository> {
        Arc::new(
            MemoryContentRepository::from_yaml(
                r#"
active_kit_id: 5
posts:
  - id: 1
    slug: landing
    status: publish
    title: Landing
    built_with_builder: true
    builder_data: <h1>Hi</h1>
  - id: 2
    slug: news
    post_type: post
    status: publish
    title: News
    content: plain
  - id: 3
    slug: hidden
    status: private
"#,
            )
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_document_assembly_order() {
        let service = RenderCaptureService::new(repository(), Arc::new(StubPipeline::new(false)));
        let document = service.capture_page(&ContentId::Numeric(1)).await.unwrap();
        let html = &document.html;

        assert!(html.starts_with("<!DOCTYPE html><html lang=\"de-DE\"><head><title>Landing</title>"));
        assert!(html.contains("<body class=\"page-id-1 kit-5 a&quot;b\">"));
        assert!(html.ends_with("</body></html>"));

        let content = html.find("<main><h1>Hi</h1></main>").unwrap();
        let config = html
            .find(r#"<script>var elementorFrontendConfig = {"post":{"id":1},"urls":{"assets":"\/assets\/"}};</script>"#)
            .unwrap();
        let imagesloaded = html.find("/imagesloaded.js").unwrap();
        let swiper = html.find("/swiper.js").unwrap();
        let waypoints = html.find("/waypoints.js").unwrap();
        let frontend = html.find("/frontend.js").unwrap();
        assert!(content < config && config < frontend);
        assert!(frontend < imagesloaded && imagesloaded < swiper && swiper < waypoints);
        assert!(html.find("/jquery.js").unwrap() < html.find("</head>").unwrap());
        assert!(!html.contains("/pro.js"));
    }

    #[tokio::test]
    async fn test_pro_assets_follow_builder_assets() {
        let service = RenderCaptureService::new(repository(), Arc::new(StubPipeline::new(true)));
        let html = service.capture_page(&ContentId::Numeric(1)).await.unwrap().html;

        let frontend = html.find("/frontend.js").unwrap();
        let pro = html.find("/pro.js").unwrap();
        let imagesloaded = html.find("/imagesloaded.js").unwrap();
        assert!(frontend < pro && pro < imagesloaded);
    }

    #[tokio::test]
    async fn test_slug_lookup_covers_posts_and_filters_content() {
        let service = RenderCaptureService::new(repository(), Arc::new(StubPipeline::new(false)));
        let document = service
            .capture_page(&ContentId::Slug("news".to_string()))
            .await
            .unwrap();
        assert_eq!(document.post_id, 2);
        assert!(document.html.contains("<p>plain</p>"));
    }

    #[tokio::test]
    async fn test_private_content_is_not_captured() {
        let service = RenderCaptureService::new(repository(), Arc::new(StubPipeline::new(false)));
        let err = service.capture_page(&ContentId::Numeric(3)).await.unwrap_err();
        assert_eq!(err.not_found_code(), Some(NotFoundCode::NoPage));
    }

    #[tokio::test]
    async fn test_context_restored_when_pipeline_panics() {
        let mut pipeline = StubPipeline::new(false);
        pipeline.panic_in_footer = true;
        let pipeline = Arc::new(pipeline);
        let service = RenderCaptureService::new(repository(), pipeline.clone());

        let previous = Arc::new(repository_post("outer"));
        pipeline.context().replace(Some(previous.clone()));

        let post = service
            .resolve_published(&ContentId::Numeric(1))
            .await
            .unwrap();
        let result = catch_unwind(AssertUnwindSafe(|| service.render(post, None)));
        assert!(result.is_err());

        let current = pipeline.context().current().unwrap();
        assert_eq!(current.slug, "outer");
    }

    #[tokio::test]
    async fn test_captured_document_splits_into_fragments() {
        let service = RenderCaptureService::new(repository(), Arc::new(StubPipeline::new(false)));
        let post = service.resolve_published(&ContentId::Numeric(1)).await.unwrap();
        let document = service.render(post.clone(), Some(5));

        let mapper = UrlMapper::new("https://cms.test", None, true);
        let fragments = FragmentExtractor::extract(&document, &post, Some(5), &mapper);
        assert!(fragments.head.starts_with("<title>Landing</title>"));
        assert!(fragments.body.starts_with("<main><h1>Hi</h1></main>"));
        assert_eq!(fragments.footer, "</html>");
        assert_eq!(fragments.body_class, "elementor-kit-5");
    }

    fn repository_post(slug: &str) -> Post {
        Post {
            id: 99,
            slug: slug.to_string(),
            post_type: "page".to_string(),
            status: Default::default(),
            title: String::new(),
            content: String::new(),
            excerpt: String::new(),
            builder_data: None,
            built_with_builder: false,
            meta: Default::default(),
            featured_image_url: None,
            link: String::new(),
            parent_path: None,
        }
    }
}
