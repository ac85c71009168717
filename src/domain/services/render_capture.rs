// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::models::content::{ContentId, Post};
use crate::domain::models::page::CapturedDocument;
use crate::domain::rendering::assets::{AssetKind, AssetQueue};
use crate::domain::rendering::pipeline::RenderPipeline;
use crate::domain::repositories::content_repository::ContentRepository;
use crate::utils::errors::{BridgeError, NotFoundCode};

/// 构建器专业版的样式与脚本句柄
pub const PRO_FRONTEND_HANDLE: &str = "elementor-pro-frontend";

/// 在构建器资源之后额外入队的脚本
const EXTRA_SCRIPTS: [&str; 3] = ["imagesloaded", "swiper", "jquery-waypoints"];

/// 按 slug 查找内容时尝试的文章类型
const SLUG_POST_TYPES: [&str; 2] = ["page", "post"];

/// 页面捕获服务
///
/// 通过 CMS 渲染管线渲染一条已发布内容，得到完整 HTML 文档
pub struct RenderCaptureService {
    repository: Arc<dyn ContentRepository>,
    pipeline: Arc<dyn RenderPipeline>,
}

impl RenderCaptureService {
    pub fn new(repository: Arc<dyn ContentRepository>, pipeline: Arc<dyn RenderPipeline>) -> Self {
        Self {
            repository,
            pipeline,
        }
    }

    pub fn repository(&self) -> &Arc<dyn ContentRepository> {
        &self.repository
    }

    pub fn pipeline(&self) -> &Arc<dyn RenderPipeline> {
        &self.pipeline
    }

    /// 捕获页面
    ///
    /// # 参数
    ///
    /// * `id` - 内容标识符
    ///
    /// # 返回值
    ///
    /// * `Ok(CapturedDocument)` - 渲染得到的完整文档
    /// * `Err(BridgeError)` - ID 为空、构建器不可用、内容不存在或未发布时返回 `no_page`
    pub async fn capture_page(&self, id: &ContentId) -> Result<CapturedDocument, BridgeError> {
        let post = self.resolve_published(id).await?;
        let kit_id = self.repository.active_kit_id().await?;
        Ok(self.render(post, kit_id))
    }

    /// 查找可公开渲染的内容
    pub async fn resolve_published(&self, id: &ContentId) -> Result<Arc<Post>, BridgeError> {
        if id.is_empty() {
            return Err(BridgeError::not_found(NotFoundCode::NoPage));
        }

        let post = match id {
            ContentId::Numeric(id) => self.repository.find_by_id(*id).await?,
            ContentId::Slug(slug) => {
                let post_types: Vec<String> =
                    SLUG_POST_TYPES.iter().map(|t| t.to_string()).collect();
                self.repository.find_by_path(slug, &post_types).await?
            }
        };

        self.admit(post)
    }

    /// 检查查找结果能否渲染：构建器可用且内容已发布
    pub fn admit(&self, post: Option<Post>) -> Result<Arc<Post>, BridgeError> {
        if !self.pipeline.builder_available() {
            return Err(BridgeError::not_found(NotFoundCode::NoPage));
        }

        match post {
            Some(post) if post.is_public() => Ok(Arc::new(post)),
            Some(post) => {
                debug!("Content {} has status {}, refusing to render", post.id, post.status);
                Err(BridgeError::not_found_with(
                    NotFoundCode::NoPage,
                    "Page not found or not published",
                ))
            }
            None => Err(BridgeError::not_found(NotFoundCode::NoPage)),
        }
    }

    /// 渲染完整文档
    ///
    /// 渲染期间该文章被设为管线的当前文章，返回前恢复原值
    pub fn render(&self, post: Arc<Post>, kit_id: Option<u64>) -> CapturedDocument {
        let started = Instant::now();
        let post_id = post.id;
        let pipeline = self.pipeline.as_ref();

        let scope = pipeline.context().enter(post);
        let mut queue = AssetQueue::new(pipeline.assets());

        queue.enqueue_script("jquery");
        pipeline.enqueue_builder_assets(&mut queue);
        if pipeline.builder_pro() {
            if queue.registry().is_registered(AssetKind::Style, PRO_FRONTEND_HANDLE) {
                queue.enqueue_style(PRO_FRONTEND_HANDLE);
            }
            if queue.registry().is_registered(AssetKind::Script, PRO_FRONTEND_HANDLE) {
                queue.enqueue_script(PRO_FRONTEND_HANDLE);
            }
        }
        for handle in EXTRA_SCRIPTS {
            queue.enqueue_script(handle);
        }

        let mut html = String::with_capacity(16 * 1024);
        html.push_str("<!DOCTYPE html><html ");
        html.push_str(&pipeline.language_attributes());
        html.push_str("><head>");
        html.push_str(&pipeline.head(&scope, &mut queue));
        html.push_str("</head><body class=\"");
        html.push_str(&html_escape::encode_double_quoted_attribute(
            &pipeline.body_classes(&scope, kit_id).join(" "),
        ));
        html.push_str("\">");

        if pipeline.is_built_with_builder(scope.post()) {
            html.push_str(&pipeline.builder_content(scope.post()));
        } else {
            html.push_str(&pipeline.filter_content(scope.post()));
        }

        if let Some(settings) = pipeline.frontend_settings(&scope) {
            html.push_str("<script>var elementorFrontendConfig = ");
            html.push_str(&encode_script_json(&settings));
            html.push_str(";</script>");
        }

        html.push_str(&pipeline.footer(&scope, &mut queue));
        html.push_str("</body></html>");
        drop(scope);

        let elapsed = started.elapsed();
        metrics::histogram!("bridge_capture_duration_seconds").record(elapsed.as_secs_f64());
        info!(
            "Captured content {} ({} bytes) in {:?}",
            post_id,
            html.len(),
            elapsed
        );

        CapturedDocument::new(post_id, html)
    }

    /// 捕获页眉/页脚模板
    ///
    /// 只返回构建器输出，不做头部与页脚组装
    pub async fn capture_template(
        &self,
        slug: &str,
        post_types: &[String],
        missing: NotFoundCode,
    ) -> Result<String, BridgeError> {
        if slug.trim().is_empty() {
            return Err(BridgeError::not_found(missing));
        }

        let post = self
            .repository
            .find_by_path(slug, post_types)
            .await?
            .ok_or_else(|| BridgeError::not_found(missing))?;

        if !self.pipeline.builder_available() {
            return Err(BridgeError::not_found(NotFoundCode::NoPage));
        }
        if !self.pipeline.is_built_with_builder(&post) {
            return Err(BridgeError::not_found(NotFoundCode::NoElementor));
        }

        Ok(self.pipeline.builder_content(&post))
    }
}

/// 序列化为可以直接嵌入 `<script>` 的 JSON，斜杠转义为 `\/`
fn encode_script_json(value: &serde_json::Value) -> String {
    value.to_string().replace('/', "\\/")
}
