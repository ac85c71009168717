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

use tracing::{debug, warn};

use crate::{
    config::settings::TemplateSettings,
    domain::{
        models::{
            content::{ContentId, Post},
            page::RenderedPage,
        },
        services::{fragment_extractor::FragmentExtractor, render_capture::RenderCaptureService},
    },
    infrastructure::{cache::page_cache::PageCache, metrics::record_capture},
    utils::{
        errors::{BridgeError, NotFoundCode},
        slug::{is_route_slug, sanitize_title},
        url_utils::UrlMapper,
    },
};

/// 页面路由查找的文章类型
const PAGE_POST_TYPE: &str = "page";

/// 站点模板类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Header,
    Footer,
}

impl TemplateKind {
    fn missing_code(self) -> NotFoundCode {
        match self {
            TemplateKind::Header => NotFoundCode::NoHeader,
            TemplateKind::Footer => NotFoundCode::NoFooter,
        }
    }
}

/// 页面用例
///
/// 串联查找、捕获、提取与链接改写，可选地缓存结果
pub struct PageService {
    capture: Arc<RenderCaptureService>,
    mapper: UrlMapper,
    templates: TemplateSettings,
    cache: Option<PageCache>,
}

impl PageService {
    pub fn new(
        capture: Arc<RenderCaptureService>,
        mapper: UrlMapper,
        templates: TemplateSettings,
        cache: Option<PageCache>,
    ) -> Self {
        Self {
            capture,
            mapper,
            templates,
            cache,
        }
    }

    pub fn mapper(&self) -> &UrlMapper {
        &self.mapper
    }

    pub fn cache(&self) -> Option<&PageCache> {
        self.cache.as_ref()
    }

    /// 按路由 slug 获取页面
    ///
    /// slug 必须匹配 `[a-zA-Z0-9-]+`，清洗后只在 `page` 类型中查找
    pub async fn page_by_slug(&self, slug: &str) -> Result<RenderedPage, BridgeError> {
        let post = self.find_page(slug).await?;
        let post = self.capture.admit(post)?;
        self.render_post(post).await
    }

    /// 按内容标识符获取页面
    pub async fn page_by_id(&self, id: &ContentId) -> Result<RenderedPage, BridgeError> {
        let post = self.capture.resolve_published(id).await?;
        self.render_post(post).await
    }

    /// 渲染已查找到的内容，先做发布状态与构建器可用性检查
    pub async fn render_found(&self, post: Post) -> Result<RenderedPage, BridgeError> {
        let post = self.capture.admit(Some(post))?;
        self.render_post(post).await
    }

    /// 按路由 slug 查找页面但不渲染
    pub async fn find_page(&self, slug: &str) -> Result<Option<Post>, BridgeError> {
        if !is_route_slug(slug) {
            debug!("Rejecting malformed page slug {:?}", slug);
            return Ok(None);
        }
        let sanitized = sanitize_title(slug);
        if sanitized.is_empty() {
            return Ok(None);
        }
        self.find_page_by_path(&sanitized).await
    }

    /// 按完整路径（如 `about/team`）查找页面但不渲染
    pub async fn find_page_by_path(&self, path: &str) -> Result<Option<Post>, BridgeError> {
        let post_types = [PAGE_POST_TYPE.to_string()];
        Ok(self
            .capture
            .repository()
            .find_by_path(path, &post_types)
            .await?)
    }

    /// 捕获并提取一条已通过检查的内容
    pub async fn render_post(&self, post: Arc<Post>) -> Result<RenderedPage, BridgeError> {
        if let Some(page) = self.cache.as_ref().and_then(|cache| cache.get(post.id)) {
            debug!("Serving content {} from page cache", post.id);
            record_capture("cached");
            return Ok(page);
        }

        let kit_id = match self.capture.repository().active_kit_id().await {
            Ok(kit_id) => kit_id,
            Err(e) => {
                record_capture("error");
                return Err(e.into());
            }
        };

        let document = self.capture.render(Arc::clone(&post), kit_id);
        let mut fragments = FragmentExtractor::extract(&document, &post, kit_id, &self.mapper);
        if self.mapper.domain_replacement_enabled() {
            fragments.body = self.mapper.rewrite_content_links(&fragments.body).into_owned();
        }

        let page = RenderedPage {
            post_id: post.id,
            title: post.title.clone(),
            fragments,
            full: document.html,
        };
        record_capture("rendered");

        if let Some(cache) = &self.cache {
            cache.insert(post.id, page.clone());
        }
        Ok(page)
    }

    /// 获取页眉或页脚模板的构建器输出
    pub async fn template(&self, kind: TemplateKind) -> Result<String, BridgeError> {
        let slug = match kind {
            TemplateKind::Header => &self.templates.header_slug,
            TemplateKind::Footer => &self.templates.footer_slug,
        };
        let result = self
            .capture
            .capture_template(slug, &self.templates.post_types, kind.missing_code())
            .await;
        if let Err(e) = &result {
            warn!("Template {:?} ({}) unavailable: {}", kind, slug, e);
        }
        result
    }
}
