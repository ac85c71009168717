// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::models::content::{Post, PostStatus, SEO_DESCRIPTION_META_KEY};
use crate::domain::repositories::content_repository::ContentRepository;
use crate::utils::errors::RepositoryError;
use crate::utils::url_utils::trailingslashit;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// 构建器标记编辑模式的元字段
const EDIT_MODE_META_KEY: &str = "_elementor_edit_mode";

/// 按 ID 查找时依次尝试的 REST 资源
const ID_LOOKUP_BASES: [&str; 2] = ["pages", "posts"];

/// 列表查询中视为"不存在"的状态码
const MISSING_STATUSES: [StatusCode; 1] = [StatusCode::NOT_FOUND];

/// 按 ID 查询时视为"不存在"的状态码
///
/// 未认证访问草稿、私密或定时内容时 WordPress 返回 401/403 `rest_forbidden`
const HIDDEN_STATUSES: [StatusCode; 3] = [
    StatusCode::NOT_FOUND,
    StatusCode::UNAUTHORIZED,
    StatusCode::FORBIDDEN,
];

#[derive(Debug, Default, Deserialize)]
struct Rendered {
    #[serde(default)]
    rendered: String,
}

#[derive(Debug, Default, Deserialize)]
struct YoastHead {
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FeaturedMedia {
    #[serde(default)]
    source_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Embedded {
    #[serde(rename = "wp:featuredmedia", default)]
    featured_media: Vec<FeaturedMedia>,
}

/// WordPress REST API 返回的文章
#[derive(Debug, Deserialize)]
struct WpPost {
    id: u64,
    #[serde(default)]
    slug: String,
    #[serde(rename = "type", default)]
    post_type: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    title: Rendered,
    #[serde(default)]
    content: Rendered,
    #[serde(default)]
    excerpt: Rendered,
    #[serde(default)]
    link: String,
    /// 父级 ID，非层级类型没有该字段
    #[serde(default)]
    parent: u64,
    #[serde(default)]
    meta: Value,
    #[serde(default)]
    yoast_head_json: Option<YoastHead>,
    #[serde(rename = "_embedded", default)]
    embedded: Option<Embedded>,
}

impl From<WpPost> for Post {
    fn from(wp: WpPost) -> Self {
        let mut meta = BTreeMap::new();
        if let Value::Object(fields) = wp.meta {
            for (key, value) in fields {
                match value {
                    Value::Null => {}
                    Value::String(s) => {
                        meta.insert(key, s);
                    }
                    other => {
                        meta.insert(key, other.to_string());
                    }
                }
            }
        }
        if let Some(description) = wp.yoast_head_json.and_then(|y| y.description) {
            meta.entry(SEO_DESCRIPTION_META_KEY.to_string())
                .or_insert(description);
        }

        let built_with_builder = meta.get(EDIT_MODE_META_KEY).map(String::as_str) == Some("builder");
        let featured_image_url = wp
            .embedded
            .and_then(|e| e.featured_media.into_iter().next())
            .and_then(|m| m.source_url);

        Post {
            id: wp.id,
            slug: wp.slug,
            post_type: if wp.post_type.is_empty() {
                "page".to_string()
            } else {
                wp.post_type
            },
            status: wp.status.parse().unwrap_or(PostStatus::Draft),
            title: wp.title.rendered,
            content: wp.content.rendered,
            excerpt: plain_text(&wp.excerpt.rendered),
            builder_data: None,
            built_with_builder,
            meta,
            featured_image_url,
            link: wp.link,
            parent_path: None,
        }
    }
}

/// 去掉标签并解码实体，得到纯文本
fn plain_text(html: &str) -> String {
    let stripped = TAG.replace_all(html, "");
    html_escape::decode_html_entities(stripped.trim()).into_owned()
}

/// 文章类型对应的 REST 资源名
pub fn rest_base(post_type: &str) -> &str {
    match post_type {
        "page" => "pages",
        "post" => "posts",
        other => other,
    }
}

/// WordPress REST 内容仓库实现
#[derive(Clone)]
pub struct WpRestContentRepository {
    client: reqwest::Client,
    api_base: String,
    active_kit_id: Option<u64>,
}

impl WpRestContentRepository {
    /// 创建新的 REST 仓库
    ///
    /// # 参数
    ///
    /// * `home_url` - 源站首页 URL
    /// * `timeout` - 单次请求超时
    /// * `active_kit_id` - 设计套件 ID，REST 接口不暴露该选项，只能来自配置
    pub fn new(
        home_url: &str,
        timeout: Duration,
        active_kit_id: Option<u64>,
    ) -> Result<Self, RepositoryError> {
        if home_url.trim().is_empty() {
            return Err(RepositoryError::InvalidParameter(
                "home_url must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("elementor-bridge/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_base: format!("{}wp-json/wp/v2/", trailingslashit(home_url.trim())),
            active_kit_id,
        })
    }

    /// 发送 GET 请求，`missing` 中的状态码视为不存在
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        missing: &[StatusCode],
    ) -> Result<Option<T>, RepositoryError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();

        if missing.contains(&status) {
            debug!("Content source returned {} for {}", status.as_u16(), url);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(RepositoryError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| RepositoryError::Decode(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl ContentRepository for WpRestContentRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<Post>, RepositoryError> {
        for base in ID_LOOKUP_BASES {
            let url = format!("{}{}/{}", self.api_base, base, id);
            if let Some(post) = self
                .get_json::<WpPost>(&url, &[("_embed", "1")], &HIDDEN_STATUSES)
                .await? {
                return Ok(Some(post.into()));
            }
        }
        Ok(None)
    }

    async fn find_by_path(
        &self,
        path: &str,
        post_types: &[String],
    ) -> Result<Option<Post>, RepositoryError> {
        let path = path.trim_matches('/');
        let Some(slug) = path.rsplit('/').next().filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        let nested = path.contains('/');

        for post_type in post_types {
            let url = format!("{}{}", self.api_base, rest_base(post_type));
            let posts = self
                .get_json::<Vec<WpPost>>(&url, &[("slug", slug), ("_embed", "1")], &MISSING_STATUSES)
                .await?
                .unwrap_or_default();

            // 顶层路径只接受没有父级的内容，嵌套路径按永久链接后缀匹配
            let matched = posts.into_iter().find(|post| {
                if nested {
                    trailingslashit(&post.link).ends_with(&format!("/{}/", path))
                } else {
                    post.parent == 0
                }
            });
            if let Some(post) = matched {
                return Ok(Some(post.into()));
            }
        }

        if nested {
            warn!("No content matched nested path {}", path);
        }
        Ok(None)
    }

    async fn active_kit_id(&self) -> Result<Option<u64>, RepositoryError> {
        Ok(self.active_kit_id)
    }
}
