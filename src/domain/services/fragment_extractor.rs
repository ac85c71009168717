// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::trace;

use crate::domain::models::content::{Post, SEO_DESCRIPTION_META_KEY};
use crate::domain::models::page::{CapturedDocument, PageFragments, SeoMetadata};
use crate::utils::url_utils::UrlMapper;

const BODY_CLOSE: &str = "</body>";

static HEAD_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("head").expect("valid head selector"));
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("valid body selector"));

// html5ever synthesizes <head>/<body> when they are missing, so presence is checked on the raw markup.
static HEAD_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<head[\s/>]").expect("valid head pattern"));
static BODY_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<body[\s/>]").expect("valid body pattern"));

/// 片段提取器
///
/// 把捕获的完整文档切分为 head、body、footer 三段，纯函数，从不失败
pub struct FragmentExtractor;

impl FragmentExtractor {
    /// 提取页面片段
    ///
    /// # 参数
    ///
    /// * `document` - 捕获的完整文档
    /// * `post` - 文档对应的内容，用于组装 SEO 元数据
    /// * `kit_id` - 当前启用的设计套件 ID
    /// * `mapper` - 源站/前端 URL 映射器
    pub fn extract(
        document: &CapturedDocument,
        post: &Post,
        kit_id: Option<u64>,
        mapper: &UrlMapper,
    ) -> PageFragments {
        let (head, body) = Self::head_and_body(&document.html);
        PageFragments {
            head,
            body,
            footer: Self::footer(&document.html),
            body_class: Self::body_class(kit_id),
            seo: Self::seo(post, mapper),
        }
    }

    /// 解析文档并序列化 `<head>` 与 `<body>` 的子节点
    ///
    /// 宽松解析，解析错误被忽略
    pub fn head_and_body(html: &str) -> (String, String) {
        let has_head = HEAD_OPEN.is_match(html);
        let has_body = BODY_OPEN.is_match(html);
        if !has_head && !has_body {
            return (String::new(), String::new());
        }

        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            trace!("Ignoring {} HTML parse errors", document.errors.len());
        }

        let inner = |present: bool, selector: &Selector| {
            if !present {
                return String::new();
            }
            document
                .select(selector)
                .next()
                .map(|element| element.inner_html())
                .unwrap_or_default()
        };

        (inner(has_head, &HEAD_SELECTOR), inner(has_body, &BODY_SELECTOR))
    }

    /// 最后一个 `</body>` 之后的原始字符串
    ///
    /// 在原始字符串上计算，保留管线追加在逻辑正文之后的脚本的原样序列化
    pub fn footer(html: &str) -> String {
        html.rfind(BODY_CLOSE)
            .map(|pos| html[pos + BODY_CLOSE.len()..].to_string())
            .unwrap_or_default()
    }

    /// 设计套件对应的 body 类
    pub fn body_class(kit_id: Option<u64>) -> String {
        match kit_id {
            Some(id) if id > 0 => format!("elementor-kit-{}", id),
            _ => String::new(),
        }
    }

    /// 从内容元数据组装 SEO 信息
    pub fn seo(post: &Post, mapper: &UrlMapper) -> SeoMetadata {
        let permalink = if mapper.domain_replacement_enabled() {
            mapper.to_public_url(&post.link)
        } else {
            post.link.clone()
        };

        SeoMetadata {
            title: post.title.clone(),
            description: post
                .meta_value(SEO_DESCRIPTION_META_KEY)
                .unwrap_or_default()
                .to_string(),
            og_image: post.featured_image_url.clone().unwrap_or_default(),
            permalink,
        }
    }
}
