// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 渲染管线输出的完整 HTML 文档
///
/// 每次请求创建一次，提取完成后即被丢弃，不缓存也不共享
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedDocument {
    /// 被渲染内容的 ID
    pub post_id: u64,
    /// 完整文档（`<!DOCTYPE html>…</html>`）
    pub html: String,
}

impl CapturedDocument {
    pub fn new(post_id: u64, html: impl Into<String>) -> Self {
        Self {
            post_id,
            html: html.into(),
        }
    }
}

/// SEO 元数据
///
/// 缺失的字段一律为空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub og_image: String,
    pub permalink: String,
}

/// 页面片段
///
/// `head` 与 `body` 为同一文档中互不重叠的部分，缺失时为空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFragments {
    /// `<head>` 内部的标记
    pub head: String,
    /// `<body>` 内部的标记
    pub body: String,
    /// 最后一个 `</body>` 之后的原始标记
    pub footer: String,
    /// 设计套件对应的 CSS 类
    #[serde(rename = "bodyClass")]
    pub body_class: String,
    pub seo: SeoMetadata,
}

/// 一次完整捕获的结果
///
/// `full` 为未经切分的原始文档，只由 REST 页面接口返回
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub post_id: u64,
    pub title: String,
    pub fragments: PageFragments,
    pub full: String,
}
