// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// SEO 插件存放页面描述的元字段
pub const SEO_DESCRIPTION_META_KEY: &str = "_yoast_wpseo_metadesc";

/// 内容标识符
///
/// 数字 ID 或 slug，由调用方提供，不可变
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentId {
    /// 数据库 ID
    Numeric(u64),
    /// URL slug
    Slug(String),
}

impl ContentId {
    /// 空 ID（零或空 slug）不指向任何内容
    pub fn is_empty(&self) -> bool {
        match self {
            ContentId::Numeric(id) => *id == 0,
            ContentId::Slug(slug) => slug.trim().is_empty(),
        }
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ContentId::Numeric(id) => write!(f, "{}", id),
            ContentId::Slug(slug) => write!(f, "{}", slug),
        }
    }
}

impl FromStr for ContentId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = s.parse::<u64>() {
                return Ok(ContentId::Numeric(id));
            }
        }
        Ok(ContentId::Slug(s.to_string()))
    }
}

impl From<u64> for ContentId {
    fn from(id: u64) -> Self {
        ContentId::Numeric(id)
    }
}

/// 文章发布状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    /// 已发布，公开可见
    Publish,
    /// 草稿
    #[default]
    Draft,
    /// 待审核
    Pending,
    /// 私密
    Private,
    /// 定时发布
    Future,
    /// 回收站
    Trash,
}

impl PostStatus {
    pub fn is_public(&self) -> bool {
        matches!(self, PostStatus::Publish)
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PostStatus::Publish => write!(f, "publish"),
            PostStatus::Draft => write!(f, "draft"),
            PostStatus::Pending => write!(f, "pending"),
            PostStatus::Private => write!(f, "private"),
            PostStatus::Future => write!(f, "future"),
            PostStatus::Trash => write!(f, "trash"),
        }
    }
}

impl FromStr for PostStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(PostStatus::Publish),
            "draft" | "auto-draft" => Ok(PostStatus::Draft),
            "pending" => Ok(PostStatus::Pending),
            "private" => Ok(PostStatus::Private),
            "future" => Ok(PostStatus::Future),
            "trash" => Ok(PostStatus::Trash),
            _ => Err(()),
        }
    }
}

fn default_post_type() -> String {
    "page".to_string()
}

/// 内容实体
///
/// CMS 中一条可发布内容（页面、文章或模板）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// 数据库 ID
    pub id: u64,
    /// URL slug
    pub slug: String,
    /// 文章类型（page、post、hfe_template 等）
    #[serde(default = "default_post_type")]
    pub post_type: String,
    /// 发布状态
    #[serde(default)]
    pub status: PostStatus,
    /// 标题
    #[serde(default)]
    pub title: String,
    /// 原始正文
    #[serde(default)]
    pub content: String,
    /// 纯文本摘要
    #[serde(default)]
    pub excerpt: String,
    /// 构建器编译后的正文
    #[serde(default)]
    pub builder_data: Option<String>,
    /// 是否由构建器创建
    #[serde(default)]
    pub built_with_builder: bool,
    /// 元数据
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
    /// 特色图片的原尺寸 URL
    #[serde(default)]
    pub featured_image_url: Option<String>,
    /// 永久链接
    #[serde(default)]
    pub link: String,
    /// 父级路径，例如 `about` 之于 `about/team`
    #[serde(default)]
    pub parent_path: Option<String>,
}

impl Post {
    /// 读取元字段，未设置或为空时返回 `None`
    pub fn meta_value(&self, key: &str) -> Option<&str> {
        self.meta
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// 完整路径（含父级路径）
    pub fn path(&self) -> String {
        match &self.parent_path {
            Some(parent) if !parent.is_empty() => {
                format!("{}/{}", parent.trim_matches('/'), self.slug)
            }
            _ => self.slug.clone(),
        }
    }

    pub fn is_public(&self) -> bool {
        self.status.is_public()
    }
}
