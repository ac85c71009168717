// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::domain::models::content::Post;
use crate::domain::repositories::content_repository::ContentRepository;
use crate::utils::errors::RepositoryError;

/// 内容夹具文件
#[derive(Debug, Default, Deserialize)]
pub struct ContentFixtures {
    #[serde(default)]
    pub active_kit_id: Option<u64>,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// 内存内容仓库实现
///
/// 从 YAML 夹具加载，用于本地开发与测试
#[derive(Debug, Clone, Default)]
pub struct MemoryContentRepository {
    posts: Vec<Post>,
    active_kit_id: Option<u64>,
}

impl MemoryContentRepository {
    /// 从内容列表创建仓库
    pub fn from_posts(posts: Vec<Post>, active_kit_id: Option<u64>) -> Self {
        Self {
            posts,
            active_kit_id,
        }
    }

    /// 解析 YAML 夹具
    pub fn from_yaml(source: &str) -> Result<Self, RepositoryError> {
        let fixtures: ContentFixtures =
            serde_yaml::from_str(source).map_err(|e| RepositoryError::Decode(e.to_string()))?;
        Ok(Self::from_posts(fixtures.posts, fixtures.active_kit_id))
    }

    /// 读取并解析 YAML 夹具文件
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let repository = Self::from_yaml(&source)?;
        info!(
            "Loaded {} posts from fixtures {}",
            repository.posts.len(),
            path.display()
        );
        Ok(repository)
    }

    /// 配置中的设计套件 ID 优先于夹具中的值
    pub fn with_active_kit_id(mut self, active_kit_id: Option<u64>) -> Self {
        if active_kit_id.is_some() {
            self.active_kit_id = active_kit_id;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[async_trait]
impl ContentRepository for MemoryContentRepository {
    async fn find_by_id(&self, id: u64) -> Result<Option<Post>, RepositoryError> {
        Ok(self.posts.iter().find(|post| post.id == id).cloned())
    }

    async fn find_by_path(
        &self,
        path: &str,
        post_types: &[String],
    ) -> Result<Option<Post>, RepositoryError> {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return Ok(None);
        }

        Ok(post_types.iter().find_map(|post_type| {
            self.posts
                .iter()
                .find(|post| &post.post_type == post_type && post.path() == path)
                .cloned()
        }))
    }

    async fn active_kit_id(&self) -> Result<Option<u64>, RepositoryError> {
        Ok(self.active_kit_id)
    }
}
