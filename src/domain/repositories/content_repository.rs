// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::content::Post;
use crate::utils::errors::RepositoryError;

/// 内容仓库特质
///
/// 定义对 CMS 内容的只读访问接口
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// 根据数据库 ID 查找内容
    async fn find_by_id(&self, id: u64) -> Result<Option<Post>, RepositoryError>;

    /// 根据路径（slug 或 `parent/slug`）在指定文章类型中查找内容
    ///
    /// 按 `post_types` 的顺序查找，返回第一个匹配项
    async fn find_by_path(
        &self,
        path: &str,
        post_types: &[String],
    ) -> Result<Option<Post>, RepositoryError>;

    /// 当前启用的设计套件 ID
    async fn active_kit_id(&self) -> Result<Option<u64>, RepositoryError>;
}
