// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::page::{PageFragments, RenderedPage};

/// 页面接口响应数据传输对象
///
/// 片段字段平铺在顶层，另附未切分的完整文档
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageResponseDto {
    #[serde(flatten)]
    pub fragments: PageFragments,
    /// 捕获得到的完整文档
    pub full: String,
}

impl From<RenderedPage> for PageResponseDto {
    fn from(page: RenderedPage) -> Self {
        Self {
            fragments: page.fragments,
            full: page.full,
        }
    }
}
