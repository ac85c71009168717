// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 内容（content）：CMS 中的页面、文章与模板及其标识符
/// - 页面（page）：渲染得到的完整文档与切分后的页面片段
pub mod content;
pub mod page;
