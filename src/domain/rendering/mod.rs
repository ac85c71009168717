// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 渲染模块
///
/// 定义与 CMS 渲染管线之间的接缝：
/// - 上下文（context）：捕获期间独占并恢复的"当前文章"槽位
/// - 资源（assets）：脚本与样式的注册表和单次请求队列
/// - 管线（pipeline）：头部、正文、页脚组装的特质
pub mod assets;
pub mod context;
pub mod pipeline;
