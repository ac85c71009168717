// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：内容与页面片段
/// - 渲染接缝（rendering）：渲染上下文、资源队列与渲染管线特质
/// - 仓库接口（repositories）：内容访问抽象接口
/// - 服务（services）：页面捕获与片段提取
///
/// 领域层不依赖于任何外部实现，CMS 通过特质接入。
pub mod models;
pub mod rendering;
pub mod repositories;
pub mod services;
