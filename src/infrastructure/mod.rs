// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域层抽象的具体实现：
/// - 缓存（cache）：页面片段的进程内 LRU 缓存
/// - 指标（metrics）：Prometheus 导出器与计数器
/// - 渲染（rendering）：进程内渲染管线
/// - 仓库实现（repositories）：YAML 夹具与 WordPress REST 内容源
pub mod cache;
pub mod metrics;
pub mod rendering;
pub mod repositories;
