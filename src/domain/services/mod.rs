// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 页面捕获（render_capture）：通过渲染管线把一条内容渲染为完整 HTML 文档
/// - 片段提取（fragment_extractor）：把完整文档切分为 head/body/footer 并组装元数据
pub mod fragment_extractor;
pub mod render_capture;
