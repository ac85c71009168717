// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;

use crate::domain::models::content::Post;
use crate::domain::rendering::assets::{AssetQueue, AssetRegistry};
use crate::domain::rendering::context::{PostScope, RenderContext};

/// 渲染管线特质
///
/// CMS 渲染管线对外公开的契约：头部/页脚组装、正文过滤、构建器输出与资源注册。
/// 所有方法都是同步的，捕获过程中不会跨越 `.await`。
pub trait RenderPipeline: Send + Sync {
    /// 管线的"当前文章"上下文
    fn context(&self) -> &RenderContext;

    /// 已注册的静态资源
    fn assets(&self) -> &AssetRegistry;

    /// 页面构建器插件是否可用
    fn builder_available(&self) -> bool;

    /// 是否安装了构建器专业版
    fn builder_pro(&self) -> bool;

    /// `<html>` 标签上的语言属性，例如 `lang="en-US"`
    fn language_attributes(&self) -> String;

    /// 构建器前端的样式与脚本入队
    fn enqueue_builder_assets(&self, queue: &mut AssetQueue<'_>);

    /// 头部组装输出
    fn head(&self, scope: &PostScope<'_>, queue: &mut AssetQueue<'_>) -> String;

    /// `<body>` 的 CSS 类
    fn body_classes(&self, scope: &PostScope<'_>, kit_id: Option<u64>) -> Vec<String>;

    /// 内容是否由构建器创建
    fn is_built_with_builder(&self, post: &Post) -> bool;

    /// 构建器编译后的内容
    fn builder_content(&self, post: &Post) -> String;

    /// 通用正文过滤管线的输出
    fn filter_content(&self, post: &Post) -> String;

    /// 构建器运行时配置，管线不提供时为 `None`
    fn frontend_settings(&self, scope: &PostScope<'_>) -> Option<Value>;

    /// 页脚组装输出
    fn footer(&self, scope: &PostScope<'_>, queue: &mut AssetQueue<'_>) -> String;
}
