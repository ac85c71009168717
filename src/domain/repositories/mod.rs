// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了内容访问的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 内容仓库（content_repository）：按 ID 或路径读取页面、文章和模板
pub mod content_repository;
