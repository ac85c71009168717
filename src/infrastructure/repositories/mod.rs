// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供内容仓库接口的具体实现
pub mod memory_content_repo;
pub mod wp_rest_content_repo;
