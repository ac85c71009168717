// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
/// 包括错误类型、URL 映射、slug 规范化、脚本去重和日志初始化
pub mod errors;
pub mod script_plan;
pub mod slug;
pub mod telemetry;
pub mod url_utils;
