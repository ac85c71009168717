// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含页面与模板的用例实现，以及对外接口使用的数据传输对象
pub mod dto;
pub mod use_cases;
