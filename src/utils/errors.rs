// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;

use thiserror::Error;

/// 未找到错误的机器码
///
/// 对应 REST 响应体中的 `code` 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundCode {
    /// 页面不存在或未发布
    NoPage,
    /// 页眉模板不存在
    NoHeader,
    /// 页脚模板不存在
    NoFooter,
    /// 模板不是由构建器创建的
    NoElementor,
}

impl NotFoundCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotFoundCode::NoPage => "no_page",
            NotFoundCode::NoHeader => "no_header",
            NotFoundCode::NoFooter => "no_footer",
            NotFoundCode::NoElementor => "no_elementor",
        }
    }

    /// 默认错误消息
    pub fn default_message(&self) -> &'static str {
        match self {
            NotFoundCode::NoPage => "Page not found",
            NotFoundCode::NoHeader => "Header not found",
            NotFoundCode::NoFooter => "Footer not found",
            NotFoundCode::NoElementor => "Template is not built with Elementor",
        }
    }
}

impl fmt::Display for NotFoundCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 桥接层错误类型
///
/// 只有 `NotFound` 会以 404 的形式暴露给调用方
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("{message}")]
    NotFound {
        code: NotFoundCode,
        message: String,
    },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl BridgeError {
    pub fn not_found(code: NotFoundCode) -> Self {
        BridgeError::NotFound {
            code,
            message: code.default_message().to_string(),
        }
    }

    pub fn not_found_with(code: NotFoundCode, message: impl Into<String>) -> Self {
        BridgeError::NotFound {
            code,
            message: message.into(),
        }
    }

    /// 返回未找到错误的机器码，其他错误返回 `None`
    pub fn not_found_code(&self) -> Option<NotFoundCode> {
        match self {
            BridgeError::NotFound { code, .. } => Some(*code),
            BridgeError::Repository(_) => None,
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            BridgeError::NotFound { .. } => 404,
            BridgeError::Repository(_) => 500,
        }
    }
}
