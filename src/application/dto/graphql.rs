// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::page::PageFragments;

/// 持久化查询的操作名
pub const GET_PAGE_BY_URI: &str = "GetPageByUri";

/// GraphQL 请求变量
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GraphQlVariables {
    #[serde(default)]
    pub uri: Option<String>,
}

/// GraphQL 请求
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest {
    #[serde(default)]
    pub operation_name: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub variables: GraphQlVariables,
}

impl GraphQlRequest {
    /// 请求是否为受支持的持久化查询
    ///
    /// 给出操作名时按操作名判断，否则在查询文本中查找操作名
    pub fn is_get_page_by_uri(&self) -> bool {
        match self.operation_name.as_deref() {
            Some(name) => name == GET_PAGE_BY_URI,
            None => self
                .query
                .as_deref()
                .is_some_and(|query| query.contains(GET_PAGE_BY_URI)),
        }
    }
}

/// GraphQL 中的页面节点
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlPage {
    pub id: String,
    pub database_id: u64,
    pub title: String,
    /// 捕获失败时为 `null`
    pub elementor_content: Option<PageFragments>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphQlData {
    /// 页面不存在时为 `null`
    pub page: Option<GraphQlPage>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphQlError {
    pub message: String,
}

/// GraphQL 响应
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphQlResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<GraphQlData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    pub fn page(page: Option<GraphQlPage>) -> Self {
        Self {
            data: Some(GraphQlData { page }),
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: Some(vec![GraphQlError {
                message: message.into(),
            }]),
        }
    }

    pub fn is_error(&self) -> bool {
        self.errors.is_some()
    }
}
