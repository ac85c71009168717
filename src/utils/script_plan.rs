// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

static SCRIPT: Lazy<Selector> = Lazy::new(|| Selector::parse("script").expect("valid script selector"));

/// 脚本标签描述
///
/// 外链脚本只有 `src`，内联脚本只有 `code`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ScriptTag {
    pub fn external(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            code: None,
        }
    }

    pub fn inline(code: impl Into<String>) -> Self {
        Self {
            src: None,
            code: Some(code.into()),
        }
    }

    fn trimmed_code(&self) -> Option<&str> {
        self.code.as_deref().map(str::trim).filter(|code| !code.is_empty())
    }

    fn is_duplicate_of(&self, other: &ScriptTag) -> bool {
        match (&self.src, &other.src) {
            (Some(src), Some(existing)) => src == existing,
            (Some(_), None) => false,
            (None, _) => match (self.trimmed_code(), other.code.as_deref()) {
                (Some(code), Some(existing)) => code == existing.trim(),
                _ => false,
            },
        }
    }
}

/// 从 HTML 片段中收集全部脚本
pub fn collect_scripts(html: &str) -> Vec<ScriptTag> {
    let fragment = Html::parse_fragment(html);
    fragment
        .select(&SCRIPT)
        .filter_map(|element| {
            let src = element
                .value()
                .attr("src")
                .filter(|src| !src.is_empty())
                .map(str::to_string);
            if let Some(src) = src {
                return Some(ScriptTag::external(src));
            }

            let code: String = element.text().collect();
            if code.trim().is_empty() {
                None
            } else {
                Some(ScriptTag::inline(code))
            }
        })
        .collect()
}

/// 计算客户端需要重新执行的脚本
///
/// 已存在于页面中的脚本（`src` 相同或去掉首尾空白后的内联代码相同）被跳过，
/// 本次已接受的脚本也视为已存在。结果保持文档顺序。
pub fn plan_script_injection(html: &str, existing: &[ScriptTag]) -> Vec<ScriptTag> {
    let mut seen: Vec<ScriptTag> = existing.to_vec();
    let mut planned = Vec::new();

    for script in collect_scripts(html) {
        if seen.iter().any(|other| script.is_duplicate_of(other)) {
            continue;
        }
        seen.push(script.clone());
        planned.push(script);
    }

    planned
}
