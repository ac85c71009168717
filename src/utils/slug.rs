// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9 _\-]").expect("valid slug character class"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("valid dash pattern"));

/// 把任意标题规范化为 URL slug
///
/// 行为与 WordPress 的 `sanitize_title` 一致：去掉重音符号、转小写、
/// 丢弃非法字符并把空白折叠为连字符。
pub fn sanitize_title(title: &str) -> String {
    let ascii = deunicode(title).to_lowercase().replace('.', "-");
    let cleaned = DISALLOWED.replace_all(&ascii, "");
    let dashed = WHITESPACE.replace_all(cleaned.trim(), "-");
    let collapsed = DASHES.replace_all(&dashed, "-");
    collapsed.trim_matches('-').to_string()
}

/// 路由参数中允许出现的 slug 字符
pub fn is_route_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
