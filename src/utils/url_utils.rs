// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::borrow::Cow;
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::settings::SiteSettings;

static FILE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.[a-zA-Z0-9]+$").expect("valid file extension pattern"));

static HREF_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(\bhref\s*=\s*)(["'])([^"']*)(["'])"#).expect("valid href pattern")
});

/// 为 URL 补全结尾斜杠
pub fn trailingslashit(url: &str) -> String {
    format!("{}/", url.trim_end_matches(['/', '\\']))
}

/// 源站与前端站点之间的 URL 映射器
///
/// 在 CMS 自身域名 (`origin_base`) 与独立前端域名 (`frontend_base`) 之间做前缀替换。
/// 未配置前端域名时所有映射均为恒等映射。
#[derive(Debug, Clone)]
pub struct UrlMapper {
    origin_base: String,
    frontend_base: Option<String>,
    replacement_enabled: bool,
}

impl UrlMapper {
    /// 创建新的映射器
    ///
    /// # 参数
    ///
    /// * `origin_base` - CMS 的主页 URL
    /// * `frontend_base` - 前端 URL，空字符串视为未配置
    /// * `replacement_enabled` - 是否允许在输出内容中替换域名
    pub fn new(origin_base: &str, frontend_base: Option<&str>, replacement_enabled: bool) -> Self {
        let frontend_base = frontend_base
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
            .map(trailingslashit);

        Self {
            origin_base: trailingslashit(origin_base),
            frontend_base,
            replacement_enabled,
        }
    }

    pub fn from_settings(site: &SiteSettings) -> Self {
        Self::new(
            &site.home_url,
            site.frontend_uri.as_deref(),
            site.domain_replacement_enabled(),
        )
    }

    pub fn origin_base(&self) -> &str {
        &self.origin_base
    }

    pub fn frontend_base(&self) -> Option<&str> {
        self.frontend_base.as_deref()
    }

    /// 是否允许域名替换
    ///
    /// 未配置前端域名时无论策略如何都不会替换
    pub fn domain_replacement_enabled(&self) -> bool {
        self.replacement_enabled && self.frontend_base.is_some()
    }

    /// 将源站 URL 转换为等价的前端 URL
    pub fn to_public_url(&self, url: &str) -> String {
        match &self.frontend_base {
            Some(frontend) => url.replacen(&self.origin_base, frontend, 1),
            None => url.to_string(),
        }
    }

    /// 将前端 URL 转换为等价的源站 URL
    pub fn to_origin_url(&self, url: &str) -> String {
        match &self.frontend_base {
            Some(frontend) => url.replacen(frontend.as_str(), &self.origin_base, 1),
            None => url.to_string(),
        }
    }

    /// 将站点地图条目的 `loc` 还原为源站 URL
    pub fn normalize_sitemap_entry(&self, mut entry: SitemapEntry) -> SitemapEntry {
        if let Some(loc) = entry.loc.take() {
            entry.loc = Some(self.to_origin_url(&loc));
        }
        entry
    }

    /// 改写 HTML 片段中指向源站页面的链接
    ///
    /// 只改写 `href` 属性；带文件扩展名的目标（媒体、附件）保持指向源站。
    pub fn rewrite_content_links<'a>(&self, html: &'a str) -> Cow<'a, str> {
        if !self.domain_replacement_enabled() {
            return Cow::Borrowed(html);
        }

        HREF_ATTRIBUTE.replace_all(html, |caps: &Captures| {
            let target = &caps[3];
            let rewritten = if target.starts_with(&self.origin_base) && !links_to_file(target) {
                self.to_public_url(target)
            } else {
                target.to_string()
            };
            format!("{}{}{}{}", &caps[1], &caps[2], rewritten, &caps[4])
        })
    }
}

/// 站点地图条目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// 检查字符串是否以文件扩展名结尾
pub fn has_file_extension(file: &str) -> bool {
    FILE_EXTENSION.is_match(file)
}

fn links_to_file(target: &str) -> bool {
    match Url::parse(target) {
        Ok(url) => has_file_extension(url.path()),
        Err(_) => has_file_extension(target),
    }
}

/// 计算站点在各协议下的候选源站 URL
///
/// 输入可以是完整站点 URL 或裸主机名。与输入协议一致的变体排在第一位，
/// 另一协议排第二，协议相对形式排第三；裸主机名按 `https` 优先。
pub fn compute_origin_candidates(site_url: &str) -> [String; 3] {
    let site_url = site_url.trim();
    let host = Url::parse(site_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| bare_host(site_url).to_string());

    let (first, second) = if site_url.starts_with("http://") {
        ("http", "https")
    } else {
        ("https", "http")
    };

    [
        format!("{first}://{host}"),
        format!("{second}://{host}"),
        format!("//{host}"),
    ]
}

/// 无法按 URL 解析时，取协议相对前缀之后、第一个 `/` 之前的部分
fn bare_host(input: &str) -> &str {
    let input = input.trim_start_matches("//");
    input.split('/').next().unwrap_or_default()
}

/// 基于候选源站 URL 生成所有可能的媒体 URL 前缀
pub fn media_urls(candidates: &[String], relative_upload_url: &str) -> Vec<String> {
    candidates
        .iter()
        .map(|site_url| format!("{site_url}{relative_upload_url}"))
        .collect()
}

/// 去掉第一个匹配的源站前缀
///
/// 按候选顺序只做真正的前缀匹配，都不匹配时返回空字符串
pub fn strip_known_origin(candidates: &[String], url: &str) -> String {
    candidates
        .iter()
        .find_map(|candidate| url.strip_prefix(candidate.as_str()))
        .map(str::to_string)
        .unwrap_or_default()
}
