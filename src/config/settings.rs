// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、站点、内容来源、模板、构建器、缓存和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 站点配置
    pub site: SiteSettings,
    /// 内容来源配置
    pub content: ContentSettings,
    /// 页眉页脚模板配置
    pub templates: TemplateSettings,
    /// 页面构建器配置
    pub builder: BuilderSettings,
    /// 页面缓存配置
    pub cache: CacheSettings,
    /// 指标配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 站点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    /// CMS 主页 URL（源站）
    pub home_url: String,
    /// 前端站点 URL，未设置时不做域名替换
    pub frontend_uri: Option<String>,
    /// 在生成的 URL 中保留 CMS 自身域名
    pub use_wp_domain_for_urls: bool,
    /// `<html lang>` 属性
    pub language: String,
    /// 当前启用的设计套件 ID
    pub active_kit_id: Option<u64>,
}

impl SiteSettings {
    pub fn domain_replacement_enabled(&self) -> bool {
        !self.use_wp_domain_for_urls
    }
}

/// 内容来源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentSource {
    /// 本地 YAML 内容文件
    Fixtures,
    /// WordPress REST API
    WpRest,
}

/// 内容来源配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ContentSettings {
    pub source: ContentSource,
    /// 内容文件路径 (source=fixtures 时使用)
    pub fixtures_path: String,
    /// REST 请求超时时间（秒）
    pub request_timeout_secs: u64,
}

/// 模板配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSettings {
    pub header_slug: String,
    pub footer_slug: String,
    /// 模板所属的文章类型
    pub post_types: Vec<String>,
}

/// 页面构建器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct BuilderSettings {
    /// 构建器插件是否可用
    pub enabled: bool,
    /// 是否安装了专业版
    pub pro: bool,
    /// 构建器静态资源 URL，未设置时根据主页 URL 推导
    pub assets_url: Option<String>,
}

/// 页面缓存配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub enabled: bool,
    /// 缓存过期时间（秒）
    pub ttl_secs: u64,
    pub max_entries: usize,
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    pub enabled: bool,
    /// Prometheus 导出器监听地址
    pub listen: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("BRIDGE").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// 只包含默认值的配置构建器
    ///
    /// 测试中可以在其上叠加覆盖项
    pub fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("site.home_url", "http://localhost:8080")?
            .set_default("site.use_wp_domain_for_urls", false)?
            .set_default("site.language", "en-US")?
            .set_default("content.source", "fixtures")?
            .set_default("content.fixtures_path", "./content/site.yaml")?
            .set_default("content.request_timeout_secs", 10)?
            .set_default("templates.header_slug", "header")?
            .set_default("templates.footer_slug", "footer")?
            .set_default("templates.post_types", vec!["hfe_template", "elementor-hf"])?
            .set_default("builder.enabled", true)?
            .set_default("builder.pro", false)?
            .set_default("cache.enabled", false)?
            .set_default("cache.ttl_secs", 60)?
            .set_default("cache.max_entries", 256)?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen", "0.0.0.0:9000")
    }
}
