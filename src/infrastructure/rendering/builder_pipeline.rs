// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use html_escape::{encode_double_quoted_attribute, encode_text};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};

use crate::config::settings::{BuilderSettings, SiteSettings};
use crate::domain::models::content::Post;
use crate::domain::rendering::assets::{Asset, AssetQueue, AssetRegistry};
use crate::domain::rendering::context::{PostScope, RenderContext};
use crate::domain::rendering::pipeline::RenderPipeline;
use crate::utils::url_utils::trailingslashit;

/// 构建器版本，写入资源 URL 的 `ver` 参数
pub const BUILDER_VERSION: &str = "3.25.0";

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid paragraph break pattern"));
static BLOCK_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^<(?:div|p|h[1-6]|ul|ol|li|table|thead|tbody|tr|figure|section|article|aside|header|footer|nav|blockquote|pre|form|hr|script|style|!--)\b",
    )
    .expect("valid block tag pattern")
});

/// 进程内渲染管线
///
/// 基于内容仓库中的数据组装页面：头部输出元信息与资源标签，
/// 构建器内容包裹在构建器容器中，普通正文按段落过滤。
pub struct BuilderPipeline {
    context: RenderContext,
    assets: AssetRegistry,
    language: String,
    builder_enabled: bool,
    pro: bool,
    assets_url: String,
}

impl BuilderPipeline {
    pub fn new(site: &SiteSettings, builder: &BuilderSettings) -> Self {
        let home = trailingslashit(&site.home_url);
        let assets_url = builder
            .assets_url
            .as_deref()
            .map(trailingslashit)
            .unwrap_or_else(|| format!("{home}wp-content/plugins/elementor/assets/"));
        let pro_assets_url = format!("{home}wp-content/plugins/elementor-pro/assets/");
        let includes_url = format!("{home}wp-includes/js/");

        Self {
            context: RenderContext::new(),
            assets: default_registry(&assets_url, &pro_assets_url, &includes_url, builder.pro),
            language: site.language.clone(),
            builder_enabled: builder.enabled,
            pro: builder.pro,
            assets_url,
        }
    }

    pub fn assets_url(&self) -> &str {
        &self.assets_url
    }
}

/// 构建器与 CMS 核心脚本的默认注册表
fn default_registry(
    assets_url: &str,
    pro_assets_url: &str,
    includes_url: &str,
    pro: bool,
) -> AssetRegistry {
    let mut registry = AssetRegistry::new();
    let src = |base: &str, path: &str| Some(format!("{base}{path}"));

    registry.register(Asset::script("jquery-core", src(includes_url, "jquery/jquery.min.js"), &[], false));
    registry.register(Asset::script(
        "jquery-migrate",
        src(includes_url, "jquery/jquery-migrate.min.js"),
        &[],
        false,
    ));
    registry.register(Asset::script("jquery", None, &["jquery-core", "jquery-migrate"], false));
    registry.register(Asset::script("imagesloaded", src(includes_url, "imagesloaded.min.js"), &[], true));

    registry.register(
        Asset::script("swiper", src(assets_url, "lib/swiper/v8/swiper.min.js"), &[], true)
            .with_version("8.4.5"),
    );
    registry.register(
        Asset::script(
            "jquery-waypoints",
            src(assets_url, "lib/waypoints/waypoints.min.js"),
            &["jquery"],
            true,
        )
        .with_version("4.0.2"),
    );
    registry.register(
        Asset::script(
            "elementor-webpack-runtime",
            src(assets_url, "js/webpack.runtime.min.js"),
            &[],
            true,
        )
        .with_version(BUILDER_VERSION),
    );
    registry.register(
        Asset::script(
            "elementor-frontend-modules",
            src(assets_url, "js/frontend-modules.min.js"),
            &["elementor-webpack-runtime", "jquery"],
            true,
        )
        .with_version(BUILDER_VERSION),
    );
    registry.register(
        Asset::script(
            "elementor-frontend",
            src(assets_url, "js/frontend.min.js"),
            &["elementor-frontend-modules"],
            true,
        )
        .with_version(BUILDER_VERSION),
    );

    registry.register(
        Asset::style("elementor-icons", src(assets_url, "lib/eicons/css/elementor-icons.min.css"), &[])
            .with_version("5.35.0"),
    );
    registry.register(
        Asset::style(
            "elementor-frontend",
            src(assets_url, "css/frontend.min.css"),
            &["elementor-icons"],
        )
        .with_version(BUILDER_VERSION),
    );

    if pro {
        registry.register(
            Asset::style(
                "elementor-pro-frontend",
                src(pro_assets_url, "css/frontend.min.css"),
                &["elementor-frontend"],
            )
            .with_version(BUILDER_VERSION),
        );
        registry.register(
            Asset::script(
                "elementor-pro-frontend",
                src(pro_assets_url, "js/frontend.min.js"),
                &["elementor-frontend"],
                true,
            )
            .with_version(BUILDER_VERSION),
        );
    }

    registry
}

/// 简化版自动分段：空行分隔段落，段内换行转为 `<br />`
pub fn autop(content: &str) -> String {
    let normalized = content.replace("\r\n", "\n");
    PARAGRAPH_BREAK
        .split(normalized.trim())
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if BLOCK_START.is_match(block) {
                format!("{block}\n")
            } else {
                format!("<p>{}</p>\n", block.replace('\n', "<br />\n"))
            }
        })
        .collect()
}

impl RenderPipeline for BuilderPipeline {
    fn context(&self) -> &RenderContext {
        &self.context
    }

    fn assets(&self) -> &AssetRegistry {
        &self.assets
    }

    fn builder_available(&self) -> bool {
        self.builder_enabled
    }

    fn builder_pro(&self) -> bool {
        self.pro
    }

    fn language_attributes(&self) -> String {
        format!("lang=\"{}\"", encode_double_quoted_attribute(&self.language))
    }

    fn enqueue_builder_assets(&self, queue: &mut AssetQueue<'_>) {
        queue.enqueue_style("elementor-icons");
        queue.enqueue_style("elementor-frontend");
        queue.enqueue_script("elementor-frontend");
    }

    fn head(&self, scope: &PostScope<'_>, queue: &mut AssetQueue<'_>) -> String {
        let post = scope.post();
        let mut head = String::new();
        head.push_str("<meta charset=\"UTF-8\">\n");
        head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        head.push_str(&format!("<title>{}</title>\n", encode_text(&post.title)));
        if !post.link.is_empty() {
            head.push_str(&format!(
                "<link rel=\"canonical\" href=\"{}\">\n",
                encode_double_quoted_attribute(&post.link)
            ));
        }
        head.push_str(&queue.print_head());
        head
    }

    fn body_classes(&self, scope: &PostScope<'_>, kit_id: Option<u64>) -> Vec<String> {
        let post = scope.post();
        let mut classes = Vec::new();
        if post.post_type == "page" {
            classes.push("page-template-default".to_string());
            classes.push("page".to_string());
            classes.push(format!("page-id-{}", post.id));
        } else {
            classes.push(format!("{}-template-default", post.post_type));
            classes.push("single".to_string());
            classes.push(format!("single-{}", post.post_type));
            classes.push(format!("postid-{}", post.id));
        }
        classes.push("elementor-default".to_string());
        if let Some(kit) = kit_id.filter(|id| *id > 0) {
            classes.push(format!("elementor-kit-{}", kit));
        }
        if self.is_built_with_builder(post) {
            classes.push("elementor-page".to_string());
            classes.push(format!("elementor-page-{}", post.id));
        }
        classes
    }

    fn is_built_with_builder(&self, post: &Post) -> bool {
        self.builder_enabled && post.built_with_builder
    }

    fn builder_content(&self, post: &Post) -> String {
        let document_type = if post.post_type == "page" {
            "wp-page"
        } else {
            "wp-post"
        };
        let inner = post.builder_data.as_deref().unwrap_or(&post.content);
        // Content fetched over REST is already rendered inside the builder container
        if inner.trim_start().starts_with("<div data-elementor-type=") {
            return inner.to_string();
        }
        format!(
            "<div data-elementor-type=\"{}\" data-elementor-id=\"{}\" class=\"elementor elementor-{}\">{}</div>",
            document_type, post.id, post.id, inner
        )
    }

    fn filter_content(&self, post: &Post) -> String {
        autop(&post.content)
    }

    fn frontend_settings(&self, scope: &PostScope<'_>) -> Option<Value> {
        if !self.builder_enabled {
            return None;
        }
        let post = scope.post();
        Some(json!({
            "environmentMode": {
                "edit": false,
                "wpPreview": false,
                "isScriptDebug": false,
            },
            "version": BUILDER_VERSION,
            "is_static": false,
            "urls": {
                "assets": self.assets_url,
            },
            "post": {
                "id": post.id,
                "title": post.title,
                "excerpt": post.excerpt,
                "featuredImage": post.featured_image_url,
            },
        }))
    }

    fn footer(&self, _scope: &PostScope<'_>, queue: &mut AssetQueue<'_>) -> String {
        queue.print_footer()
    }
}
