// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::{HashMap, HashSet};

use html_escape::encode_single_quoted_attribute;
use tracing::warn;

/// 静态资源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Script,
    Style,
}

/// 已注册的静态资源
///
/// `src` 为空表示别名句柄，只用于拉起依赖
#[derive(Debug, Clone)]
pub struct Asset {
    pub handle: String,
    pub kind: AssetKind,
    pub src: Option<String>,
    pub deps: Vec<String>,
    pub version: Option<String>,
    /// 脚本是否在页脚输出（样式总在头部）
    pub in_footer: bool,
}

impl Asset {
    pub fn script(handle: &str, src: Option<String>, deps: &[&str], in_footer: bool) -> Self {
        Self {
            handle: handle.to_string(),
            kind: AssetKind::Script,
            src,
            deps: deps.iter().map(|d| d.to_string()).collect(),
            version: None,
            in_footer,
        }
    }

    pub fn style(handle: &str, src: Option<String>, deps: &[&str]) -> Self {
        Self {
            handle: handle.to_string(),
            kind: AssetKind::Style,
            src,
            deps: deps.iter().map(|d| d.to_string()).collect(),
            version: None,
            in_footer: false,
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    fn href(&self) -> Option<String> {
        let src = self.src.as_deref()?;
        Some(match &self.version {
            Some(ver) if src.contains('?') => format!("{src}&ver={ver}"),
            Some(ver) => format!("{src}?ver={ver}"),
            None => src.to_string(),
        })
    }

    fn to_tag(&self) -> Option<String> {
        let href = self.href()?;
        let href = encode_single_quoted_attribute(&href);
        Some(match self.kind {
            AssetKind::Style => format!(
                "<link rel='stylesheet' id='{}-css' href='{}' media='all' />\n",
                self.handle, href
            ),
            AssetKind::Script => {
                format!("<script src='{}' id='{}-js'></script>\n", href, self.handle)
            }
        })
    }
}

/// 静态资源注册表
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    assets: HashMap<(AssetKind, String), Asset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, asset: Asset) {
        self.assets
            .insert((asset.kind, asset.handle.clone()), asset);
    }

    pub fn is_registered(&self, kind: AssetKind, handle: &str) -> bool {
        self.assets.contains_key(&(kind, handle.to_string()))
    }

    pub fn get(&self, kind: AssetKind, handle: &str) -> Option<&Asset> {
        self.assets.get(&(kind, handle.to_string()))
    }
}

/// 单次请求的资源队列
///
/// 按入队顺序解析依赖，每个句柄只输出一次；
/// 头部依赖的脚本即使标记为页脚也会提前到头部输出。
pub struct AssetQueue<'a> {
    registry: &'a AssetRegistry,
    queued: Vec<(AssetKind, String)>,
    printed: HashSet<(AssetKind, String)>,
}

impl<'a> AssetQueue<'a> {
    pub fn new(registry: &'a AssetRegistry) -> Self {
        Self {
            registry,
            queued: Vec::new(),
            printed: HashSet::new(),
        }
    }

    pub fn registry(&self) -> &AssetRegistry {
        self.registry
    }

    /// 将脚本加入队列，未注册的句柄被忽略并返回 `false`
    pub fn enqueue_script(&mut self, handle: &str) -> bool {
        self.enqueue(AssetKind::Script, handle)
    }

    /// 将样式加入队列，未注册的句柄被忽略并返回 `false`
    pub fn enqueue_style(&mut self, handle: &str) -> bool {
        self.enqueue(AssetKind::Style, handle)
    }

    pub fn is_enqueued(&self, kind: AssetKind, handle: &str) -> bool {
        self.queued
            .iter()
            .any(|(k, h)| *k == kind && h == handle)
    }

    fn enqueue(&mut self, kind: AssetKind, handle: &str) -> bool {
        if !self.registry.is_registered(kind, handle) {
            warn!("Ignoring unregistered {:?} handle: {}", kind, handle);
            return false;
        }
        if !self.is_enqueued(kind, handle) {
            self.queued.push((kind, handle.to_string()));
        }
        true
    }

    /// 依赖在前的完整资源列表
    fn resolve(&self, kind: AssetKind) -> Vec<&'a Asset> {
        let mut resolved = Vec::new();
        let mut visiting = HashSet::new();
        let mut done = HashSet::new();

        for (queued_kind, handle) in &self.queued {
            if *queued_kind == kind {
                self.visit(kind, handle, &mut visiting, &mut done, &mut resolved);
            }
        }
        resolved
    }

    fn visit(
        &self,
        kind: AssetKind,
        handle: &str,
        visiting: &mut HashSet<String>,
        done: &mut HashSet<String>,
        resolved: &mut Vec<&'a Asset>,
    ) {
        if done.contains(handle) || !visiting.insert(handle.to_string()) {
            return;
        }
        let registry: &'a AssetRegistry = self.registry;
        match registry.get(kind, handle) {
            Some(asset) => {
                for dep in &asset.deps {
                    self.visit(kind, dep, visiting, done, resolved);
                }
                resolved.push(asset);
            }
            None => warn!("Missing {:?} dependency: {}", kind, handle),
        }
        visiting.remove(handle);
        done.insert(handle.to_string());
    }

    /// 头部要输出的资源：全部样式与非页脚脚本（含其依赖）
    fn head_assets(&self) -> Vec<&'a Asset> {
        let mut assets = self.resolve(AssetKind::Style);

        let scripts = self.resolve(AssetKind::Script);
        let mut in_head: HashSet<&'a str> = HashSet::new();
        for &asset in &scripts {
            if !asset.in_footer {
                in_head.insert(asset.handle.as_str());
            }
        }
        for &asset in scripts.iter().rev() {
            if in_head.contains(asset.handle.as_str()) {
                in_head.extend(asset.deps.iter().map(String::as_str));
            }
        }
        for asset in scripts {
            if in_head.contains(asset.handle.as_str()) {
                assets.push(asset);
            }
        }
        assets
    }

    fn print(&mut self, assets: Vec<&'a Asset>) -> String {
        let mut out = String::new();
        for asset in assets {
            let key = (asset.kind, asset.handle.clone());
            if self.printed.contains(&key) {
                continue;
            }
            if let Some(tag) = asset.to_tag() {
                out.push_str(&tag);
            }
            self.printed.insert(key);
        }
        out
    }

    /// 输出头部的样式与脚本标签
    pub fn print_head(&mut self) -> String {
        let assets = self.head_assets();
        self.print(assets)
    }

    /// 输出尚未输出的脚本标签
    pub fn print_footer(&mut self) -> String {
        let assets = self.resolve(AssetKind::Script);
        self.print(assets)
    }
}
