// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::settings::CacheSettings;
use crate::domain::models::page::RenderedPage;

/// 缓存条目
#[derive(Clone)]
struct CacheEntry {
    data: RenderedPage,
    created_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// 缓存统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
}

/// 页面片段缓存
///
/// 按内容 ID 缓存捕获与提取结果，超过 TTL 的条目在读取时淘汰
pub struct PageCache {
    entries: Mutex<LruCache<u64, CacheEntry>>,
    stats: Mutex<CacheStats>,
    ttl: Duration,
}

impl PageCache {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            stats: Mutex::new(CacheStats::default()),
            ttl,
        }
    }

    /// 根据配置创建缓存，未启用时返回 `None`
    pub fn from_settings(settings: &CacheSettings) -> Option<Self> {
        settings
            .enabled
            .then(|| Self::new(settings.max_entries, Duration::from_secs(settings.ttl_secs)))
    }

    pub fn get(&self, post_id: u64) -> Option<RenderedPage> {
        let mut entries = self.entries.lock();
        let hit = match entries.get(&post_id) {
            Some(entry) if !entry.is_expired(self.ttl) => Some(entry.data.clone()),
            Some(_) => {
                debug!("Evicting expired page cache entry {}", post_id);
                entries.pop(&post_id);
                None
            }
            None => None,
        };
        drop(entries);

        let mut stats = self.stats.lock();
        if hit.is_some() {
            stats.hits += 1;
            metrics::counter!("bridge_cache_hits_total").increment(1);
        } else {
            stats.misses += 1;
            metrics::counter!("bridge_cache_misses_total").increment(1);
        }
        hit
    }

    pub fn insert(&self, post_id: u64, page: RenderedPage) {
        self.entries.lock().put(
            post_id,
            CacheEntry {
                data: page,
                created_at: Instant::now(),
            },
        );
        self.stats.lock().stores += 1;
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        *self.stats.lock()
    }
}
