// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

use crate::domain::models::content::Post;

/// 渲染上下文
///
/// 保存渲染管线的"当前文章"槽位。同一管线实例上的所有捕获共享这一个槽位，
/// 因此捕获期间必须独占它，并在结束后恢复原值。
#[derive(Debug, Default)]
pub struct RenderContext {
    slot: Mutex<Option<Arc<Post>>>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取当前文章
    ///
    /// 不能在同一线程持有 [`PostScope`] 时调用，否则会死锁
    pub fn current(&self) -> Option<Arc<Post>> {
        self.slot.lock().clone()
    }

    /// 设置当前文章并返回旧值
    pub fn replace(&self, post: Option<Arc<Post>>) -> Option<Arc<Post>> {
        std::mem::replace(&mut *self.slot.lock(), post)
    }

    /// 进入文章作用域
    ///
    /// 返回的守卫在存活期间独占槽位；无论正常返回、提前返回还是 panic，
    /// 守卫释放时都会恢复进入前的值。
    pub fn enter(&self, post: Arc<Post>) -> PostScope<'_> {
        let mut slot = self.slot.lock();
        let previous = slot.replace(Arc::clone(&post));
        PostScope {
            slot,
            post,
            previous,
        }
    }
}

/// 文章作用域守卫
pub struct PostScope<'a> {
    slot: MutexGuard<'a, Option<Arc<Post>>>,
    post: Arc<Post>,
    previous: Option<Arc<Post>>,
}

impl PostScope<'_> {
    pub fn post(&self) -> &Post {
        &self.post
    }
}

impl Drop for PostScope<'_> {
    fn drop(&mut self) {
        *self.slot = self.previous.take();
    }
}
