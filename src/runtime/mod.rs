//! 最小化的组件运行时
//!
//! 只实现演示所需的部分：
//! - 组件实例与宿主（`Plain` / `Memoized`）
//! - 组件私有状态（`State` / `Setter`）与依赖记忆（`Memo`）
//! - 身份稳定的回调（`Callback`）
//! - 渲染标记日志与按需登记的渲染追踪
//!
//! 运行时只在单线程上使用，所有更新都在一次事件分发内同步完成。

pub mod callback;
pub mod component;
pub mod element;
pub mod hooks;
pub mod log;
pub mod root;
pub mod tracker;

use std::cell::Cell;

use self::log::RenderLog;
use self::tracker::RenderTracker;

// Re-export for convenience
pub use callback::Callback;
pub use component::{Component, Memoized, Plain, PropChange, Props};
pub use element::Element;
pub use hooks::{Memo, Setter, State};
pub use root::Root;

/// 一次挂载共享的运行时
#[derive(Debug)]
pub struct Runtime {
    log: RenderLog,
    tracker: RenderTracker,
    pending: Cell<bool>,
}

impl Runtime {
    /// `tracking` 为 false 时，登记过的组件也不会被追踪
    pub fn new(tracking: bool) -> Self {
        Self {
            log: RenderLog::new(),
            tracker: RenderTracker::new(tracking),
            pending: Cell::new(false),
        }
    }

    pub fn log(&self) -> &RenderLog {
        &self.log
    }

    pub fn tracker(&self) -> &RenderTracker {
        &self.tracker
    }

    /// 安排一次重渲染
    pub fn schedule(&self) {
        self.pending.set(true);
    }

    /// 取出并清除待定标志
    pub fn take_pending(&self) -> bool {
        self.pending.replace(false)
    }
}
