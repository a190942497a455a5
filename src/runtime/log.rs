//! 渲染标记日志
//!
//! 每次子组件渲染都会留下一条标记，这是统计重渲染次数的唯一依据。
//! 只保留最近的一部分标记，计数则覆盖整个挂载周期。

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// 默认保留的标记条数
pub const MARKER_HISTORY: usize = 1024;

/// 一次子组件渲染
#[derive(Debug, Clone)]
pub struct RenderMarker {
    pub component: &'static str,
    pub value: i64,
    pub at: DateTime<Local>,
}

#[derive(Debug)]
pub struct RenderLog {
    history: usize,
    markers: RefCell<VecDeque<RenderMarker>>,
    total: Cell<usize>,
    per_component: RefCell<Vec<(&'static str, usize)>>,
}

impl RenderLog {
    pub fn new() -> Self {
        Self::with_history(MARKER_HISTORY)
    }

    /// 最多保留 history 条标记
    pub fn with_history(history: usize) -> Self {
        Self {
            history,
            markers: RefCell::new(VecDeque::new()),
            total: Cell::new(0),
            per_component: RefCell::new(Vec::new()),
        }
    }

    /// 记录一次渲染
    pub fn emit(&self, component: &'static str, value: i64) {
        tracing::info!(component, value, "rendered");
        self.total.set(self.total.get() + 1);

        let mut per_component = self.per_component.borrow_mut();
        match per_component.iter_mut().find(|(name, _)| *name == component) {
            Some((_, count)) => *count += 1,
            None => per_component.push((component, 1)),
        }

        let mut markers = self.markers.borrow_mut();
        if markers.len() == self.history {
            markers.pop_front();
        }
        if self.history > 0 {
            markers.push_back(RenderMarker {
                component,
                value,
                at: Local::now(),
            });
        }
    }

    /// 标记总数，包括已经被淘汰的标记
    pub fn count(&self) -> usize {
        self.total.get()
    }

    pub fn count_for(&self, component: &str) -> usize {
        self.per_component
            .borrow()
            .iter()
            .find(|(name, _)| *name == component)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// 最近的 n 条标记，按时间先后排列
    pub fn recent(&self, n: usize) -> Vec<RenderMarker> {
        let markers = self.markers.borrow();
        let start = markers.len().saturating_sub(n);
        markers.iter().skip(start).cloned().collect()
    }
}

impl Default for RenderLog {
    fn default() -> Self {
        Self::new()
    }
}
