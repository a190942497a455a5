//! 渲染追踪
//!
//! 组件需要显式登记才会被追踪。被追踪的组件重渲染时，如果所有 props 都只是身份变化、
//! 值没有变，就记为一次可避免的渲染。

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};

use chrono::{DateTime, Local};

use super::component::{ChangeKind, Component, PropChange, Props};

/// 默认保留的报告条数
pub const REPORT_HISTORY: usize = 512;

/// 一次可避免的重渲染
#[derive(Debug, Clone)]
pub struct AvoidableRender {
    pub component: &'static str,
    /// 组件展示的项目值（props 提供时）
    pub value: Option<i64>,
    pub changes: Vec<PropChange>,
    pub at: DateTime<Local>,
}

impl AvoidableRender {
    /// 人类可读的原因
    pub fn reason(&self) -> String {
        if self.changes.is_empty() {
            return "props 完全相同".to_string();
        }
        let names: Vec<&str> = self.changes.iter().map(|c| c.name).collect();
        format!("props 按值未变，仅身份变化: {}", names.join(", "))
    }
}

#[derive(Debug)]
pub struct RenderTracker {
    enabled: bool,
    history: usize,
    tracked: RefCell<HashSet<&'static str>>,
    reports: RefCell<VecDeque<AvoidableRender>>,
    total: Cell<usize>,
}

impl RenderTracker {
    pub fn new(enabled: bool) -> Self {
        Self::with_history(enabled, REPORT_HISTORY)
    }

    /// 最多保留 history 条报告
    pub fn with_history(enabled: bool, history: usize) -> Self {
        Self {
            enabled,
            history,
            tracked: RefCell::new(HashSet::new()),
            reports: RefCell::new(VecDeque::new()),
            total: Cell::new(0),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 登记一个组件参与追踪
    pub fn track<C: Component>(&self) {
        self.tracked.borrow_mut().insert(C::NAME);
    }

    pub fn is_tracked(&self, component: &str) -> bool {
        self.tracked.borrow().contains(component)
    }

    /// 由宿主在每次渲染前调用；首次挂载（没有上一次 props）不检查
    pub fn observe<P: Props>(&self, component: &'static str, prev: Option<&P>, next: &P) {
        if !self.enabled || !self.is_tracked(component) {
            return;
        }
        let Some(prev) = prev else {
            return;
        };

        let changes = next.changes_from(prev);
        if changes.iter().all(|c| c.kind == ChangeKind::Identity) {
            let report = AvoidableRender {
                component,
                value: next.value(),
                changes,
                at: Local::now(),
            };
            tracing::warn!(
                component,
                value = ?report.value,
                reason = %report.reason(),
                "avoidable re-render"
            );
            self.push(report);
        }
    }

    fn push(&self, report: AvoidableRender) {
        self.total.set(self.total.get() + 1);
        let mut reports = self.reports.borrow_mut();
        if reports.len() == self.history {
            reports.pop_front();
        }
        if self.history > 0 {
            reports.push_back(report);
        }
    }

    /// 报告总数，包括已经被淘汰的报告
    pub fn report_count(&self) -> usize {
        self.total.get()
    }

    /// 最近的 n 条报告
    pub fn recent(&self, n: usize) -> Vec<AvoidableRender> {
        let reports = self.reports.borrow();
        let start = reports.len().saturating_sub(n);
        reports.iter().skip(start).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{Element, Runtime};

    #[derive(Clone, PartialEq)]
    struct Pair {
        value: i64,
        handler: u8,
    }

    // handler 模拟回调：不同即身份变化
    impl Props for Pair {
        fn changes_from(&self, prev: &Self) -> Vec<PropChange> {
            let mut changes = Vec::new();
            if self.value != prev.value {
                changes.push(PropChange::value("value"));
            }
            if self.handler != prev.handler {
                changes.push(PropChange::identity("handler"));
            }
            changes
        }

        fn value(&self) -> Option<i64> {
            Some(self.value)
        }
    }

    struct Button;

    impl Component for Button {
        type Props = Pair;
        const NAME: &'static str = "Button";

        fn render(&mut self, props: &Pair, _rt: &Runtime) -> Element {
            Element::text(props.value.to_string())
        }
    }

    #[test]
    fn test_track_registers_by_name() {
        let tracker = RenderTracker::new(true);
        assert!(!tracker.is_tracked(Button::NAME));

        tracker.track::<Button>();
        assert!(tracker.is_tracked("Button"));
        assert!(!tracker.is_tracked("Other"));
    }

    #[test]
    fn test_untracked_component_ignored() {
        let tracker = RenderTracker::new(true);
        let a = Pair { value: 1, handler: 0 };
        tracker.observe(Button::NAME, Some(&a), &a);
        assert_eq!(tracker.report_count(), 0);
    }

    #[test]
    fn test_identity_only_change_reported() {
        let tracker = RenderTracker::new(true);
        tracker.track::<Button>();

        let prev = Pair { value: 1, handler: 0 };
        let next = Pair { value: 1, handler: 1 };
        tracker.observe(Button::NAME, None, &prev);
        tracker.observe(Button::NAME, Some(&prev), &next);

        assert_eq!(tracker.report_count(), 1);
        let report = &tracker.recent(1)[0];
        assert_eq!(report.component, "Button");
        assert_eq!(report.value, Some(1));
        assert_eq!(report.changes, vec![PropChange::identity("handler")]);
        assert!(report.reason().contains("handler"));
    }

    #[test]
    fn test_value_change_not_reported() {
        let tracker = RenderTracker::new(true);
        tracker.track::<Button>();

        let prev = Pair { value: 1, handler: 0 };
        let next = Pair { value: 2, handler: 1 };
        tracker.observe(Button::NAME, Some(&prev), &next);
        assert_eq!(tracker.report_count(), 0);
    }

    #[test]
    fn test_disabled_tracker_reports_nothing() {
        let tracker = RenderTracker::new(false);
        tracker.track::<Button>();

        let a = Pair { value: 1, handler: 0 };
        tracker.observe(Button::NAME, Some(&a), &a);
        assert_eq!(tracker.report_count(), 0);
    }

    #[test]
    fn test_history_is_bounded_but_count_is_not() {
        let tracker = RenderTracker::with_history(true, 2);
        tracker.track::<Button>();

        for value in 0..5 {
            let a = Pair { value, handler: 0 };
            tracker.observe(Button::NAME, Some(&a), &a);
        }

        assert_eq!(tracker.report_count(), 5);
        let kept: Vec<Option<i64>> = tracker.recent(10).iter().map(|r| r.value).collect();
        assert_eq!(kept, vec![Some(3), Some(4)]);
    }
}
