//! 演示目录
//!
//! 一个分组 "Performance testing/FunctionalButton"，下面两个条目，
//! 分别用同一组项目挂载两种列表组件。

use std::rc::Rc;

use serde::Deserialize;
use uuid::Uuid;

use crate::models::Item;
use crate::runtime::{Component, Element, Root, Runtime};
use crate::widgets::{ListProps, OptimisedButton, OptimisedList, UnoptimisedButton, UnoptimisedList};

pub const STORY_GROUP: &str = "Performance testing/FunctionalButton";

/// 演示条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoryKind {
    #[default]
    Unoptimised,
    Optimised,
}

impl StoryKind {
    pub const ALL: [StoryKind; 2] = [StoryKind::Unoptimised, StoryKind::Optimised];

    pub fn title(&self) -> &'static str {
        match self {
            StoryKind::Unoptimised => "Un-optimised",
            StoryKind::Optimised => "Optimised",
        }
    }

    /// 在 ALL 中的位置
    pub fn index(&self) -> usize {
        match self {
            StoryKind::Unoptimised => 0,
            StoryKind::Optimised => 1,
        }
    }
}

/// 已挂载的根组件，擦除具体类型
pub trait MountedStory {
    fn click(&mut self, index: usize) -> bool;
    fn tree(&self) -> &Element;
    fn runtime(&self) -> &Runtime;
}

impl<C: Component> MountedStory for Root<C> {
    fn click(&mut self, index: usize) -> bool {
        Root::click(self, index)
    }

    fn tree(&self) -> &Element {
        Root::tree(self)
    }

    fn runtime(&self) -> &Runtime {
        Root::runtime(self)
    }
}

/// 一次挂载
pub struct Story {
    pub kind: StoryKind,
    pub session: Uuid,
    root: Box<dyn MountedStory>,
}

impl Story {
    /// 用新的运行时挂载条目，按钮组件登记到渲染追踪
    pub fn mount(kind: StoryKind, items: Rc<[Item]>, tracking: bool) -> Self {
        let session = Uuid::new_v4();
        let span = tracing::info_span!("story", story = kind.title(), %session);
        let _enter = span.enter();

        let rt = Rc::new(Runtime::new(tracking));
        let props = ListProps::new(items);
        let root: Box<dyn MountedStory> = match kind {
            StoryKind::Unoptimised => {
                rt.tracker().track::<UnoptimisedButton>();
                let list = UnoptimisedList::new(&rt);
                Box::new(Root::mount(list, props, rt))
            }
            StoryKind::Optimised => {
                rt.tracker().track::<OptimisedButton>();
                let list = OptimisedList::new(&rt);
                Box::new(Root::mount(list, props, rt))
            }
        };
        tracing::info!(markers = root.runtime().log().count(), "story mounted");

        Self {
            kind,
            session,
            root,
        }
    }

    /// 点击第 index 个按钮，返回本次新增的渲染标记数；越界返回 None
    pub fn click(&mut self, index: usize) -> Option<usize> {
        let span = tracing::info_span!("story", story = self.kind.title(), session = %self.session);
        let _enter = span.enter();

        let before = self.render_count();
        if !self.root.click(index) {
            return None;
        }
        let rendered = self.render_count() - before;
        tracing::info!(index, rendered, "clicked");
        Some(rendered)
    }

    pub fn tree(&self) -> &Element {
        self.root.tree()
    }

    pub fn runtime(&self) -> &Runtime {
        self.root.runtime()
    }

    /// 当前显示的选中值
    pub fn selected_text(&self) -> &str {
        self.tree().texts().first().copied().unwrap_or("")
    }

    pub fn render_count(&self) -> usize {
        self.runtime().log().count()
    }

    pub fn button_count(&self) -> usize {
        self.tree().buttons().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_items;

    #[test]
    fn test_story_titles() {
        let titles: Vec<&str> = StoryKind::ALL.iter().map(|k| k.title()).collect();
        assert_eq!(titles, vec!["Un-optimised", "Optimised"]);
        for (i, kind) in StoryKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_both_stories_select_same_values() {
        for kind in StoryKind::ALL {
            let mut story = Story::mount(kind, default_items(), false);
            assert_eq!(story.selected_text(), "0");
            assert_eq!(story.button_count(), 6);

            for i in 0..6 {
                story.click(i);
                assert_eq!(story.selected_text(), i.to_string());
            }
        }
    }

    #[test]
    fn test_click_reports_new_markers() {
        let mut unoptimised = Story::mount(StoryKind::Unoptimised, default_items(), false);
        let mut optimised = Story::mount(StoryKind::Optimised, default_items(), false);

        assert_eq!(unoptimised.click(3), Some(6));
        assert_eq!(optimised.click(3), Some(0));
        assert_eq!(optimised.click(3), Some(0));
        assert_eq!(optimised.click(9), None);
    }

    #[test]
    fn test_mount_registers_tracking() {
        let story = Story::mount(StoryKind::Optimised, default_items(), true);
        let tracker = story.runtime().tracker();
        assert!(tracker.is_tracked(OptimisedButton::NAME));
        assert!(!tracker.is_tracked(UnoptimisedButton::NAME));
    }

    #[test]
    fn test_remount_gets_new_session() {
        let a = Story::mount(StoryKind::Optimised, default_items(), false);
        let b = Story::mount(StoryKind::Optimised, default_items(), false);
        assert_ne!(a.session, b.session);
    }
}
