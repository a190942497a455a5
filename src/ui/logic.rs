//! 业务逻辑处理 (Update/Dispatch)

use std::rc::Rc;

use super::actions::Action;
use super::state::App;
use crate::stories::{Story, StoryKind};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::PrevStory => {
                let index = self.current_kind().index();
                if index > 0 {
                    self.mount(StoryKind::ALL[index - 1]);
                }
            }
            Action::NextStory => {
                let index = self.current_kind().index();
                if index + 1 < StoryKind::ALL.len() {
                    self.mount(StoryKind::ALL[index + 1]);
                }
            }
            Action::Remount => {
                self.mount(self.current_kind());
                self.message = Some("已重新挂载".to_string());
            }

            Action::FocusLeft => self.focus_left(),
            Action::FocusRight => self.focus_right(),
            Action::ClickFocused => self.click(self.focused),
            Action::Click(index) => self.click(index),

            Action::ToggleRenderLog => self.show_render_log = !self.show_render_log,
        }
        false
    }

    // ============ 条目相关 ============

    /// 用新的运行时挂载条目，渲染计数从零开始
    pub fn mount(&mut self, kind: StoryKind) {
        self.story = Story::mount(kind, Rc::clone(&self.items), self.track_renders);
        self.focused = 0;
        self.last_click = None;
        self.button_areas.clear();
        self.message = None;
    }

    // ============ 按钮相关 ============

    pub fn focus_left(&mut self) {
        if self.focused > 0 {
            self.focused -= 1;
        }
    }

    pub fn focus_right(&mut self) {
        if self.focused + 1 < self.story.button_count() {
            self.focused += 1;
        }
    }

    /// 点击按钮并记录新增的渲染标记
    pub fn click(&mut self, index: usize) {
        match self.story.click(index) {
            Some(rendered) => {
                self.focused = index;
                self.last_click = Some((index, rendered));
                self.message = Some(format!(
                    "点击 #{}：选中值 {}，新增渲染标记 {} 个",
                    index,
                    self.story.selected_text(),
                    rendered
                ));
            }
            None => {
                self.message = Some(format!("没有第 {} 个按钮", index));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HarnessConfig;

    fn app(kind: StoryKind) -> App {
        let config = HarnessConfig {
            initial_story: kind,
            ..HarnessConfig::default()
        };
        App::new(&config)
    }

    #[test]
    fn test_quit() {
        let mut app = app(StoryKind::Unoptimised);
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::ToggleRenderLog));
    }

    #[test]
    fn test_story_navigation_clamps() {
        let mut app = app(StoryKind::Unoptimised);
        app.dispatch(Action::PrevStory);
        assert_eq!(app.current_kind(), StoryKind::Unoptimised);

        app.dispatch(Action::NextStory);
        assert_eq!(app.current_kind(), StoryKind::Optimised);

        app.dispatch(Action::NextStory);
        assert_eq!(app.current_kind(), StoryKind::Optimised);
    }

    #[test]
    fn test_focus_and_click() {
        let mut app = app(StoryKind::Optimised);
        for _ in 0..10 {
            app.dispatch(Action::FocusRight);
        }
        assert_eq!(app.focused, 5);

        app.dispatch(Action::FocusLeft);
        app.dispatch(Action::ClickFocused);
        assert_eq!(app.story.selected_text(), "4");
        assert_eq!(app.last_click, Some((4, 0)));
    }

    #[test]
    fn test_click_counts_unoptimised_renders() {
        let mut app = app(StoryKind::Unoptimised);
        app.dispatch(Action::Click(3));
        assert_eq!(app.story.selected_text(), "3");
        assert_eq!(app.last_click, Some((3, 6)));
        assert_eq!(app.story.render_count(), 12);
    }

    #[test]
    fn test_click_out_of_range_keeps_state() {
        let mut app = app(StoryKind::Unoptimised);
        app.dispatch(Action::Click(9));
        assert_eq!(app.story.selected_text(), "0");
        assert_eq!(app.last_click, None);
        assert!(app.message.is_some());
    }

    #[test]
    fn test_remount_resets_counts() {
        let mut app = app(StoryKind::Unoptimised);
        app.dispatch(Action::Click(2));
        let session = app.story.session;

        app.dispatch(Action::Remount);
        assert_eq!(app.current_kind(), StoryKind::Unoptimised);
        assert_eq!(app.story.render_count(), 6);
        assert_eq!(app.story.selected_text(), "0");
        assert_ne!(app.story.session, session);
    }
}
