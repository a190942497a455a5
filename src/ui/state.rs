//! App 状态定义 (Model)

use std::rc::Rc;

use ratatui::layout::Rect;

use crate::config::HarnessConfig;
use crate::models::{Item, default_items};
use crate::stories::{Story, StoryKind};

/// 应用状态
pub struct App {
    pub items: Rc<[Item]>,
    pub story: Story,
    pub focused: usize,
    pub button_areas: Vec<Rect>, // 上一帧各按钮的位置
    pub last_click: Option<(usize, usize)>, // (按钮下标, 新增渲染标记数)
    pub show_render_log: bool,
    pub max_log_lines: usize,
    pub track_renders: bool,
    pub message: Option<String>,
}

impl App {
    /// 创建新的应用实例并挂载初始条目
    pub fn new(config: &HarnessConfig) -> Self {
        let items = default_items();
        let story = Story::mount(
            config.initial_story,
            Rc::clone(&items),
            config.track_renders,
        );
        Self {
            items,
            story,
            focused: 0,
            button_areas: Vec::new(),
            last_click: None,
            show_render_log: config.show_render_log,
            max_log_lines: config.max_log_lines,
            track_renders: config.track_renders,
            message: None,
        }
    }

    pub fn current_kind(&self) -> StoryKind {
        self.story.kind
    }
}
