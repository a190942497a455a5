//! 通用 UI 组件
//!
//! 面板、按钮等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// [组件] 带标题的面板，返回内部区域
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带边框、居中标签的按钮
pub fn render_button_widget(frame: &mut Frame, area: Rect, label: &str, is_focused: bool) {
    let style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(button, area);
}
