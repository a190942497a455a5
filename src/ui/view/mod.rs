//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::state::App;
use crate::stories::{STORY_GROUP, StoryKind};
use components::{render_button_widget, render_panel};

const BUTTON_WIDTH: u16 = 7;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(10),   // 主体
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(chunks[1]);

    render_stories(frame, app, body[0]);
    render_story_pane(frame, app, body[1]);
    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("⚡ 事件回调重渲染演示")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_stories(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = StoryKind::ALL
        .iter()
        .map(|kind| {
            let style = if *kind == app.current_kind() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Green)
            };
            ListItem::new(Line::from(vec![Span::styled(kind.title(), style)]))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(STORY_GROUP).borders(Borders::ALL));

    let mut state = ListState::default();
    state.select(Some(app.current_kind().index()));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_story_pane(frame: &mut Frame, app: &mut App, area: Rect) {
    let log_constraint = if app.show_render_log {
        Constraint::Min(3)
    } else {
        Constraint::Length(0)
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // 组件预览
            Constraint::Length(6), // 统计
            log_constraint,        // 渲染日志
        ])
        .split(area);

    render_preview(frame, app, chunks[0]);
    render_stats(frame, app, chunks[1]);
    if app.show_render_log {
        render_log(frame, app, chunks[2]);
    }
}

/// 组件预览：选中值加一排按钮，顺便记录按钮位置
fn render_preview(frame: &mut Frame, app: &mut App, area: Rect) {
    let inner = render_panel(frame, area, app.current_kind().title());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3)])
        .split(inner);

    let selected = Paragraph::new(format!("选中值: {}", app.story.selected_text()))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(selected, rows[0]);

    let labels: Vec<String> = app
        .story
        .tree()
        .buttons()
        .iter()
        .map(|(label, _)| label.to_string())
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(labels.iter().map(|_| Constraint::Length(BUTTON_WIDTH)))
        .split(rows[1]);

    app.button_areas.clear();
    for (i, (label, cell)) in labels.iter().zip(cells.iter()).enumerate() {
        render_button_widget(frame, *cell, label, i == app.focused);
        app.button_areas.push(*cell);
    }
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let runtime = app.story.runtime();
    let last_click = match app.last_click {
        Some((index, rendered)) => format!("#{} 新增 {} 个", index, rendered),
        None => "(无)".to_string(),
    };
    let tracking = if runtime.tracker().is_enabled() {
        format!("开启，可避免的重渲染 {} 次", runtime.tracker().report_count())
    } else {
        "关闭".to_string()
    };

    let content = format!(
        "渲染标记总数: {}\n上次点击: {}\n渲染追踪: {}\n会话: {}",
        runtime.log().count(),
        last_click,
        tracking,
        app.story.session
    );

    let stats = Paragraph::new(content)
        .block(Block::default().title("统计").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(stats, area);
}

fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let visible = (area.height.saturating_sub(2) as usize).min(app.max_log_lines);
    let runtime = app.story.runtime();

    let markers: Vec<ListItem> = runtime
        .log()
        .recent(visible)
        .iter()
        .map(|m| {
            ListItem::new(format!(
                "{} {} value={} rendered",
                m.at.format("%H:%M:%S%.3f"),
                m.component,
                m.value
            ))
        })
        .collect();
    let markers = List::new(markers).block(Block::default().title("渲染标记").borders(Borders::ALL));
    frame.render_widget(markers, chunks[0]);

    let reports: Vec<ListItem> = runtime
        .tracker()
        .recent(visible)
        .iter()
        .map(|r| {
            let value = r.value.map(|v| format!(" value={}", v)).unwrap_or_default();
            ListItem::new(Line::from(vec![Span::styled(
                format!(
                    "{} {}{}: {}",
                    r.at.format("%H:%M:%S"),
                    r.component,
                    value,
                    r.reason()
                ),
                Style::default().fg(Color::Red),
            )]))
        })
        .collect();
    let reports = List::new(reports).block(Block::default().title("可避免的重渲染").borders(Borders::ALL));
    frame.render_widget(reports, chunks[1]);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = "[j/k] 切换条目  [h/l] 移动焦点  [Enter] 点击  [0-9] 按下标点击  [r] 重新挂载  [t] 日志  [q] 退出";

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
