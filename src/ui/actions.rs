//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 切换演示条目（重新挂载）
    PrevStory,
    NextStory,
    Remount,

    // 按钮焦点与点击
    FocusLeft,
    FocusRight,
    ClickFocused,
    Click(usize), // 按下标直接点击

    ToggleRenderLog,
}
