//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs): App 结构体及当前挂载的演示条目
//! - View (view/): 将 State 映射为 UI，并记录按钮位置供鼠标点击使用
//! - Intent (actions.rs): 键盘和鼠标交互转化为明确的语义化 Action

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::{handle_key_event, handle_mouse_event};
pub use state::App;
pub use view::render;
