use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::stories::StoryKind;

/// 配置文件结构，所有字段都可省略
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// 启动时打开的条目
    pub initial_story: StoryKind,
    pub show_render_log: bool,
    /// 渲染日志面板最多显示多少行
    pub max_log_lines: usize,
    /// 是否启用渲染追踪
    pub track_renders: bool,
    /// tracing 过滤规则，例如 "info" 或 "rerender_stories=debug"
    pub log_filter: String,
    /// 日志文件路径，为空时写到数据目录下的 render.log
    pub log_file: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            initial_story: StoryKind::Unoptimised,
            show_render_log: true,
            max_log_lines: 200,
            track_renders: true,
            log_filter: "info".to_string(),
            log_file: None,
        }
    }
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> io::Result<HarnessConfig> {
    if !path.exists() {
        return Ok(HarnessConfig::default());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> io::Result<HarnessConfig> {
    toml::from_str(content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
