mod config;
mod models;
mod runtime;
mod stories;
mod ui;
mod widgets;

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::{HarnessConfig, load_config};
use crate::ui::{App, render};

const APP_DIR: &str = "rerender-stories";

/// 获取配置目录路径 (~/.config/rerender-stories/)
fn get_config_dir() -> io::Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户配置目录"))?
        .join(APP_DIR);

    fs::create_dir_all(&dir)?;

    Ok(dir)
}

/// 获取数据目录路径 (~/.local/share/rerender-stories/)
fn get_data_dir() -> io::Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join(APP_DIR);

    fs::create_dir_all(&dir)?;

    Ok(dir)
}

/// 终端被界面占用，日志写到文件
fn init_tracing(config: &HarnessConfig, log_path: &Path) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

fn main() -> io::Result<()> {
    // 配置文件路径 (~/.config/rerender-stories/config.toml)
    let config = load_config(&get_config_dir()?.join("config.toml"))?;

    let log_path = match &config.log_file {
        Some(path) => path.clone(),
        None => get_data_dir()?.join("render.log"),
    };
    init_tracing(&config, &log_path)?;
    tracing::info!(?config, "starting");

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    println!("渲染日志已写入 {}", log_path.display());

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                ui::handle_key_event(app, key.code)?
            }
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse)?,
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
