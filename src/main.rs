mod config;
mod error;
mod logging;
mod models;
mod terminal;
mod ui;

use std::io;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::terminal::Tui;
use crate::ui::{App, render};

fn main() -> Result<()> {
    // 配置文件路径 (~/.config/todolist/config.toml)
    let config = Config::load_default_location()?;
    logging::init(&config.log_filter);
    info!(?config, "starting");

    // 创建应用状态
    let mut app = App::from_config(&config);

    // 主循环；终端在返回前总会被恢复
    let result = terminal::run(|terminal| run_app(terminal, &mut app));

    info!(items = app.store.len(), "exiting, list discarded");
    Ok(result?)
}

fn run_app(terminal: &mut Tui, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press
                && ui::handle_key_event(app, key)?
            {
                break;
            }
        }
    }
    Ok(())
}
