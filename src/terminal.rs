//! 终端会话
//!
//! 进入 raw mode 之后，无论初始化、主循环还是恢复过程中哪一步失败，
//! 恢复步骤都会全部执行，并返回最先出现的错误。

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::warn;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// 设置终端，运行 `f`，然后恢复终端
pub fn run<F>(f: F) -> io::Result<()>
where
    F: FnOnce(&mut Tui) -> io::Result<()>,
{
    enable_raw_mode()?;

    let result = setup().and_then(|mut terminal| f(&mut terminal));

    let restored = restore(&mut io::stdout(), disable_raw_mode);
    if let Err(e) = &restored {
        warn!(error = %e, "failed to restore terminal");
    }

    result.and(restored)
}

fn setup() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// 恢复终端：每一步都执行，返回第一个错误
fn restore<W: Write>(out: &mut W, disable_raw: impl FnOnce() -> io::Result<()>) -> io::Result<()> {
    let raw = disable_raw();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}
