//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, AppMode};
use crate::models::{IconKind, TodoItem};
use components::{render_button, render_input_widget};
use unicode_width::UnicodeWidthStr;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let icon_row_height = if app.icon_row_visible() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // 标题
            Constraint::Length(3),               // 输入
            Constraint::Length(icon_row_height), // 图标行
            Constraint::Min(3),                  // 列表
            Constraint::Length(3),               // 移除按钮
            Constraint::Length(3),               // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_entry_input(frame, app, chunks[1]);
    if app.icon_row_visible() {
        render_icon_row(frame, app, chunks[2]);
    }
    render_list(frame, app, chunks[3]);
    render_button(
        frame,
        chunks[4],
        "移除最后一项 [x]",
        !app.store.is_empty(),
        Color::Red,
    );
    render_help(frame, app, chunks[5]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("📝 待办清单")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_entry_input(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(area);

    let is_editing = app.mode == AppMode::Editing;
    // 按显示宽度计算，中文字符占两列；边框各占一列
    let text_width = u16::try_from(app.input_buffer.width()).unwrap_or(u16::MAX);
    let scroll_x = input_scroll(text_width, chunks[0].width.saturating_sub(2));
    render_input_widget(
        frame,
        chunks[0],
        "新任务",
        &app.input_buffer,
        is_editing,
        Color::Yellow,
        scroll_x,
    );
    render_button(frame, chunks[1], "添加", app.can_submit(), Color::Green);

    if is_editing {
        let x = chunks[0]
            .x
            .saturating_add(1)
            .saturating_add(text_width - scroll_x);
        frame.set_cursor_position((x, chunks[0].y.saturating_add(1)));
    }
}

/// 输入超出输入框时的水平滚动量，保证末尾的光标可见
fn input_scroll(text_width: u16, inner_width: u16) -> u16 {
    text_width.saturating_sub(inner_width.saturating_sub(1))
}

fn render_icon_row(frame: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = IconKind::ALL
        .iter()
        .flat_map(|icon| {
            let style = if *icon == app.selected_icon {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [
                Span::styled(format!("{} {}", icon.glyph(), icon.label()), style),
                Span::raw("  "),
            ]
        })
        .collect();

    let row = Paragraph::new(Line::from(spans))
        .block(Block::default().title("图标").borders(Borders::ALL));
    frame.render_widget(row, area);
}

fn todo_list_item(item: &TodoItem) -> ListItem<'_> {
    ListItem::new(Line::from(vec![
        Span::styled(item.icon.glyph(), Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::raw(item.task.as_str()),
    ]))
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app.store.items().iter().map(todo_list_item).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("列表 ({})", app.store.len()))
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

    let mut state = ListState::default();
    if !app.store.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Normal => {
            "[a] 新建  [h/l] 图标  [Enter] 再次添加  [x] 移除最后一项  [j/k] 导航  [q] 退出"
        }
        AppMode::Editing => "[Enter] 添加  [Tab] 切换图标  [Esc] 取消",
    };

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, IconRow};
    use crate::models::{TodoStore, sample_items};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Position};

    fn draw(app: &App) -> String {
        draw_with_cursor(app).0
    }

    fn draw_with_cursor(app: &App) -> (String, Position) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        (buffer_text(terminal.backend().buffer()), cursor)
    }

    fn editing(input: &str) -> App {
        let mut app = App::new(TodoStore::new(), &Config::default());
        app.mode = AppMode::Editing;
        app.input_buffer = input.to_string();
        app
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_items_in_order() {
        let app = App::new(TodoStore::with_items(sample_items()), &Config::default());
        let text = draw(&app);

        let first = text.find("Learn compose").unwrap();
        let last = text.find("Build dynamic UIs").unwrap();
        assert!(first < last);
        assert!(text.contains("[x]"));
    }

    #[test]
    fn test_icon_row_hidden_until_typing() {
        let config = Config {
            icon_row: IconRow::WhenTyping,
            ..Config::default()
        };
        let mut app = App::new(TodoStore::new(), &config);
        assert!(!draw(&app).contains(IconKind::Trash.glyph()));

        app.mode = AppMode::Editing;
        app.input_buffer = "Walk dog".to_string();
        let text = draw(&app);
        assert!(text.contains(IconKind::Trash.glyph()));
        assert!(text.contains("Walk dog"));
    }

    #[test]
    fn test_icon_row_always_visible() {
        let app = App::new(TodoStore::new(), &Config::default());
        assert!(draw(&app).contains(IconKind::PrivacyTip.glyph()));
    }

    #[test]
    fn test_cursor_follows_wide_input() {
        // 三个中文字符占六列，光标在第 1 + 6 列；输入框内容在第 4 行
        let (_, cursor) = draw_with_cursor(&editing("买牛奶"));
        assert_eq!(cursor, Position::new(7, 4));

        let (_, cursor) = draw_with_cursor(&editing("milk"));
        assert_eq!(cursor, Position::new(5, 4));
    }

    #[test]
    fn test_long_input_scrolls_to_end() {
        let input = format!("{}END", "a".repeat(200));
        let (text, cursor) = draw_with_cursor(&editing(&input));

        let input_row = text.lines().nth(4).unwrap();
        assert!(input_row.contains("aEND"));
        // 输入框宽 90，内部 88 列，最后一列留给光标
        assert_eq!(cursor, Position::new(88, 4));
    }

    #[test]
    fn test_input_scroll() {
        assert_eq!(input_scroll(0, 88), 0);
        assert_eq!(input_scroll(87, 88), 0);
        assert_eq!(input_scroll(88, 88), 1);
        assert_eq!(input_scroll(u16::MAX, 88), u16::MAX - 87);
        assert_eq!(input_scroll(5, 0), 5);
    }
}
