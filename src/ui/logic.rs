//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑；对列表的修改只经过 TodoStore 的 add/remove

use tracing::info;

use super::actions::Action;
use super::state::{App, AppMode};
use crate::models::TodoItem;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),

            Action::StartEditing => self.start_editing(),
            Action::ReAddSelected => self.re_add_selected(),
            Action::RemoveLast => self.remove_last(),

            Action::NextIcon => self.selected_icon = self.selected_icon.next(),
            Action::PrevIcon => self.selected_icon = self.selected_icon.prev(),

            Action::Cancel => self.cancel(),
            Action::Submit => {
                if self.mode == AppMode::Editing {
                    self.submit();
                }
            }

            Action::Input(c) => {
                if self.mode == AppMode::Editing {
                    self.input_buffer.push(c);
                }
            }
            Action::DeleteChar => {
                if self.mode == AppMode::Editing {
                    self.input_buffer.pop();
                }
            }
        }
        self.sync_with_store();
        false
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    // ============ 添加相关 ============

    /// 开始输入新任务
    pub fn start_editing(&mut self) {
        self.mode = AppMode::Editing;
        self.input_buffer.clear();
        self.message = None;
    }

    /// 提交输入；空白输入被忽略
    pub fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }
        let task = std::mem::take(&mut self.input_buffer);
        info!(task = %task, icon = ?self.selected_icon, "submit item");
        self.store.add(TodoItem::new(task, self.selected_icon));
        self.mode = AppMode::Normal;
        self.message = Some("已添加".to_string());
    }

    /// 点击列表行会把该条目再添加一次
    pub fn re_add_selected(&mut self) {
        if let Some(item) = self.selected_item().cloned() {
            self.store.add(item);
            self.message = Some("已再次添加".to_string());
        }
    }

    // ============ 删除相关 ============

    /// 移除最后一项；列表为空时不做任何事
    pub fn remove_last(&mut self) {
        if let Some(item) = self.store.remove_last() {
            self.message = Some(format!("已移除 \"{}\"", item.task));
        }
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        self.mode = AppMode::Normal;
        self.input_buffer.clear();
        self.message = None;
    }
}
