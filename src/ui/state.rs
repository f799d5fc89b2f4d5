//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::config::{Config, IconRow};
use crate::models::{IconKind, SubscriptionId, TodoItem, TodoStore, sample_items};

/// 应用状态
pub struct App {
    pub store: TodoStore,
    pub selected_index: usize,
    pub mode: AppMode,
    pub input_buffer: String,
    pub selected_icon: IconKind,
    pub icon_row: IconRow,
    pub message: Option<String>,
    list_changed: Rc<Cell<bool>>, // 由 store 的订阅回调置位
    subscription: SubscriptionId,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Editing,
}

impl App {
    /// 创建新的应用实例
    pub fn new(mut store: TodoStore, config: &Config) -> Self {
        let list_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&list_changed);
        let subscription = store.subscribe(move |items| {
            debug!(len = items.len(), "list changed");
            flag.set(true);
        });

        let mut app = Self {
            store,
            selected_index: 0,
            mode: AppMode::Normal,
            input_buffer: String::new(),
            selected_icon: config.default_icon,
            icon_row: config.icon_row,
            message: None,
            list_changed,
            subscription,
        };
        app.refresh_selection();
        app
    }

    pub fn from_config(config: &Config) -> Self {
        let store = if config.sample_items {
            TodoStore::with_items(sample_items())
        } else {
            TodoStore::new()
        };
        Self::new(store, config)
    }

    /// 列表变化后刷新选中位置
    pub fn sync_with_store(&mut self) {
        if self.list_changed.replace(false) {
            self.refresh_selection();
        }
    }

    fn refresh_selection(&mut self) {
        // 确保选中索引有效
        let len = self.store.len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// 获取当前选中的条目
    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.store.items().get(self.selected_index)
    }

    /// 输入非空白时才能添加
    pub fn can_submit(&self) -> bool {
        !self.input_buffer.trim().is_empty()
    }

    pub fn icon_row_visible(&self) -> bool {
        match self.icon_row {
            IconRow::Always => true,
            IconRow::WhenTyping => self.can_submit(),
        }
    }
}

/// 界面销毁时解除对 store 的订阅
impl Drop for App {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
