use serde::{Deserialize, Serialize};
use tracing::debug;

/// 图标类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Square,
    Done,
    Event,
    #[default]
    Default,
    PrivacyTip,
    Trash,
}

impl IconKind {
    /// 图标选择行的显示顺序
    pub const ALL: [IconKind; 6] = [
        IconKind::Square,
        IconKind::Done,
        IconKind::Event,
        IconKind::Default,
        IconKind::PrivacyTip,
        IconKind::Trash,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            IconKind::Square => "□",
            IconKind::Done => "✓",
            IconKind::Event => "◷",
            IconKind::Default => "•",
            IconKind::PrivacyTip => "⚠",
            IconKind::Trash => "♻",
        }
    }

    /// 无障碍标签
    pub fn label(self) -> &'static str {
        match self {
            IconKind::Square => "展开",
            IconKind::Done => "完成",
            IconKind::Event => "事件",
            IconKind::Default => "默认",
            IconKind::PrivacyTip => "隐私",
            IconKind::Trash => "恢复",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|i| *i == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

/// 待办事项，按值比较（任务文本 + 图标）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoItem {
    pub task: String,
    pub icon: IconKind,
}

impl TodoItem {
    pub fn new(task: impl Into<String>, icon: IconKind) -> Self {
        Self {
            task: task.into(),
            icon,
        }
    }
}

/// 示例列表
pub fn sample_items() -> Vec<TodoItem> {
    vec![
        TodoItem::new("Learn compose", IconKind::Event),
        TodoItem::new("Take the codelab", IconKind::Default),
        TodoItem::new("Apply state", IconKind::Done),
        TodoItem::new("Build dynamic UIs", IconKind::Square),
    ]
}

/// 订阅句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&[TodoItem])>;

/// 内存中的待办列表
///
/// 只能通过 `add` / `remove` 修改；每次变化后同步通知所有订阅者。
#[derive(Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = TodoItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&TodoItem> {
        self.items.last()
    }

    /// 追加到末尾（不做校验）
    pub fn add(&mut self, item: TodoItem) {
        debug!(task = %item.task, icon = ?item.icon, "add item");
        self.items.push(item);
        self.notify();
    }

    /// 删除一个相等的条目（最后一个匹配项）；不存在时什么也不做
    pub fn remove(&mut self, item: &TodoItem) {
        let Some(index) = self.items.iter().rposition(|x| x == item) else {
            debug!(task = %item.task, "remove ignored, no matching item");
            return;
        };
        self.items.remove(index);
        debug!(task = %item.task, index, "remove item");
        self.notify();
    }

    /// 删除最后一个条目
    pub fn remove_last(&mut self) -> Option<TodoItem> {
        let last = self.last()?.clone();
        self.remove(&last);
        Some(last)
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&[TodoItem]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// 取消订阅，返回该订阅是否存在
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// 按订阅顺序依次同步调用
    fn notify(&mut self) {
        let items = &self.items;
        for (_, observer) in self.observers.iter_mut() {
            observer(items);
        }
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}
