use crate::command::Command;
use std::collections::VecDeque;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// 已执行命令的历史（后进先出）
/// - 撤销时从栈顶弹出；
/// - 设置上限后，满员时丢弃最早的记录。
pub struct CommandHistory<'a> {
    entries: VecDeque<Arc<dyn Command + 'a>>,
    limit: Option<NonZeroUsize>,
}

impl Default for CommandHistory<'_> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
            limit: None,
        }
    }
}

impl<'a> CommandHistory<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: Option<NonZeroUsize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn limit(&self) -> Option<NonZeroUsize> {
        self.limit
    }

    /// 记录一条已执行的命令
    pub fn push(&mut self, command: Arc<dyn Command + 'a>) {
        if let Some(limit) = self.limit {
            while self.entries.len() >= limit.get() {
                if let Some(evicted) = self.entries.pop_front() {
                    tracing::debug!(command = evicted.name(), "history full, oldest entry evicted");
                }
            }
        }
        self.entries.push_back(command);
    }

    /// 弹出最近一次执行的命令
    pub fn pop(&mut self) -> Option<Arc<dyn Command + 'a>> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 历史中的命令名（最近的在最后）
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|c| c.name()).collect()
    }
}

impl fmt::Debug for CommandHistory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHistory")
            .field("entries", &self.names())
            .field("limit", &self.limit)
            .finish()
    }
}
