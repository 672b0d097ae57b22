//! 编辑历史：有上限的 undo / redo 双栈
//!
//! - 新编辑清空 redo 栈
//! - undo 栈超过上限时丢弃最旧的命令（FIFO）
//! - 命令在两个栈之间移动，不复制

use super::edit_op::{CommandKind, EditCommand};
use super::rope::RopeBuffer;
use std::collections::VecDeque;

/// undo 栈默认上限
pub const DEFAULT_MAX_UNDO: usize = 1000;

#[derive(Clone, Debug)]
pub struct EditCommandLog {
    undo_stack: VecDeque<EditCommand>,
    redo_stack: Vec<EditCommand>,
    max_undo: usize,
}

impl EditCommandLog {
    pub fn new() -> Self {
        Self::with_max_undo(DEFAULT_MAX_UNDO)
    }

    pub fn with_max_undo(max_undo: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_undo: max_undo.max(1),
        }
    }

    pub fn max_undo(&self) -> usize {
        self.max_undo
    }

    /// 记录一次已经执行过的编辑；空字节串不记录
    pub fn push(&mut self, kind: CommandKind, pos: usize, bytes: Vec<u8>) {
        if bytes.is_empty() {
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push_back(EditCommand::new(kind, pos, bytes));

        while self.undo_stack.len() > self.max_undo {
            self.undo_stack.pop_front();
            tracing::trace!(max = self.max_undo, "undo stack full, dropped oldest command");
        }
    }

    /// 撤销最近一次编辑，返回撤销后的光标
    pub fn undo(&mut self, rope: &mut RopeBuffer) -> Option<usize> {
        let command = self.undo_stack.pop_back()?;
        let cursor = command.revert(rope);
        self.redo_stack.push(command);
        Some(cursor)
    }

    /// 重做最近一次撤销，返回重做后的光标
    pub fn redo(&mut self, rope: &mut RopeBuffer) -> Option<usize> {
        let command = self.redo_stack.pop()?;
        let cursor = command.apply(rope);
        self.undo_stack.push_back(command);
        Some(cursor)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// 最旧的可撤销命令
    pub fn oldest(&self) -> Option<&EditCommand> {
        self.undo_stack.front()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for EditCommandLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_history.rs"]
mod tests;
