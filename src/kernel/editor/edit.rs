use crate::core::Command;
use crate::kernel::services::ports::Clipboard;
use crate::models::utf8::{next_boundary, prev_boundary};
use crate::models::CommandKind;

use super::state::TextEditorCore;

impl TextEditorCore {
    /// 执行一条语义命令，返回文本、光标或选区是否变化
    pub fn apply_command(&mut self, command: Command, clipboard: &mut dyn Clipboard) -> bool {
        let before = (self.version, self.cursor.pos(), self.cursor.selection_range());

        match command {
            Command::CursorLeft => self.move_left(false),
            Command::CursorRight => self.move_right(false),
            Command::CursorUp => self.move_up(false),
            Command::CursorDown => self.move_down(false),
            Command::CursorLineStart => self.move_home(false),
            Command::CursorLineEnd => self.move_end(false),
            Command::CursorFileStart => self.move_buffer_start(false),
            Command::CursorFileEnd => self.move_buffer_end(false),
            Command::PageUp => self.page_up(false),
            Command::PageDown => self.page_down(false),
            Command::CursorTo(pos) => self.set_cursor(pos),

            Command::InsertChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_text(c.encode_utf8(&mut buf).as_bytes());
            }
            Command::InsertText(text) => {
                self.insert_text(text.as_bytes());
            }
            Command::InsertNewline => {
                self.insert_newline();
            }
            Command::InsertTab => {
                self.insert_tab();
            }
            Command::DeleteBackward => {
                self.backspace();
            }
            Command::DeleteForward => {
                self.forward_delete();
            }
            Command::DeleteSelection => {
                self.delete_selection();
            }

            Command::ClearSelection => self.clear_selection(),
            Command::SelectAll => self.select_all(),
            Command::ExtendSelectionLeft => self.move_left(true),
            Command::ExtendSelectionRight => self.move_right(true),
            Command::ExtendSelectionUp => self.move_up(true),
            Command::ExtendSelectionDown => self.move_down(true),
            Command::ExtendSelectionLineStart => self.move_home(true),
            Command::ExtendSelectionLineEnd => self.move_end(true),
            Command::ExtendSelectionFileStart => self.move_buffer_start(true),
            Command::ExtendSelectionFileEnd => self.move_buffer_end(true),
            Command::ExtendSelectionPageUp => self.page_up(true),
            Command::ExtendSelectionPageDown => self.page_down(true),
            Command::DragStart(pos) => self.begin_drag(pos),
            Command::DragTo(pos) => self.drag_to(pos),
            Command::DragEnd => self.end_drag(),

            Command::Undo => {
                self.undo();
            }
            Command::Redo => {
                self.redo();
            }
            Command::Copy => {
                self.copy(clipboard);
            }
            Command::Cut => {
                self.cut(clipboard);
            }
            Command::Paste => {
                self.paste(clipboard);
            }

            Command::Find => self.search_open(),
            Command::FindClose => self.search_close(),
            Command::FindNext => {
                self.search_next();
            }
            Command::FindPrev => {
                self.search_prev();
            }
            Command::FindToggleCase => {
                self.search_toggle_case();
            }
            Command::FindInput(c) => {
                self.search_push_char(c);
            }
            Command::FindBackspace => {
                self.search_pop_char();
            }
        }

        before != (self.version, self.cursor.pos(), self.cursor.selection_range())
    }

    // ==================== 编辑 ====================

    /// 在光标处插入；有选区时先删除选区（单独记一条撤销命令）
    pub fn insert_text(&mut self, bytes: &[u8]) -> bool {
        if bytes.is_empty() {
            return false;
        }
        self.delete_selection();
        let pos = self.cursor.pos();
        self.insert_at(pos, bytes);
        true
    }

    pub fn insert_newline(&mut self) -> bool {
        self.insert_text(b"\n")
    }

    /// 按配置插入空格或制表符
    pub fn insert_tab(&mut self) -> bool {
        let tab = self.config.tab_text();
        self.insert_text(&tab)
    }

    /// 删除光标前一个字符；有选区时只删除选区
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let end = self.cursor.pos();
        if end == 0 {
            return false;
        }
        let start = prev_boundary(&self.rope, end);
        self.delete_range(start, end)
    }

    /// 删除光标后一个字符；有选区时只删除选区
    pub fn forward_delete(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        let start = self.cursor.pos();
        if start >= self.rope.len() {
            return false;
        }
        let end = next_boundary(&self.rope, start);
        self.delete_range(start, end)
    }

    pub fn delete_selection(&mut self) -> bool {
        match self.cursor.selection_range() {
            Some((start, end)) => self.delete_range(start, end),
            None => false,
        }
    }

    // ==================== 剪贴板 ====================

    pub fn copy_selection(&self) -> Option<Vec<u8>> {
        let (start, end) = self.cursor.selection_range()?;
        Some(self.rope.copy(start, end - start))
    }

    /// 复制选区到剪贴板；不改动文本和历史。剪贴板拒收时返回 false
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        let Some(bytes) = self.copy_selection() else {
            return false;
        };
        match clipboard.set(bytes) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "copy to clipboard failed");
                false
            }
        }
    }

    /// 只有复制成功才删除选区
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        if !self.copy(clipboard) {
            return false;
        }
        self.delete_selection()
    }

    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        match clipboard.get() {
            Some(bytes) => self.paste_bytes(&bytes),
            None => false,
        }
    }

    pub fn paste_bytes(&mut self, bytes: &[u8]) -> bool {
        self.insert_text(bytes)
    }

    // ==================== 撤销 / 重做 ====================

    pub fn undo(&mut self) -> bool {
        match self.log.undo(&mut self.rope) {
            Some(pos) => {
                self.cursor.set_cursor(&self.rope, pos);
                self.bump_version();
                tracing::debug!(cursor = pos, version = self.version, "undo");
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.log.redo(&mut self.rope) {
            Some(pos) => {
                self.cursor.set_cursor(&self.rope, pos);
                self.bump_version();
                tracing::debug!(cursor = pos, version = self.version, "redo");
                true
            }
            None => false,
        }
    }

    // ==================== 内部方法 ====================

    fn insert_at(&mut self, pos: usize, bytes: &[u8]) {
        let pos = pos.min(self.rope.len());
        self.rope.insert(pos, bytes);
        self.log.push(CommandKind::Insert, pos, bytes.to_vec());
        self.cursor.set_cursor(&self.rope, pos + bytes.len());
        self.bump_version();
    }

    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if end <= start {
            return false;
        }
        let removed = self.rope.copy(start, end - start);
        if removed.is_empty() {
            return false;
        }
        self.rope.delete(start, removed.len());
        self.log.push(CommandKind::Delete, start, removed);
        self.cursor.set_cursor(&self.rope, start);
        self.bump_version();
        true
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/editor/edit.rs"]
mod tests;
