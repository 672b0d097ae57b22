//! 光标模型：字节偏移光标 + shift 扩展选区 + 首选列
//!
//! 光标永远落在 UTF-8 边界上。首选列（相对行首的字节数）由水平移动、
//! Home/End 和显式定位设置，在连续的上下移动中保持不变。

use super::rope::RopeBuffer;
use super::selection::Selection;
use super::utf8::{next_boundary, prev_boundary, snap_to_boundary};

#[derive(Debug, Clone, Default)]
pub struct CursorModel {
    pos: usize,
    selection: Option<Selection>,
    preferred_column: usize,
    dragging: bool,
}

/// 相对行首的字节列
pub fn column_of(rope: &RopeBuffer, pos: usize) -> usize {
    let pos = pos.min(rope.len());
    pos - rope.line_start(pos)
}

impl CursorModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn preferred_column(&self) -> usize {
        self.preferred_column
    }

    /// 非空选区
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref().filter(|s| !s.is_empty())
    }

    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    pub fn selection_range(&self) -> Option<(usize, usize)> {
        self.selection().map(Selection::range)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// 回到文本开头，清空选区和拖动状态
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 直接定位（编辑之后、搜索跳转等），清空选区
    pub fn set_cursor(&mut self, rope: &RopeBuffer, pos: usize) {
        self.pos = snap_to_boundary(rope, pos);
        self.selection = None;
        self.preferred_column = column_of(rope, self.pos);
    }

    pub fn select_all(&mut self, rope: &RopeBuffer) {
        let len = rope.len();
        self.selection = Some(Selection::with_range(0, len));
        self.pos = len;
        self.preferred_column = column_of(rope, len);
    }

    // ==================== 移动 ====================

    pub fn move_left(&mut self, rope: &RopeBuffer, shift: bool) {
        self.motion(shift, |this| {
            this.pos = prev_boundary(rope, this.pos);
            this.preferred_column = column_of(rope, this.pos);
        });
    }

    pub fn move_right(&mut self, rope: &RopeBuffer, shift: bool) {
        self.motion(shift, |this| {
            this.pos = next_boundary(rope, this.pos);
            this.preferred_column = column_of(rope, this.pos);
        });
    }

    pub fn move_up(&mut self, rope: &RopeBuffer, shift: bool) {
        self.motion(shift, |this| this.step_up(rope));
    }

    pub fn move_down(&mut self, rope: &RopeBuffer, shift: bool) {
        self.motion(shift, |this| this.step_down(rope));
    }

    pub fn move_home(&mut self, rope: &RopeBuffer, shift: bool) {
        self.motion(shift, |this| {
            this.pos = rope.line_start(this.pos);
            this.preferred_column = 0;
        });
    }

    pub fn move_end(&mut self, rope: &RopeBuffer, shift: bool) {
        self.motion(shift, |this| {
            this.pos = rope.line_end(this.pos);
            this.preferred_column = column_of(rope, this.pos);
        });
    }

    pub fn move_buffer_start(&mut self, shift: bool) {
        self.motion(shift, |this| {
            this.pos = 0;
            this.preferred_column = 0;
        });
    }

    pub fn move_buffer_end(&mut self, rope: &RopeBuffer, shift: bool) {
        self.motion(shift, |this| {
            this.pos = rope.len();
            this.preferred_column = column_of(rope, this.pos);
        });
    }

    pub fn page_up(&mut self, rope: &RopeBuffer, lines: usize, shift: bool) {
        self.motion(shift, |this| {
            for _ in 0..lines {
                this.step_up(rope);
            }
        });
    }

    pub fn page_down(&mut self, rope: &RopeBuffer, lines: usize, shift: bool) {
        self.motion(shift, |this| {
            for _ in 0..lines {
                this.step_down(rope);
            }
        });
    }

    // ==================== 指针拖选 ====================

    pub fn begin_drag(&mut self, rope: &RopeBuffer, pos: usize) {
        self.set_cursor(rope, pos);
        self.selection = Some(Selection::new(self.pos));
        self.dragging = true;
    }

    pub fn drag_to(&mut self, rope: &RopeBuffer, pos: usize) {
        if !self.dragging {
            return;
        }
        self.pos = snap_to_boundary(rope, pos);
        self.preferred_column = column_of(rope, self.pos);
        match self.selection.as_mut() {
            Some(sel) => sel.set_cursor(self.pos),
            None => self.selection = Some(Selection::new(self.pos)),
        }
    }

    /// 结束拖动；空选区直接丢弃
    pub fn end_drag(&mut self) {
        self.dragging = false;
        if self.selection.is_some_and(|s| s.is_empty()) {
            self.selection = None;
        }
    }

    // ==================== 内部方法 ====================

    /// 执行一次移动并按 shift 更新选区：
    /// 首次 shift 移动以移动前的位置为 anchor，非 shift 移动清空选区
    fn motion(&mut self, shift: bool, step: impl FnOnce(&mut Self)) {
        let before = self.pos;
        step(self);

        if shift {
            let anchor = match self.selection() {
                Some(sel) => sel.anchor(),
                None => before,
            };
            self.selection = Some(Selection::with_range(anchor, self.pos));
        } else {
            self.selection = None;
        }
    }

    fn step_up(&mut self, rope: &RopeBuffer) {
        let line_start = rope.line_start(self.pos);
        if line_start == 0 {
            return;
        }
        let prev_end = line_start - 1;
        let prev_start = rope.line_start(prev_end);
        let column = self.preferred_column.min(prev_end - prev_start);
        self.pos = snap_to_boundary(rope, prev_start + column);
    }

    fn step_down(&mut self, rope: &RopeBuffer) {
        let line_end = rope.line_end(self.pos);
        if line_end >= rope.len() {
            return;
        }
        let next_start = line_end + 1;
        let next_end = rope.line_end(next_start);
        let column = self.preferred_column.min(next_end - next_start);
        self.pos = snap_to_boundary(rope, next_start + column);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/cursor.rs"]
mod tests;
