//! 选区模型：anchor 固定端 + cursor 活动端，均为字节偏移

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    anchor: usize,
    cursor: usize,
}

impl Selection {
    pub fn new(pos: usize) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
        }
    }

    pub fn with_range(anchor: usize, cursor: usize) -> Self {
        Self { anchor, cursor }
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos;
    }

    /// 有序的 `[start, end)`，与拖动方向无关
    pub fn range(&self) -> (usize, usize) {
        if self.anchor <= self.cursor {
            (self.anchor, self.cursor)
        } else {
            (self.cursor, self.anchor)
        }
    }

    pub fn len(&self) -> usize {
        let (start, end) = self.range();
        end - start
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    pub fn contains(&self, pos: usize) -> bool {
        let (start, end) = self.range();
        start <= pos && pos < end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
