//! 编辑命令：一次原子编辑的可逆记录
//!
//! Insert 的逆操作是同位置、同长度的 Delete；Delete 的逆操作是把记录的字节重新插回。

use super::rope::RopeBuffer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Insert,
    Delete,
}

impl CommandKind {
    pub fn inverse(self) -> Self {
        match self {
            CommandKind::Insert => CommandKind::Delete,
            CommandKind::Delete => CommandKind::Insert,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditCommand {
    pub kind: CommandKind,
    pub pos: usize,
    /// Insert：插入的字节；Delete：被删掉的字节
    pub bytes: Vec<u8>,
}

impl EditCommand {
    pub fn new(kind: CommandKind, pos: usize, bytes: Vec<u8>) -> Self {
        Self { kind, pos, bytes }
    }

    pub fn insert(pos: usize, bytes: Vec<u8>) -> Self {
        Self::new(CommandKind::Insert, pos, bytes)
    }

    pub fn delete(pos: usize, bytes: Vec<u8>) -> Self {
        Self::new(CommandKind::Delete, pos, bytes)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn end(&self) -> usize {
        self.pos + self.bytes.len()
    }

    /// 正向执行（redo），返回执行后的光标
    pub fn apply(&self, rope: &mut RopeBuffer) -> usize {
        self.run(self.kind, rope)
    }

    /// 反向执行（undo），返回执行后的光标
    pub fn revert(&self, rope: &mut RopeBuffer) -> usize {
        self.run(self.kind.inverse(), rope)
    }

    fn run(&self, kind: CommandKind, rope: &mut RopeBuffer) -> usize {
        match kind {
            CommandKind::Insert => {
                rope.insert(self.pos, &self.bytes);
                self.end()
            }
            CommandKind::Delete => {
                rope.delete(self.pos, self.bytes.len());
                self.pos
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/edit_op.rs"]
mod tests;
