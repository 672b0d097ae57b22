//! 文本存储：字节级 Rope
//!
//! 职责：
//! - 持有全部文本（AVL 平衡树，叶子为定长上限的字节块）
//! - O(log n) 插入 / 删除 / 子串读取
//! - 行首 / 行尾 / 行号等按字节偏移的查询
//!
//! 偏移越界一律截断，不报错。

mod node;

use node::RopeNode;

use super::utf8::ByteSource;
use std::io::{self, Write};

/// 叶子字节容量默认值
pub const DEFAULT_LEAF_CAPACITY: usize = 512;

#[derive(Clone, Debug)]
pub struct RopeBuffer {
    root: Option<Box<RopeNode>>,
    total_length: usize,
    leaf_capacity: usize,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self::with_leaf_capacity(DEFAULT_LEAF_CAPACITY)
    }

    pub fn with_leaf_capacity(leaf_capacity: usize) -> Self {
        Self {
            root: None,
            total_length: 0,
            leaf_capacity: leaf_capacity.max(1),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_bytes_with_capacity(bytes, DEFAULT_LEAF_CAPACITY)
    }

    /// 大于一个叶子的文本直接对半构建成平衡树，而不是逐块插入
    pub fn from_bytes_with_capacity(bytes: &[u8], leaf_capacity: usize) -> Self {
        let leaf_capacity = leaf_capacity.max(1);
        Self {
            root: RopeNode::build(bytes, leaf_capacity),
            total_length: bytes.len(),
            leaf_capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.total_length
    }

    pub fn is_empty(&self) -> bool {
        self.total_length == 0
    }

    pub fn leaf_capacity(&self) -> usize {
        self.leaf_capacity
    }

    /// 在 `pos` 处插入，`pos` 超出末尾时按末尾处理
    pub fn insert(&mut self, pos: usize, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        let pos = pos.min(self.total_length);
        let capacity = self.leaf_capacity;

        self.root = match self.root.take() {
            Some(root) => Some(root.insert(pos, bytes, capacity)),
            None => RopeNode::build(bytes, capacity),
        };
        self.total_length += bytes.len();
    }

    /// 删除 `[pos, pos + len)`，长度被截断到末尾；返回实际删除的字节数
    pub fn delete(&mut self, pos: usize, len: usize) -> usize {
        if pos >= self.total_length || len == 0 {
            return 0;
        }
        let len = len.min(self.total_length - pos);
        let capacity = self.leaf_capacity;

        self.root = self
            .root
            .take()
            .and_then(|root| root.delete(pos, len, capacity));
        self.total_length -= len;
        len
    }

    /// 读取 `[pos, pos + len)`，越界部分被截断
    pub fn copy(&self, pos: usize, len: usize) -> Vec<u8> {
        let mut out = Vec::new();
        if pos >= self.total_length {
            return out;
        }
        let len = len.min(self.total_length - pos);
        out.reserve(len);
        if let Some(root) = &self.root {
            root.copy_into(pos, len, &mut out);
        }
        out
    }

    pub fn char_at(&self, pos: usize) -> Option<u8> {
        self.root.as_ref()?.byte_at(pos)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.total_length);
        for chunk in self.chunks() {
            out.extend_from_slice(chunk);
        }
        out
    }

    pub fn to_string_lossy(&self) -> String {
        super::utf8::decode_lossy(&self.to_bytes())
    }

    /// 释放整棵树
    pub fn clear(&mut self) {
        self.root = None;
        self.total_length = 0;
    }

    /// 按顺序遍历叶子字节块
    pub fn chunks(&self) -> Chunks<'_> {
        let mut stack = Vec::new();
        if let Some(root) = &self.root {
            stack.push(&**root);
        }
        Chunks { stack }
    }

    /// 流式写入，避免整块拷贝
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for chunk in self.chunks() {
            writer.write_all(chunk)?;
        }
        Ok(())
    }

    // ==================== 行查询（字节偏移）====================

    /// `pos` 所在行的行首
    pub fn line_start(&self, pos: usize) -> usize {
        let pos = pos.min(self.total_length);
        self.root
            .as_ref()
            .and_then(|root| root.rfind_byte(b'\n', pos))
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// `pos` 所在行的行尾（换行符位置或文本末尾）
    pub fn line_end(&self, pos: usize) -> usize {
        let pos = pos.min(self.total_length);
        self.root
            .as_ref()
            .and_then(|root| root.find_byte(b'\n', pos))
            .unwrap_or(self.total_length)
    }

    /// `pos` 所在行号（从 0 开始）
    pub fn line_number(&self, pos: usize) -> usize {
        let pos = pos.min(self.total_length);
        self.root
            .as_ref()
            .map(|root| root.count_byte(b'\n', pos))
            .unwrap_or(0)
    }

    pub fn line_count(&self) -> usize {
        self.line_number(self.total_length) + 1
    }

    /// 第 `line` 行行首偏移；超出行数时返回 None
    pub fn line_to_byte(&self, line: usize) -> Option<usize> {
        let mut start = 0;
        for _ in 0..line {
            let end = self.root.as_ref()?.find_byte(b'\n', start)?;
            start = end + 1;
        }
        Some(start)
    }

    // ==================== 结构查询 ====================

    pub fn height(&self) -> usize {
        self.root.as_ref().map(|root| root.height()).unwrap_or(0)
    }

    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map(|root| root.leaf_count()).unwrap_or(0)
    }

    /// 校验 weight / 高度 / 叶子容量 / 总长度
    pub fn check_invariants(&self) -> Result<(), String> {
        let actual = match &self.root {
            Some(root) => root.validate(self.leaf_capacity)?,
            None => 0,
        };
        if actual != self.total_length {
            return Err(format!(
                "total_length {} != tree length {}",
                self.total_length, actual
            ));
        }
        Ok(())
    }
}

impl ByteSource for RopeBuffer {
    fn byte_len(&self) -> usize {
        self.total_length
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.char_at(pos)
    }
}

impl Default for RopeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for RopeBuffer {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl From<&[u8]> for RopeBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

pub struct Chunks<'a> {
    stack: Vec<&'a RopeNode>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                RopeNode::Leaf(bytes) => return Some(bytes.as_slice()),
                RopeNode::Internal(_) => {
                    if let Some((left, right)) = node.children() {
                        self.stack.push(right);
                        self.stack.push(left);
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/rope.rs"]
mod tests;
