//! Rope 节点：AVL 平衡的二叉树
//!
//! - 叶子直接持有一段字节，长度不超过容量上限
//! - 内部节点记录高度和 weight（左子树字节总数）
//! - 每个节点由父节点独占（`Box`），整棵树随根节点一起释放
//!
//! 所有结构变更都经过 `join`：它按高度差沿较高一侧下降，
//! 挂接后在回溯路径上做单/双旋转，因此任意高度差的两棵子树都能拼成平衡树。

use memchr::{memchr, memchr_iter, memrchr};

#[derive(Clone, Debug)]
pub(crate) enum RopeNode {
    Leaf(Vec<u8>),
    Internal(Internal),
}

#[derive(Clone, Debug)]
pub(crate) struct Internal {
    left: Box<RopeNode>,
    right: Box<RopeNode>,
    height: usize,
    weight: usize,
}

impl RopeNode {
    pub(crate) fn leaf(bytes: Vec<u8>) -> Box<RopeNode> {
        Box::new(RopeNode::Leaf(bytes))
    }

    pub(crate) fn internal(left: Box<RopeNode>, right: Box<RopeNode>) -> Box<RopeNode> {
        let height = 1 + left.height().max(right.height());
        let weight = left.len();
        Box::new(RopeNode::Internal(Internal {
            left,
            right,
            height,
            weight,
        }))
    }

    pub(crate) fn height(&self) -> usize {
        match self {
            RopeNode::Leaf(_) => 1,
            RopeNode::Internal(node) => node.height,
        }
    }

    /// 子树字节总数：weight + 右子树长度（沿右脊下降）
    pub(crate) fn len(&self) -> usize {
        match self {
            RopeNode::Leaf(bytes) => bytes.len(),
            RopeNode::Internal(node) => node.weight + node.right.len(),
        }
    }

    fn balance_factor(&self) -> isize {
        match self {
            RopeNode::Leaf(_) => 0,
            RopeNode::Internal(node) => {
                node.left.height() as isize - node.right.height() as isize
            }
        }
    }

    pub(crate) fn leaf_count(&self) -> usize {
        match self {
            RopeNode::Leaf(_) => 1,
            RopeNode::Internal(node) => node.left.leaf_count() + node.right.leaf_count(),
        }
    }

    // ==================== 构建 ====================

    /// 从字节串构建平衡子树：超过容量时在容量对齐的位置对半切分
    pub(crate) fn build(bytes: &[u8], capacity: usize) -> Option<Box<RopeNode>> {
        if bytes.is_empty() {
            return None;
        }
        if bytes.len() <= capacity {
            return Some(RopeNode::leaf(bytes.to_vec()));
        }

        let mut mid = (bytes.len() / 2) / capacity * capacity;
        if mid == 0 {
            mid = capacity;
        }

        let left = RopeNode::build(&bytes[..mid], capacity);
        let right = RopeNode::build(&bytes[mid..], capacity);
        join_opt(left, right)
    }

    // ==================== 编辑 ====================

    /// 在 `pos` 处插入；`pos` 必须已被调用方限制在 `[0, len]`
    pub(crate) fn insert(
        self: Box<RopeNode>,
        pos: usize,
        bytes: &[u8],
        capacity: usize,
    ) -> Box<RopeNode> {
        match *self {
            RopeNode::Leaf(mut data) => {
                let pos = pos.min(data.len());
                if data.len() + bytes.len() <= capacity {
                    data.splice(pos..pos, bytes.iter().copied());
                    return RopeNode::leaf(data);
                }

                // 叶子放不下：拆成左右两片，中间挂新文本子树
                let tail = data.split_off(pos);
                let head = (!data.is_empty()).then(|| RopeNode::leaf(data));
                let tail = (!tail.is_empty()).then(|| RopeNode::leaf(tail));
                let middle = RopeNode::build(bytes, capacity);

                join_opt(join_opt(head, middle), tail)
                    .unwrap_or_else(|| RopeNode::leaf(Vec::new()))
            }
            RopeNode::Internal(Internal {
                left,
                right,
                weight,
                ..
            }) => {
                if pos <= weight {
                    join(left.insert(pos, bytes, capacity), right)
                } else {
                    join(left, right.insert(pos - weight, bytes, capacity))
                }
            }
        }
    }

    /// 删除 `[pos, pos + len)`，超出末尾的部分被截断；子树被删空时返回 None
    pub(crate) fn delete(
        self: Box<RopeNode>,
        pos: usize,
        len: usize,
        capacity: usize,
    ) -> Option<Box<RopeNode>> {
        if len == 0 {
            return Some(self);
        }

        match *self {
            RopeNode::Leaf(mut data) => {
                if pos >= data.len() {
                    return Some(RopeNode::leaf(data));
                }
                let end = pos.saturating_add(len).min(data.len());
                data.drain(pos..end);
                (!data.is_empty()).then(|| RopeNode::leaf(data))
            }
            RopeNode::Internal(Internal {
                left,
                right,
                weight,
                ..
            }) => {
                let (left, right) = if pos < weight {
                    let left_len = len.min(weight - pos);
                    let left = left.delete(pos, left_len, capacity);
                    let right = if len > left_len {
                        right.delete(0, len - left_len, capacity)
                    } else {
                        Some(right)
                    };
                    (left, right)
                } else {
                    (Some(left), right.delete(pos - weight, len, capacity))
                };

                // 只剩一个孩子时直接上提，两片小叶子能放进一个叶子时合并
                match (left, right) {
                    (Some(l), Some(r)) => Some(merge_small_leaves(l, r, capacity)),
                    (Some(l), None) => Some(l),
                    (None, Some(r)) => Some(r),
                    (None, None) => None,
                }
            }
        }
    }

    // ==================== 读取 ====================

    /// 从 `pos` 起最多拷贝 `len` 字节到 `out`，返回实际拷贝数
    pub(crate) fn copy_into(&self, pos: usize, len: usize, out: &mut Vec<u8>) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            RopeNode::Leaf(data) => {
                if pos >= data.len() {
                    return 0;
                }
                let end = pos.saturating_add(len).min(data.len());
                out.extend_from_slice(&data[pos..end]);
                end - pos
            }
            RopeNode::Internal(node) => {
                if pos < node.weight {
                    let copied = node.left.copy_into(pos, len, out);
                    if copied < len {
                        copied + node.right.copy_into(0, len - copied, out)
                    } else {
                        copied
                    }
                } else {
                    node.right.copy_into(pos - node.weight, len, out)
                }
            }
        }
    }

    pub(crate) fn byte_at(&self, pos: usize) -> Option<u8> {
        let mut node = self;
        let mut pos = pos;
        loop {
            match node {
                RopeNode::Leaf(data) => return data.get(pos).copied(),
                RopeNode::Internal(inner) => {
                    if pos < inner.weight {
                        node = &*inner.left;
                    } else {
                        pos -= inner.weight;
                        node = &*inner.right;
                    }
                }
            }
        }
    }

    /// 第一个 `>= from` 的 `needle` 位置
    pub(crate) fn find_byte(&self, needle: u8, from: usize) -> Option<usize> {
        match self {
            RopeNode::Leaf(data) => {
                let slice = data.get(from..)?;
                memchr(needle, slice).map(|i| i + from)
            }
            RopeNode::Internal(node) => {
                if from < node.weight {
                    node.left.find_byte(needle, from).or_else(|| {
                        node.right
                            .find_byte(needle, 0)
                            .map(|i| i + node.weight)
                    })
                } else {
                    node.right
                        .find_byte(needle, from - node.weight)
                        .map(|i| i + node.weight)
                }
            }
        }
    }

    /// 最后一个 `< end` 的 `needle` 位置
    pub(crate) fn rfind_byte(&self, needle: u8, end: usize) -> Option<usize> {
        match self {
            RopeNode::Leaf(data) => memrchr(needle, &data[..end.min(data.len())]),
            RopeNode::Internal(node) => {
                if end > node.weight {
                    node.right
                        .rfind_byte(needle, end - node.weight)
                        .map(|i| i + node.weight)
                        .or_else(|| node.left.rfind_byte(needle, node.weight))
                } else {
                    node.left.rfind_byte(needle, end)
                }
            }
        }
    }

    /// `[0, end)` 内 `needle` 出现次数
    pub(crate) fn count_byte(&self, needle: u8, end: usize) -> usize {
        match self {
            RopeNode::Leaf(data) => memchr_iter(needle, &data[..end.min(data.len())]).count(),
            RopeNode::Internal(node) => {
                if end > node.weight {
                    node.left.count_byte(needle, node.weight)
                        + node.right.count_byte(needle, end - node.weight)
                } else {
                    node.left.count_byte(needle, end)
                }
            }
        }
    }

    pub(crate) fn children(&self) -> Option<(&RopeNode, &RopeNode)> {
        match self {
            RopeNode::Leaf(_) => None,
            RopeNode::Internal(node) => Some((&*node.left, &*node.right)),
        }
    }

    /// 校验结构不变量，返回子树长度；违反时返回 Err(描述)
    pub(crate) fn validate(&self, capacity: usize) -> Result<usize, String> {
        match self {
            RopeNode::Leaf(data) => {
                if data.is_empty() {
                    return Err("empty leaf".to_string());
                }
                if data.len() > capacity {
                    return Err(format!("leaf of {} bytes exceeds {}", data.len(), capacity));
                }
                Ok(data.len())
            }
            RopeNode::Internal(node) => {
                let left_len = node.left.validate(capacity)?;
                let right_len = node.right.validate(capacity)?;
                if node.weight != left_len {
                    return Err(format!("weight {} != left length {}", node.weight, left_len));
                }
                let expected = 1 + node.left.height().max(node.right.height());
                if node.height != expected {
                    return Err(format!("height {} != {}", node.height, expected));
                }
                if self.balance_factor().abs() > 1 {
                    return Err(format!("unbalanced node: {}", self.balance_factor()));
                }
                Ok(left_len + right_len)
            }
        }
    }
}

// ==================== 平衡 ====================

fn rotate_right(node: Box<RopeNode>) -> Box<RopeNode> {
    match *node {
        RopeNode::Internal(Internal { left, right, .. }) => match *left {
            RopeNode::Internal(Internal {
                left: a, right: b, ..
            }) => RopeNode::internal(a, RopeNode::internal(b, right)),
            leaf => RopeNode::internal(Box::new(leaf), right),
        },
        leaf => Box::new(leaf),
    }
}

fn rotate_left(node: Box<RopeNode>) -> Box<RopeNode> {
    match *node {
        RopeNode::Internal(Internal { left, right, .. }) => match *right {
            RopeNode::Internal(Internal {
                left: b, right: c, ..
            }) => RopeNode::internal(RopeNode::internal(left, b), c),
            leaf => RopeNode::internal(left, Box::new(leaf)),
        },
        leaf => Box::new(leaf),
    }
}

/// 按左右高度差选择单旋或双旋
fn balance(node: Box<RopeNode>) -> Box<RopeNode> {
    let factor = node.balance_factor();
    if (-1..=1).contains(&factor) {
        return node;
    }

    match *node {
        RopeNode::Internal(Internal { left, right, .. }) if factor > 1 => {
            let left = if left.balance_factor() < 0 {
                rotate_left(left)
            } else {
                left
            };
            rotate_right(RopeNode::internal(left, right))
        }
        RopeNode::Internal(Internal { left, right, .. }) => {
            let right = if right.balance_factor() > 0 {
                rotate_right(right)
            } else {
                right
            };
            rotate_left(RopeNode::internal(left, right))
        }
        leaf => Box::new(leaf),
    }
}

/// 拼接两棵平衡子树（左在前），结果仍满足 AVL 约束
pub(crate) fn join(left: Box<RopeNode>, right: Box<RopeNode>) -> Box<RopeNode> {
    let (hl, hr) = (left.height(), right.height());

    if hl > hr + 1 {
        return match *left {
            RopeNode::Internal(Internal {
                left: ll,
                right: lr,
                ..
            }) => balance(RopeNode::internal(ll, join(lr, right))),
            leaf => RopeNode::internal(Box::new(leaf), right),
        };
    }

    if hr > hl + 1 {
        return match *right {
            RopeNode::Internal(Internal {
                left: rl,
                right: rr,
                ..
            }) => balance(RopeNode::internal(join(left, rl), rr)),
            leaf => RopeNode::internal(left, Box::new(leaf)),
        };
    }

    RopeNode::internal(left, right)
}

pub(crate) fn join_opt(
    left: Option<Box<RopeNode>>,
    right: Option<Box<RopeNode>>,
) -> Option<Box<RopeNode>> {
    match (left, right) {
        (Some(l), Some(r)) => Some(join(l, r)),
        (l, None) => l,
        (None, r) => r,
    }
}

fn merge_small_leaves(
    left: Box<RopeNode>,
    right: Box<RopeNode>,
    capacity: usize,
) -> Box<RopeNode> {
    match (*left, *right) {
        (RopeNode::Leaf(mut a), RopeNode::Leaf(b)) if a.len() + b.len() <= capacity => {
            a.extend_from_slice(&b);
            RopeNode::leaf(a)
        }
        (l, r) => join(Box::new(l), Box::new(r)),
    }
}
