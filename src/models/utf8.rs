//! UTF-8 字节边界工具
//!
//! 所有偏移都是字节偏移。边界 = 不是续字节（10xxxxxx）的字节之前的位置。

pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

#[inline]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// 由首字节推断字符长度，非法首字节按 1 字节处理
#[inline]
pub fn char_len(lead: u8) -> usize {
    if lead & 0x80 == 0 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else if lead & 0xF8 == 0xF0 {
        4
    } else {
        1
    }
}

/// 可按偏移逐字节读取的文本：字节切片和 rope 共用同一套边界算法
pub trait ByteSource {
    fn byte_len(&self) -> usize;

    fn byte_at(&self, pos: usize) -> Option<u8>;

    fn is_continuation_at(&self, pos: usize) -> bool {
        self.byte_at(pos).is_some_and(is_continuation)
    }
}

impl ByteSource for [u8] {
    fn byte_len(&self) -> usize {
        self.len()
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.get(pos).copied()
    }
}

/// 前一个字符边界；`pos == 0` 时返回 0
pub fn prev_boundary<S: ByteSource + ?Sized>(text: &S, pos: usize) -> usize {
    let mut pos = pos.min(text.byte_len());
    if pos == 0 {
        return 0;
    }
    pos -= 1;
    while pos > 0 && text.is_continuation_at(pos) {
        pos -= 1;
    }
    pos
}

/// 后一个字符边界；已在末尾时返回文本长度
pub fn next_boundary<S: ByteSource + ?Sized>(text: &S, pos: usize) -> usize {
    let len = text.byte_len();
    if pos >= len {
        return len;
    }
    let mut pos = pos + 1;
    while pos < len && text.is_continuation_at(pos) {
        pos += 1;
    }
    pos
}

/// 把偏移截断到文本长度内，再向前吸附到最近的边界（不越过 0）
pub fn snap_to_boundary<S: ByteSource + ?Sized>(text: &S, pos: usize) -> usize {
    let len = text.byte_len();
    let mut pos = pos.min(len);
    while pos > 0 && pos < len && text.is_continuation_at(pos) {
        pos -= 1;
    }
    pos
}

pub fn is_boundary<S: ByteSource + ?Sized>(text: &S, pos: usize) -> bool {
    pos == 0 || pos >= text.byte_len() || !text.is_continuation_at(pos)
}

/// 解码单个字符，返回 (char, 消耗字节数)
///
/// 非法序列产生一个 U+FFFD 并只消耗 1 字节，调用方从下一字节继续扫描。
pub fn decode_at(bytes: &[u8], pos: usize) -> Option<(char, usize)> {
    let lead = *bytes.get(pos)?;
    let len = char_len(lead);
    if len == 1 {
        if lead & 0x80 == 0 {
            return Some((lead as char, 1));
        }
        return Some((REPLACEMENT_CHAR, 1));
    }

    let Some(seq) = bytes.get(pos..pos + len) else {
        return Some((REPLACEMENT_CHAR, 1));
    };
    if !seq[1..].iter().all(|&b| is_continuation(b)) {
        return Some((REPLACEMENT_CHAR, 1));
    }

    let mut code = match len {
        2 => (lead & 0x1F) as u32,
        3 => (lead & 0x0F) as u32,
        _ => (lead & 0x07) as u32,
    };
    for &b in &seq[1..] {
        code = (code << 6) | (b & 0x3F) as u32;
    }

    match char::from_u32(code) {
        Some(c) => Some((c, len)),
        None => Some((REPLACEMENT_CHAR, 1)),
    }
}

/// 宽松解码：非法字节替换为 U+FFFD，从不失败
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut pos = 0;
    while let Some((c, used)) = decode_at(bytes, pos) {
        out.push(c);
        pos += used;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/models/utf8.rs"]
mod tests;
