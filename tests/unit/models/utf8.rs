use super::*;

#[test]
fn test_char_len() {
    assert_eq!(char_len(b'a'), 1);
    assert_eq!(char_len("é".as_bytes()[0]), 2);
    assert_eq!(char_len("世".as_bytes()[0]), 3);
    assert_eq!(char_len("🌍".as_bytes()[0]), 4);
    assert_eq!(char_len(0x80), 1);
    assert_eq!(char_len(0xFF), 1);
}

#[test]
fn test_prev_next_boundary_cjk() {
    let text = "Hello 世界".as_bytes();
    assert_eq!(text.len(), 12);

    assert_eq!(prev_boundary(text, 12), 9);
    assert_eq!(prev_boundary(text, 9), 6);
    assert_eq!(prev_boundary(text, 6), 5);
    assert_eq!(prev_boundary(text, 0), 0);

    assert_eq!(next_boundary(text, 5), 6);
    assert_eq!(next_boundary(text, 6), 9);
    assert_eq!(next_boundary(text, 9), 12);
    assert_eq!(next_boundary(text, 12), 12);
}

#[test]
fn test_boundaries_emoji() {
    let text = "a🌍b".as_bytes();
    assert_eq!(next_boundary(text, 1), 5);
    assert_eq!(prev_boundary(text, 5), 1);
    assert!(!is_boundary(text, 2));
    assert_eq!(snap_to_boundary(text, 3), 1);
    assert_eq!(snap_to_boundary(text, 99), text.len());
}

#[test]
fn test_decode_lossy_valid() {
    let text = "Café ☕ 日本語";
    assert_eq!(decode_lossy(text.as_bytes()), text);
}

#[test]
fn test_decode_lossy_replaces_invalid_bytes() {
    let bytes = [b'a', 0xFF, b'b', 0xE4, 0xB8, b'c'];
    assert_eq!(decode_lossy(&bytes), "a\u{FFFD}b\u{FFFD}\u{FFFD}c");
}

#[test]
fn test_decode_truncated_sequence_at_end() {
    let bytes = [b'x', 0xF0, 0x9F];
    assert_eq!(decode_lossy(&bytes), "x\u{FFFD}\u{FFFD}");
}

#[test]
fn test_decode_at() {
    let bytes = "世".as_bytes();
    assert_eq!(decode_at(bytes, 0), Some(('世', 3)));
    assert_eq!(decode_at(bytes, 3), None);
}

#[test]
fn test_boundaries_agree_between_slice_and_rope() {
    use crate::models::RopeBuffer;

    let text = "a世🌍é\nb界".as_bytes();
    // 容量 2 让多字节字符跨越叶子
    let rope = RopeBuffer::from_bytes_with_capacity(text, 2);
    assert_eq!(rope.byte_len(), text.len());

    for pos in 0..=text.len() + 2 {
        assert_eq!(prev_boundary(&rope, pos), prev_boundary(text, pos), "prev {pos}");
        assert_eq!(next_boundary(&rope, pos), next_boundary(text, pos), "next {pos}");
        assert_eq!(snap_to_boundary(&rope, pos), snap_to_boundary(text, pos), "snap {pos}");
        assert_eq!(is_boundary(&rope, pos), is_boundary(text, pos), "is {pos}");
    }
}
