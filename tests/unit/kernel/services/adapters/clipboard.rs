use super::*;

#[test]
fn test_memory_clipboard_roundtrip() {
    let mut clipboard = MemoryClipboard::new();
    assert!(clipboard.is_empty());
    assert_eq!(clipboard.get(), None);

    clipboard.set(b"hello".to_vec()).unwrap();
    assert!(!clipboard.is_empty());
    assert_eq!(clipboard.get(), Some(b"hello".to_vec()));
    // 读取不消耗内容
    assert_eq!(clipboard.get(), Some(b"hello".to_vec()));

    clipboard.clear();
    assert_eq!(clipboard.get(), None);
}

#[test]
fn test_with_content() {
    let clipboard = MemoryClipboard::with_content("世界");
    assert_eq!(clipboard.get(), Some("世界".as_bytes().to_vec()));
}

#[test]
fn test_oversized_content_is_rejected() {
    let mut clipboard = MemoryClipboard::with_content("keep");
    let err = clipboard.set(vec![b'x'; COPY_MAX_SIZE + 1]).unwrap_err();
    assert_eq!(err, ClipboardError::TooLarge(COPY_MAX_SIZE + 1));
    assert_eq!(clipboard.get(), Some(b"keep".to_vec()));
}
