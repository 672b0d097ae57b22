use super::*;

fn insert(log: &mut EditCommandLog, rope: &mut RopeBuffer, pos: usize, text: &str) {
    rope.insert(pos, text.as_bytes());
    log.push(CommandKind::Insert, pos, text.as_bytes().to_vec());
}

#[test]
fn test_undo_redo() {
    let mut rope = RopeBuffer::from("hello");
    let mut log = EditCommandLog::new();

    insert(&mut log, &mut rope, 5, " world");
    assert!(log.can_undo());
    assert!(!log.can_redo());

    assert_eq!(log.undo(&mut rope), Some(5));
    assert_eq!(rope.to_bytes(), b"hello");
    assert!(!log.can_undo());
    assert!(log.can_redo());

    assert_eq!(log.redo(&mut rope), Some(11));
    assert_eq!(rope.to_bytes(), b"hello world");
    assert_eq!(log.undo_len(), 1);
    assert_eq!(log.redo_len(), 0);
}

#[test]
fn test_undo_delete_restores_bytes_and_cursor() {
    let mut rope = RopeBuffer::from("hello world");
    let mut log = EditCommandLog::new();

    let removed = rope.copy(5, 6);
    rope.delete(5, 6);
    log.push(CommandKind::Delete, 5, removed);

    assert_eq!(log.undo(&mut rope), Some(11));
    assert_eq!(rope.to_bytes(), b"hello world");

    assert_eq!(log.redo(&mut rope), Some(5));
    assert_eq!(rope.to_bytes(), b"hello");
}

#[test]
fn test_empty_stacks_are_noops() {
    let mut rope = RopeBuffer::from("abc");
    let mut log = EditCommandLog::new();
    assert_eq!(log.undo(&mut rope), None);
    assert_eq!(log.redo(&mut rope), None);
    assert_eq!(rope.to_bytes(), b"abc");
}

#[test]
fn test_push_clears_redo() {
    let mut rope = RopeBuffer::new();
    let mut log = EditCommandLog::new();

    insert(&mut log, &mut rope, 0, "a");
    insert(&mut log, &mut rope, 1, "b");
    log.undo(&mut rope);
    assert_eq!(log.redo_len(), 1);

    insert(&mut log, &mut rope, 1, "c");
    assert_eq!(log.redo_len(), 0);
    assert_eq!(rope.to_bytes(), b"ac");
}

#[test]
fn test_empty_push_is_ignored() {
    let mut log = EditCommandLog::new();
    log.push(CommandKind::Insert, 0, Vec::new());
    assert_eq!(log.undo_len(), 0);
}

#[test]
fn test_cap_evicts_oldest_first() {
    let mut rope = RopeBuffer::new();
    let mut log = EditCommandLog::new();
    assert_eq!(log.max_undo(), DEFAULT_MAX_UNDO);

    for i in 0..1005 {
        let pos = rope.len();
        rope.insert(pos, b"x");
        log.push(CommandKind::Insert, pos, vec![b'x']);
        assert!(log.undo_len() <= 1000, "push {}", i);
    }

    assert_eq!(log.undo_len(), 1000);
    // 前 5 条已被丢弃
    assert_eq!(log.oldest().map(|c| c.pos), Some(5));

    while log.undo(&mut rope).is_some() {}
    assert_eq!(rope.len(), 5);
}

#[test]
fn test_custom_cap() {
    let mut rope = RopeBuffer::new();
    let mut log = EditCommandLog::with_max_undo(2);
    for text in ["a", "b", "c"] {
        let pos = rope.len();
        insert(&mut log, &mut rope, pos, text);
    }
    assert_eq!(log.undo_len(), 2);
    log.undo(&mut rope);
    log.undo(&mut rope);
    assert_eq!(rope.to_bytes(), b"a");
    assert!(!log.can_undo());
}

#[test]
fn test_clear() {
    let mut rope = RopeBuffer::new();
    let mut log = EditCommandLog::new();
    insert(&mut log, &mut rope, 0, "a");
    log.undo(&mut rope);
    insert(&mut log, &mut rope, 0, "b");
    log.clear();
    assert!(!log.can_undo());
    assert!(!log.can_redo());
}
