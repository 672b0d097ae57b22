use super::*;

#[test]
fn test_insert_apply() {
    let mut rope = RopeBuffer::from("hello");
    let op = EditCommand::insert(5, b" world".to_vec());
    assert_eq!(op.apply(&mut rope), 11);
    assert_eq!(rope.to_bytes(), b"hello world");
}

#[test]
fn test_delete_apply() {
    let mut rope = RopeBuffer::from("hello world");
    let op = EditCommand::delete(5, b" world".to_vec());
    assert_eq!(op.apply(&mut rope), 5);
    assert_eq!(rope.to_bytes(), b"hello");
}

#[test]
fn test_inverse() {
    assert_eq!(CommandKind::Insert.inverse(), CommandKind::Delete);
    assert_eq!(CommandKind::Delete.inverse(), CommandKind::Insert);

    let mut rope = RopeBuffer::new();
    let op = EditCommand::insert(0, b"hello".to_vec());
    op.apply(&mut rope);
    assert_eq!(rope.to_bytes(), b"hello");

    assert_eq!(op.revert(&mut rope), 0);
    assert!(rope.is_empty());
}

#[test]
fn test_revert_delete_reinserts_bytes() {
    let mut rope = RopeBuffer::from("abXYcd");
    let op = EditCommand::delete(2, b"XY".to_vec());
    op.apply(&mut rope);
    assert_eq!(rope.to_bytes(), b"abcd");

    assert_eq!(op.revert(&mut rope), 4);
    assert_eq!(rope.to_bytes(), b"abXYcd");
}

#[test]
fn test_len_and_end() {
    let op = EditCommand::insert(3, "世".as_bytes().to_vec());
    assert_eq!(op.len(), 3);
    assert_eq!(op.end(), 6);
    assert!(!op.is_empty());
    assert!(EditCommand::delete(0, Vec::new()).is_empty());
}
