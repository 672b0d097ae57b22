use super::*;

#[test]
fn test_find_all_case_insensitive() {
    let text = b"foo bar foo baz foo";
    assert_eq!(find_all(text, b"foo", false), vec![0, 8, 16]);
    assert_eq!(find_all(b"Foo FOO foo", b"foo", false), vec![0, 4, 8]);
    assert_eq!(find_all(b"Foo FOO foo", b"foo", true), vec![8]);
}

#[test]
fn test_find_all_overlapping_and_edges() {
    assert_eq!(find_all(b"aaaa", b"aa", true), vec![0, 1, 2]);
    assert_eq!(find_all(b"ab", b"abc", false), Vec::<usize>::new());
    assert_eq!(find_all(b"abc", b"", false), Vec::<usize>::new());
    assert_eq!(find_all(b"abc", b"abc", false), vec![0]);
    assert_eq!(find_all("世界世".as_bytes(), "世".as_bytes(), false), vec![0, 6]);
}

#[test]
fn test_update_and_cycle() {
    let mut index = SearchIndex::new();
    let first = index.update("foo", false, b"foo bar foo baz foo", 7);
    assert_eq!(first, Some(0));
    assert_eq!(index.matches(), &[0, 8, 16]);
    assert_eq!(index.match_count(), 3);
    assert_eq!(index.current_match_index(), Some(0));
    assert_eq!(index.version_at_search(), Some(7));

    assert_eq!(index.next_match(), Some(8));
    assert_eq!(index.next_match(), Some(16));
    assert_eq!(index.next_match(), Some(0));

    assert_eq!(index.prev_match(), Some(16));
    assert_eq!(index.prev_match(), Some(8));
}

#[test]
fn test_update_resets_index() {
    let mut index = SearchIndex::new();
    index.update("a", false, b"a a a", 0);
    index.next_match();
    index.next_match();
    assert_eq!(index.current_match(), Some(4));

    index.update("a", false, b"a a a", 1);
    assert_eq!(index.current_match(), Some(0));
}

#[test]
fn test_empty_query_clears_matches() {
    let mut index = SearchIndex::new();
    index.update("x", false, b"xx", 0);
    assert_eq!(index.match_count(), 2);

    assert_eq!(index.update("", false, b"xx", 1), None);
    assert_eq!(index.match_count(), 0);
    assert_eq!(index.current_match_index(), None);
    assert_eq!(index.next_match(), None);
    assert_eq!(index.prev_match(), None);
}

#[test]
fn test_needs_refresh_only_when_version_advanced() {
    let mut index = SearchIndex::new();
    assert!(!index.needs_refresh(0));

    index.open();
    assert!(!index.needs_refresh(0));

    index.update("foo", false, b"foo", 3);
    assert!(!index.needs_refresh(3));
    assert!(index.needs_refresh(4));

    index.close();
    assert!(!index.needs_refresh(4));
    assert_eq!(index.match_count(), 0);
    assert_eq!(index.query(), "foo");
}

#[test]
fn test_query_is_bounded() {
    let mut index = SearchIndex::with_query_max(4);
    assert!(index.push_query('a'));
    assert!(index.push_query('世'));
    assert!(!index.push_query('b'));
    assert_eq!(index.query(), "a世");

    assert!(index.pop_query());
    assert_eq!(index.query(), "a");

    // 截断不会切开多字节字符
    assert!(index.set_query("ab世界"));
    assert_eq!(index.query(), "ab");
    assert!(!index.set_query("ab"));

    assert!(index.pop_query());
    assert!(index.pop_query());
    assert!(!index.pop_query());
}

#[test]
fn test_toggle_case() {
    let mut index = SearchIndex::new();
    assert!(!index.case_sensitive());
    assert!(index.toggle_case_sensitive());
    assert!(!index.toggle_case_sensitive());
}

#[test]
fn test_editor_search_moves_cursor() {
    let mut editor = TextEditorCore::from_bytes(b"foo bar foo baz foo");
    editor.set_cursor(5);

    editor.search_open();
    assert!(editor.search().is_active());
    assert!(editor.search_set_query("FOO"));
    assert_eq!(editor.cursor(), 0);

    assert!(editor.search_next());
    assert_eq!(editor.cursor(), 8);
    assert!(editor.search_prev());
    assert_eq!(editor.cursor(), 0);
    assert!(editor.search_prev());
    assert_eq!(editor.cursor(), 16);

    assert!(!editor.search_toggle_case());
    assert_eq!(editor.search().match_count(), 0);
    assert!(!editor.search_next());
}

#[test]
fn test_editor_search_incremental_input() {
    let mut editor = TextEditorCore::from_bytes(b"alpha beta alphabet");
    editor.search_open();
    editor.search_push_char('b');
    assert_eq!(editor.search().matches(), &[6, 16]);
    editor.search_push_char('e');
    assert_eq!(editor.search().matches(), &[6, 16]);
    editor.search_push_char('t');
    assert_eq!(editor.search().matches(), &[6, 16]);
    editor.search_push_char('a');
    assert_eq!(editor.search().matches(), &[6]);

    editor.search_pop_char();
    assert_eq!(editor.search().query(), "bet");
    assert_eq!(editor.search().match_count(), 2);
}

#[test]
fn test_editor_refresh_after_edit() {
    let mut editor = TextEditorCore::from_bytes(b"foo");
    editor.search_open();
    editor.search_set_query("foo");
    assert_eq!(editor.search().match_count(), 1);
    assert!(!editor.refresh_search());

    editor.move_buffer_end(false);
    editor.insert_text(b" foo");
    assert!(editor.search().needs_refresh(editor.version()));
    assert!(editor.refresh_search());
    assert_eq!(editor.search().matches(), &[0, 4]);
    assert_eq!(editor.cursor(), 0);
    assert!(!editor.refresh_search());

    editor.search_close();
    editor.insert_text(b"x");
    assert!(!editor.refresh_search());
}

#[test]
fn test_close_forgets_scanned_version() {
    let mut index = SearchIndex::new();
    index.open();
    index.update("foo", false, b"foo", 2);
    index.close();
    assert_eq!(index.version_at_search(), None);

    index.open();
    assert!(index.needs_refresh(2));
}

#[test]
fn test_reopen_restores_matches() {
    let mut editor = TextEditorCore::from_bytes(b"foo bar foo");
    editor.search_open();
    editor.search_set_query("foo");
    assert_eq!(editor.search().match_count(), 2);

    editor.search_close();
    assert_eq!(editor.search().match_count(), 0);
    editor.set_cursor(5);

    editor.search_open();
    assert_eq!(editor.search().query(), "foo");
    assert_eq!(editor.search().matches(), &[0, 8]);
    assert_eq!(editor.cursor(), 0);
    assert!(editor.search_next());
    assert_eq!(editor.cursor(), 8);
}
