use notebook_core::{IdAllocator, Note, Notebook};
use std::sync::Arc;

fn fresh_notebook() -> Notebook {
    Notebook::with_allocator(Arc::new(IdAllocator::new()))
}

fn scenario_notebook() -> Notebook {
    let mut notebook = fresh_notebook();
    notebook.new_note("hello world", "");
    notebook.new_note("hello again", "mytag");
    notebook.new_note("ah", "mytag");
    notebook
}

fn memos(notes: &[&Note]) -> Vec<String> {
    notes.iter().map(|note| note.memo().to_string()).collect()
}

#[test]
fn new_note_appends_in_call_order() {
    let mut notebook = fresh_notebook();
    notebook.new_note("hello world", "");
    notebook.new_note("hello again", "");

    assert_eq!(notebook.len(), 2);
    assert_eq!(notebook.notes()[0].memo(), "hello world");
    assert_eq!(notebook.notes()[1].memo(), "hello again");
    assert_eq!(notebook.notes()[1].tags(), "");
}

#[test]
fn ids_are_strictly_increasing() {
    let mut notebook = fresh_notebook();
    for idx in 0..20 {
        notebook.new_note(format!("note {idx}"), "");
    }

    let ids = notebook.notes().iter().map(Note::id).collect::<Vec<_>>();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn consecutive_notes_get_consecutive_ids_from_any_start() {
    let mut notebook = Notebook::with_allocator(Arc::new(IdAllocator::starting_after(99)));
    let first = notebook.new_note("first", "");
    let second = notebook.new_note("second", "");

    assert_eq!(first, 100);
    assert_eq!(second, 101);
}

#[test]
fn notebooks_sharing_an_allocator_never_collide() {
    let ids = Arc::new(IdAllocator::new());
    let mut left = Notebook::with_allocator(Arc::clone(&ids));
    let mut right = Notebook::with_allocator(Arc::clone(&ids));

    let a = left.new_note("a", "");
    let b = right.new_note("b", "");
    let c = left.new_note("c", "");

    assert_eq!((a, b, c), (1, 2, 3));
    assert!(left.lookup(b).is_none());
    assert_eq!(right.lookup(b).map(Note::memo), Some("b"));
}

#[test]
fn search_returns_matches_in_insertion_order() {
    let notebook = scenario_notebook();

    assert_eq!(
        memos(&notebook.search("hello")),
        vec!["hello world", "hello again"]
    );
    assert_eq!(memos(&notebook.search("mytag")), vec!["hello again", "ah"]);
    assert!(notebook.search("zzz").is_empty());
}

#[test]
fn empty_filter_returns_every_note() {
    let notebook = scenario_notebook();
    assert_eq!(notebook.search("").len(), 3);
}

#[test]
fn search_result_matches_substring_predicate() {
    let notebook = scenario_notebook();
    for filter in ["h", "again", "tag", "world", "a", "Hello", " "] {
        let hits = notebook.search(filter);
        for note in notebook.notes() {
            let expected = note.memo().contains(filter) || note.tags().contains(filter);
            let found = hits.iter().any(|hit| hit.id() == note.id());
            assert_eq!(found, expected, "filter `{filter}` note {}", note.id());
        }
    }
}

#[test]
fn lookup_finds_note_by_id() {
    let notebook = scenario_notebook();
    let second_id = notebook.notes()[1].id();

    let note = notebook.lookup(second_id).expect("note should exist");
    assert_eq!(note.memo(), "hello again");
    assert!(notebook.lookup(second_id + 100).is_none());
}

#[test]
fn modify_memo_changes_only_target_note() {
    let mut notebook = scenario_notebook();
    let target = notebook.notes()[0].id();

    assert!(notebook.modify_memo(target, "new memo"));

    assert_eq!(notebook.lookup(target).map(Note::memo), Some("new memo"));
    assert_eq!(notebook.notes()[1].memo(), "hello again");
    assert_eq!(notebook.notes()[2].memo(), "ah");
    assert_eq!(notebook.notes()[0].tags(), "");
}

#[test]
fn modify_tags_changes_only_target_note() {
    let mut notebook = scenario_notebook();
    let target = notebook.notes()[2].id();

    assert!(notebook.modify_tags(target, "new tags"));

    assert_eq!(notebook.lookup(target).map(Note::tags), Some("new tags"));
    assert_eq!(notebook.notes()[2].memo(), "ah");
    assert_eq!(notebook.notes()[1].tags(), "mytag");
    assert_eq!(memos(&notebook.search("new tags")), vec!["ah"]);
}

#[test]
fn modify_unknown_id_is_a_silent_no_op() {
    let mut notebook = scenario_notebook();
    let before = notebook.notes().to_vec();

    assert!(!notebook.modify_memo(9_999, "x"));
    assert!(!notebook.modify_tags(9_999, "x"));

    assert_eq!(notebook.notes(), before.as_slice());
}

#[test]
fn modify_keeps_id_and_creation_date() {
    let mut notebook = scenario_notebook();
    let original = notebook.notes()[1].clone();

    notebook.modify_memo(original.id(), "changed");
    notebook.modify_tags(original.id(), "other");

    let updated = notebook.lookup(original.id()).expect("note should exist");
    assert_eq!(updated.id(), original.id());
    assert_eq!(updated.creation_date(), original.creation_date());
}
