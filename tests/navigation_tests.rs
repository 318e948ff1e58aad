#![cfg(unix)]

mod common;

use assert_matches::assert_matches;
use common::{base_path, create_test_app, create_test_tree, join};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dir_prompt::dir_cache::{DirectoryCache, DirectoryEntry, DirectoryLister};
use dir_prompt::{InputEvent, NavigationEngine, Outcome, PromptConfig, Status};
use std::cell::Cell;
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_keys(app: &mut dir_prompt::app::App, text: &str) {
    for c in text.chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
}

/// Counts how often the real filesystem is read
struct CountingLister {
    reads: Rc<Cell<usize>>,
}

impl DirectoryLister for CountingLister {
    fn read_entries(&self, dir: &Path) -> io::Result<Vec<DirectoryEntry>> {
        self.reads.set(self.reads.get() + 1);
        dir_prompt::dir_cache::FsLister.read_entries(dir)
    }
}

#[test]
fn test_initial_candidates_are_visible_subdirectories() {
    let temp_dir = create_test_tree();
    let app = create_test_app(&temp_dir);

    assert_eq!(app.engine.candidates(), vec!["docs", "photos", "projects"]);
    assert_eq!(app.engine.state().active_index, 0);
    assert_eq!(app.engine.state().status, Status::Idle);
}

#[test]
fn test_type_complete_and_commit() {
    let temp_dir = create_test_tree();
    let base = base_path(&temp_dir);
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, "proj");
    assert_eq!(app.engine.candidates(), vec!["projects"]);

    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.engine.state().inserted_path, "projects/");
    assert_eq!(app.input.text(), "projects/");
    assert_eq!(app.engine.candidates(), vec!["dir-prompt", "website"]);

    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.outcome(), Some(&Outcome::Committed(join(&base, "projects"))));
}

#[test]
fn test_navigate_into_nested_directories() {
    let temp_dir = create_test_tree();
    let base = base_path(&temp_dir);
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, "pro");
    app.handle_key(press(KeyCode::Tab));
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.engine.state().active_index, 1);

    app.handle_key(press(KeyCode::Up));
    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.engine.state().inserted_path, "projects/dir-prompt/");
    assert_eq!(app.engine.candidates(), vec!["src"]);

    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.engine.state().inserted_path, "projects/dir-prompt/src/");

    app.handle_key(press(KeyCode::Enter));
    assert_eq!(
        app.outcome(),
        Some(&Outcome::Committed(join(&base, "projects/dir-prompt/src")))
    );
}

#[test]
fn test_tab_completes_active_candidate_not_first() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, "p");
    assert_eq!(app.engine.candidates(), vec!["photos", "projects"]);

    app.handle_key(press(KeyCode::Down));
    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.engine.state().inserted_path, "projects/");
    assert_eq!(app.engine.state().active_index, 0);
}

#[test]
fn test_up_wraps_to_last_candidate() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);

    app.handle_key(press(KeyCode::Up));
    assert_eq!(app.engine.state().active_index, 2);
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.engine.state().active_index, 0);
}

#[test]
fn test_editing_resets_active_index() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);

    app.handle_key(press(KeyCode::Down));
    app.handle_key(press(KeyCode::Down));
    type_keys(&mut app, "o");
    assert_eq!(app.engine.state().active_index, 0);
    assert_eq!(app.engine.candidates(), vec!["docs", "photos", "projects"]);
}

#[test]
fn test_tab_without_match_keeps_text() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, "zzz");
    assert!(app.engine.candidates().is_empty());

    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.engine.state().inserted_path, "zzz");
    assert_eq!(app.input.text(), "zzz");
}

#[test]
fn test_commit_does_not_require_existing_path() {
    let temp_dir = create_test_tree();
    let base = base_path(&temp_dir);
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, "new-folder");
    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.outcome(), Some(&Outcome::Committed(join(&base, "new-folder"))));
}

#[test]
fn test_commit_empty_input_yields_base_path() {
    let temp_dir = create_test_tree();
    let base = base_path(&temp_dir);
    let mut app = create_test_app(&temp_dir);

    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.outcome(), Some(&Outcome::Committed(base)));
}

#[test]
fn test_hidden_directories_are_never_offered() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, ".g");
    assert!(app.engine.candidates().is_empty());
}

#[test]
fn test_current_dir_marker_lists_head() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, "photos/.");
    assert_eq!(app.engine.candidates(), vec!["2023", "2024"]);

    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.engine.state().inserted_path, "photos/2023/");
}

#[test]
fn test_parent_marker_is_a_search_term() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, "photos/..");
    assert!(app.engine.candidates().is_empty());
}

#[test]
fn test_missing_directory_has_no_candidates() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, "nowhere/deeper/x");
    assert!(app.engine.candidates().is_empty());
    assert_eq!(app.engine.state().status, Status::Idle);
}

#[test]
fn test_missing_base_path_has_no_candidates() {
    let temp_dir = create_test_tree();
    let missing = temp_dir.path().join("does-not-exist");
    let engine = NavigationEngine::new(
        PromptConfig::new("Select").with_base_path(missing.to_string_lossy().to_string()),
    );
    assert!(engine.candidates().is_empty());
}

#[test]
fn test_caller_filter_hides_entries() {
    let temp_dir = create_test_tree();
    let config = PromptConfig::new("Select")
        .with_base_path(base_path(&temp_dir))
        .with_filter(|entry| entry.name != "docs");
    let engine = NavigationEngine::new(config);

    assert_eq!(engine.candidates(), vec!["photos", "projects"]);
}

#[test]
fn test_each_directory_is_read_once_per_session() {
    let temp_dir = create_test_tree();
    let reads = Rc::new(Cell::new(0));
    let lister = CountingLister {
        reads: Rc::clone(&reads),
    };
    let config = PromptConfig::new("Select").with_base_path(base_path(&temp_dir));
    let mut engine = NavigationEngine::with_cache(config, DirectoryCache::with_lister(lister));
    assert_eq!(reads.get(), 1);

    let mut line = String::new();
    for c in "photos/20".chars() {
        line.push(c);
        engine.apply(InputEvent::Edit(line.clone()));
    }
    assert_eq!(reads.get(), 2);

    engine.apply(InputEvent::Edit("ph".to_string()));
    engine.apply(InputEvent::Edit("photos/".to_string()));
    assert_eq!(reads.get(), 2);
}

#[test]
fn test_listing_is_stale_within_a_session() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);
    assert_eq!(app.engine.candidates().len(), 3);

    fs::create_dir(temp_dir.path().join("downloads")).unwrap();
    type_keys(&mut app, "d");
    assert_eq!(app.engine.candidates(), vec!["docs"]);

    // A new session sees the change
    let fresh = create_test_app(&temp_dir);
    assert_eq!(fresh.engine.candidates(), vec!["docs", "downloads", "photos", "projects"]);
}

#[test]
fn test_escape_cancels_and_discards_text() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, "projects/web");
    app.handle_key(press(KeyCode::Esc));

    assert_eq!(app.outcome(), Some(&Outcome::Cancelled));
    assert!(app.engine.state().inserted_path.is_empty());
}

#[test]
fn test_ctrl_c_cancels() {
    let temp_dir = create_test_tree();
    let mut app = create_test_app(&temp_dir);

    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_matches!(app.engine.state().status, Status::Done(Outcome::Cancelled));
}

#[test]
fn test_cancel_at_any_point() {
    let temp_dir = create_test_tree();

    let prefixes: [&[KeyCode]; 4] = [
        &[],
        &[KeyCode::Char('p')],
        &[KeyCode::Char('p'), KeyCode::Tab],
        &[KeyCode::Down, KeyCode::Down, KeyCode::Tab, KeyCode::Char('x')],
    ];

    for prefix in prefixes {
        let mut app = create_test_app(&temp_dir);
        for code in prefix {
            app.handle_key(press(*code));
        }
        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.outcome(), Some(&Outcome::Cancelled));
    }
}

#[test]
fn test_events_after_commit_are_ignored() {
    let temp_dir = create_test_tree();
    let base = base_path(&temp_dir);
    let mut app = create_test_app(&temp_dir);

    type_keys(&mut app, "docs");
    app.handle_key(press(KeyCode::Enter));
    app.handle_key(press(KeyCode::Esc));
    type_keys(&mut app, "more");

    assert_eq!(app.outcome(), Some(&Outcome::Committed(join(&base, "docs"))));
}
