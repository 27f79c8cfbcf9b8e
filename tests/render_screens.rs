mod harness;

use std::time::Instant;

use harness::fixtures;
use harness::{create_test_state, create_test_terminal, render_to_lines, render_to_string};

use couchrep::app::action::Action;
use couchrep::app::database_list::LoadStatus;
use couchrep::app::input_mode::InputMode;
use couchrep::app::reducer::reduce;
use couchrep::app::screen::Screen;
use couchrep::domain::{BookmarkDraft, SortKey};

#[test]
fn initial_replicator_screen() {
    let state = create_test_state();
    let mut terminal = create_test_terminal();

    let lines = render_to_lines(&mut terminal, &state);

    insta::assert_snapshot!(lines[0], @"couchrep | http://127.0.0.1:5984 | admin | not loaded");
    assert!(lines[2].contains("Replicator"));
    assert!(lines[4].contains("▸ Replication Source"));
    assert!(lines[4].contains("‹ none ›"));
}

#[test]
fn footer_hints_follow_screen() {
    let mut state = create_test_state();
    state.screen = Screen::Activity;
    let mut terminal = create_test_terminal();

    let lines = render_to_lines(&mut terminal, &state);

    insta::assert_snapshot!(lines[29], @"j/k Select  r Refresh  ? Help  q Quit");
}

#[test]
fn error_message_replaces_footer_hints() {
    let mut state = create_test_state();
    reduce(
        &mut state,
        Action::ReplicationFailed("unauthorized".to_string()),
        Instant::now(),
    );
    let mut terminal = create_test_terminal();

    let lines = render_to_lines(&mut terminal, &state);

    insta::assert_snapshot!(lines[29], @"✗ Failed to start the replication: unauthorized");
}

#[test]
fn bookmark_table_second_page() {
    let mut state = create_test_state();
    let now = Instant::now();
    reduce(
        &mut state,
        Action::InitBookmarks {
            bookmarks: fixtures::sample_bookmarks(25),
            page: Some(1),
        },
        now,
    );
    reduce(&mut state, Action::SwitchScreen(Screen::Bookmarks), now);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    assert!(output.contains("Showing 21 - 25 of 25 bookmarks  page 2/2"));
    assert!(output.contains("db20"));
    assert!(!output.contains("db19"));
    assert!(output.contains("Database ▲"));
}

#[test]
fn bookmark_table_sorted_by_host_descending() {
    let mut state = create_test_state();
    let now = Instant::now();
    reduce(
        &mut state,
        Action::InitBookmarks {
            bookmarks: fixtures::sample_bookmarks(3),
            page: None,
        },
        now,
    );
    reduce(&mut state, Action::SwitchScreen(Screen::Bookmarks), now);
    reduce(&mut state, Action::SortBookmarks(SortKey::Host), now);
    reduce(&mut state, Action::SortBookmarks(SortKey::Host), now);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    assert!(output.contains("Remote URL ▼"));
    let first = output.find("replica2").unwrap();
    let last = output.find("replica0").unwrap();
    assert!(first < last);
}

#[test]
fn empty_bookmark_table() {
    let mut state = create_test_state();
    state.screen = Screen::Bookmarks;
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    assert!(output.contains("No bookmarks available"));
}

#[test]
fn bookmark_form_overlay() {
    let mut state = create_test_state();
    let now = Instant::now();
    reduce(&mut state, Action::SwitchScreen(Screen::Bookmarks), now);
    reduce(&mut state, Action::FocusBookmark(BookmarkDraft::default()), now);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    assert_eq!(state.input_mode, InputMode::BookmarkForm);
    assert!(output.contains("New bookmark"));
    assert!(output.contains("▸ Remote Host"));
    assert!(output.contains("Enter save  Esc cancel"));
}

#[test]
fn advanced_form_lists_discovered_filters() {
    let mut state = create_test_state();
    let now = Instant::now();
    state.databases.names = vec!["orders".to_string()];
    state.databases.status = LoadStatus::Loaded;
    reduce(&mut state, Action::SwitchScreen(Screen::Advanced), now);
    reduce(&mut state, Action::SetSourceDatabase("orders".to_string()), now);
    reduce(
        &mut state,
        Action::FilterFunctionsLoaded {
            database: "orders".to_string(),
            filters: fixtures::sample_filters(),
        },
        now,
    );
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    assert!(output.contains("Source"));
    assert!(output.contains("Target"));
    assert!(output.contains("2 available"));
}

#[test]
fn advanced_form_discovery_in_flight() {
    let mut state = create_test_state();
    let now = Instant::now();
    state.databases.names = vec!["orders".to_string()];
    state.databases.status = LoadStatus::Loaded;
    reduce(&mut state, Action::SwitchScreen(Screen::Advanced), now);
    reduce(&mut state, Action::SetSourceDatabase("orders".to_string()), now);
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    assert!(output.contains("◐ discovering filters"));
}

#[test]
fn activity_shows_only_replications() {
    let mut state = create_test_state();
    let now = Instant::now();
    reduce(&mut state, Action::SwitchScreen(Screen::Activity), now);
    reduce(
        &mut state,
        Action::ActiveTasksLoaded(fixtures::sample_tasks()),
        now,
    );
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    assert!(output.contains("orders-copy"));
    assert!(output.contains("continuous"));
    assert!(output.contains("1m 30s"));
    assert!(!output.contains("indexer"));
}

#[test]
fn help_overlay_on_top() {
    let mut state = create_test_state();
    reduce(&mut state, Action::ToggleHelp, Instant::now());
    let mut terminal = create_test_terminal();

    let output = render_to_string(&mut terminal, &state);

    assert!(output.contains("=== Global ==="));
    assert!(output.contains("? or Esc to close"));
}
