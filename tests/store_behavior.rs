// Collection behavior driven through the session boundary: index commands,
// search, and the guarantees around failed commands leaving state intact.

use tally::context::{AppContext, TestContext};
use tally::error::TallyError;
use tally::session::{Response, Session};
use tally::storage::Storage;

fn fresh_session() -> (Session, TestContext) {
    let ctx = TestContext::new();
    let (session, _) = Session::open(Storage::new(ctx.get_task_file_path().unwrap()));
    (session, ctx)
}

#[test]
fn mark_then_unmark_restores_original_state() {
    let (mut session, _ctx) = fresh_session();
    session.handle("todo read book").unwrap();
    assert!(!session.store().as_slice()[0].is_done());

    session.handle("mark 1").unwrap();
    assert!(session.store().as_slice()[0].is_done());

    session.handle("unmark 1").unwrap();
    assert!(!session.store().as_slice()[0].is_done());
}

#[test]
fn delete_removes_exactly_one_and_shifts() {
    let (mut session, _ctx) = fresh_session();
    session.handle("todo a").unwrap();
    session.handle("todo b").unwrap();
    session.handle("todo c").unwrap();

    let response = session.handle("delete 2").unwrap();
    assert_eq!(
        response,
        Response::Removed {
            rendered: "[T][ ][P:M] b".to_string(),
            total: 2
        }
    );
    let tasks = session.store().as_slice();
    assert_eq!(tasks[0].description(), "a");
    assert_eq!(tasks[1].description(), "c");
}

#[test]
fn find_matches_case_insensitively_in_order() {
    let (mut session, _ctx) = fresh_session();
    session.handle("todo Read Book").unwrap();
    session.handle("todo walk dog").unwrap();
    session.handle("deadline return book /by 2025-12-31").unwrap();

    match session.handle("find BOOK").unwrap() {
        Response::Found(matches) => {
            assert_eq!(matches.len(), 2);
            assert!(matches[0].contains("Read Book"));
            assert!(matches[1].contains("return book"));
        }
        other => panic!("expected Found, got {:?}", other),
    }
}

#[test]
fn find_without_matches_says_so_instead_of_an_empty_header() {
    let (mut session, _ctx) = fresh_session();
    session.handle("todo walk dog").unwrap();

    let lines = session.handle("find book").unwrap().lines();
    assert_eq!(lines, vec!["No matching tasks found.".to_string()]);
}

#[test]
fn boundary_indices_raise_range_errors_without_mutation() {
    let (mut session, _ctx) = fresh_session();
    session.handle("todo only").unwrap();

    for cmd in ["mark 0", "mark 2", "unmark 0", "delete 2", "priority 0 high"] {
        match session.handle(cmd) {
            Err(TallyError::Range { size: 1 }) => {}
            other => panic!("{:?} should be a range error, got {:?}", cmd, other),
        }
    }
    assert_eq!(session.store().len(), 1);
    assert!(!session.store().as_slice()[0].is_done());
}

#[test]
fn range_error_message_names_the_valid_range() {
    let (mut session, _ctx) = fresh_session();
    session.handle("todo a").unwrap();
    session.handle("todo b").unwrap();

    let err = session.handle("mark 7").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid task number. Please enter a number between 1 and 2"
    );
}

#[test]
fn malformed_deadline_leaves_collection_unchanged() {
    let (mut session, _ctx) = fresh_session();
    session.handle("todo existing").unwrap();

    assert!(matches!(
        session.handle("deadline task without by"),
        Err(TallyError::Format(_))
    ));
    assert!(matches!(
        session.handle("deadline late fee /by someday"),
        Err(TallyError::Date(_))
    ));
    assert_eq!(session.store().len(), 1);
}

#[test]
fn scenario_from_the_manual() {
    let (mut session, _ctx) = fresh_session();

    let added = session.handle("todo read book").unwrap();
    assert_eq!(
        added,
        Response::Added {
            rendered: "[T][ ][P:M] read book".to_string(),
            total: 1
        }
    );
    match session.handle("list").unwrap() {
        Response::Listed(lines) => assert_eq!(lines, vec!["[T][ ][P:M] read book".to_string()]),
        other => panic!("expected Listed, got {:?}", other),
    }

    session.handle("deadline return book /by 2025-12-31").unwrap();
    assert_eq!(
        session.store().as_slice()[1].to_string(),
        "[D][ ][P:M] return book (by: Dec 31 2025)"
    );

    session.handle("event trip /from 2025-01-01 /to 2025-01-03").unwrap();
    session.handle("delete 1").unwrap();
    session.handle("delete 1").unwrap();
    let marked = session.handle("mark 1").unwrap();
    assert_eq!(
        marked,
        Response::Marked {
            rendered: "[E][X][P:M] trip (from: Jan 01 2025 to: Jan 03 2025)".to_string()
        }
    );
}

#[test]
fn priority_command_is_permissive_about_levels() {
    let (mut session, _ctx) = fresh_session();
    session.handle("todo walk dog").unwrap();

    session.handle("priority 1 HIGH").unwrap();
    assert!(session.store().as_slice()[0].to_string().contains("[P:H]"));

    // Unrecognized levels normalize to medium rather than failing.
    session.handle("priority 1 urgent-ish").unwrap();
    assert!(session.store().as_slice()[0].to_string().contains("[P:M]"));

    session.handle("priority 1 l").unwrap();
    assert!(session.store().as_slice()[0].to_string().contains("[P:L]"));
}

#[test]
fn unknown_commands_leave_the_session_usable() {
    let (mut session, _ctx) = fresh_session();

    assert!(matches!(
        session.handle("frobnicate 3"),
        Err(TallyError::UnknownCommand)
    ));
    session.handle("todo still works").unwrap();
    assert_eq!(session.store().len(), 1);
}

#[test]
fn response_lines_carry_counts() {
    let (mut session, _ctx) = fresh_session();
    let lines = session.handle("todo a").unwrap().lines();
    assert_eq!(
        lines,
        vec![
            "Got it. I've added this task:".to_string(),
            "  [T][ ][P:M] a".to_string(),
            "Now you have 1 tasks in the list.".to_string(),
        ]
    );

    session.handle("todo b").unwrap();
    let listed = session.handle("list").unwrap().lines();
    assert_eq!(listed[0], "Here are the tasks in your list:");
    assert_eq!(listed[1], "1. [T][ ][P:M] a");
    assert_eq!(listed[2], "2. [T][ ][P:M] b");
}
