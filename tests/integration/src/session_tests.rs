//! End-to-end tests of the rename session
//!
//! Each test plays the user: it receives the manifest text, edits it the way
//! a person would in an editor, and checks what ends up on disk.

use pretty_assertions::assert_eq;
use rename_core::{
    Error, NoopObserver, RenameSession, RenameStep, Result, SessionOutcome, TracingObserver,
};
use rename_test_utils::dir::TestDir;

fn applied(outcome: SessionOutcome) -> rename_core::ReconcileReport {
    match outcome {
        SessionOutcome::Applied(report) => report,
        other => panic!("expected applied renames, got {other:?}"),
    }
}

#[test]
fn test_bulk_extension_change() {
    let dir = TestDir::with_files(&["one.JPG", "two.JPG", "notes.txt"]);
    let mut editor = |text: &str| -> Result<String> { Ok(text.replace(".JPG", ".jpg")) };

    let report = applied(
        RenameSession::new(&TracingObserver)
            .run(dir.paths(&["one.JPG", "two.JPG", "notes.txt"]), &mut editor)
            .unwrap(),
    );

    assert_eq!((report.direct, report.mangled, report.unchanged), (2, 0, 1));
    assert_eq!(dir.file_names(), ["notes.txt", "one.jpg", "two.jpg"]);
    dir.assert_file_contains("one.jpg", "one.JPG");
}

#[test]
fn test_reordered_lines_and_comments_are_tolerated() {
    let dir = TestDir::with_files(&["a.txt", "b.txt"]);
    let a = dir.path("a.txt").display().to_string();
    let b = dir.path("b.txt").display().to_string();
    let renamed_b = dir.path("bravo.txt").display().to_string();

    let mut editor = |_: &str| -> Result<String> {
        Ok(format!(
            "Renaming two files\n\n   1 ;  {renamed_b}   \n0; {a}\n# b used to be {b}\n"
        ))
    };

    let report = applied(
        RenameSession::new(&NoopObserver)
            .run(dir.paths(&["a.txt", "b.txt"]), &mut editor)
            .unwrap(),
    );

    assert_eq!(report.renamed(), 1);
    assert_eq!(dir.file_names(), ["a.txt", "bravo.txt"]);
    dir.assert_file_contains("bravo.txt", "b.txt");
}

#[test]
fn test_renumbering_shifts_through_occupied_names() {
    // 1 -> 2, 2 -> 3, 3 -> 4: every target but the last is still occupied
    let dir = TestDir::with_files(&["1.png", "2.png", "3.png"]);
    let mut editor = |text: &str| -> Result<String> {
        Ok(text
            .replace("3.png", "4.png")
            .replace("2.png", "3.png")
            .replace("1.png", "2.png"))
    };

    let report = applied(
        RenameSession::new(&NoopObserver)
            .run(dir.paths(&["1.png", "2.png", "3.png"]), &mut editor)
            .unwrap(),
    );

    assert_eq!((report.direct, report.mangled), (1, 2));
    assert_eq!(dir.file_names(), ["2.png", "3.png", "4.png"]);
    dir.assert_file_contains("2.png", "1.png");
    dir.assert_file_contains("3.png", "2.png");
    dir.assert_file_contains("4.png", "3.png");
}

#[test]
fn test_swap_leaves_no_temporary_files() {
    let dir = TestDir::with_files(&["left", "right"]);
    let (left, right) = (
        dir.path("left").display().to_string(),
        dir.path("right").display().to_string(),
    );
    let mut editor =
        |_: &str| -> Result<String> { Ok(format!("0; {right}\n1; {left}\n")) };

    let report = applied(
        RenameSession::new(&NoopObserver)
            .run(dir.paths(&["left", "right"]), &mut editor)
            .unwrap(),
    );

    let restores = report
        .applied
        .iter()
        .filter(|s| matches!(s, RenameStep::Restore { .. }))
        .count();
    assert_eq!(restores, 2);
    assert_eq!(dir.file_names(), ["left", "right"]);
    dir.assert_file_contains("left", "right");
}

#[test]
fn test_directories_are_renamed_without_recursion() {
    let dir = TestDir::new();
    dir.write("album/track.mp3", "audio");
    let mut editor = |text: &str| -> Result<String> { Ok(text.replace("/album", "/Album (2024)")) };

    RenameSession::new(&NoopObserver)
        .run(dir.paths(&["album"]), &mut editor)
        .unwrap();

    assert_eq!(dir.file_names(), ["Album (2024)"]);
    dir.assert_file_contains("Album (2024)/track.mp3", "audio");
}

#[test]
fn test_deleted_line_changes_nothing() {
    let dir = TestDir::with_files(&["a.txt", "b.txt"]);
    let mut editor = |text: &str| -> Result<String> {
        Ok(text.lines().take(1).collect::<Vec<_>>().join("\n"))
    };

    let result = RenameSession::new(&NoopObserver).run(dir.paths(&["a.txt", "b.txt"]), &mut editor);

    match result {
        Err(Error::KeySetMismatch {
            missing,
            unexpected,
        }) => {
            assert_eq!(missing, vec![1]);
            assert!(unexpected.is_empty());
        }
        other => panic!("expected KeySetMismatch, got {other:?}"),
    }
    assert_eq!(dir.file_names(), ["a.txt", "b.txt"]);
}

#[test]
fn test_two_entries_onto_one_name_changes_nothing() {
    let dir = TestDir::with_files(&["a.txt", "b.txt"]);
    let mut editor = |text: &str| -> Result<String> { Ok(text.replace("b.txt", "a.txt")) };

    let result = RenameSession::new(&NoopObserver).run(dir.paths(&["a.txt", "b.txt"]), &mut editor);

    assert!(matches!(result, Err(Error::DuplicatePath { .. })));
    assert_eq!(dir.file_names(), ["a.txt", "b.txt"]);
}

#[test]
fn test_duplicate_selection_never_opens_editor() {
    let dir = TestDir::with_files(&["a.txt"]);
    let mut opened = false;
    let mut editor = |text: &str| -> Result<String> {
        opened = true;
        Ok(text.to_string())
    };

    let result = RenameSession::new(&NoopObserver).run(dir.paths(&["a.txt", "a.txt"]), &mut editor);

    assert!(matches!(result, Err(Error::DuplicatePath { .. })));
    assert!(!opened);
}

#[test]
fn test_aborted_edit_changes_nothing() {
    let dir = TestDir::with_files(&["a.txt"]);
    let mut editor =
        |_: &str| -> Result<String> { Err(Error::editor_aborted("user quit without saving")) };

    let result = RenameSession::new(&NoopObserver).run(dir.paths(&["a.txt"]), &mut editor);

    match result {
        Err(Error::EditorAborted { reason }) => assert_eq!(reason, "user quit without saving"),
        other => panic!("expected EditorAborted, got {other:?}"),
    }
    assert_eq!(dir.file_names(), ["a.txt"]);
}

#[test]
fn test_existing_bystander_stops_the_batch() {
    let dir = TestDir::with_files(&["a.txt", "b.txt", "taken.txt"]);
    let mut editor = |text: &str| -> Result<String> {
        Ok(text.replace("a.txt", "alpha.txt").replace("b.txt", "taken.txt"))
    };

    let result = RenameSession::new(&NoopObserver).run(dir.paths(&["a.txt", "b.txt"]), &mut editor);

    assert!(matches!(result, Err(Error::FileExists { ref path }) if path == &dir.path("taken.txt")));
    // Index 0 ran before the failure and is not undone
    assert_eq!(dir.file_names(), ["alpha.txt", "b.txt", "taken.txt"]);
    dir.assert_file_contains("taken.txt", "taken.txt");
}

#[test]
fn test_dry_run_matches_real_run() {
    let dir = TestDir::with_files(&["a.txt", "b.txt"]);
    let swap = |text: &str| -> Result<String> {
        Ok(text
            .replace("a.txt", "@swap@")
            .replace("b.txt", "a.txt")
            .replace("@swap@", "b.txt"))
    };

    let mut dry_editor = swap;
    let planned = match RenameSession::new(&NoopObserver)
        .dry_run(true)
        .run(dir.paths(&["a.txt", "b.txt"]), &mut dry_editor)
        .unwrap()
    {
        SessionOutcome::Planned(plan) => plan,
        other => panic!("expected a plan, got {other:?}"),
    };
    assert_eq!(dir.file_names(), ["a.txt", "b.txt"]);

    let mut real_editor = swap;
    let report = applied(
        RenameSession::new(&NoopObserver)
            .run(dir.paths(&["a.txt", "b.txt"]), &mut real_editor)
            .unwrap(),
    );

    assert_eq!(report.applied, planned.steps());
    dir.assert_file_contains("a.txt", "b.txt");
}

#[test]
fn test_outcome_json_shape() {
    let dir = TestDir::with_files(&["a.txt"]);
    let mut editor = |text: &str| -> Result<String> { Ok(text.replace("a.txt", "z.txt")) };

    let outcome = RenameSession::new(&NoopObserver)
        .run(dir.paths(&["a.txt"]), &mut editor)
        .unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["outcome"], "applied");
    assert_eq!(json["direct"], 1);
    assert_eq!(json["applied"][0]["kind"], "direct");
}

#[test]
fn test_padded_name_is_refused_before_editing() {
    let dir = TestDir::with_files(&[" padded.txt", "plain.txt"]);
    let mut opened = false;
    let mut editor = |text: &str| -> Result<String> {
        opened = true;
        Ok(text.to_string())
    };

    let result =
        RenameSession::new(&NoopObserver).run(dir.paths(&[" padded.txt", "plain.txt"]), &mut editor);

    assert!(matches!(result, Err(Error::UnencodablePath { index: 0, .. })));
    assert!(!opened);
    assert_eq!(dir.file_names(), [" padded.txt", "plain.txt"]);
}

#[test]
fn test_dot_slash_in_edit_is_not_a_rename() {
    // Nothing changes, so the relative paths are never touched on disk
    let mut editor = |text: &str| -> Result<String> {
        Ok(text.replace("0; notes.txt", "0; ./notes.txt"))
    };

    let report = applied(
        RenameSession::new(&NoopObserver)
            .run(["notes.txt", "./todo.txt"], &mut editor)
            .unwrap(),
    );

    assert!(report.applied.is_empty());
    assert_eq!(report.unchanged, 2);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_name_is_left_alone() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TestDir::with_files(&["plain.txt"]);
    let odd = dir.root().join(OsStr::from_bytes(b"caf\xe9.txt"));
    // Some filesystems (e.g. on macOS) refuse non-UTF-8 names outright
    if std::fs::write(&odd, "odd").is_err() {
        eprintln!("Skipping test: filesystem rejects non-UTF-8 names");
        return;
    }
    let mut editor = |text: &str| -> Result<String> { Ok(text.to_string()) };

    let result =
        RenameSession::new(&NoopObserver).run(vec![odd.clone(), dir.path("plain.txt")], &mut editor);

    match result {
        Err(Error::UnencodablePath { index, path, .. }) => {
            assert_eq!(index, 0);
            assert_eq!(path, odd);
        }
        other => panic!("expected UnencodablePath, got {other:?}"),
    }
    assert!(odd.exists());
    assert_eq!(std::fs::read_to_string(&odd).unwrap(), "odd");
    assert_eq!(dir.file_names().len(), 2);
}
