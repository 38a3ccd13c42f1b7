mod common;
use common::*;

use core_actions::ModeController;
use core_model::{CursorViewport, EditorModel};
use core_state::{EditorState, Mode};
use core_text::{Document, Position};
use pretty_assertions::assert_eq;

fn open_fixture(content: &str) -> (tempfile::TempDir, std::path::PathBuf, EditorModel) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fixture.txt");
    std::fs::write(&path, content).unwrap();
    let doc = Document::open(&path).unwrap();
    let model = EditorModel::with_view(CursorViewport::new(5, 40), EditorState::new(doc));
    (dir, path, model)
}

#[test]
fn load_and_navigate() {
    let (_dir, _path, mut model) = open_fixture("alpha\nbeta gamma\nz\n");
    let mut ctl = ModeController::new();
    assert_eq!(model.state().document.row_count(), 3);

    replay(&mut ctl, &mut model, b"j$");
    assert_eq!(model.view().cursor, Position::new(1, 9));
    replay(&mut ctl, &mut model, b"b");
    assert_eq!(model.view().cursor, Position::new(1, 5));
    replay(&mut ctl, &mut model, b"j");
    assert_eq!(model.view().cursor, Position::new(2, 0), "column clamped to short row");
    replay(&mut ctl, &mut model, b"gg");
    assert_eq!(model.view().cursor.row, 0);
    replay(&mut ctl, &mut model, b"G");
    assert_eq!(model.view().cursor.row, 2);
    assert!(!model.state().document.is_dirty());
}

#[test]
fn row_deletion() {
    let mut model = model_from(&["one", "two", "three"]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"jdd");
    assert_eq!(lines(&model), vec!["one", "three"]);
    assert_eq!(model.view().cursor.row, 1);
    assert!(model.state().document.is_dirty());
}

#[test]
fn rejected_prefix_does_not_delete() {
    let mut model = model_from(&["one", "two"]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"djd");
    assert_eq!(lines(&model), vec!["one", "two"]);
    assert_eq!(ctl.translator().pending(), b"d");
    assert!(!model.state().document.is_dirty());
}

#[test]
fn insert_and_save() {
    let (_dir, path, mut model) = open_fixture("world\n");
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"ihello ");
    assert_eq!(model.state().mode, Mode::Insert);
    replay(&mut ctl, &mut model, &[ESC]);
    assert_eq!(model.state().mode, Mode::View);
    assert!(model.state().document.is_dirty());

    let mut keys = b":w".to_vec();
    keys.push(ENTER);
    let res = replay(&mut ctl, &mut model, &keys);
    assert!(!res.is_quit());
    assert_eq!(std::fs::read(&path).unwrap(), b"hello world\n");
    assert!(!model.state().document.is_dirty());
    assert_eq!(status(&model), Some("12 bytes written to disk"));
}

#[test]
fn open_line_below_and_type() {
    let mut model = model_from(&["first", "third"]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"osecond");
    replay(&mut ctl, &mut model, &[ESC]);
    assert_eq!(lines(&model), vec!["first", "second", "third"]);
    assert_eq!(model.view().cursor, Position::new(1, 5));
}

#[test]
fn enter_splits_and_backspace_joins() {
    let mut model = model_from(&["abcd"]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"la");
    replay(&mut ctl, &mut model, &[ENTER]);
    assert_eq!(lines(&model), vec!["ab", "cd"]);
    replay(&mut ctl, &mut model, &[127]);
    assert_eq!(lines(&model), vec!["abcd"]);
    assert_eq!(model.view().cursor, Position::new(0, 2));
}

#[test]
fn guarded_quit() {
    let mut model = model_from(&["abc"]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"x");
    let mut keys = b":q".to_vec();
    keys.push(ENTER);
    let res = replay(&mut ctl, &mut model, &keys);
    assert!(!res.is_quit());
    assert_eq!(status(&model), Some("save file before or q!"));
    assert_eq!(model.state().mode, Mode::View);

    let mut keys = b":q!".to_vec();
    keys.push(ENTER);
    assert!(replay(&mut ctl, &mut model, &keys).is_quit());
}

#[test]
fn ctrl_q_quits_unconditionally() {
    let mut model = model_from(&["abc"]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"x");
    assert!(ctl.handle(0x11, &mut model).is_quit());
}

#[test]
fn escape_discards_command_line() {
    let mut model = model_from(&["abc"]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b":q");
    assert_eq!(model.state().command_line.buffer(), ":q");
    let res = ctl.handle(ESC, &mut model);
    assert!(!res.is_quit());
    assert_eq!(model.state().mode, Mode::View);
    assert!(!model.state().command_line.is_active());
}

#[test]
fn unknown_command_reports_text() {
    let mut model = model_from(&["abc"]);
    let mut ctl = ModeController::new();
    let mut keys = b":frob".to_vec();
    keys.push(ENTER);
    replay(&mut ctl, &mut model, &keys);
    assert_eq!(status(&model), Some("Undefined cmd: frob"));
}

#[test]
fn repeated_dd_down_to_zero_rows() {
    let mut model = model_from(&["a", "b", "c", "d", "e"]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"jjj");
    for expected in (0..5).rev() {
        replay(&mut ctl, &mut model, b"dd");
        assert_eq!(model.state().document.row_count(), expected);
        let cur = model.view().cursor;
        assert!(cur.row <= expected);
    }
    // extra deletes on an empty document are no-ops
    replay(&mut ctl, &mut model, b"dddd");
    assert_eq!(model.state().document.row_count(), 0);
    assert_eq!(model.view().cursor, Position::origin());
}

#[test]
fn typing_into_empty_document_creates_row() {
    let mut model = model_from(&[]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"ihi");
    assert_eq!(lines(&model), vec!["hi"]);
    assert_eq!(model.view().cursor, Position::new(0, 2));
}

#[test]
fn navigate_right_then_down() {
    let mut model = model_from(&["abc", "def"]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"lll");
    assert_eq!(model.view().cursor, Position::new(0, 2));
    replay(&mut ctl, &mut model, b"j");
    assert_eq!(model.view().cursor, Position::new(1, 2));
}

#[test]
fn new_document_insert_and_write_to_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let mut model = model_from(&[]);
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"ihi");
    replay(&mut ctl, &mut model, &[ESC]);

    let mut keys = format!(":w {}", path.display()).into_bytes();
    keys.push(ENTER);
    replay(&mut ctl, &mut model, &keys);

    assert_eq!(std::fs::read(&path).unwrap(), b"hi\n");
    assert!(!model.state().document.is_dirty());
    assert_eq!(model.state().document.file_name(), Some(path.as_path()));
    assert_eq!(status(&model), Some("3 bytes written to disk"));
}

#[test]
fn failed_write_to_new_path_keeps_saving_to_original_file() {
    let (dir, path, mut model) = open_fixture("abc\n");
    let mut ctl = ModeController::new();
    replay(&mut ctl, &mut model, b"x");

    let bad = dir.path().join("nodir").join("b.txt");
    let mut keys = format!(":w {}", bad.display()).into_bytes();
    keys.push(ENTER);
    replay(&mut ctl, &mut model, &keys);
    assert!(status(&model).is_some_and(|s| s.starts_with("Can't save")));
    assert_eq!(model.state().document.file_name(), Some(path.as_path()));
    assert!(model.state().document.is_dirty());

    replay(&mut ctl, &mut model, b"Z");
    assert_eq!(std::fs::read(&path).unwrap(), b"bc\n");
    assert!(!model.state().document.is_dirty());
    assert_eq!(status(&model), Some("3 bytes written to disk"));
}
