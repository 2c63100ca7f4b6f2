//! Session and command loop tests
//!
//! Drives the command handler the way the binary does, with a recording
//! synthesizer standing in for speech output

use aacboard::input::{CommandHandler, HandlerAction};
use aacboard::speech::Synth;
use aacboard::state::config::Config;
use aacboard::state::State;
use aacboard::{LoadMode, Result};
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

const EXAMPLE: &str = "img/food/plate.png food
>img/food/fries.png french fries
>img/food/watermelon.png watermelon
img/clothing/hanger.png clothing
>img/clothing/shirt.png collared shirt
";

/// Synth that records everything it is asked to say
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    fn spoken(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Synth for Recorder {
    fn set_rate(&mut self, _rate: u8) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, _volume: u8) -> Result<()> {
        Ok(())
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        self.0.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        Ok(())
    }
}

fn open_state(dir: &Path, config_lines: &str) -> (State, Recorder) {
    let config_path = dir.join("aacboard.cfg");
    fs::write(&config_path, config_lines).unwrap();
    let config = Config::load_from(&config_path).unwrap();

    let board_path = dir.join("board.txt");
    fs::write(&board_path, EXAMPLE).unwrap();

    let recorder = Recorder::default();
    let state = State::open(config, Box::new(recorder.clone()), board_path, LoadMode::Strict)
        .expect("board should open");
    (state, recorder)
}

fn run(handler: &mut CommandHandler, state: &mut State, line: &str) -> (HandlerAction, String) {
    let mut out = Vec::new();
    let action = handler.process_line(line, state, &mut out).unwrap();
    (action, String::from_utf8(out).unwrap())
}

#[test]
fn test_select_speaks_items_only() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, recorder) = open_state(dir.path(), "");

    assert_eq!(state.select("img/food/plate.png").unwrap(), "");
    assert_eq!(state.select("img/food/watermelon.png").unwrap(), "watermelon");
    assert_eq!(recorder.spoken(), vec!["watermelon"]);
}

#[test]
fn test_command_session() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, recorder) = open_state(dir.path(), "");
    let mut handler = CommandHandler::new();

    let (_, out) = run(&mut handler, &mut state, "list");
    assert_eq!(out, "img/food/plate.png\nimg/clothing/hanger.png\n");

    let (_, out) = run(&mut handler, &mut state, "img/food/plate.png");
    assert_eq!(out, "[food]\n");

    let (_, out) = run(&mut handler, &mut state, "select img/food/fries.png");
    assert_eq!(out, "");
    assert_eq!(recorder.spoken(), vec!["french fries"]);

    let (_, out) = run(&mut handler, &mut state, "category");
    assert_eq!(out, "food\n");

    let (_, out) = run(&mut handler, &mut state, "view");
    assert_eq!(
        out,
        "{\"category\":\"food\",\"images\":[\"img/food/fries.png\",\"img/food/watermelon.png\"]}\n"
    );

    let (_, out) = run(&mut handler, &mut state, "back");
    assert_eq!(out, "[home]\n");

    let (action, _) = run(&mut handler, &mut state, "quit");
    assert_eq!(action, HandlerAction::Quit);
}

#[test]
fn test_errors_reported_and_loop_continues() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _) = open_state(dir.path(), "");
    let mut handler = CommandHandler::new();

    let (action, out) = run(&mut handler, &mut state, "select nonexistent.png");
    assert_eq!(action, HandlerAction::Continue);
    assert!(out.contains("nonexistent.png"));

    run(&mut handler, &mut state, "select img/food/plate.png");
    let (action, out) = run(&mut handler, &mut state, "select img/clothing/hanger.png");
    assert_eq!(action, HandlerAction::Continue);
    assert!(out.contains("not part of category food"));
    assert_eq!(state.board.get_category(), "food");

    let (_, out) = run(&mut handler, &mut state, "has img/food/fries.png");
    assert_eq!(out, "true\n");
}

#[test]
fn test_add_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _) = open_state(dir.path(), "");
    let mut handler = CommandHandler::new();

    run(&mut handler, &mut state, "add img/drinks/cup.png drinks");
    run(&mut handler, &mut state, "select img/drinks/cup.png");
    run(&mut handler, &mut state, "add img/drinks/milk.png a glass of milk");
    assert!(state.is_dirty());

    let copy = dir.path().join("copy.txt");
    let (_, out) = run(&mut handler, &mut state, &format!("save {}", copy.display()));
    assert!(out.starts_with("Saved"));
    assert!(!state.is_dirty());

    let saved = fs::read_to_string(&copy).unwrap();
    assert!(saved.starts_with(EXAMPLE));
    assert!(saved.ends_with("img/drinks/cup.png drinks\n>img/drinks/milk.png a glass of milk\n"));
}

#[test]
fn test_autosave_on_shutdown() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _) = open_state(dir.path(), "[board]\nautosave = true\n");

    state.add_item("img/toys/ball.png", "toys").unwrap();
    state.shutdown().unwrap();

    let saved = fs::read_to_string(dir.path().join("board.txt")).unwrap();
    assert!(saved.ends_with("img/toys/ball.png toys\n"));
}

#[test]
fn test_no_autosave_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _) = open_state(dir.path(), "");

    state.add_item("img/toys/ball.png", "toys").unwrap();
    state.shutdown().unwrap();

    assert_eq!(fs::read_to_string(dir.path().join("board.txt")).unwrap(), EXAMPLE);
}

#[test]
fn test_failed_save_as_keeps_board_path() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _) = open_state(dir.path(), "");
    state.add_item("img/toys/ball.png", "toys").unwrap();

    let missing = dir.path().join("no/such/dir/b.txt");
    assert!(state.save_as(&missing).is_err());
    assert_eq!(state.board_path(), dir.path().join("board.txt"));
    assert!(state.is_dirty());

    state.save().unwrap();
    let saved = fs::read_to_string(dir.path().join("board.txt")).unwrap();
    assert!(saved.ends_with("img/toys/ball.png toys\n"));
}

#[test]
fn test_quit_stays_open_when_autosave_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (mut state, _) = open_state(dir.path(), "[board]\nautosave = true\n");
    let mut handler = CommandHandler::new();

    // A directory where the temporary file goes makes every save of board.txt fail
    fs::create_dir(dir.path().join("board.txt.tmp")).unwrap();

    run(&mut handler, &mut state, "add img/toys/ball.png toys");
    let (action, out) = run(&mut handler, &mut state, "quit");
    assert_eq!(action, HandlerAction::Continue);
    assert!(!out.is_empty());
    assert!(state.is_dirty());

    let copy = dir.path().join("copy.txt");
    let (action, _) = run(&mut handler, &mut state, &format!("save {}", copy.display()));
    assert_eq!(action, HandlerAction::Continue);
    assert!(!state.is_dirty());

    let (action, _) = run(&mut handler, &mut state, "quit");
    assert_eq!(action, HandlerAction::Quit);
}
