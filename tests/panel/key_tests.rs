//! Keystroke policy tests

use std::sync::{Arc, Mutex};
use twirc_core::{AccessPanel, Key, KeyOutcome, KeyPress, LineEnding, Modifiers, TextRegion};

fn panel() -> (AccessPanel, Arc<Mutex<Vec<String>>>) {
    let submitted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&submitted);
    let region = TextRegion::new().with_line_ending(LineEnding::Lf);
    let panel = AccessPanel::with_region(region, move |line| sink.lock().unwrap().push(line));
    (panel, submitted)
}

fn type_text(panel: &mut AccessPanel, text: &str) {
    for c in text.chars() {
        panel.handle_key(KeyPress::plain(Key::Char(c)));
    }
}

#[test]
fn test_enter_submits_pending_input() {
    let (mut panel, submitted) = panel();
    panel.send("welcome");
    type_text(&mut panel, "hi all");

    let outcome = panel.handle_key(KeyPress::plain(Key::Enter));

    assert_eq!(outcome, KeyOutcome::Submitted("hi all".into()));
    assert_eq!(*submitted.lock().unwrap(), vec!["hi all".to_string()]);
    assert_eq!(panel.pending_input(), "");
    assert_eq!(panel.region().text(), "welcome\n");
}

#[test]
fn test_enter_with_empty_input_still_submits() {
    let (mut panel, submitted) = panel();

    let outcome = panel.handle_key(KeyPress::plain(Key::Enter));

    assert_eq!(outcome, KeyOutcome::Submitted(String::new()));
    assert_eq!(submitted.lock().unwrap().len(), 1);
}

#[test]
fn test_shift_enter_inserts_line_break() {
    let (mut panel, submitted) = panel();
    type_text(&mut panel, "a");

    let outcome = panel.handle_key(KeyPress::new(Key::Enter, Modifiers::SHIFT));
    type_text(&mut panel, "b");

    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(panel.pending_input(), "a\nb");
    assert!(submitted.lock().unwrap().is_empty());
}

#[test]
fn test_ctrl_enter_is_not_a_submit() {
    let (mut panel, submitted) = panel();
    type_text(&mut panel, "a");

    let outcome = panel.handle_key(KeyPress::new(Key::Enter, Modifiers::CTRL));

    assert_eq!(outcome, KeyOutcome::Unhandled);
    assert_eq!(panel.pending_input(), "a");
    assert!(submitted.lock().unwrap().is_empty());
}

#[test]
fn test_typing_in_history_moves_to_end() {
    let (mut panel, _) = panel();
    panel.send("hello");
    type_text(&mut panel, "ab");
    panel.region_mut().set_caret(2).unwrap();

    panel.handle_key(KeyPress::plain(Key::Char('c')));

    assert_eq!(panel.region().history(), "hello\n");
    assert_eq!(panel.pending_input(), "abc");
    assert_eq!(panel.region().caret(), panel.region().len());
}

#[test]
fn test_shifted_char_in_history_moves_to_end() {
    let (mut panel, _) = panel();
    panel.send("hello");
    panel.region_mut().set_caret(0).unwrap();

    panel.handle_key(KeyPress::new(Key::Char('H'), Modifiers::SHIFT));

    assert_eq!(panel.region().history(), "hello\n");
    assert_eq!(panel.pending_input(), "H");
}

#[test]
fn test_ctrl_char_in_history_is_left_to_host() {
    let (mut panel, _) = panel();
    panel.send("hello");
    panel.region_mut().set_caret(1).unwrap();

    let outcome = panel.handle_key(KeyPress::new(Key::Char('q'), Modifiers::CTRL));

    assert_eq!(outcome, KeyOutcome::Unhandled);
    assert_eq!(panel.region().caret(), 1);
}

#[test]
fn test_backspace_at_boundary_is_suppressed() {
    let (mut panel, _) = panel();
    panel.send("hello");

    let outcome = panel.handle_key(KeyPress::plain(Key::Backspace));

    assert_eq!(outcome, KeyOutcome::Suppressed);
    assert_eq!(panel.region().text(), "hello\n");
}

#[test]
fn test_backspace_in_history_is_suppressed() {
    let (mut panel, _) = panel();
    panel.send("hello");
    panel.region_mut().set_caret(3).unwrap();

    assert_eq!(
        panel.handle_key(KeyPress::plain(Key::Backspace)),
        KeyOutcome::Suppressed
    );
    assert_eq!(panel.region().text(), "hello\n");
}

#[test]
fn test_backspace_one_char_into_input_deletes() {
    let (mut panel, _) = panel();
    panel.send("hello");
    type_text(&mut panel, "x");

    let outcome = panel.handle_key(KeyPress::plain(Key::Backspace));

    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(panel.pending_input(), "");
    assert_eq!(panel.region().history(), "hello\n");
}

#[test]
fn test_backspace_on_empty_panel_is_suppressed() {
    let (mut panel, _) = panel();

    assert_eq!(
        panel.handle_key(KeyPress::plain(Key::Backspace)),
        KeyOutcome::Suppressed
    );
}

#[test]
fn test_delete_in_history_does_nothing() {
    let (mut panel, _) = panel();
    panel.send("hello");
    panel.region_mut().set_caret(0).unwrap();

    let outcome = panel.handle_key(KeyPress::plain(Key::Delete));

    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(panel.region().text(), "hello\n");
}

#[test]
fn test_arrows_move_freely_through_history() {
    let (mut panel, _) = panel();
    panel.send("hello");
    type_text(&mut panel, "ab");

    panel.handle_key(KeyPress::plain(Key::Up));
    assert_eq!(panel.region().caret_line_column(), (0, 2));

    panel.handle_key(KeyPress::plain(Key::Home));
    assert_eq!(panel.region().caret(), 0);

    panel.handle_key(KeyPress::plain(Key::Right));
    assert_eq!(panel.region().caret(), 1);

    panel.handle_key(KeyPress::plain(Key::Down));
    assert_eq!(panel.region().caret_line_column(), (1, 1));
}

#[test]
fn test_tab_and_other_keys_are_unhandled() {
    let (mut panel, _) = panel();

    assert_eq!(
        panel.handle_key(KeyPress::plain(Key::Tab)),
        KeyOutcome::Unhandled
    );
    assert_eq!(
        panel.handle_key(KeyPress::plain(Key::Other)),
        KeyOutcome::Unhandled
    );
}

#[test]
fn test_messages_arriving_while_typing() {
    let (mut panel, submitted) = panel();
    type_text(&mut panel, "hel");
    panel.send("server notice");
    type_text(&mut panel, "lo");

    panel.handle_key(KeyPress::plain(Key::Enter));

    assert_eq!(*submitted.lock().unwrap(), vec!["hello".to_string()]);
    assert_eq!(panel.region().text(), "server notice\n");
}
