//! End-to-end panel scenarios: messages arriving around a user typing

use twirc_core::panel::normalize_message;
use twirc_core::{AccessPanel, Key, KeyOutcome, KeyPress, LineEnding, TextRegion};

fn region() -> TextRegion {
    TextRegion::new().with_line_ending(LineEnding::Lf)
}

#[test]
fn test_hello_world_conversation() {
    let region = region();
    let mut panel = AccessPanel::with_region(region, |_| {});

    panel.send("hello");
    assert_eq!(panel.pending_input(), "");
    assert_eq!(panel.region().history(), "hello\n");

    panel.handle_key(KeyPress::plain(Key::Char('h')));
    panel.handle_key(KeyPress::plain(Key::Char('i')));
    assert_eq!(panel.pending_input(), "hi");
    let caret_before = panel.region().caret();

    panel.send("world");
    assert_eq!(panel.region().history(), "hello\nworld\n");
    assert_eq!(panel.pending_input(), "hi");
    assert_eq!(panel.region().caret(), caret_before + 6);

    let outcome = panel.handle_key(KeyPress::plain(Key::Enter));
    assert_eq!(outcome, KeyOutcome::Submitted("hi".into()));
    assert_eq!(panel.pending_input(), "");
}

#[test]
fn test_doubled_newline_is_collapsed() {
    let mut region = region();

    region.append_message("a\n\nb");

    assert_eq!(region.history(), "a\nb\n");
    assert_eq!(normalize_message("a\n\nb", LineEnding::Lf), "a\nb\n");
}

#[test]
fn test_editing_pos_is_sum_of_normalized_lengths() {
    let messages = ["one", "", "two\r\nthree", "x\n\n\ny", "tail\n"];
    let mut region = region();
    let mut expected = 0;

    for message in messages {
        let before = region.editing_pos();
        expected += normalize_message(message, LineEnding::Lf).chars().count();
        region.append_message(message);
        assert!(region.editing_pos() >= before);
        assert_eq!(region.editing_pos(), expected);
    }
}

#[test]
fn test_pending_input_survives_every_append() {
    let mut region = region();
    for c in "draft reply".chars() {
        region.insert_char(c);
    }

    for message in ["a", "b\nc", "\r\r", "long message with words"] {
        region.append_message(message);
        assert_eq!(region.pending_input(), "draft reply");
    }
}

#[test]
fn test_caret_offset_within_input_is_preserved() {
    for k in 0..=4 {
        let mut region = region();
        region.append_message("start");
        for c in "abcd".chars() {
            region.insert_char(c);
        }
        let editing_pos = region.editing_pos();
        region.set_caret(editing_pos + k).unwrap();

        let added = region.append_message("incoming");

        assert_eq!(region.caret(), editing_pos + k + added);
    }
}

#[test]
fn test_submit_round_trip() {
    let mut region = region();
    region.append_message("history");
    for c in "pending".chars() {
        region.insert_char(c);
    }
    let expected = region.pending_input().to_string();

    let submitted = region.submit_and_clear();

    assert_eq!(submitted, expected);
    assert_eq!(region.pending_input(), "");
}
