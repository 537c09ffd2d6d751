//! Message feed tests

use twirc_core::{LineEnding, TextRegion, message_feed};

#[test]
fn test_drain_preserves_order() {
    let (sender, mut receiver) = message_feed();
    let mut region = TextRegion::new().with_line_ending(LineEnding::Lf);

    assert!(sender.post("first"));
    assert!(sender.post("second"));
    assert!(sender.post("third"));

    assert_eq!(receiver.drain_into(&mut region), 3);
    assert_eq!(region.history(), "first\nsecond\nthird\n");
    assert_eq!(receiver.drain_into(&mut region), 0);
}

#[test]
fn test_post_after_receiver_dropped() {
    let (sender, receiver) = message_feed();
    drop(receiver);

    assert!(sender.is_closed());
    assert!(!sender.post("lost"));
}

#[test]
fn test_drain_keeps_typed_input_below_messages() {
    let (sender, mut receiver) = message_feed();
    let mut region = TextRegion::new().with_line_ending(LineEnding::Lf);
    region.insert_char('x');

    sender.post("notice");
    receiver.drain_into(&mut region);

    assert_eq!(region.text(), "notice\nx");
    assert_eq!(region.pending_input(), "x");
}

#[tokio::test]
async fn test_posts_from_other_threads_arrive_in_order() {
    let (sender, mut receiver) = message_feed();

    let worker = std::thread::spawn(move || {
        for i in 0..50 {
            sender.post(format!("line {i}"));
        }
    });
    worker.join().expect("worker thread");

    for i in 0..50 {
        assert_eq!(receiver.recv().await, Some(format!("line {i}")));
    }
    assert_eq!(receiver.recv().await, None);
}

#[tokio::test]
async fn test_cloned_senders_share_one_queue() {
    let (sender, mut receiver) = message_feed();
    let clone = sender.clone();

    let task = tokio::spawn(async move {
        clone.post("from task");
    });
    task.await.expect("task");
    sender.post("from main");

    assert_eq!(receiver.try_recv().as_deref(), Some("from task"));
    assert_eq!(receiver.try_recv().as_deref(), Some("from main"));
    assert_eq!(receiver.try_recv(), None);
}
