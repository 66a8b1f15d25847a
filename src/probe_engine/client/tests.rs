use super::BodyBuffer;
use curl::easy::Handler;

#[test]
fn body_buffer_accumulates_chunks() {
    let mut buffer = BodyBuffer::default();
    let wrote = buffer.write(b"{\"token\":").expect("write");
    assert_eq!(wrote, 9);
    let wrote = buffer.write(b"\"abc\"}").expect("write");
    assert_eq!(wrote, 6);
    assert_eq!(buffer.take(), b"{\"token\":\"abc\"}");
}

#[test]
fn body_buffer_take_leaves_it_empty() {
    let mut buffer = BodyBuffer::default();
    let _ = buffer.write(b"payload").expect("write");
    assert_eq!(buffer.take(), b"payload");
    assert!(buffer.take().is_empty());
}

#[test]
fn body_buffer_clear_discards_previous_response() {
    let mut buffer = BodyBuffer::default();
    let _ = buffer.write(b"stale").expect("write");
    buffer.clear();
    let _ = buffer.write(b"fresh").expect("write");
    assert_eq!(buffer.take(), b"fresh");
}
