//! Integration tests: a full connection driven end to end
//!
//! Exercises the lifecycle the way a connection owner would: handshake,
//! interleaved traffic in both directions, handlers answering from inside
//! their callbacks, and teardown.

use termwire::{Attribute, KeyId, ServerTerminal, TerminalHandler};

#[path = "../test_utils/mod.rs"]
mod test_utils;
use test_utils::{Event, MockTransport, RecordingHandler};

/// Handler that responds through the encoder surface from its callbacks
struct EchoShell {
    keys: Vec<KeyId>,
}

impl TerminalHandler for EchoShell {
    fn connection_made(&mut self, terminal: &mut ServerTerminal) {
        terminal.erase_display().unwrap();
        terminal.cursor_home().unwrap();
        terminal.write(b"> ").unwrap();
    }

    fn keystroke_received(&mut self, terminal: &mut ServerTerminal, key: KeyId) {
        self.keys.push(key);
        if let KeyId::Char(ch) = key {
            terminal.write(&[ch as u8]).unwrap();
        }
    }
}

#[test]
fn test_handshake_then_echo() {
    test_utils::init_logging();
    let transport = MockTransport::new();
    let mut terminal = ServerTerminal::new(Box::new(transport.clone()));
    let mut shell = EchoShell { keys: Vec::new() };

    terminal.connection_made(&mut shell);
    assert_eq!(
        transport.writes(),
        vec![b"\x1b[2J".to_vec(), b"\x1b[H".to_vec(), b"> ".to_vec()]
    );

    terminal.data_received(&mut shell, b"ls\x1b[A");
    assert_eq!(
        shell.keys,
        vec![KeyId::Char('l'), KeyId::Char('s'), KeyId::UpArrow]
    );
    // Printable keystrokes were echoed; the arrow was not.
    assert_eq!(transport.all_bytes(), b"\x1b[2J\x1b[H> ls");
}

#[test]
fn test_mixed_inbound_stream_orders_events() {
    let mut handler = RecordingHandler::new();
    let mut terminal = ServerTerminal::new(Box::new(MockTransport::new()));

    terminal.connection_made(&mut handler);
    terminal.data_received(&mut handler, b"a\x1b[4;20h\x1b[1;24rb\x1b[3~\x1b[Z");

    assert_eq!(
        handler.events,
        vec![
            Event::ConnectionMade,
            Event::Keystroke(KeyId::Char('a')),
            Event::SetMode(vec!["4".into(), "20".into()]),
            Event::ScrollRegion(1, 24),
            Event::Keystroke(KeyId::Char('b')),
            Event::Keystroke(KeyId::Delete),
            Event::Unhandled("\x1b[Z".into()),
        ]
    );
}

#[tokio::test]
async fn test_query_round_trip_inside_a_session() {
    let transport = MockTransport::new();
    let mut handler = RecordingHandler::new();
    let mut terminal = ServerTerminal::new(Box::new(transport.clone()));

    terminal.connection_made(&mut handler);
    terminal.cursor_position(3, 5).unwrap();
    let report = terminal.report_cursor_position().unwrap();
    assert_eq!(
        transport.writes(),
        vec![b"\x1b[6;4H".to_vec(), b"\x1b[6n".to_vec()]
    );

    // The peer's reply arrives interleaved with ordinary typing.
    terminal.data_received(&mut handler, b"k\x1b[6;4R");
    assert_eq!(report.await.unwrap().column, 3);
    assert_eq!(
        handler.events,
        vec![Event::ConnectionMade, Event::Keystroke(KeyId::Char('k'))]
    );
}

#[test]
fn test_styled_output_sequence() {
    let transport = MockTransport::new();
    let mut terminal = ServerTerminal::new(Box::new(transport.clone()));

    terminal
        .select_graphic_rendition(&[Attribute::Bold, Attribute::ReverseVideo])
        .unwrap();
    terminal.write(b"WARNING").unwrap();
    terminal
        .select_graphic_rendition(&[Attribute::Normal])
        .unwrap();

    assert_eq!(transport.all_bytes(), b"\x1b[1;7mWARNING\x1b[0m");
}

#[test]
fn test_release_resets_before_close() {
    let transport = MockTransport::new();
    let mut terminal = ServerTerminal::new(Box::new(transport.clone()));

    terminal.write(b"bye").unwrap();
    terminal.lose_connection().unwrap();

    // The reset reaches the wire before the close, so the peer never sees
    // a dirty terminal after disconnect.
    assert_eq!(transport.last_write(), Some(b"\x1bc".to_vec()));
    assert!(transport.is_closed());
}

#[test]
fn test_transport_failure_surfaces_from_encoder_calls() {
    let transport = MockTransport::new();
    let mut terminal = ServerTerminal::new(Box::new(transport.clone()));

    terminal.lose_connection().unwrap();
    assert!(terminal.cursor_home().is_err());
}
