//! Unit tests for the command encoder
//!
//! Every operation has an exact wire form; these tests pin the bytes.

use termwire::protocol::encoder;
use termwire::{Attribute, CharacterSet, CharsetSlot, ServerTerminal};

#[path = "../test_utils/mod.rs"]
mod test_utils;
use test_utils::MockTransport;

#[test]
fn test_cursor_movement() {
    assert_eq!(encoder::cursor_up(1), b"\x1b[1A");
    assert_eq!(encoder::cursor_down(3), b"\x1b[3B");
    assert_eq!(encoder::cursor_forward(2), b"\x1b[2C");
    assert_eq!(encoder::cursor_backward(12), b"\x1b[12D");
}

#[test]
fn test_cursor_position_converts_to_one_based() {
    // Zero-based API, 1-based wire: (column 3, row 5) -> row 6, column 4.
    assert_eq!(encoder::cursor_position(3, 5), b"\x1b[6;4H");
}

#[test]
fn test_cursor_home_and_indexing() {
    assert_eq!(encoder::cursor_home(), b"\x1b[H");
    assert_eq!(encoder::index(), b"\x1bD");
    assert_eq!(encoder::reverse_index(), b"\x1bM");
    assert_eq!(encoder::next_line(), b"\x1bE");
}

#[test]
fn test_save_restore_cursor() {
    assert_eq!(encoder::save_cursor(), b"\x1b7");
    assert_eq!(encoder::restore_cursor(), b"\x1b8");
}

#[test]
fn test_mode_sequences() {
    use termwire::models::modes::{INSERTION_REPLACEMENT, LINEFEED_NEWLINE};

    assert_eq!(encoder::set_mode(&[4u16, 20]), b"\x1b[4;20h");
    assert_eq!(encoder::reset_mode(&[4u16]), b"\x1b[4l");
    assert_eq!(
        encoder::set_mode(&[INSERTION_REPLACEMENT, LINEFEED_NEWLINE]),
        b"\x1b[4;20h"
    );
}

#[test]
fn test_keypad_modes() {
    assert_eq!(encoder::application_keypad_mode(), b"\x1b=");
    assert_eq!(encoder::numeric_keypad_mode(), b"\x1b>");
}

#[test]
fn test_character_set_designation() {
    use CharacterSet::*;
    assert_eq!(
        encoder::select_character_set(UnitedStates, CharsetSlot::G0),
        b"\x1b(B"
    );
    assert_eq!(
        encoder::select_character_set(UnitedKingdom, CharsetSlot::G0),
        b"\x1b(A"
    );
    assert_eq!(
        encoder::select_character_set(Drawing, CharsetSlot::G1),
        b"\x1b)0"
    );
    assert_eq!(
        encoder::select_character_set(Alternate, CharsetSlot::G1),
        b"\x1b)1"
    );
    assert_eq!(
        encoder::select_character_set(AlternateSpecial, CharsetSlot::G0),
        b"\x1b(2"
    );
}

#[test]
fn test_single_shifts() {
    assert_eq!(encoder::single_shift2(), b"\x1bN");
    assert_eq!(encoder::single_shift3(), b"\x1bO");
}

#[test]
fn test_graphic_rendition_codes() {
    assert_eq!(
        encoder::select_graphic_rendition(&[Attribute::Bold, Attribute::Underline]),
        b"\x1b[1;4m"
    );
    assert_eq!(
        encoder::select_graphic_rendition(&[Attribute::Blink, Attribute::ReverseVideo]),
        b"\x1b[5;7m"
    );
    assert_eq!(
        encoder::select_graphic_rendition(&[Attribute::Normal]),
        b"\x1b[0m"
    );
    assert_eq!(encoder::select_graphic_rendition(&[]), b"\x1b[m");
}

#[test]
fn test_tabulation() {
    assert_eq!(encoder::horizontal_tabulation_set(), b"\x1bH");
    assert_eq!(encoder::tabulation_clear(), b"\x1b[q");
    assert_eq!(encoder::tabulation_clear_all(), b"\x1b[3q");
}

#[test]
fn test_line_sizing() {
    assert_eq!(encoder::double_height_line(true), b"\x1b#3");
    assert_eq!(encoder::double_height_line(false), b"\x1b#4");
    assert_eq!(encoder::single_width_line(), b"\x1b#5");
    assert_eq!(encoder::double_width_line(), b"\x1b#6");
}

#[test]
fn test_erase_line_triad() {
    assert_eq!(encoder::erase_to_line_end(), b"\x1b[K");
    assert_eq!(encoder::erase_to_line_beginning(), b"\x1b[1K");
    assert_eq!(encoder::erase_line(), b"\x1b[2K");
}

#[test]
fn test_erase_display_triad() {
    assert_eq!(encoder::erase_to_display_end(), b"\x1b[J");
    assert_eq!(encoder::erase_to_display_beginning(), b"\x1b[1J");
    assert_eq!(encoder::erase_display(), b"\x1b[2J");
}

#[test]
fn test_editing_operations() {
    assert_eq!(encoder::delete_character(4), b"\x1b[4P");
    assert_eq!(encoder::insert_line(1), b"\x1b[1L");
    assert_eq!(encoder::delete_line(2), b"\x1b[2M");
}

#[test]
fn test_scroll_region() {
    assert_eq!(encoder::set_scroll_region(Some(1), Some(24)), b"\x1b[1;24r");
    assert_eq!(encoder::set_scroll_region(None, Some(24)), b"\x1b[;24r");
    assert_eq!(encoder::set_scroll_region(Some(1), None), b"\x1b[1;r");
    // Reset form: both margins omitted.
    assert_eq!(encoder::set_scroll_region(None, None), b"\x1b[;r");
}

#[test]
fn test_reset() {
    assert_eq!(encoder::reset(), b"\x1bc");
}

#[test]
fn test_session_surface_writes_once_per_operation() {
    let transport = MockTransport::new();
    let mut terminal = ServerTerminal::new(Box::new(transport.clone()));

    terminal.cursor_position(3, 5).unwrap();
    terminal.erase_display().unwrap();
    terminal.set_mode(&[4u16, 20]).unwrap();

    assert_eq!(
        transport.writes(),
        vec![
            b"\x1b[6;4H".to_vec(),
            b"\x1b[2J".to_vec(),
            b"\x1b[4;20h".to_vec(),
        ]
    );
}

#[test]
fn test_last_write_is_retained() {
    let transport = MockTransport::new();
    let mut terminal = ServerTerminal::new(Box::new(transport));

    terminal.cursor_home().unwrap();
    assert_eq!(terminal.last_write(), b"\x1b[H");

    terminal.reset_scroll_region().unwrap();
    assert_eq!(terminal.last_write(), b"\x1b[;r");
}
