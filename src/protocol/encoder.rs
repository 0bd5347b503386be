//! Command encoder
//!
//! Pure, stateless builders turning semantic terminal operations into their
//! exact escape byte sequences. `ServerTerminal` wraps each builder in a
//! single transport write; the builders themselves never touch I/O, so the
//! wire format is testable byte for byte.
//!
//! Numeric cursor/edit operations default to a count of 1 at the call site;
//! the builders encode whatever count they are given. Coordinates are
//! zero-based in the API and 1-based on the wire.

use std::fmt::Display;

use crate::models::{Attribute, CharacterSet, CharsetSlot};

/// The escape introducer
pub const ESC: u8 = 0x1b;

const CSI: &str = "\x1b[";

/// The cursor-position query (`DSR` 6), answered by a `CSI line;column R`
/// report
pub const CURSOR_POSITION_QUERY: &[u8] = b"\x1b[6n";

pub fn cursor_up(n: u16) -> Vec<u8> {
    format!("{CSI}{n}A").into_bytes()
}

pub fn cursor_down(n: u16) -> Vec<u8> {
    format!("{CSI}{n}B").into_bytes()
}

pub fn cursor_forward(n: u16) -> Vec<u8> {
    format!("{CSI}{n}C").into_bytes()
}

pub fn cursor_backward(n: u16) -> Vec<u8> {
    format!("{CSI}{n}D").into_bytes()
}

/// Absolute cursor move; `column` and `row` are zero-based
pub fn cursor_position(column: u16, row: u16) -> Vec<u8> {
    format!("{CSI}{};{}H", u32::from(row) + 1, u32::from(column) + 1).into_bytes()
}

pub fn cursor_home() -> Vec<u8> {
    b"\x1b[H".to_vec()
}

/// Move down one line, scrolling if at the bottom margin
pub fn index() -> Vec<u8> {
    b"\x1bD".to_vec()
}

/// Move up one line, scrolling if at the top margin
pub fn reverse_index() -> Vec<u8> {
    b"\x1bM".to_vec()
}

/// First column of the next line, scrolling if necessary
pub fn next_line() -> Vec<u8> {
    b"\x1bE".to_vec()
}

pub fn save_cursor() -> Vec<u8> {
    b"\x1b7".to_vec()
}

pub fn restore_cursor() -> Vec<u8> {
    b"\x1b8".to_vec()
}

/// `CSI <modes> h`; mode values are opaque, integers or strings alike
pub fn set_mode<M: Display>(modes: &[M]) -> Vec<u8> {
    format!("{CSI}{}h", join(modes)).into_bytes()
}

/// `CSI <modes> l`
pub fn reset_mode<M: Display>(modes: &[M]) -> Vec<u8> {
    format!("{CSI}{}l", join(modes)).into_bytes()
}

pub fn application_keypad_mode() -> Vec<u8> {
    b"\x1b=".to_vec()
}

pub fn numeric_keypad_mode() -> Vec<u8> {
    b"\x1b>".to_vec()
}

/// Designate `set` into slot G0 or G1
pub fn select_character_set(set: CharacterSet, slot: CharsetSlot) -> Vec<u8> {
    vec![ESC, slot.designator(), set.code()]
}

/// Shift to G2 for the next single character
pub fn single_shift2() -> Vec<u8> {
    b"\x1bN".to_vec()
}

/// Shift to G3 for the next single character
pub fn single_shift3() -> Vec<u8> {
    b"\x1bO".to_vec()
}

/// `CSI <codes> m`
pub fn select_graphic_rendition(attributes: &[Attribute]) -> Vec<u8> {
    let codes: Vec<String> = attributes
        .iter()
        .map(|attr| attr.sgr_code().to_string())
        .collect();
    format!("{CSI}{}m", codes.join(";")).into_bytes()
}

/// Set a tab stop at the cursor position
pub fn horizontal_tabulation_set() -> Vec<u8> {
    b"\x1bH".to_vec()
}

/// Clear the tab stop at the cursor position
pub fn tabulation_clear() -> Vec<u8> {
    b"\x1b[q".to_vec()
}

/// Clear all tab stops
pub fn tabulation_clear_all() -> Vec<u8> {
    b"\x1b[3q".to_vec()
}

/// Make the current line the top (or bottom) half of a double-height line
pub fn double_height_line(top: bool) -> Vec<u8> {
    if top {
        b"\x1b#3".to_vec()
    } else {
        b"\x1b#4".to_vec()
    }
}

pub fn single_width_line() -> Vec<u8> {
    b"\x1b#5".to_vec()
}

pub fn double_width_line() -> Vec<u8> {
    b"\x1b#6".to_vec()
}

pub fn erase_to_line_end() -> Vec<u8> {
    b"\x1b[K".to_vec()
}

pub fn erase_to_line_beginning() -> Vec<u8> {
    b"\x1b[1K".to_vec()
}

pub fn erase_line() -> Vec<u8> {
    b"\x1b[2K".to_vec()
}

pub fn erase_to_display_end() -> Vec<u8> {
    b"\x1b[J".to_vec()
}

pub fn erase_to_display_beginning() -> Vec<u8> {
    b"\x1b[1J".to_vec()
}

pub fn erase_display() -> Vec<u8> {
    b"\x1b[2J".to_vec()
}

pub fn delete_character(n: u16) -> Vec<u8> {
    format!("{CSI}{n}P").into_bytes()
}

pub fn insert_line(n: u16) -> Vec<u8> {
    format!("{CSI}{n}L").into_bytes()
}

pub fn delete_line(n: u16) -> Vec<u8> {
    format!("{CSI}{n}M").into_bytes()
}

/// `CSI <first>;<last> r`; omitted margins encode as empty fields, and both
/// omitted resets the region to the full screen
pub fn set_scroll_region(first: Option<u16>, last: Option<u16>) -> Vec<u8> {
    let first = first.map(|v| v.to_string()).unwrap_or_default();
    let last = last.map(|v| v.to_string()).unwrap_or_default();
    format!("{CSI}{first};{last}r").into_bytes()
}

/// Reset the terminal to its initial state
pub fn reset() -> Vec<u8> {
    b"\x1bc".to_vec()
}

fn join<M: Display>(values: &[M]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(";")
}
