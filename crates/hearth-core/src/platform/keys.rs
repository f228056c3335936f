// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Keycode, scancode, and modifier constants.
//!
//! Values follow SDL's layout so that records coming from any backend look the same
//! to listeners: keycodes are the lowercase character for printable keys and
//! `0x4000_0000 | scancode` for the rest.

/// Marks a keycode derived from a scancode rather than a character.
pub const SCANCODE_MASK: u32 = 1 << 30;

/// Builds the keycode of a non-printable key from its scancode.
pub const fn from_scancode(scancode: u16) -> u32 {
    scancode as u32 | SCANCODE_MASK
}

/// Builds the keycode of a printable key from the character it produces.
pub fn from_char(c: char) -> u32 {
    c.to_lowercase().next().unwrap_or(c) as u32
}

// ============================================================================
// Control Keys
// ============================================================================

/// Return / Enter key
pub const RETURN: u32 = '\r' as u32;

/// Escape key
pub const ESCAPE: u32 = 0x1B;

/// Backspace key
pub const BACKSPACE: u32 = 0x08;

/// Tab key
pub const TAB: u32 = '\t' as u32;

/// Space bar
pub const SPACE: u32 = ' ' as u32;

// ============================================================================
// Letters and Digits
// ============================================================================

/// A key
pub const A: u32 = 'a' as u32;

/// B key
pub const B: u32 = 'b' as u32;

/// C key
pub const C: u32 = 'c' as u32;

/// D key
pub const D: u32 = 'd' as u32;

/// E key
pub const E: u32 = 'e' as u32;

/// F key
pub const F: u32 = 'f' as u32;

/// G key
pub const G: u32 = 'g' as u32;

/// H key
pub const H: u32 = 'h' as u32;

/// I key
pub const I: u32 = 'i' as u32;

/// J key
pub const J: u32 = 'j' as u32;

/// K key
pub const K: u32 = 'k' as u32;

/// L key
pub const L: u32 = 'l' as u32;

/// M key
pub const M: u32 = 'm' as u32;

/// N key
pub const N: u32 = 'n' as u32;

/// O key
pub const O: u32 = 'o' as u32;

/// P key
pub const P: u32 = 'p' as u32;

/// Q key
pub const Q: u32 = 'q' as u32;

/// R key
pub const R: u32 = 'r' as u32;

/// S key
pub const S: u32 = 's' as u32;

/// T key
pub const T: u32 = 't' as u32;

/// U key
pub const U: u32 = 'u' as u32;

/// V key
pub const V: u32 = 'v' as u32;

/// W key
pub const W: u32 = 'w' as u32;

/// X key
pub const X: u32 = 'x' as u32;

/// Y key
pub const Y: u32 = 'y' as u32;

/// Z key
pub const Z: u32 = 'z' as u32;

/// 0 key
pub const NUM_0: u32 = '0' as u32;

/// 1 key
pub const NUM_1: u32 = '1' as u32;

/// 2 key
pub const NUM_2: u32 = '2' as u32;

/// 3 key
pub const NUM_3: u32 = '3' as u32;

/// 4 key
pub const NUM_4: u32 = '4' as u32;

/// 5 key
pub const NUM_5: u32 = '5' as u32;

/// 6 key
pub const NUM_6: u32 = '6' as u32;

/// 7 key
pub const NUM_7: u32 = '7' as u32;

/// 8 key
pub const NUM_8: u32 = '8' as u32;

/// 9 key
pub const NUM_9: u32 = '9' as u32;

// ============================================================================
// Function and Navigation Keys
// ============================================================================

/// F1 key
pub const F1: u32 = from_scancode(scancodes::F1);

/// F2 key
pub const F2: u32 = from_scancode(scancodes::F2);

/// F3 key
pub const F3: u32 = from_scancode(scancodes::F3);

/// F4 key
pub const F4: u32 = from_scancode(scancodes::F4);

/// F5 key
pub const F5: u32 = from_scancode(scancodes::F5);

/// F6 key
pub const F6: u32 = from_scancode(scancodes::F6);

/// F7 key
pub const F7: u32 = from_scancode(scancodes::F7);

/// F8 key
pub const F8: u32 = from_scancode(scancodes::F8);

/// F9 key
pub const F9: u32 = from_scancode(scancodes::F9);

/// F10 key
pub const F10: u32 = from_scancode(scancodes::F10);

/// F11 key
pub const F11: u32 = from_scancode(scancodes::F11);

/// F12 key
pub const F12: u32 = from_scancode(scancodes::F12);

/// Right arrow key
pub const RIGHT: u32 = from_scancode(scancodes::RIGHT);

/// Left arrow key
pub const LEFT: u32 = from_scancode(scancodes::LEFT);

/// Down arrow key
pub const DOWN: u32 = from_scancode(scancodes::DOWN);

/// Up arrow key
pub const UP: u32 = from_scancode(scancodes::UP);

/// Physical key positions (USB HID usage page 0x07).
pub mod scancodes {
    /// A key
    pub const A: u16 = 4;
    /// B key
    pub const B: u16 = 5;
    /// C key
    pub const C: u16 = 6;
    /// D key
    pub const D: u16 = 7;
    /// E key
    pub const E: u16 = 8;
    /// F key
    pub const F: u16 = 9;
    /// G key
    pub const G: u16 = 10;
    /// H key
    pub const H: u16 = 11;
    /// I key
    pub const I: u16 = 12;
    /// J key
    pub const J: u16 = 13;
    /// K key
    pub const K: u16 = 14;
    /// L key
    pub const L: u16 = 15;
    /// M key
    pub const M: u16 = 16;
    /// N key
    pub const N: u16 = 17;
    /// O key
    pub const O: u16 = 18;
    /// P key
    pub const P: u16 = 19;
    /// Q key
    pub const Q: u16 = 20;
    /// R key
    pub const R: u16 = 21;
    /// S key
    pub const S: u16 = 22;
    /// T key
    pub const T: u16 = 23;
    /// U key
    pub const U: u16 = 24;
    /// V key
    pub const V: u16 = 25;
    /// W key
    pub const W: u16 = 26;
    /// X key
    pub const X: u16 = 27;
    /// Y key
    pub const Y: u16 = 28;
    /// Z key
    pub const Z: u16 = 29;
    /// 1 key
    pub const NUM_1: u16 = 30;
    /// 2 key
    pub const NUM_2: u16 = 31;
    /// 3 key
    pub const NUM_3: u16 = 32;
    /// 4 key
    pub const NUM_4: u16 = 33;
    /// 5 key
    pub const NUM_5: u16 = 34;
    /// 6 key
    pub const NUM_6: u16 = 35;
    /// 7 key
    pub const NUM_7: u16 = 36;
    /// 8 key
    pub const NUM_8: u16 = 37;
    /// 9 key
    pub const NUM_9: u16 = 38;
    /// 0 key
    pub const NUM_0: u16 = 39;
    /// Return key
    pub const RETURN: u16 = 40;
    /// Escape key
    pub const ESCAPE: u16 = 41;
    /// Backspace key
    pub const BACKSPACE: u16 = 42;
    /// Tab key
    pub const TAB: u16 = 43;
    /// Space bar
    pub const SPACE: u16 = 44;
    /// F1 key
    pub const F1: u16 = 58;
    /// F2 key
    pub const F2: u16 = 59;
    /// F3 key
    pub const F3: u16 = 60;
    /// F4 key
    pub const F4: u16 = 61;
    /// F5 key
    pub const F5: u16 = 62;
    /// F6 key
    pub const F6: u16 = 63;
    /// F7 key
    pub const F7: u16 = 64;
    /// F8 key
    pub const F8: u16 = 65;
    /// F9 key
    pub const F9: u16 = 66;
    /// F10 key
    pub const F10: u16 = 67;
    /// F11 key
    pub const F11: u16 = 68;
    /// F12 key
    pub const F12: u16 = 69;
    /// Right arrow key
    pub const RIGHT: u16 = 79;
    /// Left arrow key
    pub const LEFT: u16 = 80;
    /// Down arrow key
    pub const DOWN: u16 = 81;
    /// Up arrow key
    pub const UP: u16 = 82;
}

/// Modifier bits carried in [`KeyboardData::modifiers`](crate::event::KeyboardData).
pub mod modifiers {
    /// No modifier held.
    pub const NONE: u16 = 0x0000;
    /// Left Shift
    pub const LSHIFT: u16 = 0x0001;
    /// Right Shift
    pub const RSHIFT: u16 = 0x0002;
    /// Left Control
    pub const LCTRL: u16 = 0x0040;
    /// Right Control
    pub const RCTRL: u16 = 0x0080;
    /// Left Alt
    pub const LALT: u16 = 0x0100;
    /// Right Alt (AltGr on some keyboards)
    pub const RALT: u16 = 0x0200;
    /// Left Super / Windows / Command
    pub const LGUI: u16 = 0x0400;
    /// Right Super / Windows / Command
    pub const RGUI: u16 = 0x0800;
    /// Num Lock is on
    pub const NUM: u16 = 0x1000;
    /// Caps Lock is on
    pub const CAPS: u16 = 0x2000;

    /// Either Shift
    pub const SHIFT: u16 = LSHIFT | RSHIFT;
    /// Either Control
    pub const CTRL: u16 = LCTRL | RCTRL;
    /// Either Alt
    pub const ALT: u16 = LALT | RALT;
    /// Either Super
    pub const GUI: u16 = LGUI | RGUI;
}
