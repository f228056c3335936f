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

//! Provides translation from a concrete windowing backend (`winit`) to the engine's raw
//! input records.
//!
//! `winit` pushes events into the application through callbacks, while the engine core
//! pulls them through [`InputSource::poll`]. [`WinitInputSource`] bridges the two by
//! buffering translated records until the next poll.

use hearth_core::platform::input::{InputSource, RawInput};
use hearth_core::platform::keys::{self, modifiers, scancodes};
use std::collections::VecDeque;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, KeyCode, ModifiersState, NamedKey, PhysicalKey};

/// Buffers `winit` window events as [`RawInput`] records for the engine to poll.
#[derive(Debug, Default)]
pub struct WinitInputSource {
    pending: VecDeque<RawInput>,
    modifiers: u16,
}

impl WinitInputSource {
    /// Creates an empty source with no modifiers held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one window event received from the `winit` event loop.
    ///
    /// Modifier changes update the state stamped onto later key records. Events with
    /// no raw input counterpart (resize, focus, redraw) are ignored.
    pub fn push_window_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::ModifiersChanged(mods) = event {
            self.modifiers = modifier_bits(mods.state());
            return;
        }
        if let Some(raw) = translate_winit_input(event, self.modifiers) {
            log::debug!("Input record: {raw:?}");
            self.pending.push_back(raw);
        }
    }

    /// The modifier bits currently held.
    pub fn modifiers(&self) -> u16 {
        self.modifiers
    }

    /// Number of records waiting to be polled.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl InputSource for WinitInputSource {
    fn poll(&mut self) -> Option<RawInput> {
        self.pending.pop_front()
    }
}

/// Translates a `winit::event::WindowEvent` into a [`RawInput`] record.
///
/// `modifiers` is the modifier mask held at the time of the event, since `winit`
/// reports modifier changes as separate events.
///
/// # Returns
///
/// Returns `Some(RawInput)` for close requests, keyboard input, and cursor motion, or
/// `None` for everything else.
pub fn translate_winit_input(event: &WindowEvent, modifiers: u16) -> Option<RawInput> {
    match event {
        WindowEvent::CloseRequested => Some(RawInput::Quit),
        WindowEvent::KeyboardInput {
            event: key_event, ..
        } => {
            let keycode = map_logical_key(&key_event.logical_key);
            let scancode = map_physical_key(key_event.physical_key);
            Some(match key_event.state {
                ElementState::Pressed => RawInput::KeyDown {
                    keycode,
                    scancode,
                    modifiers,
                },
                ElementState::Released => RawInput::KeyUp {
                    keycode,
                    scancode,
                    modifiers,
                },
            })
        }
        WindowEvent::CursorMoved { position, .. } => Some(RawInput::MouseMotion {
            x: position.x as f32,
            y: position.y as f32,
        }),
        _ => None,
    }
}

// --- Private Helper Functions ---

/// (Internal) Maps `winit`'s modifier state to the engine's modifier bits.
///
/// Not every platform reports which side is held, so the left bit stands for either.
fn modifier_bits(state: ModifiersState) -> u16 {
    let mut bits = modifiers::NONE;
    if state.shift_key() {
        bits |= modifiers::LSHIFT;
    }
    if state.control_key() {
        bits |= modifiers::LCTRL;
    }
    if state.alt_key() {
        bits |= modifiers::LALT;
    }
    if state.super_key() {
        bits |= modifiers::LGUI;
    }
    bits
}

/// (Internal) Maps a layout-aware `winit` key to a keycode. Unknown keys map to `0`.
fn map_logical_key(key: &Key) -> u32 {
    match key {
        Key::Character(text) => text.chars().next().map_or(0, keys::from_char),
        Key::Named(named) => match named {
            NamedKey::Escape => keys::ESCAPE,
            NamedKey::Enter => keys::RETURN,
            NamedKey::Tab => keys::TAB,
            NamedKey::Backspace => keys::BACKSPACE,
            NamedKey::Space => keys::SPACE,
            NamedKey::ArrowRight => keys::RIGHT,
            NamedKey::ArrowLeft => keys::LEFT,
            NamedKey::ArrowDown => keys::DOWN,
            NamedKey::ArrowUp => keys::UP,
            NamedKey::F1 => keys::F1,
            NamedKey::F2 => keys::F2,
            NamedKey::F3 => keys::F3,
            NamedKey::F4 => keys::F4,
            NamedKey::F5 => keys::F5,
            NamedKey::F6 => keys::F6,
            NamedKey::F7 => keys::F7,
            NamedKey::F8 => keys::F8,
            NamedKey::F9 => keys::F9,
            NamedKey::F10 => keys::F10,
            NamedKey::F11 => keys::F11,
            NamedKey::F12 => keys::F12,
            _ => 0,
        },
        _ => 0,
    }
}

/// (Internal) Maps a physical `winit` key to a scancode. Unknown keys map to `0`.
fn map_physical_key(key: PhysicalKey) -> u16 {
    let PhysicalKey::Code(code) = key else {
        return 0;
    };
    match code {
        KeyCode::KeyA => scancodes::A,
        KeyCode::KeyB => scancodes::B,
        KeyCode::KeyC => scancodes::C,
        KeyCode::KeyD => scancodes::D,
        KeyCode::KeyE => scancodes::E,
        KeyCode::KeyF => scancodes::F,
        KeyCode::KeyG => scancodes::G,
        KeyCode::KeyH => scancodes::H,
        KeyCode::KeyI => scancodes::I,
        KeyCode::KeyJ => scancodes::J,
        KeyCode::KeyK => scancodes::K,
        KeyCode::KeyL => scancodes::L,
        KeyCode::KeyM => scancodes::M,
        KeyCode::KeyN => scancodes::N,
        KeyCode::KeyO => scancodes::O,
        KeyCode::KeyP => scancodes::P,
        KeyCode::KeyQ => scancodes::Q,
        KeyCode::KeyR => scancodes::R,
        KeyCode::KeyS => scancodes::S,
        KeyCode::KeyT => scancodes::T,
        KeyCode::KeyU => scancodes::U,
        KeyCode::KeyV => scancodes::V,
        KeyCode::KeyW => scancodes::W,
        KeyCode::KeyX => scancodes::X,
        KeyCode::KeyY => scancodes::Y,
        KeyCode::KeyZ => scancodes::Z,
        KeyCode::Digit1 => scancodes::NUM_1,
        KeyCode::Digit2 => scancodes::NUM_2,
        KeyCode::Digit3 => scancodes::NUM_3,
        KeyCode::Digit4 => scancodes::NUM_4,
        KeyCode::Digit5 => scancodes::NUM_5,
        KeyCode::Digit6 => scancodes::NUM_6,
        KeyCode::Digit7 => scancodes::NUM_7,
        KeyCode::Digit8 => scancodes::NUM_8,
        KeyCode::Digit9 => scancodes::NUM_9,
        KeyCode::Digit0 => scancodes::NUM_0,
        KeyCode::Enter => scancodes::RETURN,
        KeyCode::Escape => scancodes::ESCAPE,
        KeyCode::Backspace => scancodes::BACKSPACE,
        KeyCode::Tab => scancodes::TAB,
        KeyCode::Space => scancodes::SPACE,
        KeyCode::F1 => scancodes::F1,
        KeyCode::F2 => scancodes::F2,
        KeyCode::F3 => scancodes::F3,
        KeyCode::F4 => scancodes::F4,
        KeyCode::F5 => scancodes::F5,
        KeyCode::F6 => scancodes::F6,
        KeyCode::F7 => scancodes::F7,
        KeyCode::F8 => scancodes::F8,
        KeyCode::F9 => scancodes::F9,
        KeyCode::F10 => scancodes::F10,
        KeyCode::F11 => scancodes::F11,
        KeyCode::F12 => scancodes::F12,
        KeyCode::ArrowRight => scancodes::RIGHT,
        KeyCode::ArrowLeft => scancodes::LEFT,
        KeyCode::ArrowDown => scancodes::DOWN,
        KeyCode::ArrowUp => scancodes::UP,
        _ => 0,
    }
}

// --- Unit Tests for Input Translation ---
#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn test_map_logical_key_named() {
        assert_eq!(map_logical_key(&Key::Named(NamedKey::Escape)), keys::ESCAPE);
        assert_eq!(map_logical_key(&Key::Named(NamedKey::Enter)), keys::RETURN);
        assert_eq!(map_logical_key(&Key::Named(NamedKey::F5)), keys::F5);
        assert_eq!(map_logical_key(&Key::Named(NamedKey::CapsLock)), 0);
    }

    #[test]
    fn test_map_logical_key_character_is_lowercased() {
        assert_eq!(map_logical_key(&Key::Character("A".into())), keys::A);
        assert_eq!(map_logical_key(&Key::Character("3".into())), keys::NUM_3);
    }

    #[test]
    fn test_map_physical_key() {
        assert_eq!(map_physical_key(PhysicalKey::Code(KeyCode::KeyA)), scancodes::A);
        assert_eq!(
            map_physical_key(PhysicalKey::Code(KeyCode::Escape)),
            scancodes::ESCAPE
        );
        assert_eq!(
            map_physical_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            0
        );
    }

    #[test]
    fn test_modifier_bits() {
        assert_eq!(modifier_bits(ModifiersState::empty()), modifiers::NONE);
        assert_eq!(modifier_bits(ModifiersState::SHIFT), modifiers::LSHIFT);
        assert_eq!(
            modifier_bits(ModifiersState::CONTROL | ModifiersState::ALT),
            modifiers::LCTRL | modifiers::LALT
        );
        assert_eq!(modifier_bits(ModifiersState::SUPER), modifiers::LGUI);
    }

    #[test]
    fn test_translate_close_requested_is_quit() {
        assert_eq!(
            translate_winit_input(&WindowEvent::CloseRequested, 0),
            Some(RawInput::Quit)
        );
    }

    #[test]
    fn test_translate_non_input_returns_none() {
        let winit_event_resize = WindowEvent::Resized(winit::dpi::PhysicalSize::new(100, 100));
        let winit_event_focus = WindowEvent::Focused(true);
        assert_eq!(translate_winit_input(&winit_event_resize, 0), None);
        assert_eq!(translate_winit_input(&winit_event_focus, 0), None);
        assert_eq!(translate_winit_input(&WindowEvent::RedrawRequested, 0), None);
    }

    #[test]
    fn test_source_buffers_until_polled() {
        let mut source = WinitInputSource::new();
        source.push_window_event(&WindowEvent::Focused(false));
        source.push_window_event(&WindowEvent::CloseRequested);
        source.push_window_event(&WindowEvent::CloseRequested);
        assert_eq!(source.pending_len(), 2);

        assert_eq!(source.poll(), Some(RawInput::Quit));
        assert_eq!(source.poll(), Some(RawInput::Quit));
        assert_eq!(source.poll(), None);
        assert_eq!(source.modifiers(), modifiers::NONE);
    }
}
