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

//! Defines the event value and its category tag.

use super::error::EventError;
use crate::platform::input::RawInput;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// The discriminant identifying an event's kind.
///
/// The built-in categories occupy small values. Application-defined categories live in
/// the custom range: any tag whose top bit ([`EventCategory::CUSTOM_BIT`]) is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventCategory(u32);

impl EventCategory {
    /// The reserved high bit marking an application-defined category.
    pub const CUSTOM_BIT: u32 = 1 << (u32::BITS - 1);

    /// An event carrying nothing.
    pub const NONE: Self = Self(0);
    /// A key went down.
    pub const KEY_DOWN: Self = Self(1);
    /// A key went up.
    pub const KEY_UP: Self = Self(2);
    /// A full press (down then up) of a key.
    pub const KEY_PRESSED: Self = Self(3);
    /// The user or the platform asked the application to quit.
    pub const QUIT: Self = Self(4);

    /// Builds an application-defined category.
    ///
    /// # Errors
    /// Returns [`EventError::InvalidCustomTag`] if `tag` lacks [`Self::CUSTOM_BIT`].
    pub const fn custom(tag: u32) -> Result<Self, EventError> {
        if tag & Self::CUSTOM_BIT == 0 {
            return Err(EventError::InvalidCustomTag(tag));
        }
        Ok(Self(tag))
    }

    /// Returns the underlying integer tag.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` for application-defined categories.
    pub const fn is_custom(self) -> bool {
        self.0 & Self::CUSTOM_BIT != 0
    }

    /// Returns `true` for the categories that carry [`KeyboardData`].
    pub const fn is_keyboard(self) -> bool {
        matches!(self, Self::KEY_DOWN | Self::KEY_UP | Self::KEY_PRESSED)
    }

    /// A human-readable name, used for diagnostics.
    ///
    /// Unknown and custom categories format as `Other: <raw tag>`.
    pub fn name(self) -> String {
        match self {
            Self::NONE => "None".to_string(),
            Self::QUIT => "Quit".to_string(),
            Self::KEY_DOWN => "Key Down".to_string(),
            Self::KEY_UP => "Key Up".to_string(),
            Self::KEY_PRESSED => "Key Pressed".to_string(),
            Self(raw) => format!("Other: {raw}"),
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Payload shared by every keyboard category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardData {
    /// The layout-dependent key symbol (see [`crate::platform::keys`]).
    pub keycode: u32,
    /// The physical key position.
    pub scancode: u16,
    /// Bitmask of held modifier keys (see [`crate::platform::keys::modifiers`]).
    pub modifiers: u16,
}

/// Payload of an application-defined event.
///
/// The category is validated at construction, so every `CustomEvent` in existence
/// has its custom bit set.
#[derive(Clone)]
pub struct CustomEvent {
    category: EventCategory,
    data: Rc<dyn Any>,
}

impl CustomEvent {
    /// Creates a custom payload under `tag`.
    ///
    /// # Errors
    /// Returns [`EventError::InvalidCustomTag`] if `tag` lacks the custom bit.
    pub fn new(tag: u32, data: Rc<dyn Any>) -> Result<Self, EventError> {
        Ok(Self {
            category: EventCategory::custom(tag)?,
            data,
        })
    }

    /// The category this payload was created under.
    pub fn category(&self) -> EventCategory {
        self.category
    }

    /// The shared data exactly as it was passed in.
    pub fn data(&self) -> &Rc<dyn Any> {
        &self.data
    }

    /// Borrows the data as `T`, or `None` if it holds another type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.data.downcast_ref::<T>()
    }
}

impl fmt::Debug for CustomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomEvent")
            .field("category", &self.category)
            .field("data", &Rc::as_ptr(&self.data))
            .finish()
    }
}

/// An immutable, self-describing event.
///
/// The variant *is* the category, so there is no way to pair a tag with a payload it
/// does not own. Payload accessors check the category and report a mismatch as an
/// [`EventError`] instead of reading garbage.
#[derive(Debug, Clone)]
pub enum Event {
    /// Carries nothing.
    None,
    /// A key went down.
    KeyDown(KeyboardData),
    /// A key went up.
    KeyUp(KeyboardData),
    /// A key was pressed and released.
    KeyPressed(KeyboardData),
    /// A request to quit the application.
    Quit,
    /// An application-defined event.
    Custom(CustomEvent),
}

impl Event {
    /// Builds a [`Event::KeyDown`].
    pub const fn key_down(keycode: u32, scancode: u16, modifiers: u16) -> Self {
        Self::KeyDown(KeyboardData {
            keycode,
            scancode,
            modifiers,
        })
    }

    /// Builds a [`Event::KeyUp`].
    pub const fn key_up(keycode: u32, scancode: u16, modifiers: u16) -> Self {
        Self::KeyUp(KeyboardData {
            keycode,
            scancode,
            modifiers,
        })
    }

    /// Builds a [`Event::KeyPressed`].
    pub const fn key_pressed(keycode: u32, scancode: u16, modifiers: u16) -> Self {
        Self::KeyPressed(KeyboardData {
            keycode,
            scancode,
            modifiers,
        })
    }

    /// Builds a [`Event::Quit`].
    pub const fn quit() -> Self {
        Self::Quit
    }

    /// Builds a [`Event::Custom`] under `tag`, carrying `data`.
    ///
    /// # Errors
    /// Returns [`EventError::InvalidCustomTag`] if `tag` lacks the custom bit.
    pub fn custom(tag: u32, data: Rc<dyn Any>) -> Result<Self, EventError> {
        CustomEvent::new(tag, data).map(Self::Custom)
    }

    /// Translates one raw platform record.
    ///
    /// Only quit requests and key-down records are recognised; everything else
    /// yields `None` and is dropped at this boundary.
    pub fn from_raw(raw: &RawInput) -> Option<Self> {
        match *raw {
            RawInput::Quit => Some(Self::Quit),
            RawInput::KeyDown {
                keycode,
                scancode,
                modifiers,
            } => Some(Self::key_down(keycode, scancode, modifiers)),
            _ => None,
        }
    }

    /// The event's category. Always available.
    pub fn category(&self) -> EventCategory {
        match self {
            Self::None => EventCategory::NONE,
            Self::KeyDown(_) => EventCategory::KEY_DOWN,
            Self::KeyUp(_) => EventCategory::KEY_UP,
            Self::KeyPressed(_) => EventCategory::KEY_PRESSED,
            Self::Quit => EventCategory::QUIT,
            Self::Custom(custom) => custom.category(),
        }
    }

    /// A human-readable name for diagnostics. See [`EventCategory::name`].
    pub fn name(&self) -> String {
        self.category().name()
    }

    /// The keyboard payload.
    ///
    /// # Errors
    /// Returns [`EventError::WrongCategory`] unless this is a keyboard event.
    pub fn keyboard(&self) -> Result<&KeyboardData, EventError> {
        self.keyboard_for("keyboard")
    }

    /// The key symbol of a keyboard event.
    ///
    /// # Errors
    /// Returns [`EventError::WrongCategory`] unless this is a keyboard event.
    pub fn keycode(&self) -> Result<u32, EventError> {
        self.keyboard_for("keycode").map(|k| k.keycode)
    }

    /// The physical scancode of a keyboard event.
    ///
    /// # Errors
    /// Returns [`EventError::WrongCategory`] unless this is a keyboard event.
    pub fn scancode(&self) -> Result<u16, EventError> {
        self.keyboard_for("scancode").map(|k| k.scancode)
    }

    /// The modifier bitmask of a keyboard event.
    ///
    /// # Errors
    /// Returns [`EventError::WrongCategory`] unless this is a keyboard event.
    pub fn modifiers(&self) -> Result<u16, EventError> {
        self.keyboard_for("modifiers").map(|k| k.modifiers)
    }

    /// The custom payload.
    ///
    /// # Errors
    /// Returns [`EventError::WrongCategory`] unless this is a custom event.
    pub fn custom_data(&self) -> Result<&Rc<dyn Any>, EventError> {
        match self {
            Self::Custom(custom) => Ok(custom.data()),
            other => Err(EventError::WrongCategory {
                accessor: "custom_data",
                expected: "custom",
                actual: other.category(),
            }),
        }
    }

    fn keyboard_for(&self, accessor: &'static str) -> Result<&KeyboardData, EventError> {
        match self {
            Self::KeyDown(data) | Self::KeyUp(data) | Self::KeyPressed(data) => Ok(data),
            other => Err(EventError::WrongCategory {
                accessor,
                expected: "keyboard",
                actual: other.category(),
            }),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.category().fmt(f)
    }
}
