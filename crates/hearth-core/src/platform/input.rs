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

//! The boundary through which raw platform input enters the engine.

use std::collections::VecDeque;

/// One raw record from the platform, before translation into an
/// [`Event`](crate::event::Event).
///
/// The core recognises only [`RawInput::Quit`] and [`RawInput::KeyDown`]. The other
/// variants exist so backends can report everything they see; they are dropped at
/// translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    /// The platform asked the application to close.
    Quit,
    /// A key went down (including auto-repeat).
    KeyDown {
        /// Layout-dependent key symbol (see [`super::keys`]).
        keycode: u32,
        /// Physical key position (see [`super::keys::scancodes`]).
        scancode: u16,
        /// Held modifiers (see [`super::keys::modifiers`]).
        modifiers: u16,
    },
    /// A key went up.
    KeyUp {
        /// Layout-dependent key symbol.
        keycode: u32,
        /// Physical key position.
        scancode: u16,
        /// Held modifiers.
        modifiers: u16,
    },
    /// The cursor moved to a new position, in physical pixels.
    MouseMotion {
        /// The new x-coordinate of the cursor.
        x: f32,
        /// The new y-coordinate of the cursor.
        y: f32,
    },
    /// Anything else, identified only by a backend-specific discriminant.
    Other {
        /// The backend's own type discriminant.
        kind: u32,
    },
}

/// A pollable source of raw input.
///
/// `poll` must not block: it returns `None` as soon as nothing is available.
pub trait InputSource {
    /// Takes the next available record, if any.
    fn poll(&mut self) -> Option<RawInput>;
}

/// An in-memory [`InputSource`] replaying scripted records in order.
///
/// Used for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct QueuedInput {
    records: VecDeque<RawInput>,
}

impl QueuedInput {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source that will yield `records` in order.
    pub fn from_records(records: impl IntoIterator<Item = RawInput>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Appends a record.
    pub fn push(&mut self, record: RawInput) {
        self.records.push_back(record);
    }

    /// Number of records not yet polled.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` once every record has been polled.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl InputSource for QueuedInput {
    fn poll(&mut self) -> Option<RawInput> {
        self.records.pop_front()
    }
}

impl Extend<RawInput> for QueuedInput {
    fn extend<I: IntoIterator<Item = RawInput>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}
