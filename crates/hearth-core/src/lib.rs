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

//! # Hearth Core
//!
//! Foundational crate for the Hearth game runtime: the tagged [`Event`](event::Event)
//! value, the multicast [`ListenerRegistry`](event::ListenerRegistry), scoped listener
//! lifetimes, and the boundary through which raw platform input enters the engine.
//!
//! Everything here is single-threaded and synchronous. The registry is meant to be
//! driven from one event-loop thread.

#![warn(missing_docs)]

pub mod event;
pub mod platform;

pub use event::{
    Event, EventCategory, ListenerHandle, ListenerRegistry, ListenerScope, Propagation,
};
pub use platform::input::{InputSource, RawInput};
