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

//! Synchronous, in-process event dispatch.
//!
//! - [`Event`] is an immutable tagged value. Each category has its own constructor,
//!   so a tag can never be paired with the wrong payload.
//! - [`ListenerRegistry`] maps an [`EventCategory`] to an ordered list of listeners
//!   and owns a FIFO of pending events.
//! - [`ListenerScope`] tracks the handles it installed and removes them all when
//!   it is dropped, so no listener outlives its logical owner.

mod error;
mod registry;
mod scope;
mod types;

pub use self::error::{EventError, RegistryError};
pub use self::registry::{
    Listener, ListenerHandle, ListenerRegistry, Propagation, WeakListenerRegistry,
};
pub use self::scope::ListenerScope;
pub use self::types::{CustomEvent, Event, EventCategory, KeyboardData};
