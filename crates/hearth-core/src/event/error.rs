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

//! Error types for event construction, payload access, and listener bookkeeping.
//!
//! Every variant is a broken precondition on the caller's side. They are returned
//! rather than asserted so the offending operation stops without touching registry
//! state, and the message names the operation and what it expected.

use super::registry::ListenerHandle;
use super::types::EventCategory;
use thiserror::Error;

/// A misuse of an [`Event`](super::Event) or [`EventCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// A payload accessor was called on an event of a category it does not cover.
    #[error("`{accessor}` requires a {expected} event, but the event is `{actual}`")]
    WrongCategory {
        /// The accessor that was called.
        accessor: &'static str,
        /// The family of categories the accessor accepts.
        expected: &'static str,
        /// The category the event actually has.
        actual: EventCategory,
    },
    /// A custom category was requested with a tag lacking the reserved high bit.
    #[error(
        "custom event tag {0:#010x} must have the reserved bit {bit:#010x} set",
        bit = EventCategory::CUSTOM_BIT
    )]
    InvalidCustomTag(u32),
}

/// A misuse of a [`ListenerRegistry`](super::ListenerRegistry) or
/// [`ListenerScope`](super::ListenerScope).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The scope does not track this handle.
    #[error("unregister/release: {0} is not tracked by this scope")]
    NotTracked(ListenerHandle),
    /// The handle was tracked, but its listener had already been removed
    /// (typically by [`ListenerRegistry::clear`](super::ListenerRegistry::clear)).
    #[error("unregister: {0} no longer refers to a registered listener")]
    StaleHandle(ListenerHandle),
    /// The scope is bound to another registry, or its registry is gone.
    #[error("unregister: the scope is not bound to this registry")]
    ForeignScope,
    /// The handle was issued by a registry other than the one the scope is bound to.
    #[error("track: {0} was not issued by the scope's registry")]
    ForeignHandle(ListenerHandle),
}
