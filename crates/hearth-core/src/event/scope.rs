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

//! Scoped listener lifetimes.

use super::error::RegistryError;
use super::registry::{remove_listener, ListenerHandle, ListenerRegistry, RegistryInner};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Tracks the listeners installed on behalf of one logical owner and removes them
/// all when dropped.
///
/// A scope is bound to exactly one registry for its whole life and holds only a weak
/// reference to it: dropping a scope after its registry is gone is a no-op.
///
/// Handles invalidated behind the scope's back (by
/// [`ListenerRegistry::clear`]) are detected through their generation and skipped at
/// teardown rather than removed twice. They are also pruned whenever the scope tracks
/// a new handle, so a long-lived scope does not accumulate them.
#[derive(Debug)]
pub struct ListenerScope {
    registry: Weak<RefCell<RegistryInner>>,
    registry_id: u32,
    handles: Vec<ListenerHandle>,
}

impl ListenerScope {
    /// Creates a scope bound to `registry`.
    pub fn bind(registry: &ListenerRegistry) -> Self {
        Self {
            registry: Rc::downgrade(registry.inner()),
            registry_id: registry.inner().borrow().id(),
            handles: Vec::with_capacity(4),
        }
    }

    /// Returns `true` if this scope was bound to `registry`.
    pub fn is_bound_to(&self, registry: &ListenerRegistry) -> bool {
        std::ptr::eq(self.registry.as_ptr(), Rc::as_ptr(registry.inner()))
    }

    /// Records `handle` for removal at teardown.
    ///
    /// [`ListenerRegistry::register`] already does this; call it directly only when
    /// taking over a handle another scope [`release`](Self::release)d.
    ///
    /// # Errors
    /// Returns [`RegistryError::ForeignHandle`] if `handle` was issued by a registry
    /// other than the one this scope is bound to.
    pub fn track(&mut self, handle: ListenerHandle) -> Result<(), RegistryError> {
        if handle.registry_id() != self.registry_id {
            return Err(RegistryError::ForeignHandle(handle));
        }
        self.record(handle);
        Ok(())
    }

    /// Tracks a handle known to come from this scope's registry, dropping any tracked
    /// handle whose listener is already gone.
    pub(crate) fn record(&mut self, handle: ListenerHandle) {
        debug_assert!(
            !self.handles.contains(&handle),
            "track: {handle} is already tracked by this scope"
        );
        if let Some(registry) = self.registry.upgrade() {
            let inner = registry.borrow();
            let before = self.handles.len();
            self.handles.retain(|h| inner.contains(*h));
            if self.handles.len() < before {
                log::trace!(
                    "Scope pruned {} stale handle(s).",
                    before - self.handles.len()
                );
            }
        }
        self.handles.push(handle);
    }

    /// Stops tracking `handle` without removing its listener.
    ///
    /// # Errors
    /// Returns [`RegistryError::NotTracked`] if this scope does not track `handle`.
    pub fn release(&mut self, handle: ListenerHandle) -> Result<(), RegistryError> {
        let position = self
            .handles
            .iter()
            .position(|h| *h == handle)
            .ok_or(RegistryError::NotTracked(handle))?;
        self.handles.remove(position);
        Ok(())
    }

    /// Stops tracking every handle without removing any listener.
    pub fn release_all(&mut self) {
        self.handles.clear();
    }

    /// The handles this scope will remove at teardown, in registration order.
    pub fn tracked(&self) -> &[ListenerHandle] {
        &self.handles
    }

    /// Number of tracked handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if no handle is tracked.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl Drop for ListenerScope {
    fn drop(&mut self) {
        let handles = std::mem::take(&mut self.handles);
        if handles.is_empty() {
            return;
        }
        let Some(registry) = self.registry.upgrade() else {
            log::trace!(
                "Scope dropped after its registry; {} handle(s) already gone.",
                handles.len()
            );
            return;
        };

        let mut removed = 0;
        for handle in handles {
            if remove_listener(&registry, handle) {
                removed += 1;
            } else {
                log::warn!("Scope teardown skipped {handle}: it was already removed.");
            }
        }
        log::debug!("Scope teardown removed {removed} listener(s).");
    }
}
