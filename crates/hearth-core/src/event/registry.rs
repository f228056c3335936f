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

//! The multicast listener registry and its pending-event queue.

use super::error::RegistryError;
use super::scope::ListenerScope;
use super::types::{Event, EventCategory};
use crate::platform::input::InputSource;
use ahash::AHashMap;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_REGISTRY_ID: AtomicU32 = AtomicU32::new(1);

/// What a listener wants to happen after it has seen an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Let the next listener observe the same event.
    Continue,
    /// Halt dispatch of this event immediately.
    Stop,
}

impl From<bool> for Propagation {
    /// `true` continues, `false` stops.
    fn from(keep_going: bool) -> Self {
        if keep_going {
            Self::Continue
        } else {
            Self::Stop
        }
    }
}

/// Something that reacts to dispatched events.
///
/// Listeners carry their own state. Anything they mutate must go through interior
/// mutability (`Cell`, `RefCell`), because a listener may be re-entered when it
/// dispatches an event of its own category.
pub trait Listener {
    /// Reacts to `event` and decides whether later listeners still see it.
    fn on_event(&self, event: &Event) -> Propagation;
}

impl<F> Listener for F
where
    F: Fn(&Event) -> Propagation,
{
    fn on_event(&self, event: &Event) -> Propagation {
        self(event)
    }
}

/// A stable identifier for one registered listener.
///
/// It combines the issuing registry's id with a slot index and a generation count.
/// When a listener is removed its slot may be recycled, but the generation is
/// incremented, so an old handle can never reach the new occupant. A handle is only
/// ever resolved by the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle {
    registry: u32,
    index: u32,
    generation: u32,
}

impl ListenerHandle {
    pub(crate) fn registry_id(self) -> u32 {
        self.registry
    }
}

impl fmt::Display for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "listener #{}v{} of registry {}",
            self.index, self.generation, self.registry
        )
    }
}

struct Entry {
    category: EventCategory,
    listener: Rc<dyn Listener>,
}

struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Storage behind a [`ListenerRegistry`]. Never borrowed across a listener call.
pub(crate) struct RegistryInner {
    /// Process-unique, stamped into every handle this registry issues.
    id: u32,
    slots: Vec<Slot>,
    freed_slots: Vec<u32>,
    /// Handles per category, in registration order.
    by_category: AHashMap<EventCategory, Vec<ListenerHandle>>,
    pending: VecDeque<Event>,
}

impl Default for RegistryInner {
    fn default() -> Self {
        Self {
            id: NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed),
            slots: Vec::new(),
            freed_slots: Vec::new(),
            by_category: AHashMap::default(),
            pending: VecDeque::new(),
        }
    }
}

impl RegistryInner {
    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    fn insert(&mut self, category: EventCategory, listener: Rc<dyn Listener>) -> ListenerHandle {
        let entry = Some(Entry { category, listener });
        let handle = if let Some(index) = self.freed_slots.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = entry;
            ListenerHandle {
                registry: self.id,
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                entry,
            });
            ListenerHandle {
                registry: self.id,
                index,
                generation: 0,
            }
        };
        self.by_category.entry(category).or_default().push(handle);
        handle
    }

    pub(crate) fn contains(&self, handle: ListenerHandle) -> bool {
        handle.registry == self.id
            && self
                .slots
                .get(handle.index as usize)
                .is_some_and(|slot| slot.generation == handle.generation && slot.entry.is_some())
    }

    /// Detaches the entry for `handle`. The caller drops it once the borrow is released.
    fn take(&mut self, handle: ListenerHandle) -> Option<Entry> {
        if !self.contains(handle) {
            return None;
        }
        let slot = &mut self.slots[handle.index as usize];
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.freed_slots.push(handle.index);

        if let Some(handles) = self.by_category.get_mut(&entry.category) {
            handles.retain(|h| *h != handle);
            if handles.is_empty() {
                self.by_category.remove(&entry.category);
            }
        }
        Some(entry)
    }

    fn take_category(&mut self, category: EventCategory) -> Vec<Entry> {
        let handles = self.by_category.remove(&category).unwrap_or_default();
        let mut removed = Vec::with_capacity(handles.len());
        for handle in handles {
            let slot = &mut self.slots[handle.index as usize];
            if let Some(entry) = slot.entry.take() {
                slot.generation = slot.generation.wrapping_add(1);
                self.freed_slots.push(handle.index);
                removed.push(entry);
            }
        }
        removed
    }

    fn snapshot(&self, category: EventCategory) -> Vec<(ListenerHandle, Rc<dyn Listener>)> {
        let Some(handles) = self.by_category.get(&category) else {
            return Vec::new();
        };
        handles
            .iter()
            .filter_map(|handle| {
                let slot = self.slots.get(handle.index as usize)?;
                let entry = slot.entry.as_ref()?;
                Some((*handle, Rc::clone(&entry.listener)))
            })
            .collect()
    }
}

/// Removes `handle` from the registry behind `inner`. Returns `false` if it was already gone.
pub(crate) fn remove_listener(inner: &RefCell<RegistryInner>, handle: ListenerHandle) -> bool {
    let removed = inner.borrow_mut().take(handle);
    // Dropped here, outside the borrow: a listener may own a scope whose teardown
    // calls back into this registry.
    removed.is_some()
}

/// Maps event categories to ordered listeners and owns a FIFO of pending events.
///
/// Cloning a `ListenerRegistry` is cheap and yields another handle to the same
/// registry. Listeners that need to enqueue or dispatch should capture a
/// [`WeakListenerRegistry`] instead, so they do not keep the registry alive.
///
/// # Re-entrancy
///
/// Dispatch iterates over a snapshot of the category's listeners taken before the
/// first call. Listeners registered during a dispatch are first invoked on the next
/// one. Listeners removed during a dispatch are not invoked once removed.
///
/// # Example
///
/// ```rust
/// use hearth_core::event::{Event, EventCategory, ListenerRegistry, ListenerScope, Propagation};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let registry = ListenerRegistry::new();
/// let mut scope = ListenerScope::bind(&registry);
/// let quits = Rc::new(Cell::new(0));
///
/// let counter = Rc::clone(&quits);
/// registry.register(&mut scope, EventCategory::QUIT, move |_: &Event| {
///     counter.set(counter.get() + 1);
///     Propagation::Continue
/// });
///
/// registry.dispatch(&Event::quit());
/// assert_eq!(quits.get(), 1);
///
/// drop(scope);
/// registry.dispatch(&Event::quit());
/// assert_eq!(quits.get(), 1);
/// ```
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        log::debug!("ListenerRegistry initialized.");
        Self::default()
    }

    pub(crate) fn inner(&self) -> &Rc<RefCell<RegistryInner>> {
        &self.inner
    }

    /// Returns a non-owning handle to this registry.
    pub fn downgrade(&self) -> WeakListenerRegistry {
        WeakListenerRegistry {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Appends `listener` to the ordered list for `category` and records the handle in
    /// `scope`, which removes it when dropped.
    ///
    /// # Panics
    /// Panics if `scope` is bound to a different registry.
    pub fn register<L>(
        &self,
        scope: &mut ListenerScope,
        category: EventCategory,
        listener: L,
    ) -> ListenerHandle
    where
        L: Listener + 'static,
    {
        assert!(
            scope.is_bound_to(self),
            "register: the scope must be bound to the registry it registers with"
        );
        let handle = self.inner.borrow_mut().insert(category, Rc::new(listener));
        scope.record(handle);
        log::debug!("Registered {handle} for '{category}'.");
        handle
    }

    /// Removes a listener previously registered through `scope`, and stops `scope`
    /// from tracking it.
    ///
    /// # Errors
    /// - [`RegistryError::ForeignScope`] if `scope` is bound elsewhere.
    /// - [`RegistryError::NotTracked`] if `scope` does not track `handle`.
    /// - [`RegistryError::StaleHandle`] if the listener was already removed by
    ///   [`clear`](Self::clear). The scope stops tracking it either way.
    pub fn unregister(
        &self,
        scope: &mut ListenerScope,
        handle: ListenerHandle,
    ) -> Result<(), RegistryError> {
        if !scope.is_bound_to(self) {
            return Err(RegistryError::ForeignScope);
        }
        scope.release(handle)?;
        if remove_listener(&self.inner, handle) {
            log::debug!("Unregistered {handle}.");
            Ok(())
        } else {
            Err(RegistryError::StaleHandle(handle))
        }
    }

    /// Removes every listener for `category`, bypassing scopes.
    ///
    /// Scopes still holding the removed handles skip them at teardown, since the
    /// handles' generations no longer match. Returns how many listeners were removed.
    pub fn clear(&self, category: EventCategory) -> usize {
        let removed = self.inner.borrow_mut().take_category(category);
        log::debug!("Cleared {} listener(s) for '{category}'.", removed.len());
        removed.len()
    }

    /// Invokes every listener for `event`'s category in registration order, until one
    /// returns [`Propagation::Stop`].
    pub fn dispatch(&self, event: &Event) {
        let category = event.category();
        let listeners = self.inner.borrow().snapshot(category);
        log::trace!(
            "Dispatching '{category}' to {} listener(s).",
            listeners.len()
        );

        for (handle, listener) in listeners {
            if !self.is_registered(handle) {
                continue;
            }
            if listener.on_event(event) == Propagation::Stop {
                log::trace!("'{category}' consumed by {handle}.");
                break;
            }
        }
    }

    /// Appends `event` to the pending queue. Nothing is dispatched.
    pub fn enqueue(&self, event: Event) {
        self.inner.borrow_mut().pending.push_back(event);
    }

    /// Dispatches pending events in FIFO order until the queue is empty, including
    /// events enqueued by listeners during this drain. Returns how many were dispatched.
    pub fn dispatch_pending(&self) -> usize {
        let mut dispatched = 0;
        loop {
            let next = self.inner.borrow_mut().pending.pop_front();
            let Some(event) = next else {
                break;
            };
            self.dispatch(&event);
            dispatched += 1;
        }
        dispatched
    }

    /// Pulls every record currently available from `source`, translates each with
    /// [`Event::from_raw`], and dispatches the recognised ones immediately.
    /// Returns how many events were dispatched.
    pub fn poll_external_events(&self, source: &mut dyn InputSource) -> usize {
        let mut dispatched = 0;
        while let Some(raw) = source.poll() {
            match Event::from_raw(&raw) {
                Some(event) => {
                    self.dispatch(&event);
                    dispatched += 1;
                }
                None => log::trace!("Dropped unrecognised input: {raw:?}"),
            }
        }
        dispatched
    }

    /// Returns `true` while `handle` refers to a registered listener.
    pub fn is_registered(&self, handle: ListenerHandle) -> bool {
        self.inner.borrow().contains(handle)
    }

    /// Number of listeners currently registered for `category`.
    pub fn listener_count(&self, category: EventCategory) -> usize {
        self.inner
            .borrow()
            .by_category
            .get(&category)
            .map_or(0, Vec::len)
    }

    /// Number of events waiting in the pending queue.
    pub fn pending_len(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ListenerRegistry")
            .field("categories", &inner.by_category.len())
            .field("slots", &inner.slots.len())
            .field("pending", &inner.pending.len())
            .finish()
    }
}

/// A non-owning handle to a [`ListenerRegistry`].
#[derive(Clone, Default)]
pub struct WeakListenerRegistry {
    inner: Weak<RefCell<RegistryInner>>,
}

impl WeakListenerRegistry {
    /// Returns the registry if it is still alive.
    pub fn upgrade(&self) -> Option<ListenerRegistry> {
        self.inner.upgrade().map(|inner| ListenerRegistry { inner })
    }
}

impl fmt::Debug for WeakListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakListenerRegistry")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::{QueuedInput, RawInput};
    use crate::platform::keys;
    use std::cell::Cell;

    type Log = Rc<RefCell<Vec<&'static str>>>;

    fn recorder(log: &Log, name: &'static str, outcome: Propagation) -> impl Listener {
        let log = Rc::clone(log);
        move |_: &Event| {
            log.borrow_mut().push(name);
            outcome
        }
    }

    #[test]
    fn listeners_fire_in_registration_order() {
        let registry = ListenerRegistry::new();
        let mut scope = ListenerScope::bind(&registry);
        let log: Log = Rc::default();

        for name in ["A", "B", "C"] {
            registry.register(
                &mut scope,
                EventCategory::QUIT,
                recorder(&log, name, Propagation::Continue),
            );
        }
        registry.dispatch(&Event::quit());

        assert_eq!(*log.borrow(), ["A", "B", "C"]);
    }

    #[test]
    fn stop_halts_propagation_for_that_dispatch_only() {
        let registry = ListenerRegistry::new();
        let mut scope = ListenerScope::bind(&registry);
        let log: Log = Rc::default();
        let b_stops = Rc::new(Cell::new(true));

        registry.register(
            &mut scope,
            EventCategory::KEY_DOWN,
            recorder(&log, "A", Propagation::Continue),
        );
        let flag = Rc::clone(&b_stops);
        let b_log = Rc::clone(&log);
        registry.register(&mut scope, EventCategory::KEY_DOWN, move |_: &Event| {
            b_log.borrow_mut().push("B");
            Propagation::from(!flag.get())
        });
        registry.register(
            &mut scope,
            EventCategory::KEY_DOWN,
            recorder(&log, "C", Propagation::Continue),
        );

        registry.dispatch(&Event::key_down(keys::A, keys::scancodes::A, 0));
        assert_eq!(*log.borrow(), ["A", "B"]);

        b_stops.set(false);
        log.borrow_mut().clear();
        registry.dispatch(&Event::key_down(keys::B, keys::scancodes::B, 0));
        assert_eq!(*log.borrow(), ["A", "B", "C"]);
    }

    #[test]
    fn dispatch_only_reaches_matching_category() {
        let registry = ListenerRegistry::new();
        let mut scope = ListenerScope::bind(&registry);
        let log: Log = Rc::default();

        registry.register(
            &mut scope,
            EventCategory::QUIT,
            recorder(&log, "quit", Propagation::Continue),
        );
        registry.register(
            &mut scope,
            EventCategory::KEY_UP,
            recorder(&log, "up", Propagation::Continue),
        );

        registry.dispatch(&Event::key_down(0, 0, 0));
        assert!(log.borrow().is_empty());

        registry.dispatch(&Event::key_up(0, 0, 0));
        assert_eq!(*log.borrow(), ["up"]);
    }

    #[test]
    fn pending_events_drain_fifo_including_ones_queued_mid_drain() {
        let registry = ListenerRegistry::new();
        let mut scope = ListenerScope::bind(&registry);
        let log: Log = Rc::default();

        let e3_tag = EventCategory::CUSTOM_BIT | 3;
        let e3 = EventCategory::custom(e3_tag).unwrap();

        let weak = registry.downgrade();
        let e1_log = Rc::clone(&log);
        registry.register(&mut scope, EventCategory::KEY_DOWN, move |_: &Event| {
            e1_log.borrow_mut().push("e1");
            if let Some(registry) = weak.upgrade() {
                registry.enqueue(Event::custom(e3_tag, Rc::new(())).unwrap());
            }
            Propagation::Continue
        });
        registry.register(
            &mut scope,
            EventCategory::KEY_DOWN,
            recorder(&log, "e1-second", Propagation::Continue),
        );
        registry.register(
            &mut scope,
            EventCategory::QUIT,
            recorder(&log, "e2", Propagation::Continue),
        );
        registry.register(&mut scope, e3, recorder(&log, "e3", Propagation::Continue));

        registry.enqueue(Event::key_down(0, 0, 0));
        registry.enqueue(Event::quit());
        assert!(log.borrow().is_empty());
        assert_eq!(registry.pending_len(), 2);

        assert_eq!(registry.dispatch_pending(), 3);
        assert_eq!(*log.borrow(), ["e1", "e1-second", "e2", "e3"]);
        assert_eq!(registry.pending_len(), 0);
    }

    #[test]
    fn listener_registered_during_dispatch_runs_next_time() {
        let registry = ListenerRegistry::new();
        let scope = Rc::new(RefCell::new(ListenerScope::bind(&registry)));
        let log: Log = Rc::default();

        let weak = registry.downgrade();
        let inner_scope = Rc::clone(&scope);
        let inner_log = Rc::clone(&log);
        let installed = Cell::new(false);
        registry.register(
            &mut scope.borrow_mut(),
            EventCategory::QUIT,
            move |_: &Event| {
                inner_log.borrow_mut().push("outer");
                if !installed.replace(true) {
                    let registry = weak.upgrade().unwrap();
                    registry.register(
                        &mut inner_scope.borrow_mut(),
                        EventCategory::QUIT,
                        recorder(&inner_log, "late", Propagation::Continue),
                    );
                }
                Propagation::Continue
            },
        );

        registry.dispatch(&Event::quit());
        assert_eq!(*log.borrow(), ["outer"]);

        registry.dispatch(&Event::quit());
        assert_eq!(*log.borrow(), ["outer", "outer", "late"]);
        assert_eq!(scope.borrow().len(), 2);
    }

    #[test]
    fn listener_removed_during_dispatch_is_skipped() {
        let registry = ListenerRegistry::new();
        let scope = Rc::new(RefCell::new(ListenerScope::bind(&registry)));
        let log: Log = Rc::default();
        let victim: Rc<Cell<Option<ListenerHandle>>> = Rc::default();

        let weak = registry.downgrade();
        let killer_scope = Rc::downgrade(&scope);
        let target = Rc::clone(&victim);
        let killer_log = Rc::clone(&log);
        registry.register(
            &mut scope.borrow_mut(),
            EventCategory::QUIT,
            move |_: &Event| {
                killer_log.borrow_mut().push("killer");
                if let (Some(registry), Some(scope), Some(handle)) =
                    (weak.upgrade(), killer_scope.upgrade(), target.take())
                {
                    registry
                        .unregister(&mut scope.borrow_mut(), handle)
                        .unwrap();
                }
                Propagation::Continue
            },
        );
        let handle = registry.register(
            &mut scope.borrow_mut(),
            EventCategory::QUIT,
            recorder(&log, "victim", Propagation::Continue),
        );
        victim.set(Some(handle));

        registry.dispatch(&Event::quit());

        assert_eq!(*log.borrow(), ["killer"]);
        assert!(!registry.is_registered(handle));
        assert_eq!(registry.listener_count(EventCategory::QUIT), 1);
        assert_eq!(scope.borrow().len(), 1);
    }

    #[test]
    fn nested_dispatch_of_same_category_completes_before_outer_resumes() {
        let registry = ListenerRegistry::new();
        let mut scope = ListenerScope::bind(&registry);
        let log: Log = Rc::default();

        let weak = registry.downgrade();
        let outer_log = Rc::clone(&log);
        let nested = Cell::new(false);
        registry.register(&mut scope, EventCategory::QUIT, move |event: &Event| {
            outer_log.borrow_mut().push("A");
            if !nested.replace(true) {
                if let Some(registry) = weak.upgrade() {
                    registry.dispatch(event);
                }
            }
            Propagation::Continue
        });
        registry.register(
            &mut scope,
            EventCategory::QUIT,
            recorder(&log, "B", Propagation::Continue),
        );

        registry.dispatch(&Event::quit());

        assert_eq!(*log.borrow(), ["A", "A", "B", "B"]);
        assert_eq!(registry.listener_count(EventCategory::QUIT), 2);
    }

    #[test]
    fn unregister_removes_listener_and_untracks_handle() {
        let registry = ListenerRegistry::new();
        let mut scope = ListenerScope::bind(&registry);
        let log: Log = Rc::default();

        let handle = registry.register(
            &mut scope,
            EventCategory::QUIT,
            recorder(&log, "A", Propagation::Continue),
        );
        assert_eq!(registry.unregister(&mut scope, handle), Ok(()));
        assert!(!registry.is_registered(handle));
        assert!(scope.is_empty());

        registry.dispatch(&Event::quit());
        assert!(log.borrow().is_empty());

        assert_eq!(
            registry.unregister(&mut scope, handle),
            Err(RegistryError::NotTracked(handle))
        );
    }

    #[test]
    fn unregister_with_foreign_scope_is_rejected() {
        let registry = ListenerRegistry::new();
        let other = ListenerRegistry::new();
        let mut scope = ListenerScope::bind(&registry);
        let mut foreign = ListenerScope::bind(&other);

        let handle = registry.register(&mut scope, EventCategory::QUIT, |_: &Event| {
            Propagation::Continue
        });

        assert_eq!(
            registry.unregister(&mut foreign, handle),
            Err(RegistryError::ForeignScope)
        );
        assert!(registry.is_registered(handle));
    }

    #[test]
    #[should_panic(expected = "register: the scope must be bound")]
    fn register_with_foreign_scope_panics() {
        let registry = ListenerRegistry::new();
        let other = ListenerRegistry::new();
        let mut foreign = ListenerScope::bind(&other);

        registry.register(&mut foreign, EventCategory::QUIT, |_: &Event| {
            Propagation::Continue
        });
    }

    #[test]
    fn recycled_slot_does_not_revive_old_handle() {
        let registry = ListenerRegistry::new();
        let mut scope = ListenerScope::bind(&registry);

        let first = registry.register(&mut scope, EventCategory::QUIT, |_: &Event| {
            Propagation::Continue
        });
        registry.unregister(&mut scope, first).unwrap();
        let second = registry.register(&mut scope, EventCategory::QUIT, |_: &Event| {
            Propagation::Continue
        });

        assert_ne!(first, second);
        assert!(!registry.is_registered(first));
        assert!(registry.is_registered(second));
    }

    #[test]
    fn clear_then_unregister_reports_stale_handle() {
        let registry = ListenerRegistry::new();
        let mut scope = ListenerScope::bind(&registry);

        let handle = registry.register(&mut scope, EventCategory::KEY_DOWN, |_: &Event| {
            Propagation::Continue
        });
        registry.register(&mut scope, EventCategory::KEY_DOWN, |_: &Event| {
            Propagation::Continue
        });

        assert_eq!(registry.clear(EventCategory::KEY_DOWN), 2);
        assert_eq!(registry.listener_count(EventCategory::KEY_DOWN), 0);
        assert_eq!(
            registry.unregister(&mut scope, handle),
            Err(RegistryError::StaleHandle(handle))
        );
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn poll_external_events_dispatches_recognised_input_immediately() {
        let registry = ListenerRegistry::new();
        let mut scope = ListenerScope::bind(&registry);
        let log: Log = Rc::default();

        registry.register(
            &mut scope,
            EventCategory::QUIT,
            recorder(&log, "quit", Propagation::Continue),
        );
        registry.register(
            &mut scope,
            EventCategory::KEY_DOWN,
            recorder(&log, "key", Propagation::Continue),
        );

        let mut source = QueuedInput::from_records([
            RawInput::MouseMotion { x: 3.0, y: 4.0 },
            RawInput::KeyDown {
                keycode: keys::ESCAPE,
                scancode: keys::scancodes::ESCAPE,
                modifiers: 0,
            },
            RawInput::KeyUp {
                keycode: keys::ESCAPE,
                scancode: keys::scancodes::ESCAPE,
                modifiers: 0,
            },
            RawInput::Quit,
        ]);

        assert_eq!(registry.poll_external_events(&mut source), 2);
        assert_eq!(*log.borrow(), ["key", "quit"]);
        assert_eq!(registry.pending_len(), 0);
        assert!(source.is_empty());
    }

    #[test]
    fn propagation_from_bool() {
        assert_eq!(Propagation::from(true), Propagation::Continue);
        assert_eq!(Propagation::from(false), Propagation::Stop);
    }
}
