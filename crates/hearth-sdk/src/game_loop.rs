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

//! The per-frame dispatcher loop, independent of any windowing backend.

use crate::{Application, EngineContext};
use hearth_core::event::{Event, EventCategory, ListenerRegistry, ListenerScope, Propagation};
use hearth_core::platform::input::InputSource;
use std::cell::Cell;
use std::rc::Rc;

/// A shared "keep the game loop going" flag.
///
/// Clones observe the same flag, so listeners can capture one and stop the loop.
#[derive(Debug, Clone)]
pub struct RunFlag(Rc<Cell<bool>>);

impl RunFlag {
    /// Creates a flag in the running state.
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Returns `true` until [`stop`](Self::stop) is called.
    pub fn is_running(&self) -> bool {
        self.0.get()
    }

    /// Asks the loop to end after the current frame.
    pub fn stop(&self) {
        self.0.set(false);
    }
}

impl Default for RunFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the event registry and run flag, and drives one frame at a time.
///
/// Each [`cycle`](Self::cycle):
/// 1. polls the input source and dispatches recognised records immediately,
/// 2. drains the pending queue,
/// 3. updates the application if the loop is still running.
pub struct GameLoop {
    events: ListenerRegistry,
    running: RunFlag,
    frame: u64,
    // Dropped with the loop, removing the built-in listeners.
    _builtin: ListenerScope,
}

impl GameLoop {
    /// Creates a loop with an empty registry.
    ///
    /// With `quit_on_close`, a built-in listener stops the loop on every
    /// [`Event::Quit`] and lets the event propagate to application listeners.
    pub fn new(quit_on_close: bool) -> Self {
        let events = ListenerRegistry::new();
        let running = RunFlag::new();
        let mut builtin = ListenerScope::bind(&events);

        if quit_on_close {
            let flag = running.clone();
            events.register(&mut builtin, EventCategory::QUIT, move |_: &Event| {
                log::info!("Quit requested, stopping the game loop.");
                flag.stop();
                Propagation::Continue
            });
        }

        Self {
            events,
            running,
            frame: 0,
            _builtin: builtin,
        }
    }

    /// The registry applications register their listeners with.
    pub fn events(&self) -> &ListenerRegistry {
        &self.events
    }

    /// The loop's run flag.
    pub fn running(&self) -> &RunFlag {
        &self.running
    }

    /// Number of completed cycles.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// A context handing the application shared access to the loop's state.
    pub fn context(&self) -> EngineContext {
        EngineContext {
            events: self.events.clone(),
            running: self.running.clone(),
        }
    }

    /// Runs one frame. Returns `false` once the loop should end.
    pub fn cycle<A: Application>(&mut self, input: &mut dyn InputSource, app: &mut A) -> bool {
        let immediate = self.events.poll_external_events(input);
        let queued = self.events.dispatch_pending();
        log::trace!(
            "Frame {}: {immediate} input event(s), {queued} queued event(s).",
            self.frame
        );

        if self.running.is_running() {
            app.update(&self.context());
        }
        self.frame += 1;
        self.running.is_running()
    }

    /// Runs frames until the run flag is cleared or `max_frames` is reached, without
    /// a window. Returns the number of frames run.
    pub fn run_headless<A: Application>(
        &mut self,
        input: &mut dyn InputSource,
        app: &mut A,
        max_frames: Option<u64>,
    ) -> u64 {
        let start = self.frame;
        while max_frames.map_or(true, |max| self.frame - start < max) {
            if !self.cycle(input, app) {
                break;
            }
        }
        self.frame - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::platform::input::{QueuedInput, RawInput};
    use hearth_core::platform::keys;

    /// A tiny game: counts updates, leaves on Escape, counts key presses.
    struct TestGame {
        updates: u32,
        keys_seen: Rc<Cell<u32>>,
        _scope: ListenerScope,
    }

    impl Application for TestGame {
        fn new(context: EngineContext) -> Self {
            let mut scope = ListenerScope::bind(&context.events);
            let keys_seen = Rc::new(Cell::new(0));

            let running = context.running.clone();
            context
                .events
                .register(&mut scope, EventCategory::KEY_DOWN, move |event: &Event| {
                    if event.keycode() == Ok(keys::ESCAPE) {
                        running.stop();
                        return Propagation::Stop;
                    }
                    Propagation::Continue
                });

            let seen = Rc::clone(&keys_seen);
            context
                .events
                .register(&mut scope, EventCategory::KEY_DOWN, move |_: &Event| {
                    seen.set(seen.get() + 1);
                    Propagation::Continue
                });

            Self {
                updates: 0,
                keys_seen,
                _scope: scope,
            }
        }

        fn update(&mut self, _context: &EngineContext) {
            self.updates += 1;
        }
    }

    fn key(keycode: u32, scancode: u16) -> RawInput {
        RawInput::KeyDown {
            keycode,
            scancode,
            modifiers: 0,
        }
    }

    #[test]
    fn cycle_updates_until_escape() {
        let mut game_loop = GameLoop::new(true);
        let mut game = TestGame::new(game_loop.context());
        let mut input = QueuedInput::new();

        assert!(game_loop.cycle(&mut input, &mut game));
        input.push(key(keys::A, keys::scancodes::A));
        assert!(game_loop.cycle(&mut input, &mut game));
        assert_eq!(game.keys_seen.get(), 1);

        input.push(key(keys::ESCAPE, keys::scancodes::ESCAPE));
        assert!(!game_loop.cycle(&mut input, &mut game));

        assert_eq!(game.updates, 2, "No update after the loop was stopped");
        assert_eq!(game.keys_seen.get(), 1, "Escape is consumed by its handler");
        assert_eq!(game_loop.frame(), 3);
    }

    #[test]
    fn platform_quit_stops_the_loop_when_enabled() {
        let mut game_loop = GameLoop::new(true);
        let mut game = TestGame::new(game_loop.context());
        let mut input = QueuedInput::from_records([RawInput::Quit]);

        let frames = game_loop.run_headless(&mut input, &mut game, Some(10));

        assert_eq!(frames, 1);
        assert!(!game_loop.running().is_running());
    }

    #[test]
    fn platform_quit_is_ignored_when_disabled() {
        let mut game_loop = GameLoop::new(false);
        let mut game = TestGame::new(game_loop.context());
        let mut input = QueuedInput::from_records([RawInput::Quit]);

        let frames = game_loop.run_headless(&mut input, &mut game, Some(5));

        assert_eq!(frames, 5);
        assert_eq!(game.updates, 5);
        assert!(game_loop.running().is_running());
    }

    #[test]
    fn queued_events_are_drained_each_frame() {
        let mut game_loop = GameLoop::new(true);
        let mut game = TestGame::new(game_loop.context());
        let mut input = QueuedInput::new();

        game_loop.events().enqueue(Event::key_down(keys::W, keys::scancodes::W, 0));
        game_loop.events().enqueue(Event::quit());
        assert!(!game_loop.cycle(&mut input, &mut game));

        assert_eq!(game.keys_seen.get(), 1);
        assert_eq!(game_loop.events().pending_len(), 0);
    }

    #[test]
    fn dropping_the_application_removes_its_listeners() {
        let game_loop = GameLoop::new(true);
        let game = TestGame::new(game_loop.context());
        assert_eq!(game_loop.events().listener_count(EventCategory::KEY_DOWN), 2);

        drop(game);

        assert_eq!(game_loop.events().listener_count(EventCategory::KEY_DOWN), 0);
        assert_eq!(game_loop.events().listener_count(EventCategory::QUIT), 1);
    }
}
