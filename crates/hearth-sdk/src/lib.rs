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

//! The public-facing Software Development Kit (SDK) for Hearth.
//! This crate provides a simple and stable API for game developers to create
//! and run applications: implement [`Application`], then call [`Engine::run`].

mod game_loop;

pub use game_loop::{GameLoop, RunFlag};

use anyhow::Result;
use hearth_core::event::ListenerRegistry;
use hearth_infra::platform::input::WinitInputSource;
use hearth_infra::platform::window::{WinitWindow, WinitWindowBuilder};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::WindowId;

pub mod prelude {
    //! Everything a typical game needs to register listeners.
    pub use hearth_core::event::{
        Event, EventCategory, KeyboardData, ListenerHandle, ListenerRegistry, ListenerScope,
        Propagation, WeakListenerRegistry,
    };
    pub use hearth_core::platform::input::{InputSource, QueuedInput, RawInput};
    pub use hearth_core::platform::keys;

    pub use crate::{Application, Engine, EngineConfig, EngineContext, GameLoop, RunFlag};
}

/// Shared handles given to the application.
#[derive(Debug, Clone)]
pub struct EngineContext {
    /// The registry to install listeners on and to enqueue events into.
    pub events: ListenerRegistry,
    /// Clear this to end the game loop after the current frame.
    pub running: RunFlag,
}

/// Startup configuration for [`Engine::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// The window title.
    pub title: String,
    /// Initial window width, in logical pixels.
    pub width: u32,
    /// Initial window height, in logical pixels.
    pub height: u32,
    /// When set, the window is sized as the primary display divided by this value.
    pub resolution_divisor: Option<u32>,
    /// Stop the game loop when the platform asks to close.
    pub quit_on_close: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "Hearth".to_string(),
            width: 1024,
            height: 768,
            resolution_divisor: None,
            quit_on_close: true,
        }
    }
}

/// The game logic driven by [`Engine::run`].
pub trait Application: Sized + 'static {
    /// Called once, after the window exists, to create the initial state.
    ///
    /// Listeners should be registered through a [`ListenerScope`](prelude::ListenerScope)
    /// stored in the application, so they are removed when it is dropped.
    fn new(context: EngineContext) -> Self;

    /// Called every frame, after input and queued events have been dispatched.
    fn update(&mut self, context: &EngineContext);
}

/// The internal state of the running engine, managed by the winit event loop.
struct EngineState<A: Application> {
    config: EngineConfig,
    game_loop: GameLoop,
    input: WinitInputSource,
    window: Option<WinitWindow>,
    app: Option<A>, // The user's application logic and data.
    error: Option<anyhow::Error>,
}

impl<A: Application> EngineState<A> {
    fn new(config: EngineConfig) -> Self {
        Self {
            game_loop: GameLoop::new(config.quit_on_close),
            config,
            input: WinitInputSource::new(),
            window: None,
            app: None,
            error: None,
        }
    }

    fn window_builder(&self) -> WinitWindowBuilder {
        let builder = WinitWindowBuilder::new()
            .with_title(self.config.title.clone())
            .with_dimensions(self.config.width, self.config.height);
        match self.config.resolution_divisor {
            Some(divisor) => builder.with_resolution_divisor(divisor),
            None => builder,
        }
    }
}

/// Dropping the application first runs its scopes' teardown while the registry
/// is still alive, so every listener it installed is removed.
impl<A: Application> Drop for EngineState<A> {
    fn drop(&mut self) {
        log::info!("EngineState is being dropped. Performing controlled shutdown...");
        self.app.take();
        self.window.take();
        log::info!(
            "Engine shutdown complete after {} frame(s).",
            self.game_loop.frame()
        );
    }
}

impl<A: Application> ApplicationHandler for EngineState<A> {
    /// Called when the event loop is ready to start processing events.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Avoid re-initializing if the app is resumed multiple times.
        }

        log::info!("Application resumed. Initializing window and game state...");
        let window = match self.window_builder().build(event_loop) {
            Ok(window) => window,
            Err(e) => {
                log::error!("Window creation failed: {e}");
                self.error = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        self.app = Some(A::new(self.game_loop.context()));
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if window.id() != id {
            return;
        }

        match event {
            WindowEvent::RedrawRequested => {
                let Some(app) = self.app.as_mut() else {
                    return;
                };
                if !self.game_loop.cycle(&mut self.input, app) {
                    log::info!("Game loop stopped, exiting event loop...");
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                log::debug!("Window resized to: {}x{}", size.width, size.height);
            }
            other => self.input.push_window_event(&other),
        }
    }

    /// Called when the event loop has processed all pending events and is about to wait.
    /// Requesting a redraw here keeps the game loop running continuously.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// The public entry point for Hearth.
pub struct Engine;

impl Engine {
    /// Creates a window, builds the application, and runs the game loop.
    ///
    /// Blocks the current thread until the loop stops or the window is closed.
    ///
    /// # Errors
    /// Returns an error if the event loop or the window cannot be created.
    pub fn run<A: Application>(config: EngineConfig) -> Result<()> {
        log::info!("Hearth SDK: Starting '{}'...", config.title);
        let event_loop = EventLoop::new()?;

        // The application is created in `resumed`, once a window exists.
        let mut app_state = EngineState::<A>::new(config);
        event_loop.run_app(&mut app_state)?;

        match app_state.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_window_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.title, "Hearth");
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.resolution_divisor, None);
        assert!(config.quit_on_close);
    }
}
