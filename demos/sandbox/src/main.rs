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

// Hearth Sandbox
// Opens a window, logs key presses, and quits on Escape or window close.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use hearth_sdk::prelude::*;

/// Command-line flags for the sandbox.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Window title.
    #[arg(long, default_value = "Hearth Sandbox")]
    title: String,

    /// Initial window width.
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Initial window height.
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Size the window as the primary display divided by this factor.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    resolution_divisor: Option<u32>,

    /// Keep running when the window is closed (Escape still quits).
    #[arg(long)]
    ignore_close: bool,

    /// Default log filter, overridden by RUST_LOG.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            resolution_divisor: self.resolution_divisor,
            quit_on_close: !self.ignore_close,
        }
    }
}

struct SandboxApp {
    keys_pressed: Rc<Cell<u64>>,
    frames: u64,
    _scope: ListenerScope,
}

impl Application for SandboxApp {
    fn new(context: EngineContext) -> Self {
        log::info!("SandboxApp: Registering listeners...");
        let mut scope = ListenerScope::bind(&context.events);
        let keys_pressed = Rc::new(Cell::new(0));

        let running = context.running.clone();
        context
            .events
            .register(&mut scope, EventCategory::KEY_DOWN, move |event: &Event| {
                match event.keycode() {
                    Ok(keys::ESCAPE) => {
                        log::info!("Escape pressed, leaving the sandbox.");
                        running.stop();
                        Propagation::Stop
                    }
                    _ => Propagation::Continue,
                }
            });

        let counter = Rc::clone(&keys_pressed);
        context
            .events
            .register(&mut scope, EventCategory::KEY_DOWN, move |event: &Event| {
                if let Ok(key) = event.keyboard() {
                    counter.set(counter.get() + 1);
                    log::info!(
                        "Key down: keycode={:#x} scancode={} modifiers={:#06x}",
                        key.keycode,
                        key.scancode,
                        key.modifiers
                    );
                }
                Propagation::Continue
            });

        context
            .events
            .register(&mut scope, EventCategory::QUIT, |_: &Event| {
                log::info!("Window close requested.");
                Propagation::Continue
            });

        Self {
            keys_pressed,
            frames: 0,
            _scope: scope,
        }
    }

    fn update(&mut self, _context: &EngineContext) {
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!(
                "SandboxApp: {} frame(s), {} key press(es).",
                self.frames,
                self.keys_pressed.get()
            );
        }
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    let args = Args::parse();
    Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()))
        .filter_module("winit", log::LevelFilter::Warn)
        .init();

    Engine::run::<SandboxApp>(args.engine_config())?;
    Ok(())
}
