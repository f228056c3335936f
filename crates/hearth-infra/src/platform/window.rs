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

//! The game window, backed by `winit`.

use thiserror::Error;
use winit::dpi::{LogicalSize, PhysicalSize, Size};
use winit::error::OsError;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

/// Errors raised while creating or reconfiguring a [`WinitWindow`].
#[derive(Debug, Error)]
pub enum WindowError {
    /// The platform refused to create the window.
    #[error("failed to create window: {0}")]
    Creation(#[from] OsError),
    /// A resolution with a zero dimension was requested.
    #[error("window width and height must be positive, got {width}x{height}")]
    InvalidResolution {
        /// The requested width.
        width: u32,
        /// The requested height.
        height: u32,
    },
    /// A resolution divisor of zero was requested.
    #[error("the startup resolution divisor must be at least 1")]
    InvalidDivisor,
}

/// A wrapper around a `winit::window::Window`.
#[derive(Debug)]
pub struct WinitWindow {
    inner: Window,
    title: String,
}

/// A builder for creating `WinitWindow` instances.
#[derive(Debug, Clone)]
pub struct WinitWindowBuilder {
    title: String,
    width: u32,
    height: u32,
    resolution_divisor: Option<u32>,
}

impl WinitWindowBuilder {
    /// Creates a new `WinitWindowBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            title: "Hearth".to_string(),
            width: 1024,
            height: 768,
            resolution_divisor: None,
        }
    }

    /// Sets the title of the window to be built.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial inner dimensions of the window to be built.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sizes the window as the primary monitor's resolution divided by `divisor`,
    /// overriding [`with_dimensions`](Self::with_dimensions) when a monitor is found.
    pub fn with_resolution_divisor(mut self, divisor: u32) -> Self {
        self.resolution_divisor = Some(divisor);
        self
    }

    /// Builds the `WinitWindow` using the provided `winit` event loop.
    ///
    /// # Errors
    /// Returns a [`WindowError`] if the configured size is invalid or the underlying
    /// `winit` window creation fails.
    pub fn build(self, event_loop: &ActiveEventLoop) -> Result<WinitWindow, WindowError> {
        let size = self.initial_size(event_loop)?;
        log::info!(
            "Building window with title: '{}' and size: {:?}",
            self.title,
            size
        );

        let window_attributes = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(size)
            .with_resizable(true)
            .with_visible(true);

        let window = event_loop.create_window(window_attributes)?;

        log::info!("Winit window created successfully (id: {:?}).", window.id());
        Ok(WinitWindow {
            inner: window,
            title: self.title,
        })
    }

    fn initial_size(&self, event_loop: &ActiveEventLoop) -> Result<Size, WindowError> {
        validate_resolution(self.width, self.height)?;
        let Some(divisor) = self.resolution_divisor else {
            return Ok(LogicalSize::new(self.width, self.height).into());
        };
        match event_loop.primary_monitor() {
            Some(monitor) => {
                let display = monitor.size();
                let (width, height) = divided_resolution(display.width, display.height, divisor)?;
                Ok(PhysicalSize::new(width, height).into())
            }
            None => {
                log::warn!("No primary monitor reported; using the configured window size.");
                Ok(LogicalSize::new(self.width, self.height).into())
            }
        }
    }
}

impl Default for WinitWindowBuilder {
    /// Creates a new `WinitWindowBuilder` with default settings.
    fn default() -> Self {
        Self::new()
    }
}

impl WinitWindow {
    /// Returns the `winit` identifier of this window.
    pub fn id(&self) -> WindowId {
        self.inner.id()
    }

    /// Returns the physical dimensions (width, height) of the window's inner area.
    pub fn inner_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }

    /// Returns the current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Requests that the window be redrawn.
    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    /// Replaces the window title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.inner.set_title(&self.title);
    }

    /// Requests a new inner size, in physical pixels.
    ///
    /// # Errors
    /// Returns [`WindowError::InvalidResolution`] if either dimension is zero.
    pub fn set_resolution(&self, width: u32, height: u32) -> Result<(), WindowError> {
        validate_resolution(width, height)?;
        if self
            .inner
            .request_inner_size(PhysicalSize::new(width, height))
            .is_none()
        {
            log::debug!("Resize to {width}x{height} will be reported asynchronously.");
        }
        Ok(())
    }
}

fn validate_resolution(width: u32, height: u32) -> Result<(), WindowError> {
    if width == 0 || height == 0 {
        return Err(WindowError::InvalidResolution { width, height });
    }
    Ok(())
}

fn divided_resolution(width: u32, height: u32, divisor: u32) -> Result<(u32, u32), WindowError> {
    if divisor == 0 {
        return Err(WindowError::InvalidDivisor);
    }
    let size = ((width / divisor).max(1), (height / divisor).max(1));
    Ok(size)
}
