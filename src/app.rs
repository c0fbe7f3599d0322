use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::config::RunConfig;
use crate::gpu::Gpu;
use crate::State;

/// Drives one window through the winit event loop.
///
/// Setup happens on the first `resumed`. A setup or fatal render failure is
/// stored and the loop exits; [`App::finish`] hands it back to the caller.
pub(crate) struct App {
    config: RunConfig,
    state: Option<State>,
    error: Option<anyhow::Error>,
}

impl App {
    pub(crate) fn new(config: RunConfig) -> Self {
        Self {
            config,
            state: None,
            error: None,
        }
    }

    pub(crate) fn finish(self) -> Result<()> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn init(&self, event_loop: &ActiveEventLoop) -> Result<State> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu = pollster::block_on(Gpu::new(Arc::new(window), &self.config.gpu))
            .context("failed to create GPU context")?;

        State::new(gpu, &self.config)
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.error.is_some() {
            return;
        }

        match self.init(event_loop) {
            Ok(state) => {
                state.window().request_redraw();
                self.state = Some(state);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_mut() else {
            return;
        };
        if window_id != state.window().id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(physical_size) => {
                state.resize(physical_size);
                state.window().request_redraw();
            }
            WindowEvent::RedrawRequested => {
                // minimised: wait for the next resize to restart the loop
                if !state.is_drawable() {
                    return;
                }

                state.window().request_redraw();
                state.update();

                match state.render() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.size();
                        state.resize(size);
                    }
                    Err(wgpu::SurfaceError::Timeout) => log::warn!("Surface timeout"),
                    Err(err @ (wgpu::SurfaceError::OutOfMemory | wgpu::SurfaceError::Other)) => {
                        log::error!("{err}");
                        let err = anyhow::Error::new(err).context("failed to acquire a frame");
                        self.fail(event_loop, err);
                    }
                }
            }
            _ => {}
        }
    }
}
