//! Demo application handler feeding window input into a swipe tracker

use tracing::{error, info, trace, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::window::window_attributes_from_config;
use crate::config::SwipeConfig;
use crate::error::SwipeError;
use crate::gesture::{SwipeEvent, SwipeTracker};
use crate::input::{InputCollector, Surface, SurfaceId};

/// Swipe demo application
pub struct App {
    config: SwipeConfig,
    window: Option<Window>,
    collector: InputCollector,
    tracker: SwipeTracker,
}

impl App {
    /// Creates the demo with a tracker bound to the configured surface
    pub fn new(config: SwipeConfig) -> Result<Self, SwipeError> {
        info!(profile = %config.profile, "Starting swipe demo");
        info!(?config.surface, release = ?config.tracker.release, "Tracker configuration");

        let surface = Surface::new(SurfaceId(0), config.surface.name.clone(), config.surface.rect);
        let mut tracker = SwipeTracker::builder()
            .target(surface)
            .with_config(&config.tracker)
            .build()?;
        register_log_listeners(&mut tracker);

        Ok(Self {
            config,
            window: None,
            collector: InputCollector::new(),
            tracker,
        })
    }

    /// Creates the demo with configuration loaded from the environment
    pub fn from_env() -> Result<Self, SwipeError> {
        let config = SwipeConfig::load_from_env().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load config, using default configuration");
            SwipeConfig::default()
        });
        Self::new(config)
    }

    /// Runs the event loop until the window closes
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    pub fn tracker(&self) -> &SwipeTracker {
        &self.tracker
    }
}

fn register_log_listeners(tracker: &mut SwipeTracker) {
    tracker.on(SwipeEvent::Move, |contact| {
        trace!(dx = contact.dx, dy = contact.dy, "move");
        Ok(())
    });
    tracker.on(SwipeEvent::SwipeEnd, |contact| {
        info!(
            dx = contact.dx,
            dy = contact.dy,
            dt = contact.dt,
            "swipe-end"
        );
        Ok(())
    });
    for event in [
        SwipeEvent::SwipeLeft,
        SwipeEvent::SwipeRight,
        SwipeEvent::SwipeUp,
        SwipeEvent::SwipeDown,
    ] {
        tracker.on(event, move |_| {
            info!("{}", event);
            Ok(())
        });
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match event_loop.create_window(window_attributes_from_config(&self.config.window)) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    window.width = size.width,
                    window.height = size.height,
                    "Window created successfully"
                );
                self.collector.set_scale_factor(window.scale_factor() as f32);
                self.window = Some(window);
            }
            Err(e) => {
                error!(error = %e, "Failed to create window");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
                return;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.collector.set_scale_factor(*scale_factor as f32);
                return;
            }
            _ => {}
        }

        let Some(sample) = self
            .collector
            .handle_window_event(&event)
            .and_then(|pointer| pointer.to_sample())
        else {
            return;
        };

        match self.tracker.dispatch(sample) {
            Ok(disposition) => trace!(?sample, ?disposition, "Sample dispatched"),
            Err(e) => error!(error = %e, "Swipe listener failed"),
        }
    }
}
