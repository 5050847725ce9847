//! FractalApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use fractal_config::FractalConfig;
use fractal_renderer::{FrameTimer, RenderState};

/// Top-level application state.
pub struct FractalApp {
    pub(super) config: FractalConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    pub(super) timer: FrameTimer,

    // Hidden windows hold no instance buffers and skip rendering
    pub(super) occluded: bool,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl FractalApp {
    pub fn new(config: FractalConfig) -> Self {
        Self {
            config,
            window: None,
            render_state: None,
            timer: FrameTimer::new(),
            occluded: false,
            should_exit: false,
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}
