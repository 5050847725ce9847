//! Graceful shutdown: release GPU buffers, then drop the renderer and window.

use super::core::FractalApp;

impl FractalApp {
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut rs) = self.render_state.take() {
            rs.suspend();
        }
        self.window = None;
        self.should_exit = true;

        tracing::info!("Shutdown sequence complete");
    }
}
