//! Frame rendering logic.

use std::time::Duration;

use super::core::FractalApp;

impl FractalApp {
    /// Advance the animation by the elapsed frame time and render.
    pub(super) fn render_frame(&mut self) {
        let Some(ref mut rs) = self.render_state else {
            return;
        };

        let dt = self.timer.begin_frame();
        if let Err(e) = rs.render_frame(dt) {
            tracing::error!("Render error: {e}");
        }

        let interval = Duration::from_secs(self.config.logging.fps_interval_secs as u64);
        if self.timer.report_due(interval) {
            let stats = rs.stats();
            tracing::debug!(
                fps = format_args!("{:.1}", self.timer.fps()),
                frame_ms = format_args!("{:.2}", self.timer.frame_time_ms()),
                draw_calls = stats.draw_calls,
                instances = stats.instances,
                bytes = stats.bytes_uploaded,
                "Frame stats"
            );
        }
    }

    /// Release instance buffers while the window cannot be seen.
    pub(super) fn set_occluded(&mut self, occluded: bool) {
        if occluded == self.occluded {
            return;
        }
        self.occluded = occluded;

        if let Some(ref mut rs) = self.render_state {
            if occluded {
                tracing::info!("Window hidden, releasing instance buffers");
                rs.suspend();
            } else {
                tracing::info!("Window visible, restoring instance buffers");
                rs.resume();
                self.timer.reset();
            }
        }
    }
}
