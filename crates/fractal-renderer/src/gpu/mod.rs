mod context;
mod types;

pub use context::*;
pub use types::*;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_into_fractal_error() {
        let err: fractal_common::FractalError = RendererError::AdapterNotFound.into();
        assert_eq!(err.to_string(), "renderer error: no suitable GPU adapter found");
    }

    #[test]
    fn physical_size_aspect() {
        let size = PhysicalSize {
            width: 800,
            height: 400,
        };
        assert_eq!(size.aspect(), 2.0);

        let degenerate = PhysicalSize {
            width: 0,
            height: 0,
        };
        assert_eq!(degenerate.aspect(), 1.0);
    }

    #[test]
    fn depth_format_is_depth32() {
        assert_eq!(DEPTH_FORMAT, wgpu::TextureFormat::Depth32Float);
    }
}
