//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, window, and renderer.

mod core;
mod event_handler;
mod init;
mod input;
mod render;
mod shutdown;

pub use core::FractalApp;
