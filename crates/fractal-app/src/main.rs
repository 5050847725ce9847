mod app_state;
mod cli;
mod logging;

use winit::event_loop::EventLoop;

use fractal_config::FractalConfig;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Logging first, at the CLI level (or info) until the config is read
    let log_handle = logging::init(&args.log_directive(&FractalConfig::default()));
    tracing::info!("Fractal v{} starting...", env!("CARGO_PKG_VERSION"));

    let loaded = match args.config.as_deref() {
        Some(path) => fractal_config::load_config_from(path),
        None => fractal_config::load_config(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (FractalConfig::default(), Some(e)),
    };
    logging::apply(&log_handle, &args.log_directive(&config));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    args.apply_overrides(&mut config);

    if args.print_config {
        println!("{}", fractal_config::config_to_json(&config));
        return;
    }

    tracing::info!(
        "Config loaded (depth: {}, graph: {})",
        config.fractal.depth,
        config.graph.enabled
    );

    // Create event loop and run
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::FractalApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
