use std::path::PathBuf;

use clap::Parser;
use fractal_config::FractalConfig;
use fractal_core::Depth;

/// Fractal: an animated self-similar hierarchy drawn with GPU instancing.
#[derive(Parser, Debug)]
#[command(name = "fractal", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive such as `fractal_core=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Hierarchy depth override (1-8; out-of-range values are clamped).
    #[arg(long)]
    pub depth: Option<u8>,

    /// Also show the function graph.
    #[arg(long)]
    pub graph: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

impl Args {
    /// `EnvFilter` directive from `--log-level`, falling back to the config.
    pub fn log_directive(&self, config: &FractalConfig) -> String {
        match self.log_level.as_deref() {
            Some(level) if level.contains('=') => level.to_string(),
            Some(level) => format!("fractal={level}"),
            None => config.logging.level.directive().to_string(),
        }
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut FractalConfig) {
        if let Some(requested) = self.depth {
            let depth = Depth::clamped(requested);
            if depth.get() != requested {
                tracing::warn!(
                    "--depth {requested} is outside [{}, {}], using {depth}",
                    Depth::MIN,
                    Depth::MAX
                );
            }
            config.fractal.depth = depth.get();
        }
        if self.graph {
            config.graph.enabled = true;
        }
    }
}
