//! Subscriber setup. Installed before the config loads so loader messages
//! are kept, then narrowed to the configured level.

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

pub type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` plus `directive`, falling back to `info` when it does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match directive.parse::<Directive>() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("Invalid log level '{directive}' ({e}), using info");
            filter.add_directive(LevelFilter::INFO.into())
        }
    }
}

/// Install the global fmt subscriber and return a handle for later changes.
pub fn init(directive: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(build_filter(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    handle
}

/// Swap the active filter, e.g. once `logging.level` is known.
pub fn apply(handle: &FilterHandle, directive: &str) {
    if let Err(e) = handle.reload(build_filter(directive)) {
        tracing::warn!("Could not apply log level '{directive}': {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_includes_directive() {
        let filter = build_filter("fractal=debug");
        assert!(filter.to_string().contains("fractal=debug"));
    }

    #[test]
    fn unparsable_directive_falls_back_to_info() {
        let filter = build_filter("fractal=[[[");
        assert!(filter.to_string().contains("info"));
    }

    #[test]
    fn reload_replaces_bootstrap_filter() {
        let (layer, handle) = reload::Layer::<EnvFilter, Registry>::new(build_filter("fractal=info"));
        let _subscriber = tracing_subscriber::registry().with(layer);

        apply(&handle, "fractal=warn");
        let current = handle.with_current(|f| f.to_string()).unwrap();
        assert!(current.contains("fractal=warn"));
        assert!(!current.contains("fractal=info"));
    }
}
