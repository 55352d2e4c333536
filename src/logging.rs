//! Logger initialization over the `log` facade.

use std::sync::Once;

use log::LevelFilter;

/// Log target shared by the library and the demo binary.
const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "tumble=trace") and wins over `RUST_LOG`. With neither set, this crate
/// logs at `crate_level` and every dependency at `warn`, which keeps SDL
/// and friends quiet during the frame loop.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub crate_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            crate_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// The filter string the logger is built from.
    pub fn filters(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| default_filters(self.crate_level))
    }
}

fn default_filters(crate_level: LevelFilter) -> String {
    format!(
        "{},{CRATE_TARGET}={}",
        LevelFilter::Warn.as_str().to_lowercase(),
        crate_level.as_str().to_lowercase()
    )
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filters = config.filters();
        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&filters)
            .write_style(config.write_style);

        // A test harness may have installed its own logger first.
        if builder.try_init().is_ok() {
            log::debug!(target: CRATE_TARGET, "logging initialized with '{filters}'");
        }
    });
}
