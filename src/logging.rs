use std::sync::Once;

/// Filter and colour settings for the `env_logger` backend.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Overrides `RUST_LOG` when set, e.g. `"hello_triangle=debug,wgpu_core=warn"`.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the logger on first call: explicit filter, then `RUST_LOG`, then `info`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(log::LevelFilter::Info),
        };

        builder.write_style(config.write_style);

        // another logger may already be installed
        if builder.try_init().is_ok() {
            log::debug!("logger ready");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_logging(LoggingConfig {
            env_filter: Some("hello_triangle=debug".to_string()),
            ..Default::default()
        });
        init_logging(LoggingConfig::default());
        log::info!("still logging");
    }
}
