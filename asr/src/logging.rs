use std::sync::Once;

static INIT: Once = Once::new();

/// Installs `env_logger` once. `RUST_LOG` wins over `default_filter`.
pub fn init_logging(default_filter: &str) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => builder.parse_filters(&filter),
            Err(_) => builder.parse_filters(default_filter),
        };
        // Tests may already have a logger installed.
        let _ = builder.try_init();
        log::debug!("logging initialized");
    });
}
