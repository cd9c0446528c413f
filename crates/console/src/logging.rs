use std::io;

use tracing_subscriber::EnvFilter;

/// Log to stderr. `RUST_LOG` wins over `default_directive` when set.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second init keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}
