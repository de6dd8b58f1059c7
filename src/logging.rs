use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};

fn do_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        )))
        .init();
}

/// Initialize tracing.
///
/// Will only initialize once, so tests may call this.
pub fn init() {
    static TRACING_IS_INITIALIZED: Once = Once::new();

    TRACING_IS_INITIALIZED.call_once(do_init);
}
