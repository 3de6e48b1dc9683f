use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Output goes to stderr so stdout
/// can carry schema documents.
pub fn init_logging(level: &str) {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let layer = fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .compact();
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry().with(env).with(layer).try_init();
}
