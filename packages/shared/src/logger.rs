//! Tracing subscriber setup shared by Agora binaries.

use tracing_subscriber::EnvFilter;

/// Build the fallback filter directive used when `RUST_LOG` is not set.
///
/// Binary names use hyphens while tracing targets use the crate path, so the
/// name is normalized before being used as a target.
fn default_directive(bin_name: &str, default_level: &str) -> String {
    let target = bin_name.replace('-', "_");
    let mut directives = vec![format!("{target}={default_level}")];
    if target != "agora_server" {
        directives.push(format!("agora_server={default_level}"));
    }
    directives.push(format!("tower_http={default_level}"));
    directives.join(",")
}

/// Install the global tracing subscriber.
///
/// # Arguments
///
/// * `bin_name` - Name of the running binary (usually `env!("CARGO_BIN_NAME")`)
/// * `default_level` - Level applied to Agora crates when `RUST_LOG` is unset
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(bin_name, default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(true)
        .init();
}
