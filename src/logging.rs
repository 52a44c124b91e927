// 📜 Logging Filter
// `RUST_LOG` decides what is shown; the level given here only applies when
// it is unset or names nothing usable.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to `default`
pub fn env_filter(default: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy()
}

/// Same as `env_filter`, for an explicit directive string
pub fn filter_from(directives: Option<&str>, default: Level) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives.unwrap_or(""))
}

// ============================================================================
// TESTS
// ============================================================================
