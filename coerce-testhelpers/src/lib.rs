#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

use std::sync::LazyLock;
use std::time::Instant;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the event filter for test runs.
pub const LOG_ENV: &str = "COERCE_LOG";

static FIRST_SETUP: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Stamps events with the time since the first [`setup`] call, so
/// interleaved tests read as one timeline.
struct SinceFirstSetup;

impl FormatTime for SinceFirstSetup {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = FIRST_SETUP.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

/// Parses a [`LOG_ENV`]-style directive string such as `coerce=debug,warn`.
///
/// Returns `None` when the directives do not parse.
pub fn parse_filter(directives: &str) -> Option<Targets> {
    directives.parse::<Targets>().ok()
}

/// The filter from [`LOG_ENV`], falling back to every event at `TRACE`.
pub fn env_filter() -> Targets {
    std::env::var(LOG_ENV)
        .ok()
        .as_deref()
        .and_then(parse_filter)
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE))
}

static INSTALLED: LazyLock<()> = LazyLock::new(|| {
    LazyLock::force(&FIRST_SETUP);

    let layer = tracing_subscriber::fmt::layer()
        .with_test_writer()
        .with_timer(SinceFirstSetup)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    // Another harness may already own the global subscriber.
    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(env_filter())
        .try_init();
});

/// Routes `coerce` tracing events to the test output.
///
/// Call it first thing in a test; repeated calls cost one atomic load.
pub fn setup() {
    LazyLock::force(&INSTALLED);
}

/// Test return type that turns any error reaching it through `?` into a
/// panic naming the `?` site, so failing tests point at the failing call.
#[derive(Debug)]
pub struct IPanic;

impl<E> From<E> for IPanic
where
    E: core::error::Error + Send + Sync,
{
    #[track_caller]
    fn from(value: E) -> Self {
        panic!("from: {}: {value}", core::panic::Location::caller())
    }
}
