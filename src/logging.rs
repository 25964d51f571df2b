//! Tracing setup.

use tracing::level_filters::LevelFilter;
use tracing::{Subscriber, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Resolve a `log_level` value into a filter.
///
/// Accepts level names in any case (`INFO`, `warning`, ...) or a full
/// `tracing` directive list such as `info,aws_config=warn`. Returns `None`
/// when nothing usable was given.
pub fn parse_filter(level: &str) -> Option<EnvFilter> {
    let level = level.trim();
    if level.is_empty() {
        return None;
    }

    let normalized = match level.to_ascii_uppercase().as_str() {
        "CRITICAL" | "FATAL" => Some(LevelFilter::ERROR),
        "WARNING" => Some(LevelFilter::WARN),
        "NOTSET" => Some(LevelFilter::TRACE),
        other => other.parse::<LevelFilter>().ok(),
    };

    match normalized {
        Some(filter) => Some(EnvFilter::default().add_directive(filter.into())),
        // A bare word would parse as a target name and silence everything.
        None if level.contains('=') || level.contains(',') => EnvFilter::try_new(level).ok(),
        None => None,
    }
}

/// Filter for `level`, or ERROR when it is not understood.
///
/// The fallback still lets this module's warning about the bad value through.
/// The flag is `true` when the fallback was used.
fn resolve_filter(level: &str) -> (EnvFilter, bool) {
    if let Some(filter) = parse_filter(level) {
        return (filter, false);
    }

    let mut filter = EnvFilter::default().add_directive(LevelFilter::ERROR.into());
    if let Ok(own) = format!("{}=warn", module_path!()).parse() {
        filter = filter.add_directive(own);
    }
    (filter, true)
}

fn report_fallback(level: &str) {
    warn!(log_level = %level, "unrecognised log level, using ERROR");
}

/// Lambda stamps every line itself, so timestamps and colours are off.
fn build_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .finish()
}

/// Install the global fmt subscriber writing to stdout.
///
/// Returns `false` when a subscriber was already installed; the first one
/// stays in effect.
pub fn init_tracing(level: &str) -> bool {
    let (filter, fallback) = resolve_filter(level);

    let subscriber = build_subscriber(filter, std::io::stdout);
    let installed = tracing::subscriber::set_global_default(subscriber).is_ok();

    if installed && fallback {
        report_fallback(level);
    }
    installed
}
