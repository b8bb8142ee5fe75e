//! Subscriber setup. The filter is installed before the config is read so
//! loader diagnostics reach stderr, then swapped for the configured level.

use splitshell_config::LogLevel;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const FALLBACK: &str = "splitshell=info";

pub struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
    overridden: bool,
}

/// The filter to start with: `--log-level`, then `RUST_LOG`, then info.
/// The flag is true when either explicit source was present.
fn startup_directive(cli: Option<&str>, env: Option<&str>) -> (String, bool) {
    match cli.or(env) {
        Some(directive) => (directive.to_string(), true),
        None => (FALLBACK.to_string(), false),
    }
}

fn parse_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("invalid log filter '{directive}': {e}");
        EnvFilter::new(FALLBACK)
    })
}

pub fn config_directive(level: LogLevel) -> String {
    format!("splitshell={}", level.as_directive())
}

impl Logging {
    pub fn init(cli: Option<&str>) -> Self {
        let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let (directive, overridden) = startup_directive(cli, env.as_deref());
        let (filter, handle) = reload::Layer::new(parse_filter(&directive));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        Self { handle, overridden }
    }

    /// Switch to the configured level unless the user chose a filter.
    pub fn apply_config(&self, level: LogLevel) {
        if self.overridden {
            return;
        }
        let directive = config_directive(level);
        if let Err(e) = self.handle.reload(parse_filter(&directive)) {
            tracing::warn!("could not apply log level {directive}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_wins_over_env() {
        assert_eq!(
            startup_directive(Some("debug"), Some("warn")),
            ("debug".to_string(), true)
        );
        assert_eq!(
            startup_directive(None, Some("warn")),
            ("warn".to_string(), true)
        );
        assert_eq!(startup_directive(None, None), (FALLBACK.to_string(), false));
    }

    #[test]
    fn bad_directive_falls_back() {
        assert_eq!(parse_filter("splitshell=loudest").to_string(), FALLBACK);
    }

    #[test]
    fn configured_level_replaces_startup_filter() {
        let (filter, handle) = reload::Layer::new(parse_filter(FALLBACK));
        let _subscriber = tracing_subscriber::registry().with(filter);
        let logging = Logging {
            handle,
            overridden: false,
        };
        logging.apply_config(LogLevel::Debug);
        let current = logging.handle.with_current(|f| f.to_string()).unwrap();
        assert_eq!(current, "splitshell=debug");
    }

    #[test]
    fn explicit_filter_is_kept() {
        let (filter, handle) = reload::Layer::new(parse_filter("splitshell=trace"));
        let _subscriber = tracing_subscriber::registry().with(filter);
        let logging = Logging {
            handle,
            overridden: true,
        };
        logging.apply_config(LogLevel::Error);
        let current = logging.handle.with_current(|f| f.to_string()).unwrap();
        assert_eq!(current, "splitshell=trace");
    }
}
