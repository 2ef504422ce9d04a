use std::str::FromStr;
use tracing::Level;

const DEFAULT_LEVEL: Level = Level::INFO;

/// Installs the stderr subscriber. `--verbose` wins over `LOG_LEVEL`.
pub(crate) fn init(verbose: bool) {
    let env_level = std::env::var("LOG_LEVEL").ok();
    let (level, warning) = if verbose {
        (Level::DEBUG, None)
    } else {
        match parse_level(env_level.as_deref()) {
            Ok(level) => (level, None),
            Err(bad) => (
                DEFAULT_LEVEL,
                Some(format!("ignoring unrecognized `LOG_LEVEL` value `{bad}`")),
            ),
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("logging at `{level}`");
    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Reads a `LOG_LEVEL` value. Unset or blank means the default; `verbose` is
/// accepted as an alias for `debug`.
pub(crate) fn parse_level(raw: Option<&str>) -> Result<Level, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LEVEL),
        Some(value) if value.eq_ignore_ascii_case("verbose") => Ok(Level::DEBUG),
        Some(value) => Level::from_str(value).map_err(|_| value.to_string()),
    }
}
