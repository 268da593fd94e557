use anyhow::{anyhow, Context};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding log filter directives.  When set, it takes
/// precedence over the configured level.
pub(crate) const LOG_ENV_VAR: &str = "POWERSNAKE_LOG";

/// Install a global subscriber that appends plain-text logs to the file at
/// `path`.  The terminal is taken over by the game, so nothing is ever logged
/// to stdout or stderr.
pub(crate) fn init(path: &Path, default_level: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    let filter = make_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), default_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn make_filter(directives: Option<&str>, default_level: &str) -> anyhow::Result<EnvFilter> {
    if let Some(d) = directives.filter(|d| !d.trim().is_empty()) {
        EnvFilter::try_new(d).with_context(|| format!("invalid {LOG_ENV_VAR} value: {d:?}"))
    } else {
        EnvFilter::try_new(default_level)
            .with_context(|| format!("invalid log level: {default_level:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_level() {
        let filter = make_filter(None, "debug").unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn env_overrides_level() {
        let filter = make_filter(Some("powersnake=trace"), "info").unwrap();
        assert_eq!(filter.to_string(), "powersnake=trace");
    }

    #[test]
    fn blank_env_is_ignored() {
        let filter = make_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn bad_level() {
        assert!(make_filter(None, "powersnake=verbose").is_err());
    }
}
