use std::ffi::OsStr;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "game-reviews.log";

/// Directive used when `RUST_LOG` is not set.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("game_reviews={}", level)
}

/// Split a log file path into the rolling appender's directory and file prefix.
fn split_log_path(log_path: &Path) -> (&Path, &OsStr) {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE));
    (dir, prefix)
}

/// Initialize the logging system
///
/// Compact output goes to stderr. With `log_file`, JSON lines are also
/// written to a daily rolling file next to that path.
pub fn init(verbose: bool, log_file: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        let (dir, prefix) = split_log_path(log_path);
        let _ = std::fs::create_dir_all(dir);

        let file_layer = fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, prefix))
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "game_reviews=info");
        assert_eq!(default_directive(true), "game_reviews=debug");
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }

    #[test]
    fn test_split_log_path_with_dir() {
        let (dir, prefix) = split_log_path(Path::new("/var/log/reviews/server.log"));
        assert_eq!(dir, Path::new("/var/log/reviews"));
        assert_eq!(prefix, "server.log");
    }

    #[test]
    fn test_split_log_path_bare_file_uses_cwd() {
        let (dir, prefix) = split_log_path(Path::new("server.log"));
        assert_eq!(dir, Path::new("."));
        assert_eq!(prefix, "server.log");
    }

    #[test]
    fn test_split_log_path_without_file_name() {
        let (_, prefix) = split_log_path(Path::new("/"));
        assert_eq!(prefix, DEFAULT_LOG_FILE);
    }
}
