use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize dotenvy
pub fn init_env() {
    dotenvy::dotenv().ok();
}

/// Default `EnvFilter` directive for a service
#[must_use]
pub fn default_filter(service_name: &str) -> String {
    format!("info,{service_name}=debug")
}

/// Log file name for a service started at the current local time
#[must_use]
pub fn log_file_name(service_name: &str) -> String {
    let now = chrono::Local::now().format("%y-%m-%d-%H-%M-%S").to_string();
    format!("heartbeat-{service_name}.log.{now}.jsonl")
}

/// Initialize tracing with optional file logging
///
/// Console logs go to stderr; stdout is reserved for the service's own
/// output lines. When `LOG_DIR` is set, a JSON copy is written there and the
/// returned guard must be kept alive to flush it.
pub fn init_tracing(service_name: &str) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(service_name).into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    match std::env::var("LOG_DIR") {
        Ok(log_dir) if !log_dir.is_empty() => {
            let file_appender =
                tracing_appender::rolling::never(&log_dir, log_file_name(service_name));
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .json();

            registry.with(file_layer).init();
            tracing::debug!("File logging enabled in {}", log_dir);

            Some(guard)
        }
        _ => {
            registry.init();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_enables_service_debug() {
        assert_eq!(default_filter("heartbeat"), "info,heartbeat=debug");
    }

    #[test]
    fn test_log_file_name_shape() {
        let name = log_file_name("heartbeat");
        assert!(name.starts_with("heartbeat-heartbeat.log."));
        assert!(name.ends_with(".jsonl"));
    }
}
