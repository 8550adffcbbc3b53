use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr; stdout is kept for the messages the user acts on.
///
/// `RUST_LOG` wins over `level`, which wins over the verbose/default filter.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let fallback = match level {
        Some(level) => format!("ynab_convert={}", level),
        None if verbose => "ynab_convert=debug,info".to_string(),
        None => "ynab_convert=info".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
