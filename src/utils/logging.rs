use crate::config::LoggingSettings;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};
use std::env;
use std::fs;
use std::io;
use std::sync::Mutex;

/// Build the filter used by [`init_logging`].
///
/// `RUST_LOG` wins when it is set; otherwise the configured level is used and
/// this crate is raised to `debug`.
pub fn build_env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut filter = EnvFilter::new(&settings.level);
        match "terrain_field=debug".parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("Warning: invalid crate log directive: {}", e),
        }
        filter
    })
}

/// Initialize logging: console output plus an optional session log file.
///
/// A subscriber installed earlier (by a test harness or the host application)
/// is left alone.
pub fn init_logging(settings: &LoggingSettings) -> io::Result<()> {
    let file_layer = match &settings.log_file {
        Some(path) => {
            // Log files are per session
            if let Err(e) = fs::remove_file(path) {
                if e.kind() != io::ErrorKind::NotFound {
                    eprintln!("Warning: Failed to remove existing {}: {}", path.display(), e);
                }
            }
            let log_file = fs::File::create(path)?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(log_file))
                    .with_span_events(FmtSpan::CLOSE)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false)
                    .boxed(),
            )
        }
        None => None,
    };

    let result = tracing_subscriber::registry()
        .with(build_env_filter(settings))
        .with(
            fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_thread_names(true)
                .with_ansi(true),
        )
        .with(file_layer)
        .try_init();

    match result {
        Ok(()) => {
            tracing::info!("Logging initialized with level: {}", settings.level);
            if let Some(path) = &settings.log_file {
                tracing::info!("File logging enabled: {}", path.display());
            }
        }
        Err(e) => {
            tracing::warn!("Logging already initialized, keeping existing subscriber: {}", e);
        }
    }

    Ok(())
}

/// Log build information for debugging
pub fn log_system_info() {
    tracing::info!("=== System Information ===");
    tracing::info!("OS: {}", env::consts::OS);
    tracing::info!("Architecture: {}", env::consts::ARCH);
    tracing::info!("{} version: {}", crate::APP_NAME, crate::VERSION);
    tracing::info!("Rayon threads: {}", rayon::current_num_threads());
    tracing::info!("==========================");
}
