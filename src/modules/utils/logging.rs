use env_logger::{Builder, WriteStyle};
use log::{error, info, warn, LevelFilter};
use std::fs::OpenOptions;
use std::path::Path;

/// Initialize the logging system, appending to `log_file`
pub fn initialize_logging(
    log_file: &Path,
    level: LevelFilter,
) -> Result<(), Box<dyn std::error::Error>> {
    // Create or append to log file
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    Builder::new()
        .filter_level(level)
        .format_timestamp_secs()
        .format_module_path(true)
        .write_style(WriteStyle::Auto)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;

    info!("Logging system initialized");
    Ok(())
}

/// Parse a level name from the config file, falling back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Info)
}

/// Mask everything but the first and last two characters
fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Structured logging for authentication events
pub fn log_auth_event(event_type: &str, username: &str, success: bool, details: Option<&str>) {
    if success {
        info!(
            "Auth event: type={}, user={}, success=true, timestamp={}, details={:?}",
            event_type,
            format_sensitive(username),
            timestamp(),
            details
        );
    } else {
        warn!(
            "Auth event: type={}, user={}, success=false, timestamp={}, details={:?}",
            event_type,
            format_sensitive(username),
            timestamp(),
            details
        );
    }
}

/// Structured logging for catalog changes
pub fn log_catalog_operation(operation: &str, title: &str, success: bool, details: Option<&str>) {
    if success {
        info!(
            "Catalog operation: op={}, title={:?}, success=true, timestamp={}, details={:?}",
            operation,
            title,
            timestamp(),
            details
        );
    } else {
        error!(
            "Catalog operation: op={}, title={:?}, success=false, timestamp={}, details={:?}",
            operation,
            title,
            timestamp(),
            details
        );
    }
}
