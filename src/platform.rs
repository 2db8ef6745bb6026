//! Platform-specific configuration

/// Submit shortcut display for help text.
/// Ctrl+S works on all platforms.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

pub const QUIT_SHORTCUT: &str = "Esc";

/// Resolve the local timezone.
///
/// Prefers the IANA zone name (e.g. `Europe/Berlin`). When the platform
/// cannot name its zone, falls back to the current UTC offset (e.g. `+02:00`).
pub fn resolve_timezone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(timezone) => {
            tracing::debug!(%timezone, "Resolved timezone");
            timezone
        }
        Err(err) => {
            let offset = chrono::Local::now().format("%:z").to_string();
            tracing::debug!(%offset, error = %err, "Timezone name unavailable, using UTC offset");
            offset
        }
    }
}
