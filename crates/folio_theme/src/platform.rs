//! Ambient color-scheme detection
//!
//! A read-only probe of the operating environment's system-wide dark-mode
//! preference. The probe is consulted exactly once, at startup, and only
//! when no explicitly saved choice exists; a saved choice always wins even
//! if the system preference changed since it was written.

use crate::scheme::ColorScheme;

/// Read-only view of the host's ambient appearance preference.
///
/// `None` means the environment cannot report a preference; callers fall
/// back to [`ColorScheme::Light`].
pub trait AmbientScheme {
    fn preferred_scheme(&self) -> Option<ColorScheme>;
}

/// Probe backed by the real host environment
pub struct SystemScheme;

impl AmbientScheme for SystemScheme {
    fn preferred_scheme(&self) -> Option<ColorScheme> {
        detect_system_color_scheme()
    }
}

/// Detect the system color scheme, if the platform exposes one.
#[cfg(target_os = "macos")]
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    use std::process::Command;

    // The global AppleInterfaceStyle default only exists in dark mode; a
    // failing read therefore means light, not unknown.
    let output = Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()?;

    if output.status.success() && String::from_utf8_lossy(&output.stdout).contains("Dark") {
        Some(ColorScheme::Dark)
    } else {
        Some(ColorScheme::Light)
    }
}

/// Detect the system color scheme, if the platform exposes one.
#[cfg(target_os = "linux")]
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    use std::process::Command;

    let output = Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .ok()?;

    if !output.status.success() {
        tracing::warn!("gsettings probe failed, ambient scheme unknown");
        return None;
    }

    if String::from_utf8_lossy(&output.stdout).contains("prefer-dark") {
        Some(ColorScheme::Dark)
    } else {
        Some(ColorScheme::Light)
    }
}

/// Detect the system color scheme, if the platform exposes one.
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn detect_system_color_scheme() -> Option<ColorScheme> {
    None
}
