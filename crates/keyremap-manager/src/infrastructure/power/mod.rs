//! Reboot and elevation controls.
//!
//! The keyboard driver reads `Scancode Map` only at boot, so every
//! successful write is followed by a reboot, now or later.  Rebooting
//! requires administrator rights.

use thiserror::Error;
use tracing::info;

#[cfg(target_os = "windows")]
pub mod windows;

/// Error type for power operations.
#[derive(Debug, Error)]
pub enum PowerError {
    /// The process is not running as administrator.
    #[error("administrator privileges are required to reboot the system")]
    NotElevated,

    /// The reboot command could not be started.
    #[error("failed to run reboot command: {0}")]
    Command(#[from] std::io::Error),

    /// The reboot command ran but reported failure.
    #[error("reboot command exited with status {0}")]
    CommandFailed(String),

    /// Rebooting is not implemented on this platform.
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),
}

/// Trait abstracting the OS power controls.
///
/// The production implementation shells out on Windows; tests use a mock.
#[cfg_attr(test, mockall::automock)]
pub trait SystemPower: Send + Sync {
    /// Returns `true` if the current process runs elevated.
    fn is_elevated(&self) -> bool;
    /// Reboots immediately.
    fn reboot(&self) -> Result<(), PowerError>;
}

/// Power controls for platforms without an implementation.
pub struct UnsupportedPower;

impl SystemPower for UnsupportedPower {
    fn is_elevated(&self) -> bool {
        false
    }

    fn reboot(&self) -> Result<(), PowerError> {
        Err(PowerError::UnsupportedPlatform(
            "rebooting is only implemented on Windows".to_string(),
        ))
    }
}

/// Returns the power controls for the current platform.
pub fn platform_power() -> Box<dyn SystemPower> {
    #[cfg(target_os = "windows")]
    {
        Box::new(windows::WindowsPower)
    }

    #[cfg(not(target_os = "windows"))]
    {
        Box::new(UnsupportedPower)
    }
}

/// Reboots if the process is elevated.
///
/// # Errors
///
/// Returns [`PowerError::NotElevated`] without attempting a reboot when the
/// process lacks administrator rights, or the platform's reboot error.
pub fn request_reboot(power: &dyn SystemPower) -> Result<(), PowerError> {
    if !power.is_elevated() {
        return Err(PowerError::NotElevated);
    }
    info!("rebooting to apply keyboard remaps");
    power.reboot()
}
