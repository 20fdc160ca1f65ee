//! Windows reboot and elevation implementation.
//!
//! # Safety
//!
//! `IsUserAnAdmin` is the only FFI call; it takes no arguments and has no
//! preconditions.

#![cfg(target_os = "windows")]

use std::process::Command;

use ::windows::Win32::UI::Shell::IsUserAnAdmin;

use super::{PowerError, SystemPower};

/// Power controls backed by the Windows shell.
pub struct WindowsPower;

impl SystemPower for WindowsPower {
    fn is_elevated(&self) -> bool {
        // SAFETY: IsUserAnAdmin has no parameters and only queries the
        // current process token.
        unsafe { IsUserAnAdmin().as_bool() }
    }

    fn reboot(&self) -> Result<(), PowerError> {
        let status = Command::new("shutdown").args(["/r", "/t", "0"]).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(PowerError::CommandFailed(status.to_string()))
        }
    }
}
