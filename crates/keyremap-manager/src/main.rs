//! KeyRemap manager: entry point.
//!
//! Edits the Windows `Scancode Map` registry value that the keyboard driver
//! reads at boot to remap or disable keys.
//!
//! # Usage
//!
//! ```text
//! keyremap list
//! keyremap add "Caps Lock" "Left Ctrl"
//! keyremap disable "Left Win"
//! keyremap remove "Caps Lock"
//! keyremap reset --yes
//! ```
//!
//! Writing under `HKLM` needs an elevated prompt.  `--blob-file` edits a
//! plain file holding the same bytes instead, which works on any platform.
//!
//! # Environment variable overrides
//!
//! | Variable             | Description                                 |
//! |----------------------|---------------------------------------------|
//! | `RUST_LOG`           | Log filter; overrides `manager.log_level`   |
//! | `KEYREMAP_CONFIG`    | Config file path (same as `--config`)       |
//! | `KEYREMAP_BLOB_FILE` | Blob file path (same as `--blob-file`)      |
//!
//! # Architecture overview
//!
//! ```text
//! keyremap (this binary)
//!   cli/             argument parsing and command output
//!   application/     RemapSession: load, edit, save, reset
//!   infrastructure/
//!     registry/      Windows registry, file, and in-memory stores
//!     power/         elevation check and reboot
//!     storage/       TOML config
//!       ↕
//! keyremap-core      codec, rules, key names
//! ```

use std::sync::Arc;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use keyremap_manager::cli::{self, Cli};
use keyremap_manager::infrastructure::power::{platform_power, SystemPower};
use keyremap_manager::infrastructure::storage::config::{
    load_config_from, resolve_config_path, AppConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ── Configuration ─────────────────────────────────────────────────────────
    //
    // Loaded before logging so `manager.log_level` can seed the filter.  A
    // broken config file is reported once logging is up and then ignored.
    let loaded = resolve_config_path(cli.config.clone()).and_then(|path| load_config_from(&path));
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Logging setup ─────────────────────────────────────────────────────────
    //
    // Logs go to stderr so command output on stdout stays scriptable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.manager.log_level)),
        )
        .init();

    if let Some(e) = config_error {
        warn!("using default configuration: {e}");
    }
    debug!(?config, "effective configuration");

    let power: Arc<dyn SystemPower> = Arc::from(platform_power());
    let output = cli::run(cli, config, power).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
