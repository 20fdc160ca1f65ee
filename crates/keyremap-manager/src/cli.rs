//! Command-line surface of the `keyremap` binary.
//!
//! # Commands
//!
//! ```text
//! keyremap [--config PATH] [--blob-file PATH] [--dry-run] [--reboot] <COMMAND>
//!
//!   list [--json]       Show the stored remaps
//!   add <FROM> <TO>     Make FROM behave as TO
//!   disable <KEY>       Turn KEY off
//!   remove <FROM>       Delete the remap for FROM
//!   reset --yes         Delete the Scancode Map value
//!   keys                Print every known key name and scancode
//!   dump                Print the raw stored bytes
//!   config [--write]    Print (and optionally save) the effective config
//! ```
//!
//! Keys are given by name (`"Caps Lock"`, case-insensitive) or as a hex
//! scancode (`0x3A`, `0xE01D`).
//!
//! Registry and file I/O is blocking, so every store command runs on
//! `tokio::task::spawn_blocking`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use keyremap_core::keymap::{all_keys, describe_rule, display_label, parse_key};
use keyremap_core::{decode, RemapRule};
use serde::Serialize;
use tracing::debug;

use crate::application::edit_remaps::{reset_store, RemapSession, ResetOutcome};
use crate::infrastructure::power::{request_reboot, SystemPower};
use crate::infrastructure::registry::{open_store, ScancodeMapStore};
use crate::infrastructure::storage::config::{resolve_config_path, save_config_to, AppConfig};

/// Printed after a write when no reboot was requested.
pub const REBOOT_NOTICE: &str = "Changes take effect after the next reboot.";

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Edit the Windows keyboard `Scancode Map`.
#[derive(Debug, Parser)]
#[command(
    name = "keyremap",
    about = "Remap or disable keyboard keys through the Windows Scancode Map",
    version
)]
pub struct Cli {
    /// Path of the TOML config file (defaults to the platform config dir).
    #[arg(long, global = true, env = "KEYREMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Edit a raw blob file instead of the registry.
    #[arg(long, global = true, env = "KEYREMAP_BLOB_FILE")]
    pub blob_file: Option<PathBuf>,

    /// Show the bytes that would be written without writing them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Reboot immediately after a successful write (needs administrator rights).
    #[arg(long, global = true)]
    pub reboot: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the stored remaps.
    List {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Make FROM behave as TO.
    Add { from: String, to: String },
    /// Turn KEY off.
    Disable { key: String },
    /// Delete the remap for FROM.
    Remove { from: String },
    /// Delete the Scancode Map value, restoring the default layout.
    Reset {
        /// Confirm the reset.
        #[arg(long)]
        yes: bool,
    },
    /// Print every known key name and scancode.
    Keys,
    /// Print the raw stored bytes.
    Dump,
    /// Print the effective configuration.
    Config {
        /// Also save it to the config file.
        #[arg(long)]
        write: bool,
    },
}

/// Flags that change how mutating commands finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub dry_run: bool,
    pub reboot: bool,
    pub notify_after_write: bool,
}

// ── JSON output ───────────────────────────────────────────────────────────────

/// One rule in `list --json` output.
#[derive(Debug, Serialize)]
pub struct RuleDto {
    pub source: String,
    pub target: String,
    pub source_scancode: String,
    pub target_scancode: String,
}

impl From<&RemapRule> for RuleDto {
    fn from(rule: &RemapRule) -> Self {
        let target = if rule.is_disable() {
            "(disabled)".to_string()
        } else {
            display_label(rule.target_scancode).into_owned()
        };
        Self {
            source: display_label(rule.source_scancode).into_owned(),
            target,
            source_scancode: format!("0x{:04X}", rule.source_scancode),
            target_scancode: format!("0x{:04X}", rule.target_scancode),
        }
    }
}

/// `list --json` document.
#[derive(Debug, Serialize)]
pub struct ListDto {
    pub location: String,
    pub corrupt: bool,
    pub rules: Vec<RuleDto>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Runs the parsed command and returns the text to print on stdout.
///
/// # Errors
///
/// Returns an error for unknown key names, store failures, a missing
/// `--yes` on `reset`, or a failed reboot request.
pub async fn run(cli: Cli, config: AppConfig, power: Arc<dyn SystemPower>) -> anyhow::Result<String> {
    let opts = RunOptions {
        dry_run: cli.dry_run,
        reboot: cli.reboot,
        notify_after_write: config.reboot.notify_after_write,
    };
    debug!(command = ?cli.command, ?opts, "running command");

    let store = || -> anyhow::Result<Box<dyn ScancodeMapStore>> {
        Ok(open_store(cli.blob_file.clone(), &config.registry)?)
    };

    match cli.command.clone() {
        Command::Keys => Ok(render_keys()),
        Command::Config { write } => render_config(&config, cli.config.clone(), write),
        Command::List { json } => {
            let store = store()?;
            blocking(move || list(store, json)).await
        }
        Command::Dump => {
            let store = store()?;
            blocking(move || dump(store)).await
        }
        Command::Add { from, to } => {
            let source = parse_key(&from)?;
            let target = parse_key(&to)?;
            let store = store()?;
            blocking(move || {
                edit(store, opts, &*power, |session, out| {
                    if let Some(old) = session.add(source, target)? {
                        out.push(format!("Replaced {}", describe_rule(&old)));
                    }
                    out.push(format!("Added {}", describe_rule(&RemapRule::new(source, target)?)));
                    Ok(())
                })
            })
            .await
        }
        Command::Disable { key } => {
            let source = parse_key(&key)?;
            let store = store()?;
            blocking(move || {
                edit(store, opts, &*power, |session, out| {
                    if let Some(old) = session.disable(source)? {
                        out.push(format!("Replaced {}", describe_rule(&old)));
                    }
                    out.push(format!("Disabled {}", display_label(source)));
                    Ok(())
                })
            })
            .await
        }
        Command::Remove { from } => {
            let source = parse_key(&from)?;
            let store = store()?;
            blocking(move || {
                edit(store, opts, &*power, |session, out| match session.remove(source) {
                    Some(old) => {
                        out.push(format!("Removed {}", describe_rule(&old)));
                        Ok(())
                    }
                    None => bail!("{} is not remapped", display_label(source)),
                })
            })
            .await
        }
        Command::Reset { yes } => {
            if !yes {
                bail!("reset deletes every remap; pass --yes to confirm");
            }
            let store = store()?;
            blocking(move || reset(store, opts, &*power)).await
        }
    }
}

/// Runs blocking store work off the async runtime.
async fn blocking<F>(work: F) -> anyhow::Result<String>
where
    F: FnOnce() -> anyhow::Result<String> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .context("store task panicked")?
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn list(store: Box<dyn ScancodeMapStore>, json: bool) -> anyhow::Result<String> {
    let (session, report) = RemapSession::open(store)?;

    if json {
        let doc = ListDto {
            location: session.location(),
            corrupt: report.corrupt,
            rules: session.rules().iter().map(RuleDto::from).collect(),
        };
        return Ok(serde_json::to_string_pretty(&doc)?);
    }

    let mut out = Vec::new();
    if report.corrupt {
        out.push(corrupt_warning(&session.location()));
    }
    if session.rules().is_empty() {
        out.push("No keys are remapped.".to_string());
    } else {
        out.extend(session.rules().iter().map(describe_rule));
    }
    Ok(out.join("\n"))
}

fn dump(store: Box<dyn ScancodeMapStore>) -> anyhow::Result<String> {
    let location = store.location();
    let Some(blob) = store.read()? else {
        return Ok(format!("{location}: no value"));
    };

    let mut out = vec![
        format!("{location}: {} bytes", blob.len()),
        hex_bytes(&blob),
    ];
    if let Err(e) = decode(&blob) {
        out.push(format!("warning: {e}"));
    }
    Ok(out.join("\n"))
}

/// Opens a session, applies `change`, then saves (or previews on dry run).
fn edit<F>(
    store: Box<dyn ScancodeMapStore>,
    opts: RunOptions,
    power: &dyn SystemPower,
    change: F,
) -> anyhow::Result<String>
where
    F: FnOnce(&mut RemapSession<Box<dyn ScancodeMapStore>>, &mut Vec<String>) -> anyhow::Result<()>,
{
    let (mut session, report) = RemapSession::open(store)?;
    let mut out = Vec::new();
    if report.corrupt {
        out.push(corrupt_warning(&session.location()));
    }

    change(&mut session, &mut out)?;

    if opts.dry_run {
        let blob = session.preview();
        out.push(format!(
            "Dry run: would write {} bytes to {}",
            blob.len(),
            session.location()
        ));
        out.push(hex_bytes(&blob));
        return Ok(out.join("\n"));
    }

    let outcome = session.save()?;
    out.push(format!(
        "Saved {} remap(s) to {}",
        session.rules().len(),
        session.location()
    ));
    finish_write(outcome.reboot_required, opts, power, &mut out)?;
    Ok(out.join("\n"))
}

fn reset(
    store: Box<dyn ScancodeMapStore>,
    opts: RunOptions,
    power: &dyn SystemPower,
) -> anyhow::Result<String> {
    let location = store.location();
    if opts.dry_run {
        return Ok(format!("Dry run: would delete {location}"));
    }

    // Never read first: reset must work on a value that fails to load.
    let mut out = Vec::new();
    let outcome = reset_store(&*store)?;
    match outcome {
        ResetOutcome::Removed => out.push(format!("Deleted {location}")),
        ResetOutcome::NothingToReset => out.push(format!("Nothing to reset at {location}")),
    }
    finish_write(outcome.reboot_required(), opts, power, &mut out)?;
    Ok(out.join("\n"))
}

/// Reboots or prints the reboot notice after the store changed.
fn finish_write(
    reboot_required: bool,
    opts: RunOptions,
    power: &dyn SystemPower,
    out: &mut Vec<String>,
) -> anyhow::Result<()> {
    if !reboot_required {
        return Ok(());
    }
    if opts.reboot {
        request_reboot(power).context("the remaps were saved but the reboot failed")?;
        out.push("Rebooting now.".to_string());
    } else if opts.notify_after_write {
        out.push(REBOOT_NOTICE.to_string());
    }
    Ok(())
}

fn render_keys() -> String {
    all_keys()
        .map(|(label, code)| format!("0x{code:04X}  {label}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_config(
    config: &AppConfig,
    explicit_path: Option<PathBuf>,
    write: bool,
) -> anyhow::Result<String> {
    let body = toml::to_string_pretty(config).context("failed to serialize config")?;
    if !write {
        return Ok(body.trim_end().to_string());
    }

    let path = resolve_config_path(explicit_path)?;
    save_config_to(config, &path)?;
    Ok(format!("# saved to {}\n{}", path.display(), body.trim_end()))
}

fn corrupt_warning(location: &str) -> String {
    format!("warning: the value at {location} is corrupt and was ignored; saving will replace it")
}

/// Formats bytes the way regedit exports `hex:` values.
fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(",")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::power::MockSystemPower;
    use crate::infrastructure::registry::memory::MemoryStore;
    use clap::CommandFactory;
    use keyremap_core::encode;
    use uuid::Uuid;

    struct TempBlob {
        dir: PathBuf,
    }

    impl TempBlob {
        fn new() -> Self {
            Self {
                dir: std::env::temp_dir().join(format!("keyremap_cli_{}", Uuid::new_v4())),
            }
        }

        fn path(&self) -> PathBuf {
            self.dir.join("scancode_map.bin")
        }

        fn seed(&self, blob: &[u8]) {
            std::fs::create_dir_all(&self.dir).unwrap();
            std::fs::write(self.path(), blob).unwrap();
        }

        fn read(&self) -> Option<Vec<u8>> {
            std::fs::read(self.path()).ok()
        }
    }

    impl Drop for TempBlob {
        fn drop(&mut self) {
            std::fs::remove_dir_all(&self.dir).ok();
        }
    }

    fn idle_power() -> Arc<dyn SystemPower> {
        let mut power = MockSystemPower::new();
        power.expect_reboot().never();
        Arc::new(power)
    }

    fn cli(blob: &TempBlob, args: &[&str]) -> Cli {
        let path = blob.path();
        let mut argv = vec!["keyremap", "--blob-file", path.to_str().unwrap()];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    fn rule(source: u16, target: u16) -> RemapRule {
        RemapRule::new(source, target).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_add_with_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["keyremap", "add", "Caps Lock", "Left Ctrl", "--dry-run"]);
        assert!(cli.dry_run);
        assert_eq!(
            cli.command,
            Command::Add {
                from: "Caps Lock".to_string(),
                to: "Left Ctrl".to_string()
            }
        );
    }

    #[test]
    fn test_hex_bytes_matches_regedit_style() {
        assert_eq!(hex_bytes(&[0x00, 0x1d, 0xe0]), "00,1d,e0");
        assert_eq!(hex_bytes(&[]), "");
    }

    #[test]
    fn test_rule_dto_labels_disabled_target() {
        let dto = RuleDto::from(&rule(0xE05B, 0x0000));
        assert_eq!(dto.target, "(disabled)");
        assert_eq!(dto.source_scancode, "0xE05B");
    }

    // ── list / dump ───────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_without_value_reports_no_remaps() {
        let blob = TempBlob::new();
        let out = run(cli(&blob, &["list"]), AppConfig::default(), idle_power())
            .await
            .unwrap();
        assert_eq!(out, "No keys are remapped.");
    }

    #[tokio::test]
    async fn test_list_shows_stored_rules_with_labels() {
        // Arrange
        let blob = TempBlob::new();
        blob.seed(&encode(&[rule(0x003A, 0x001D), rule(0xE05B, 0x0000)]));

        // Act
        let out = run(cli(&blob, &["list"]), AppConfig::default(), idle_power())
            .await
            .unwrap();

        // Assert
        assert_eq!(out, "Caps Lock -> Left Ctrl\nLeft Win -> (disabled)");
    }

    #[tokio::test]
    async fn test_list_json_includes_scancodes() {
        // Arrange
        let blob = TempBlob::new();
        blob.seed(&encode(&[rule(0x003A, 0x001D)]));

        // Act
        let out = run(cli(&blob, &["list", "--json"]), AppConfig::default(), idle_power())
            .await
            .unwrap();
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();

        // Assert
        assert_eq!(doc["corrupt"], false);
        assert_eq!(doc["rules"][0]["source"], "Caps Lock");
        assert_eq!(doc["rules"][0]["target_scancode"], "0x001D");
    }

    #[tokio::test]
    async fn test_list_warns_about_corrupt_value() {
        let blob = TempBlob::new();
        let mut bytes = encode(&[rule(0x003A, 0x001D)]);
        bytes[8] = 9;
        blob.seed(&bytes);

        let out = run(cli(&blob, &["list"]), AppConfig::default(), idle_power())
            .await
            .unwrap();

        assert!(out.starts_with("warning:"), "got {out}");
        assert!(out.ends_with("No keys are remapped."));
    }

    #[tokio::test]
    async fn test_dump_prints_hex_bytes() {
        let blob = TempBlob::new();
        blob.seed(&encode(&[]));

        let out = run(cli(&blob, &["dump"]), AppConfig::default(), idle_power())
            .await
            .unwrap();

        assert!(out.contains("16 bytes"));
        assert!(out.ends_with("00,00,00,00,00,00,00,00,01,00,00,00,00,00,00,00"));
    }

    // ── add / disable / remove ────────────────────────────────────────────────

    #[tokio::test]
    async fn test_add_writes_blob_and_prints_reboot_notice() {
        // Arrange
        let blob = TempBlob::new();

        // Act
        let out = run(
            cli(&blob, &["add", "caps lock", "Left Ctrl"]),
            AppConfig::default(),
            idle_power(),
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(blob.read().unwrap(), encode(&[rule(0x003A, 0x001D)]));
        assert!(out.contains("Added Caps Lock -> Left Ctrl"));
        assert!(out.ends_with(REBOOT_NOTICE));
    }

    #[tokio::test]
    async fn test_add_without_notice_when_disabled_in_config() {
        let blob = TempBlob::new();
        let mut config = AppConfig::default();
        config.reboot.notify_after_write = false;

        let out = run(cli(&blob, &["add", "0x3A", "0x1D"]), config, idle_power())
            .await
            .unwrap();

        assert!(!out.contains(REBOOT_NOTICE));
    }

    #[tokio::test]
    async fn test_add_replaces_existing_rule_for_same_source() {
        let blob = TempBlob::new();
        blob.seed(&encode(&[rule(0x003A, 0x001D)]));

        let out = run(
            cli(&blob, &["add", "Caps Lock", "Esc"]),
            AppConfig::default(),
            idle_power(),
        )
        .await
        .unwrap();

        assert!(out.contains("Replaced Caps Lock -> Left Ctrl"));
        assert_eq!(blob.read().unwrap(), encode(&[rule(0x003A, 0x0001)]));
    }

    #[tokio::test]
    async fn test_add_unknown_key_fails_before_touching_store() {
        let blob = TempBlob::new();

        let result = run(
            cli(&blob, &["add", "Hyper", "Left Ctrl"]),
            AppConfig::default(),
            idle_power(),
        )
        .await;

        assert!(result.is_err());
        assert!(blob.read().is_none());
    }

    #[tokio::test]
    async fn test_add_dry_run_previews_without_writing() {
        let blob = TempBlob::new();

        let out = run(
            cli(&blob, &["--dry-run", "add", "Caps Lock", "Left Ctrl"]),
            AppConfig::default(),
            idle_power(),
        )
        .await
        .unwrap();

        assert!(blob.read().is_none());
        assert!(out.contains("would write 20 bytes"));
        assert!(out.ends_with(&hex_bytes(&encode(&[rule(0x003A, 0x001D)]))));
    }

    #[tokio::test]
    async fn test_disable_writes_zero_target() {
        let blob = TempBlob::new();

        run(cli(&blob, &["disable", "Left Win"]), AppConfig::default(), idle_power())
            .await
            .unwrap();

        assert_eq!(blob.read().unwrap(), encode(&[rule(0xE05B, 0x0000)]));
    }

    #[tokio::test]
    async fn test_disable_null_scancode_is_rejected() {
        let blob = TempBlob::new();

        let result = run(cli(&blob, &["disable", "0x0000"]), AppConfig::default(), idle_power()).await;

        assert!(result.is_err());
        assert!(blob.read().is_none());
    }

    #[tokio::test]
    async fn test_remove_drops_rule_and_keeps_others() {
        // Arrange
        let blob = TempBlob::new();
        blob.seed(&encode(&[rule(0x003A, 0x001D), rule(0xE05B, 0x0000)]));

        // Act
        run(cli(&blob, &["remove", "Caps Lock"]), AppConfig::default(), idle_power())
            .await
            .unwrap();

        // Assert
        assert_eq!(blob.read().unwrap(), encode(&[rule(0xE05B, 0x0000)]));
    }

    #[tokio::test]
    async fn test_remove_unmapped_key_is_an_error() {
        let blob = TempBlob::new();
        blob.seed(&encode(&[]));

        let result = run(cli(&blob, &["remove", "Caps Lock"]), AppConfig::default(), idle_power()).await;

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Caps Lock is not remapped"), "got {err}");
    }

    // ── reset ─────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_reset_requires_confirmation() {
        let blob = TempBlob::new();
        blob.seed(&encode(&[rule(0x003A, 0x001D)]));

        let result = run(cli(&blob, &["reset"]), AppConfig::default(), idle_power()).await;

        assert!(result.is_err());
        assert!(blob.read().is_some());
    }

    #[tokio::test]
    async fn test_reset_deletes_value() {
        let blob = TempBlob::new();
        blob.seed(&encode(&[rule(0x003A, 0x001D)]));

        let out = run(cli(&blob, &["reset", "--yes"]), AppConfig::default(), idle_power())
            .await
            .unwrap();

        assert!(blob.read().is_none());
        assert!(out.ends_with(REBOOT_NOTICE));
    }

    #[tokio::test]
    async fn test_reset_without_value_needs_no_reboot() {
        let blob = TempBlob::new();

        let out = run(cli(&blob, &["reset", "--yes"]), AppConfig::default(), idle_power())
            .await
            .unwrap();

        assert!(out.starts_with("Nothing to reset"));
        assert!(!out.contains(REBOOT_NOTICE));
    }

    #[test]
    fn test_reset_deletes_value_that_cannot_be_read() {
        // Arrange
        let store = MemoryStore::with_blob(vec![0xAB; 6]);
        store.make_unreadable(true);
        let opts = RunOptions {
            dry_run: false,
            reboot: false,
            notify_after_write: true,
        };
        let mut power = MockSystemPower::new();
        power.expect_reboot().never();

        // Act
        let out = reset(Box::new(store.clone()), opts, &power).unwrap();

        // Assert
        assert_eq!(store.snapshot(), None);
        assert!(out.starts_with("Deleted memory"));
        assert!(out.ends_with(REBOOT_NOTICE));
    }

    // ── reboot ────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_reboot_flag_reboots_when_elevated() {
        // Arrange
        let blob = TempBlob::new();
        let mut power = MockSystemPower::new();
        power.expect_is_elevated().return_const(true);
        power.expect_reboot().times(1).returning(|| Ok(()));

        // Act
        let out = run(
            cli(&blob, &["--reboot", "add", "Caps Lock", "Left Ctrl"]),
            AppConfig::default(),
            Arc::new(power),
        )
        .await
        .unwrap();

        // Assert
        assert!(out.ends_with("Rebooting now."));
    }

    #[tokio::test]
    async fn test_reboot_flag_without_elevation_keeps_saved_remaps() {
        // Arrange
        let blob = TempBlob::new();
        let mut power = MockSystemPower::new();
        power.expect_is_elevated().return_const(false);
        power.expect_reboot().never();

        // Act
        let result = run(
            cli(&blob, &["--reboot", "add", "Caps Lock", "Left Ctrl"]),
            AppConfig::default(),
            Arc::new(power),
        )
        .await;

        // Assert
        assert!(result.is_err());
        assert_eq!(blob.read().unwrap(), encode(&[rule(0x003A, 0x001D)]));
    }

    // ── keys / config ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_keys_lists_table_without_store() {
        let cli = Cli::parse_from(["keyremap", "keys"]);
        let out = run(cli, AppConfig::default(), idle_power()).await.unwrap();
        assert!(out.lines().any(|l| l == "0x003A  Caps Lock"));
        assert!(out.lines().any(|l| l == "0xE01D  Right Ctrl"));
    }

    #[tokio::test]
    async fn test_config_write_saves_to_explicit_path() {
        // Arrange
        let blob = TempBlob::new();
        let path = blob.dir.join("config.toml");
        let cli = Cli::parse_from([
            "keyremap",
            "--config",
            path.to_str().unwrap(),
            "config",
            "--write",
        ]);

        // Act
        let out = run(cli, AppConfig::default(), idle_power()).await.unwrap();

        // Assert
        assert!(out.contains("Scancode Map"));
        let saved = crate::infrastructure::storage::config::load_config_from(&path).unwrap();
        assert_eq!(saved, AppConfig::default());
    }
}
