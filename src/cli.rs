// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the interactive TUI starts. Subcommands:
// - fetch -n COUNT [--json]: Fetch once and print to stdout
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --path: Show config file path

use crate::api::UserSource;
use crate::config::{Config, VERSION};
use crate::users::{details_text, DateStyle, RequestCount, UserRecord};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::Command;

/// Random Users - generate random user profiles in the terminal
#[derive(Parser, Debug)]
#[command(name = "randusers")]
#[command(version = VERSION)]
#[command(about = "Generate random user profiles and copy their details", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch users once and print them (no TUI)
    Fetch {
        /// Number of users to fetch (1-500)
        #[arg(short = 'n', long)]
        count: RequestCount,

        /// Print the raw records as JSON instead of detail blocks
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// fetch
// ─────────────────────────────────────────────────────────────────────────────

/// Fetch `count` users once and print them to stdout
pub async fn run_fetch(
    source: &dyn UserSource,
    count: RequestCount,
    json: bool,
    date_style: &DateStyle,
) -> Result<()> {
    let users = source
        .fetch(count)
        .await
        .with_context(|| format!("Could not fetch {} users", count))?;

    let mut out = std::io::stdout().lock();
    write_users(&mut out, &users, json, date_style)
}

/// Detail blocks separated by blank lines, or a pretty JSON array
pub fn write_users(
    out: &mut impl Write,
    users: &[UserRecord],
    json: bool,
    date_style: &DateStyle,
) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, users).context("Failed to encode users")?;
        writeln!(out)?;
        return Ok(());
    }

    for (i, user) in users.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", details_text(user, date_style))?;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, reset: bool, edit: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show()
    } else if reset {
        handle_config_reset()
    } else if edit {
        handle_config_edit()
    } else {
        // No flag provided, show help
        println!("Usage: randusers config [--show|--reset|--edit|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn require_config_path() -> Result<std::path::PathBuf> {
    Config::config_path().context("Could not determine config path")
}

fn handle_config_path() -> Result<()> {
    println!("{}", require_config_path()?.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    for warning in &config.warnings {
        println!("# warning: {}", warning);
    }
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    let path = require_config_path()?;
    if path.exists() {
        println!("# Source: {}", path.display());
    } else {
        println!("# Source: defaults (no config file)");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = require_config_path()?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Error creating directory {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Error writing config {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = require_config_path()?;

    if !path.exists() {
        Config::ensure_config_exists();
        println!("Created new config file: {}", path.display());
    }

    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor).arg(&path).status().with_context(|| {
        format!(
            "Failed to launch editor '{}' (set $EDITOR to your preferred editor)",
            editor
        )
    })?;

    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::fixtures;

    #[test]
    fn no_subcommand_starts_tui() {
        let cli = Cli::try_parse_from(["randusers"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn fetch_parses_count() {
        let cli = Cli::try_parse_from(["randusers", "fetch", "-n", "25", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Fetch { count, json }) => {
                assert_eq!(count.get(), 25);
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn fetch_rejects_out_of_range_counts() {
        for bad in ["0", "501", "ten", ""] {
            assert!(
                Cli::try_parse_from(["randusers", "fetch", "--count", bad]).is_err(),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn config_flags_parse() {
        let cli = Cli::try_parse_from(["randusers", "config", "--path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config { path: true, show: false, .. })
        ));
    }

    #[test]
    fn text_output_separates_blocks() {
        let mut out = Vec::new();
        write_users(&mut out, &fixtures::users(2), false, &DateStyle::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let blocks: Vec<&str> = text.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Name: Mr Liam Walker\n"));
        assert!(blocks[1].starts_with("Name: Ms Sofia Lehmann\n"));
        assert_eq!(blocks[1].lines().count(), 8);
    }

    #[test]
    fn json_output_keeps_api_field_names() {
        let mut out = Vec::new();
        write_users(&mut out, &fixtures::users(3), true, &DateStyle::default()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["nat"], "NZ");
        assert_eq!(records[2]["location"]["postcode"], "K7L 3N6");
    }
}
