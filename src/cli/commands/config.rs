use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = &cli.command
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", config_path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK ----
        if *check {
            let content = read_existing(config_path)?;
            let missing = missing_keys(&content)?;
            if missing.is_empty() {
                success("Configuration is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
                info("Run `quakemap config --migrate` to add them with default values.");
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            read_existing(config_path)?;
            let added = migrate_config_file(config_path)?;
            if added.is_empty() {
                info("Configuration already up to date.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(config_path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn read_existing(path: &Path) -> AppResult<String> {
    if !path.exists() {
        return Err(AppError::Config(format!(
            "{} not found (run `quakemap init` first)",
            path.display()
        )));
    }
    Ok(fs::read_to_string(path)?)
}

fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    // Default editor based on the platform
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
            Ok(())
        }
        _ => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{default_editor}'"
                    ));
                    Ok(())
                }
                _ => Err(AppError::Config(format!(
                    "failed to edit {} with '{editor_to_use}' or fallback '{default_editor}'",
                    path.display()
                ))),
            }
        }
    }
}
