/*
 *  config.rs
 *
 *  AirScope - the airwaves, at a glance
 *  (c) 2024-26 Stuart Hunter
 *
 *  Layered configuration: defaults, YAML file, CLI overrides
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>, // e.g., "info" | "debug"
    /// How many refresh cycles the demo loop renders.
    pub frames: Option<u32>,
    /// Synthetic detections fed to the plotter per frame.
    pub signals_per_frame: Option<u32>,
    /// Pause between frames.
    pub frame_interval_ms: Option<u64>,
    /// Where to drop a PPM of the final frame.
    pub snapshot: Option<PathBuf>,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "airscope", about = "Wi-Fi spectrum analyzer display", disable_help_flag = false)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub frames: Option<u32>,
    #[arg(long)]
    pub signals_per_frame: Option<u32>,
    #[arg(long)]
    pub frame_interval_ms: Option<u64>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub snapshot: Option<PathBuf>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<Config, ConfigError> {
    let cli = Cli::parse();

    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, &cli);

    // 4) Validate
    validate(&cfg)?;

    if cli.dump_config {
        // Pretty YAML of effective config (nice for debugging)
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/airscope/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/airscope/config.yaml");
        if p.exists() {
            return Some(p);
        }
        let p = home.join(".config/airscope.yaml");
        if p.exists() {
            return Some(p);
        }
    }
    // project local
    for candidate in &["airscope.yaml", "config.yaml", "config/airscope.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() {
            return Some(p);
        }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some()         { dst.log_level = src.log_level; }
    if src.frames.is_some()            { dst.frames = src.frames; }
    if src.signals_per_frame.is_some() { dst.signals_per_frame = src.signals_per_frame; }
    if src.frame_interval_ms.is_some() { dst.frame_interval_ms = src.frame_interval_ms; }
    if src.snapshot.is_some()          { dst.snapshot = src.snapshot; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some()         { cfg.log_level = cli.log_level.clone(); }
    if cli.frames.is_some()            { cfg.frames = cli.frames; }
    if cli.signals_per_frame.is_some() { cfg.signals_per_frame = cli.signals_per_frame; }
    if cli.frame_interval_ms.is_some() { cfg.frame_interval_ms = cli.frame_interval_ms; }
    if cli.snapshot.is_some()          { cfg.snapshot = cli.snapshot.clone(); }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(level) = cfg.log_level.as_deref() {
        match level {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "log_level must be error|warn|info|debug|trace, got '{level}'"
                )));
            }
        }
    }
    if cfg.frames == Some(0) {
        return Err(ConfigError::Validation("frames must be > 0".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefers_source_options() {
        let mut dst = Config { frames: Some(3), ..Config::default() };
        merge(
            &mut dst,
            Config { log_level: Some("debug".into()), ..Config::default() },
        );
        assert_eq!(dst.frames, Some(3));
        assert_eq!(dst.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn validate_rejects_bad_level_and_zero_frames() {
        let cfg = Config { log_level: Some("loud".into()), ..Config::default() };
        assert!(validate(&cfg).is_err());
        let cfg = Config { frames: Some(0), ..Config::default() };
        assert!(validate(&cfg).is_err());
        assert!(validate(&Config::default()).is_ok());
    }
}
