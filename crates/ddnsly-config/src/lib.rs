//! Shared configuration for the ddnsly CLI and TUI.
//!
//! A TOML file provides UI defaults and the seed roster the registry is
//! populated with at startup. Seeding is startup input, not persistence:
//! mutations made through the UI are never written back. Both binaries
//! depend on this crate.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use ddnsly_core::{ClientDraft, ClientRegistry, Equipment};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("config file already exists at {path}")]
    AlreadyExists { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// UI defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Clients the roster is seeded with at startup.
    #[serde(default = "default_seeds", rename = "seed")]
    pub seeds: Vec<SeedClient>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            seeds: default_seeds(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// One seed entry — the same candidate shape the forms submit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedClient {
    pub name: String,
    pub ddns_link: String,
    pub equipment: Equipment,
}

/// The example roster the dashboard has always started with.
fn default_seeds() -> Vec<SeedClient> {
    vec![
        SeedClient {
            name: "Example Client 1".into(),
            ddns_link: "client1.ddns.net".into(),
            equipment: Equipment::Fortigate,
        },
        SeedClient {
            name: "Example Client 2".into(),
            ddns_link: "client2.ddns.net".into(),
            equipment: Equipment::Mikrotik,
        },
    ]
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "ddnsly", "ddnsly").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("ddnsly");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the configuration from a specific file plus the environment.
///
/// Layering: built-in defaults ← TOML file ← `DDNSLY_`-prefixed
/// environment variables.
pub fn load_config_at(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("DDNSLY_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load the configuration from the canonical path.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_at(&config_path())
}

/// Load config, returning the defaults if anything goes wrong.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to the given path.
pub fn save_config_at(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

/// Serialize config to TOML and write it to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_at(cfg, &config_path())
}

// ── Seeding ─────────────────────────────────────────────────────────

/// Build the startup roster by running every seed through the registry's
/// validated `add`. Invalid seeds are skipped with a warning — a typo in
/// the config file must not keep the dashboard from starting.
pub fn seed_registry(cfg: &Config) -> ClientRegistry {
    let mut registry = ClientRegistry::new();
    for seed in &cfg.seeds {
        let draft = ClientDraft::new(
            seed.name.clone(),
            seed.ddns_link.clone(),
            Some(seed.equipment),
        );
        if let Err(err) = registry.add(&draft) {
            warn!(name = %seed.name, error = %err, "skipping invalid seed client");
        }
    }
    registry
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_carries_the_two_example_seeds() {
        let cfg = Config::default();
        assert_eq!(cfg.seeds.len(), 2);
        assert_eq!(cfg.seeds[0].ddns_link, "client1.ddns.net");
        assert_eq!(cfg.seeds[1].equipment, Equipment::Mikrotik);
        assert_eq!(cfg.defaults.output, "table");
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.seeds.len(), cfg.seeds.len());
        assert_eq!(parsed.defaults.output, cfg.defaults.output);
    }

    #[test]
    fn load_config_at_reads_a_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[defaults]
output = "json"

[[seed]]
name = "Branch Office"
ddns_link = "branch.ddns.net"
equipment = "unifi"
"#,
        )
        .unwrap();

        let cfg = load_config_at(&path).unwrap();
        assert_eq!(cfg.defaults.output, "json");
        assert_eq!(cfg.seeds.len(), 1);
        assert_eq!(cfg.seeds[0].equipment, Equipment::Unifi);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config_at(Path::new("/nonexistent/ddnsly/config.toml")).unwrap();
        assert_eq!(cfg.seeds.len(), 2);
    }

    #[test]
    fn seed_registry_populates_in_order() {
        let registry = seed_registry(&Config::default());
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.clients()[0].name, "Example Client 1");
        assert_eq!(registry.clients()[1].name, "Example Client 2");
    }

    #[test]
    fn seed_registry_skips_invalid_entries() {
        let cfg = Config {
            defaults: Defaults::default(),
            seeds: vec![
                SeedClient {
                    name: String::new(),
                    ddns_link: "broken entry".into(),
                    equipment: Equipment::Unifi,
                },
                SeedClient {
                    name: "Good".into(),
                    ddns_link: "good.ddns.net".into(),
                    equipment: Equipment::Pfsense,
                },
            ],
        };
        let registry = seed_registry(&cfg);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.clients()[0].name, "Good");
    }
}
