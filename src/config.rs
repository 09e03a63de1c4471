//! Credential loading for embedding applications.
//!
//! Reads `~/.config/pdfbucket/config.toml`, then applies environment
//! overrides (`PDFBUCKET_API_KEY`, `PDFBUCKET_API_SECRET`,
//! `PDFBUCKET_API_HOST`). Storage and rotation of the secret remain the
//! application's concern; this module only locates and parses it.

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// API credentials as supplied by pdfbucket.io.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Opaque account identifier.
    pub api_key: String,
    /// Base64 text; doubles as the signing secret and, decoded, as the
    /// 256-bit encryption key.
    pub api_secret: String,
    /// Bare hostname, no scheme, e.g. `api.pdfbucket.io`.
    pub api_host: String,
}

/// Default config file location under the XDG config home.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pdfbucket")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

impl Credentials {
    /// Load from the default XDG config path, with environment overrides.
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        Self::load_from(&path)
    }

    /// Load from a TOML file, then apply environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let mut creds: Credentials =
            toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
        creds.apply_env_overrides();
        Ok(creds)
    }

    /// Build purely from `PDFBUCKET_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let mut creds = Credentials {
            api_key: String::new(),
            api_secret: String::new(),
            api_host: String::new(),
        };
        creds.apply_env_overrides();
        ensure!(!creds.api_key.is_empty(), "PDFBUCKET_API_KEY is not set");
        ensure!(
            !creds.api_secret.is_empty(),
            "PDFBUCKET_API_SECRET is not set"
        );
        ensure!(!creds.api_host.is_empty(), "PDFBUCKET_API_HOST is not set");
        Ok(creds)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("PDFBUCKET_API_KEY") {
            self.api_key = v;
        }
        if let Ok(v) = env::var("PDFBUCKET_API_SECRET") {
            self.api_secret = v;
        }
        if let Ok(v) = env::var("PDFBUCKET_API_HOST") {
            self.api_host = v;
        }
    }
}
