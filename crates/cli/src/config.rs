use std::path::PathBuf;

use anyhow::{Result, bail};

/// Environment fallback for the script path.
pub const SCRIPT_ENV: &str = "PARCELFLOW_SCRIPT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub script_path: PathBuf,
}

impl CliConfig {
    /// First positional argument, else `PARCELFLOW_SCRIPT`.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        Self::resolve(args, std::env::var(SCRIPT_ENV).ok())
    }

    fn resolve(args: impl IntoIterator<Item = String>, env_path: Option<String>) -> Result<Self> {
        let script_path = match args.into_iter().next().or(env_path) {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => bail!("usage: parcelflow-cli <script.json> (or set {SCRIPT_ENV})"),
        };
        Ok(Self { script_path })
    }
}
