use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Which wizard the terminal front end runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Resume,
    JobPosting,
}

impl FromStr for FormKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resume" => Ok(FormKind::Resume),
            "job-posting" | "job_posting" | "jobposting" => Ok(FormKind::JobPosting),
            other => Err(anyhow!(
                "unknown form '{other}' (expected 'resume' or 'job-posting')"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file backing the on-device key-value store.
    pub store_path: PathBuf,
    pub form: FormKind,
    pub rust_log: String,
}

pub const DEFAULT_STORE_PATH: &str = "wizard-store.json";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let form = match lookup("WIZARD_FORM") {
            Some(raw) => raw
                .parse::<FormKind>()
                .context("WIZARD_FORM must be 'resume' or 'job-posting'")?,
            None => FormKind::Resume,
        };

        Ok(Config {
            store_path: lookup("WIZARD_STORE_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
            form,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
