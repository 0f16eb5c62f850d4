//! Server configuration from the process environment
//!
//! `.env` is loaded first (dotenvy), then:
//! - `DATABASE_URL` (required): Postgres connection string
//! - `PROMPTBASE_ADDR` (optional): bind address, defaults to `0.0.0.0:8000`

use anyhow::{Context, Result};

const DEFAULT_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .context("DATABASE_URL is not set")?;

        let addr = lookup("PROMPTBASE_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());

        Ok(Self { database_url, addr })
    }
}
