use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_DATA_DIR: &str = "./planly-data";
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads `PLANLY_DATA_DIR` and `PLANLY_ADDR`, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let data_dir = var("PLANLY_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        let addr = var("PLANLY_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr
            .parse()
            .with_context(|| format!("PLANLY_ADDR is not a socket address: {addr}"))?;

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            bind_addr,
        })
    }
}
