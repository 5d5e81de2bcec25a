use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::search::ranker::ThresholdPolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `catalog.json`
    pub data_dir: PathBuf,
    /// Server bind address
    pub bind_addr: String,
    /// Optional JSON object of extra aliases, merged over the built-ins
    pub aliases_path: Option<PathBuf>,
    /// Similarity threshold policy for fuzzy matching
    pub threshold_policy: ThresholdPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            bind_addr: "127.0.0.1:8080".to_string(),
            aliases_path: None,
            threshold_policy: ThresholdPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("CATALOG_SEARCH_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(addr) = lookup("CATALOG_SEARCH_BIND_ADDR") {
            config.bind_addr = addr;
        }
        // Hosting platforms hand out a bare port
        if let Some(port) = lookup("PORT") {
            match port.parse::<u16>() {
                Ok(p) => config.bind_addr = format!("0.0.0.0:{p}"),
                Err(_) => tracing::warn!("Ignoring invalid PORT={port}"),
            }
        }
        if let Some(path) = lookup("CATALOG_SEARCH_ALIASES_PATH") {
            config.aliases_path = Some(PathBuf::from(path));
        }
        if let Some(val) = lookup("CATALOG_SEARCH_THRESHOLD_POLICY") {
            match ThresholdPolicy::parse(&val) {
                Some(policy) => config.threshold_policy = policy,
                None => tracing::warn!(
                    "Unknown CATALOG_SEARCH_THRESHOLD_POLICY={val}, keeping {:?}",
                    config.threshold_policy
                ),
            }
        }

        config
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join("catalog.json")
    }
}
