use crate::error::HarvestError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Text file listing one page URL per line
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory the downloaded images are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Total timeout for each request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout for each request, in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whether to write a `<stem>.txt` metadata file next to each image
    #[serde(default)]
    pub write_metadata: bool,
}

/// Settings the page fetcher needs
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
            write_metadata: false,
        }
    }
}

impl HarvestConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, HarvestError> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            HarvestError::Config(format!("cannot open {}: {}", path.display(), e))
        })?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| HarvestError::Config(format!("cannot read {}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, HarvestError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HarvestError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<(), HarvestError> {
        if self.timeout_secs == 0 {
            return Err(HarvestError::Config("timeout_secs must be positive".into()));
        }
        if self.connect_timeout_secs == 0 {
            return Err(HarvestError::Config(
                "connect_timeout_secs must be positive".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(HarvestError::Config("user_agent must not be empty".into()));
        }
        Ok(())
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("urls.txt")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("og-harvest/{}", env!("CARGO_PKG_VERSION"))
}
