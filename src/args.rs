use clap::Parser;
use og_harvest::{Harvest, HarvestError};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "og-harvest")]
#[command(about = "Downloads the OpenGraph image of every page listed in a file")]
#[command(version)]
pub struct Args {
    /// File with one page URL per line [default: urls.txt]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory to write images into [default: dist]
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds [default: 30]
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// User-Agent header to send
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Also write a <name>.txt file with each page's URL, title and description
    #[arg(long)]
    pub metadata: bool,

    /// JSON configuration file; flags given on the command line override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the run summary as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Args {
    /// Build the harvest from the config file (if any) plus explicit flags
    pub fn into_harvest(&self) -> Result<Harvest, HarvestError> {
        let mut harvest = match &self.config {
            Some(path) => Harvest::new().with_config_file(path)?,
            None => Harvest::new(),
        };

        if let Some(input) = &self.input {
            harvest = harvest.with_input(input);
        }
        if let Some(output_dir) = &self.output_dir {
            harvest = harvest.with_output_dir(output_dir);
        }
        if let Some(timeout) = self.timeout {
            harvest = harvest.with_timeout(timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            harvest = harvest.with_user_agent(user_agent);
        }
        if self.metadata {
            harvest = harvest.with_metadata(true);
        }

        Ok(harvest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["og-harvest"]).unwrap();
        let harvest = args.into_harvest().unwrap();
        assert_eq!(harvest.config().input, PathBuf::from("urls.txt"));
        assert_eq!(harvest.config().output_dir, PathBuf::from("dist"));
        assert!(!harvest.config().write_metadata);
        assert!(args.report.is_none());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("harvest.json");
        std::fs::write(&config, r#"{"output_dir": "from-file", "timeout_secs": 9}"#).unwrap();

        let args = Args::try_parse_from([
            "og-harvest",
            "--config",
            config.to_str().unwrap(),
            "-o",
            "from-flag",
            "--metadata",
        ])
        .unwrap();
        let harvest = args.into_harvest().unwrap();
        assert_eq!(harvest.config().output_dir, PathBuf::from("from-flag"));
        assert_eq!(harvest.config().timeout_secs, 9);
        assert!(harvest.config().write_metadata);
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        assert!(Args::try_parse_from(["og-harvest", "--timeout", "soon"]).is_err());
    }
}
