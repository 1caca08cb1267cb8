use crate::error::HarvestError;
use std::io::ErrorKind;
use std::path::Path;

/// Reads the list of page URLs from a text file.
///
/// A missing file is reported as [`HarvestError::NotFound`]; there is nothing
/// to process without it.
pub fn read_urls<P: AsRef<Path>>(path: P) -> Result<Vec<String>, HarvestError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HarvestError::NotFound {
            path: path.to_path_buf(),
        },
        _ => HarvestError::Input {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let urls = parse_url_list(&contents);
    ::log::info!("Loaded {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// Splits text into trimmed, non-empty lines, skipping `#` comments
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.to_string())
        .collect()
}
