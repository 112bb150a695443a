use std::path::Path;

use anyhow::{Context, Result};

/// One site per line; lines are trimmed and blanks dropped. No URL validation.
pub fn parse_sites(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).map(str::to_string).collect()
}

pub fn read_sites(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_sites(&text))
}
