use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::config::CachingPolicy;
use crate::paper::{PaperCatalog, PaperSize};
use crate::paths::PathResolver;

pub const SUPPORTED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "file"];

#[derive(Error, Debug, PartialEq)]
pub enum ConvertError {
    #[error("{0} is neither a filename nor an URL with a supported scheme (http,https,ftp,file)")]
    InvalidSource(String),
    #[error("{0} is not a valid paper format")]
    InvalidPaperFormat(String),
    #[error("{value} is not a valid number for --{option}")]
    InvalidNumber { option: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Resolves `--source` into a canonical URL string.
///
/// An argument naming an existing file (after `~` expansion) becomes a
/// `file:` URL for its absolute path. Anything else must already be a URL
/// whose scheme is one of [`SUPPORTED_SCHEMES`], and is kept as written.
pub fn parse_source(raw: &str, resolver: &dyn PathResolver) -> Result<String> {
    let invalid = || ConvertError::InvalidSource(raw.to_string());
    let path = resolver.expand_tilde(raw);

    if resolver.exists(&path) {
        log::debug!("source {raw} is an existing path {}", path.display());
        let url = file_url(&path, resolver.is_dir(&path)).ok_or_else(invalid)?;
        return Ok(url.into());
    }

    log::debug!("source {raw} is not a local path, parsing as URL");
    let url = Url::parse(raw).map_err(|_| invalid())?;
    let supported = SUPPORTED_SCHEMES
        .iter()
        .any(|scheme| url.scheme().eq_ignore_ascii_case(scheme));
    if !supported {
        return Err(invalid());
    }

    Ok(raw.to_string())
}

fn file_url(path: &Path, is_dir: bool) -> Option<Url> {
    let absolute = std::path::absolute(path).ok()?;
    if is_dir {
        Url::from_directory_path(absolute).ok()
    } else {
        Url::from_file_path(absolute).ok()
    }
}

/// Expands `~` only. Whether the file can be written is the renderer's problem.
pub fn parse_output_path(raw: &str, resolver: &dyn PathResolver) -> PathBuf {
    resolver.expand_tilde(raw)
}

pub fn parse_paper_size(raw: &str, catalog: &dyn PaperCatalog) -> Result<PaperSize> {
    let size = catalog.size_for_paper_name(raw);
    if size.is_empty() {
        return Err(ConvertError::InvalidPaperFormat(raw.to_string()));
    }
    Ok(size)
}

pub fn parse_float(option: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConvertError::InvalidNumber {
            option,
            value: raw.to_string(),
        })
}

/// Only the exact literal `yes` is true. `Yes`, `true`, `1` and `no` are all false.
pub fn parse_yes(raw: &str) -> bool {
    raw == "yes"
}

#[allow(clippy::if_same_then_else)]
pub fn parse_caching(raw: &str) -> CachingPolicy {
    // TODO: `--caching no` should select CachingPolicy::ReloadIgnoringCache once
    // the renderer honours it; both branches resolve to the protocol policy today.
    if raw == "no" {
        CachingPolicy::UseProtocolCachePolicy
    } else {
        CachingPolicy::UseProtocolCachePolicy
    }
}
