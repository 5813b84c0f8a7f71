//! Source fetching: local files and URLs
//!
//! The core library only consumes bytes; everything about where those bytes
//! come from lives here. A source string is treated as a URL when it looks
//! like one, otherwise as a file path with `~` expansion.

use crate::error::{Error, Result};
use kompat_core::DEFAULT_FILE_NAME;
use std::path::PathBuf;
use tracing::debug;

/// Fetch raw document bytes from every source, sequentially and in argument
/// order, pairing each with its source name for error reporting.
pub async fn fetch_all(sources: &[String]) -> Result<Vec<(String, Vec<u8>)>> {
    let mut fetched = Vec::with_capacity(sources.len());
    for source in sources {
        let bytes = fetch(source).await?;
        fetched.push((source.clone(), bytes));
    }
    Ok(fetched)
}

/// Fetch one source
pub async fn fetch(source: &str) -> Result<Vec<u8>> {
    match as_url(source) {
        Some(url) => fetch_url(source, url).await,
        None => read_file(source),
    }
}

/// Whether a source will be fetched over the network
pub fn is_remote(source: &str) -> bool {
    as_url(source).is_some()
}

/// A source is treated as a URL when it mentions a scheme or a common
/// top-level domain; scheme-less URLs get `https://` prefixed.
fn as_url(source: &str) -> Option<String> {
    if ![".com", ".net", "http"]
        .iter()
        .any(|marker| source.contains(marker))
    {
        return None;
    }
    let candidate = if source.starts_with("http") {
        source.to_string()
    } else {
        format!("https://{source}")
    };
    url::Url::parse(&candidate).ok().map(|u| u.to_string())
}

/// GitHub repository URLs without an explicit `.yaml` suffix are rewritten
/// to the raw default document on the main branch.
fn rewrite_github(url: String) -> String {
    if url.ends_with(".yaml") {
        return url;
    }
    if url.contains("github.com") {
        let url = url.trim_end_matches('/').to_string();
        return format!("{url}/main/{DEFAULT_FILE_NAME}").replacen(
            "github.com",
            "raw.githubusercontent.com",
            1,
        );
    }
    url
}

async fn fetch_url(source: &str, url: String) -> Result<Vec<u8>> {
    let url = rewrite_github(url);
    debug!(%url, "fetching remote document");
    let response = reqwest::get(&url)
        .await
        .map_err(|e| Error::fetch(source, e.to_string()))?
        .error_for_status()
        .map_err(|e| Error::fetch(source, e.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::fetch(source, e.to_string()))?;
    Ok(bytes.to_vec())
}

fn read_file(source: &str) -> Result<Vec<u8>> {
    let path = expand_home(source);
    if !path.exists() {
        return Err(Error::FileNotFound { path });
    }
    debug!(path = %path.display(), "reading local document");
    Ok(std::fs::read(&path)?)
}

/// `~` and `~/...` expand against the user's home directory
fn expand_home(source: &str) -> PathBuf {
    if source == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = source.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_local_paths_are_not_urls() {
        assert!(as_url("compatibility.yaml").is_none());
        assert!(as_url("./matrices/app.yaml").is_none());
        assert!(!is_remote("~/compatibility.yaml"));
    }

    #[test]
    fn test_scheme_less_urls_get_https() {
        let url = as_url("example.com/compatibility.yaml").unwrap();
        assert!(url.starts_with("https://example.com/"));
    }

    #[test]
    fn test_explicit_scheme_is_preserved() {
        let url = as_url("http://example.net/matrix.yaml").unwrap();
        assert!(url.starts_with("http://example.net/"));
        assert!(is_remote("http://example.net/matrix.yaml"));
    }

    #[test]
    fn test_github_repo_urls_point_at_raw_default_file() {
        let rewritten = rewrite_github("https://github.com/aws/karpenter".to_string());
        assert_eq!(
            rewritten,
            "https://raw.githubusercontent.com/aws/karpenter/main/compatibility.yaml"
        );
    }

    #[test]
    fn test_explicit_yaml_urls_are_untouched() {
        let url = "https://github.com/aws/karpenter/raw/main/custom.yaml".to_string();
        assert_eq!(rewrite_github(url.clone()), url);
    }

    #[test]
    fn test_read_file_missing_is_file_not_found() {
        let err = read_file("definitely-missing.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_read_file_returns_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "appName: test").unwrap();
        let bytes = read_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(bytes, b"appName: test");
    }

    #[test]
    fn test_expand_home_passthrough() {
        assert_eq!(expand_home("plain.yaml"), PathBuf::from("plain.yaml"));
    }
}
