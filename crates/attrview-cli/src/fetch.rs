//! Attributes document retrieval
//!
//! A [`DocumentSource`] yields the full document text in one piece. The HTTP
//! source performs a single GET; the file source reads a local path.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while retrieving the document
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP error! Status: {status}")]
    Status { status: u16 },

    /// Local file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that can produce the attributes document
pub trait DocumentSource {
    /// Human-readable location, for logs and titles
    fn location(&self) -> String;

    /// Retrieve the whole document
    fn fetch(&self) -> Result<String, FetchError>;
}

/// Document served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    /// Create a source with no request timeout
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        Self::with_timeout(url, None)
    }

    /// Create a source with an optional request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl DocumentSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String, FetchError> {
        debug!(url = %self.url, "fetching attributes document");
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

/// Document on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, FetchError> {
        debug!(path = %self.path.display(), "reading attributes document");
        fs::read_to_string(&self.path).map_err(|source| FetchError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Build a source from a location string: URLs go over HTTP, anything else
/// is treated as a file path.
pub fn source_for(
    location: &str,
    timeout: Option<Duration>,
) -> Result<Box<dyn DocumentSource>, FetchError> {
    if is_url(location) {
        Ok(Box::new(HttpSource::with_timeout(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SOURCE;

    #[test]
    fn test_is_url() {
        assert!(is_url(DEFAULT_SOURCE));
        assert!(is_url("http://localhost:8000/attrs.adoc"));
        assert!(!is_url("_attributes/common-attributes.adoc"));
        assert!(!is_url("/tmp/https.adoc"));
    }

    #[test]
    fn test_source_for_file() {
        let source = source_for("attrs.adoc", None).unwrap();
        assert_eq!(source.location(), "attrs.adoc");
    }

    #[test]
    fn test_source_for_url() {
        let source = source_for(DEFAULT_SOURCE, Some(Duration::from_secs(1))).unwrap();
        assert_eq!(source.location(), DEFAULT_SOURCE);
    }

    #[test]
    fn test_file_source_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attrs.adoc");
        fs::write(&path, ":foo: bar\n").unwrap();

        let content = FileSource::new(&path).fetch().unwrap();
        assert_eq!(content, ":foo: bar\n");
    }

    #[test]
    fn test_file_source_missing() {
        let err = FileSource::new("/definitely/not/here.adoc").fetch().unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! Status: 404");
    }

    #[test]
    #[ignore] // Requires network access
    fn test_fetch_default_source() {
        match HttpSource::new(DEFAULT_SOURCE).and_then(|s| s.fetch()) {
            Ok(text) => assert!(text.contains(":product-title:")),
            Err(e) => eprintln!("fetch skipped (network error): {}", e),
        }
    }
}
