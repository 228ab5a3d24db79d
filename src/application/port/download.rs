// SPDX-License-Identifier: MPL-2.0
//! Download port definition.
//!
//! The download control saves the source of the currently loaded full-size
//! image. The gallery builds a [`DownloadRequest`]; a [`Downloader`] adapter
//! performs the actual transfer.

use crate::error::Result;
use std::path::PathBuf;

/// A request to save one image source under a given file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Source of the full-size surface, as displayed.
    pub source: String,
    /// Name of the saved file.
    pub file_name: String,
}

impl DownloadRequest {
    /// Builds a request for `source`, naming the file after `host` and the
    /// trailing path segment of the source.
    ///
    /// Returns `None` when the source has no usable trailing segment.
    #[must_use]
    pub fn new(source: &str, host: &str) -> Option<Self> {
        let file_name = file_name_for(host, source)?;
        Some(Self {
            source: source.to_string(),
            file_name,
        })
    }
}

/// Trailing path segment of a path or URL, without query or fragment.
#[must_use]
pub fn trailing_segment(source: &str) -> Option<&str> {
    let without_suffix = source
        .split(['?', '#'])
        .next()
        .unwrap_or(source);
    without_suffix
        .rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
}

/// File name used to save `source`: `"{host}_{segment}"`, or just the segment
/// when the host is empty.
#[must_use]
pub fn file_name_for(host: &str, source: &str) -> Option<String> {
    let segment = trailing_segment(source)?;
    let host = host.trim();
    if host.is_empty() {
        Some(segment.to_string())
    } else {
        Some(format!("{host}_{segment}"))
    }
}

/// Port for saving image sources.
pub trait Downloader {
    /// Saves the requested source and returns where it was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or the target written.
    fn download(&self, request: &DownloadRequest) -> Result<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_combines_host_and_trailing_segment() {
        assert_eq!(
            file_name_for("example.org", "assets/images/large/sunset.jpg").as_deref(),
            Some("example.org_sunset.jpg")
        );
    }

    #[test]
    fn file_name_without_host_is_segment() {
        assert_eq!(file_name_for("", "large/a.png").as_deref(), Some("a.png"));
    }

    #[test]
    fn trailing_segment_ignores_query_and_fragment() {
        assert_eq!(
            trailing_segment("https://cdn.example.org/img/b.webp?w=800#top"),
            Some("b.webp")
        );
    }

    #[test]
    fn trailing_segment_skips_trailing_separator() {
        assert_eq!(trailing_segment("photos/c.jpg/"), Some("c.jpg"));
        assert_eq!(trailing_segment("C:\\photos\\d.jpg"), Some("d.jpg"));
    }

    #[test]
    fn empty_source_has_no_request() {
        assert_eq!(DownloadRequest::new("", "localhost"), None);
        assert_eq!(DownloadRequest::new("///", "localhost"), None);
    }

    #[test]
    fn request_keeps_source_verbatim() {
        let request = DownloadRequest::new("large/a.jpg", "localhost").expect("valid source");
        assert_eq!(request.source, "large/a.jpg");
        assert_eq!(request.file_name, "localhost_a.jpg");
    }
}
