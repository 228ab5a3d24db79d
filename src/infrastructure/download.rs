// SPDX-License-Identifier: MPL-2.0
//! Filesystem downloader: copies a local image source into a target folder.

use crate::application::port::{DownloadRequest, Downloader};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Saves image sources by copying them from disk.
#[derive(Debug, Clone)]
pub struct FsDownloader {
    asset_root: PathBuf,
    target_dir: PathBuf,
}

impl FsDownloader {
    /// Relative sources are resolved against `asset_root`; files are written
    /// into `target_dir`, which is created on first use.
    #[must_use]
    pub fn new(asset_root: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: asset_root.into(),
            target_dir: target_dir.into(),
        }
    }

    #[must_use]
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    fn resolve(&self, source: &str) -> Result<PathBuf> {
        if source.contains("://") {
            return Err(Error::Download(format!(
                "remote sources are not supported: {source}"
            )));
        }
        let path = Path::new(source);
        Ok(if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.asset_root.join(path)
        })
    }
}

impl Downloader for FsDownloader {
    fn download(&self, request: &DownloadRequest) -> Result<PathBuf> {
        let from = self.resolve(&request.source)?;
        std::fs::create_dir_all(&self.target_dir)?;
        let to = self.target_dir.join(&request.file_name);
        std::fs::copy(&from, &to).map_err(|err| {
            Error::Download(format!("copying {} failed: {err}", from.display()))
        })?;
        tracing::info!(from = %from.display(), to = %to.display(), "image saved");
        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_relative_source_into_target() {
        let assets = tempdir().expect("temp dir");
        let target = tempdir().expect("temp dir");
        std::fs::create_dir_all(assets.path().join("large")).expect("mkdir");
        std::fs::write(assets.path().join("large/a.jpg"), b"jpeg").expect("write");
        let downloader = FsDownloader::new(assets.path(), target.path().join("saved"));
        let request = DownloadRequest::new("large/a.jpg", "localhost").expect("valid source");

        let saved = downloader.download(&request).expect("copy succeeds");

        assert_eq!(saved, target.path().join("saved/localhost_a.jpg"));
        assert_eq!(std::fs::read(saved).expect("read"), b"jpeg");
    }

    #[test]
    fn missing_source_is_download_error() {
        let target = tempdir().expect("temp dir");
        let downloader = FsDownloader::new(target.path(), target.path());
        let request = DownloadRequest::new("nope.jpg", "").expect("valid source");

        let err = downloader.download(&request).unwrap_err();

        assert!(matches!(err, Error::Download(_)));
    }

    #[test]
    fn remote_source_is_rejected() {
        let target = tempdir().expect("temp dir");
        let downloader = FsDownloader::new(target.path(), target.path());
        let request =
            DownloadRequest::new("https://example.org/b.png", "example.org").expect("valid");

        assert!(matches!(
            downloader.download(&request),
            Err(Error::Download(_))
        ));
    }
}
