// SPDX-License-Identifier: MPL-2.0
//! Startup assembly: turns the CLI source argument into an attached gallery.
//!
//! A directory is scanned and its images are placed in the container, then
//! the gallery adopts them (discovery mode). A manifest lists the images
//! explicitly and the gallery creates its own elements. The `[gallery]`
//! section of `settings.toml` sits under whatever the source sets.

use crate::application::gallery::GalleryWidget;
use crate::config::{Config, DEFAULT_CONTAINER_ID};
use crate::directory_scanner::ImageList;
use crate::domain::gallery::{GalleryConfig, GalleryOverrides, ImageEntry};
use crate::error::Result;
use crate::infrastructure::{FsDownloader, PinnedScroll, SurfaceTree};
use crate::manifest::Manifest;
use crate::ui::gallery;
use std::path::{Path, PathBuf};

/// What the gallery is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Images found in a directory.
    Directory(PathBuf),
    /// A TOML gallery manifest.
    Manifest(PathBuf),
    /// Nothing given: an empty gallery.
    Empty,
}

impl Source {
    /// Classifies a CLI argument. Anything that is not a directory is read
    /// as a manifest.
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Source::Empty,
            Some(arg) => {
                let path = PathBuf::from(arg);
                if path.is_dir() {
                    Source::Directory(path)
                } else {
                    Source::Manifest(path)
                }
            }
        }
    }
}

/// Everything the app needs to start.
pub struct Launch {
    pub gallery: gallery::State,
    pub downloader: FsDownloader,
}

impl Launch {
    /// An empty gallery with default options, used when `prepare` fails.
    #[must_use]
    pub fn empty(download_dir: PathBuf, thumbnail_size: f32) -> Self {
        let mut tree = SurfaceTree::new("");
        tree.insert_container(DEFAULT_CONTAINER_ID);
        let mut widget =
            GalleryWidget::new(GalleryConfig::default(), Vec::new(), PinnedScroll::default());
        if let Err(err) = widget.attach(&mut tree, DEFAULT_CONTAINER_ID) {
            tracing::warn!(%err, "empty gallery could not attach");
        }
        Self {
            downloader: FsDownloader::new(".", download_dir),
            gallery: gallery::State::new(widget, tree, ".", thumbnail_size),
        }
    }
}

/// Builds the surface tree and attaches the gallery for `source`.
///
/// # Errors
///
/// Returns an error if the directory cannot be scanned, the manifest cannot
/// be read or validated, or the gallery cannot attach to its container.
pub fn prepare(source: &Source, config: &Config, download_dir: PathBuf) -> Result<Launch> {
    let base = config.gallery_overrides()?;

    let (asset_root, container_id, overrides, images, mut tree) = match source {
        Source::Directory(dir) => {
            let list = ImageList::scan_directory(dir, config.display.sort_order)?;
            let mut tree = SurfaceTree::new(origin_of(dir));
            let container = tree.insert_container(DEFAULT_CONTAINER_ID);
            list.populate(&mut tree, container);
            let discovery = GalleryOverrides {
                create_images: Some(false),
                ..GalleryOverrides::default()
            };
            (
                dir.clone(),
                DEFAULT_CONTAINER_ID.to_string(),
                base.layered(discovery),
                Vec::new(),
                tree,
            )
        }
        Source::Manifest(path) => {
            let manifest = Manifest::load(path)?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            let mut tree = SurfaceTree::new(origin_of(&root));
            tree.insert_container(manifest.container.as_str());
            (
                root,
                manifest.container.clone(),
                base.layered(manifest.overrides()?),
                manifest.entries(),
                tree,
            )
        }
        Source::Empty => {
            let mut tree = SurfaceTree::new("");
            tree.insert_container(DEFAULT_CONTAINER_ID);
            (
                PathBuf::from("."),
                DEFAULT_CONTAINER_ID.to_string(),
                base,
                Vec::<ImageEntry>::new(),
                tree,
            )
        }
    };

    let mut widget = GalleryWidget::with_overrides(&overrides, images, PinnedScroll::default());
    widget.attach(&mut tree, &container_id)?;

    tracing::debug!(
        asset_root = %asset_root.display(),
        images = widget.catalog().len(),
        "gallery prepared"
    );

    Ok(Launch {
        downloader: FsDownloader::new(asset_root.clone(), download_dir),
        gallery: gallery::State::new(
            widget,
            tree,
            asset_root,
            config.display.thumbnail_size(),
        ),
    })
}

/// Origin of the surface tree: the name of the folder the images live in.
fn origin_of(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .as_deref()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
