// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for filling a gallery container from disk.
//!
//! Scans a directory for supported image formats, sorts them according to the
//! configured sort order, and inserts them into a container as document
//! images so the gallery can adopt them in discovery mode.

use crate::application::port::{ElementSpec, SurfaceHost, SurfaceId, SurfaceRole};
use crate::config::SortOrder;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Image file extensions the frontend can decode.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Sorted list of image files found in one directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
}

impl ImageList {
    /// Scans `directory` (non-recursively) for supported images.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    pub fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<Self> {
        let mut image_files = Vec::new();

        for entry in std::fs::read_dir(directory)? {
            let path = entry?.path();
            if path.is_file() && is_supported_image(&path) {
                image_files.push(path);
            }
        }

        sort_image_files(&mut image_files, sort_order);
        tracing::debug!(
            directory = %directory.display(),
            images = image_files.len(),
            ?sort_order,
            "directory scanned"
        );

        Ok(Self { image_files })
    }

    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(PathBuf::as_path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.image_files.iter().map(PathBuf::as_path)
    }

    /// Inserts one document image per file into `container`, in list order.
    ///
    /// Each image's source is its path; its caption is derived from the file
    /// name.
    pub fn populate<H: SurfaceHost>(&self, host: &mut H, container: SurfaceId) -> Vec<SurfaceId> {
        self.iter()
            .map(|path| {
                let id = host.create(ElementSpec::image(
                    SurfaceRole::Image,
                    path.to_string_lossy(),
                    caption_from_path(path),
                ));
                host.append_child(container, id);
                id
            })
            .collect()
    }
}

/// Checks if a file has a supported image extension.
fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Human-readable caption from a file name: `summer_beach-02.jpg` becomes
/// `summer beach 02`.
pub fn caption_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default()
}

fn file_time(path: &Path, created: bool) -> SystemTime {
    path.metadata()
        .and_then(|m| if created { m.created() } else { m.modified() })
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

fn sort_image_files(image_files: &mut [PathBuf], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        SortOrder::ModifiedDate => {
            image_files.sort_by_key(|path| file_time(path, false));
        }
        SortOrder::CreatedDate => {
            image_files.sort_by_key(|path| file_time(path, true));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::SurfaceTree;
    use std::fs;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to write test file");
        path
    }

    #[test]
    fn scan_keeps_only_images_sorted_by_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "b.png");
        create_test_file(temp_dir.path(), "a.JPG");
        create_test_file(temp_dir.path(), "notes.txt");
        create_test_file(temp_dir.path(), "clip.mp4");
        fs::create_dir(temp_dir.path().join("sub.png")).expect("failed to create dir");

        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("scan succeeds");

        let names: Vec<_> = list
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png"]);
    }

    #[test]
    fn scan_of_missing_directory_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result =
            ImageList::scan_directory(&temp_dir.path().join("missing"), SortOrder::Alphabetical);
        assert!(result.is_err());
    }

    #[test]
    fn empty_directory_gives_empty_list() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::ModifiedDate)
            .expect("scan succeeds");
        assert!(list.is_empty());
        assert_eq!(list.get(0), None);
    }

    #[test]
    fn caption_replaces_separators() {
        assert_eq!(
            caption_from_path(Path::new("/x/summer_beach-02.jpg")),
            "summer beach 02"
        );
    }

    #[test]
    fn populate_inserts_document_images_in_order() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let first = create_test_file(temp_dir.path(), "first.png");
        create_test_file(temp_dir.path(), "second.png");
        let list = ImageList::scan_directory(temp_dir.path(), SortOrder::Alphabetical)
            .expect("scan succeeds");
        let mut tree = SurfaceTree::new("");
        let container = tree.insert_container("gallery");

        let ids = list.populate(&mut tree, container);

        assert_eq!(tree.children(container), ids.as_slice());
        let node = tree.node(ids[0]).expect("image exists");
        assert_eq!(node.role, SurfaceRole::Image);
        assert_eq!(node.source.as_deref(), Some(first.to_string_lossy().as_ref()));
        assert_eq!(node.caption.as_deref(), Some("first"));
    }
}
