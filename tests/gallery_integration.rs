// SPDX-License-Identifier: MPL-2.0
use iced_gallery::application::gallery::GalleryWidget;
use iced_gallery::application::port::{
    Downloader, ScrollOffset, SurfaceHost, SurfaceId, SurfaceRole,
};
use iced_gallery::config::SortOrder;
use iced_gallery::directory_scanner::ImageList;
use iced_gallery::domain::gallery::{GalleryConfig, ImageEntry};
use iced_gallery::domain::input::{Control, KeyPress};
use iced_gallery::infrastructure::{FsDownloader, PinnedScroll, SurfaceTree};
use iced_gallery::manifest::Manifest;
use std::fs;
use tempfile::tempdir;

const MANIFEST: &str = r#"
container = "holidays"

[settings]
gallery_title = "Holidays"
direct_download = true
wrap_around = false

[[images]]
reference = "beach.jpg"
caption = "The beach"

[[images]]
reference = "dunes.jpg"
caption = "The dunes"

[[images]]
reference = "harbour.jpg"
"#;

fn attached_from_manifest() -> (GalleryWidget<PinnedScroll>, SurfaceTree) {
    let manifest = Manifest::from_toml_str(MANIFEST).expect("valid manifest");
    let overrides = manifest.overrides().expect("valid settings");

    let mut tree = SurfaceTree::new("photos.example");
    tree.insert_container(manifest.container.as_str());

    let mut widget =
        GalleryWidget::with_overrides(&overrides, manifest.entries(), PinnedScroll::default());
    widget
        .attach(&mut tree, &manifest.container)
        .expect("container exists");
    (widget, tree)
}

fn attached_full_images(tree: &SurfaceTree, overlay: SurfaceId) -> usize {
    tree.children(overlay)
        .iter()
        .filter(|id| tree.node(**id).is_some_and(|n| n.role == SurfaceRole::FullImage))
        .count()
}

#[test]
fn manifest_gallery_builds_chrome_and_thumbnails() {
    let (widget, tree) = attached_from_manifest();

    let container = widget.container().expect("attached");
    let overlay = widget.overlay().expect("attached");
    assert!(!tree.is_displayed(overlay));
    assert_eq!(widget.thumbnails().len(), 3);
    assert!(widget.control(Control::Download).is_some());

    let first = tree.node(widget.thumbnails()[0]).expect("thumbnail node");
    assert_eq!(first.source.as_deref(), Some("assets/images/small/beach.jpg"));
    assert_eq!(first.parent, Some(container));
}

#[test]
fn browsing_clamps_and_loads_each_image_once() {
    let (mut widget, mut tree) = attached_from_manifest();
    let overlay = widget.overlay().expect("attached");

    widget.select_index(&mut tree, 1);
    assert!(tree.is_displayed(overlay));

    widget.handle_key(&mut tree, KeyPress::ArrowRight);
    widget.handle_key(&mut tree, KeyPress::ArrowRight);
    assert_eq!(widget.display().current_index(), 2);

    assert!(!widget.handle_key(&mut tree, KeyPress::Character('H')));
    assert_eq!(widget.display().current_index(), 2);
    widget.handle_key(&mut tree, KeyPress::Character('h'));
    widget.handle_key(&mut tree, KeyPress::ArrowLeft);
    assert_eq!(widget.display().current_index(), 0);

    widget.select_index(&mut tree, 1);
    assert_eq!(attached_full_images(&tree, overlay), 3);

    let visible: Vec<_> = tree
        .children(overlay)
        .iter()
        .filter_map(|id| tree.node(*id))
        .filter(|n| n.role == SurfaceRole::FullImage && n.visible)
        .collect();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].source.as_deref(), Some("assets/images/large/dunes.jpg"));

    widget.handle_key(&mut tree, KeyPress::Escape);
    assert!(!tree.is_displayed(overlay));
}

#[test]
fn download_copies_the_current_image() {
    let site = tempdir().expect("site dir");
    let large = site.path().join("assets/images/large");
    fs::create_dir_all(&large).expect("create dirs");
    fs::write(large.join("dunes.jpg"), b"dunes").expect("write image");

    let (mut widget, mut tree) = attached_from_manifest();
    widget.select_index(&mut tree, 1);
    let request = widget.download_request(&tree).expect("image loaded");
    assert_eq!(request.file_name, "photos.example_dunes.jpg");

    let target = site.path().join("downloads");
    let downloader = FsDownloader::new(site.path(), &target);
    let saved = downloader.download(&request).expect("copy succeeds");

    assert_eq!(saved, target.join("photos.example_dunes.jpg"));
    assert_eq!(fs::read(saved).expect("read copy"), b"dunes");
}

#[test]
fn scanned_directory_is_adopted_in_discovery_mode() {
    let dir = tempdir().expect("temp dir");
    for name in ["c.png", "a.jpg", "b.webp", "readme.md"] {
        fs::write(dir.path().join(name), b"").expect("write file");
    }

    let list = ImageList::scan_directory(dir.path(), SortOrder::Alphabetical).expect("scan");
    let mut tree = SurfaceTree::new("");
    let container = tree.insert_container("gallery");
    list.populate(&mut tree, container);

    let config = GalleryConfig {
        create_images: false,
        ..GalleryConfig::default()
    };
    let mut widget = GalleryWidget::new(config, Vec::<ImageEntry>::new(), PinnedScroll::default());
    widget.attach(&mut tree, "gallery").expect("container exists");

    assert_eq!(widget.catalog().len(), 3);
    widget.select_index(&mut tree, 2);
    let request = widget.download_request(&tree);
    assert!(request.is_err(), "download is disabled by default");

    let current = widget.cache().and_then(|c| c.get(2)).expect("cached");
    let source = tree.source(current).expect("source");
    assert!(source.ends_with("c.png"));
}

#[test]
fn scroll_is_pinned_while_the_overlay_is_open() {
    let (mut widget, mut tree) = attached_from_manifest();
    widget.scroll_lock_mut().observe(ScrollOffset::new(0.0, 0.25));

    widget.select_index(&mut tree, 0);
    let restored = widget.scroll_lock_mut().observe(ScrollOffset::new(0.0, 0.75));
    assert_eq!(restored, Some(ScrollOffset::new(0.0, 0.25)));

    widget.hide(&mut tree);
    assert_eq!(widget.scroll_lock_mut().observe(ScrollOffset::new(0.0, 0.5)), None);
}
