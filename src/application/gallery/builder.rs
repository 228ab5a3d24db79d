// SPDX-License-Identifier: MPL-2.0
//! Element builder: overlay chrome, thumbnails and full-size surfaces.
//!
//! Two modes feed the gallery:
//! - **create**: thumbnails are created from the catalog and attached to the
//!   container; full-size surfaces are created detached.
//! - **adopt**: image elements already in the container become the
//!   thumbnails, and their sources are used verbatim for the full-size
//!   surfaces.

use crate::application::port::{ElementSpec, SurfaceHost, SurfaceId, SurfaceRole};
use crate::domain::gallery::{Catalog, GalleryConfig, ImageEntry};
use crate::domain::input::Control;

/// Overlay box and the elements it always contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub overlay: SurfaceId,
    pub title: Option<SurfaceId>,
    pub caption: Option<SurfaceId>,
    pub controls: Vec<(Control, SurfaceId)>,
}

impl Chrome {
    /// Returns the element of `control`, if it was built.
    #[must_use]
    pub fn control(&self, control: Control) -> Option<SurfaceId> {
        self.controls
            .iter()
            .find(|(c, _)| *c == control)
            .map(|(_, id)| *id)
    }
}

/// Per-image elements, indexed like the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Elements {
    pub thumbnails: Vec<SurfaceId>,
    /// Pre-built, detached full-size surfaces.
    pub full_surfaces: Vec<SurfaceId>,
}

/// Builds the hidden overlay box inside `container`.
pub fn build_chrome<H: SurfaceHost>(
    host: &mut H,
    container: SurfaceId,
    config: &GalleryConfig,
) -> Chrome {
    let overlay = host.create(ElementSpec::new(SurfaceRole::OverlayBox).visible(false));
    host.append_child(container, overlay);

    let title = config.show_gallery_title.then(|| {
        let id = host.create(ElementSpec::text(SurfaceRole::Title, &config.gallery_title));
        host.append_child(overlay, id);
        id
    });

    let controls = Control::ALL
        .into_iter()
        .filter(|control| *control != Control::Download || config.direct_download)
        .map(|control| {
            let id = host.create(ElementSpec::new(SurfaceRole::Control(control)));
            host.append_child(overlay, id);
            (control, id)
        })
        .collect();

    let caption = config.show_image_description.then(|| {
        let id = host.create(ElementSpec::text(SurfaceRole::Caption, ""));
        host.append_child(overlay, id);
        id
    });

    Chrome {
        overlay,
        title,
        caption,
        controls,
    }
}

/// Creates one thumbnail per entry in `container` and one detached full-size
/// surface per entry.
pub fn create_elements<H: SurfaceHost>(
    host: &mut H,
    container: SurfaceId,
    config: &GalleryConfig,
    catalog: &Catalog,
) -> Elements {
    let mut elements = Elements::default();

    for (index, entry) in catalog.iter().enumerate() {
        let thumbnail = host.create(ElementSpec::image(
            SurfaceRole::Thumbnail,
            config.thumbnail_source(&entry.reference),
            &entry.caption,
        ));
        host.set_index(thumbnail, index);
        host.append_child(container, thumbnail);

        let full = host.create(ElementSpec::image(
            SurfaceRole::FullImage,
            config.full_source(&entry.reference),
            &entry.caption,
        ));
        host.set_index(full, index);

        elements.thumbnails.push(thumbnail);
        elements.full_surfaces.push(full);
    }

    elements
}

/// Adopts the image elements already present in `container`.
///
/// Returns the catalog rebuilt from the discovered sources and captions.
pub fn adopt_elements<H: SurfaceHost>(host: &mut H, container: SurfaceId) -> (Catalog, Elements) {
    let discovered = host.discover_images(container);
    let mut elements = Elements::default();
    let mut entries = Vec::with_capacity(discovered.len());

    for (index, image) in discovered.into_iter().enumerate() {
        host.set_index(image.id, index);

        let full = host.create(ElementSpec::image(
            SurfaceRole::FullImage,
            image.source.as_str(),
            image.caption.as_str(),
        ));
        host.set_index(full, index);

        elements.thumbnails.push(image.id);
        elements.full_surfaces.push(full);
        entries.push(ImageEntry::new(image.source, image.caption));
    }

    (Catalog::new(entries), elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::GalleryOverrides;
    use crate::infrastructure::SurfaceTree;

    fn tree_with_container() -> (SurfaceTree, SurfaceId) {
        let mut tree = SurfaceTree::new("localhost");
        let container = tree.insert_container("gallery");
        (tree, container)
    }

    #[test]
    fn chrome_is_hidden_and_attached_to_container() {
        let (mut tree, container) = tree_with_container();
        let chrome = build_chrome(&mut tree, container, &GalleryConfig::default());

        let overlay = tree.node(chrome.overlay).expect("overlay exists");
        assert!(!overlay.visible);
        assert_eq!(overlay.parent, Some(container));
        assert!(chrome.title.is_some());
        assert!(chrome.caption.is_some());
    }

    #[test]
    fn download_control_requires_direct_download() {
        let (mut tree, container) = tree_with_container();
        let chrome = build_chrome(&mut tree, container, &GalleryConfig::default());
        assert!(chrome.control(Control::Download).is_none());
        assert!(chrome.control(Control::Close).is_some());

        let config = GalleryConfig::from_overrides(&GalleryOverrides {
            direct_download: Some(true),
            ..GalleryOverrides::default()
        });
        let chrome = build_chrome(&mut tree, container, &config);
        assert!(chrome.control(Control::Download).is_some());
    }

    #[test]
    fn title_and_caption_follow_config_flags() {
        let (mut tree, container) = tree_with_container();
        let config = GalleryConfig::from_overrides(&GalleryOverrides {
            show_gallery_title: Some(false),
            show_image_description: Some(false),
            ..GalleryOverrides::default()
        });

        let chrome = build_chrome(&mut tree, container, &config);

        assert!(chrome.title.is_none());
        assert!(chrome.caption.is_none());
    }

    #[test]
    fn created_thumbnails_are_attached_in_catalog_order() {
        let (mut tree, container) = tree_with_container();
        let catalog = Catalog::new(vec![
            ImageEntry::new("a.jpg", "A"),
            ImageEntry::new("b.jpg", "B"),
        ]);

        let elements = create_elements(&mut tree, container, &GalleryConfig::default(), &catalog);

        assert_eq!(tree.children(container), elements.thumbnails.as_slice());
        let second = tree.node(elements.thumbnails[1]).expect("thumbnail exists");
        assert_eq!(second.source.as_deref(), Some("assets/images/small/b.jpg"));
        assert_eq!(second.index, Some(1));
    }

    #[test]
    fn full_surfaces_are_detached_and_tagged() {
        let (mut tree, container) = tree_with_container();
        let catalog = Catalog::new(vec![ImageEntry::new("a.jpg", "A")]);

        let elements = create_elements(&mut tree, container, &GalleryConfig::default(), &catalog);

        let full = tree.node(elements.full_surfaces[0]).expect("full surface exists");
        assert_eq!(full.parent, None);
        assert_eq!(full.index, Some(0));
        assert_eq!(full.source.as_deref(), Some("assets/images/large/a.jpg"));
    }

    #[test]
    fn adopted_images_keep_their_source_verbatim() {
        let (mut tree, container) = tree_with_container();
        tree.insert_image(container, "/photos/x.png", "X");
        tree.insert_image(container, "/photos/y.png", "Y");

        let (catalog, elements) = adopt_elements(&mut tree, container);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1), Some(&ImageEntry::new("/photos/y.png", "Y")));
        let full = tree.node(elements.full_surfaces[0]).expect("full surface exists");
        assert_eq!(full.source.as_deref(), Some("/photos/x.png"));
        let thumb = tree.node(elements.thumbnails[1]).expect("thumbnail exists");
        assert_eq!(thumb.index, Some(1));
    }

    #[test]
    fn empty_catalog_builds_no_elements() {
        let (mut tree, container) = tree_with_container();
        let elements = create_elements(
            &mut tree,
            container,
            &GalleryConfig::default(),
            &Catalog::default(),
        );
        assert!(elements.thumbnails.is_empty());
        assert!(tree.children(container).is_empty());
    }
}
