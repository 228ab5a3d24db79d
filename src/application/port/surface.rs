// SPDX-License-Identifier: MPL-2.0
//! Surface host port definition.
//!
//! A surface host owns a retained tree of elements ("surfaces"). The gallery
//! creates its thumbnails, overlay box and controls through this port, and
//! toggles their visibility as the display state changes. Rendering the tree
//! is the host's concern.

use crate::domain::input::Control;

// =============================================================================
// SurfaceId
// =============================================================================

/// Opaque handle to an element of a [`SurfaceHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(usize);

impl SurfaceId {
    /// Wraps a host-specific slot number.
    #[must_use]
    pub fn new(slot: usize) -> Self {
        Self(slot)
    }

    /// Returns the host-specific slot number.
    #[must_use]
    pub fn slot(self) -> usize {
        self.0
    }
}

// =============================================================================
// SurfaceRole
// =============================================================================

/// What an element is for. Hosts render elements according to their role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceRole {
    /// A plain grouping element (e.g., the gallery container).
    #[default]
    Container,
    /// An image that was already present in the document.
    Image,
    /// The initially hidden box that displays the current full-size image.
    OverlayBox,
    /// The gallery title region.
    Title,
    /// The caption region of the current image.
    Caption,
    /// One of the overlay controls.
    Control(Control),
    /// A small preview created by the gallery.
    Thumbnail,
    /// A full-size image shown inside the overlay box.
    FullImage,
}

impl SurfaceRole {
    /// Whether elements with this role display an image source.
    #[must_use]
    pub fn is_image(self) -> bool {
        matches!(
            self,
            SurfaceRole::Image | SurfaceRole::Thumbnail | SurfaceRole::FullImage
        )
    }
}

// =============================================================================
// ElementSpec
// =============================================================================

/// Description of an element to create.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementSpec {
    pub role: SurfaceRole,
    /// Image source, for image roles.
    pub source: Option<String>,
    /// Text content, for title and caption roles.
    pub text: Option<String>,
    /// Caption attribute carried by image elements.
    pub caption: Option<String>,
    pub visible: bool,
}

impl ElementSpec {
    /// A visible element with the given role and nothing else.
    #[must_use]
    pub fn new(role: SurfaceRole) -> Self {
        Self {
            role,
            visible: true,
            ..Self::default()
        }
    }

    /// A visible image element.
    #[must_use]
    pub fn image(role: SurfaceRole, source: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            caption: Some(caption.into()),
            ..Self::new(role)
        }
    }

    /// A visible text element.
    #[must_use]
    pub fn text(role: SurfaceRole, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(role)
        }
    }

    /// Sets the initial visibility.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

// =============================================================================
// DiscoveredImage
// =============================================================================

/// An image element found inside a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredImage {
    pub id: SurfaceId,
    /// The element's displayed source, used verbatim.
    pub source: String,
    /// The element's caption attribute (empty when absent).
    pub caption: String,
}

// =============================================================================
// SurfaceHost Trait
// =============================================================================

/// Port for the element tree the gallery renders into.
///
/// Ids handed to mutation methods must come from the same host. Hosts ignore
/// unknown ids.
pub trait SurfaceHost {
    /// Resolves a container by its identifier.
    fn find_container(&self, container_id: &str) -> Option<SurfaceId>;

    /// Creates a detached element.
    fn create(&mut self, spec: ElementSpec) -> SurfaceId;

    /// Attaches `child` as the last child of `parent`.
    fn append_child(&mut self, parent: SurfaceId, child: SurfaceId);

    /// Creates a detached copy of `id` (and of its descendants).
    fn clone_surface(&mut self, id: SurfaceId) -> SurfaceId;

    /// Shows or hides an element without detaching it.
    fn set_visible(&mut self, id: SurfaceId, visible: bool);

    /// Replaces the text content of an element.
    fn set_text(&mut self, id: SurfaceId, text: &str);

    /// Tags an element with its catalog index.
    fn set_index(&mut self, id: SurfaceId, index: usize);

    /// Returns the image elements inside `container`, in document order.
    fn discover_images(&self, container: SurfaceId) -> Vec<DiscoveredImage>;

    /// Returns the image source of an element.
    fn source(&self, id: SurfaceId) -> Option<&str>;

    /// Host name of the document, used to name downloads.
    fn origin(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_spec_is_visible_with_source_and_caption() {
        let spec = ElementSpec::image(SurfaceRole::Thumbnail, "small/a.jpg", "A");
        assert!(spec.visible);
        assert_eq!(spec.source.as_deref(), Some("small/a.jpg"));
        assert_eq!(spec.caption.as_deref(), Some("A"));
        assert!(spec.text.is_none());
    }

    #[test]
    fn visible_builder_overrides_default() {
        let spec = ElementSpec::new(SurfaceRole::OverlayBox).visible(false);
        assert!(!spec.visible);
    }

    #[test]
    fn image_roles_are_detected() {
        assert!(SurfaceRole::Thumbnail.is_image());
        assert!(SurfaceRole::FullImage.is_image());
        assert!(SurfaceRole::Image.is_image());
        assert!(!SurfaceRole::Caption.is_image());
        assert!(!SurfaceRole::Control(Control::Close).is_image());
    }
}
