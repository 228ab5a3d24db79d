// SPDX-License-Identifier: MPL-2.0
//! The gallery widget: display state machine driving a surface host.
//!
//! Lifecycle is two-phase. [`GalleryWidget::new`] only stores the config,
//! catalog and scroll lock; [`GalleryWidget::attach`] resolves the container
//! and builds every element through the [`SurfaceHost`] port. Operations
//! invoked before a successful attach do nothing.

mod builder;
mod cache;

pub use builder::{Chrome, Elements};
pub use cache::LoadedCache;

use crate::application::port::{DownloadRequest, ScrollLock, SurfaceHost, SurfaceId};
use crate::domain::gallery::{
    Catalog, Direction, DisplayState, GalleryConfig, GalleryOverrides, ImageEntry,
};
use crate::domain::input::{Command, Control, KeyPress};
use crate::error::{Error, Result};

/// Elements owned by an attached gallery.
#[derive(Debug, Clone)]
struct Mount {
    container: SurfaceId,
    chrome: Chrome,
    thumbnails: Vec<SurfaceId>,
    full_surfaces: Vec<SurfaceId>,
    cache: LoadedCache,
}

/// Lightbox gallery over a fixed catalog of images.
#[derive(Debug)]
pub struct GalleryWidget<L> {
    config: GalleryConfig,
    catalog: Catalog,
    scroll_lock: L,
    display: DisplayState,
    mount: Option<Mount>,
}

impl<L: ScrollLock> GalleryWidget<L> {
    /// Creates a detached gallery. No host access happens here.
    pub fn new(config: GalleryConfig, images: Vec<ImageEntry>, scroll_lock: L) -> Self {
        let catalog = Catalog::new(images);
        let display = DisplayState::new(catalog.len());
        Self {
            config,
            catalog,
            scroll_lock,
            display,
            mount: None,
        }
    }

    /// Creates a detached gallery from default options merged with
    /// `overrides`.
    ///
    /// Fraction overrides outside `0.0..=1.0` are clamped.
    pub fn with_overrides(
        overrides: &GalleryOverrides,
        images: Vec<ImageEntry>,
        scroll_lock: L,
    ) -> Self {
        for option in overrides.out_of_range_fractions() {
            tracing::warn!(option, "fraction outside 0..=1, clamping");
        }
        Self::new(GalleryConfig::from_overrides(overrides), images, scroll_lock)
    }

    /// Resolves `container_id` and builds the gallery's elements.
    ///
    /// In discovery mode (`create_images = false`) the image elements already
    /// inside the container replace the catalog given to [`Self::new`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyAttached`] on a second call and
    /// [`Error::ContainerNotFound`] when the host does not know the container.
    pub fn attach<H: SurfaceHost>(&mut self, host: &mut H, container_id: &str) -> Result<()> {
        if self.mount.is_some() {
            return Err(Error::AlreadyAttached);
        }
        let container = host
            .find_container(container_id)
            .ok_or_else(|| Error::ContainerNotFound(container_id.to_string()))?;

        let chrome = builder::build_chrome(host, container, &self.config);
        let elements = if self.config.create_images {
            builder::create_elements(host, container, &self.config, &self.catalog)
        } else {
            let (catalog, elements) = builder::adopt_elements(host, container);
            if !self.catalog.is_empty() {
                tracing::warn!(
                    supplied = self.catalog.len(),
                    discovered = catalog.len(),
                    "discovery mode replaces the supplied images"
                );
            }
            self.catalog = catalog;
            self.display = DisplayState::new(self.catalog.len());
            elements
        };

        tracing::info!(
            container = container_id,
            images = self.catalog.len(),
            discovery = !self.config.create_images,
            "gallery attached"
        );

        self.mount = Some(Mount {
            container,
            chrome,
            cache: LoadedCache::new(elements.full_surfaces.len()),
            thumbnails: elements.thumbnails,
            full_surfaces: elements.full_surfaces,
        });
        Ok(())
    }

    /// Opens the overlay and pins scrolling. Does nothing if already open.
    pub fn show<H: SurfaceHost>(&mut self, host: &mut H) {
        let Some(mount) = self.mount.as_ref() else {
            tracing::debug!("show ignored: gallery not attached");
            return;
        };
        if self.display.show() {
            self.scroll_lock.acquire();
            host.set_visible(mount.chrome.overlay, true);
            tracing::debug!(index = self.display.current_index(), "overlay shown");
        }
    }

    /// Closes the overlay and releases scrolling. Does nothing if already
    /// closed.
    pub fn hide<H: SurfaceHost>(&mut self, host: &mut H) {
        let Some(mount) = self.mount.as_ref() else {
            tracing::debug!("hide ignored: gallery not attached");
            return;
        };
        if self.display.hide() {
            self.scroll_lock.release();
            host.set_visible(mount.chrome.overlay, false);
            tracing::debug!("overlay hidden");
        }
    }

    /// Advances to the next image, wrapping or clamping at the end, then
    /// loads it.
    pub fn next<H: SurfaceHost>(&mut self, host: &mut H) {
        self.navigate(host, Direction::Next);
    }

    /// Goes back to the previous image, wrapping or clamping at the start,
    /// then loads it.
    pub fn prev<H: SurfaceHost>(&mut self, host: &mut H) {
        self.navigate(host, Direction::Previous);
    }

    fn navigate<H: SurfaceHost>(&mut self, host: &mut H, direction: Direction) {
        if self.mount.is_none() {
            tracing::debug!(?direction, "navigation ignored: gallery not attached");
            return;
        }
        if let Some(index) = self.display.step(direction, self.config.wrap_around) {
            tracing::debug!(?direction, index, "navigated");
            self.load_current(host);
        }
    }

    /// Jumps to `index`, loads it and opens the overlay.
    ///
    /// An out-of-range index is ignored.
    pub fn select_index<H: SurfaceHost>(&mut self, host: &mut H, index: usize) {
        if self.mount.is_none() {
            tracing::debug!(index, "selection ignored: gallery not attached");
            return;
        }
        if !self.display.select(index) {
            tracing::warn!(
                index,
                count = self.display.count(),
                "ignoring out-of-range selection"
            );
            return;
        }
        self.load_current(host);
        self.show(host);
    }

    /// Makes the current image the only visible full-size surface.
    ///
    /// The first request for an index clones its pre-built surface into the
    /// overlay box and caches it; later requests reuse the cached surface.
    pub fn load_current<H: SurfaceHost>(&mut self, host: &mut H) {
        let Some(mount) = self.mount.as_mut() else {
            tracing::debug!("load ignored: gallery not attached");
            return;
        };
        let Some(index) = self.display.current() else {
            return;
        };

        for loaded in mount.cache.loaded() {
            host.set_visible(loaded, false);
        }

        let surface = if let Some(cached) = mount.cache.get(index) {
            cached
        } else {
            let Some(&prebuilt) = mount.full_surfaces.get(index) else {
                tracing::warn!(index, "no full-size surface for index");
                return;
            };
            let clone = host.clone_surface(prebuilt);
            host.set_visible(clone, true);
            host.append_child(mount.chrome.overlay, clone);
            mount.cache.insert(index, clone);
            tracing::debug!(index, "full-size surface attached");
            clone
        };
        host.set_visible(surface, true);

        if let (Some(caption), Some(entry)) = (mount.chrome.caption, self.catalog.get(index)) {
            host.set_text(caption, &entry.caption);
        }
    }

    /// Runs a user command.
    pub fn apply<H: SurfaceHost>(&mut self, host: &mut H, command: Command) {
        match command {
            Command::Previous => self.prev(host),
            Command::Next => self.next(host),
            Command::Close => self.hide(host),
        }
    }

    /// Handles a key press whether or not the overlay is shown.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key<H: SurfaceHost>(&mut self, host: &mut H, key: KeyPress) -> bool {
        match Command::from_key(key) {
            Some(command) => {
                self.apply(host, command);
                true
            }
            None => false,
        }
    }

    /// Builds the request to save the currently loaded full-size image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Download`] when direct download is disabled, the
    /// gallery is not attached, or the current image has no loaded source.
    pub fn download_request<H: SurfaceHost>(&self, host: &H) -> Result<DownloadRequest> {
        if !self.config.direct_download {
            return Err(Error::Download("direct download is disabled".into()));
        }
        let mount = self
            .mount
            .as_ref()
            .ok_or_else(|| Error::Download("gallery is not attached".into()))?;
        let index = self
            .display
            .current()
            .ok_or_else(|| Error::Download("no image selected".into()))?;
        let surface = mount
            .cache
            .get(index)
            .ok_or_else(|| Error::Download("current image is not loaded".into()))?;
        let source = host
            .source(surface)
            .ok_or_else(|| Error::Download("current image has no source".into()))?;
        DownloadRequest::new(source, host.origin())
            .ok_or_else(|| Error::Download(format!("cannot name a file for {source}")))
    }

    /// Catalog index of a thumbnail element.
    #[must_use]
    pub fn thumbnail_index(&self, thumbnail: SurfaceId) -> Option<usize> {
        self.mount
            .as_ref()?
            .thumbnails
            .iter()
            .position(|id| *id == thumbnail)
    }

    /// Element of an overlay control, if it was built.
    #[must_use]
    pub fn control(&self, control: Control) -> Option<SurfaceId> {
        self.mount.as_ref()?.chrome.control(control)
    }

    #[must_use]
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn scroll_lock(&self) -> &L {
        &self.scroll_lock
    }

    pub fn scroll_lock_mut(&mut self) -> &mut L {
        &mut self.scroll_lock
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.mount.is_some()
    }

    /// The container the gallery is attached to.
    #[must_use]
    pub fn container(&self) -> Option<SurfaceId> {
        self.mount.as_ref().map(|mount| mount.container)
    }

    /// The overlay box element.
    #[must_use]
    pub fn overlay(&self) -> Option<SurfaceId> {
        self.mount.as_ref().map(|mount| mount.chrome.overlay)
    }

    /// Thumbnails in catalog order (empty before attach).
    #[must_use]
    pub fn thumbnails(&self) -> &[SurfaceId] {
        self.mount
            .as_ref()
            .map(|mount| mount.thumbnails.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn cache(&self) -> Option<&LoadedCache> {
        self.mount.as_ref().map(|mount| &mount.cache)
    }
}
