// SPDX-License-Identifier: MPL-2.0
//! Gallery component: the lightbox widget wired to iced.
//!
//! The component owns the [`GalleryWidget`] and the [`SurfaceTree`] it drives.
//! Messages are translated into widget operations; anything that needs the
//! runtime or the filesystem is handed back to the app as an [`Effect`].

pub mod events;
pub mod view;

pub use view::ViewContext;

use crate::application::gallery::GalleryWidget;
use crate::application::port::{DownloadRequest, ScrollOffset};
use crate::domain::input::{Control, KeyPress};
use crate::error::Error;
use crate::infrastructure::{PinnedScroll, SurfaceTree};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::{Path, PathBuf};

/// Identifier of the thumbnail grid scrollable.
pub const THUMBNAILS_SCROLLABLE_ID: &str = "gallery-thumbnails";

/// Messages emitted by the gallery view and subscription.
#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailPressed(usize),
    ControlPressed(Control),
    ControlHovered(Control),
    ControlLeft,
    Key(KeyPress),
    ThumbnailsScrolled(ScrollOffset),
}

/// Work the app performs on behalf of the component.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Save the currently displayed image.
    Download(DownloadRequest),
    /// Snap the thumbnail grid back to a pinned offset.
    RestoreScroll(ScrollOffset),
    /// A user action could not be carried out.
    Failed(Error),
}

pub struct State {
    widget: GalleryWidget<PinnedScroll>,
    tree: SurfaceTree,
    hovered: Option<Control>,
    asset_root: PathBuf,
    thumbnail_size: f32,
}

impl State {
    /// Wraps an attached widget and the tree it was attached to.
    ///
    /// Relative image sources are resolved against `asset_root`.
    pub fn new(
        widget: GalleryWidget<PinnedScroll>,
        tree: SurfaceTree,
        asset_root: impl Into<PathBuf>,
        thumbnail_size: f32,
    ) -> Self {
        Self {
            widget,
            tree,
            hovered: None,
            asset_root: asset_root.into(),
            thumbnail_size,
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::ThumbnailPressed(index) => {
                self.widget.select_index(&mut self.tree, index);
                Effect::None
            }
            Message::ControlPressed(control) => self.press_control(control),
            Message::ControlHovered(control) => {
                self.hovered = Some(control);
                Effect::None
            }
            Message::ControlLeft => {
                self.hovered = None;
                Effect::None
            }
            Message::Key(key) => {
                if self.widget.handle_key(&mut self.tree, key) && !self.is_open() {
                    self.hovered = None;
                }
                Effect::None
            }
            Message::ThumbnailsScrolled(offset) => {
                match self.widget.scroll_lock_mut().observe(offset) {
                    Some(pinned) => Effect::RestoreScroll(pinned),
                    None => Effect::None,
                }
            }
        }
    }

    fn press_control(&mut self, control: Control) -> Effect {
        if let Some(command) = control.command() {
            self.widget.apply(&mut self.tree, command);
            if !self.is_open() {
                self.hovered = None;
            }
            return Effect::None;
        }
        match self.widget.download_request(&self.tree) {
            Ok(request) => Effect::Download(request),
            Err(err) => {
                tracing::warn!(%err, "download unavailable");
                Effect::Failed(err)
            }
        }
    }

    /// Whether the overlay box is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.widget.display().is_visible()
    }

    #[must_use]
    pub fn widget(&self) -> &GalleryWidget<PinnedScroll> {
        &self.widget
    }

    #[must_use]
    pub fn tree(&self) -> &SurfaceTree {
        &self.tree
    }

    #[must_use]
    pub fn hovered(&self) -> Option<Control> {
        self.hovered
    }

    #[must_use]
    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    #[must_use]
    pub fn thumbnail_size(&self) -> f32 {
        self.thumbnail_size
    }

    /// Filesystem path of an image source.
    #[must_use]
    pub fn resolve_source(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.asset_root.join(path)
        }
    }
}

/// Task that snaps the thumbnail grid to `offset`.
pub fn restore_scroll<T>(offset: ScrollOffset) -> Task<T> {
    operation::snap_to(
        Id::new(THUMBNAILS_SCROLLABLE_ID),
        RelativeOffset {
            x: offset.x,
            y: offset.y,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{GalleryConfig, ImageEntry};

    fn state(direct_download: bool) -> State {
        let mut tree = SurfaceTree::new("localhost");
        tree.insert_container("gallery");
        let config = GalleryConfig {
            direct_download,
            ..GalleryConfig::default()
        };
        let images = vec![ImageEntry::new("a.jpg", "A"), ImageEntry::new("b.jpg", "B")];
        let mut widget = GalleryWidget::new(config, images, PinnedScroll::default());
        widget.attach(&mut tree, "gallery").expect("container exists");
        State::new(widget, tree, "/srv/site", 160.0)
    }

    #[test]
    fn thumbnail_press_opens_overlay() {
        let mut state = state(false);
        assert!(matches!(state.handle(Message::ThumbnailPressed(1)), Effect::None));
        assert!(state.is_open());
        assert_eq!(state.widget().display().current_index(), 1);
    }

    #[test]
    fn close_control_hides_and_clears_hover() {
        let mut state = state(false);
        state.handle(Message::ThumbnailPressed(0));
        state.handle(Message::ControlHovered(Control::Close));
        assert_eq!(state.hovered(), Some(Control::Close));

        state.handle(Message::ControlPressed(Control::Close));

        assert!(!state.is_open());
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn navigation_controls_step_through_images() {
        let mut state = state(false);
        state.handle(Message::ThumbnailPressed(0));
        state.handle(Message::ControlPressed(Control::Next));
        assert_eq!(state.widget().display().current_index(), 1);
        state.handle(Message::ControlPressed(Control::Previous));
        assert_eq!(state.widget().display().current_index(), 0);
    }

    #[test]
    fn download_control_yields_request() {
        let mut state = state(true);
        state.handle(Message::ThumbnailPressed(1));

        match state.handle(Message::ControlPressed(Control::Download)) {
            Effect::Download(request) => assert_eq!(request.file_name, "localhost_b.jpg"),
            other => panic!("expected download effect, got {other:?}"),
        }
    }

    #[test]
    fn scrolling_while_open_restores_pinned_offset() {
        let mut state = state(false);
        state.handle(Message::ThumbnailsScrolled(ScrollOffset::new(0.0, 0.3)));
        state.handle(Message::ThumbnailPressed(0));

        let effect = state.handle(Message::ThumbnailsScrolled(ScrollOffset::new(0.0, 0.9)));

        assert!(matches!(
            effect,
            Effect::RestoreScroll(offset) if offset == ScrollOffset::new(0.0, 0.3)
        ));
    }

    #[test]
    fn keys_drive_navigation_while_closed_and_open() {
        let mut state = state(true);
        state.handle(Message::Key(KeyPress::ArrowRight));
        assert_eq!(state.widget().display().current_index(), 1);
        assert!(!state.is_open());

        state.handle(Message::ThumbnailPressed(0));
        state.handle(Message::Key(KeyPress::ArrowRight));
        assert_eq!(state.widget().display().current_index(), 1);
        state.handle(Message::Key(KeyPress::Escape));
        assert!(!state.is_open());
    }

    #[test]
    fn relative_sources_resolve_against_asset_root() {
        let state = state(false);
        assert_eq!(
            state.resolve_source("assets/images/small/a.jpg"),
            PathBuf::from("/srv/site/assets/images/small/a.jpg")
        );
    }
}
