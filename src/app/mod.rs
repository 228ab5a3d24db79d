// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the gallery component.
//!
//! The `App` struct wires together localization, the gallery component and
//! the downloader, and translates gallery effects into runtime tasks.

pub mod launch;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use launch::{Launch, Source};
pub use message::{Flags, Message};

use crate::application::port::Downloader;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::infrastructure::FsDownloader;
use crate::ui::gallery::{self, Effect};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Transient line shown under the gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// An image was saved at this path.
    Saved(PathBuf),
    /// Saving the current image failed.
    DownloadFailed(String),
    /// The requested gallery could not be opened.
    LaunchFailed(String),
    /// Localization key of a startup warning.
    Warning(String),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    downloader: FsDownloader,
    window_size: Size,
    status: Option<Status>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.gallery.widget().catalog().len())
            .field("open", &self.gallery.is_open())
            .field("status", &self.status)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot; flags are consumed by the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences, opens the requested gallery and falls back to an
    /// empty one when it cannot be opened.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, config.general.language.as_deref());

        let source = Source::from_arg(flags.source.as_deref());
        let download_dir = paths::get_download_dir();

        let mut status = config_warning.map(Status::Warning);
        let launch = match launch::prepare(&source, &config, download_dir.clone()) {
            Ok(launch) => launch,
            Err(err) => {
                tracing::error!(?source, %err, "could not open gallery");
                status = Some(Status::LaunchFailed(err.to_string()));
                Launch::empty(download_dir, config.display.thumbnail_size())
            }
        };

        let app = App {
            i18n,
            gallery: launch.gallery,
            downloader: launch.downloader,
            window_size: Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
            status,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        let config = self.gallery.widget().config();
        if config.show_gallery_title && !config.gallery_title.is_empty() {
            format!("{} - {app_name}", config.gallery_title)
        } else {
            app_name
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_status_subscription(self.status.is_some()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => self.handle_gallery_message(gallery_message),
            Message::WindowResized(size) => {
                self.window_size = size;
                Task::none()
            }
            Message::DownloadCompleted(Ok(path)) => {
                self.status = Some(Status::Saved(path));
                Task::none()
            }
            Message::DownloadCompleted(Err(err)) => {
                tracing::warn!(%err, "download failed");
                self.status = Some(Status::DownloadFailed(err.to_string()));
                Task::none()
            }
            Message::DismissStatus => {
                self.status = None;
                Task::none()
            }
        }
    }

    fn handle_gallery_message(&mut self, message: gallery::Message) -> Task<Message> {
        match self.gallery.handle(message) {
            Effect::None => Task::none(),
            Effect::Download(request) => {
                let downloader = self.downloader.clone();
                Task::perform(
                    async move { downloader.download(&request) },
                    Message::DownloadCompleted,
                )
            }
            Effect::RestoreScroll(offset) => gallery::restore_scroll(offset),
            Effect::Failed(err) => {
                self.status = Some(Status::DownloadFailed(err.to_string()));
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            window_size: self.window_size,
            status: self.status.as_ref(),
        })
    }
}
