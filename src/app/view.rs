// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Status};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::styles;
use iced::{
    alignment,
    widget::{Column, Container, Text},
    Element, Length, Size,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub window_size: Size,
    pub status: Option<&'a Status>,
}

/// Renders the gallery with the status line, if any, below it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = gallery::view::view(
        GalleryViewContext {
            i18n: ctx.i18n,
            window_size: ctx.window_size,
        },
        ctx.gallery,
    )
    .map(Message::Gallery);

    let mut column = Column::new().push(
        Container::new(gallery_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    if let Some(status) = ctx.status {
        column = column.push(
            Container::new(status_line(ctx.i18n, status))
                .width(Length::Fill)
                .padding(spacing::XS)
                .align_x(alignment::Horizontal::Center),
        );
    }

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn status_line<'a>(i18n: &I18n, status: &Status) -> Element<'a, Message> {
    let (text, success) = match status {
        Status::Saved(path) => (
            i18n.tr_with_args("download-saved", &[("path", &path.display().to_string())]),
            true,
        ),
        Status::DownloadFailed(error) => (
            i18n.tr_with_args("download-failed", &[("error", error)]),
            false,
        ),
        Status::LaunchFailed(error) => (
            i18n.tr_with_args("launch-error", &[("error", error)]),
            false,
        ),
        Status::Warning(key) => (i18n.tr(key), false),
    };

    Container::new(Text::new(text).size(typography::BODY))
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::status(success))
        .into()
}
