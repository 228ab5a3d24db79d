// SPDX-License-Identifier: MPL-2.0
//! Rendering of the gallery surface tree.
//!
//! The thumbnail grid is drawn from the container's thumbnails; when the
//! overlay box is displayed it is stacked on top, showing the title, the
//! visible full-size image, the caption and the controls in tree order.

use super::{Message, State, THUMBNAILS_SCROLLABLE_ID};
use crate::application::port::{ScrollOffset, SurfaceId, SurfaceRole};
use crate::domain::input::Control;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::Viewport;
use iced::widget::{
    button, mouse_area, opaque, Column, Container, Id, Row, Scrollable, Stack, Text,
};
use iced::{alignment, mouse, ContentFit, Element, Length, Size};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub window_size: Size,
}

/// Render the gallery.
pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let grid = if state.widget().thumbnails().is_empty() {
        empty_state(ctx.i18n)
    } else {
        thumbnail_grid(state)
    };

    let Some(overlay) = state.widget().overlay() else {
        return grid;
    };
    if !state.tree().is_displayed(overlay) {
        return grid;
    }

    Stack::new()
        .push(grid)
        .push(overlay_layer(&ctx, state, overlay))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn empty_state(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(i18n.tr("gallery-empty")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("gallery-empty-hint")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn thumbnail_grid(state: &State) -> Element<'_, Message> {
    let size = state.thumbnail_size();
    let tree = state.tree();

    let thumbnails = state
        .widget()
        .thumbnails()
        .iter()
        .enumerate()
        .filter_map(|(index, id)| {
            let node = tree.node(*id)?;
            let source = node.source.as_deref()?;
            let image = Image::new(Handle::from_path(state.resolve_source(source)))
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .content_fit(ContentFit::Cover);
            let thumbnail: Element<'_, Message> = button(image)
                .padding(0)
                .style(styles::button::thumbnail)
                .on_press(Message::ThumbnailPressed(index))
                .into();
            Some(thumbnail)
        });

    let grid = Row::with_children(thumbnails)
        .spacing(spacing::XS)
        .wrap()
        .vertical_spacing(spacing::XS);

    Scrollable::new(Container::new(grid).padding(spacing::MD).width(Length::Fill))
        .id(Id::new(THUMBNAILS_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| {
            let offset = viewport.relative_offset();
            Message::ThumbnailsScrolled(ScrollOffset::new(offset.x, offset.y))
        })
        .into()
}

fn overlay_layer<'a>(
    ctx: &ViewContext<'a>,
    state: &'a State,
    overlay: SurfaceId,
) -> Element<'a, Message> {
    let config = state.widget().config();
    let box_size = Size::new(
        config.box_width.of(ctx.window_size.width),
        config.box_height.of(ctx.window_size.height),
    );
    let image_size = Size::new(
        config.max_image_width.of(box_size.width),
        config.max_image_height.of(box_size.height),
    );

    let tree = state.tree();
    let mut title = None;
    let mut full_image = None;
    let mut caption = None;
    let mut controls = Row::new().spacing(spacing::XS);

    for id in tree.children(overlay) {
        let Some(node) = tree.node(*id) else { continue };
        if !node.visible {
            continue;
        }
        match node.role {
            SurfaceRole::Title => {
                title = node
                    .text
                    .as_deref()
                    .map(|text| Text::new(text).size(typography::TITLE_MD));
            }
            SurfaceRole::FullImage => {
                full_image = node.source.as_deref().map(|source| {
                    Image::new(Handle::from_path(state.resolve_source(source)))
                        .width(Length::Fixed(image_size.width))
                        .height(Length::Fixed(image_size.height))
                        .content_fit(ContentFit::Contain)
                });
            }
            SurfaceRole::Caption => {
                caption = node
                    .text
                    .as_deref()
                    .filter(|text| !text.is_empty())
                    .map(|text| {
                        Container::new(Text::new(text).size(typography::BODY))
                            .padding([spacing::XXS, spacing::XS])
                            .style(styles::container::caption)
                    });
            }
            SurfaceRole::Control(control) => {
                controls = controls.push(control_button(ctx.i18n, control, state.hovered()));
            }
            _ => {}
        }
    }

    let display = state.widget().display();
    let counter = ctx.i18n.tr_with_args(
        "gallery-counter",
        &[
            ("current", &(display.current_index() + 1).to_string()),
            ("total", &display.count().to_string()),
        ],
    );

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill);
    if let Some(title) = title {
        content = content.push(title);
    }
    if let Some(image) = full_image {
        content = content.push(image);
    }
    if let Some(caption) = caption {
        content = content.push(caption);
    }
    content = content
        .push(controls)
        .push(Text::new(counter).size(typography::CAPTION));

    let overlay_box = Container::new(content)
        .width(Length::Fixed(box_size.width))
        .height(Length::Fixed(box_size.height))
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::overlay_box);

    opaque(
        Container::new(overlay_box)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::backdrop),
    )
}

fn control_label(i18n: &I18n, control: Control) -> String {
    match control {
        Control::Close => i18n.tr("gallery-close"),
        Control::Previous => format!("← {}", i18n.tr("gallery-previous")),
        Control::Next => format!("{} →", i18n.tr("gallery-next")),
        Control::Download => i18n.tr("gallery-download"),
    }
}

fn control_button<'a>(
    i18n: &I18n,
    control: Control,
    hovered: Option<Control>,
) -> Element<'a, Message> {
    let label = Text::new(control_label(i18n, control)).size(typography::BODY);
    let button = button(label)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .width(Length::Shrink)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::control(hovered == Some(control)))
        .on_press(Message::ControlPressed(control));

    mouse_area(button)
        .on_enter(Message::ControlHovered(control))
        .on_exit(Message::ControlLeft)
        .interaction(mouse::Interaction::Pointer)
        .into()
}
