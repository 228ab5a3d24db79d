// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the overlay controls (close, previous, next, download).
///
/// `dimmed` is the hover affordance tracked by the gallery component: a
/// hovered control is drawn with a lighter backdrop and muted label.
pub fn control(dimmed: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ if dimmed => opacity::OVERLAY_MEDIUM,
            _ => opacity::OVERLAY_STRONG,
        };
        let text_color = if dimmed { palette::GRAY_200 } else { WHITE };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Style for thumbnail buttons in the grid.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let (color, width) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette::PRIMARY_400, border::WIDTH_MD)
        }
        _ => (palette::GRAY_700, border::WIDTH_SM),
    };

    button::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: WHITE,
        border: Border {
            color,
            width,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
