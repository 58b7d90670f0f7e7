// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            ..button::Style::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            ..button::Style::default()
        },
        _ => button::Style::default(),
    }
}

/// Style pour boutons overlay (navigation du modal, fermeture).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => alpha_hover,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border::default(),
            shadow: shadow::MD,
            ..button::Style::default()
        }
    }
}

/// Style for a gallery block tile. Focused or hovered tiles get a brand
/// border so the keyboard focus ring stays visible on every surface.
pub fn block_tile(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base.color;
        let highlighted = focused || matches!(status, button::Status::Hovered);

        button::Style {
            background: Some(Background::Color(Color::from_rgba(
                base.r,
                base.g,
                base.b,
                opacity::SURFACE,
            ))),
            text_color: theme.extended_palette().background.base.text,
            border: Border {
                color: if highlighted {
                    palette::PRIMARY_500
                } else {
                    Color {
                        a: opacity::OVERLAY_SUBTLE,
                        ..palette::GRAY_400
                    }
                },
                width: if highlighted { 2.0 } else { 1.0 },
                radius: radius::MD.into(),
            },
            shadow: if highlighted { shadow::MD } else { shadow::NONE },
            ..button::Style::default()
        }
    }
}
