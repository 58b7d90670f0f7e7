// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the gallery header and the modal sheet.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the modal sheet surface.
pub fn sheet(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let base = extended.background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        text_color: Some(extended.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            width: 1.0,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// A single decorative cell. The hue cycles with the 1-based cell identifier
/// and `reveal` fades the cell in during the entrance animation.
pub fn cell(index: u32, reveal: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let hue = palette::CELL_HUES[(index as usize - 1) % palette::CELL_HUES.len()];
        container::Style {
            background: Some(Background::Color(Color {
                a: reveal.clamp(0.0, 1.0),
                ..hue
            })),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
