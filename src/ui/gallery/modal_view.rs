// SPDX-License-Identifier: MPL-2.0
//! Modal overlay view: backdrop, sheet, preview, and navigation controls.

use crate::i18n::fluent::I18n;
use crate::quilt::Block;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::effects;
use crate::ui::gallery::component::Message;
use crate::ui::gallery::grid_view::cell_grid;
use crate::ui::gallery::preview::Preview;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, tooltip, Column, Container, Row, Text};
use iced::{mouse, Color, Element, Length, Padding, Theme};

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub struct ViewModel<'a> {
    pub block: &'a Block,
    pub preview: &'a Preview,
    /// The `position/total` label, e.g. `3/8`.
    pub counter: String,
    pub effects: &'a effects::State,
    /// Live downward displacement of the sheet while swiping.
    pub sheet_offset: f32,
    pub dragging: bool,
    pub viewport_width: f32,
}

/// Render the modal overlay layer (stacked above the gallery grid).
pub fn view<'a>(ctx: &ViewContext<'a>, model: &ViewModel<'a>) -> Element<'a, Message> {
    let sheet = build_sheet(ctx, model);

    let sheet_area = mouse_area(sheet).on_press(Message::SheetPressed);
    let sheet_area = if model.dragging {
        sheet_area.interaction(mouse::Interaction::Grabbing)
    } else {
        sheet_area
    };

    // Centering splits extra padding evenly, so doubling the swipe offset
    // yields a one-to-one downward displacement of the sheet.
    let positioned = Container::new(sheet_area)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(Padding {
            top: 2.0 * model.sheet_offset,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        })
        .style(styles::overlay::backdrop);

    // The sheet's own mouse area captures presses over the sheet, so only
    // presses landing on the backdrop itself dismiss.
    mouse_area(positioned)
        .on_press(Message::CloseRequested)
        .into()
}

fn build_sheet<'a>(ctx: &ViewContext<'a>, model: &ViewModel<'a>) -> Element<'a, Message> {
    let close_button = button(Text::new(ctx.i18n.tr("modal-close")).size(typography::BODY_SM))
        .style(styles::button_primary)
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::CloseRequested);

    let close_row = Container::new(close_button)
        .width(Length::Fill)
        .align_x(Horizontal::Right);

    let title = build_title(model);

    let description = Text::new(model.block.description.clone()).size(typography::BODY_MD);

    let preview = Container::new(cell_grid(
        model.preview.grid(),
        sizing::PREVIEW_TILE,
        |_| 1.0,
    ))
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let nav = build_nav(ctx, model);

    let sheet_width = sizing::MODAL_SHEET_WIDTH.min(model.viewport_width - 2.0 * spacing::LG);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(close_row)
            .push(title)
            .push(description)
            .push(preview)
            .push(nav),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sheet_width))
    .style(styles::container::sheet)
    .into()
}

/// The block name, one text element per character so the entrance reveal
/// can stagger the alphas.
fn build_title<'a>(model: &ViewModel<'a>) -> Element<'a, Message> {
    let chars: Vec<char> = model.block.name.chars().collect();
    let total = chars.len();

    let mut row = Row::new();
    for (index, ch) in chars.into_iter().enumerate() {
        let alpha = model.effects.title_char_reveal(index, total);
        row = row.push(Text::new(ch.to_string()).size(typography::TITLE_MD).style(
            move |theme: &Theme| iced::widget::text::Style {
                color: Some(Color {
                    a: alpha,
                    ..theme.extended_palette().background.base.text
                }),
            },
        ));
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn build_nav<'a>(ctx: &ViewContext<'a>, model: &ViewModel<'a>) -> Element<'a, Message> {
    let previous = tooltip(
        button(Text::new("◀").size(typography::BODY_MD))
            .style(styles::button_overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .padding([spacing::XXS, spacing::SM])
            .on_press(Message::StepRequested(-1)),
        Text::new(ctx.i18n.tr("modal-previous")).size(typography::BODY_SM),
        tooltip::Position::Top,
    );

    let next = tooltip(
        button(Text::new("▶").size(typography::BODY_MD))
            .style(styles::button_overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ))
            .padding([spacing::XXS, spacing::SM])
            .on_press(Message::StepRequested(1)),
        Text::new(ctx.i18n.tr("modal-next")).size(typography::BODY_SM),
        tooltip::Position::Top,
    );

    let counter = Container::new(Text::new(model.counter.clone()).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::SM));

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(previous)
        .push(counter)
        .push(next)
        .width(Length::Shrink)
        .into()
}
