// SPDX-License-Identifier: MPL-2.0
//! Gallery grid view: the quilt of block tiles.

use crate::cells::CellGrid;
use crate::i18n::fluent::I18n;
use crate::quilt::Block;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::effects;
use crate::ui::gallery::component::Message;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, scrollable, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the gallery grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub struct ViewModel<'a> {
    pub title: &'a str,
    pub blocks: &'a [Block],
    pub focused: Option<usize>,
    pub effects: &'a effects::State,
    pub viewport_width: f32,
    /// While the modal is open the grid loses its scrollable wrapper.
    pub scroll_locked: bool,
}

/// Render the gallery grid.
pub fn view<'a>(ctx: &ViewContext<'a>, model: &ViewModel<'a>) -> Element<'a, Message> {
    if model.blocks.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY_MD))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into();
    }

    let header = Container::new(Text::new(model.title.to_owned()).size(typography::TITLE_LG))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center);

    let columns = ((model.viewport_width / (sizing::BLOCK_TILE + spacing::LG)).floor() as usize)
        .max(1)
        .min(model.blocks.len());

    let mut grid = Column::new().spacing(spacing::LG);
    for (row_index, row_blocks) in model.blocks.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::LG);
        for (col_index, block) in row_blocks.iter().enumerate() {
            let index = row_index * columns + col_index;
            row = row.push(block_tile(index, block, model));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .push(header)
        .push(
            Container::new(grid)
                .width(Length::Fill)
                .padding(spacing::LG)
                .align_x(Horizontal::Center),
        )
        .width(Length::Fill);

    if model.scroll_locked {
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// One keyboard-activatable block tile.
fn block_tile<'a>(index: usize, block: &'a Block, model: &ViewModel<'a>) -> Element<'a, Message> {
    let reveal = model.effects.block_reveal(index);
    let hover = model.effects.hover_scale(index);
    let focused = model.focused == Some(index);

    let grid = cell_grid(&block.grid, sizing::BLOCK_TILE, move |_| reveal);

    let label = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(grid)
        .push(Text::new(block.name.clone()).size(typography::BODY_MD));

    // Hover shrinks the tile padding so the grid appears to scale up.
    let tile = button(label)
        .padding(spacing::XS - 2.0 * hover)
        .style(styles::button::block_tile(focused))
        .on_press(Message::BlockPressed(index));

    mouse_area(tile)
        .on_enter(Message::BlockHovered(index))
        .on_exit(Message::BlockUnhovered)
        .into()
}

/// Builds an N×N grid of decorative cells, `side` logical pixels on each
/// side. `reveal` maps a 1-based cell identifier to its entrance alpha.
pub fn cell_grid<'a, Message: 'a>(
    grid: &CellGrid,
    side: f32,
    reveal: impl Fn(u32) -> f32,
) -> Element<'a, Message> {
    let size = grid.size().max(1) as usize;
    let cell_side = (side - spacing::XXS * (size as f32 - 1.0)) / size as f32;

    let mut column = Column::new().spacing(spacing::XXS);
    for row_cells in grid.cells().chunks(size) {
        let mut row = Row::new().spacing(spacing::XXS);
        for cell in row_cells {
            row = row.push(
                Container::new(Space::new())
                    .width(Length::Fixed(cell_side))
                    .height(Length::Fixed(cell_side))
                    .style(styles::container::cell(cell.index, reveal(cell.index))),
            );
        }
        column = column.push(row);
    }
    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quilt::QuiltDocument;

    fn loaded_document() -> QuiltDocument {
        QuiltDocument::load_embedded().expect("embedded gallery should parse")
    }

    #[test]
    fn grid_view_renders() {
        let i18n = I18n::default();
        let document = loaded_document();
        let effects = effects::State::new(document.block_count(), false);
        let ctx = ViewContext { i18n: &i18n };
        let model = ViewModel {
            title: &document.title,
            blocks: &document.blocks,
            focused: Some(1),
            effects: &effects,
            viewport_width: 1280.0,
            scroll_locked: false,
        };
        let _element = view(&ctx, &model);
    }

    #[test]
    fn grid_view_renders_empty_gallery() {
        let i18n = I18n::default();
        let effects = effects::State::new(0, false);
        let ctx = ViewContext { i18n: &i18n };
        let model = ViewModel {
            title: "",
            blocks: &[],
            focused: None,
            effects: &effects,
            viewport_width: 640.0,
            scroll_locked: false,
        };
        let _element = view(&ctx, &model);
    }

    #[test]
    fn grid_view_renders_when_scroll_locked() {
        let i18n = I18n::default();
        let document = loaded_document();
        let effects = effects::State::new(document.block_count(), false);
        let ctx = ViewContext { i18n: &i18n };
        let model = ViewModel {
            title: &document.title,
            blocks: &document.blocks,
            focused: None,
            effects: &effects,
            viewport_width: 480.0,
            scroll_locked: true,
        };
        let _element = view(&ctx, &model);
    }

    #[test]
    fn cell_grid_emits_one_element_per_cell() {
        let grid = CellGrid::generate(3);
        // Rendering is structural; this mostly guards against panics on odd sizes.
        let _element: Element<'_, Message> = cell_grid(&grid, 120.0, |_| 1.0);
    }
}
