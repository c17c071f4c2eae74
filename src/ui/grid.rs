// SPDX-License-Identifier: MPL-2.0
//! The photo wall: one clickable tile per catalog entry in display order,
//! followed by a single non-interactive coming-soon tile.

use crate::gallery::{Gallery, Tile};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

/// Tiles per grid row.
const GRID_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A tile at this display index was clicked or tapped.
    TileActivated(usize),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the heading and the tile grid.
pub fn view<'a>(ctx: &ViewContext<'a>, gallery: &'a Gallery) -> Element<'a, Message> {
    let mut tiles: Vec<Element<'a, Message>> = Vec::with_capacity(gallery.len() + 1);
    for (index, tile) in gallery.tiles().iter().enumerate() {
        tiles.push(image_tile(index, tile));
    }
    tiles.push(coming_soon_tile(ctx));

    let mut grid = Column::new().spacing(spacing::SM);
    let mut row = Row::new().spacing(spacing::SM);
    let mut in_row = 0;
    for tile in tiles {
        row = row.push(tile);
        in_row += 1;
        if in_row == GRID_COLUMNS {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::SM);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("gallery-heading")).size(typography::TITLE_MD))
        .push(grid)
        .into()
}

fn image_tile<'a>(index: usize, tile: &'a Tile) -> Element<'a, Message> {
    let content: Element<'a, Message> = match tile.image() {
        Some(data) => image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        // Load still pending: neutral surface until the image (or its
        // fallback) resolves.
        None => Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::tile_loading)
            .into(),
    };

    button(
        Container::new(content)
            .width(Length::Fixed(sizing::TILE_SIZE))
            .height(Length::Fixed(sizing::TILE_SIZE)),
    )
    .padding(0)
    .style(styles::button::tile)
    .on_press(Message::TileActivated(index))
    .into()
}

fn coming_soon_tile<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new("♥").size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("gallery-coming-soon-title")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("gallery-coming-soon-subtitle")).size(typography::CAPTION));

    Container::new(column)
        .width(Length::Fixed(sizing::TILE_SIZE))
        .height(Length::Fixed(sizing::TILE_SIZE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::coming_soon)
        .into()
}
