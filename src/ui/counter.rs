// SPDX-License-Identifier: MPL-2.0
//! Anniversary counter: four labeled fields kept current by the tick.

use crate::elapsed::Breakdown;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Renders the heading plus the day/hour/minute/second boxes.
pub fn view<'a, Message: 'a>(ctx: &ViewContext<'_>, breakdown: &Breakdown) -> Element<'a, Message> {
    let fields = [
        (breakdown.days, ctx.i18n.tr("counter-days")),
        (breakdown.hours, ctx.i18n.tr("counter-hours")),
        (breakdown.minutes, ctx.i18n.tr("counter-minutes")),
        (breakdown.seconds, ctx.i18n.tr("counter-seconds")),
    ];

    let mut row = Row::new().spacing(spacing::MD);
    for (value, label) in fields {
        row = row.push(field_box(value, label));
    }

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("counter-heading")).size(typography::TITLE_MD))
        .push(row)
        .into()
}

fn field_box<'a, Message: 'a>(value: i64, label: String) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(value.to_string()).size(typography::TITLE_LG))
        .push(Text::new(label).size(typography::BODY));

    Container::new(column)
        .width(Length::Fixed(sizing::COUNTER_BOX_WIDTH))
        .padding(spacing::SM)
        .align_x(Horizontal::Center)
        .style(styles::container::counter_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_view_renders() {
        let i18n = I18n::default();
        let breakdown = Breakdown {
            days: 1,
            hours: 1,
            minutes: 2,
            seconds: 3,
        };
        let _element: Element<'_, ()> = view(&ViewContext { i18n: &i18n }, &breakdown);
    }
}
