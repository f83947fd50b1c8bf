//! Header/toolbar view component.

use iced::widget::{Row, Space, button, container, row, text, text_input};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::widgets::{
    ThemeMode, chip_button_style, header_style, palette, primary_button_style,
    search_input_style, secondary_button_style,
};

/// Renders the toolbar: search, filter chip, bulk action and counters.
pub fn view_header(
    search: &str,
    unread_only: bool,
    selection_len: usize,
    unread_count: usize,
    theme_mode: ThemeMode,
) -> Element<'static, Message> {
    let title = text("Mockmail")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let search_box = text_input("Search...", search)
        .width(Length::Fixed(240.0))
        .padding([10, 16])
        .style(search_input_style)
        .on_input(Message::SearchChanged);

    let unread_chip = button(text("Unread only").size(12))
        .padding([6, 12])
        .style(chip_button_style(unread_only))
        .on_press(Message::UnreadOnlyToggled(!unread_only));

    // Only offered while something is checked.
    let mark_read: Element<'static, Message> = if selection_len > 0 {
        button(
            text(format!("Mark as Read ({selection_len})")).font(iced::Font {
                weight: iced::font::Weight::Semibold,
                ..Default::default()
            }),
        )
        .padding([10, 20])
        .style(primary_button_style)
        .on_press(Message::MarkSelectedRead)
        .into()
    } else {
        Space::new().width(0).into()
    };

    let counter = text(format!("{unread_count} unread"))
        .size(13)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        });

    let theme_icon = match theme_mode {
        ThemeMode::Dark => "\u{2600}",
        ThemeMode::Light => "\u{263E}",
    };
    let theme_btn = button(text(theme_icon).size(18).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    }))
    .padding([8, 12])
    .style(secondary_button_style)
    .on_press(Message::ToggleTheme);

    let header_content: Row<'_, Message> = row![
        title,
        Space::new().width(Length::Fill),
        search_box,
        unread_chip,
        mark_read,
        counter,
        theme_btn,
    ]
    .spacing(12)
    .padding([12, 20])
    .align_y(iced::Alignment::Center);

    container(header_content)
        .width(Length::Fill)
        .style(header_style)
        .into()
}
