//! Message content view component.

use iced::widget::{Column, column, container, row, scrollable, text};
use iced::{Element, Length};
use mockmail_core::Message as Mail;

use super::long_date;
use crate::message::Message;
use crate::style::widgets::{divider_style, message_content_style, palette, scrollable_style};

/// Renders the detail pane for the active message.
pub fn view_message_content(content: Option<&Mail>) -> Element<'static, Message> {
    content.map_or_else(view_empty, view_message)
}

/// Renders empty state when no message is active.
fn view_empty() -> Element<'static, Message> {
    container(
        column![
            text("\u{1F4E7}").size(64),
            text("Nothing Selected").size(16).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_secondary),
                }
            }),
        ]
        .spacing(16)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .style(message_content_style)
    .into()
}

fn view_message(msg: &Mail) -> Element<'static, Message> {
    let subject = text(msg.subject.clone())
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_primary),
            }
        });

    let mut fields: Vec<Element<'static, Message>> = vec![
        view_field_row("From", &msg.from),
        subject.into(),
        view_field_row("To", &msg.to),
    ];
    if let Some(date) = msg.date {
        fields.push(view_field_row("Date", &long_date(date)));
    }

    let divider = container(text(""))
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(divider_style);

    let body = text(msg.body.clone()).size(14).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_primary),
        }
    });

    let content = column![
        Column::with_children(fields).spacing(8),
        divider,
        scrollable(container(body).width(Length::Fill))
            .height(Length::Fill)
            .style(scrollable_style),
    ]
    .spacing(16)
    .padding([20, 24])
    .width(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(message_content_style)
        .into()
}

/// Helper to create a field row (label: value).
fn view_field_row(label: &str, value: &str) -> Element<'static, Message> {
    let label_text = text(format!("{label}:"))
        .size(13)
        .font(iced::Font {
            weight: iced::font::Weight::Medium,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_muted),
            }
        });

    let value_text = text(value.to_string()).size(13).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_primary),
        }
    });

    row![container(label_text).width(Length::Fixed(50.0)), value_text]
        .spacing(8)
        .align_y(iced::Alignment::Start)
        .into()
}
