//! Message list view component.

use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};
use mockmail_core::{InboxState, Message as Mail};

use super::short_date;
use crate::message::Message;
use crate::style::widgets::{
    message_button_style, message_list_style, message_row_active_style, message_row_border_style,
    message_row_style, palette, scrollable_style, secondary_button_style, unread_badge_style,
};

const LIST_WIDTH: f32 = 400.0;

/// Renders the filtered message list.
pub fn view_message_list(state: &InboxState, is_loading: bool) -> Element<'static, Message> {
    if is_loading {
        return view_placeholder("\u{23F3}", "Loading messages...");
    }

    let visible = state.filtered_view();
    if visible.is_empty() {
        let label = if state.filter().is_empty() {
            "No messages"
        } else {
            "No messages match"
        };
        return view_placeholder("\u{1F4ED}", label);
    }

    let active = state.active_id();
    let rows: Vec<Element<'static, Message>> = visible
        .into_iter()
        .map(|msg| {
            view_message_row(
                msg,
                active == Some(&msg.id),
                state.is_selected(&msg.id),
            )
        })
        .collect();

    container(
        scrollable(Column::with_children(rows))
            .height(Length::Fill)
            .style(scrollable_style),
    )
    .width(Length::Fixed(LIST_WIDTH))
    .height(Length::Fill)
    .style(message_list_style)
    .into()
}

/// Centered icon and label filling the list pane.
fn view_placeholder(icon: &'static str, label: &'static str) -> Element<'static, Message> {
    container(
        column![
            text(icon).size(48),
            text(label).size(16).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_secondary),
                }
            }),
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fixed(LIST_WIDTH))
    .height(Length::Fill)
    .center_x(Length::Fixed(LIST_WIDTH))
    .center_y(Length::Fill)
    .style(message_list_style)
    .into()
}

/// Renders one list item: check toggle plus a clickable summary.
fn view_message_row(msg: &Mail, is_active: bool, is_checked: bool) -> Element<'static, Message> {
    let check_icon = if is_checked { "\u{2611}" } else { "\u{2610}" };
    let check = button(text(check_icon).size(16).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    }))
    .padding([6, 8])
    .style(secondary_button_style)
    .on_press(Message::SelectionToggled(msg.id.clone(), !is_checked));

    let from = text(truncate(&msg.from, 36))
        .size(14)
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

    let badge: Element<'static, Message> = if msg.is_unread() {
        container(text("Unread").size(10))
            .padding([2, 6])
            .style(unread_badge_style)
            .into()
    } else {
        Space::new().width(0).into()
    };

    let date = text(msg.date.map(short_date).unwrap_or_default())
        .size(12)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_muted),
            }
        });

    let subject = text(truncate(&msg.subject, 48))
        .size(13)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        });

    let header_row = row![from, badge, Space::new().width(Length::Fill), date]
        .spacing(6)
        .align_y(iced::Alignment::Center);

    let summary = button(column![header_row, subject].spacing(4).padding([10, 12]))
        .width(Length::Fill)
        .padding(0)
        .style(message_button_style)
        .on_press(Message::OpenMessage(msg.id.clone()));

    let row_style = if is_active {
        message_row_active_style
    } else {
        message_row_style
    };

    let item = row![check, summary]
        .spacing(4)
        .padding([0, 6])
        .align_y(iced::Alignment::Center);

    container(container(item).style(row_style))
        .style(message_row_border_style)
        .into()
}

/// Truncates a string to a maximum length with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
