//! View components for the application.

mod header;
mod message_list;
mod message_view;

use chrono::{DateTime, Local, Utc};
use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::widgets::{error_banner_style, secondary_button_style};

pub use header::view_header;
pub use message_list::view_message_list;
pub use message_view::view_message_content;

/// Banner shown under the header when loading or saving failed.
pub fn view_error_banner(error: &str) -> Element<'static, Message> {
    let dismiss = button(text("\u{2715}").size(14))
        .padding([4, 10])
        .style(secondary_button_style)
        .on_press(Message::DismissError);

    container(
        row![
            text(error.to_string()).size(13),
            Space::new().width(Length::Fill),
            dismiss
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .padding([8, 20])
    .style(error_banner_style)
    .into()
}

/// Date as shown in list rows, in local time.
fn short_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%b %-d").to_string()
}

/// Date as shown in the detail pane, in local time.
fn long_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local)
        .format("%a, %b %-d %Y %H:%M")
        .to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_short_date_has_month_and_day() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let formatted = short_date(date);
        assert!(formatted.starts_with("Mar 1"));
        assert!(!formatted.contains("2024"));
    }

    #[test]
    fn test_long_date_includes_year() {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let formatted = long_date(date);
        assert!(formatted.contains("Mar 1"));
        assert!(formatted.contains("2024"));
    }
}
