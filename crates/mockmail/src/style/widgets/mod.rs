//! Widget styles for the inbox views.

#![allow(clippy::needless_update)]

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use palette::ThemeMode;

pub use buttons::{
    chip_button_style, message_button_style, primary_button_style, secondary_button_style,
};
pub use containers::{
    divider_style, error_banner_style, header_style, message_content_style, message_list_style,
    message_row_active_style, message_row_border_style, message_row_style, unread_badge_style,
};
pub use inputs::{scrollable_style, search_input_style};
