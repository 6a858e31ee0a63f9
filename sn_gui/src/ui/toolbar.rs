//! Toolbar component
//!
//! Axis scale toggles and the theme switch.

use iced::widget::{button, checkbox, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use sn_core::{Axis, PlotSettings};

use crate::Message;

/// Render the application header with title (owned)
pub fn view_header_owned(window_title: String) -> Element<'static, Message> {
    row![
        text("Basquin").size(28),
        Space::new().width(Length::Fill),
        text(window_title).size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the toolbar with axis toggles and theme switch
pub fn view_toolbar(settings: &PlotSettings, dark_mode: bool) -> Element<'static, Message> {
    let axis_toggles = row![
        checkbox(settings.log_x)
            .label("Log X")
            .on_toggle(|_| Message::ToggleAxis(Axis::X))
            .text_size(11),
        checkbox(settings.log_y)
            .label("Log Y")
            .on_toggle(|_| Message::ToggleAxis(Axis::Y))
            .text_size(11),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };
    let theme_button = button(text(theme_label).size(11))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    row![
        axis_toggles,
        Space::new().width(Length::Fill),
        theme_button,
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
