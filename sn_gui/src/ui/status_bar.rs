//! Status Bar (Bottom)
//!
//! Displays:
//! - Curve count and axis scales
//! - Chat endpoint
//! - Status messages

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use sn_core::{Axis, PlotSettings};

use crate::Message;

fn scale_name(settings: &PlotSettings, axis: Axis) -> &'static str {
    if settings.is_log(axis) {
        "log"
    } else {
        "linear"
    }
}

/// Render the status bar
pub fn view_status_bar<'a>(
    curve_count: usize,
    settings: &PlotSettings,
    chat_endpoint: &'a str,
    status: &'a str,
) -> Element<'a, Message> {
    let plot_info = format!(
        "{} curve(s) | x: {} | y: {}",
        curve_count,
        scale_name(settings, Axis::X),
        scale_name(settings, Axis::Y),
    );

    row![
        text(plot_info).size(10),
        Space::new().width(16),
        text(format!("Chat: {}", chat_endpoint)).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
