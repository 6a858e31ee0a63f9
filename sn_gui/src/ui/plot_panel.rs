//! Plot Panel (Center)
//!
//! Hosts the S-N canvas. The plot is re-laid out for the canvas bounds on
//! every draw, so resizing the window rescales it.

use iced::widget::{container, Canvas};
use iced::{Element, Length};

use sn_core::AppState;

use super::shared::sn_plot::SnPlot;
use crate::Message;

pub fn view(state: &AppState) -> Element<'_, Message> {
    let canvas = Canvas::new(SnPlot::new(state))
        .width(Length::Fill)
        .height(Length::Fill);

    container(canvas)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(2)
        .into()
}
