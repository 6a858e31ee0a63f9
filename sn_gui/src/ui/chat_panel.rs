//! Chat Panel (Right, bottom)
//!
//! Transcript plus a message box. Each message is sent with the current
//! curves, axis settings and scenario result.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Column};
use iced::{Alignment, Element, Length, Padding};

use sn_core::chat::{ChatMessage, Sender};

use crate::{App, Message};

pub fn view(app: &App) -> Element<'_, Message> {
    let mut transcript: Column<'_, Message> = column![].spacing(6);
    if app.transcript.is_empty() {
        transcript = transcript.push(
            text("Ask about the plotted curves or the scenario result")
                .size(10)
                .color([0.5, 0.5, 0.5]),
        );
    }
    for entry in &app.transcript.messages {
        transcript = transcript.push(view_entry(entry));
    }
    if app.chat_pending {
        transcript = transcript.push(text("...").size(11).color([0.5, 0.5, 0.5]));
    }

    let input = text_input("Type a message", &app.chat_input)
        .on_input(Message::ChatInputChanged)
        .on_submit(Message::SendChat)
        .padding(4)
        .size(11)
        .width(Length::Fill);

    let send = button(text("Send").size(11))
        .on_press_maybe((!app.chat_pending).then_some(Message::SendChat))
        .padding(Padding::from([4, 8]))
        .style(button::primary);

    let content = column![
        text("Chat").size(14),
        scrollable(transcript.padding(Padding::from([0, 4]))).height(Length::Fill),
        row![input, send].spacing(4).align_y(Alignment::Center),
    ]
    .spacing(6)
    .padding(4);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}

fn view_entry(entry: &ChatMessage) -> Element<'_, Message> {
    let (who, color): (&str, [f32; 3]) = match entry.sender {
        Sender::Me => ("Me", [0.4, 0.6, 0.9]),
        Sender::Bot => ("Bot", [0.6, 0.8, 0.5]),
    };

    column![
        row![
            text(who).size(10).color(color),
            text(entry.sent_at.format("%H:%M").to_string()).size(9).color([0.5, 0.5, 0.5]),
        ]
        .spacing(6),
        text(&entry.text).size(11),
    ]
    .spacing(1)
    .into()
}
