//! Form rows: a fixed-width label followed by an input.

use iced::widget::{pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use sn_core::inputs::FormField;

use crate::Message;

const LABEL_WIDTH: f32 = 90.0;

/// Text input row for a numeric form field
pub fn field_input<'a>(
    field: FormField,
    value: &'a str,
    on_change: impl Fn(FormField, String) -> Message + 'a,
) -> Element<'a, Message> {
    labeled_input(field.label(), value, move |v| on_change(field, v))
}

pub fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Pick list row over a fixed set of options
pub fn labeled_pick_list<'a, T>(
    label: &'a str,
    options: &'a [T],
    selected: T,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
{
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        pick_list(options, Some(selected), on_select)
            .width(Length::Fill)
            .text_size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
