//! Curve Panel (Left Sidebar)
//!
//! Displays:
//! - The "Add Curve" form (Basquin parameters, cycle range, mean stress)
//! - Add / Clear buttons
//! - Summary line for each plotted curve

use iced::widget::{button, column, container, row, rule, scrollable, text, Column, Space};
use iced::{Element, Length, Padding};

use sn_core::inputs::CurveForm;
use sn_core::MeanStressModel;

use super::shared::form::{field_input, labeled_pick_list};
use crate::{App, Message};

/// Render the curve panel
pub fn view(app: &App, width: f32) -> Element<'_, Message> {
    let form = &app.curve_form;

    let mut inputs: Column<'_, Message> = column![text("Add Curve").size(14)].spacing(6);
    for field in CurveForm::FIELDS.iter().take(4) {
        let value = form.get(*field).unwrap_or("");
        inputs = inputs.push(field_input(*field, value, Message::CurveFieldChanged));
    }

    inputs = inputs.push(Space::new().height(4));
    inputs = inputs.push(labeled_pick_list(
        "Mean stress:",
        &MeanStressModel::ALL[..],
        form.model,
        Message::CurveModelSelected,
    ));
    for field in CurveForm::FIELDS.iter().skip(4) {
        let value = form.get(*field).unwrap_or("");
        inputs = inputs.push(field_input(*field, value, Message::CurveFieldChanged));
    }

    let actions = row![
        button(text("Add Curve").size(11))
            .on_press(Message::AddCurve)
            .padding(Padding::from([4, 8]))
            .style(button::primary),
        button(text("Clear").size(11))
            .on_press(Message::ClearCurves)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .spacing(4);

    let panel_content = column![
        inputs,
        Space::new().height(4),
        actions,
        Space::new().height(6),
        rule::horizontal(1),
        view_curve_list(app),
    ]
    .spacing(6)
    .padding(4);

    container(scrollable(panel_content))
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}

fn view_curve_list(app: &App) -> Element<'_, Message> {
    let summaries = app.state.curve_summaries();
    let mut list: Column<'_, Message> = column![
        text(format!("Curves ({})", summaries.len())).size(11),
    ]
    .spacing(2);

    if summaries.is_empty() {
        list = list.push(text("(none)").size(10).color([0.5, 0.5, 0.5]));
    }
    for summary in summaries {
        list = list.push(text(summary).size(10));
    }

    list.padding(Padding::from([4, 0])).into()
}
