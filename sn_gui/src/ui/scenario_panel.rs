//! Scenario Panel (Right, top)
//!
//! Single-point calculator: uses Sf', b, Sm, Su and Sy from the curve form
//! plus its own target life, diameter, surface finish and model.

use iced::widget::{button, column, container, text, Column, Space};
use iced::{Element, Length, Padding};

use sn_core::inputs::ScenarioForm;
use sn_core::scenario::{ScenarioResult, SurfaceFinish};
use sn_core::MeanStressModel;

use super::shared::form::{field_input, labeled_pick_list};
use crate::{App, Message};

pub fn view(app: &App) -> Element<'_, Message> {
    let form = &app.scenario_form;

    let mut inputs: Column<'_, Message> = column![text("Scenario").size(14)].spacing(6);
    for field in ScenarioForm::FIELDS {
        let value = form.get(field).unwrap_or("");
        inputs = inputs.push(field_input(field, value, Message::ScenarioFieldChanged));
    }
    inputs = inputs.push(labeled_pick_list(
        "Finish:",
        &SurfaceFinish::ALL[..],
        form.finish,
        Message::FinishSelected,
    ));
    inputs = inputs.push(labeled_pick_list(
        "Mean stress:",
        &MeanStressModel::ALL[..],
        form.model,
        Message::ScenarioModelSelected,
    ));

    let compute = button(text("Compute").size(11))
        .on_press(Message::ComputeScenario)
        .padding(Padding::from([4, 8]))
        .style(button::primary);

    let results: Element<'_, Message> = match &app.state.scenario {
        Some(result) => view_result(result),
        None => text("Sf', b, Sm, Su and Sy come from the curve form")
            .size(10)
            .color([0.5, 0.5, 0.5])
            .into(),
    };

    let content = column![inputs, Space::new().height(4), compute, Space::new().height(6), results]
        .spacing(4)
        .padding(4);

    container(content)
        .width(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}

fn view_result(result: &ScenarioResult) -> Element<'_, Message> {
    let ratio = if result.stress_ratio.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.3}", result.stress_ratio)
    };

    column![
        text(format!("Sa0 = {:.2} MPa", result.stress_amplitude_base)).size(11),
        text(format!(
            "Mean-stress factor = {:.3} -> {:.2} MPa",
            result.mean_stress_factor, result.stress_amplitude_corrected
        ))
        .size(11),
        text(format!(
            "k_surface = {:.2}, k_size = {:.3}",
            result.surface_factor, result.size_factor
        ))
        .size(11),
        text(format!("Sa = {:.2} MPa", result.stress_amplitude_adjusted)).size(12),
        text(format!(
            "Smax = {:.2}, Smin = {:.2}, R = {}",
            result.max_stress, result.min_stress, ratio
        ))
        .size(11),
    ]
    .spacing(2)
    .into()
}
