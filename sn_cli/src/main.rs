//! # Basquin CLI Application
//!
//! Terminal front-end: prompts for curves and a scenario (blank input keeps
//! the bracketed default), prints sampled tables and the scenario result,
//! then the plot context as JSON.

use std::io::{self, BufRead, Write};

use sn_core::inputs::{CurveForm, FormField, ScenarioForm};
use sn_core::scenario::{ScenarioResult, SurfaceFinish};
use sn_core::{AppState, Axis, Command, FatigueError, MeanStressModel, SnCurve};

/// Rows printed per curve table (every 30th of the 301 samples)
const TABLE_STRIDE: usize = 30;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Prompt for a form field; the raw text is kept so the form's own
/// default policy applies.
fn prompt_field(field: FormField, current: &str) -> String {
    let prompt = format!("{} [{}]: ", field.label().trim_end_matches(':'), current);
    match prompt_line(&prompt) {
        Some(raw) if !raw.is_empty() => {
            if let Err(e) = field.parse_strict(&raw) {
                log::warn!("{}; using {}", e, field.default_value());
            }
            raw
        }
        _ => current.to_string(),
    }
}

fn prompt_model(current: MeanStressModel) -> MeanStressModel {
    let prompt = format!(
        "Mean stress model (none/goodman/gerber/soderberg) [{}]: ",
        current.code()
    );
    match prompt_line(&prompt) {
        Some(raw) if !raw.is_empty() => {
            MeanStressModel::from_str_flexible(&raw).unwrap_or_else(|e| {
                eprintln!("{}", e);
                current
            })
        }
        _ => current,
    }
}

fn prompt_finish(current: SurfaceFinish) -> SurfaceFinish {
    let prompt = format!(
        "Surface finish (polished/ground/machined/hot_rolled/as_forged) [{}]: ",
        current.code()
    );
    match prompt_line(&prompt) {
        Some(raw) if !raw.is_empty() => SurfaceFinish::from_str_flexible(&raw).unwrap_or_else(|e| {
            eprintln!("{}", e);
            current
        }),
        _ => current,
    }
}

fn prompt_yes_no(prompt: &str, default: bool) -> bool {
    let hint = if default { "Y/n" } else { "y/N" };
    match prompt_line(&format!("{} [{}]: ", prompt, hint)) {
        Some(raw) => match raw.to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        },
        None => default,
    }
}

fn prompt_curve_form(form: &mut CurveForm) {
    for field in CurveForm::FIELDS.iter().take(4) {
        let value = prompt_field(*field, form.get(*field).unwrap_or(""));
        form.set(*field, value);
    }
    form.model = prompt_model(form.model);
    if form.model != MeanStressModel::None {
        for field in CurveForm::FIELDS.iter().skip(4) {
            let value = prompt_field(*field, form.get(*field).unwrap_or(""));
            form.set(*field, value);
        }
    }
}

fn main() {
    env_logger::init();

    println!("Basquin CLI - S-N Fatigue Curves");
    println!("================================");
    println!();

    let mut state = AppState::default();
    let mut form = CurveForm::default();

    loop {
        println!("Curve #{}", state.curves.len() + 1);
        prompt_curve_form(&mut form);
        state = state.apply(Command::AddCurve(form.to_curve()));
        println!();
        if !prompt_yes_no("Add another curve?", false) {
            break;
        }
        println!();
    }

    for axis in [Axis::X, Axis::Y] {
        let log = prompt_yes_no(&format!("Logarithmic {} axis?", axis), true);
        state = state.apply(Command::SetAxisLog(axis, log));
    }
    println!();

    println!("═══════════════════════════════════════");
    println!("  S-N CURVES");
    println!("═══════════════════════════════════════");
    for (idx, curve) in state.curves.iter().enumerate() {
        println!();
        println!("{}", curve.summary(idx));
        print_curve_table(curve);
    }

    let ext = state.extents();
    println!();
    println!(
        "Extents: N = [{:.0}, {:.0}], Sa = [{:.2}, {:.2}] MPa",
        ext.x_min, ext.x_max, ext.y_min, ext.y_max
    );
    println!();

    if prompt_yes_no("Run a scenario with the last curve's parameters?", true) {
        let mut scenario_form = ScenarioForm::default();
        for field in ScenarioForm::FIELDS {
            let value = prompt_field(field, scenario_form.get(field).unwrap_or(""));
            scenario_form.set(field, value);
        }
        scenario_form.finish = prompt_finish(scenario_form.finish);
        scenario_form.model = prompt_model(form.model);

        state = state.apply(Command::ComputeScenario(scenario_form.to_input(&form)));
        if let Some(result) = &state.scenario {
            print_scenario(result);
        }
    }

    println!();
    println!("JSON Output (for LLM/API use):");
    match serde_json::to_string_pretty(&state.context()) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            let e = FatigueError::from(e);
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{}", json);
            }
        }
    }
}

fn print_curve_table(curve: &SnCurve) {
    println!("  {:>14}  {:>12}", "N (cycles)", "Sa (MPa)");
    println!("  {:>14}  {:>12}", "----------", "--------");
    for point in curve.samples().step_by(TABLE_STRIDE) {
        println!("  {:>14.0}  {:>12.2}", point.n_cycles, point.sa_mpa);
    }
}

fn print_scenario(result: &ScenarioResult) {
    let ratio = if result.stress_ratio.is_nan() {
        "n/a".to_string()
    } else {
        format!("{:.3}", result.stress_ratio)
    };

    println!();
    println!("═══════════════════════════════════════");
    println!("  SCENARIO AT Nf = {:.0}", result.inputs.target_life);
    println!("═══════════════════════════════════════");
    println!("  Sa0 (Basquin):      {:.2} MPa", result.stress_amplitude_base);
    println!(
        "  Mean stress ({}):  x{:.3} -> {:.2} MPa",
        result.inputs.model.code(),
        result.mean_stress_factor,
        result.stress_amplitude_corrected
    );
    println!(
        "  Surface ({}):  x{:.2}",
        result.inputs.finish.code(),
        result.surface_factor
    );
    println!(
        "  Size (d = {} mm):  x{:.3}",
        result.inputs.diameter_mm, result.size_factor
    );
    println!("  Sa (adjusted):      {:.2} MPa", result.stress_amplitude_adjusted);
    println!(
        "  Smax = {:.2}, Smin = {:.2}, R = {}{}",
        result.max_stress,
        result.min_stress,
        ratio,
        if result.is_fully_reversed() { " (fully reversed)" } else { "" }
    );
}
