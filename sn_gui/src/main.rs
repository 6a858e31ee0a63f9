//! # Basquin GUI Application
//!
//! Interactive S-N curve plotter with a single-point scenario calculator and
//! a chat panel that sends the on-screen state to a remote assistant.
//! Built with Iced framework for cross-platform support (Windows, macOS, Linux, WASM).

use iced::widget::{column, container, row, rule};
use iced::{Element, Length, Task, Theme};

use sn_core::chat::{
    clamp_context, failure_text, ChatReply, ChatRequest, ChatTranscript, Sender,
    DEFAULT_CONTEXT_CHARS,
};
use sn_core::inputs::{CurveForm, FormField, ScenarioForm};
use sn_core::scenario::SurfaceFinish;
use sn_core::{AppState, Axis, Command, FatigueResult, MeanStressModel};

mod chat_client;
mod config;
mod ui;

use config::ChatConfig;

/// Width of the left (curve form) panel
const CURVE_PANEL_WIDTH: f32 = 280.0;

/// Width of the right (scenario + chat) panel
const SIDE_PANEL_WIDTH: f32 = 340.0;

/// Status after a transport failure
const RETRY_STATUS: &str = "Chat endpoint unreachable, send again to retry";

pub fn main() -> iced::Result {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(iced::Size::new(1360.0, 820.0))
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    // Curve form
    CurveFieldChanged(FormField, String),
    CurveModelSelected(MeanStressModel),
    AddCurve,
    ClearCurves,

    // Axes
    ToggleAxis(Axis),

    // Scenario
    ScenarioFieldChanged(FormField, String),
    FinishSelected(SurfaceFinish),
    ScenarioModelSelected(MeanStressModel),
    ComputeScenario,

    // Chat
    ChatInputChanged(String),
    SendChat,
    ChatReplied(FatigueResult<ChatReply>),

    // Settings
    ToggleDarkMode,
}

pub struct App {
    /// Curves, axis settings and last scenario
    pub state: AppState,

    pub curve_form: CurveForm,
    pub scenario_form: ScenarioForm,

    pub chat_input: String,
    pub transcript: ChatTranscript,
    /// A chat request is in flight
    pub chat_pending: bool,
    pub chat_config: ChatConfig,

    pub dark_mode: bool,
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            state: AppState::default(),
            curve_form: CurveForm::default(),
            scenario_form: ScenarioForm::default(),
            chat_input: String::new(),
            transcript: ChatTranscript::default(),
            chat_pending: false,
            chat_config: ChatConfig::from_env(),
            dark_mode: true,
            status: "Ready".to_string(),
        }
    }
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let app = Self::default();
        log::info!("Chat endpoint: {}", app.chat_config.endpoint);
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.state.curves.len() {
            0 => "Basquin - S-N Curves".to_string(),
            1 => "Basquin - 1 curve".to_string(),
            n => format!("Basquin - {} curves", n),
        }
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Route a state change through the core command handler
    fn dispatch(&mut self, command: Command) {
        self.state = std::mem::take(&mut self.state).apply(command);
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CurveFieldChanged(field, value) => {
                self.curve_form.set(field, value);
            }
            Message::CurveModelSelected(model) => {
                self.curve_form.model = model;
            }
            Message::AddCurve => {
                let curve = self.curve_form.to_curve();
                self.dispatch(Command::AddCurve(curve));
                self.status = format!("Added curve #{}", self.state.curves.len());
                log::info!("{}", curve.summary(self.state.curves.len() - 1));
            }
            Message::ClearCurves => {
                self.dispatch(Command::ClearCurves);
                self.status = "Cleared all curves".to_string();
            }
            Message::ToggleAxis(axis) => {
                self.dispatch(Command::ToggleAxis(axis));
                let scale = if self.state.settings.is_log(axis) { "log" } else { "linear" };
                self.status = format!("{} axis: {}", axis, scale);
            }
            Message::ScenarioFieldChanged(field, value) => {
                self.scenario_form.set(field, value);
            }
            Message::FinishSelected(finish) => {
                self.scenario_form.finish = finish;
            }
            Message::ScenarioModelSelected(model) => {
                self.scenario_form.model = model;
            }
            Message::ComputeScenario => {
                let input = self.scenario_form.to_input(&self.curve_form);
                self.dispatch(Command::ComputeScenario(input));
                if let Some(result) = &self.state.scenario {
                    self.status = format!(
                        "Scenario: Sa = {:.2} MPa at Nf = {}",
                        result.stress_amplitude_adjusted, result.inputs.target_life
                    );
                }
            }
            Message::ChatInputChanged(value) => {
                self.chat_input = value;
            }
            Message::SendChat => {
                if self.chat_pending {
                    return Task::none();
                }
                let Some(request) = ChatRequest::new(&self.chat_input, self.state.context()) else {
                    return Task::none();
                };

                log::info!("Sending chat message ({} curves)", request.context.curves.len());
                log::debug!(
                    "Chat context: {}",
                    clamp_context(&request.context, DEFAULT_CONTEXT_CHARS)
                );
                self.transcript.push(Sender::Me, request.message.clone());
                self.chat_input.clear();
                self.chat_pending = true;
                self.status = "Waiting for reply...".to_string();

                return Task::perform(
                    chat_client::send(self.chat_config.clone(), request),
                    Message::ChatReplied,
                );
            }
            Message::ChatReplied(result) => {
                self.chat_pending = false;
                self.status = "Ready".to_string();
                let text = match result {
                    Ok(reply) => {
                        if let ChatReply::Error(ref error) = reply {
                            log::warn!("Chat endpoint error: {}", error);
                        }
                        reply.display_text()
                    }
                    Err(e) => {
                        log::warn!("Chat request failed: {}", e);
                        if e.is_recoverable() {
                            self.status = RETRY_STATUS.to_string();
                        }
                        failure_text(&e)
                    }
                };
                self.transcript.push(Sender::Bot, text);
            }
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header_owned(self.title());
        let toolbar = ui::toolbar::view_toolbar(&self.state.settings, self.dark_mode);

        let side_panel = column![
            ui::scenario_panel::view(self),
            ui::chat_panel::view(self),
        ]
        .spacing(8)
        .width(Length::Fixed(SIDE_PANEL_WIDTH))
        .height(Length::Fill);

        let main_content = row![
            ui::curve_panel::view(self, CURVE_PANEL_WIDTH),
            ui::plot_panel::view(&self.state),
            side_panel,
        ]
        .spacing(8)
        .height(Length::Fill);

        let status_bar = ui::status_bar::view_status_bar(
            self.state.curves.len(),
            &self.state.settings,
            &self.chat_config.endpoint,
            &self.status,
        );

        let content = column![
            header,
            toolbar,
            rule::horizontal(1),
            main_content,
            rule::horizontal(1),
            status_bar,
        ]
        .spacing(6)
        .padding(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
