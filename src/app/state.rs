use crossterm::event::{Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, spawn_lookup},
        pipeline::{LookupRequest, WeatherReport, WeatherService},
    },
    cli::{Cli, IconMode},
    error::LookupFailure,
};

mod input;

use input::{KeyCommand, key_command};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub query: String,
    pub loading_message: String,
    pub notice: Option<Notice>,
    pub report: Option<WeatherReport>,
    pub show_details: bool,
    pub icon_mode: IconMode,
    pub color: bool,
    initial_request: Option<LookupRequest>,
    action_seq: u64,
    service: WeatherService,
}

impl AppState {
    pub fn new(cli: &Cli, service: WeatherService) -> Self {
        let initial_request = if cli.here {
            Some(LookupRequest::CurrentLocation)
        } else {
            cli.initial_city()
                .map(|city| LookupRequest::City(city.to_string()))
        };

        Self {
            mode: AppMode::Idle,
            running: true,
            query: cli.initial_city().unwrap_or_default().to_string(),
            loading_message: String::new(),
            notice: None,
            report: None,
            show_details: false,
            icon_mode: cli.icon_mode(),
            color: cli.color_enabled(),
            initial_request,
            action_seq: 0,
            service,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) {
        match event {
            AppEvent::Bootstrap => {
                if let Some(request) = self.initial_request.take() {
                    self.start_lookup(tx, request);
                }
            }
            AppEvent::Input(input) => self.handle_input(&input, tx),
            AppEvent::LookupFinished { seq, outcome } => self.handle_lookup_finished(seq, outcome),
            AppEvent::Quit => self.mode = AppMode::Quit,
        }
    }

    fn handle_input(&mut self, event: &Event, tx: &mpsc::Sender<AppEvent>) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }
        let Some(command) = key_command(*key) else {
            return;
        };

        match command {
            KeyCommand::Quit => self.mode = AppMode::Quit,
            KeyCommand::Search => {
                let request = LookupRequest::City(self.query.clone());
                self.start_lookup(tx, request);
            }
            KeyCommand::UseMyLocation => self.start_lookup(tx, LookupRequest::CurrentLocation),
            KeyCommand::ToggleDetails => self.show_details = !self.show_details,
            KeyCommand::Type(ch) => self.query.push(ch),
            KeyCommand::Backspace => {
                self.query.pop();
            }
            KeyCommand::ClearQuery => self.query.clear(),
        }
    }

    /// Starts a fresh chain. Any chain still in flight is superseded and its
    /// result will be dropped.
    pub fn start_lookup(&mut self, tx: &mpsc::Sender<AppEvent>, request: LookupRequest) {
        if let LookupRequest::City(query) = &request
            && query.trim().is_empty()
        {
            self.notice = Some(Notice::new(
                NoticeLevel::Warning,
                LookupFailure::EmptyCity.to_string(),
            ));
            return;
        }

        self.action_seq = self.action_seq.wrapping_add(1);
        self.mode = AppMode::Loading;
        self.notice = None;
        self.loading_message = match &request {
            LookupRequest::City(_) => "Searching for location...".to_string(),
            LookupRequest::CurrentLocation => "Detecting your location...".to_string(),
        };
        tracing::debug!(seq = self.action_seq, ?request, "lookup started");
        spawn_lookup(tx.clone(), self.service.clone(), request, self.action_seq);
    }

    pub(crate) fn handle_lookup_finished(
        &mut self,
        seq: u64,
        outcome: Result<Box<WeatherReport>, LookupFailure>,
    ) {
        if seq != self.action_seq {
            tracing::debug!(seq, current = self.action_seq, "dropping superseded lookup");
            return;
        }

        match outcome {
            Ok(report) => {
                self.notice = Some(Notice::new(
                    NoticeLevel::Success,
                    format!("Found: {}", report.location.label),
                ));
                self.report = Some(*report);
                self.mode = AppMode::Ready;
            }
            Err(failure) => {
                let mut text = failure.to_string();
                if let LookupFailure::CityNotFound {
                    detail: Some(detail),
                    ..
                } = &failure
                {
                    text = format!("{text} ({detail})");
                }
                let level = match failure {
                    LookupFailure::EmptyCity => NoticeLevel::Warning,
                    _ => NoticeLevel::Error,
                };
                self.notice = Some(Notice::new(level, text));
                self.report = None;
                self.mode = AppMode::Error;
            }
        }
    }

    #[must_use]
    pub fn action_seq(&self) -> u64 {
        self.action_seq
    }
}

#[cfg(test)]
mod tests;
