use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::*;
use crate::{
    domain::novelty::NoveltyContent,
    error::LookupError,
    test_support::{sample_report, unreachable_service},
};

fn state_for(args: &[&str]) -> AppState {
    let mut argv = vec!["weather-predictor"];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv);
    AppState::new(&cli, unreachable_service(NoveltyContent::default()))
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn ctrl(ch: char) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(
        KeyCode::Char(ch),
        KeyModifiers::CONTROL,
    )))
}

#[test]
fn typing_edits_the_query() {
    let mut state = state_for(&[]);
    let (tx, _rx) = mpsc::channel(8);

    for ch in "Oslo!".chars() {
        state.handle_event(key(KeyCode::Char(ch)), &tx);
    }
    assert_eq!(state.query, "Oslo");

    state.handle_event(key(KeyCode::Backspace), &tx);
    assert_eq!(state.query, "Osl");

    state.handle_event(ctrl('u'), &tx);
    assert!(state.query.is_empty());
}

#[test]
fn blank_search_warns_without_starting_a_lookup() {
    let mut state = state_for(&[]);
    let (tx, _rx) = mpsc::channel(8);
    state.query = "   ".to_string();

    state.handle_event(key(KeyCode::Enter), &tx);

    assert_eq!(state.action_seq(), 0);
    assert_eq!(state.mode, AppMode::Idle);
    let notice = state.notice.expect("notice");
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.text, "Please enter a city name");
}

#[test]
fn escape_and_ctrl_c_quit() {
    let mut state = state_for(&[]);
    let (tx, _rx) = mpsc::channel(8);
    state.handle_event(key(KeyCode::Esc), &tx);
    assert_eq!(state.mode, AppMode::Quit);

    let mut state = state_for(&[]);
    state.handle_event(ctrl('c'), &tx);
    assert_eq!(state.mode, AppMode::Quit);
}

#[test]
fn tab_toggles_hourly_details() {
    let mut state = state_for(&[]);
    let (tx, _rx) = mpsc::channel(8);
    state.handle_event(key(KeyCode::Tab), &tx);
    assert!(state.show_details);
    state.handle_event(key(KeyCode::Tab), &tx);
    assert!(!state.show_details);
}

#[test]
fn positional_city_prefills_query() {
    let state = state_for(&["Lisbon"]);
    assert_eq!(state.query, "Lisbon");
    assert_eq!(
        state.initial_request,
        Some(LookupRequest::City("Lisbon".to_string()))
    );

    let state = state_for(&["--here"]);
    assert_eq!(state.initial_request, Some(LookupRequest::CurrentLocation));
}

#[tokio::test]
async fn search_starts_a_new_sequenced_lookup() {
    let mut state = state_for(&[]);
    let (tx, _rx) = mpsc::channel(8);
    state.query = "Lima".to_string();

    state.handle_event(key(KeyCode::Enter), &tx);
    assert_eq!(state.action_seq(), 1);
    assert_eq!(state.mode, AppMode::Loading);
    assert_eq!(state.loading_message, "Searching for location...");

    state.handle_event(key(KeyCode::F(2)), &tx);
    assert_eq!(state.action_seq(), 2);
    assert_eq!(state.loading_message, "Detecting your location...");
}

#[tokio::test]
async fn superseded_results_are_dropped() {
    let mut state = state_for(&[]);
    let (tx, _rx) = mpsc::channel(8);
    state.query = "Lima".to_string();
    state.handle_event(key(KeyCode::Enter), &tx);
    state.handle_event(key(KeyCode::Enter), &tx);

    state.handle_event(
        AppEvent::LookupFinished {
            seq: 1,
            outcome: Ok(Box::new(sample_report())),
        },
        &tx,
    );
    assert!(state.report.is_none());
    assert_eq!(state.mode, AppMode::Loading);

    state.handle_event(
        AppEvent::LookupFinished {
            seq: 2,
            outcome: Ok(Box::new(sample_report())),
        },
        &tx,
    );
    assert_eq!(state.mode, AppMode::Ready);
    let notice = state.notice.as_ref().expect("notice");
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.text, "Found: London, England, United Kingdom");
}

#[test]
fn failure_replaces_previous_report() {
    let mut state = state_for(&[]);
    let (tx, _rx) = mpsc::channel(8);
    state.report = Some(sample_report());

    state.handle_event(
        AppEvent::LookupFinished {
            seq: 0,
            outcome: Err(LookupFailure::Forecast(LookupError::Status {
                service: "forecast",
                status: 502,
            })),
        },
        &tx,
    );

    assert!(state.report.is_none());
    assert_eq!(state.mode, AppMode::Error);
    let notice = state.notice.expect("notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(
        notice.text,
        "Failed to fetch weather data: forecast returned HTTP 502"
    );
}

#[test]
fn not_found_notice_includes_provider_detail() {
    let mut state = state_for(&[]);
    let (tx, _rx) = mpsc::channel(8);

    state.handle_event(
        AppEvent::LookupFinished {
            seq: 0,
            outcome: Err(LookupFailure::CityNotFound {
                query: "Atlantis".to_string(),
                detail: Some("geocoding returned HTTP 500".to_string()),
            }),
        },
        &tx,
    );

    assert_eq!(
        state.notice.expect("notice").text,
        "City not found: Atlantis. Try adding country/state for better results. (geocoding returned HTTP 500)"
    );
}
