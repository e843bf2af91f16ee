pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod logging;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use app::events::{AppEvent, spawn_input_task};
use app::pipeline::{LookupRequest, WeatherService};
use app::state::{AppMode, AppState};
use cli::Cli;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use domain::novelty::NoveltyContent;
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let content = load_content(&cli)?;
    let service = WeatherService::from_cli(&cli, content)?;

    if cli.one_shot {
        return run_once(&cli, &service).await;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &cli, service).await;
    restore_terminal(&mut terminal)?;
    result
}

fn load_content(cli: &Cli) -> Result<NoveltyContent> {
    match &cli.content {
        Some(path) => NoveltyContent::load(path),
        None => Ok(NoveltyContent::default()),
    }
}

async fn run_once(cli: &Cli, service: &WeatherService) -> Result<()> {
    let request = if cli.here {
        LookupRequest::CurrentLocation
    } else {
        LookupRequest::City(cli.initial_city().unwrap_or_default().to_string())
    };

    match service.lookup(&request).await {
        Ok(report) => {
            print!("{}", ui::report::render_report(&report, cli.icon_mode()));
            Ok(())
        }
        Err(failure) => Err(anyhow::Error::new(failure)),
    }
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    cli: &Cli,
    service: WeatherService,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(cli, service);

    tx.send(AppEvent::Bootstrap)
        .await
        .context("event channel closed before startup")?;
    terminal.draw(|frame| ui::render(frame, &app))?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                match maybe_input {
                    Some(input) => app.handle_event(AppEvent::Input(input), &tx),
                    None => app.handle_event(AppEvent::Quit, &tx),
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx);
                }
            }
            _ = tokio::signal::ctrl_c() => app.handle_event(AppEvent::Quit, &tx),
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
