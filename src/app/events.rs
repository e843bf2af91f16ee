use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::{
    app::pipeline::{LookupRequest, WeatherReport, WeatherService},
    error::LookupFailure,
};

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    Input(Event),
    LookupFinished {
        seq: u64,
        outcome: Result<Box<WeatherReport>, LookupFailure>,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Runs one lookup chain off the event loop and reports back tagged with `seq`.
pub fn spawn_lookup(
    tx: mpsc::Sender<AppEvent>,
    service: WeatherService,
    request: LookupRequest,
    seq: u64,
) {
    tokio::spawn(async move {
        let outcome = service.lookup(&request).await.map(Box::new);
        let _ = tx.send(AppEvent::LookupFinished { seq, outcome }).await;
    });
}
