use super::*;
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use crossbeam_channel::bounded;
use shared::{domain::PokemonRecord, error::LookupError, protocol::PokemonResponse};

use crate::controller::{orchestration::dispatch_backend_command, search::SearchState};

const REPLY_TIMEOUT: Duration = Duration::from_secs(5);

struct FakeLookup {
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
    reply: Result<PokemonRecord, LookupError>,
}

impl FakeLookup {
    fn answering(reply: Result<PokemonRecord, LookupError>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
            reply,
        })
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("queries lock").clone()
    }
}

#[async_trait]
impl PokemonLookup for FakeLookup {
    async fn fetch(&self, query: &str) -> Result<PokemonRecord, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.to_string());
        self.reply.clone()
    }
}

fn pikachu() -> PokemonRecord {
    let wire: PokemonResponse = serde_json::from_str(
        r#"{"name":"pikachu","id":25,"types":[{"type":{"name":"electric"}}]}"#,
    )
    .expect("decode");
    PokemonRecord::try_from(wire).expect("record")
}

fn lookup(request_id: u64, query: &str) -> BackendCommand {
    BackendCommand::Lookup {
        request_id,
        query: query.to_string(),
    }
}

#[test]
fn worker_replies_with_the_lookup_outcome() {
    let fake = FakeLookup::answering(Ok(pikachu()));
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let worker = launch(cmd_rx, ui_tx, fake.clone());

    cmd_tx.send(lookup(7, "pikachu")).expect("send");
    match ui_rx.recv_timeout(REPLY_TIMEOUT).expect("reply") {
        UiEvent::LookupFinished {
            request_id,
            outcome,
        } => {
            assert_eq!(request_id, 7);
            assert_eq!(outcome.expect("record"), pikachu());
        }
        UiEvent::BackendUnavailable(reason) => panic!("worker unavailable: {reason}"),
    }

    drop(cmd_tx);
    worker.join().expect("worker exits once the command queue closes");
    assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn queued_commands_collapse_to_the_newest() {
    let fake = FakeLookup::answering(Err(LookupError::not_found("x", 404)));
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    for (request_id, query) in [(1, "bulbasaur"), (2, "ivysaur"), (3, "venusaur")] {
        cmd_tx.send(lookup(request_id, query)).expect("send");
    }

    let worker = launch(cmd_rx, ui_tx, fake.clone());
    match ui_rx.recv_timeout(REPLY_TIMEOUT).expect("reply") {
        UiEvent::LookupFinished { request_id, .. } => assert_eq!(request_id, 3),
        UiEvent::BackendUnavailable(reason) => panic!("worker unavailable: {reason}"),
    }

    drop(cmd_tx);
    worker.join().expect("worker exit");
    assert_eq!(fake.queries(), vec!["venusaur".to_string()]);
}

#[test]
fn search_round_trip_through_the_worker_updates_display() {
    let fake = FakeLookup::answering(Ok(pikachu()));
    let (cmd_tx, cmd_rx) = bounded(8);
    let (ui_tx, ui_rx) = bounded(8);
    let worker = launch(cmd_rx, ui_tx, fake.clone());
    let mut state = SearchState::new();

    assert!(state.on_search_triggered("   ").is_none());
    assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    state.dismiss_dialog();

    let cmd = state.on_search_triggered("  PIKACHU ").expect("lookup command");
    dispatch_backend_command(&cmd_tx, cmd).expect("dispatch");
    let event = ui_rx.recv_timeout(REPLY_TIMEOUT).expect("reply");
    state.apply(event);

    let display = state.display().expect("display");
    assert_eq!(display.name, "Pikachu");
    assert_eq!(display.id, "25");
    assert_eq!(display.types, "electric");
    assert_eq!(fake.queries(), vec!["PIKACHU".to_string()]);

    drop(cmd_tx);
    worker.join().expect("worker exit");
}
