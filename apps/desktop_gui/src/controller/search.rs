//! Search interaction state: input validation, in-flight tracking, result labels and dialogs.

use shared::display::DisplayFields;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};

pub const EMPTY_QUERY_MESSAGE: &str = "Enter a name or ID.";
pub const NOT_FOUND_MESSAGE: &str = "Pokémon not found.";
pub const DIALOG_TITLE: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub message: String,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    AwaitingResponse {
        request_id: u64,
    },
}

#[derive(Debug, Default)]
pub struct SearchState {
    phase: SearchPhase,
    display: Option<DisplayFields>,
    dialog: Option<Dialog>,
    dialog_serial: u64,
    phase_before_dispatch: SearchPhase,
    next_request_id: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lookup to queue, or `None` when the input was blank.
    pub fn on_search_triggered(&mut self, input: &str) -> Option<BackendCommand> {
        let query = input.trim();
        if query.is_empty() {
            self.set_dialog(Dialog {
                kind: DialogKind::Warning,
                message: EMPTY_QUERY_MESSAGE.to_string(),
                detail: None,
            });
            return None;
        }

        if let SearchPhase::AwaitingResponse { request_id } = self.phase {
            tracing::debug!(request_id, "superseding in-flight lookup");
        }
        self.phase_before_dispatch = self.phase;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        let request_id = self.next_request_id;
        self.phase = SearchPhase::AwaitingResponse { request_id };

        Some(BackendCommand::Lookup {
            request_id,
            query: query.to_string(),
        })
    }

    /// A busy queue leaves the lookup already queued in charge of the display.
    pub fn dispatch_failed(&mut self, err: UiError) {
        self.phase = match err.category() {
            UiErrorCategory::Busy => self.phase_before_dispatch,
            _ => SearchPhase::Idle,
        };
        self.show_error(&err);
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::LookupFinished {
                request_id,
                outcome,
            } => {
                if self.phase != (SearchPhase::AwaitingResponse { request_id }) {
                    tracing::debug!(request_id, "discarding stale lookup result");
                    return;
                }
                self.phase = SearchPhase::Idle;
                match outcome {
                    Ok(record) => self.display = Some(DisplayFields::from_record(&record)),
                    Err(err) => self.show_error(&UiError::from_lookup(&err)),
                }
            }
            UiEvent::BackendUnavailable(reason) => {
                self.phase = SearchPhase::Idle;
                self.show_error(&UiError::backend(UiErrorContext::BackendStartup, reason));
            }
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_awaiting_response(&self) -> bool {
        matches!(self.phase, SearchPhase::AwaitingResponse { .. })
    }

    pub fn display(&self) -> Option<&DisplayFields> {
        self.display.as_ref()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Changes every time a dialog is opened, including one replacing another.
    pub fn dialog_serial(&self) -> u64 {
        self.dialog_serial
    }

    fn set_dialog(&mut self, dialog: Dialog) {
        self.dialog_serial = self.dialog_serial.wrapping_add(1);
        self.dialog = Some(dialog);
    }

    fn show_error(&mut self, err: &UiError) {
        tracing::debug!(
            context = ?err.context(),
            category = ?err.category(),
            "showing error dialog: {}",
            err.message()
        );
        self.set_dialog(Dialog {
            kind: DialogKind::Error,
            message: NOT_FOUND_MESSAGE.to_string(),
            detail: err.cause_hint().map(str::to_string),
        });
    }
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
