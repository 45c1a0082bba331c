//! UI/backend events and error modeling for the desktop GUI controller.

use shared::{
    domain::PokemonRecord,
    error::{LookupError, LookupErrorKind},
};

pub enum UiEvent {
    LookupFinished {
        request_id: u64,
        outcome: Result<PokemonRecord, LookupError>,
    },
    BackendUnavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    NotFound,
    Transport,
    Malformed,
    Busy,
    Backend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Dispatch,
    Lookup,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_lookup(err: &LookupError) -> Self {
        let category = match err.kind() {
            LookupErrorKind::NotFound => UiErrorCategory::NotFound,
            LookupErrorKind::Transport => UiErrorCategory::Transport,
            LookupErrorKind::Parse => UiErrorCategory::Malformed,
        };
        Self {
            category,
            context: UiErrorContext::Lookup,
            message: err.to_string(),
        }
    }

    pub fn busy(message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Busy,
            context: UiErrorContext::Dispatch,
            message: message.into(),
        }
    }

    pub fn backend(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Backend,
            context,
            message: message.into(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Secondary dialog line naming the cause. `None` for a plain miss.
    pub fn cause_hint(&self) -> Option<&'static str> {
        match self.category {
            UiErrorCategory::NotFound => None,
            UiErrorCategory::Transport => {
                Some("Could not reach the Pokémon service; check your connection.")
            }
            UiErrorCategory::Malformed => Some("The Pokémon service sent a malformed response."),
            UiErrorCategory::Busy => Some("Still busy with earlier searches; try again in a moment."),
            UiErrorCategory::Backend => Some("The lookup worker is unavailable; restart the app."),
        }
    }
}
