use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use serde::Deserialize;
use tokio::{sync::watch, task::JoinHandle};
use tracing::debug;

use super::{build_final_name, AvailabilityMemo, CheckError};
use crate::config::AvailabilityClientConfig;

const MIN_BASE_NAME_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Checking,
    Available,
    Unavailable,
    Error,
}

/// What the field shows: the lookup status, the composed name and a help message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub status: Status,
    pub final_name: String,
    pub message: String,
}

impl FieldState {
    fn idle(final_name: String, message: String) -> Self {
        Self { status: Status::Idle, final_name, message }
    }

    fn settled(final_name: String, result: Result<bool, CheckError>) -> Self {
        match result {
            Ok(true) => Self {
                message: format!("Final name: {final_name}, and it is available."),
                status: Status::Available,
                final_name,
            },
            Ok(false) => Self {
                message: format!("Final name: {final_name}, but it already exists. Choose another base name"),
                status: Status::Unavailable,
                final_name,
            },
            Err(e) => Self {
                message: format!("Error validating '{final_name}': {e}"),
                status: Status::Error,
                final_name,
            },
        }
    }
}

/// The other form fields the final name depends on.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FormContext {
    #[serde(default)]
    pub drn: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub network_type: Option<String>,
}

struct PendingCheck {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

struct Inner {
    memo: Arc<AvailabilityMemo>,
    required_network_type: String,
    debounce: Duration,
    state: watch::Sender<FieldState>,
    pending: Mutex<PendingCheck>,
}

/// Live availability feedback for one workspace name input.
///
/// Every [`update`](Self::update) supersedes the previous one: the pending check is aborted
/// and a result that arrives for an older generation is dropped. A new lookup is issued only
/// after the inputs have been stable for the debounce delay.
pub struct WorkspaceNameField {
    inner: Arc<Inner>,
}

impl WorkspaceNameField {
    pub fn new(memo: Arc<AvailabilityMemo>, config: &AvailabilityClientConfig) -> Self {
        let (state, _) = watch::channel(FieldState::idle(String::new(), String::new()));

        Self {
            inner: Arc::new(Inner {
                memo,
                required_network_type: config.required_network_type.clone(),
                debounce: config.debounce,
                state,
                pending: Mutex::new(PendingCheck { generation: 0, handle: None }),
            }),
        }
    }

    pub fn state(&self) -> FieldState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FieldState> {
        self.inner.state.subscribe()
    }

    /// Applies new input. Must be called from within a tokio runtime.
    pub fn update(&self, base_name: &str, context: &FormContext) {
        let mut pending = self.inner.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.generation += 1;
        if let Some(handle) = pending.handle.take() {
            handle.abort();
        }

        let final_name = build_final_name(base_name, context.drn.as_deref(), context.domain.as_deref());

        let network_matches = context.network_type.as_deref() == Some(self.inner.required_network_type.as_str());
        if !network_matches || final_name.is_empty() {
            self.inner.state.send_replace(FieldState::idle(final_name, String::new()));
            return;
        }

        let base_name_length = base_name.chars().count();
        if base_name_length < MIN_BASE_NAME_LENGTH {
            let message = if base_name_length > 0 {
                format!("Final name: {final_name}. (Requires 3+ chars to validate)")
            } else {
                String::new()
            };
            self.inner.state.send_replace(FieldState::idle(final_name, message));
            return;
        }

        self.inner.state.send_replace(FieldState {
            status: Status::Checking,
            message: format!("The final name is {final_name}"),
            final_name: final_name.clone(),
        });

        let inner = self.inner.clone();
        let generation = pending.generation;
        pending.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;
            let result = inner.memo.is_available(&final_name).await;

            let pending = inner.pending.lock().unwrap_or_else(PoisonError::into_inner);
            if pending.generation != generation {
                debug!("dropping stale availability result for \"{final_name}\"");
                return;
            }
            if matches!(result, Err(CheckError::Cancelled)) {
                return;
            }
            inner.state.send_replace(FieldState::settled(final_name, result));
        }));
    }
}

impl Drop for WorkspaceNameField {
    fn drop(&mut self) {
        let mut pending = self.inner.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.handle.take() {
            handle.abort();
        }
    }
}
