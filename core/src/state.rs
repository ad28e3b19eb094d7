//! Fetch state and the expenses table component.
//!
//! # Design
//! `ExpensesTable::mount` is the only constructor, and it hands back the one
//! fetch future for that instance, so a component can never issue a second
//! request. The future keeps a `Weak` handle to the state: if the component
//! is dropped while the request is in flight, the result is discarded instead
//! of being written into a state nobody will read.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::client::ExpensesClient;
use crate::error::ApiError;
use crate::loader::{load_expenses, Transport};
use crate::render;
use crate::types::Transaction;

/// What the table currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Failed(String),
    Loaded(Vec<Transaction>),
}

impl FetchState {
    pub fn from_result(result: Result<Vec<Transaction>, ApiError>) -> Self {
        match result {
            Ok(items) => FetchState::Loaded(items),
            Err(err) => FetchState::Failed(err.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded transactions; empty while loading or after a failure.
    pub fn items(&self) -> &[Transaction] {
        match self {
            FetchState::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// A single expenses table bound to one fetch.
#[derive(Debug)]
pub struct ExpensesTable {
    state: Arc<Mutex<FetchState>>,
}

impl ExpensesTable {
    /// Create the component in `Loading` together with its fetch future.
    ///
    /// The future must be driven (awaited or spawned) for the table to leave
    /// `Loading`. It resolves after the state has been settled, or after the
    /// result was dropped because the component no longer exists.
    pub fn mount<T>(
        client: ExpensesClient,
        transport: T,
        page: u32,
    ) -> (Self, impl Future<Output = ()> + Send + 'static)
    where
        T: Transport + Send + Sync + 'static,
    {
        let state = Arc::new(Mutex::new(FetchState::Loading));
        let handle = Arc::downgrade(&state);
        let fetch = async move {
            let result = load_expenses(&client, &transport, page).await;
            settle(&handle, result);
        };
        (Self { state }, fetch)
    }

    /// Settle a still-loading table with `err`, for hosts whose fetch task
    /// died without producing a result. No effect once settled.
    pub fn fail(&self, err: ApiError) {
        settle(&Arc::downgrade(&self.state), Err(err));
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        lock(&self.state).clone()
    }

    pub fn render(&self) -> String {
        render::render(&lock(&self.state))
    }

    pub fn render_document(&self) -> String {
        render::render_document(&lock(&self.state))
    }
}

fn settle(handle: &Weak<Mutex<FetchState>>, result: Result<Vec<Transaction>, ApiError>) {
    let Some(state) = handle.upgrade() else {
        log::debug!("expenses table dropped before the fetch finished; discarding result");
        return;
    };
    let mut current = lock(&state);
    if !current.is_loading() {
        log::warn!("fetch settled twice; keeping the first result");
        return;
    }
    if let Err(err) = &result {
        log::error!("failed to load expenses: {err}");
    }
    *current = FetchState::from_result(result);
}

fn lock(state: &Mutex<FetchState>) -> MutexGuard<'_, FetchState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
