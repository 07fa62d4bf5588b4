use api_types::expense::{Category, ExpenseNew, ExpenseView, Filter};
use chrono::{Local, NaiveDate};
use ledger::{ExpenseRecord, ExpenseStore, Money, ParseError};
use reqwest::Client;
use thiserror::Error;

use crate::{SyncError, api::ApiClient};

/// Description sent for every record created through the client.
pub const DEFAULT_DESCRIPTION: &str = "UserEntry";

/// Lifecycle of one user-initiated operation kind.
///
/// Independent operation kinds do not share state; each tracks its own
/// `Idle -> Pending -> {Success, Failed}` transitions, readable without any
/// presentation layer attached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpState {
    #[default]
    Idle,
    Pending,
    Success,
    Failed,
}

/// Failure modes of [`SyncClient::create`].
///
/// `Parse` is detected locally and never reaches the network; callers block
/// the submission and prompt for correction. `Sync` is a transport/backend
/// failure; callers notify and let the user retry.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Sync(#[from] SyncError),
}

/// Reconciles the local [`ExpenseStore`] with the remote expense service.
///
/// The client owns the store: every mutation funnels through here and ends in
/// a full re-list of the active filter, so the view always reflects
/// server-assigned fields and server-side validation instead of an optimistic
/// local patch. Operations take `&mut self`, which serializes them; two calls
/// can never overlap on one client.
#[derive(Debug)]
pub struct SyncClient {
    api: ApiClient,
    store: ExpenseStore,
    filter: Filter,
    refresh_state: OpState,
    create_state: OpState,
    remove_state: OpState,
}

impl SyncClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Builds around a caller-supplied [`Client`], e.g. one with a timeout
    /// configured; the core itself imposes none.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            api: ApiClient::new(client, base_url.to_string()),
            store: ExpenseStore::new(),
            filter: Filter::default(),
            refresh_state: OpState::Idle,
            create_state: OpState::Idle,
            remove_state: OpState::Idle,
        }
    }

    /// The current view. Contents mirror the last successful list response.
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// The filter the view was last asked to reflect.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn refresh_state(&self) -> OpState {
        self.refresh_state
    }

    pub fn create_state(&self) -> OpState {
        self.create_state
    }

    pub fn remove_state(&self) -> OpState {
        self.remove_state
    }

    /// Re-fetches the list scoped to `filter` and replaces the store's
    /// contents with the response.
    ///
    /// On failure the store keeps its previous contents, stale but
    /// consistent; the view must never go blank on a transient fetch error.
    /// `filter` becomes the active filter either way, so the next mutation's
    /// re-fetch targets what the user selected last.
    pub async fn refresh(&mut self, filter: Filter) -> Result<(), SyncError> {
        self.filter = filter;
        self.refresh_state = OpState::Pending;

        match self.api.list_expenses(filter).await {
            Ok(views) => {
                let records = views.into_iter().map(record_from_view).collect();
                self.store.replace_all(records);
                self.refresh_state = OpState::Success;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(filter = filter.label(), "refresh failed, keeping previous view: {err}");
                self.refresh_state = OpState::Failed;
                Err(err)
            }
        }
    }

    /// Validates and creates a new expense, then re-lists the active filter.
    ///
    /// An invalid `amount_input` fails fast with [`CreateError::Parse`]
    /// before any network call. The parsed amount crosses the wire as integer
    /// minor units, with the fixed description placeholder and `date`
    /// defaulting to today. The new record is never appended locally: the
    /// follow-up refresh is what makes it visible, complete with its
    /// server-assigned id.
    pub async fn create(
        &mut self,
        amount_input: &str,
        category: Category,
        date: Option<NaiveDate>,
    ) -> Result<(), CreateError> {
        let amount: Money = amount_input.parse()?;

        let payload = ExpenseNew {
            amount: amount.minor(),
            category,
            description: DEFAULT_DESCRIPTION.to_string(),
            expense_date: date.unwrap_or_else(|| Local::now().date_naive()),
        };

        self.create_state = OpState::Pending;
        match self.api.create_expense(&payload).await {
            Ok(()) => {
                self.create_state = OpState::Success;
                self.refresh(self.filter).await?;
                Ok(())
            }
            Err(err) => {
                self.create_state = OpState::Failed;
                Err(err.into())
            }
        }
    }

    /// Deletes a persisted record, then re-lists the active filter.
    ///
    /// Confirmation is the caller's job; by the time this runs the user has
    /// already acknowledged the deletion. On failure no local removal has
    /// happened, so the record stays visible for a retry.
    pub async fn remove(&mut self, id: i64) -> Result<(), SyncError> {
        self.remove_state = OpState::Pending;
        match self.api.delete_expense(id).await {
            Ok(()) => {
                self.remove_state = OpState::Success;
                self.refresh(self.filter).await
            }
            Err(err) => {
                self.remove_state = OpState::Failed;
                Err(err)
            }
        }
    }
}

fn record_from_view(view: ExpenseView) -> ExpenseRecord {
    ExpenseRecord {
        id: view.id,
        amount: Money::from_minor(view.amount),
        category: view.category,
        description: view.description,
        date: view.date,
    }
}
