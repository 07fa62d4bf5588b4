use api_types::expense::{ExpenseNew, ExpenseView, Filter};
use reqwest::Client;
use serde::Deserialize;

use crate::SyncError;

/// Low-level typed access to the expense service.
#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    client: Client,
    base_url: String,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiClient {
    pub(crate) fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn error_for(resp: reqwest::Response) -> SyncError {
        let status = resp.status();
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => "server error".to_string(),
        };
        SyncError::Server { status, message }
    }

    pub(crate) async fn list_expenses(
        &self,
        filter: Filter,
    ) -> Result<Vec<ExpenseView>, SyncError> {
        let mut req = self.client.get(self.url("/expenses"));
        if let Some(category) = filter.category() {
            req = req.query(&[("category", category.as_str())]);
        }

        let resp = req.send().await?;
        if resp.status().is_success() {
            return Ok(resp.json::<Vec<ExpenseView>>().await?);
        }
        Err(Self::error_for(resp).await)
    }

    pub(crate) async fn create_expense(&self, payload: &ExpenseNew) -> Result<(), SyncError> {
        let resp = self
            .client
            .post(self.url("/expenses"))
            .query(payload)
            .send()
            .await?;

        if resp.status().is_success() {
            // The response body carries the assigned id, but the contract
            // only promises 2xx; the follow-up refresh is the source of
            // server-assigned fields.
            return Ok(());
        }
        Err(Self::error_for(resp).await)
    }

    pub(crate) async fn delete_expense(&self, id: i64) -> Result<(), SyncError> {
        let resp = self
            .client
            .delete(self.url(&format!("/expenses/{id}")))
            .send()
            .await?;

        if resp.status().is_success() {
            return Ok(());
        }
        Err(Self::error_for(resp).await)
    }
}
