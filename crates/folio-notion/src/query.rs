//! Database queries.

use serde_json::json;

use crate::{NotionClient, PAGE_SIZE, error::NotionError, filter::Filter, http, page::Page};

#[derive(serde::Deserialize)]
struct QueryResponse {
    results: Vec<Page>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

impl NotionClient {
    /// Query a database for every page matching `filter`.
    ///
    /// Results keep the order the API returns them in. Cursors are followed
    /// until the API reports no more results.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] if a request fails, the API returns a
    /// non-success status, or a response cannot be parsed.
    pub async fn query_database(
        &self,
        database_id: &str,
        filter: &Filter,
    ) -> Result<Vec<Page>, NotionError> {
        let url = format!(
            "{}/v1/databases/{}/query",
            self.base_url,
            urlencoding::encode(database_id)
        );
        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut body = json!({
                "filter": filter.to_json(),
                "page_size": PAGE_SIZE,
            });
            if let Some(c) = &cursor {
                body["start_cursor"] = json!(c);
            }
            tracing::debug!(database_id, cursor = cursor.as_deref(), "querying database");

            let resp = http::check_response(self.http.post(&url).json(&body).send().await?).await?;
            let data: QueryResponse = http::decode(resp, "databases/query").await?;
            pages.extend(data.results);

            match data.next_cursor {
                Some(next) if data.has_more && cursor.as_deref() != Some(next.as_str()) => {
                    cursor = Some(next);
                }
                _ => break,
            }
        }
        Ok(pages)
    }
}
