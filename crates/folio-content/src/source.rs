//! The seam between normalizers and the remote content service.

use std::future::Future;

use folio_notion::{Filter, NotionClient, NotionError, Page};

/// Read access to a structured content service.
///
/// [`NotionClient`] is the production implementation; tests substitute an
/// in-memory source.
pub trait ContentSource: Send + Sync {
    /// Every page in `database_id` matching `filter`, in service order.
    fn query(
        &self,
        database_id: &str,
        filter: &Filter,
    ) -> impl Future<Output = Result<Vec<Page>, NotionError>> + Send;

    /// A page's body rendered as markdown.
    fn page_markdown(&self, page_id: &str) -> impl Future<Output = Result<String, NotionError>> + Send;
}

impl ContentSource for NotionClient {
    async fn query(&self, database_id: &str, filter: &Filter) -> Result<Vec<Page>, NotionError> {
        self.query_database(database_id, filter).await
    }

    async fn page_markdown(&self, page_id: &str) -> Result<String, NotionError> {
        Self::page_markdown(self, page_id).await
    }
}
