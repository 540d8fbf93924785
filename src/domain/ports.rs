use crate::utils::error::Result;
use async_trait::async_trait;

/// Opaque fetch capability the core depends on: GET a URL, get back a
/// textual body. The production implementation lives in `adapters::http`;
/// tests point it at a mock server.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String>;
}

/// The two URL templates the pipeline needs: one that embeds a course code
/// to retrieve a description page, one that embeds comma-joined profile ids
/// to retrieve a combined assessment-report page.
pub trait ConfigProvider: Send + Sync {
    fn course_endpoint(&self) -> &str;
    fn report_endpoint(&self) -> &str;
}
