use crate::core::{report, resolver};
use crate::domain::model::{Assessment, CourseCode};
use crate::domain::ports::{ConfigProvider, Fetch};
use crate::utils::error::Result;
use futures::future;

/// Orchestrates one aggregation request: concurrent per-course profile
/// resolution, one combined report fetch, per-record date normalization.
pub struct Aggregator<F: Fetch, C: ConfigProvider> {
    fetcher: F,
    config: C,
}

impl<F: Fetch, C: ConfigProvider> Aggregator<F, C> {
    pub fn new(fetcher: F, config: C) -> Self {
        Self { fetcher, config }
    }

    /// Runs the pipeline for an ordered batch of course codes.
    ///
    /// Resolutions run concurrently with no cross-code dependency; the
    /// first failure becomes the aggregate's single error and the
    /// remaining resolution futures are dropped. On success the profile
    /// ids keep the input course order, so record order is input order
    /// then table row order regardless of which resolution finished
    /// first. The result is all records or one error, never a mix.
    pub async fn aggregate(&self, codes: &[CourseCode]) -> Result<Vec<Assessment>> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!(courses = codes.len(), "aggregating assessment");
        let resolutions = codes
            .iter()
            .map(|code| resolver::resolve(&self.fetcher, self.config.course_endpoint(), code));
        let profiles = future::try_join_all(resolutions).await?;

        let records =
            report::fetch_report(&self.fetcher, self.config.report_endpoint(), &profiles).await?;
        tracing::info!(records = records.len(), "aggregation complete");
        Ok(records)
    }
}
