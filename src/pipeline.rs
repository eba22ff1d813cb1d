// src/pipeline.rs
//! Pipeline capability traits for the three stages of a static build:
//! fetch content, compose pages, deliver files.
//!
//! Each trait describes a single capability so stages can be tested in isolation.

use crate::error::AppError;
use crate::output::{OutputPlan, OutputReport};
use crate::site::SiteContent;

/// Retrieves everything the site needs from the content API.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn fetch(&self) -> Result<SiteContent, AppError>;
}

/// Turns fetched content into an output plan of rendered pages.
pub trait PageComposer {
    fn compose(&self, content: &SiteContent) -> Result<OutputPlan, AppError>;
}

/// Executes an output plan.
pub trait SiteDelivery {
    fn deliver(&self, plan: OutputPlan) -> Result<OutputReport, AppError>;
}

/// Runs fetch → compose → deliver.
pub async fn execute_pipeline<P>(pipeline: &P) -> Result<(SiteContent, OutputReport), AppError>
where
    P: ContentSource + PageComposer + SiteDelivery + Sync,
{
    let content = pipeline.fetch().await?;
    let plan = pipeline.compose(&content)?;
    let report = pipeline.deliver(plan)?;
    Ok((content, report))
}
