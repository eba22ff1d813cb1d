// src/site.rs
//! The static build: listing page plus one page per prebuilt post.

use crate::api::{ContentRepository, ListQuery};
use crate::config::{BuildSettings, PrebuildPolicy};
use crate::constants::API_MAX_PAGE_SIZE;
use crate::detail::resolve_posts;
use crate::error::AppError;
use crate::formatting::PageRenderer;
use crate::listing::{ListingAccumulator, PaginationState};
use crate::model::PostDetail;
use crate::output::{
    deliver_all, index_output_path, post_output_path, DeliveryTarget, OutputPlan, OutputReport,
};
use crate::pipeline::{ContentSource, PageComposer, SiteDelivery};
use crate::types::{DocumentType, PostUid};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Everything fetched for one build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SiteContent {
    /// The listing as shown on the home page.
    pub listing: PaginationState,
    /// Resolved posts, in prebuild order.
    pub posts: Vec<PostDetail>,
    /// Prebuild uids with no matching document.
    pub missing: Vec<PostUid>,
}

/// Builds the site from a content repository.
pub struct StaticSite {
    repository: Arc<dyn ContentRepository>,
    document_type: DocumentType,
    page_size: u32,
    settings: BuildSettings,
    renderer: PageRenderer,
}

impl StaticSite {
    pub fn new(
        repository: Arc<dyn ContentRepository>,
        document_type: DocumentType,
        page_size: u32,
        settings: BuildSettings,
        renderer: PageRenderer,
    ) -> Self {
        Self {
            repository,
            document_type,
            page_size,
            settings,
            renderer,
        }
    }

    async fn prebuild_uids(&self) -> Result<Vec<PostUid>, AppError> {
        match &self.settings.prebuild {
            PrebuildPolicy::Listed(uids) => Ok(uids.clone()),
            PrebuildPolicy::All => {
                let query =
                    ListQuery::latest_first(self.document_type.clone(), API_MAX_PAGE_SIZE);
                let documents = self.repository.list_all(&query).await?;
                log::info!("Prebuilding all {} documents", documents.len());

                Ok(documents
                    .iter()
                    .filter_map(|doc| match doc.uid.as_deref().map(PostUid::parse) {
                        Some(Ok(uid)) => Some(uid),
                        Some(Err(e)) => {
                            log::warn!("Skipping document {}: {}", doc.id, e);
                            None
                        }
                        None => {
                            log::warn!("Skipping document {}: no uid", doc.id);
                            None
                        }
                    })
                    .collect())
            }
        }
    }
}

#[async_trait::async_trait]
impl ContentSource for StaticSite {
    async fn fetch(&self) -> Result<SiteContent, AppError> {
        let query = ListQuery::latest_first(self.document_type.clone(), self.page_size);
        let accumulator = ListingAccumulator::load_initial(self.repository.clone(), &query).await?;
        let preloaded = accumulator.load_pages(self.settings.preload_pages).await?;
        if preloaded > 0 {
            log::info!("Preloaded {} extra listing pages", preloaded);
        }
        let listing = accumulator.into_state();

        let uids = self.prebuild_uids().await?;
        let resolved = resolve_posts(self.repository.as_ref(), &self.document_type, &uids).await?;
        log::info!(
            "Resolved {} posts ({} missing)",
            resolved.posts.len(),
            resolved.missing.len()
        );

        Ok(SiteContent {
            listing,
            posts: resolved.posts,
            missing: resolved.missing,
        })
    }
}

impl PageComposer for StaticSite {
    fn compose(&self, content: &SiteContent) -> Result<OutputPlan, AppError> {
        compose_site(&self.renderer, content, &self.settings.out_dir)
    }
}

impl SiteDelivery for StaticSite {
    fn deliver(&self, plan: OutputPlan) -> Result<OutputReport, AppError> {
        deliver_all(plan)
    }
}

/// Plans the site's files: the output directory, `index.html`, and
/// `post/<uid>/index.html` for every resolved post.
pub fn compose_site(
    renderer: &PageRenderer,
    content: &SiteContent,
    out_dir: &Path,
) -> Result<OutputPlan, AppError> {
    let mut plan = OutputPlan::new()
        .with_operation(DeliveryTarget::CreateDirectory {
            path: out_dir.to_path_buf(),
        })
        .with_operation(DeliveryTarget::WriteFile {
            path: index_output_path(out_dir),
            content: renderer.render_home(&content.listing)?.into_string(),
        });

    for post in &content.posts {
        plan = plan.with_operation(DeliveryTarget::WriteFile {
            path: post_output_path(out_dir, &post.uid),
            content: renderer.render_post(post)?.into_string(),
        });
    }

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PostDetailData, PostData, PostSummary};

    fn post(uid: &str) -> PostDetail {
        PostDetail {
            uid: PostUid::parse(uid).unwrap(),
            first_publication_date: None,
            data: PostDetailData {
                title: uid.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_plan_has_index_and_one_file_per_post() {
        let renderer = PageRenderer::embedded().unwrap();
        let content = SiteContent {
            listing: PaginationState {
                next_page: None,
                results: vec![PostSummary {
                    uid: PostUid::parse("a").unwrap(),
                    first_publication_date: None,
                    data: PostData::default(),
                }],
            },
            posts: vec![post("a"), post("b")],
            missing: vec![],
        };

        let plan = compose_site(&renderer, &content, Path::new("out")).unwrap();
        let paths: Vec<String> = plan
            .operations
            .iter()
            .map(|op| op.describe())
            .collect();

        assert_eq!(
            paths,
            vec![
                "mkdir out",
                "write out/index.html",
                "write out/post/a/index.html",
                "write out/post/b/index.html",
            ]
        );
    }
}
