//! Projection of raw listing documents onto the summary shape.

use crate::api::responses::{RawDocument, SearchPage};
use crate::error::AppError;
use crate::model::{PostData, PostSummary, PublicationDate};
use crate::types::{ContinuationRef, PostUid};
use serde::Deserialize;

/// One normalized page of the listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListingPage {
    pub results: Vec<PostSummary>,
    pub next_page: Option<ContinuationRef>,
}

/// Copies uid, publication date, title, subtitle and author; drops everything else.
pub fn normalize_summary(raw: &RawDocument) -> Result<PostSummary, AppError> {
    let uid = raw.uid.as_deref().ok_or_else(|| {
        AppError::MalformedResponse(format!("document {} has no uid", raw.id))
    })?;

    Ok(PostSummary {
        uid: PostUid::parse(uid)?,
        first_publication_date: raw
            .first_publication_date
            .as_deref()
            .map(PublicationDate::parse)
            .transpose()?,
        data: PostData::deserialize(&raw.data)?,
    })
}

/// Normalizes every record of a search page, keeping their order.
pub fn normalize_page(page: SearchPage) -> Result<ListingPage, AppError> {
    let next_page = page.continuation();
    let results = page
        .results
        .iter()
        .map(normalize_summary)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ListingPage { results, next_page })
}
