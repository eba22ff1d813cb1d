//! Post detail resolution: one post by uid, normalized for rendering.

use crate::api::responses::RawDocument;
use crate::api::ContentRepository;
use crate::error::AppError;
use crate::model::{PostDetail, PostDetailData, PublicationDate};
use crate::types::{DocumentType, PostUid};
use futures::future::join_all;
use serde::Deserialize;

/// Normalizes a raw document into a post detail.
///
/// The publication date becomes a [`PublicationDate`] (canonical string when
/// serialized). Content sections pass through as the API sent them.
pub fn normalize_detail(raw: &RawDocument) -> Result<PostDetail, AppError> {
    let uid = raw.uid.as_deref().ok_or_else(|| {
        AppError::MalformedResponse(format!("document {} has no uid", raw.id))
    })?;

    Ok(PostDetail {
        uid: PostUid::parse(uid)?,
        first_publication_date: raw
            .first_publication_date
            .as_deref()
            .map(PublicationDate::parse)
            .transpose()?,
        data: PostDetailData::deserialize(&raw.data)?,
    })
}

/// Looks up one post by uid.
///
/// An unknown uid is [`AppError::PostNotFound`].
pub async fn resolve_post(
    repository: &dyn ContentRepository,
    document_type: &DocumentType,
    uid: &PostUid,
) -> Result<PostDetail, AppError> {
    log::debug!("Resolving post '{}'", uid);
    let raw = repository
        .get_by_uid(document_type, uid)
        .await?
        .ok_or_else(|| AppError::PostNotFound { uid: uid.clone() })?;
    normalize_detail(&raw)
}

/// Posts resolved ahead of time, plus the uids that turned out not to exist.
#[derive(Debug, Clone, Default)]
pub struct ResolvedPosts {
    pub posts: Vec<PostDetail>,
    pub missing: Vec<PostUid>,
}

/// Resolves several posts concurrently, keeping the order of `uids`.
///
/// Unknown uids are collected in `missing`; any other failure aborts.
pub async fn resolve_posts(
    repository: &dyn ContentRepository,
    document_type: &DocumentType,
    uids: &[PostUid],
) -> Result<ResolvedPosts, AppError> {
    let results = join_all(
        uids.iter()
            .map(|uid| resolve_post(repository, document_type, uid)),
    )
    .await;

    let mut resolved = ResolvedPosts::default();
    for (uid, result) in uids.iter().zip(results) {
        match result {
            Ok(post) => resolved.posts.push(post),
            Err(AppError::PostNotFound { .. }) => {
                log::warn!("Post '{}' not found; skipping", uid);
                resolved.missing.push(uid.clone());
            }
            Err(e) => return Err(e),
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;
    use serde_json::json;

    #[test]
    fn test_detail_keeps_sections_in_order() {
        let raw: RawDocument = serde_json::from_value(json!({
            "id": "YGRk",
            "uid": "como-utilizar-hooks",
            "type": "publication",
            "first_publication_date": "2021-03-15T19:25:28+0000",
            "data": {
                "title": "Como utilizar Hooks",
                "subtitle": "Pensando em sincronização",
                "author": "Joseph Oliveira",
                "banner": { "url": "https://images.prismic.io/hooks.png", "alt": null },
                "content": [
                    { "heading": "Primeiro", "body": [
                        { "type": "paragraph", "text": "um", "spans": [] },
                        { "type": "list-item", "text": "dois", "spans": [] }
                    ]},
                    { "heading": "Segundo", "body": [
                        { "type": "heading3", "text": "três", "spans": [] }
                    ]}
                ]
            }
        }))
        .unwrap();

        let detail = normalize_detail(&raw).unwrap();
        assert_eq!(detail.data.banner.url, "https://images.prismic.io/hooks.png");
        assert_eq!(detail.data.content.len(), 2);
        assert_eq!(detail.data.content[0].heading, "Primeiro");
        let kinds: Vec<&BlockKind> = detail.data.content[0].body.iter().map(|b| &b.kind).collect();
        assert_eq!(kinds, vec![&BlockKind::Paragraph, &BlockKind::ListItem]);
        assert_eq!(detail.data.content[1].body[0].kind, BlockKind::Heading(3));
        assert_eq!(
            detail.first_publication_date.map(|d| d.canonical()),
            Some("2021-03-15T19:25:28Z".to_string())
        );
    }

    #[test]
    fn test_detail_without_content_has_no_sections() {
        let raw: RawDocument = serde_json::from_value(json!({
            "id": "x",
            "uid": "vazio",
            "data": { "title": "Vazio" }
        }))
        .unwrap();

        let detail = normalize_detail(&raw).unwrap();
        assert!(detail.data.content.is_empty());
        assert_eq!(detail.first_publication_date, None);
        assert_eq!(detail.data.banner.url, "");
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let raw: RawDocument = serde_json::from_value(json!({
            "id": "x",
            "uid": "campos-nulos",
            "data": {
                "title": "Campos nulos",
                "subtitle": null,
                "author": null,
                "banner": { "url": null },
                "content": [
                    { "heading": null, "body": [
                        { "type": "paragraph", "text": null, "spans": null }
                    ]},
                    { "heading": "Sem corpo", "body": null }
                ]
            }
        }))
        .unwrap();

        let detail = normalize_detail(&raw).unwrap();
        assert_eq!(detail.data.subtitle, "");
        assert_eq!(detail.data.author, "");
        assert_eq!(detail.data.banner.url, "");
        assert_eq!(detail.data.content.len(), 2);
        assert_eq!(detail.data.content[0].heading, "");
        assert_eq!(detail.data.content[0].body[0].text, "");
        assert!(detail.data.content[0].body[0].spans.is_empty());
        assert!(detail.data.content[1].body.is_empty());
    }

    #[test]
    fn test_null_banner_and_content() {
        let raw: RawDocument = serde_json::from_value(json!({
            "id": "x",
            "uid": "sem-banner",
            "data": { "title": "Sem banner", "banner": null, "content": null }
        }))
        .unwrap();

        let detail = normalize_detail(&raw).unwrap();
        assert_eq!(detail.data.banner.url, "");
        assert!(detail.data.content.is_empty());
    }
}
