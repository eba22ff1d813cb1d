// src/lib.rs
//! spacetraveling library — a static blog front-end for a Prismic repository.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `PrismicErrorCode`, `ValidationError`
//! - **Configuration** — `CommandLineInput`, `SiteConfig`
//! - **Domain model** — `PostSummary`, `PostDetail`, `RichTextBlock`, etc.
//! - **Content API** — `ContentRepository`, `PrismicHttpClient`
//! - **Listing** — `ListingAccumulator`, `PaginationState`
//! - **Formatting** — `as_html`, `PageRenderer`

pub mod api;
pub mod config;
pub mod constants;
pub mod detail;
pub mod error;
pub mod formatting;
pub mod listing;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod site;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, PrismicErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{
    BuildSettings, Command, CommandLineInput, PrebuildPolicy, SiteCommand, SiteConfig,
};

// --- Domain Model ---
pub use crate::model::{
    Banner, BlockKind, ContentSection, EmbedData, LinkData, PostData, PostDetail, PostDetailData,
    PostSummary, PublicationDate, RichTextBlock, Span, SpanKind,
};

// --- Domain Types ---
pub use crate::types::{
    AccessToken, ApiEndpoint, ContinuationRef, DocumentType, PostUid, RenderedHtml,
};

// --- Content API ---
pub use crate::api::{
    client::ApiResponse,
    responses::{RawDocument, SearchPage, SearchResponse},
    ContentRepository, ListQuery, PrismicHttpClient,
};

// --- Listing & Detail ---
pub use crate::detail::{normalize_detail, resolve_post, resolve_posts, ResolvedPosts};
pub use crate::listing::{
    normalize_page, normalize_summary, ListingAccumulator, ListingPage, LoadOutcome,
    PaginationState,
};

// --- Formatting ---
pub use crate::formatting::{as_html, as_text, display_date, reading_minutes, PageRenderer};

// --- Pipeline ---
pub use crate::pipeline::{execute_pipeline, ContentSource, PageComposer, SiteDelivery};
pub use crate::site::{compose_site, SiteContent, StaticSite};
