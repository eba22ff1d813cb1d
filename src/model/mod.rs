//! Domain records: what a post looks like once normalized out of the API.

mod date;
mod post;
pub mod rich_text;

pub use date::PublicationDate;
pub use post::{Banner, ContentSection, PostData, PostDetail, PostDetailData, PostSummary};
pub use rich_text::{BlockKind, EmbedData, LinkData, RichTextBlock, Span, SpanKind};
