//! Structured rich text as the content API delivers it.
//!
//! A rich-text field is an ordered list of blocks. Each block carries plain
//! `text` plus `spans` marking inline ranges (bold, links...) by character
//! offset. Unknown block and span kinds are kept so nothing is lost on the
//! way to the renderer.

use super::post::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `type` tag of a rich-text block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    Paragraph,
    /// `heading1` through `heading6`
    Heading(u8),
    Preformatted,
    ListItem,
    OrderedListItem,
    Image,
    Embed,
    Unknown(String),
}

impl BlockKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "paragraph" => Self::Paragraph,
            "preformatted" => Self::Preformatted,
            "list-item" => Self::ListItem,
            "o-list-item" => Self::OrderedListItem,
            "image" => Self::Image,
            "embed" => Self::Embed,
            other => match other.strip_prefix("heading").and_then(|n| n.parse::<u8>().ok()) {
                Some(level @ 1..=6) => Self::Heading(level),
                _ => Self::Unknown(other.to_string()),
            },
        }
    }

    pub fn tag(&self) -> String {
        match self {
            Self::Paragraph => "paragraph".to_string(),
            Self::Heading(level) => format!("heading{}", level),
            Self::Preformatted => "preformatted".to_string(),
            Self::ListItem => "list-item".to_string(),
            Self::OrderedListItem => "o-list-item".to_string(),
            Self::Image => "image".to_string(),
            Self::Embed => "embed".to_string(),
            Self::Unknown(tag) => tag.clone(),
        }
    }
}

impl From<String> for BlockKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        kind.tag()
    }
}

/// One block of a rich-text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBlock {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spans: Vec<Span>,
    /// Image source (image blocks)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oembed: Option<EmbedData>,
    /// Fields this model does not interpret (image dimensions, link targets...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RichTextBlock {
    /// A block of the given kind with plain text and no spans.
    pub fn text(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            spans: Vec::new(),
            url: None,
            alt: None,
            copyright: None,
            oembed: None,
            extra: Map::new(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::text(BlockKind::Paragraph, text)
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }
}

/// oEmbed payload of an embed block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmbedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub embed_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

/// An inline markup range over a block's text, in character offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpan", into = "RawSpan")]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl Span {
    pub fn new(start: usize, end: usize, kind: SpanKind) -> Self {
        Self { start, end, kind }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpanKind {
    Strong,
    Em,
    Hyperlink(LinkData),
    Label(String),
    Unknown { tag: String, data: Option<Value> },
}

/// Target of a hyperlink span.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Set on links to other documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl LinkData {
    pub fn web(url: impl Into<String>) -> Self {
        Self {
            link_type: Some("Web".to_string()),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Resolves the link to an href. Document links point at their post page.
    pub fn href(&self) -> Option<String> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            return Some(url.to_string());
        }
        self.uid
            .as_deref()
            .filter(|uid| !uid.is_empty())
            .map(|uid| format!("/post/{}", uid))
    }
}

/// Wire shape of a span.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSpan {
    start: usize,
    end: usize,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl TryFrom<RawSpan> for Span {
    type Error = serde_json::Error;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        let kind = match raw.kind.as_str() {
            "strong" => SpanKind::Strong,
            "em" => SpanKind::Em,
            "hyperlink" => {
                let data = raw.data.unwrap_or(Value::Null);
                let link = if data.is_null() {
                    LinkData::default()
                } else {
                    serde_json::from_value(data)?
                };
                SpanKind::Hyperlink(link)
            }
            "label" => {
                let label = raw
                    .data
                    .as_ref()
                    .and_then(|d| d.get("label"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                SpanKind::Label(label)
            }
            _ => SpanKind::Unknown {
                tag: raw.kind,
                data: raw.data,
            },
        };

        Ok(Span {
            start: raw.start,
            end: raw.end,
            kind,
        })
    }
}

impl From<Span> for RawSpan {
    fn from(span: Span) -> Self {
        let (kind, data) = match span.kind {
            SpanKind::Strong => ("strong".to_string(), None),
            SpanKind::Em => ("em".to_string(), None),
            SpanKind::Hyperlink(link) => ("hyperlink".to_string(), serde_json::to_value(link).ok()),
            SpanKind::Label(label) => (
                "label".to_string(),
                Some(serde_json::json!({ "label": label })),
            ),
            SpanKind::Unknown { tag, data } => (tag, data),
        };

        RawSpan {
            start: span.start,
            end: span.end,
            kind,
            data,
        }
    }
}
