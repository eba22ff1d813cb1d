// src/formatting/rich_text/annotations.rs
//! HTML tags for inline spans and text escaping.

use crate::model::SpanKind;

/// Opening and closing markup for one span.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanTags {
    pub open: String,
    pub close: &'static str,
}

/// Maps a span kind to its HTML tags.
///
/// Returns `None` for spans that carry no markup: unknown kinds and links
/// that resolve to no href.
pub fn span_tags(kind: &SpanKind) -> Option<SpanTags> {
    match kind {
        SpanKind::Strong => Some(SpanTags {
            open: "<strong>".to_string(),
            close: "</strong>",
        }),
        SpanKind::Em => Some(SpanTags {
            open: "<em>".to_string(),
            close: "</em>",
        }),
        SpanKind::Hyperlink(link) => {
            let href = link.href()?;
            let mut open = format!("<a href=\"{}\"", escape_attribute(&href));
            if let Some(target) = link.target.as_deref().filter(|t| !t.is_empty()) {
                open.push_str(&format!(
                    " target=\"{}\" rel=\"noopener\"",
                    escape_attribute(target)
                ));
            }
            open.push('>');
            Some(SpanTags { open, close: "</a>" })
        }
        SpanKind::Label(label) => Some(SpanTags {
            open: format!("<span class=\"{}\">", escape_attribute(label)),
            close: "</span>",
        }),
        SpanKind::Unknown { tag, .. } => {
            log::debug!("Unknown span type: {}", tag);
            None
        }
    }
}

/// Escapes text content and turns line breaks into `<br />`.
pub fn escape_text(text: &str) -> String {
    html_escape::encode_text(text).replace('\n', "<br />")
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attribute(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinkData;

    #[test]
    fn test_hyperlink_with_target() {
        let link = LinkData {
            target: Some("_blank".to_string()),
            ..LinkData::web("https://example.com/?a=1&b=2")
        };
        let tags = span_tags(&SpanKind::Hyperlink(link)).unwrap();
        assert_eq!(
            tags.open,
            "<a href=\"https://example.com/?a=1&amp;b=2\" target=\"_blank\" rel=\"noopener\">"
        );
        assert_eq!(tags.close, "</a>");
    }

    #[test]
    fn test_link_without_href_has_no_markup() {
        assert_eq!(span_tags(&SpanKind::Hyperlink(LinkData::default())), None);
        assert_eq!(
            span_tags(&SpanKind::Unknown {
                tag: "sparkle".to_string(),
                data: None
            }),
            None
        );
    }

    #[test]
    fn test_text_escaping() {
        assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_text("linha 1\nlinha 2"), "linha 1<br />linha 2");
    }
}
