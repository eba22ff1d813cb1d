//! Serializes rich-text fields into HTML.
//!
//! Pure and stateless: the same blocks always produce the same markup.
//! Consecutive list items are grouped into a single `<ul>` or `<ol>`.

mod annotations;
mod spans;

pub use annotations::{escape_attribute, escape_text};
pub use spans::render_inline;

use crate::model::{BlockKind, EmbedData, RichTextBlock};

/// Serializes a rich-text field into HTML.
pub fn as_html(blocks: &[RichTextBlock]) -> String {
    let mut output = String::new();
    let mut open_list: Option<&'static str> = None;

    for block in blocks {
        let list_tag = match block.kind {
            BlockKind::ListItem => Some("ul"),
            BlockKind::OrderedListItem => Some("ol"),
            _ => None,
        };

        if open_list != list_tag {
            if let Some(tag) = open_list {
                output.push_str(&format!("</{}>", tag));
            }
            if let Some(tag) = list_tag {
                output.push_str(&format!("<{}>", tag));
            }
            open_list = list_tag;
        }

        output.push_str(&render_block(block));
    }

    if let Some(tag) = open_list {
        output.push_str(&format!("</{}>", tag));
    }

    output
}

/// Plain text of a rich-text field, blocks separated by a space.
pub fn as_text(blocks: &[RichTextBlock]) -> String {
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_block(block: &RichTextBlock) -> String {
    let inline = || render_inline(&block.text, &block.spans);

    match &block.kind {
        BlockKind::Paragraph => format!("<p>{}</p>", inline()),
        BlockKind::Heading(level) => format!("<h{0}>{1}</h{0}>", level, inline()),
        BlockKind::Preformatted => format!("<pre>{}</pre>", inline()),
        BlockKind::ListItem | BlockKind::OrderedListItem => format!("<li>{}</li>", inline()),
        BlockKind::Image => render_image(block),
        BlockKind::Embed => render_embed(block.oembed.as_ref()),
        BlockKind::Unknown(tag) => {
            log::debug!("Rendering unknown block type '{}' as a paragraph", tag);
            if block.text.is_empty() {
                String::new()
            } else {
                format!("<p>{}</p>", inline())
            }
        }
    }
}

fn render_image(block: &RichTextBlock) -> String {
    let Some(url) = block.url.as_deref().filter(|u| !u.is_empty()) else {
        return String::new();
    };

    let mut img = format!(
        "<img src=\"{}\" alt=\"{}\"",
        escape_attribute(url),
        escape_attribute(block.alt.as_deref().unwrap_or_default())
    );
    if let Some(copyright) = block.copyright.as_deref().filter(|c| !c.is_empty()) {
        img.push_str(&format!(" copyright=\"{}\"", escape_attribute(copyright)));
    }
    img.push_str(" />");

    format!("<p class=\"block-img\">{}</p>", img)
}

fn render_embed(embed: Option<&EmbedData>) -> String {
    let Some(embed) = embed else {
        return String::new();
    };

    let mut attributes = String::new();
    for (name, value) in [
        ("data-oembed", embed.embed_url.as_deref()),
        ("data-oembed-type", embed.embed_type.as_deref()),
        ("data-oembed-provider", embed.provider_name.as_deref()),
    ] {
        if let Some(value) = value {
            attributes.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
        }
    }

    // Provider markup is trusted as delivered by the content API.
    format!(
        "<div{}>{}</div>",
        attributes,
        embed.html.as_deref().unwrap_or_default()
    )
}
