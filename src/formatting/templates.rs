// src/formatting/templates.rs
//! Renders the listing and post pages with Handlebars.
//!
//! Templates ship embedded in the binary; a template directory holding
//! `home.hbs`, `post.hbs` and `partials/header.hbs` replaces them.

use super::dates::display_optional_date;
use super::reading_time::reading_minutes;
use super::rich_text::as_html;
use crate::error::AppError;
use crate::listing::PaginationState;
use crate::model::{PostDetail, PostSummary};
use crate::output::post_href;
use crate::types::RenderedHtml;
use handlebars::Handlebars;
use serde_json::{json, Value};
use std::path::Path;

const HOME_TEMPLATE: &str = "home";
const POST_TEMPLATE: &str = "post";
const HEADER_PARTIAL: &str = "header";

const EMBEDDED_HOME: &str = include_str!("../../templates/home.hbs");
const EMBEDDED_POST: &str = include_str!("../../templates/post.hbs");
const EMBEDDED_HEADER: &str = include_str!("../../templates/partials/header.hbs");

const LOAD_MORE_LABEL: &str = "Carregar mais posts";

/// Page renderer holding the registered templates.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    /// Renderer using the embedded templates.
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_sources(EMBEDDED_HOME, EMBEDDED_POST, EMBEDDED_HEADER)
    }

    /// Renderer using the templates in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, AppError> {
        log::info!("Loading templates from {}", dir.display());
        let home = read_template(&dir.join("home.hbs"))?;
        let post = read_template(&dir.join("post.hbs"))?;
        let header = read_template(&dir.join("partials").join("header.hbs"))?;
        Self::from_sources(&home, &post, &header)
    }

    /// Embedded templates unless a directory is given.
    pub fn new(template_dir: Option<&Path>) -> Result<Self, AppError> {
        match template_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded(),
        }
    }

    fn from_sources(home: &str, post: &str, header: &str) -> Result<Self, AppError> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_partial(HEADER_PARTIAL, header)
            .map_err(|e| template_error(HEADER_PARTIAL, e))?;
        handlebars
            .register_template_string(HOME_TEMPLATE, home)
            .map_err(|e| template_error(HOME_TEMPLATE, e))?;
        handlebars
            .register_template_string(POST_TEMPLATE, post)
            .map_err(|e| template_error(POST_TEMPLATE, e))?;
        Ok(Self { handlebars })
    }

    /// Renders the listing page. The "load more" control only appears while
    /// the listing holds a continuation.
    pub fn render_home(&self, listing: &PaginationState) -> Result<RenderedHtml, AppError> {
        let data = json!({
            "posts": listing.results.iter().map(summary_data).collect::<Vec<_>>(),
            "next_page": listing.next_page.as_ref().map(|n| n.as_str()),
            "load_more_label": LOAD_MORE_LABEL,
        });
        self.render(HOME_TEMPLATE, &data)
    }

    /// Renders a post page.
    pub fn render_post(&self, post: &PostDetail) -> Result<RenderedHtml, AppError> {
        let data = post_data(post);
        self.render(POST_TEMPLATE, &data)
    }

    fn render(&self, name: &str, data: &Value) -> Result<RenderedHtml, AppError> {
        let html = self
            .handlebars
            .render(name, data)
            .map_err(|e| AppError::TemplateRenderError {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        Ok(RenderedHtml::new(html))
    }
}

fn summary_data(post: &PostSummary) -> Value {
    json!({
        "uid": post.uid.as_str(),
        "href": post_href(&post.uid),
        "title": post.data.title,
        "subtitle": post.data.subtitle,
        "author": post.data.author,
        "date": display_optional_date(post.first_publication_date.as_ref()),
    })
}

fn post_data(post: &PostDetail) -> Value {
    let sections: Vec<Value> = post
        .data
        .content
        .iter()
        .map(|section| {
            json!({
                "heading": section.heading,
                "body_html": as_html(&section.body),
            })
        })
        .collect();

    json!({
        "uid": post.uid.as_str(),
        "title": post.data.title,
        "subtitle": post.data.subtitle,
        "author": post.data.author,
        "date": display_optional_date(post.first_publication_date.as_ref()),
        "banner_url": post.data.banner.url,
        "reading_time": format!("{} min", reading_minutes(&post.data.content)),
        "sections": sections,
    })
}

fn read_template(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|e| AppError::TemplateNotFound {
        path: path.display().to_string(),
        source: e,
    })
}

fn template_error(name: &str, error: impl std::fmt::Display) -> AppError {
    AppError::TemplateRenderError {
        name: name.to_string(),
        message: error.to_string(),
    }
}
