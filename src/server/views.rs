//! HTML and JSON view rendering.
//!
//! Templates are embedded at compile time and use `{{key}}` placeholders.
//! Text values are HTML-escaped on substitution; fragments produced by the
//! helpers below are inserted as-is.

use crate::album_store::Album;
use crate::forms::ValidationErrors;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    ArtistForm,
    ArtistResults,
    NewArtistForm,
    Message,
    Hello,
}

impl Template {
    pub fn name(&self) -> &'static str {
        match self {
            Template::ArtistForm => "artist_form",
            Template::ArtistResults => "artist_results",
            Template::NewArtistForm => "new_artist_form",
            Template::Message => "message",
            Template::Hello => "hello",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Template::ArtistForm => include_str!("../../templates/artist_form.html"),
            Template::ArtistResults => include_str!("../../templates/artist_results.html"),
            Template::NewArtistForm => include_str!("../../templates/new_artist_form.html"),
            Template::Message => include_str!("../../templates/message.html"),
            Template::Hello => include_str!("../../templates/hello.html"),
        }
    }
}

enum TemplateValue {
    Text(String),
    Html(String),
}

/// Flat dictionary of substitution values for one render.
#[derive(Default)]
pub struct TemplateContext {
    values: Vec<(&'static str, TemplateValue)>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.push((key, TemplateValue::Text(value.into())));
        self
    }

    /// Inserts pre-rendered markup without escaping.
    pub fn html(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.values.push((key, TemplateValue::Html(value.into())));
        self
    }

    fn get(&self, key: &str) -> Option<&TemplateValue> {
        self.values.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }
}

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Substitutes every `{{key}}` of the template. Keys missing from the
/// context render as empty strings.
pub fn render(template: Template, context: &TemplateContext) -> String {
    let source = template.source();
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];
        let end = match after_open.find("}}") {
            Some(end) => end,
            None => {
                out.push_str(&rest[start..]);
                return out;
            }
        };
        let key = after_open[..end].trim();
        match context.get(key) {
            Some(TemplateValue::Text(text)) => out.push_str(&escape_html(text)),
            Some(TemplateValue::Html(html)) => out.push_str(html),
            None => debug!("Template {} has no value for {:?}", template.name(), key),
        }
        rest = &after_open[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn render_page(status: StatusCode, template: Template, context: &TemplateContext) -> Response {
    (status, Html(render(template, context))).into_response()
}

pub fn message_page(status: StatusCode, title: &str, message: &str) -> Response {
    render_page(
        status,
        Template::Message,
        &TemplateContext::new().text("title", title).text("message", message),
    )
}

pub fn validation_errors_page(errors: &ValidationErrors) -> Response {
    render_page(
        StatusCode::BAD_REQUEST,
        Template::Message,
        &TemplateContext::new()
            .text("title", "Invalid request")
            .text("message", "Please correct the following fields:")
            .html("details", field_errors_list(errors)),
    )
}

pub fn album_rows(albums: &[Album]) -> String {
    albums
        .iter()
        .map(|album| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&album.artist),
                escape_html(&album.album),
                escape_html(&album.year),
                escape_html(&album.genre)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn field_errors_list(errors: &ValidationErrors) -> String {
    let items = errors
        .errors
        .iter()
        .map(|e| {
            format!(
                "<li><strong>{}</strong>: {}</li>",
                escape_html(e.field),
                escape_html(&e.message)
            )
        })
        .collect::<Vec<_>>()
        .join("");
    format!("<ul class=\"errors\">{}</ul>", items)
}
