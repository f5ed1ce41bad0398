//! Rendering rules for a `ViewResponse`.

use crate::error::ApiError;
use crate::models::{FileType, ViewResponse};
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub const PDF_SCALE: f32 = 1.5;
pub const PDF_FIRST_PAGE: u32 = 1;

pub const LOADING_DOCUMENT: &str = "Loading document...";
pub const LOADING_SUMMARY: &str = "Loading summary...";
pub const SUMMARY_ERROR: &str = "Error loading summary";

/// What the content region shows.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentContent {
    Loading,
    /// Decoded PDF bytes; only `page` is drawn, at `scale`.
    Pdf { bytes: Vec<u8>, page: u32, scale: f32 },
    /// Server-rendered markup, inserted as-is.
    Markup(String),
    Preformatted { text: String, class: Option<&'static str> },
    /// Error banner. Nothing else is shown alongside it.
    Failure(String),
}

impl DocumentContent {
    pub fn failure(reason: impl std::fmt::Display) -> Self {
        DocumentContent::Failure(format!("Failed to load document: {reason}"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub content: DocumentContent,
    pub summary: String,
}

/// Turns a view payload into region contents, or the error that aborts rendering.
pub fn render_view(view: ViewResponse) -> Result<RenderedView, ApiError> {
    if let Some(error) = view.error {
        return Err(ApiError::Application(error));
    }
    let content = match view.file_type {
        FileType::Pdf => {
            let bytes = STANDARD
                .decode(view.content.trim())
                .map_err(|e| ApiError::InvalidPayload(format!("invalid PDF data: {e}")))?;
            DocumentContent::Pdf {
                bytes,
                page: PDF_FIRST_PAGE,
                scale: PDF_SCALE,
            }
        }
        FileType::Xlsx => DocumentContent::Markup(view.content),
        FileType::Json => DocumentContent::Preformatted {
            text: view.content,
            class: Some("json-content"),
        },
        FileType::Other(_) => DocumentContent::Preformatted {
            text: view.content,
            class: None,
        },
    };
    Ok(RenderedView {
        content,
        summary: view.summary,
    })
}
