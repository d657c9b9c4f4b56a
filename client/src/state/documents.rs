//! Gallery and document-detail state.
//!
//! DESIGN
//! ======
//! Both views hold a `LoadState` plus a load generation. A fetch takes a
//! ticket when it starts and its result is applied only if the ticket is
//! still current, so navigating quickly between documents never lets an older
//! response overwrite a newer one.

#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use std::sync::Arc;

use crate::net::error::ApiError;
use crate::net::types::{DocumentDto, DocumentSummary};
use crate::util::object_url::{ObjectUrl, sniff_image_mime};
use crate::util::scope::Generation;
use crate::util::time::format_timestamp;

/// Page-level load status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Decoded document image. The object URL is released when the last clone
/// of the owning `Document` is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentImage {
    pub bytes: Arc<Vec<u8>>,
    pub mime: &'static str,
    pub url: Option<Arc<ObjectUrl>>,
}

/// A document as shown on the detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub filename: String,
    /// Creation time as sent by the API.
    pub created_at: String,
    pub summary: String,
    pub text: String,
    pub image: Option<DocumentImage>,
}

impl Document {
    /// Convert the wire document, wrapping image bytes in an object URL when
    /// running in the browser.
    pub fn from_dto(dto: DocumentDto) -> Self {
        let image = (!dto.image.is_empty()).then(|| {
            let mime = sniff_image_mime(&dto.image);
            let url = ObjectUrl::from_bytes(&dto.image, mime).ok().map(Arc::new);
            DocumentImage { bytes: Arc::new(dto.image), mime, url }
        });
        Self {
            id: dto.id,
            filename: dto.filename,
            created_at: dto.created_at,
            summary: dto.summary.unwrap_or_default(),
            text: dto.text.unwrap_or_default(),
            image,
        }
    }

    pub fn created_at_display(&self) -> String {
        format_timestamp(&self.created_at)
    }

    pub fn image_src(&self) -> Option<String> {
        self.image
            .as_ref()
            .and_then(|image| image.url.as_ref())
            .map(|url| url.as_str().to_owned())
    }
}

/// Text for the error view when a document cannot be loaded.
pub fn document_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status: 404, .. } => "Document not found".to_owned(),
        ApiError::Decode(_) => "Failed to read document".to_owned(),
        _ => "Failed to fetch document".to_owned(),
    }
}

/// Text for the gallery error view.
pub fn gallery_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) => "Error fetching images.".to_owned(),
        _ => "Failed to fetch images.".to_owned(),
    }
}

/// Gallery on the home page.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub items: LoadState<Vec<DocumentSummary>>,
    pub generation: Generation,
    pub delete_error: Option<String>,
}

impl GalleryState {
    /// Start a (re)load. The current list stays visible during refetches.
    pub fn begin_load(&mut self) -> Generation {
        self.generation.advance()
    }

    pub fn apply(&mut self, ticket: Generation, result: Result<Vec<DocumentSummary>, ApiError>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.items = match result {
            Ok(items) => LoadState::Loaded(items),
            Err(err) => LoadState::Failed(gallery_error_message(&err)),
        };
        true
    }

    /// Drop a deleted document without waiting for the refetch.
    pub fn remove(&mut self, id: &str) {
        if let LoadState::Loaded(items) = &mut self.items {
            items.retain(|item| item.id != id);
        }
    }
}

/// Detail page for one document.
#[derive(Clone, Debug, Default)]
pub struct DocumentViewState {
    pub document: LoadState<Document>,
    pub generation: Generation,
}

impl DocumentViewState {
    /// Start loading a document, releasing the previous one.
    pub fn begin_load(&mut self) -> Generation {
        self.document = LoadState::Loading;
        self.generation.advance()
    }

    pub fn apply(&mut self, ticket: Generation, result: Result<DocumentDto, ApiError>) -> bool {
        if !self.generation.is_current(ticket) {
            return false;
        }
        self.document = match result {
            Ok(dto) => LoadState::Loaded(Document::from_dto(dto)),
            Err(err) => LoadState::Failed(document_error_message(&err)),
        };
        true
    }

    /// Release the document and its image handle.
    pub fn release(&mut self) {
        self.document = LoadState::Loading;
        self.generation.advance();
    }
}
