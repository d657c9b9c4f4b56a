use super::*;

// =============================================================
// Helpers
// =============================================================

fn dto(id: &str) -> DocumentDto {
    DocumentDto {
        id: id.to_owned(),
        filename: format!("{id}.png"),
        created_at: "2024-03-01T10:05:00.000Z".to_owned(),
        summary: Some("A receipt.".to_owned()),
        text: None,
        image: vec![0x89, b'P', b'N', b'G', 1, 2, 3],
    }
}

fn summary(id: &str) -> DocumentSummary {
    DocumentSummary { id: id.to_owned(), image_url: format!("http://api.test/{id}.png") }
}

// =============================================================
// Document
// =============================================================

#[test]
fn from_dto_keeps_bytes_and_sniffs_mime() {
    let document = Document::from_dto(dto("d1"));
    let image = document.image.as_ref().unwrap();
    assert_eq!(image.mime, "image/png");
    assert_eq!(image.bytes.len(), 7);
    assert_eq!(document.summary, "A receipt.");
    assert_eq!(document.text, "");
    assert_eq!(document.created_at_display(), "01/03/2024 10:05");
}

#[test]
fn from_dto_without_image_has_no_handle() {
    let mut raw = dto("d1");
    raw.image.clear();
    let document = Document::from_dto(raw);
    assert!(document.image.is_none());
    assert!(document.image_src().is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_dto_outside_browser_has_no_object_url() {
    let document = Document::from_dto(dto("d1"));
    assert!(document.image_src().is_none());
}

// =============================================================
// DocumentViewState
// =============================================================

#[test]
fn missing_document_renders_not_found_error() {
    let mut state = DocumentViewState::default();
    let ticket = state.begin_load();
    state.apply(ticket, Err(ApiError::Status { status: 404, message: None }));
    assert_eq!(state.document.error(), Some("Document not found"));
}

#[test]
fn transport_failure_renders_generic_error() {
    let mut state = DocumentViewState::default();
    let ticket = state.begin_load();
    state.apply(ticket, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(state.document.error(), Some("Failed to fetch document"));
}

#[test]
fn older_document_response_does_not_overwrite_newer() {
    let mut state = DocumentViewState::default();
    let first = state.begin_load();
    let second = state.begin_load();
    assert!(state.apply(second, Ok(dto("d2"))));
    assert!(!state.apply(first, Ok(dto("d1"))));
    assert_eq!(state.document.loaded().unwrap().id, "d2");
}

#[test]
fn release_returns_to_loading_and_invalidates_ticket() {
    let mut state = DocumentViewState::default();
    let ticket = state.begin_load();
    state.release();
    assert!(!state.apply(ticket, Ok(dto("d1"))));
    assert!(state.document.is_loading());
}

// =============================================================
// GalleryState
// =============================================================

#[test]
fn gallery_refetch_shows_new_upload() {
    let mut state = GalleryState::default();
    let ticket = state.begin_load();
    state.apply(ticket, Ok(vec![summary("a")]));
    let ticket = state.begin_load();
    assert_eq!(state.items.loaded().map(Vec::len), Some(1));
    state.apply(ticket, Ok(vec![summary("a"), summary("b")]));
    let ids: Vec<_> = state.items.loaded().unwrap().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn gallery_errors_distinguish_transport_from_status() {
    let mut state = GalleryState::default();
    let ticket = state.begin_load();
    state.apply(ticket, Err(ApiError::Transport("x".to_owned())));
    assert_eq!(state.items.error(), Some("Error fetching images."));
    let ticket = state.begin_load();
    state.apply(ticket, Err(ApiError::Status { status: 500, message: None }));
    assert_eq!(state.items.error(), Some("Failed to fetch images."));
}

#[test]
fn gallery_remove_drops_deleted_item() {
    let mut state = GalleryState::default();
    let ticket = state.begin_load();
    state.apply(ticket, Ok(vec![summary("a"), summary("b")]));
    state.remove("a");
    assert_eq!(state.items.loaded().unwrap(), &vec![summary("b")]);
}
