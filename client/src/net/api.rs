//! REST helpers for the remote document API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! bearer token and the calling view's abort signal.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; nothing is retried here. Pages
//! decide whether a failure redirects, renders an error view, or marks a
//! pending chat entry as failed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Credentials, DocumentDto, DocumentSummary, MessageDto};
#[cfg(feature = "hydrate")]
use super::types::{ApiErrorBody, CreateMessageRequest, LoginResponse, UploadResponse};
use crate::util::scope::ViewScope;

/// API origin used when `DOCCHAT_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Base URL of the document API, fixed at build time.
pub fn api_base_url() -> &'static str {
    option_env!("DOCCHAT_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn document_endpoint(base: &str, id: &str) -> String {
    endpoint(base, &format!("/document/{id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(base: &str, document_id: &str) -> String {
    endpoint(base, &format!("/message/{document_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn create_message_endpoint(base: &str, document_id: &str) -> String {
    endpoint(base, &format!("/message/create/{document_id}"))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn authed(
    builder: gloo_net::http::RequestBuilder,
    token: &str,
    scope: &ViewScope,
) -> gloo_net::http::RequestBuilder {
    let signal = scope.abort_signal();
    builder
        .header("Authorization", &bearer(token))
        .abort_signal(signal.as_ref())
}

#[cfg(feature = "hydrate")]
fn transport_error(err: &gloo_net::Error, scope: &ViewScope) -> ApiError {
    if scope.is_alive() {
        ApiError::Transport(err.to_string())
    } else {
        ApiError::Aborted
    }
}

#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.json::<ApiErrorBody>().await.unwrap_or_default();
    Err(ApiError::from_status(status, body.message))
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a bearer token via `POST /auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Status` carrying the server's `message` on rejection.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(api_base_url(), "/auth/login");
        let resp = gloo_net::http::Request::post(&url)
            .json(credentials)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = ensure_ok(resp).await?;
        let body: LoginResponse = decode(resp).await?;
        Ok(body.access_token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Returns `ApiError::Status` carrying the server's `message` on rejection.
pub async fn register(credentials: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(api_base_url(), "/auth/register");
        let resp = gloo_net::http::Request::post(&url)
            .json(credentials)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// List gallery entries via `GET /document/all`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-success status, or a body
/// that is not a list of `{id, imageUrl}`.
pub async fn list_documents(token: &str, scope: &ViewScope) -> Result<Vec<DocumentSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(api_base_url(), "/document/all");
        let resp = authed(gloo_net::http::Request::get(&url), token, scope)
            .send()
            .await
            .map_err(|e| transport_error(&e, scope))?;
        decode(ensure_ok(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, scope);
        Err(ApiError::Unavailable)
    }
}

/// Fetch one document, including its raw image bytes, via `GET /document/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-success status, or an
/// undecodable body.
pub async fn fetch_document(token: &str, id: &str, scope: &ViewScope) -> Result<DocumentDto, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = document_endpoint(api_base_url(), id);
        let resp = authed(gloo_net::http::Request::get(&url), token, scope)
            .send()
            .await
            .map_err(|e| transport_error(&e, scope))?;
        decode(ensure_ok(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, scope);
        Err(ApiError::Unavailable)
    }
}

/// Delete a document via `DELETE /document/{id}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or non-success status.
pub async fn delete_document(token: &str, id: &str, scope: &ViewScope) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = document_endpoint(api_base_url(), id);
        let resp = authed(gloo_net::http::Request::delete(&url), token, scope)
            .send()
            .await
            .map_err(|e| transport_error(&e, scope))?;
        ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, scope);
        Err(ApiError::Unavailable)
    }
}

/// Upload one file as multipart field `file` via `POST /document/upload`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or non-success status.
#[cfg(feature = "hydrate")]
pub async fn upload_document(
    token: &str,
    file: &web_sys::File,
    scope: &ViewScope,
) -> Result<Option<String>, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Transport(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Transport(format!("{e:?}")))?;

    let url = endpoint(api_base_url(), "/document/upload");
    let resp = authed(gloo_net::http::Request::post(&url), token, scope)
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| transport_error(&e, scope))?;
    let resp = ensure_ok(resp).await?;
    // Some deployments answer 201 with an empty body.
    Ok(resp.json::<UploadResponse>().await.ok().and_then(|body| body.image_url))
}

/// Fetch the ordered chat history for a document via `GET /message/{documentId}`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-success status, or an
/// undecodable body.
pub async fn fetch_messages(token: &str, document_id: &str, scope: &ViewScope) -> Result<Vec<MessageDto>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = messages_endpoint(api_base_url(), document_id);
        let resp = authed(gloo_net::http::Request::get(&url), token, scope)
            .send()
            .await
            .map_err(|e| transport_error(&e, scope))?;
        decode(ensure_ok(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, document_id, scope);
        Err(ApiError::Unavailable)
    }
}

/// Create a chat message via `POST /message/create/{documentId}`.
///
/// The response body is ignored; callers reconcile with a full refresh.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or non-success status.
pub async fn create_message(
    token: &str,
    document_id: &str,
    content: &str,
    order: u32,
    scope: &ViewScope,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = create_message_endpoint(api_base_url(), document_id);
        let body = CreateMessageRequest { content: content.to_owned(), order };
        let resp = authed(gloo_net::http::Request::post(&url), token, scope)
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| transport_error(&e, scope))?;
        ensure_ok(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, document_id, content, order, scope);
        Err(ApiError::Unavailable)
    }
}
