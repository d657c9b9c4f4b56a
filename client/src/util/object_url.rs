//! Owned `blob:` object URLs for decoded document images.
//!
//! An `ObjectUrl` is created from raw bytes and revokes itself on drop, so the
//! blob is released as soon as the document that owns it is replaced or the
//! view unmounts.

#[cfg(test)]
#[path = "object_url_test.rs"]
mod object_url_test;

/// MIME type guessed from the leading magic bytes; PNG when unknown.
pub fn sniff_image_mime(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "image/png",
    }
}

/// A `blob:` URL that is revoked when dropped.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Wrap `bytes` in a Blob of type `mime` and create a URL for it.
    ///
    /// # Errors
    ///
    /// Returns a description of the browser error if the Blob or URL cannot be
    /// created, or if called outside the browser.
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Result<Self, String> {
        #[cfg(feature = "hydrate")]
        {
            let blob = blob_from_bytes(bytes, mime)?;
            let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;
            Ok(Self { url })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (bytes, mime);
            Err("object URLs require a browser".to_owned())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            let _ = web_sys::Url::revoke_object_url(&self.url);
        }
    }
}

/// Build a Blob holding a copy of `bytes`.
#[cfg(feature = "hydrate")]
pub(crate) fn blob_from_bytes(bytes: &[u8], mime: &str) -> Result<web_sys::Blob, String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array.buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(|e| format!("{e:?}"))
}
