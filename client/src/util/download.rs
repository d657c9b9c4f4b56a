//! Client-side file save via a temporary `<a download>` element.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// How long the blob URL outlives the click that starts the download.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
const REVOKE_DELAY_MS: u32 = 40_000;

/// Offer `bytes` to the user as a download named `filename`.
///
/// # Errors
///
/// Returns a description of the browser error if the Blob, URL, or anchor
/// cannot be created, or if called outside the browser.
pub fn save_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let blob = super::object_url::blob_from_bytes(bytes, mime)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "created element is not an anchor".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        // Some browsers read the blob after click() returns.
        gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, filename, mime);
        Err("downloads require a browser".to_owned())
    }
}
