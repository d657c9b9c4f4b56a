//! # docchat-client
//!
//! Leptos + WASM frontend for the document chat application: upload scanned
//! documents, browse them in a gallery, ask questions about one in a chat
//! thread, and download a PDF report of the document with its transcript.
//!
//! The crate builds twice. With `ssr` it is linked into the host server to
//! render the HTML shell; with `hydrate` it is compiled to WASM and takes over
//! in the browser, where all API traffic happens.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod report;
pub mod state;
pub mod util;

/// WASM entry point: attach to the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("docchat client hydrating");
    leptos::mount::hydrate_body(app::App);
}
