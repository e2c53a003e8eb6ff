//! Browser-local file download for export payloads.
//!
//! TRADE-OFFS
//! ==========
//! The download is a pure client-side save: bytes become a Blob, a
//! temporary object URL, and a synthetic anchor click. Failures are logged
//! and swallowed; nothing in application state depends on the outcome.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use chrono::NaiveDate;

/// Date-stamped export filename, e.g. `cards-2026-08-25.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("cards-{}.csv", date.format("%Y-%m-%d"))
}

/// Save `bytes` as a CSV download named `filename`.
pub fn save_csv(filename: &str, bytes: &[u8]) {
    #[cfg(feature = "hydrate")]
    {
        if trigger_download(filename, bytes).is_none() {
            log::error!("failed to trigger download for {filename}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, bytes);
    }
}

#[cfg(feature = "hydrate")]
fn trigger_download(filename: &str, bytes: &[u8]) -> Option<()> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let document = window.document()?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).buffer());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let blob = web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &options).ok()?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;

    let anchor = document
        .create_element("a")
        .ok()?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .ok()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let body = document.body()?;
    body.append_child(&anchor).ok()?;
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);
    Some(())
}
