//! Blob hand-off for resume files.
//!
//! Resume bytes come through the authenticated request pipeline (a plain
//! `<a href>` cannot carry the bearer token), so the browser side of the
//! transfer lives here: wrap the bytes in an object URL, then either open
//! a tab or synthesize an anchor click for a save-as download.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Open fetched bytes in a new tab.
pub fn open_in_new_tab(bytes: &[u8]) {
    #[cfg(feature = "hydrate")]
    {
        let _ = try_open(bytes);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = bytes;
    }
}

/// Trigger a save-as download of fetched bytes under `file_name`.
pub fn save_as(bytes: &[u8], file_name: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = try_save(bytes, file_name);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (bytes, file_name);
    }
}

#[cfg(feature = "hydrate")]
fn object_url(bytes: &[u8]) -> Option<String> {
    let parts = js_sys::Array::new();
    let buffer: wasm_bindgen::JsValue = js_sys::Uint8Array::from(bytes).into();
    parts.push(&buffer);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}

#[cfg(feature = "hydrate")]
fn try_open(bytes: &[u8]) -> Option<()> {
    let url = object_url(bytes)?;
    let _ = web_sys::window()?.open_with_url_and_target(&url, "_blank");
    // The URL is left alive; the new tab still needs it to load.
    Some(())
}

#[cfg(feature = "hydrate")]
fn try_save(bytes: &[u8], file_name: &str) -> Option<()> {
    let url = object_url(bytes)?;
    let document = web_sys::window()?.document()?;
    let anchor: web_sys::HtmlAnchorElement =
        document.create_element("a").ok()?.dyn_into().ok()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document.body()?;
    let _ = body.append_child(&anchor);
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Some(())
}
