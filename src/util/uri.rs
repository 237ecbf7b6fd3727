//! URI component encoding, delegated to the browser.

/// Percent-encode a value for use inside a query string.
pub fn encode_component(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::encode_uri_component(raw).into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}
