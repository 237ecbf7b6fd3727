//! Clock access. Requires a browser environment.

/// Today's date as `YYYY-MM-DD`, the shape the API expects for
/// application and posting dates. Empty outside the browser.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        iso.get(..10).unwrap_or_default().to_owned()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
