//! URL state encoding/decoding for shareable URLs.
//!
//! Encodes the selected country in the URL query string so reloading
//! flies back to it and URLs can be shared.

/// Parsed URL parameters.
#[derive(Debug, Default, PartialEq)]
pub struct UrlParams {
    pub country: Option<String>,
}

/// Parses a query string such as `?country=New%20Zealand`.
pub fn parse_query(search: &str) -> UrlParams {
    let mut params = UrlParams::default();

    let query = search.trim_start_matches('?');
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next().unwrap_or("");
        let value = kv.next().unwrap_or("");
        if key == "country" {
            let name = decode_component(value);
            if !name.is_empty() {
                params.country = Some(name);
            }
        }
    }

    params
}

/// Builds the query string for `country`.
pub fn build_query(country: &str) -> String {
    format!("?country={}", encode_component(country))
}

/// Parse URL query parameters from the current browser URL.
pub fn parse_from_url() -> UrlParams {
    parse_query(&current_search())
}

/// Push current state to the URL query string using `replaceState`.
pub fn push_to_url(country: &str) {
    replace_query(&build_query(country));
}

#[cfg(target_arch = "wasm32")]
fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn replace_query(query: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(query)) {
        log::warn!("Failed to update URL: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn encode_component(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

/// Decodes with `decodeURIComponent`, keeping a malformed value verbatim.
#[cfg(target_arch = "wasm32")]
fn decode_component(value: &str) -> String {
    let value = value.replace('+', " ");
    match js_sys::decode_uri_component(&value) {
        Ok(decoded) => decoded.into(),
        Err(_) => value,
    }
}

/// Native builds have no address bar.
#[cfg(not(target_arch = "wasm32"))]
fn current_search() -> String {
    String::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn replace_query(query: &str) {
    log::debug!("URL state not available natively: {}", query);
}

/// Percent-encodes everything outside the unreserved set.
#[cfg(not(target_arch = "wasm32"))]
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decodes `%XX` escapes and `+` as space. Invalid escapes are kept verbatim.
#[cfg(not(target_arch = "wasm32"))]
fn decode_component(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => match (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 2;
                }
                _ => out.push(b'%'),
            },
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(not(target_arch = "wasm32"))]
fn hex(digit: u8) -> Option<u8> {
    (digit as char).to_digit(16).map(|d| d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_country() {
        assert_eq!(
            parse_query("?country=France").country.as_deref(),
            Some("France")
        );
        assert_eq!(
            parse_query("?x=1&country=New%20Zealand").country.as_deref(),
            Some("New Zealand")
        );
        assert_eq!(
            parse_query("country=Costa+Rica").country.as_deref(),
            Some("Costa Rica")
        );
    }

    #[test]
    fn test_missing_or_empty_country() {
        assert_eq!(parse_query(""), UrlParams::default());
        assert_eq!(parse_query("?country="), UrlParams::default());
        assert_eq!(parse_query("?site=KDMX"), UrlParams::default());
    }

    #[test]
    fn test_build_query_escapes() {
        assert_eq!(build_query("France"), "?country=France");
        assert_eq!(
            build_query("Bosnia and Herzegovina"),
            "?country=Bosnia%20and%20Herzegovina"
        );
        let name = "Côte d'Ivoire";
        let parsed = parse_query(&build_query(name));
        assert_eq!(parsed.country.as_deref(), Some(name));
    }

    #[test]
    fn test_bad_escape_kept_verbatim() {
        assert_eq!(parse_query("?country=%zz").country.as_deref(), Some("%zz"));
        assert_eq!(parse_query("?country=a%2").country.as_deref(), Some("a%2"));
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_native_url_state_is_empty() {
        push_to_url("France");
        assert_eq!(parse_from_url(), UrlParams::default());
    }
}
