//! URL normalization and search URL construction

/// Search provider template; `%s` is replaced by the encoded query.
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://www.bing.com/search?q=%s";

const SCHEME_PREFIXES: &[&str] = &["http://", "https://", "file://", "about:"];

/// Prepend `http://` to bare input like `example.com`.
///
/// This is the only normalization the shell applies; anything else
/// malformed is left for the engine to reject as a failed load.
pub fn normalize_url(input: &str) -> String {
    let input = input.trim();

    if SCHEME_PREFIXES
        .iter()
        .any(|scheme| input.starts_with(scheme))
    {
        input.to_string()
    } else {
        format!("http://{}", input)
    }
}

/// Search provider URL template.
#[derive(Debug, Clone)]
pub struct SearchTemplate {
    template: String,
}

impl SearchTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Build the provider URL with the query percent-encoded.
    pub fn build(&self, query: &str) -> String {
        self.template.replace("%s", &urlencoding::encode(query))
    }
}

impl Default for SearchTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_TEMPLATE)
    }
}

mod urlencoding {
    /// Percent-encode everything outside the RFC 3986 unreserved set.
    pub fn encode(input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 3);
        for byte in input.bytes() {
            if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
                out.push(byte as char);
            } else {
                out.push_str(&format!("%{:02X}", byte));
            }
        }
        out
    }
}
