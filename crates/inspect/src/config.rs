//! Rendering limits and the fixed placeholder texts.
//!
//! The placeholders are part of the output contract: host UIs and log scrapers
//! match on them, so they are exposed as constants rather than inlined.

use http::header::{AUTHORIZATION, HeaderName};

/// Bodies declaring more bytes than this are never read
pub const MAX_BODY_SIZE: u64 = 1024 * 1024;

/// Nesting levels expanded when dumping a JSON body
pub const DUMP_DEPTH: usize = 4;

pub const MESSAGE_EMPTY: &str = "Message empty.";
pub const BODY_TOO_BIG: &str = "Message body is too big to display.";
pub const HEADERS_ERROR: &str = "Error reading message headers.";
pub const BODY_ERROR: &str = "Error reading message body.";

/// Limits applied by [`MessageInspector`](crate::MessageInspector) while rendering.
///
/// ```
/// use micro_inspect::InspectorConfig;
///
/// let config = InspectorConfig::default().max_body_size(64 * 1024).dump_depth(2);
/// assert_eq!(config.max_body_size_limit(), 64 * 1024);
/// assert_eq!(config.dump_depth_limit(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectorConfig {
    max_body_size: u64,
    dump_depth: usize,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self { max_body_size: MAX_BODY_SIZE, dump_depth: DUMP_DEPTH }
    }
}

impl InspectorConfig {
    #[must_use]
    pub fn max_body_size(mut self, max_body_size: u64) -> Self {
        self.max_body_size = max_body_size;
        self
    }

    #[must_use]
    pub fn dump_depth(mut self, dump_depth: usize) -> Self {
        self.dump_depth = dump_depth;
        self
    }

    pub fn max_body_size_limit(&self) -> u64 {
        self.max_body_size
    }

    pub fn dump_depth_limit(&self) -> usize {
        self.dump_depth
    }

    /// Returns true if a body declaring `size` bytes may be read.
    ///
    /// Unknown sizes are never readable.
    pub fn accepts_body_size(&self, size: Option<u64>) -> bool {
        size.is_some_and(|size| size <= self.max_body_size)
    }
}

/// Returns true for the one header left out of rendered header tables.
///
/// Header names are stored lowercase, so this matches `Authorization` exactly
/// and nothing else: `Proxy-Authorization` is still rendered.
pub fn is_redacted(name: &HeaderName) -> bool {
    *name == AUTHORIZATION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let config = InspectorConfig::default();
        assert_eq!(config.max_body_size_limit(), 1_048_576);
        assert_eq!(config.dump_depth_limit(), 4);
    }

    #[test]
    fn body_size_guard() {
        let config = InspectorConfig::default();
        assert!(config.accepts_body_size(Some(0)));
        assert!(config.accepts_body_size(Some(MAX_BODY_SIZE)));
        assert!(!config.accepts_body_size(Some(MAX_BODY_SIZE + 1)));
        assert!(!config.accepts_body_size(None));
    }

    #[test]
    fn redacts_authorization_only() {
        assert!(is_redacted(&AUTHORIZATION));
        assert!(is_redacted(&HeaderName::from_static("authorization")));
        assert!(!is_redacted(&http::header::PROXY_AUTHORIZATION));
        assert!(!is_redacted(&HeaderName::from_static("x-authorization")));
    }
}
