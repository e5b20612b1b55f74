//! Response bodies the rendering benchmarks run against.

pub const JSON: &str = "application/json; charset=utf-8";
pub const HTML: &str = "text/html; charset=utf-8";

pub static ORDER_JSON: BodyFixture = BodyFixture::new("json_body", JSON, include_str!("../resources/body/order.json"));
pub static CATALOG_HTML: BodyFixture =
    BodyFixture::new("html_body", HTML, include_str!("../resources/body/catalog.html"));

/// A response body together with the `Content-Type` it is served with.
#[derive(Debug, Clone, Copy)]
pub struct BodyFixture {
    name: &'static str,
    content_type: &'static str,
    content: &'static str,
}

impl BodyFixture {
    pub const fn new(name: &'static str, content_type: &'static str, content: &'static str) -> Self {
        Self { name, content_type, content }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    /// Body size in bytes, as the inspector's size guard sees it.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

pub fn fixtures() -> [BodyFixture; 2] {
    [ORDER_JSON, CATALOG_HTML]
}
