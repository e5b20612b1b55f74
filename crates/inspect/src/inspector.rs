//! The [`MessageInspector`]: one request, its optional response, and their
//! diagnostic rendering.

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::{Method, Request, Response, Uri, Version};
use tracing::debug;

use crate::config::InspectorConfig;
use crate::error::InspectError;
use crate::message::MessageBody;
use crate::panel::{DebugHost, FULL_WIDTH};
use crate::render::{self, Fragment};

pub const REQUEST_CAPTION: &str = "Request";
pub const RESPONSE_CAPTION: &str = "Response";

/// Holds an outbound request and, once the exchange is done, its response.
///
/// The inspector only reads the messages. Rendering never fails: every read
/// error ends up as a fixed placeholder in the output.
///
/// ```
/// use http::{Request, Response, StatusCode};
/// use micro_inspect::MessageInspector;
///
/// let request = Request::get("https://example.com/health").body("").unwrap();
/// let mut inspector = MessageInspector::new(request);
/// assert!(inspector.response().is_none());
///
/// inspector.attach_response(Response::builder().status(StatusCode::NO_CONTENT).body("").unwrap());
/// let diagnostics = inspector.render_diagnostics();
/// assert!(diagnostics.request().contains("GET /health HTTP/1.1"));
/// assert!(diagnostics.response().contains("HTTP/1.1 204 No Content"));
/// ```
#[derive(Debug)]
pub struct MessageInspector<B = Bytes> {
    request: Request<B>,
    response: Option<Response<B>>,
    config: InspectorConfig,
}

impl<B: MessageBody> MessageInspector<B> {
    pub fn new(request: Request<B>) -> Self {
        Self { request, response: None, config: InspectorConfig::default() }
    }

    /// Builds the request from its parts and wraps it.
    ///
    /// The version defaults to HTTP/1.1.
    ///
    /// # Errors
    ///
    /// Returns [`InspectError::InvalidRequest`] if the method, uri or any header
    /// is invalid.
    pub fn create_request<M, U, K, V, H>(
        method: M,
        uri: U,
        headers: H,
        body: B,
        version: Option<Version>,
    ) -> Result<Self, InspectError>
    where
        Method: TryFrom<M>,
        <Method as TryFrom<M>>::Error: Into<http::Error>,
        Uri: TryFrom<U>,
        <Uri as TryFrom<U>>::Error: Into<http::Error>,
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
        H: IntoIterator<Item = (K, V)>,
    {
        let mut builder = Request::builder().method(method).uri(uri).version(version.unwrap_or(Version::HTTP_11));
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        Ok(Self::new(builder.body(body)?))
    }

    #[must_use]
    pub fn with_config(mut self, config: InspectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Replaces the request, dropping the previous one.
    pub fn attach_request(&mut self, request: Request<B>) -> &mut Self {
        debug!(method = %request.method(), uri = %request.uri(), "attach request");
        self.request = request;
        self
    }

    pub fn request(&self) -> &Request<B> {
        &self.request
    }

    /// Replaces the response, dropping the previous one.
    pub fn attach_response(&mut self, response: Response<B>) -> &mut Self {
        debug!(status = %response.status(), "attach response");
        self.response = Some(response);
        self
    }

    pub fn response(&self) -> Option<&Response<B>> {
        self.response.as_ref()
    }

    pub fn request_headers(&self) -> Fragment {
        render::headers(Some(&self.request))
    }

    pub fn response_headers(&self) -> Fragment {
        render::headers(self.response.as_ref())
    }

    pub fn request_body(&self) -> Fragment {
        render::body(Some(&self.request), &self.config)
    }

    pub fn response_body(&self) -> Fragment {
        render::body(self.response.as_ref(), &self.config)
    }

    /// Renders the request and the response into one HTML block each.
    pub fn render_diagnostics(&self) -> Diagnostics {
        Diagnostics {
            request: section(self.request_headers(), self.request_body()),
            response: section(self.response_headers(), self.response_body()),
        }
    }

    /// Adds a "Request" and a "Response" tab to the host, both at full width.
    pub fn create_debug_widget<H: DebugHost + ?Sized>(&self, host: &mut H) {
        let Diagnostics { request, response } = self.render_diagnostics();
        host.add_tab(REQUEST_CAPTION, request, FULL_WIDTH);
        host.add_tab(RESPONSE_CAPTION, response, FULL_WIDTH);
    }
}

/// The rendered request and response blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    request: String,
    response: String,
}

impl Diagnostics {
    pub fn request(&self) -> &str {
        &self.request
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn into_parts(self) -> (String, String) {
        (self.request, self.response)
    }
}

fn section(headers: Fragment, body: Fragment) -> String {
    format!(
        "<div style=\"padding:10px;\"><h3>HTTP-Headers</h3>{headers}</div>\
         <div style=\"padding:10px;\"><h3>HTTP-Body</h3>{body}</div>"
    )
}
