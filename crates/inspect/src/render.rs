//! Rendering of message headers and bodies into HTML fragments.
//!
//! Every rendering step returns a [`Fragment`] rather than a plain string, so
//! callers and tests can still tell a failed read apart from an absent message
//! or an oversized body. The fixed placeholder texts only appear once a
//! fragment is displayed.

use std::fmt;

use http::HeaderMap;
use http::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{BODY_ERROR, BODY_TOO_BIG, HEADERS_ERROR, InspectorConfig, MESSAGE_EMPTY, is_redacted};
use crate::dump::dump;
use crate::error::InspectError;
use crate::message::{HttpMessage, MessageBody};
use crate::text::{escape, plain_text};

/// Which part of a message a fragment was rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Headers,
    Body,
}

impl Section {
    /// The text shown in place of a section that could not be read.
    pub fn error_placeholder(self) -> &'static str {
        match self {
            Section::Headers => HEADERS_ERROR,
            Section::Body => BODY_ERROR,
        }
    }
}

/// The outcome of rendering one section of a message.
#[derive(Debug)]
pub enum Fragment {
    /// There is no message to render
    Empty,
    /// The body size is unknown or over the limit, so it was not read
    TooBig { size: Option<u64> },
    /// Rendered markup
    Html(String),
    /// Reading the section failed
    Failed(Section, InspectError),
}

impl Fragment {
    pub fn is_empty(&self) -> bool {
        matches!(self, Fragment::Empty)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fragment::Failed(..))
    }

    /// Returns the cause if reading the section failed.
    pub fn error(&self) -> Option<&InspectError> {
        match self {
            Fragment::Failed(_, e) => Some(e),
            _ => None,
        }
    }

    pub fn into_html(self) -> String {
        match self {
            Fragment::Html(html) => html,
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Empty => f.write_str(MESSAGE_EMPTY),
            Fragment::TooBig { .. } => f.write_str(BODY_TOO_BIG),
            Fragment::Html(html) => f.write_str(html),
            Fragment::Failed(section, _) => f.write_str(section.error_placeholder()),
        }
    }
}

/// Renders the start line of a message followed by a table of its headers.
///
/// `Authorization` is left out. Any value that cannot be read as visible ASCII
/// fails the whole section, so nothing is rendered partially.
pub fn headers<M: HttpMessage>(message: Option<&M>) -> Fragment {
    let Some(message) = message else {
        return Fragment::Empty;
    };

    match start_line_and_table(message) {
        Ok(html) => Fragment::Html(html),
        Err(e) => {
            warn!(cause = %e, "failed to read message headers");
            Fragment::Failed(Section::Headers, e)
        }
    }
}

fn start_line_and_table<M: HttpMessage>(message: &M) -> Result<String, InspectError> {
    let mut html = escape(&message.start_line()?).into_owned();
    html.push_str(&header_table(message.headers())?);
    Ok(html)
}

/// Renders one table row per header value, in stored order.
pub fn header_table(headers: &HeaderMap) -> Result<String, InspectError> {
    let mut table = String::from("<table>");
    for (name, value) in headers.iter().filter(|(name, _)| !is_redacted(name)) {
        let value = value.to_str().map_err(|e| InspectError::invalid_header_value(name, e))?;
        table.push_str("<tr><td>");
        table.push_str(&escape(name.as_str()));
        table.push_str(": </td><td>");
        table.push_str(&escape(value));
        table.push_str("</td></tr>");
    }
    table.push_str("</table>");
    Ok(table)
}

/// Renders the body of a message.
///
/// Bodies of unknown size or over the configured limit are never read. JSON
/// bodies are dumped into a `<pre>` block; anything else, including JSON that
/// does not parse, is rendered as plain text.
pub fn body<M: HttpMessage>(message: Option<&M>, config: &InspectorConfig) -> Fragment {
    let Some(message) = message else {
        return Fragment::Empty;
    };

    let size = message.body().size();
    if !config.accepts_body_size(size) {
        debug!(?size, limit = config.max_body_size_limit(), "skip rendering message body");
        return Fragment::TooBig { size };
    }

    match render_body(message.headers(), message.body(), config.dump_depth_limit()) {
        Ok(html) => Fragment::Html(html),
        Err(e) => {
            warn!(cause = %e, "failed to read message body");
            Fragment::Failed(Section::Body, e)
        }
    }
}

fn render_body<B>(headers: &HeaderMap, body: &B, dump_depth: usize) -> Result<String, InspectError>
where
    B: MessageBody + ?Sized,
{
    let json = is_json(headers)?;
    let content = body.read_all()?;

    if json {
        match serde_json::from_slice::<Value>(&content) {
            Ok(value) => return Ok(format!("<pre>{}</pre>", dump(&value, dump_depth))),
            Err(e) => debug!(cause = %e, "json body does not parse, rendering as text"),
        }
    }

    Ok(plain_text(&String::from_utf8_lossy(&content)))
}

/// Returns true if any `Content-Type` value mentions `application/json`, ignoring case.
pub fn is_json(headers: &HeaderMap) -> Result<bool, InspectError> {
    let essence = mime::APPLICATION_JSON.essence_str();
    let mut json = false;
    for value in &headers.get_all(CONTENT_TYPE) {
        let value = value.to_str().map_err(InspectError::invalid_content_type)?;
        json |= value.to_ascii_lowercase().contains(essence);
    }
    Ok(json)
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, SET_COOKIE};
    use http::{HeaderValue, Request, Response, StatusCode};
    use mockall::mock;

    use super::*;
    use crate::error::BodyError;
    use crate::message::Unsized;

    mock! {
        Body {}

        impl MessageBody for Body {
            fn size(&self) -> Option<u64>;
            fn read_all(&self) -> Result<Bytes, BodyError>;
        }
    }

    fn config() -> InspectorConfig {
        InspectorConfig::default()
    }

    #[test]
    fn absent_message() {
        let none: Option<&Response<()>> = None;
        assert!(headers(none).is_empty());
        assert_eq!(body(none, &config()).to_string(), "Message empty.");
    }

    #[test]
    fn request_headers_table() {
        let request = Request::get("/search?q=rust")
            .header(ACCEPT, "text/html")
            .header(SET_COOKIE, "a=1")
            .header(SET_COOKIE, "b=2")
            .body(())
            .unwrap();

        assert_eq!(
            headers(Some(&request)).into_html(),
            "GET /search?q=rust HTTP/1.1<table>\
             <tr><td>accept: </td><td>text/html</td></tr>\
             <tr><td>set-cookie: </td><td>a=1</td></tr>\
             <tr><td>set-cookie: </td><td>b=2</td></tr>\
             </table>"
        );
    }

    #[test]
    fn authorization_is_redacted() {
        let request = Request::get("/")
            .header(AUTHORIZATION, "Bearer s3cr3t")
            .header(AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .header("proxy-authorization", "Basic cHJveHk=")
            .body(())
            .unwrap();

        let html = headers(Some(&request)).into_html();
        assert!(!html.to_ascii_lowercase().contains("<td>authorization"));
        assert!(!html.contains("s3cr3t"));
        assert!(!html.contains("dXNlcjpwYXNz"));
        assert!(html.contains("<tr><td>proxy-authorization: </td><td>Basic cHJveHk=</td></tr>"));
    }

    #[test]
    fn unreadable_header_value_fails_whole_section() {
        let mut response = Response::new(());
        response.headers_mut().insert(ACCEPT, HeaderValue::from_static("text/plain"));
        response.headers_mut().insert("x-name", HeaderValue::from_bytes(b"caf\xe9").unwrap());

        let fragment = headers(Some(&response));
        assert!(matches!(fragment.error(), Some(InspectError::InvalidHeaderValue { .. })));
        assert_eq!(fragment.into_html(), "Error reading message headers.");
    }

    #[test]
    fn header_values_are_escaped() {
        let response = Response::builder().header("x-note", "<i>&</i>").body(()).unwrap();
        let html = headers(Some(&response)).into_html();
        assert!(html.contains("<td>&lt;i&gt;&amp;&lt;/i&gt;</td>"));
    }

    #[test]
    fn unknown_size_is_too_big() {
        let response = Response::builder().header(CONTENT_TYPE, "text/plain").body(Unsized::new("tiny")).unwrap();
        let fragment = body(Some(&response), &config());
        assert!(matches!(fragment, Fragment::TooBig { size: None }));
        assert_eq!(fragment.to_string(), "Message body is too big to display.");
    }

    #[test]
    fn oversized_body_is_never_read() {
        let mut mock = MockBody::new();
        mock.expect_size().return_const(Some(1_048_577));
        mock.expect_read_all().never();

        let response = Response::builder().header(CONTENT_TYPE, "application/json").body(mock).unwrap();
        assert_eq!(body(Some(&response), &config()).into_html(), "Message body is too big to display.");
    }

    #[test]
    fn body_at_limit_is_rendered() {
        let config = config().max_body_size(5);
        let response = Response::new("hello");
        assert_eq!(body(Some(&response), &config).into_html(), "hello");

        let response = Response::new("hello!");
        assert!(matches!(body(Some(&response), &config), Fragment::TooBig { size: Some(6) }));
    }

    #[test]
    fn failing_body_read() {
        let mut mock = MockBody::new();
        mock.expect_size().return_const(Some(12));
        mock.expect_read_all().returning(|| Err(BodyError::stream("connection reset")));

        let response = Response::builder().status(StatusCode::OK).body(mock).unwrap();
        let fragment = body(Some(&response), &config());
        assert!(matches!(fragment.error(), Some(InspectError::Body { .. })));
        assert_eq!(fragment.into_html(), "Error reading message body.");
    }

    #[test]
    fn unreadable_content_type_fails_body() {
        let mut response = Response::new("{}");
        response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_bytes(b"application/json; x=\xff").unwrap());

        let fragment = body(Some(&response), &config());
        assert!(matches!(fragment.error(), Some(InspectError::InvalidContentType { .. })));
        assert_eq!(fragment.into_html(), "Error reading message body.");
    }

    #[test]
    fn json_body_is_dumped() {
        let response =
            Response::builder().header(CONTENT_TYPE, "application/json; charset=utf-8").body(r#"{"a":1}"#).unwrap();
        assert_eq!(body(Some(&response), &config()).into_html(), "<pre>object {\n  \"a\": 1\n}</pre>");
    }

    #[test]
    fn json_detection_ignores_case_and_position() {
        let mut headers = HeaderMap::new();
        headers.append(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.append(CONTENT_TYPE, HeaderValue::from_static("Application/JSON"));
        assert!(is_json(&headers).unwrap());

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/problem+json"));
        assert!(!is_json(&headers).unwrap());
        assert!(!is_json(&HeaderMap::new()).unwrap());
    }

    #[test]
    fn malformed_json_falls_back_to_text() {
        let response = Response::builder().header(CONTENT_TYPE, "application/json").body("{\"a\": <b>1</b>").unwrap();
        assert_eq!(body(Some(&response), &config()).into_html(), "{\"a\": 1");
    }

    #[test]
    fn html_body_as_plain_text() {
        let response = Response::builder().header(CONTENT_TYPE, "text/html").body("<b>Hi &amp; Bye</b>").unwrap();
        assert_eq!(body(Some(&response), &config()).into_html(), "Hi & Bye");
    }

    #[test]
    fn body_without_content_type() {
        let request = Request::post("/form").body(Bytes::from_static(b"name=J%C3%BCrgen+K")).unwrap();
        assert_eq!(body(Some(&request), &config()).into_html(), "name=Jürgen K");
    }

    #[test]
    fn dump_depth_follows_config() {
        let response = Response::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(r#"{"a":{"b":1}}"#)
            .unwrap();
        let config = config().dump_depth(1);
        assert_eq!(body(Some(&response), &config).into_html(), "<pre>object {\n  \"a\": object:1 { … }\n}</pre>");
    }
}
