//! HTML diagnostics for HTTP exchanges
//!
//! This crate renders an outbound HTTP request and the response received for it
//! into HTML blocks meant for a debugging UI. It performs no I/O: the exchange is
//! done elsewhere, and the messages are handed over once they are complete.
//!
//! # Features
//!
//! - Works with plain `http` crate messages
//! - Start line plus a table of headers, one row per value, in stored order
//! - The `Authorization` header is never rendered
//! - Bodies of unknown size or above 1 MiB are never read
//! - JSON bodies are dumped as a depth-bounded structure
//! - Markup bodies are reduced to plain text
//! - Rendering never fails: read errors become fixed placeholder texts
//!
//! # Example
//!
//! ```
//! use http::header::{AUTHORIZATION, CONTENT_TYPE};
//! use http::{Request, Response, StatusCode};
//! use micro_inspect::{MessageInspector, TabbedPanel};
//!
//! let request = Request::post("https://api.example.com/orders")
//!     .header(CONTENT_TYPE, "application/json")
//!     .header(AUTHORIZATION, "Bearer secret")
//!     .body(r#"{"sku":"A-1"}"#)
//!     .unwrap();
//!
//! let mut inspector = MessageInspector::new(request);
//! inspector.attach_response(
//!     Response::builder()
//!         .status(StatusCode::CREATED)
//!         .header(CONTENT_TYPE, "text/html")
//!         .body("<p>created</p>")
//!         .unwrap(),
//! );
//!
//! let diagnostics = inspector.render_diagnostics();
//! assert!(diagnostics.request().contains("<pre>object {\n  \"sku\": \"A-1\"\n}</pre>"));
//! assert!(!diagnostics.request().contains("secret"));
//! assert!(diagnostics.response().ends_with("<h3>HTTP-Body</h3>created</div>"));
//!
//! let mut panel = TabbedPanel::new();
//! inspector.create_debug_widget(&mut panel);
//! assert_eq!(panel.tabs().len(), 2);
//! ```
//!
//! # Architecture
//!
//! - [`inspector`]: the [`MessageInspector`] holding the request and response
//! - [`message`]: the [`MessageBody`] contract and the message accessors
//! - [`render`]: header and body rendering into [`Fragment`]s
//! - [`dump`]: the depth-bounded JSON dump
//! - [`text`]: tag stripping, entity and percent decoding, escaping
//! - [`panel`]: the [`DebugHost`] seam towards the hosting UI
//! - [`config`]: limits and placeholder texts
//!
//! # Error Handling
//!
//! Failures are kept typed until the very end: [`render`] produces
//! [`Fragment::Failed`] carrying an [`InspectError`], and only displaying the
//! fragment turns it into `Error reading message headers.` or
//! `Error reading message body.`. Every absorbed error is logged through
//! `tracing` at `warn` level.

pub mod config;
pub mod dump;
pub mod inspector;
pub mod message;
pub mod panel;
pub mod render;
pub mod text;

mod error;

pub use config::InspectorConfig;
pub use error::{BodyError, InspectError};
pub use inspector::{Diagnostics, MessageInspector};
pub use message::{Buffered, HttpMessage, MessageBody, Unsized};
pub use panel::{DebugHost, DebugTab, TabbedPanel};
pub use render::{Fragment, Section};
