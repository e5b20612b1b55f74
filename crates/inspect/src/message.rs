//! Message abstractions the inspector reads from.
//!
//! Requests and responses are plain `http` crate messages. Their bodies only
//! need to implement [`MessageBody`]: a declared size, which may be unknown, and
//! a way to read the whole content without blocking.

use std::fmt::Display;

use bytes::Bytes;
use futures::FutureExt;
use http::uri::PathAndQuery;
use http::{HeaderMap, Request, Response, Version};
use http_body::Body;
use http_body_util::{BodyExt, Empty, Full};

use crate::error::{BodyError, InspectError};

/// A message body that can be inspected.
///
/// Implementations must not block in [`read_all`](MessageBody::read_all): the
/// inspector runs inside diagnostic rendering, after the exchange is over.
pub trait MessageBody {
    /// Returns the declared size in bytes, or `None` when it is unknown.
    fn size(&self) -> Option<u64>;

    /// Reads the entire content.
    fn read_all(&self) -> Result<Bytes, BodyError>;
}

impl MessageBody for Bytes {
    fn size(&self) -> Option<u64> {
        Some(self.len() as u64)
    }

    fn read_all(&self) -> Result<Bytes, BodyError> {
        Ok(self.clone())
    }
}

impl MessageBody for String {
    fn size(&self) -> Option<u64> {
        Some(self.len() as u64)
    }

    fn read_all(&self) -> Result<Bytes, BodyError> {
        Ok(Bytes::copy_from_slice(self.as_bytes()))
    }
}

impl MessageBody for Vec<u8> {
    fn size(&self) -> Option<u64> {
        Some(self.len() as u64)
    }

    fn read_all(&self) -> Result<Bytes, BodyError> {
        Ok(Bytes::copy_from_slice(self))
    }
}

impl MessageBody for &'static str {
    fn size(&self) -> Option<u64> {
        Some(self.len() as u64)
    }

    fn read_all(&self) -> Result<Bytes, BodyError> {
        Ok(Bytes::from_static(self.as_bytes()))
    }
}

impl MessageBody for () {
    fn size(&self) -> Option<u64> {
        Some(0)
    }

    fn read_all(&self) -> Result<Bytes, BodyError> {
        Ok(Bytes::new())
    }
}

impl MessageBody for Full<Bytes> {
    fn size(&self) -> Option<u64> {
        self.size_hint().exact()
    }

    fn read_all(&self) -> Result<Bytes, BodyError> {
        collect_ready(self.clone())
    }
}

impl MessageBody for Empty<Bytes> {
    fn size(&self) -> Option<u64> {
        Some(0)
    }

    fn read_all(&self) -> Result<Bytes, BodyError> {
        Ok(Bytes::new())
    }
}

impl<B: MessageBody + ?Sized> MessageBody for Box<B> {
    fn size(&self) -> Option<u64> {
        (**self).size()
    }

    fn read_all(&self) -> Result<Bytes, BodyError> {
        (**self).read_all()
    }
}

/// Adapts any cloneable [`http_body::Body`] to [`MessageBody`].
///
/// The declared size is the body's exact size hint. Reading collects a clone
/// of the body and fails with [`BodyError::Pending`] if any frame is not
/// immediately available.
#[derive(Debug, Clone)]
pub struct Buffered<B>(B);

impl<B> Buffered<B> {
    pub fn new(body: B) -> Self {
        Self(body)
    }

    pub fn into_inner(self) -> B {
        self.0
    }
}

impl<B> MessageBody for Buffered<B>
where
    B: Body<Data = Bytes> + Clone,
    B::Error: Display,
{
    fn size(&self) -> Option<u64> {
        self.0.size_hint().exact()
    }

    fn read_all(&self) -> Result<Bytes, BodyError> {
        collect_ready(self.0.clone())
    }
}

/// Hides the declared size of a body, as a streamed payload would.
#[derive(Debug, Clone)]
pub struct Unsized<B>(B);

impl<B> Unsized<B> {
    pub fn new(body: B) -> Self {
        Self(body)
    }
}

impl<B: MessageBody> MessageBody for Unsized<B> {
    fn size(&self) -> Option<u64> {
        None
    }

    fn read_all(&self) -> Result<Bytes, BodyError> {
        self.0.read_all()
    }
}

fn collect_ready<B>(body: B) -> Result<Bytes, BodyError>
where
    B: Body<Data = Bytes>,
    B::Error: Display,
{
    match body.collect().now_or_never() {
        Some(Ok(collected)) => Ok(collected.to_bytes()),
        Some(Err(e)) => Err(BodyError::stream(e)),
        None => Err(BodyError::Pending),
    }
}

/// The parts of a request or response that get rendered.
pub trait HttpMessage {
    type Body: MessageBody;

    /// The first line of the message, without the trailing CRLF.
    fn start_line(&self) -> Result<String, InspectError>;

    fn headers(&self) -> &HeaderMap;

    fn body(&self) -> &Self::Body;
}

impl<B: MessageBody> HttpMessage for Request<B> {
    type Body = B;

    fn start_line(&self) -> Result<String, InspectError> {
        let target = self.uri().path_and_query().map_or("/", PathAndQuery::as_str);
        Ok(format!("{} {} HTTP/{}", self.method(), target, protocol_version(self.version())?))
    }

    fn headers(&self) -> &HeaderMap {
        self.headers()
    }

    fn body(&self) -> &B {
        self.body()
    }
}

impl<B: MessageBody> HttpMessage for Response<B> {
    type Body = B;

    fn start_line(&self) -> Result<String, InspectError> {
        let status = self.status();
        Ok(format!(
            "HTTP/{} {} {}",
            protocol_version(self.version())?,
            status.as_str(),
            status.canonical_reason().unwrap_or_default()
        ))
    }

    fn headers(&self) -> &HeaderMap {
        self.headers()
    }

    fn body(&self) -> &B {
        self.body()
    }
}

/// Formats a version the way it appears after `HTTP/` on the wire.
pub fn protocol_version(version: Version) -> Result<&'static str, InspectError> {
    match version {
        Version::HTTP_09 => Ok("0.9"),
        Version::HTTP_10 => Ok("1.0"),
        Version::HTTP_11 => Ok("1.1"),
        Version::HTTP_2 => Ok("2.0"),
        Version::HTTP_3 => Ok("3.0"),
        v => Err(InspectError::UnsupportedVersion(v)),
    }
}
