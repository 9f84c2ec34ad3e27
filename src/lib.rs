//! Byte Oriented URI Toolkit
//!
//! Parse, resolve and serialize URI references ([RFC3986]) stored as [`Bytes`], and encode or
//! decode `application/x-www-form-urlencoded` style query strings.
//!
//! ```
//! use byteuri::Url;
//!
//! let base = Url::parse("http://a/b/c/d;p?q").unwrap();
//! let url = base.parse_relative("../g?y#s").unwrap();
//! assert_eq!(url.to_bytes(), "http://a/b/g?y#s");
//!
//! let query = url.query();
//! assert_eq!(query.get("y"), b"");
//! ```
//!
//! [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
//! [`Bytes`]: bytes::Bytes
#![warn(missing_debug_implementations)]

mod log;

pub mod uri;
pub mod query;

pub use uri::{Url, Userinfo, UriError, ErrorKind, EscapeError, query_escape, query_unescape};
pub use query::{Values, parse_query};
