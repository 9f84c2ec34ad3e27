//! Uniform Resource Identifier ([RFC3986])
//!
//! [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
//!
//! # Generic Syntax
//!
//! [`Url`] represents a URI reference, either absolute or relative. The general form is:
//!
//! ```not_rust
//!   scheme://[userinfo@]host/path[?query][#fragment]
//! ```
//!
//! URIs that do not start with a slash after the scheme are interpreted as:
//!
//! ```not_rust
//!   scheme:opaque[?query][#fragment]
//! ```
//!
//! # Percent Encoding
//!
//! Path and fragment are stored decoded, query and opaque data are stored raw. Serialization
//! encodes each component according to where it appears, see [`Encoding`].
use bytes::Bytes;

pub(crate) mod matches;
mod escape;
mod userinfo;
mod parser;
mod path;
mod resolve;
mod impls;
mod error;


pub use escape::{Encoding, query_escape, query_unescape};
pub use userinfo::Userinfo;
pub use path::resolve_path;
pub use error::{UriError, ErrorKind, EscapeError};

pub(crate) use escape::{escape, escape_into, unescape};

/// URI Reference ([RFC3986]).
///
/// [RFC3986]: <https://datatracker.ietf.org/doc/html/rfc3986>
///
/// # Syntax Component
///
/// ```not_rust
///   foo://user@example.com:8042/over/there?name=ferret#nose
///   \_/   \__/ \______________/\_________/ \_________/ \__/
///    |     |          |            |            |        |
/// scheme  user       host         path      raw_query fragment
///
///   urn:example:animal:ferret:nose
///   \_/ \________________________/
///    |              |
/// scheme          opaque
/// ```
///
/// Note that `path` is stored in decoded form: `/%47%6f%2f` becomes `/Go/`. It is impossible to
/// tell which slashes in the path were slashes in the raw input and which were `%2F`. When the
/// distinction matters, construct the url with `opaque` instead, e.g: `//example.com/Go%2f`.
///
/// When `opaque` is not empty, `user`, `host` and `path` are ignored on serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Url {
    /// Lowercased scheme, e.g: `http`.
    pub scheme: Bytes,
    /// Encoded opaque data.
    pub opaque: Bytes,
    /// Username and password information.
    pub user: Option<Userinfo>,
    /// Host or host:port.
    pub host: Bytes,
    /// Decoded path.
    pub path: Bytes,
    /// Encoded query values, without `?`.
    pub raw_query: Bytes,
    /// Decoded fragment, without `#`.
    pub fragment: Bytes,
}
