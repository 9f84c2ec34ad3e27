use bytes::{BufMut, Bytes, BytesMut};

use super::{Encoding, Url, escape, escape_into};
use crate::query::{Values, parse_query};

impl Url {
    /// Returns `true` if the URL has a scheme.
    #[inline]
    pub fn is_abs(&self) -> bool {
        !self.scheme.is_empty()
    }

    /// Parse [`raw_query`][Url::raw_query] into [`Values`].
    ///
    /// Pairs that fail to decode are discarded, use [`parse_query`] to inspect the error.
    pub fn query(&self) -> Values {
        let (values, _) = parse_query(&self.raw_query);
        values
    }

    /// Reassemble the URL into a valid URI.
    ///
    /// The general form of the result is one of:
    ///
    /// ```not_rust
    /// scheme:opaque?query#fragment
    /// scheme://userinfo@host/path?query#fragment
    /// ```
    ///
    /// If `opaque` is not empty, the first form is used, otherwise the second form is used, with
    /// the following rules:
    ///
    /// - if `scheme` is empty, `scheme:` is omitted
    /// - if `user` is [`None`], `userinfo@` is omitted
    /// - if `host` is empty, `host/` is omitted
    /// - if `scheme` and `host` are empty and `user` is [`None`], the entire
    ///   `scheme://userinfo@host/` is omitted
    /// - if `host` is not empty and `path` begins with a `/`, the form `host/path` does not add
    ///   its own `/`
    /// - if `raw_query` is empty, `?query` is omitted
    /// - if `fragment` is empty, `#fragment` is omitted
    ///
    /// The result is not guaranteed to be identical to the parsed input, e.g: unescaped `@` in
    /// username is escaped.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.len_hint());

        if !self.scheme.is_empty() {
            buf.put_slice(&self.scheme);
            buf.put_u8(b':');
        }

        if !self.opaque.is_empty() {
            buf.put_slice(&self.opaque);
        } else {
            if !self.scheme.is_empty() || !self.host.is_empty() || self.user.is_some() {
                buf.put_slice(b"//");
                if let Some(user) = &self.user {
                    user.write_to(&mut buf);
                    buf.put_u8(b'@');
                }
                buf.put_slice(&self.host);
            }
            if !self.host.is_empty() && !self.path.is_empty() && !self.path.starts_with(b"/") {
                buf.put_u8(b'/');
            }
            escape_into(&self.path, Encoding::Path, &mut buf);
        }

        if !self.raw_query.is_empty() {
            buf.put_u8(b'?');
            buf.put_slice(&self.raw_query);
        }

        if !self.fragment.is_empty() {
            buf.put_u8(b'#');
            escape_into(&self.fragment, Encoding::Fragment, &mut buf);
        }

        buf.freeze()
    }

    /// Returns the encoded `path?query` or `opaque?query` used in HTTP request line.
    ///
    /// ```
    /// # use byteuri::Url;
    /// let url = Url::parse("http://example.com/a%20b?q=go+language#top").unwrap();
    /// assert_eq!(url.request_target(), "/a%20b?q=go+language");
    ///
    /// let url = Url::parse("http://example.com").unwrap();
    /// assert_eq!(url.request_target(), "/");
    /// ```
    pub fn request_target(&self) -> Bytes {
        let mut buf = BytesMut::new();

        if self.opaque.is_empty() {
            let path = escape(&self.path, Encoding::Path);
            if path.is_empty() {
                buf.put_u8(b'/');
            } else {
                buf.put_slice(&path);
            }
        } else {
            // disambiguate from network path reference
            if self.opaque.starts_with(b"//") {
                buf.put_slice(&self.scheme);
                buf.put_u8(b':');
            }
            buf.put_slice(&self.opaque);
        }

        if !self.raw_query.is_empty() {
            buf.put_u8(b'?');
            buf.put_slice(&self.raw_query);
        }

        buf.freeze()
    }

    fn len_hint(&self) -> usize {
        self.scheme.len()
            + self.opaque.len()
            + self.host.len()
            + self.path.len()
            + self.raw_query.len()
            + self.fragment.len()
            + 8
    }
}

// ===== Formatting =====

impl std::fmt::Display for Url {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}
