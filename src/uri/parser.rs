use bytes::Bytes;

use super::{Encoding, ErrorKind, UriError, Url, Userinfo, matches, unescape};
use crate::log;

const OP_PARSE: &str = "parse";

impl Url {
    /// Parse URL by copying from slice.
    ///
    /// The input may be relative or absolute, and may contain a `#fragment`.
    ///
    /// If the input is owned [`Bytes`], consider using [`Url::parse_from`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid URI reference.
    #[inline]
    pub fn parse<A: AsRef<[u8]>>(bytes: A) -> Result<Self, UriError> {
        parse_reference(Bytes::copy_from_slice(bytes.as_ref()))
    }

    /// Parse URL from [`Bytes`].
    ///
    /// ```
    /// # use byteuri::Url;
    /// # use bytes::Bytes;
    /// let bytes = Bytes::from_static(b"http://user@example.com/users/all?page=420#top");
    /// let url = Url::parse_from(bytes).unwrap();
    /// assert_eq!(url.scheme, "http");
    /// assert_eq!(url.user.unwrap().username(), b"user");
    /// assert_eq!(url.host, "example.com");
    /// assert_eq!(url.path, "/users/all");
    /// assert_eq!(url.raw_query, "page=420");
    /// assert_eq!(url.fragment, "top");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid URI reference.
    #[inline]
    pub fn parse_from(bytes: impl Into<Bytes>) -> Result<Self, UriError> {
        parse_reference(bytes.into())
    }

    /// Parse URL received in a request by copying from slice.
    ///
    /// The input is interpreted only as an absolute URI or an absolute path, and is assumed to
    /// not contain a `#fragment` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is empty, relative, or otherwise invalid.
    #[inline]
    pub fn parse_request_uri<A: AsRef<[u8]>>(bytes: A) -> Result<Self, UriError> {
        parse_request(Bytes::copy_from_slice(bytes.as_ref()))
    }

    /// Parse URL received in a request from [`Bytes`].
    ///
    /// See [`Url::parse_request_uri`] for more details.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is empty, relative, or otherwise invalid.
    #[inline]
    pub fn parse_request_uri_from(bytes: impl Into<Bytes>) -> Result<Self, UriError> {
        parse_request(bytes.into())
    }

    /// Parse a URL in the context of `self`.
    ///
    /// The input may be relative or absolute. The result is the same as
    /// [`Url::resolve_reference`] with the parsed input.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the input is not a valid URI reference.
    pub fn parse_relative<A: AsRef<[u8]>>(&self, bytes: A) -> Result<Self, UriError> {
        let reference = Self::parse(bytes)?;
        Ok(self.resolve_reference(&reference))
    }
}

// ===== Logic =====

fn parse_reference(value: Bytes) -> Result<Url, UriError> {
    let (rest, fragment) = split(&value, b'#');

    let mut url = parse(rest, false).map_err(|err| wrap(&value, err))?;

    if !fragment.is_empty() {
        url.fragment = unescape(&fragment, Encoding::Fragment).map_err(|err| wrap(&value, err))?;
    }

    log::trace!("parsed url {url:?}");

    Ok(url)
}

fn parse_request(value: Bytes) -> Result<Url, UriError> {
    parse(value.clone(), true).map_err(|err| wrap(&value, err))
}

fn wrap(value: &Bytes, kind: impl Into<ErrorKind>) -> UriError {
    let err = UriError::new(OP_PARSE, value.clone(), kind);
    log::debug!("{err}");
    err
}

/// Split URI components, in request mode only absolute URI or absolute path are allowed.
fn parse(value: Bytes, via_request: bool) -> Result<Url, ErrorKind> {
    if via_request && value.is_empty() {
        return Err(ErrorKind::EmptyInput);
    }

    let mut url = Url::default();

    if value == b"*"[..] {
        url.path = value;
        return Ok(url);
    }

    // leading "http:", "mailto:", etc, cannot contain escaped characters
    let (scheme, rest) = split_scheme(&value)?;
    url.scheme = lowercase(scheme);

    let (mut rest, raw_query) = split(&rest, b'?');
    url.raw_query = raw_query;

    if !rest.starts_with(b"/") {
        if !url.scheme.is_empty() {
            // rootless paths are considered opaque
            url.opaque = rest;
            return Ok(url);
        }
        if via_request {
            return Err(ErrorKind::InvalidRequestUri);
        }
    }

    if rest.starts_with(b"//")
        && (!url.scheme.is_empty() || (!via_request && !rest.starts_with(b"///")))
    {
        let authority = rest.slice(2..);
        let (authority, path) = match matches::find(&authority, b'/') {
            Some(nth) => (authority.slice(..nth), authority.slice(nth..)),
            None => (authority, Bytes::new()),
        };

        let (user, host) = parse_authority(authority)?;
        if matches::find(&host, b'%').is_some() {
            return Err(ErrorKind::PercentEncodingInHost);
        }

        url.user = user;
        url.host = host;
        rest = path;
    }

    url.path = unescape(&rest, Encoding::Path)?;

    Ok(url)
}

/// Returns `(scheme, rest)`.
///
/// If the bytes is not in the form of `scheme:rest`, returns empty scheme and the whole bytes.
fn split_scheme(value: &Bytes) -> Result<(Bytes, Bytes), ErrorKind> {
    let mut state = &value[..];

    while let [byte, rest @ ..] = state {
        let nth = value.len() - state.len();
        match *byte {
            b':' if nth == 0 => return Err(ErrorKind::MissingScheme),
            b':' => return Ok((value.slice(..nth), value.slice(nth + 1..))),
            byte if byte.is_ascii_alphabetic() => { },
            byte if nth != 0 && matches::is_scheme(byte) => { },
            // invalid character, so there is no valid scheme
            _ => break,
        }
        state = rest;
    }

    Ok((Bytes::new(), value.clone()))
}

/// Returns `(userinfo, host)`.
fn parse_authority(authority: Bytes) -> Result<(Option<Userinfo>, Bytes), ErrorKind> {
    // the last '@', username and password may contain unescaped '@'
    let Some(nth) = matches::rfind(&authority, b'@') else {
        return Ok((None, authority));
    };

    let userinfo = authority.slice(..nth);
    let host = authority.slice(nth + 1..);

    let user = match matches::find(&userinfo, b':') {
        None => Userinfo::new(unescape(&userinfo, Encoding::Userinfo)?),
        Some(col) => Userinfo::with_password(
            unescape(&userinfo.slice(..col), Encoding::Userinfo)?,
            unescape(&userinfo.slice(col + 1..), Encoding::Userinfo)?,
        ),
    };

    Ok((Some(user), host))
}

/// Split at the first `delim`, the delimiter is excluded.
///
/// If `delim` is not found, returns the whole bytes and empty bytes.
fn split(value: &Bytes, delim: u8) -> (Bytes, Bytes) {
    match matches::find(value, delim) {
        Some(nth) => (value.slice(..nth), value.slice(nth + 1..)),
        None => (value.clone(), Bytes::new()),
    }
}

fn lowercase(scheme: Bytes) -> Bytes {
    if scheme.iter().any(u8::is_ascii_uppercase) {
        Bytes::from(scheme.to_ascii_lowercase())
    } else {
        scheme
    }
}
