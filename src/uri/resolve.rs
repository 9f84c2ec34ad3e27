use bytes::Bytes;

use super::{Url, resolve_path};

impl Url {
    /// Resolve a URI reference to an absolute URI from `self` as the base URI ([RFC3986 §5.2]).
    ///
    /// The reference may be relative or absolute. If the reference is absolute, the base is
    /// ignored and the result is a copy of the reference with dot segments removed.
    ///
    /// A new [`Url`] is always returned, even if it is equal to either the base or the reference.
    ///
    /// ```
    /// # use byteuri::Url;
    /// let base = Url::parse("http://a/b/c/d;p?q").unwrap();
    ///
    /// let url = base.resolve_reference(&Url::parse("../g").unwrap());
    /// assert_eq!(url.to_bytes(), "http://a/b/g");
    ///
    /// let url = base.resolve_reference(&Url::parse("?y").unwrap());
    /// assert_eq!(url.to_bytes(), "http://a/b/c/d;p?y");
    /// ```
    ///
    /// [RFC3986 §5.2]: <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2>
    pub fn resolve_reference(&self, reference: &Url) -> Url {
        let mut url = reference.clone();

        if reference.scheme.is_empty() {
            url.scheme = self.scheme.clone();
        }

        if !reference.scheme.is_empty() || !reference.host.is_empty() || reference.user.is_some() {
            // absolute URI or network path reference
            url.path = resolve_path(&reference.path, &[]);
            return url;
        }

        if !reference.opaque.is_empty() {
            url.user = None;
            url.host = Bytes::new();
            url.path = Bytes::new();
            return url;
        }

        // fragment is only inherited along with the query
        if reference.path.is_empty() && reference.raw_query.is_empty() {
            url.raw_query = self.raw_query.clone();
            if reference.fragment.is_empty() {
                url.fragment = self.fragment.clone();
            }
        }

        // absolute path or relative path reference
        url.host = self.host.clone();
        url.user = self.user.clone();
        url.path = resolve_path(&self.path, &reference.path);
        url
    }
}
