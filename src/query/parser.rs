use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::Values;
use crate::log;
use crate::uri::{Encoding, EscapeError, escape_into, matches, unescape};

/// Parse URL encoded query string by copying from slice.
///
/// Both `&` and `;` are accepted as pair separator.
///
/// Decoding continues after an invalid pair. The returned [`Values`] always contains all the
/// valid pairs found, and the error describes the first decoding error encountered, if any.
///
/// ```
/// let (values, err) = byteuri::parse_query("a=1&a=2;b=%zz&c");
/// assert_eq!(values.get_all("a"), ["1", "2"]);
/// assert!(!values.contains_key("b"));
/// assert_eq!(values.get("c"), b"");
/// assert_eq!(err.unwrap().fragment(), b"%zz");
/// ```
pub fn parse_query<A: AsRef<[u8]>>(query: A) -> (Values, Option<EscapeError>) {
    parse_query_from(Bytes::copy_from_slice(query.as_ref()))
}

/// Parse URL encoded query string from [`Bytes`].
///
/// See [`parse_query`] for more details.
pub fn parse_query_from(query: impl Into<Bytes>) -> (Values, Option<EscapeError>) {
    let mut values = Values::new();
    let err = parse_into(&mut values, query.into());
    (values, err)
}

fn parse_into(values: &mut Values, mut query: Bytes) -> Option<EscapeError> {
    let mut first_err = None;

    while !query.is_empty() {
        let pair = match matches::find_pair_delim(&query) {
            Some(nth) => {
                let pair = query.split_to(nth);
                query.advance(1);
                pair
            },
            None => std::mem::take(&mut query),
        };

        if pair.is_empty() {
            continue;
        }

        let (key, value) = match matches::find(&pair, b'=') {
            Some(nth) => (pair.slice(..nth), pair.slice(nth + 1..)),
            None => (pair, Bytes::new()),
        };

        let decoded = unescape(&key, Encoding::QueryComponent)
            .and_then(|key| Ok((key, unescape(&value, Encoding::QueryComponent)?)));

        match decoded {
            Ok((key, value)) => values.add(key, value),
            Err(err) => {
                log::warning!("skipping query pair: {err}");
                first_err.get_or_insert(err);
            },
        }
    }

    first_err
}

impl Values {
    /// Encode the values into URL encoded form, e.g: `bar=baz&foo=quux`, sorted by key.
    ///
    /// ```
    /// use byteuri::Values;
    ///
    /// let values = Values::from_iter([("q", "puppies"), ("oe", "utf8")]);
    /// assert_eq!(values.encode(), "oe=utf8&q=puppies");
    /// ```
    pub fn encode(&self) -> Bytes {
        let mut keys: Vec<_> = self.map.keys().collect();
        keys.sort_unstable();

        let mut buf = BytesMut::new();

        for key in keys {
            for value in &self.map[key] {
                if !buf.is_empty() {
                    buf.put_u8(b'&');
                }
                escape_into(key, Encoding::QueryComponent, &mut buf);
                buf.put_u8(b'=');
                escape_into(value, Encoding::QueryComponent, &mut buf);
            }
        }

        buf.freeze()
    }
}
