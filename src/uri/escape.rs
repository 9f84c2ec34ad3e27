//! Percent encoding.
use bytes::{BufMut, Bytes, BytesMut};

use super::{EscapeError, matches};

/// The URI component being encoded or decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Path as a whole, ([RFC3986 §3.3]).
    ///
    /// [RFC3986 §3.3]: <https://datatracker.ietf.org/doc/html/rfc3986#section-3.3>
    Path,
    /// Username or password, ([RFC3986 §3.2.1]).
    ///
    /// [RFC3986 §3.2.1]: <https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1>
    Userinfo,
    /// Query key or value, ([RFC3986 §3.4]).
    ///
    /// [RFC3986 §3.4]: <https://datatracker.ietf.org/doc/html/rfc3986#section-3.4>
    QueryComponent,
    /// Fragment, ([RFC3986 §4.1]).
    ///
    /// [RFC3986 §4.1]: <https://datatracker.ietf.org/doc/html/rfc3986#section-4.1>
    Fragment,
}

impl Encoding {
    /// Returns `true` if `byte` should be escaped when appearing in this component.
    pub const fn should_escape(self, byte: u8) -> bool {
        if matches::is_unreserved(byte) {
            return false;
        }

        if matches::is_reserved(byte) {
            return match self {
                // the path is only manipulated as a whole, `/`, `;` and `,` stay literal
                Self::Path => byte == b'?',
                // parsing userinfo treats `:` as special
                Self::Userinfo => matches!(byte, b'@' | b'/' | b'?' | b':'),
                Self::QueryComponent => true,
                Self::Fragment => false,
            };
        }

        true
    }
}

/// Escape bytes so it can be safely placed inside a URL query.
///
/// ```
/// assert_eq!(byteuri::query_escape("one two&three"), "one+two%26three");
/// ```
#[inline]
pub fn query_escape<A: AsRef<[u8]>>(bytes: A) -> Bytes {
    escape(bytes.as_ref(), Encoding::QueryComponent)
}

/// Inverse of [`query_escape`], decode `%AB` into the byte `0xAB` and `+` into space.
///
/// # Errors
///
/// Returns [`Err`] if any `%` is not followed by two hexadecimal digits.
#[inline]
pub fn query_unescape<A: AsRef<[u8]>>(bytes: A) -> Result<Bytes, EscapeError> {
    unescape(&Bytes::copy_from_slice(bytes.as_ref()), Encoding::QueryComponent)
}

pub fn escape(bytes: &[u8], mode: Encoding) -> Bytes {
    let mut buf = BytesMut::new();
    escape_into(bytes, mode, &mut buf);
    buf.freeze()
}

pub fn escape_into(bytes: &[u8], mode: Encoding, buf: &mut BytesMut) {
    let space_as_plus = matches!(mode, Encoding::QueryComponent);

    buf.reserve(bytes.len());

    for &byte in bytes {
        if byte == b' ' && space_as_plus {
            buf.put_u8(b'+');
        } else if mode.should_escape(byte) {
            buf.put_slice(&[
                b'%',
                matches::HEX_UPPER[(byte >> 4) as usize],
                matches::HEX_UPPER[(byte & 15) as usize],
            ]);
        } else {
            buf.put_u8(byte);
        }
    }
}

/// Decode percent encoding of one component.
///
/// If there is nothing to decode, the returned [`Bytes`] shares the input buffer.
pub fn unescape(bytes: &Bytes, mode: Encoding) -> Result<Bytes, EscapeError> {
    let plus_is_space = matches!(mode, Encoding::QueryComponent);

    // validate all escapes before allocating
    let mut pct_count = 0;
    let mut has_plus = false;
    let mut state = &bytes[..];

    while let [byte, rest @ ..] = state {
        match byte {
            b'%' => match rest {
                [hi, lo, rest @ ..] if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    pct_count += 1;
                    state = rest;
                },
                _ => return Err(EscapeError::new(state)),
            },
            b'+' => {
                has_plus |= plus_is_space;
                state = rest;
            },
            _ => state = rest,
        }
    }

    if pct_count == 0 && !has_plus {
        return Ok(bytes.clone());
    }

    let mut buf = BytesMut::with_capacity(bytes.len() - 2 * pct_count);
    let mut state = &bytes[..];

    while let [byte, rest @ ..] = state {
        match (byte, rest) {
            (b'%', [hi, lo, rest @ ..]) => {
                let (Some(hi), Some(lo)) = (matches::unhex(*hi), matches::unhex(*lo)) else {
                    unreachable!("escapes are validated")
                };
                buf.put_u8(hi << 4 | lo);
                state = rest;
            },
            (b'+', _) if plus_is_space => {
                buf.put_u8(b' ');
                state = rest;
            },
            _ => {
                buf.put_u8(*byte);
                state = rest;
            },
        }
    }

    Ok(buf.freeze())
}

#[test]
fn test_should_escape() {
    use Encoding::*;

    // unreserved
    for mode in [Path, Userinfo, QueryComponent, Fragment] {
        for byte in *b"azAZ09-._~" {
            assert!(!mode.should_escape(byte), "{:?} in {mode:?}", byte as char);
        }
    }

    // userinfo
    for byte in *b":/?@" {
        assert!(Userinfo.should_escape(byte));
    }
    for byte in *b"$&+,;=" {
        assert!(!Userinfo.should_escape(byte));
    }

    assert!(Path.should_escape(b'?'));
    assert!(!Path.should_escape(b'/'));
    assert!(!Path.should_escape(b';'));
    assert!(!Path.should_escape(b'@'));

    for byte in *b"$&+,/:;=?@" {
        assert!(QueryComponent.should_escape(byte));
        assert!(!Fragment.should_escape(byte));
    }

    // everything else
    for mode in [Path, Userinfo, QueryComponent, Fragment] {
        for byte in [b' ', b'\0', b'\t', b'%', b'#', b'"', b'<', 0x80, 0xFF] {
            assert!(mode.should_escape(byte));
        }
    }
}
