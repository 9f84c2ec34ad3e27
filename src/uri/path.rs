use bytes::{BufMut, Bytes, BytesMut};

use super::matches;

/// Merge `reference` path into `base` path and remove dot segments ([RFC3986 §5.2]).
///
/// ```
/// use byteuri::uri::resolve_path;
///
/// assert_eq!(resolve_path(b"a/b/c", b"../d"), "/a/d");
/// assert_eq!(resolve_path(b"a/b", b"."), "/a/");
/// assert_eq!(resolve_path(b"a/b", b".."), "/");
/// ```
///
/// Excess `..` segments are dropped, resolution never fails.
///
/// [RFC3986 §5.2]: <https://datatracker.ietf.org/doc/html/rfc3986#section-5.2>
pub fn resolve_path(base: &[u8], reference: &[u8]) -> Bytes {
    let mut merged = Vec::with_capacity(base.len() + reference.len());

    match reference.first() {
        None => merged.extend_from_slice(base),
        Some(b'/') => merged.extend_from_slice(reference),
        Some(_) => {
            let dir = matches::rfind(base, b'/').map(|nth| nth + 1).unwrap_or_default();
            merged.extend_from_slice(&base[..dir]);
            merged.extend_from_slice(reference);
        },
    }

    if merged.is_empty() {
        return Bytes::new();
    }

    let mut segments: Vec<&[u8]> = Vec::new();
    let mut last: &[u8] = &[];

    for segment in merged.split(|&b| b == b'/') {
        match segment {
            b"." => { },
            b".." => {
                segments.pop();
            },
            _ => segments.push(segment),
        }
        last = segment;
    }

    if matches!(last, b"." | b"..") {
        // add final slash to the joined path
        segments.push(&[]);
    }

    let mut buf = BytesMut::with_capacity(merged.len() + 1);
    buf.put_u8(b'/');

    let mut segments = segments.into_iter().skip_while(|segment| segment.is_empty()).peekable();
    while let Some(segment) = segments.next() {
        buf.put_slice(segment);
        if segments.peek().is_some() {
            buf.put_u8(b'/');
        }
    }

    buf.freeze()
}
