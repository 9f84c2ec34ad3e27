/// `ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// `$ & + , / : ; = ? @`
pub const fn is_reserved(byte: u8) -> bool {
    matches!(byte, b'$' | b'&' | b'+' | b',' | b'/' | b':' | b';' | b'=' | b'?' | b'@')
}

/// Scheme byte after the leading `ALPHA`.
pub const fn is_scheme(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.')
}

pub const fn unhex(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

pub const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Find the first `delim`.
pub const fn find(bytes: &[u8], delim: u8) -> Option<usize> {
    let mut state = bytes;
    while let [byte, rest @ ..] = state {
        if *byte == delim {
            return Some(bytes.len() - state.len());
        }
        state = rest;
    }
    None
}

/// Find the last `delim`.
pub const fn rfind(bytes: &[u8], delim: u8) -> Option<usize> {
    let mut state = bytes;
    while let [lead @ .., byte] = state {
        if *byte == delim {
            return Some(lead.len());
        }
        state = lead;
    }
    None
}

/// Find the first `&` or `;`.
pub const fn find_pair_delim(bytes: &[u8]) -> Option<usize> {
    let mut state = bytes;
    while let [byte, rest @ ..] = state {
        if matches!(byte, b'&' | b';') {
            return Some(bytes.len() - state.len());
        }
        state = rest;
    }
    None
}

#[test]
fn test_find() {
    assert_eq!(find(b"", b'@'), None);
    assert_eq!(find(b"example.com", b'@'), None);
    assert_eq!(find(b"a@b@c", b'@'), Some(1));
    assert_eq!(rfind(b"a@b@c", b'@'), Some(3));
    assert_eq!(rfind(b"j@ne:password@google.com", b'@'), Some(13));
    assert_eq!(rfind(b"", b'/'), None);
    assert_eq!(find_pair_delim(b"a=1;b=2&c=3"), Some(3));
    assert_eq!(find_pair_delim(b"a=1"), None);
}

#[test]
fn test_unhex() {
    assert_eq!(unhex(b'0'), Some(0));
    assert_eq!(unhex(b'a'), Some(10));
    assert_eq!(unhex(b'F'), Some(15));
    assert_eq!(unhex(b'g'), None);
}
