use bytes::{BufMut, Bytes, BytesMut};

use super::{Encoding, escape_into};

/// Username and password details of a URL.
///
/// [`Userinfo`] is immutable. An existing value always have a username set (potentially empty, as
/// allowed by [RFC2396]), and optionally a password.
///
/// [RFC2396]: <https://datatracker.ietf.org/doc/html/rfc2396>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Userinfo {
    username: Bytes,
    password: Bytes,
    password_set: bool,
}

impl Userinfo {
    /// Create [`Userinfo`] containing the username and no password.
    #[inline]
    pub fn new(username: impl Into<Bytes>) -> Self {
        Self {
            username: username.into(),
            password: Bytes::new(),
            password_set: false,
        }
    }

    /// Create [`Userinfo`] containing the username and password.
    ///
    /// Note that [RFC3986 §3.2.1] deprecates passing password in clear text in a URI.
    ///
    /// [RFC3986 §3.2.1]: <https://datatracker.ietf.org/doc/html/rfc3986#section-3.2.1>
    #[inline]
    pub fn with_password(username: impl Into<Bytes>, password: impl Into<Bytes>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            password_set: true,
        }
    }

    /// Returns the decoded username.
    #[inline]
    pub fn username(&self) -> &[u8] {
        &self.username
    }

    /// Returns the decoded password, or [`None`] if no password is set.
    #[inline]
    pub fn password(&self) -> Option<&[u8]> {
        self.password_set.then_some(&self.password[..])
    }

    /// Returns the encoded userinfo, `username[:password]`.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::new();
        self.write_to(&mut buf);
        buf.freeze()
    }

    pub(crate) fn write_to(&self, buf: &mut BytesMut) {
        escape_into(&self.username, Encoding::Userinfo, buf);
        if self.password_set {
            buf.put_u8(b':');
            escape_into(&self.password, Encoding::Userinfo, buf);
        }
    }
}

impl std::fmt::Display for Userinfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

#[test]
fn test_userinfo() {
    let user = Userinfo::new("user");
    assert_eq!(user.username(), b"user");
    assert_eq!(user.password(), None);
    assert_eq!(user.to_bytes(), "user");

    let user = Userinfo::with_password("user", "");
    assert_eq!(user.password(), Some(&b""[..]));
    assert_eq!(user.to_bytes(), "user:");

    let user = Userinfo::with_password("j@ne", "p:ss/w?rd");
    assert_eq!(user.to_bytes(), "j%40ne:p%3Ass%2Fw%3Frd");
    assert_eq!(user.to_string(), "j%40ne:p%3Ass%2Fw%3Frd");

    let user = Userinfo::with_password("foo:bar", "$&+,;=");
    assert_eq!(user.to_bytes(), "foo%3Abar:$&+,;=");
}
