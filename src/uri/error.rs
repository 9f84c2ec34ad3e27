use bytes::Bytes;

/// A malformed percent encoding, a `%` that is not followed by two hexadecimal digits.
///
/// Holds the offending bytes, at most 3 bytes starting from the `%`.
#[derive(Clone, PartialEq, Eq)]
pub struct EscapeError {
    fragment: Bytes,
}

impl EscapeError {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        let len = bytes.len().min(3);
        Self {
            fragment: Bytes::copy_from_slice(&bytes[..len]),
        }
    }

    /// Returns the offending bytes, e.g: `%zz`.
    #[inline]
    pub fn fragment(&self) -> &[u8] {
        &self.fragment
    }
}

impl std::error::Error for EscapeError { }

impl std::fmt::Display for EscapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "invalid URL escape {:?}", String::from_utf8_lossy(&self.fragment))
    }
}

impl std::fmt::Debug for EscapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

// ===== Error Kind =====

/// The reason URI parsing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input starts with `:`.
    MissingScheme,
    /// Input is empty, only in request URI.
    EmptyInput,
    /// Request URI is neither absolute nor starts with `/`.
    InvalidRequestUri,
    /// Host contains `%`.
    PercentEncodingInHost,
    /// Malformed percent encoding in userinfo, path or fragment.
    MalformedEscape(EscapeError),
}

macro_rules! gen_error {
    ($($variant:pat => $msg:literal),* $(,)?) => {
        impl std::fmt::Display for ErrorKind {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                use ErrorKind::*;
                match self {
                    $($variant => f.write_str($msg),)*
                    MalformedEscape(err) => std::fmt::Display::fmt(err, f),
                }
            }
        }
    };
}

gen_error! {
    MissingScheme => "missing protocol scheme",
    EmptyInput => "empty url",
    InvalidRequestUri => "invalid URI for request",
    PercentEncodingInHost => "hexadecimal escape in host",
}

impl From<EscapeError> for ErrorKind {
    fn from(value: EscapeError) -> Self {
        Self::MalformedEscape(value)
    }
}

// ===== Error =====

/// An error that can occur when parsing URI.
///
/// Reports the operation and the input that caused it.
#[derive(Clone, PartialEq, Eq)]
pub struct UriError {
    op: &'static str,
    input: Bytes,
    kind: ErrorKind,
}

impl UriError {
    pub(crate) fn new(op: &'static str, input: Bytes, kind: impl Into<ErrorKind>) -> Self {
        Self {
            op,
            input,
            kind: kind.into(),
        }
    }

    /// Returns the failed operation name, e.g: `parse`.
    #[inline]
    pub const fn op(&self) -> &'static str {
        self.op
    }

    /// Returns the input that failed to parse.
    #[inline]
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// Returns the reason of the failure.
    #[inline]
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for UriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::MalformedEscape(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for UriError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.op,
            String::from_utf8_lossy(&self.input),
            self.kind
        )
    }
}

impl std::fmt::Debug for UriError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "\"{self}\"")
    }
}
