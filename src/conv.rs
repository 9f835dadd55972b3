use core::fmt;

/// An error returned when parsing a raw bit pattern from
/// a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    kind: ErrorKind,
}

impl ParseError {
    pub(crate) const fn empty() -> Self {
        Self {
            kind: ErrorKind::Empty,
        }
    }

    pub(crate) const fn invalid(_reason: &'static str) -> Self {
        Self {
            kind: ErrorKind::Invalid,
        }
    }
}

#[cfg(any(feature = "std", test))]
impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ErrorKind {
    Empty,
    Invalid,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse bits from empty string"),
            Self::Invalid => write!(f, "invalid hexadecimal bit pattern"),
        }
    }
}
