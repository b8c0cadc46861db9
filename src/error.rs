/// Errors that can occur while parsing a query component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The URL carries no query component at all (not even an empty one)
    NoQuery,
    /// Invalid percent encoding (malformed `%XX` escape or non-UTF-8 result)
    InvalidPercentEncoding,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::NoQuery => "URL has no query component",
            Self::InvalidPercentEncoding => "Invalid percent encoding",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for query parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
