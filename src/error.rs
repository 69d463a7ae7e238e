// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    /// Content store request or response failure.
    Content(ContentError),
    /// Bitmap decoding or download failure.
    Image(String),
}

/// Failure modes of the content store query.
///
/// None of these reach the user: the loader logs them and keeps rendering
/// the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// The request never produced a response (DNS, TLS, connection reset, timeout).
    Transport(String),

    /// The store answered with a non-success status.
    Status(u16),

    /// The body was not a valid query envelope.
    Malformed(String),

    /// The configured endpoint could not be turned into a URL.
    InvalidEndpoint(String),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Transport(msg) => write!(f, "transport failure: {}", msg),
            ContentError::Status(code) => write!(f, "HTTP status {}", code),
            ContentError::Malformed(msg) => write!(f, "malformed response: {}", msg),
            ContentError::InvalidEndpoint(msg) => write!(f, "invalid endpoint: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Content(e) => write!(f, "Content Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ContentError> for Error {
    fn from(err: ContentError) -> Self {
        Error::Content(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Content(ContentError::Malformed(err.to_string()))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Error::Content(ContentError::Status(status.as_u16())),
            None => Error::Content(ContentError::Transport(err.to_string())),
        }
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn content_status_error_display() {
        let err: Error = ContentError::Status(503).into();
        assert_eq!(format!("{}", err), "Content Error: HTTP status 503");
    }

    #[test]
    fn json_error_becomes_malformed_content() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(
            err,
            Error::Content(ContentError::Malformed(_))
        ));
    }

    #[test]
    fn toml_error_becomes_config_error() {
        let toml_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
