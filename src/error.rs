// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(HttpError),
    Session(String),
}

/// Failures reported by the GoBarber HTTP API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// The server could not be reached (DNS, refused connection, timeout).
    Unreachable(String),

    /// The server answered with a non-success status code.
    Status(u16),

    /// The response body did not match the expected shape.
    InvalidResponse(String),
}

impl HttpError {
    /// Returns the i18n message key describing this failure to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            HttpError::Unreachable(_) => "error-api-unreachable",
            HttpError::Status(401) | HttpError::Status(403) => "error-api-unauthorized",
            HttpError::Status(_) => "error-api-status",
            HttpError::InvalidResponse(_) => "error-api-invalid-response",
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Unreachable(msg) => write!(f, "Server unreachable: {}", msg),
            HttpError::Status(code) => write!(f, "Unexpected status code: {}", code),
            HttpError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Session(e) => write!(f, "Session Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Returns the i18n message key describing this failure to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Http(err) => err.i18n_key(),
            Error::Io(_) | Error::Config(_) | Error::Session(_) => "error-unexpected",
        }
    }
}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        Error::Http(err)
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

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            Error::Http(HttpError::Status(status.as_u16()))
        } else if err.is_decode() {
            Error::Http(HttpError::InvalidResponse(err.to_string()))
        } else {
            Error::Http(HttpError::Unreachable(err.to_string()))
        }
    }
}

impl From<ciborium::de::Error<std::io::Error>> for Error {
    fn from(err: ciborium::de::Error<std::io::Error>) -> Self {
        Error::Session(err.to_string())
    }
}

impl From<ciborium::ser::Error<std::io::Error>> for Error {
    fn from(err: ciborium::ser::Error<std::io::Error>) -> Self {
        Error::Session(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Programming errors in how the notification system is wired.
///
/// These indicate a bug in the calling code rather than a runtime condition,
/// so callers are not expected to recover from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    /// A notification lookup happened outside a mounted `NotificationProvider`.
    NoProvider,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::NoProvider => write!(
                f,
                "use_notifications() called outside of a mounted NotificationProvider"
            ),
        }
    }
}

impl std::error::Error for UsageError {}

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
    fn http_status_error_wraps_code() {
        let err: Error = HttpError::Status(500).into();
        assert_eq!(format!("{}", err), "HTTP Error: Unexpected status code: 500");
    }

    #[test]
    fn http_error_i18n_keys() {
        assert_eq!(HttpError::Status(401).i18n_key(), "error-api-unauthorized");
        assert_eq!(HttpError::Status(500).i18n_key(), "error-api-status");
        assert_eq!(
            HttpError::Unreachable("refused".into()).i18n_key(),
            "error-api-unreachable"
        );
        assert_eq!(
            HttpError::InvalidResponse("eof".into()).i18n_key(),
            "error-api-invalid-response"
        );
    }

    #[test]
    fn non_http_errors_use_generic_key() {
        assert_eq!(Error::Session("bad".into()).i18n_key(), "error-unexpected");
        assert_eq!(
            Error::Http(HttpError::Status(403)).i18n_key(),
            "error-api-unauthorized"
        );
    }

    #[test]
    fn usage_error_names_the_lookup() {
        let message = UsageError::NoProvider.to_string();
        assert!(message.contains("use_notifications"));
        assert!(message.contains("NotificationProvider"));
    }
}
