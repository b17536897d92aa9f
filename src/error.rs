// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Decode(DecodeError),
    Catalog(String),
}

/// Failures while turning encoded demo fields into displayable source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Percent-decoded bytes are not valid UTF-8.
    InvalidUtf8,

    /// Highlighted markup could not be parsed (raw parser message).
    Markup(String),
}

impl DecodeError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DecodeError::InvalidUtf8 => "error-decode-invalid-utf8",
            DecodeError::Markup(_) => "error-decode-markup",
        }
    }
}

impl Error {
    /// Returns the i18n message key explaining why a demo was skipped.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Decode(err) => err.i18n_key(),
            Error::Io(_) => "error-demo-unreadable",
            Error::Config(_) | Error::Catalog(_) => "error-demo-invalid",
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidUtf8 => write!(f, "Decoded source is not valid UTF-8"),
            DecodeError::Markup(msg) => write!(f, "Malformed highlighted markup: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
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

impl From<quick_xml::Error> for DecodeError {
    fn from(err: quick_xml::Error) -> Self {
        DecodeError::Markup(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
